use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Certificate::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Certificate::CertificateId)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .extra("DEFAULT gen_random_uuid()".to_string()),
                    )
                    .col(ColumnDef::new(Certificate::UserId).uuid().not_null())
                    .col(ColumnDef::new(Certificate::CourseId).uuid().not_null())
                    .col(
                        ColumnDef::new(Certificate::CertificateNumber)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Certificate::RecipientName).string().not_null())
                    .col(ColumnDef::new(Certificate::CourseTitle).string().not_null())
                    .col(ColumnDef::new(Certificate::IssuedAt).timestamp().not_null())
                    .col(
                        ColumnDef::new(Certificate::CreatedAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .col(
                        ColumnDef::new(Certificate::UpdatedAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_certificate_user")
                            .from_tbl(Certificate::Table)
                            .from_col(Certificate::UserId)
                            .to_tbl(AppUser::Table)
                            .to_col(AppUser::UserId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_certificate_course")
                            .from_tbl(Certificate::Table)
                            .from_col(Certificate::CourseId)
                            .to_tbl(Course::Table)
                            .to_col(Course::CourseId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // At most one certificate per (user, course); the issuer relies on
        // this index with an insert-if-absent to close the issuance race.
        manager
            .create_index(
                Index::create()
                    .name("uq_certificate_user_course")
                    .table(Certificate::Table)
                    .col(Certificate::UserId)
                    .col(Certificate::CourseId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_certificate_user_id")
                    .table(Certificate::Table)
                    .col(Certificate::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_certificate_user_id")
                    .table(Certificate::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("uq_certificate_user_course")
                    .table(Certificate::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Certificate::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Certificate {
    Table,
    CertificateId,
    UserId,
    CourseId,
    CertificateNumber,
    RecipientName,
    CourseTitle,
    IssuedAt,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum AppUser {
    Table,
    UserId,
}

#[derive(DeriveIden)]
enum Course {
    Table,
    CourseId,
}
