use sea_orm_migration::prelude::extension::postgres::Type;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_type(
                Type::create()
                    .as_enum(Alias::new("enrollment_status_enum"))
                    .values([
                        Alias::new("pending"),
                        Alias::new("active"),
                        Alias::new("completed"),
                    ])
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Enrollment::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Enrollment::EnrollmentId)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .extra("DEFAULT gen_random_uuid()".to_string()),
                    )
                    .col(ColumnDef::new(Enrollment::UserId).uuid().not_null())
                    .col(ColumnDef::new(Enrollment::CourseId).uuid().not_null())
                    .col(
                        ColumnDef::new(Enrollment::Status)
                            .custom(Alias::new("enrollment_status_enum"))
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Enrollment::AmountPaid)
                            .decimal_len(10, 2)
                            .null(),
                    )
                    .col(ColumnDef::new(Enrollment::PaymentSessionId).string().null())
                    .col(ColumnDef::new(Enrollment::CompletedAt).timestamp().null())
                    .col(
                        ColumnDef::new(Enrollment::CreatedAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .col(
                        ColumnDef::new(Enrollment::UpdatedAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_enrollment_user")
                            .from_tbl(Enrollment::Table)
                            .from_col(Enrollment::UserId)
                            .to_tbl(AppUser::Table)
                            .to_col(AppUser::UserId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_enrollment_course")
                            .from_tbl(Enrollment::Table)
                            .from_col(Enrollment::CourseId)
                            .to_tbl(Course::Table)
                            .to_col(Course::CourseId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One enrollment per (user, course)
        manager
            .create_index(
                Index::create()
                    .name("uq_enrollment_user_course")
                    .table(Enrollment::Table)
                    .col(Enrollment::UserId)
                    .col(Enrollment::CourseId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(UserProgress::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserProgress::ProgressId)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .extra("DEFAULT gen_random_uuid()".to_string()),
                    )
                    .col(ColumnDef::new(UserProgress::UserId).uuid().not_null())
                    .col(ColumnDef::new(UserProgress::CourseId).uuid().not_null())
                    .col(ColumnDef::new(UserProgress::SectionId).uuid().not_null())
                    .col(
                        ColumnDef::new(UserProgress::Completed)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(UserProgress::CompletedAt).timestamp().null())
                    .col(
                        ColumnDef::new(UserProgress::CreatedAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .col(
                        ColumnDef::new(UserProgress::UpdatedAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_progress_user")
                            .from_tbl(UserProgress::Table)
                            .from_col(UserProgress::UserId)
                            .to_tbl(AppUser::Table)
                            .to_col(AppUser::UserId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_progress_section")
                            .from_tbl(UserProgress::Table)
                            .from_col(UserProgress::SectionId)
                            .to_tbl(CourseSection::Table)
                            .to_col(CourseSection::SectionId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Conflict target for the progress upsert
        manager
            .create_index(
                Index::create()
                    .name("uq_user_progress_user_section")
                    .table(UserProgress::Table)
                    .col(UserProgress::UserId)
                    .col(UserProgress::SectionId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_user_progress_user_course")
                    .table(UserProgress::Table)
                    .col(UserProgress::UserId)
                    .col(UserProgress::CourseId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_user_progress_user_course")
                    .table(UserProgress::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("uq_user_progress_user_section")
                    .table(UserProgress::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(UserProgress::Table).to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("uq_enrollment_user_course")
                    .table(Enrollment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Enrollment::Table).to_owned())
            .await?;

        manager
            .drop_type(Type::drop().name(Alias::new("enrollment_status_enum")).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Enrollment {
    Table,
    EnrollmentId,
    UserId,
    CourseId,
    Status,
    AmountPaid,
    PaymentSessionId,
    CompletedAt,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum UserProgress {
    Table,
    ProgressId,
    UserId,
    CourseId,
    SectionId,
    Completed,
    CompletedAt,
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

#[derive(DeriveIden)]
enum CourseSection {
    Table,
    SectionId,
}
