use sea_orm_migration::prelude::extension::postgres::Type;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Quiz::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Quiz::QuizId)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .extra("DEFAULT gen_random_uuid()".to_string()),
                    )
                    .col(ColumnDef::new(Quiz::SectionId).uuid().not_null())
                    .col(ColumnDef::new(Quiz::Question).text().not_null())
                    .col(ColumnDef::new(Quiz::Options).custom(Alias::new("jsonb")).not_null())
                    .col(ColumnDef::new(Quiz::CorrectAnswer).integer().not_null())
                    .col(
                        ColumnDef::new(Quiz::OrderIndex)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Quiz::CreatedAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .col(
                        ColumnDef::new(Quiz::UpdatedAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_quiz_section")
                            .from_tbl(Quiz::Table)
                            .from_col(Quiz::SectionId)
                            .to_tbl(CourseSection::Table)
                            .to_col(CourseSection::SectionId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_quiz_section_id")
                    .table(Quiz::Table)
                    .col(Quiz::SectionId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(QuizResponse::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(QuizResponse::ResponseId)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .extra("DEFAULT gen_random_uuid()".to_string()),
                    )
                    .col(ColumnDef::new(QuizResponse::UserId).uuid().not_null())
                    .col(ColumnDef::new(QuizResponse::QuizId).uuid().not_null())
                    .col(ColumnDef::new(QuizResponse::SelectedAnswer).integer().not_null())
                    .col(ColumnDef::new(QuizResponse::IsCorrect).boolean().not_null())
                    .col(
                        ColumnDef::new(QuizResponse::CreatedAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .col(
                        ColumnDef::new(QuizResponse::UpdatedAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_quiz_response_user")
                            .from_tbl(QuizResponse::Table)
                            .from_col(QuizResponse::UserId)
                            .to_tbl(AppUser::Table)
                            .to_col(AppUser::UserId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_quiz_response_quiz")
                            .from_tbl(QuizResponse::Table)
                            .from_col(QuizResponse::QuizId)
                            .to_tbl(Quiz::Table)
                            .to_col(Quiz::QuizId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Conflict target for the response upsert
        manager
            .create_index(
                Index::create()
                    .name("uq_quiz_response_user_quiz")
                    .table(QuizResponse::Table)
                    .col(QuizResponse::UserId)
                    .col(QuizResponse::QuizId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_type(
                Type::create()
                    .as_enum(Alias::new("submission_type_enum"))
                    .values([
                        Alias::new("text"),
                        Alias::new("file"),
                        Alias::new("link"),
                    ])
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ExerciseSubmission::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ExerciseSubmission::SubmissionId)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .extra("DEFAULT gen_random_uuid()".to_string()),
                    )
                    .col(ColumnDef::new(ExerciseSubmission::UserId).uuid().not_null())
                    .col(ColumnDef::new(ExerciseSubmission::SectionId).uuid().not_null())
                    .col(
                        ColumnDef::new(ExerciseSubmission::ExerciseNumber)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ExerciseSubmission::SubmissionType)
                            .custom(Alias::new("submission_type_enum"))
                            .not_null(),
                    )
                    .col(ColumnDef::new(ExerciseSubmission::Content).text().null())
                    .col(ColumnDef::new(ExerciseSubmission::FileUrl).string().null())
                    .col(
                        ColumnDef::new(ExerciseSubmission::CreatedAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .col(
                        ColumnDef::new(ExerciseSubmission::UpdatedAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_exercise_submission_user")
                            .from_tbl(ExerciseSubmission::Table)
                            .from_col(ExerciseSubmission::UserId)
                            .to_tbl(AppUser::Table)
                            .to_col(AppUser::UserId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_exercise_submission_section")
                            .from_tbl(ExerciseSubmission::Table)
                            .from_col(ExerciseSubmission::SectionId)
                            .to_tbl(CourseSection::Table)
                            .to_col(CourseSection::SectionId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Conflict target for the submission upsert
        manager
            .create_index(
                Index::create()
                    .name("uq_exercise_submission_user_section_number")
                    .table(ExerciseSubmission::Table)
                    .col(ExerciseSubmission::UserId)
                    .col(ExerciseSubmission::SectionId)
                    .col(ExerciseSubmission::ExerciseNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SectionDiagram::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SectionDiagram::DiagramId)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .extra("DEFAULT gen_random_uuid()".to_string()),
                    )
                    .col(ColumnDef::new(SectionDiagram::SectionId).uuid().not_null())
                    .col(ColumnDef::new(SectionDiagram::Title).string().not_null())
                    .col(ColumnDef::new(SectionDiagram::Description).text().null())
                    .col(ColumnDef::new(SectionDiagram::ImageUrl).string().not_null())
                    .col(
                        ColumnDef::new(SectionDiagram::OrderIndex)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(SectionDiagram::CreatedAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .col(
                        ColumnDef::new(SectionDiagram::UpdatedAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_section_diagram_section")
                            .from_tbl(SectionDiagram::Table)
                            .from_col(SectionDiagram::SectionId)
                            .to_tbl(CourseSection::Table)
                            .to_col(CourseSection::SectionId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_section_diagram_section_id")
                    .table(SectionDiagram::Table)
                    .col(SectionDiagram::SectionId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_section_diagram_section_id")
                    .table(SectionDiagram::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(SectionDiagram::Table).to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("uq_exercise_submission_user_section_number")
                    .table(ExerciseSubmission::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ExerciseSubmission::Table).to_owned())
            .await?;

        manager
            .drop_type(Type::drop().name(Alias::new("submission_type_enum")).to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("uq_quiz_response_user_quiz")
                    .table(QuizResponse::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(QuizResponse::Table).to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_quiz_section_id")
                    .table(Quiz::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Quiz::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Quiz {
    Table,
    QuizId,
    SectionId,
    Question,
    Options,
    CorrectAnswer,
    OrderIndex,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum QuizResponse {
    Table,
    ResponseId,
    UserId,
    QuizId,
    SelectedAnswer,
    IsCorrect,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ExerciseSubmission {
    Table,
    SubmissionId,
    UserId,
    SectionId,
    ExerciseNumber,
    SubmissionType,
    Content,
    FileUrl,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum SectionDiagram {
    Table,
    DiagramId,
    SectionId,
    Title,
    Description,
    ImageUrl,
    OrderIndex,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum AppUser {
    Table,
    UserId,
}

#[derive(DeriveIden)]
enum CourseSection {
    Table,
    SectionId,
}
