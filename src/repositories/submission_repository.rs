use anyhow::Result;
use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

use crate::entities::exercise_submission;
use crate::entities::sea_orm_active_enums::SubmissionTypeEnum;
use crate::static_service::DATABASE_CONNECTION;

pub struct SubmissionRepository;

impl SubmissionRepository {
    pub fn new() -> Self {
        Self
    }

    fn get_connection(&self) -> &'static DatabaseConnection {
        DATABASE_CONNECTION
            .get()
            .expect("DATABASE_CONNECTION not set")
    }

    pub async fn find_by_user_and_section(
        &self,
        user_id: Uuid,
        section_id: Uuid,
    ) -> Result<Vec<exercise_submission::Model>> {
        let db = self.get_connection();
        let submissions = exercise_submission::Entity::find()
            .filter(exercise_submission::Column::UserId.eq(user_id))
            .filter(exercise_submission::Column::SectionId.eq(section_id))
            .order_by_asc(exercise_submission::Column::ExerciseNumber)
            .all(db)
            .await?;
        Ok(submissions)
    }

    /// Upsert keyed on (user, section, exercise_number); resubmitting an
    /// exercise replaces the previous answer.
    pub async fn upsert(
        &self,
        user_id: Uuid,
        section_id: Uuid,
        exercise_number: i32,
        submission_type: SubmissionTypeEnum,
        content: Option<String>,
        file_url: Option<String>,
    ) -> Result<exercise_submission::Model> {
        let db = self.get_connection();
        let now = Utc::now().naive_utc();

        let submission_model = exercise_submission::ActiveModel {
            submission_id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            section_id: Set(section_id),
            exercise_number: Set(exercise_number),
            submission_type: Set(submission_type),
            content: Set(content),
            file_url: Set(file_url),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = exercise_submission::Entity::insert(submission_model)
            .on_conflict(
                OnConflict::columns([
                    exercise_submission::Column::UserId,
                    exercise_submission::Column::SectionId,
                    exercise_submission::Column::ExerciseNumber,
                ])
                .update_columns([
                    exercise_submission::Column::SubmissionType,
                    exercise_submission::Column::Content,
                    exercise_submission::Column::FileUrl,
                    exercise_submission::Column::UpdatedAt,
                ])
                .to_owned(),
            )
            .exec_with_returning(db)
            .await?;

        Ok(result)
    }
}
