use anyhow::Result;
use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::entities::user_progress;
use crate::static_service::DATABASE_CONNECTION;

pub struct ProgressRepository;

impl ProgressRepository {
    pub fn new() -> Self {
        Self
    }

    fn get_connection(&self) -> &'static DatabaseConnection {
        DATABASE_CONNECTION
            .get()
            .expect("DATABASE_CONNECTION not set")
    }

    pub async fn find_by_user_and_course(
        &self,
        user_id: Uuid,
        course_id: Uuid,
    ) -> Result<Vec<user_progress::Model>> {
        let db = self.get_connection();
        let progress = user_progress::Entity::find()
            .filter(user_progress::Column::UserId.eq(user_id))
            .filter(user_progress::Column::CourseId.eq(course_id))
            .all(db)
            .await?;
        Ok(progress)
    }

    /// Upsert keyed on (user, section). Re-marking an already completed
    /// section refreshes completed_at rather than duplicating the row.
    pub async fn upsert(
        &self,
        user_id: Uuid,
        course_id: Uuid,
        section_id: Uuid,
        completed: bool,
    ) -> Result<user_progress::Model> {
        let db = self.get_connection();
        let now = Utc::now().naive_utc();
        let completed_at = completed.then_some(now);

        let progress_model = user_progress::ActiveModel {
            progress_id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            course_id: Set(course_id),
            section_id: Set(section_id),
            completed: Set(completed),
            completed_at: Set(completed_at),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = user_progress::Entity::insert(progress_model)
            .on_conflict(
                OnConflict::columns([
                    user_progress::Column::UserId,
                    user_progress::Column::SectionId,
                ])
                .update_columns([
                    user_progress::Column::Completed,
                    user_progress::Column::CompletedAt,
                    user_progress::Column::UpdatedAt,
                ])
                .to_owned(),
            )
            .exec_with_returning(db)
            .await?;

        Ok(result)
    }
}
