use anyhow::Result;
use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

use crate::entities::{quiz, quiz_response};
use crate::static_service::DATABASE_CONNECTION;

pub struct QuizRepository;

impl QuizRepository {
    pub fn new() -> Self {
        Self
    }

    fn get_connection(&self) -> &'static DatabaseConnection {
        DATABASE_CONNECTION
            .get()
            .expect("DATABASE_CONNECTION not set")
    }

    pub async fn find_by_section(&self, section_id: Uuid) -> Result<Vec<quiz::Model>> {
        let db = self.get_connection();
        let quizzes = quiz::Entity::find()
            .filter(quiz::Column::SectionId.eq(section_id))
            .order_by_asc(quiz::Column::OrderIndex)
            .all(db)
            .await?;
        Ok(quizzes)
    }

    pub async fn find_by_id(&self, quiz_id: Uuid) -> Result<Option<quiz::Model>> {
        let db = self.get_connection();
        let quiz = quiz::Entity::find()
            .filter(quiz::Column::QuizId.eq(quiz_id))
            .one(db)
            .await?;
        Ok(quiz)
    }

    pub async fn find_responses_by_user_and_section(
        &self,
        user_id: Uuid,
        section_id: Uuid,
    ) -> Result<Vec<quiz_response::Model>> {
        let db = self.get_connection();
        let quiz_ids: Vec<Uuid> = quiz::Entity::find()
            .filter(quiz::Column::SectionId.eq(section_id))
            .all(db)
            .await?
            .into_iter()
            .map(|q| q.quiz_id)
            .collect();

        if quiz_ids.is_empty() {
            return Ok(Vec::new());
        }

        let responses = quiz_response::Entity::find()
            .filter(quiz_response::Column::UserId.eq(user_id))
            .filter(quiz_response::Column::QuizId.is_in(quiz_ids))
            .all(db)
            .await?;
        Ok(responses)
    }

    /// Upsert keyed on (user, quiz). `is_correct` is graded here, not taken
    /// from the caller.
    pub async fn upsert_response(
        &self,
        user_id: Uuid,
        quiz_id: Uuid,
        selected_answer: i32,
        is_correct: bool,
    ) -> Result<quiz_response::Model> {
        let db = self.get_connection();
        let now = Utc::now().naive_utc();

        let response_model = quiz_response::ActiveModel {
            response_id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            quiz_id: Set(quiz_id),
            selected_answer: Set(selected_answer),
            is_correct: Set(is_correct),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = quiz_response::Entity::insert(response_model)
            .on_conflict(
                OnConflict::columns([
                    quiz_response::Column::UserId,
                    quiz_response::Column::QuizId,
                ])
                .update_columns([
                    quiz_response::Column::SelectedAnswer,
                    quiz_response::Column::IsCorrect,
                    quiz_response::Column::UpdatedAt,
                ])
                .to_owned(),
            )
            .exec_with_returning(db)
            .await?;

        Ok(result)
    }
}
