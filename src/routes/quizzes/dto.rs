use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entities::{quiz, quiz_response};

/// Quiz as shown to a learner. The correct answer index deliberately stays
/// server-side; grading happens on submission.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct QuizQuestionResponse {
    pub quiz_id: Uuid,
    pub section_id: Uuid,
    pub question: String,
    pub options: Value,
    pub order_index: i32,
}

impl From<quiz::Model> for QuizQuestionResponse {
    fn from(model: quiz::Model) -> Self {
        Self {
            quiz_id: model.quiz_id,
            section_id: model.section_id,
            question: model.question,
            options: model.options,
            order_index: model.order_index,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct QuizListResponse {
    pub total: usize,
    pub quizzes: Vec<QuizQuestionResponse>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SubmitQuizResponseRequest {
    pub user_id: Uuid,
    pub quiz_id: Uuid,
    pub selected_answer: i32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct QuizResponseResponse {
    pub response_id: Uuid,
    pub user_id: Uuid,
    pub quiz_id: Uuid,
    pub selected_answer: i32,
    pub is_correct: bool,
}

impl From<quiz_response::Model> for QuizResponseResponse {
    fn from(model: quiz_response::Model) -> Self {
        Self {
            response_id: model.response_id,
            user_id: model.user_id,
            quiz_id: model.quiz_id,
            selected_answer: model.selected_answer,
            is_correct: model.is_correct,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct QuizResponseListResponse {
    pub total: usize,
    pub responses: Vec<QuizResponseResponse>,
}
