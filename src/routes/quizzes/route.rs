use axum::{
    Json, Router,
    extract::Path,
    http::StatusCode,
    routing::{get, post},
};
use uuid::Uuid;

use super::dto::{
    QuizListResponse, QuizQuestionResponse, QuizResponseListResponse, QuizResponseResponse,
    SubmitQuizResponseRequest,
};
use crate::entities::quiz;
use crate::repositories::QuizRepository;

pub fn create_route() -> Router {
    Router::new()
        .route("/api/v1/sections/{section_id}/quizzes", get(get_section_quizzes))
        .route("/api/v1/quiz-responses", post(submit_quiz_response))
        .route(
            "/api/v1/quiz-responses/{user_id}/{section_id}",
            get(get_user_quiz_responses),
        )
}

/// List the quizzes of a section, without answers
#[utoipa::path(
    get,
    path = "/api/v1/sections/{section_id}/quizzes",
    params(
        ("section_id" = Uuid, Path, description = "Section ID")
    ),
    responses(
        (status = 200, description = "Quizzes retrieved", body = QuizListResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Quizzes"
)]
pub async fn get_section_quizzes(
    Path(section_id): Path<Uuid>,
) -> Result<(StatusCode, Json<QuizListResponse>), (StatusCode, String)> {
    let quiz_repo = QuizRepository::new();

    let quizzes = quiz_repo.find_by_section(section_id).await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to get quizzes: {}", e),
        )
    })?;

    let response = QuizListResponse {
        total: quizzes.len(),
        quizzes: quizzes.into_iter().map(QuizQuestionResponse::from).collect(),
    };

    Ok((StatusCode::OK, Json(response)))
}

/// Grades a selection against the stored answer. The stored `correct_answer`
/// is authoritative; a selection outside the option list is rejected.
fn grade_response(quiz: &quiz::Model, selected_answer: i32) -> Result<bool, String> {
    let option_count = quiz.options.as_array().map(|a| a.len()).unwrap_or(0);
    if selected_answer < 0 || selected_answer as usize >= option_count {
        return Err(format!("selected_answer must be in 0..{}", option_count));
    }
    Ok(selected_answer == quiz.correct_answer)
}

/// Submit (upsert) a quiz answer; the server grades it
#[utoipa::path(
    post,
    path = "/api/v1/quiz-responses",
    request_body = SubmitQuizResponseRequest,
    responses(
        (status = 200, description = "Response recorded", body = QuizResponseResponse),
        (status = 400, description = "Selected answer out of range"),
        (status = 404, description = "Quiz not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Quizzes"
)]
pub async fn submit_quiz_response(
    Json(payload): Json<SubmitQuizResponseRequest>,
) -> Result<(StatusCode, Json<QuizResponseResponse>), (StatusCode, String)> {
    let quiz_repo = QuizRepository::new();

    let quiz = quiz_repo
        .find_by_id(payload.quiz_id)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to get quiz: {}", e),
            )
        })?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Quiz not found".to_string()))?;

    let is_correct = grade_response(&quiz, payload.selected_answer)
        .map_err(|msg| (StatusCode::BAD_REQUEST, msg))?;

    let response = quiz_repo
        .upsert_response(payload.user_id, payload.quiz_id, payload.selected_answer, is_correct)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to record response: {}", e),
            )
        })?;

    Ok((StatusCode::OK, Json(QuizResponseResponse::from(response))))
}

/// Get a user's responses for a section's quizzes
#[utoipa::path(
    get,
    path = "/api/v1/quiz-responses/{user_id}/{section_id}",
    params(
        ("user_id" = Uuid, Path, description = "User ID"),
        ("section_id" = Uuid, Path, description = "Section ID")
    ),
    responses(
        (status = 200, description = "Responses retrieved", body = QuizResponseListResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Quizzes"
)]
pub async fn get_user_quiz_responses(
    Path((user_id, section_id)): Path<(Uuid, Uuid)>,
) -> Result<(StatusCode, Json<QuizResponseListResponse>), (StatusCode, String)> {
    let quiz_repo = QuizRepository::new();

    let responses = quiz_repo
        .find_responses_by_user_and_section(user_id, section_id)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to get responses: {}", e),
            )
        })?;

    let response = QuizResponseListResponse {
        total: responses.len(),
        responses: responses
            .into_iter()
            .map(QuizResponseResponse::from)
            .collect(),
    };

    Ok((StatusCode::OK, Json(response)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    fn four_option_quiz(correct_answer: i32) -> quiz::Model {
        let now = Utc::now().naive_utc();
        quiz::Model {
            quiz_id: Uuid::new_v4(),
            section_id: Uuid::new_v4(),
            question: "Which tool builds this project?".to_string(),
            options: json!(["make", "cargo", "cmake", "gradle"]),
            correct_answer,
            order_index: 0,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn correct_selection_grades_true() {
        let quiz = four_option_quiz(1);
        assert_eq!(grade_response(&quiz, 1), Ok(true));
    }

    #[test]
    fn wrong_selection_grades_false() {
        let quiz = four_option_quiz(1);
        assert_eq!(grade_response(&quiz, 3), Ok(false));
    }

    #[test]
    fn out_of_range_selection_is_rejected() {
        let quiz = four_option_quiz(1);
        assert!(grade_response(&quiz, -1).is_err());
        assert!(grade_response(&quiz, 4).is_err());
    }

    #[test]
    fn non_array_options_reject_every_selection() {
        let mut quiz = four_option_quiz(0);
        quiz.options = json!({"a": "make"});
        assert!(grade_response(&quiz, 0).is_err());
    }
}
