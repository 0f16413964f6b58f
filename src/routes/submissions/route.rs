use axum::{
    Json, Router,
    extract::Path,
    http::StatusCode,
    routing::{get, put},
};
use uuid::Uuid;

use super::dto::{SubmissionListResponse, SubmissionResponse, SubmitExerciseRequest};
use crate::entities::sea_orm_active_enums::SubmissionTypeEnum;
use crate::repositories::SubmissionRepository;

pub fn create_route() -> Router {
    Router::new()
        .route("/api/v1/submissions", put(submit_exercise))
        .route(
            "/api/v1/submissions/{user_id}/{section_id}",
            get(get_user_submissions),
        )
}

fn validate_payload(payload: &SubmitExerciseRequest) -> Result<(), String> {
    if payload.exercise_number < 1 {
        return Err("exercise_number must be positive".to_string());
    }
    match payload.submission_type {
        SubmissionTypeEnum::Text => {
            if payload.content.as_deref().map(str::trim).unwrap_or("").is_empty() {
                return Err("content is required for text submissions".to_string());
            }
        }
        SubmissionTypeEnum::File | SubmissionTypeEnum::Link => {
            if payload.file_url.as_deref().map(str::trim).unwrap_or("").is_empty() {
                return Err("file_url is required for file and link submissions".to_string());
            }
        }
    }
    Ok(())
}

/// Submit (upsert) an exercise answer
#[utoipa::path(
    put,
    path = "/api/v1/submissions",
    request_body = SubmitExerciseRequest,
    responses(
        (status = 200, description = "Submission recorded", body = SubmissionResponse),
        (status = 400, description = "Missing required fields for the submission type"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Submissions"
)]
pub async fn submit_exercise(
    Json(payload): Json<SubmitExerciseRequest>,
) -> Result<(StatusCode, Json<SubmissionResponse>), (StatusCode, String)> {
    validate_payload(&payload).map_err(|msg| (StatusCode::BAD_REQUEST, msg))?;

    let submission_repo = SubmissionRepository::new();

    let submission = submission_repo
        .upsert(
            payload.user_id,
            payload.section_id,
            payload.exercise_number,
            payload.submission_type,
            payload.content,
            payload.file_url,
        )
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to record submission: {}", e),
            )
        })?;

    Ok((StatusCode::OK, Json(SubmissionResponse::from(submission))))
}

/// Get a user's submissions for a section
#[utoipa::path(
    get,
    path = "/api/v1/submissions/{user_id}/{section_id}",
    params(
        ("user_id" = Uuid, Path, description = "User ID"),
        ("section_id" = Uuid, Path, description = "Section ID")
    ),
    responses(
        (status = 200, description = "Submissions retrieved", body = SubmissionListResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Submissions"
)]
pub async fn get_user_submissions(
    Path((user_id, section_id)): Path<(Uuid, Uuid)>,
) -> Result<(StatusCode, Json<SubmissionListResponse>), (StatusCode, String)> {
    let submission_repo = SubmissionRepository::new();

    let submissions = submission_repo
        .find_by_user_and_section(user_id, section_id)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to get submissions: {}", e),
            )
        })?;

    let response = SubmissionListResponse {
        total: submissions.len(),
        submissions: submissions
            .into_iter()
            .map(SubmissionResponse::from)
            .collect(),
    };

    Ok((StatusCode::OK, Json(response)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(submission_type: SubmissionTypeEnum) -> SubmitExerciseRequest {
        SubmitExerciseRequest {
            user_id: Uuid::new_v4(),
            section_id: Uuid::new_v4(),
            exercise_number: 1,
            submission_type,
            content: None,
            file_url: None,
        }
    }

    #[test]
    fn text_submission_requires_content() {
        let mut payload = request(SubmissionTypeEnum::Text);
        assert!(validate_payload(&payload).is_err());

        payload.content = Some("  ".to_string());
        assert!(validate_payload(&payload).is_err());

        payload.content = Some("my answer".to_string());
        assert!(validate_payload(&payload).is_ok());
    }

    #[test]
    fn file_and_link_submissions_require_url() {
        for submission_type in [SubmissionTypeEnum::File, SubmissionTypeEnum::Link] {
            let mut payload = request(submission_type);
            assert!(validate_payload(&payload).is_err());

            payload.file_url = Some("https://example.com/answer.pdf".to_string());
            assert!(validate_payload(&payload).is_ok());
        }
    }

    #[test]
    fn exercise_number_must_be_positive() {
        let mut payload = request(SubmissionTypeEnum::Text);
        payload.content = Some("answer".to_string());
        payload.exercise_number = 0;
        assert!(validate_payload(&payload).is_err());
    }
}
