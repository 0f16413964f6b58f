use axum::{
    Json, Router,
    extract::Path,
    http::StatusCode,
    routing::{get, put},
};
use uuid::Uuid;

use super::dto::{ProgressListResponse, ProgressResponse, RecordProgressRequest};
use crate::repositories::ProgressRepository;

pub fn create_route() -> Router {
    Router::new()
        .route("/api/v1/progress", put(record_progress))
        .route(
            "/api/v1/progress/{user_id}/{course_id}",
            get(get_user_progress),
        )
}

/// Record (upsert) a section completion marker
#[utoipa::path(
    put,
    path = "/api/v1/progress",
    request_body = RecordProgressRequest,
    responses(
        (status = 200, description = "Progress recorded", body = ProgressResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Progress"
)]
pub async fn record_progress(
    Json(payload): Json<RecordProgressRequest>,
) -> Result<(StatusCode, Json<ProgressResponse>), (StatusCode, String)> {
    let progress_repo = ProgressRepository::new();

    let progress = progress_repo
        .upsert(
            payload.user_id,
            payload.course_id,
            payload.section_id,
            payload.completed,
        )
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to record progress: {}", e),
            )
        })?;

    Ok((StatusCode::OK, Json(ProgressResponse::from(progress))))
}

/// Get a user's progress rows for a course
#[utoipa::path(
    get,
    path = "/api/v1/progress/{user_id}/{course_id}",
    params(
        ("user_id" = Uuid, Path, description = "User ID"),
        ("course_id" = Uuid, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Progress retrieved", body = ProgressListResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Progress"
)]
pub async fn get_user_progress(
    Path((user_id, course_id)): Path<(Uuid, Uuid)>,
) -> Result<(StatusCode, Json<ProgressListResponse>), (StatusCode, String)> {
    let progress_repo = ProgressRepository::new();

    let progress = progress_repo
        .find_by_user_and_course(user_id, course_id)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to get progress: {}", e),
            )
        })?;

    let completed = progress.iter().filter(|p| p.completed).count();
    let response = ProgressListResponse {
        total: progress.len(),
        completed,
        progress: progress.into_iter().map(ProgressResponse::from).collect(),
    };

    Ok((StatusCode::OK, Json(response)))
}
