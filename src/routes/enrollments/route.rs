use axum::{
    Json, Router,
    extract::Path,
    http::StatusCode,
    routing::{get, post},
};
use sea_orm::prelude::Decimal;
use uuid::Uuid;

use super::dto::{EnrollmentListResponse, EnrollmentResponse, PaymentSuccessRequest};
use crate::repositories::EnrollmentRepository;

pub fn create_route() -> Router {
    Router::new()
        .route("/api/v1/enrollments/payment-success", post(payment_success))
        .route("/api/v1/enrollments/user/{user_id}", get(get_user_enrollments))
}

/// Payment completion callback: ensure an active enrollment exists
#[utoipa::path(
    post,
    path = "/api/v1/enrollments/payment-success",
    request_body = PaymentSuccessRequest,
    responses(
        (status = 200, description = "Enrollment active", body = EnrollmentResponse),
        (status = 400, description = "Bad request"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Enrollments"
)]
pub async fn payment_success(
    Json(payload): Json<PaymentSuccessRequest>,
) -> Result<(StatusCode, Json<EnrollmentResponse>), (StatusCode, String)> {
    if payload.session_id.trim().is_empty() {
        return Err((StatusCode::BAD_REQUEST, "session_id is required".to_string()));
    }

    let amount_paid = match payload.amount_paid.as_deref() {
        Some(raw) => Some(raw.parse::<Decimal>().map_err(|_| {
            (
                StatusCode::BAD_REQUEST,
                format!("Invalid amount_paid: {}", raw),
            )
        })?),
        None => None,
    };

    let enrollment_repo = EnrollmentRepository::new();

    let enrollment = enrollment_repo
        .ensure_active(
            payload.user_id,
            payload.course_id,
            payload.session_id,
            amount_paid,
        )
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to record enrollment: {}", e),
            )
        })?;

    Ok((StatusCode::OK, Json(EnrollmentResponse::from(enrollment))))
}

/// List a user's enrollments, newest first
#[utoipa::path(
    get,
    path = "/api/v1/enrollments/user/{user_id}",
    params(
        ("user_id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Enrollments retrieved", body = EnrollmentListResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Enrollments"
)]
pub async fn get_user_enrollments(
    Path(user_id): Path<Uuid>,
) -> Result<(StatusCode, Json<EnrollmentListResponse>), (StatusCode, String)> {
    let enrollment_repo = EnrollmentRepository::new();

    let enrollments = enrollment_repo.find_by_user(user_id).await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to get enrollments: {}", e),
        )
    })?;

    let response = EnrollmentListResponse {
        total: enrollments.len(),
        enrollments: enrollments
            .into_iter()
            .map(EnrollmentResponse::from)
            .collect(),
    };

    Ok((StatusCode::OK, Json(response)))
}
