use axum::{Json, Router, http::StatusCode, routing::get};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

use super::dto::StatsOverviewResponse;
use crate::entities::sea_orm_active_enums::EnrollmentStatusEnum;
use crate::entities::{app_user, certificate, course, enrollment};
use crate::static_service::DATABASE_CONNECTION;

pub fn create_route() -> Router {
    Router::new().route("/api/v1/stats/overview", get(get_stats_overview))
}

/// Admin reporting overview: enrollment and certificate totals
#[utoipa::path(
    get,
    path = "/api/v1/stats/overview",
    responses(
        (status = 200, description = "Platform statistics", body = StatsOverviewResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Statistics"
)]
pub async fn get_stats_overview()
-> Result<(StatusCode, Json<StatsOverviewResponse>), (StatusCode, String)> {
    let db = DATABASE_CONNECTION
        .get()
        .expect("DATABASE_CONNECTION not set");

    let total_users = app_user::Entity::find().count(db).await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to count users: {}", e),
        )
    })? as i64;

    let published_courses = course::Entity::find()
        .filter(course::Column::IsPublished.eq(true))
        .count(db)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to count courses: {}", e),
            )
        })? as i64;

    let pending_enrollments = enrollment::Entity::find()
        .filter(enrollment::Column::Status.eq(EnrollmentStatusEnum::Pending))
        .count(db)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to count pending enrollments: {}", e),
            )
        })? as i64;

    let active_enrollments = enrollment::Entity::find()
        .filter(enrollment::Column::Status.eq(EnrollmentStatusEnum::Active))
        .count(db)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to count active enrollments: {}", e),
            )
        })? as i64;

    let completed_enrollments = enrollment::Entity::find()
        .filter(enrollment::Column::Status.eq(EnrollmentStatusEnum::Completed))
        .count(db)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to count completed enrollments: {}", e),
            )
        })? as i64;

    let certificates_issued = certificate::Entity::find().count(db).await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to count certificates: {}", e),
        )
    })? as i64;

    let response = StatsOverviewResponse {
        total_users,
        published_courses,
        pending_enrollments,
        active_enrollments,
        completed_enrollments,
        certificates_issued,
    };

    Ok((StatusCode::OK, Json(response)))
}
