use axum::{Json, Router, extract::Path, http::StatusCode, routing::get};
use uuid::Uuid;

use super::dto::{CourseListResponse, CourseResponse, SectionListResponse, SectionResponse};
use crate::repositories::CourseRepository;

pub fn create_route() -> Router {
    Router::new()
        .route("/api/v1/courses", get(get_published_courses))
        .route("/api/v1/courses/{course_id}", get(get_course))
        .route("/api/v1/courses/{course_id}/sections", get(get_course_sections))
}

/// List published courses
#[utoipa::path(
    get,
    path = "/api/v1/courses",
    responses(
        (status = 200, description = "Published courses retrieved", body = CourseListResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Courses"
)]
pub async fn get_published_courses()
-> Result<(StatusCode, Json<CourseListResponse>), (StatusCode, String)> {
    let course_repo = CourseRepository::new();

    let courses = course_repo.find_published().await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to get courses: {}", e),
        )
    })?;

    let response = CourseListResponse {
        total: courses.len(),
        courses: courses.into_iter().map(CourseResponse::from).collect(),
    };

    Ok((StatusCode::OK, Json(response)))
}

/// Get a course by ID
#[utoipa::path(
    get,
    path = "/api/v1/courses/{course_id}",
    params(
        ("course_id" = Uuid, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Course retrieved", body = CourseResponse),
        (status = 404, description = "Course not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Courses"
)]
pub async fn get_course(
    Path(course_id): Path<Uuid>,
) -> Result<(StatusCode, Json<CourseResponse>), (StatusCode, String)> {
    let course_repo = CourseRepository::new();

    let course = course_repo
        .find_by_id(course_id)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to get course: {}", e),
            )
        })?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Course not found".to_string()))?;

    Ok((StatusCode::OK, Json(CourseResponse::from(course))))
}

/// List the sections of a course in order
#[utoipa::path(
    get,
    path = "/api/v1/courses/{course_id}/sections",
    params(
        ("course_id" = Uuid, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Sections retrieved", body = SectionListResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Courses"
)]
pub async fn get_course_sections(
    Path(course_id): Path<Uuid>,
) -> Result<(StatusCode, Json<SectionListResponse>), (StatusCode, String)> {
    let course_repo = CourseRepository::new();

    let sections = course_repo.find_sections(course_id).await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to get sections: {}", e),
        )
    })?;

    let response = SectionListResponse {
        total: sections.len(),
        sections: sections.into_iter().map(SectionResponse::from).collect(),
    };

    Ok((StatusCode::OK, Json(response)))
}
