use axum::{
    Json, Router,
    extract::Path,
    http::StatusCode,
    routing::{delete, get, post, put},
};
use uuid::Uuid;

use super::dto::{
    CreateDiagramRequest, DiagramListResponse, DiagramResponse, UpdateDiagramRequest,
};
use crate::repositories::{DiagramRepository, DiagramUpdate};

pub fn create_route() -> Router {
    Router::new()
        .route("/api/v1/diagrams", post(create_diagram))
        .route("/api/v1/diagrams/{diagram_id}", put(update_diagram))
        .route("/api/v1/diagrams/{diagram_id}", delete(delete_diagram))
        .route(
            "/api/v1/sections/{section_id}/diagrams",
            get(get_section_diagrams),
        )
}

/// Create a section diagram (admin content)
#[utoipa::path(
    post,
    path = "/api/v1/diagrams",
    request_body = CreateDiagramRequest,
    responses(
        (status = 201, description = "Diagram created", body = DiagramResponse),
        (status = 400, description = "Bad request"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Diagrams"
)]
pub async fn create_diagram(
    Json(payload): Json<CreateDiagramRequest>,
) -> Result<(StatusCode, Json<DiagramResponse>), (StatusCode, String)> {
    if payload.title.trim().is_empty() || payload.image_url.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            "title and image_url are required".to_string(),
        ));
    }

    let diagram_repo = DiagramRepository::new();

    let diagram = diagram_repo
        .create(
            payload.section_id,
            payload.title,
            payload.description,
            payload.image_url,
            payload.order_index,
        )
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to create diagram: {}", e),
            )
        })?;

    Ok((StatusCode::CREATED, Json(DiagramResponse::from(diagram))))
}

/// Update a section diagram
#[utoipa::path(
    put,
    path = "/api/v1/diagrams/{diagram_id}",
    params(
        ("diagram_id" = Uuid, Path, description = "Diagram ID")
    ),
    request_body = UpdateDiagramRequest,
    responses(
        (status = 200, description = "Diagram updated", body = DiagramResponse),
        (status = 404, description = "Diagram not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Diagrams"
)]
pub async fn update_diagram(
    Path(diagram_id): Path<Uuid>,
    Json(payload): Json<UpdateDiagramRequest>,
) -> Result<(StatusCode, Json<DiagramResponse>), (StatusCode, String)> {
    let diagram_repo = DiagramRepository::new();

    let updates = DiagramUpdate {
        title: payload.title,
        description: payload.description,
        image_url: payload.image_url,
        order_index: payload.order_index,
    };

    let updated = diagram_repo.update(diagram_id, updates).await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to update diagram: {}", e),
        )
    })?;

    Ok((StatusCode::OK, Json(DiagramResponse::from(updated))))
}

/// Delete a section diagram
#[utoipa::path(
    delete,
    path = "/api/v1/diagrams/{diagram_id}",
    params(
        ("diagram_id" = Uuid, Path, description = "Diagram ID")
    ),
    responses(
        (status = 204, description = "Diagram deleted"),
        (status = 404, description = "Diagram not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Diagrams"
)]
pub async fn delete_diagram(
    Path(diagram_id): Path<Uuid>,
) -> Result<StatusCode, (StatusCode, String)> {
    let diagram_repo = DiagramRepository::new();

    diagram_repo.delete(diagram_id).await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to delete diagram: {}", e),
        )
    })?;

    Ok(StatusCode::NO_CONTENT)
}

/// List the diagrams of a section in order
#[utoipa::path(
    get,
    path = "/api/v1/sections/{section_id}/diagrams",
    params(
        ("section_id" = Uuid, Path, description = "Section ID")
    ),
    responses(
        (status = 200, description = "Diagrams retrieved", body = DiagramListResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Diagrams"
)]
pub async fn get_section_diagrams(
    Path(section_id): Path<Uuid>,
) -> Result<(StatusCode, Json<DiagramListResponse>), (StatusCode, String)> {
    let diagram_repo = DiagramRepository::new();

    let diagrams = diagram_repo.find_by_section(section_id).await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to get diagrams: {}", e),
        )
    })?;

    let response = DiagramListResponse {
        total: diagrams.len(),
        diagrams: diagrams.into_iter().map(DiagramResponse::from).collect(),
    };

    Ok((StatusCode::OK, Json(response)))
}
