use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entities::section_diagram;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateDiagramRequest {
    pub section_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub image_url: String,
    #[serde(default)]
    pub order_index: i32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateDiagramRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub order_index: Option<i32>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DiagramResponse {
    pub diagram_id: Uuid,
    pub section_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub image_url: String,
    pub order_index: i32,
}

impl From<section_diagram::Model> for DiagramResponse {
    fn from(model: section_diagram::Model) -> Self {
        Self {
            diagram_id: model.diagram_id,
            section_id: model.section_id,
            title: model.title,
            description: model.description,
            image_url: model.image_url,
            order_index: model.order_index,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DiagramListResponse {
    pub total: usize,
    pub diagrams: Vec<DiagramResponse>,
}
