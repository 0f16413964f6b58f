use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entities::user_progress;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RecordProgressRequest {
    pub user_id: Uuid,
    pub course_id: Uuid,
    pub section_id: Uuid,
    pub completed: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProgressResponse {
    pub progress_id: Uuid,
    pub user_id: Uuid,
    pub course_id: Uuid,
    pub section_id: Uuid,
    pub completed: bool,
    pub completed_at: Option<String>,
}

impl From<user_progress::Model> for ProgressResponse {
    fn from(model: user_progress::Model) -> Self {
        Self {
            progress_id: model.progress_id,
            user_id: model.user_id,
            course_id: model.course_id,
            section_id: model.section_id,
            completed: model.completed,
            completed_at: model.completed_at.map(|t| t.to_string()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProgressListResponse {
    pub total: usize,
    pub completed: usize,
    pub progress: Vec<ProgressResponse>,
}
