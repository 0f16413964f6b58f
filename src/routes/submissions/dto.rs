use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entities::exercise_submission;
use crate::entities::sea_orm_active_enums::SubmissionTypeEnum;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SubmitExerciseRequest {
    pub user_id: Uuid,
    pub section_id: Uuid,
    pub exercise_number: i32,
    pub submission_type: SubmissionTypeEnum,
    /// Required for text submissions.
    pub content: Option<String>,
    /// Required for file and link submissions.
    pub file_url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SubmissionResponse {
    pub submission_id: Uuid,
    pub user_id: Uuid,
    pub section_id: Uuid,
    pub exercise_number: i32,
    pub submission_type: SubmissionTypeEnum,
    pub content: Option<String>,
    pub file_url: Option<String>,
    pub updated_at: String,
}

impl From<exercise_submission::Model> for SubmissionResponse {
    fn from(model: exercise_submission::Model) -> Self {
        Self {
            submission_id: model.submission_id,
            user_id: model.user_id,
            section_id: model.section_id,
            exercise_number: model.exercise_number,
            submission_type: model.submission_type,
            content: model.content,
            file_url: model.file_url,
            updated_at: model.updated_at.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SubmissionListResponse {
    pub total: usize,
    pub submissions: Vec<SubmissionResponse>,
}
