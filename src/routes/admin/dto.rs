use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::services::demo_reset::DemoResetSummary;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DemoResetResponse {
    pub users_matched: u64,
    pub progress_deleted: u64,
    pub quiz_responses_deleted: u64,
    pub submissions_deleted: u64,
    pub certificates_deleted: u64,
    pub enrollments_reverted: u64,
}

impl From<DemoResetSummary> for DemoResetResponse {
    fn from(summary: DemoResetSummary) -> Self {
        Self {
            users_matched: summary.users_matched,
            progress_deleted: summary.progress_deleted,
            quiz_responses_deleted: summary.quiz_responses_deleted,
            submissions_deleted: summary.submissions_deleted,
            certificates_deleted: summary.certificates_deleted,
            enrollments_reverted: summary.enrollments_reverted,
        }
    }
}
