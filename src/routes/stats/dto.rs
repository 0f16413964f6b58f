use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatsOverviewResponse {
    pub total_users: i64,
    pub published_courses: i64,
    pub pending_enrollments: i64,
    pub active_enrollments: i64,
    pub completed_enrollments: i64,
    pub certificates_issued: i64,
}
