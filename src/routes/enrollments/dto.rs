use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entities::enrollment;
use crate::entities::sea_orm_active_enums::EnrollmentStatusEnum;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaymentSuccessRequest {
    pub user_id: Uuid,
    pub course_id: Uuid,
    /// External payment session identifier from the checkout redirect.
    pub session_id: String,
    /// Decimal string, e.g. "49.00".
    pub amount_paid: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EnrollmentResponse {
    pub enrollment_id: Uuid,
    pub user_id: Uuid,
    pub course_id: Uuid,
    pub status: EnrollmentStatusEnum,
    pub amount_paid: Option<String>,
    pub payment_session_id: Option<String>,
    pub completed_at: Option<String>,
    pub created_at: String,
}

impl From<enrollment::Model> for EnrollmentResponse {
    fn from(model: enrollment::Model) -> Self {
        Self {
            enrollment_id: model.enrollment_id,
            user_id: model.user_id,
            course_id: model.course_id,
            status: model.status,
            amount_paid: model.amount_paid.map(|a| a.to_string()),
            payment_session_id: model.payment_session_id,
            completed_at: model.completed_at.map(|t| t.to_string()),
            created_at: model.created_at.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EnrollmentListResponse {
    pub total: usize,
    pub enrollments: Vec<EnrollmentResponse>,
}
