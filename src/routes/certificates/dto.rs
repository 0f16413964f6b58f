use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::entities::certificate;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct IssueCertificateRequest {
    pub user_id: Uuid,
    pub course_id: Uuid,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CertificateResponse {
    pub certificate_id: Uuid,
    pub user_id: Uuid,
    pub course_id: Uuid,
    pub certificate_number: String,
    pub recipient_name: String,
    pub course_title: String,
    pub issued_at: String,
}

impl From<certificate::Model> for CertificateResponse {
    fn from(model: certificate::Model) -> Self {
        Self {
            certificate_id: model.certificate_id,
            user_id: model.user_id,
            course_id: model.course_id,
            certificate_number: model.certificate_number,
            recipient_name: model.recipient_name,
            course_title: model.course_title,
            issued_at: model.issued_at.to_string(),
        }
    }
}

/// `certificate` is null when the course is not yet complete.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct IssueCertificateResponse {
    pub certificate: Option<CertificateResponse>,
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct VerifyCertificateQuery {
    /// Certificate number, e.g. CERT-2026-004217.
    pub cert: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CertificateListResponse {
    pub total: usize,
    pub certificates: Vec<CertificateResponse>,
}
