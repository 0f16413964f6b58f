use axum::{
    Json, Router,
    extract::{Path, Query},
    http::StatusCode,
    routing::{get, post},
};
use uuid::Uuid;

use super::dto::{
    CertificateListResponse, CertificateResponse, IssueCertificateRequest,
    IssueCertificateResponse, VerifyCertificateQuery,
};
use crate::repositories::CertificateRepository;
use crate::services::certificates::issue_certificate;
use crate::static_service::DATABASE_CONNECTION;

pub fn create_route() -> Router {
    Router::new()
        .route("/api/v1/certificates/issue", post(issue))
        .route("/api/v1/certificates/verify", get(verify_certificate))
        .route("/api/v1/certificates/user/{user_id}", get(get_user_certificates))
}

/// Issue a certificate if the course is complete; idempotent per (user, course)
#[utoipa::path(
    post,
    path = "/api/v1/certificates/issue",
    request_body = IssueCertificateRequest,
    responses(
        (status = 200, description = "Issuance result; certificate is null when the course is incomplete", body = IssueCertificateResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Certificates"
)]
pub async fn issue(
    Json(payload): Json<IssueCertificateRequest>,
) -> Result<(StatusCode, Json<IssueCertificateResponse>), (StatusCode, String)> {
    let db = DATABASE_CONNECTION
        .get()
        .expect("DATABASE_CONNECTION not set");

    let issued = issue_certificate(db, payload.user_id, payload.course_id)
        .await
        .map_err(|e| {
            tracing::error!("Certificate issuance failed: {:#}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to issue certificate".to_string(),
            )
        })?;

    let response = IssueCertificateResponse {
        certificate: issued.map(CertificateResponse::from),
    };

    Ok((StatusCode::OK, Json(response)))
}

/// Verify a certificate by number (public, no auth)
#[utoipa::path(
    get,
    path = "/api/v1/certificates/verify",
    params(VerifyCertificateQuery),
    responses(
        (status = 200, description = "Certificate found", body = CertificateResponse),
        (status = 404, description = "No certificate with that number"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Certificates"
)]
pub async fn verify_certificate(
    Query(query): Query<VerifyCertificateQuery>,
) -> Result<(StatusCode, Json<CertificateResponse>), (StatusCode, String)> {
    let certificate_repo = CertificateRepository::new();

    let certificate = certificate_repo
        .find_by_number(query.cert.trim())
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to verify certificate: {}", e),
            )
        })?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Certificate not found".to_string()))?;

    Ok((StatusCode::OK, Json(CertificateResponse::from(certificate))))
}

/// List a user's certificates, most recent first
#[utoipa::path(
    get,
    path = "/api/v1/certificates/user/{user_id}",
    params(
        ("user_id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Certificates retrieved", body = CertificateListResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Certificates"
)]
pub async fn get_user_certificates(
    Path(user_id): Path<Uuid>,
) -> Result<(StatusCode, Json<CertificateListResponse>), (StatusCode, String)> {
    let certificate_repo = CertificateRepository::new();

    let certificates = certificate_repo.find_by_user(user_id).await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to get certificates: {}", e),
        )
    })?;

    let response = CertificateListResponse {
        total: certificates.len(),
        certificates: certificates
            .into_iter()
            .map(CertificateResponse::from)
            .collect(),
    };

    Ok((StatusCode::OK, Json(response)))
}
