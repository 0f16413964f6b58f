use axum::{Json, Router, http::StatusCode, routing::post};

use super::dto::DemoResetResponse;
use crate::config::APP_CONFIG;
use crate::services::demo_reset::reset_demo_accounts;
use crate::static_service::DATABASE_CONNECTION;

pub fn create_route() -> Router {
    Router::new().route("/api/v1/admin/demo-reset", post(demo_reset))
}

/// Wipe demo-account learning data so the flow can be replayed
#[utoipa::path(
    post,
    path = "/api/v1/admin/demo-reset",
    responses(
        (status = 200, description = "Demo accounts reset", body = DemoResetResponse),
        (status = 409, description = "No demo accounts configured"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Admin"
)]
pub async fn demo_reset()
-> Result<(StatusCode, Json<DemoResetResponse>), (StatusCode, String)> {
    let demo_emails = APP_CONFIG.demo_email_list();
    if demo_emails.is_empty() {
        return Err((
            StatusCode::CONFLICT,
            "No demo accounts configured; set --demo-emails".to_string(),
        ));
    }

    let db = DATABASE_CONNECTION
        .get()
        .expect("DATABASE_CONNECTION not set");

    let summary = reset_demo_accounts(db, &demo_emails).await.map_err(|e| {
        tracing::error!("Demo reset failed: {:#}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to reset demo accounts".to_string(),
        )
    })?;

    tracing::info!(?summary, "Demo accounts reset");

    Ok((StatusCode::OK, Json(DemoResetResponse::from(summary))))
}
