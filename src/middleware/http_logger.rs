use axum::{
    body::Body,
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use http::{Method, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use std::time::Instant;

use crate::config::APP_CONFIG;

fn should_ignore_path(path: &str) -> bool {
    matches!(path, "/health" | "/health/") || path.starts_with("/swagger-ui")
}

pub async fn http_logger(
    req: Request,
    next: Next,
) -> std::result::Result<impl IntoResponse, (StatusCode, String)> {
    let start_time = Instant::now();

    let method = req.method().clone();
    let uri = req.uri().clone();
    let path = uri.path().to_string();
    let x_request_id = req
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    if should_ignore_path(&path) || method == Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    // Buffer the request body so it can be logged and replayed
    let (parts, body) = req.into_parts();
    let bytes = buffer_body("request", body).await?;
    let req_body = parse_json_body(&bytes);
    let req = Request::from_parts(parts, Body::from(bytes));

    let mut response = next.run(req).await;

    let latency = start_time.elapsed();
    let status = response.status();

    let should_log_body = matches!(method.as_str(), "POST" | "PUT" | "PATCH" | "DELETE");
    let res_body = if should_log_body {
        let (parts, body) = response.into_parts();
        let bytes = buffer_body("response", body).await?;
        let json_body = parse_json_body(&bytes);
        response = Response::from_parts(parts, Body::from(bytes));
        json_body
    } else {
        Value::Object(serde_json::Map::new())
    };

    tracing::info!(
        method = ?method,
        path = %path,
        x_request_id = %x_request_id,
        req_body = %req_body,
        status = ?status,
        latency_ms = latency.as_millis(),
        res_body = %res_body,
        app_env = %APP_CONFIG.app_env,
        "HTTP request completed"
    );

    Ok(response)
}

fn parse_json_body(bytes: &Bytes) -> Value {
    let body_str = String::from_utf8_lossy(bytes.as_ref());
    serde_json::from_str::<Value>(&body_str)
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()))
}

pub async fn buffer_body<B>(
    direction: &str,
    body: B,
) -> std::result::Result<Bytes, (StatusCode, String)>
where
    B: BodyExt,
    B::Error: std::fmt::Display,
{
    let bytes = match body.collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(err) => {
            return Err((
                StatusCode::BAD_REQUEST,
                format!("failed to read {direction} body: {err}"),
            ));
        }
    };

    Ok(bytes)
}
