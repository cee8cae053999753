//! HTTP route handlers.

use crate::config::Config;
use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    /// Whether `index.html` exists in the configured dist directory.
    pub frontend_built: bool,
}

/// 200 when the front-end build is in place, 503 otherwise.
pub async fn health(State(config): State<Arc<Config>>) -> (StatusCode, Json<HealthResponse>) {
    let frontend_built = tokio::fs::try_exists(config.index_file())
        .await
        .unwrap_or(false);

    let (code, status) = if frontend_built {
        (StatusCode::OK, "ok")
    } else {
        tracing::warn!(
            target: "facegate::http",
            "Front-end build missing at {}",
            config.index_file().display()
        );
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    (
        code,
        Json(HealthResponse {
            status,
            version: env!("CARGO_PKG_VERSION"),
            frontend_built,
        }),
    )
}
