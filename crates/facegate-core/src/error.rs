//! Error types for Facegate.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FacegateError {
    #[error("Base URL not configured: set {0}")]
    MissingBaseUrl(String),

    #[error("Endpoint has no host: {0}")]
    EmptyHost(String),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("WebSocket error: {0}")]
    WebSocket(#[from] tokio_tungstenite::tungstenite::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}
