//! Router assembly.

use crate::config::Config;
use crate::routes;
use anyhow::{bail, Context, Result};
use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use facegate_core::Endpoint;
use std::sync::Arc;
use tower_http::{
    cors::{AllowHeaders, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

/// Build the application router for `config`.
///
/// `/` serves the front-end's `index.html`, `/assets` and `/vite.svg` serve
/// the bundle output, and `/api/health` reports whether the build is present.
/// Anything else is a 404.
pub fn build_router(config: &Config) -> Result<Router> {
    let api_routes = Router::new()
        .route("/health", get(routes::health))
        .with_state(Arc::new(config.clone()));

    let app = Router::new()
        .nest("/api", api_routes)
        .route_service("/", ServeFile::new(config.index_file()))
        .route_service("/vite.svg", ServeFile::new(config.favicon_file()))
        .nest_service("/assets", ServeDir::new(config.assets_dir()))
        .layer(cors_layer(&config.allowed_origin)?)
        .layer(TraceLayer::new_for_http());

    Ok(app)
}

/// CORS for a single allowed origin.
pub fn cors_layer(origin: &Endpoint) -> Result<CorsLayer> {
    Ok(CorsLayer::new()
        .allow_origin(cors_origin(origin)?)
        .allow_methods([
            Method::GET,
            Method::HEAD,
            Method::PUT,
            Method::PATCH,
            Method::POST,
            Method::DELETE,
        ])
        .allow_headers(AllowHeaders::mirror_request()))
}

/// Serialize `origin` the way browsers send it in the `Origin` header:
/// lowercase scheme and host, no path.
pub fn cors_origin(origin: &Endpoint) -> Result<HeaderValue> {
    let host = origin.authority();
    if host.is_empty() {
        bail!("Allowed origin has no host");
    }
    if host.contains(['/', '?', '#']) {
        bail!("Allowed origin must not contain a path: {}", origin);
    }

    HeaderValue::from_str(&format!("https://{}", host.to_ascii_lowercase()))
        .with_context(|| format!("Allowed origin is not a valid header value: {}", origin))
}
