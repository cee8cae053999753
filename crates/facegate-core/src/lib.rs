//! Endpoint normalization and client glue for the Facegate front-end.

mod client;
mod endpoint;
mod error;
pub mod socket;

pub use client::{ApiClient, ClientConfig, EnvToken, StaticToken, TokenSource, BASE_URL_ENV, TOKEN_ENV};
pub use endpoint::{normalize_url, Endpoint};
pub use error::FacegateError;

/// Result type for Facegate operations.
pub type Result<T> = std::result::Result<T, FacegateError>;
