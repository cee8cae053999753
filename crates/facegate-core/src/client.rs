//! HTTP client for the processing backend.
//!
//! Every request is sent against a normalized [`Endpoint`] with a JSON content
//! type, and carries `Authorization: Bearer <token>` whenever the configured
//! [`TokenSource`] has a token at the time the request is built.

use crate::{Endpoint, FacegateError, Result};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

/// Environment variable holding the backend base URL.
pub const BASE_URL_ENV: &str = "FACEFUSION_BASE_URL";

/// Environment variable holding the bearer token.
pub const TOKEN_ENV: &str = "FF_TOKEN";

/// Supplies the bearer token for outgoing requests.
///
/// Consulted once per request, so a token that appears or changes after the
/// client was built is picked up by the next call.
pub trait TokenSource: Send + Sync {
    fn token(&self) -> Option<String>;
}

/// A fixed token (or none).
#[derive(Debug, Clone, Default)]
pub struct StaticToken(Option<String>);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(Some(token.into()))
    }

    pub fn none() -> Self {
        Self(None)
    }
}

impl TokenSource for StaticToken {
    fn token(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Reads the token from an environment variable on every request.
#[derive(Debug, Clone)]
pub struct EnvToken {
    var: String,
}

impl EnvToken {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvToken {
    fn default() -> Self {
        Self::new(TOKEN_ENV)
    }
}

impl TokenSource for EnvToken {
    fn token(&self) -> Option<String> {
        std::env::var(&self.var).ok()
    }
}

/// Client settings.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: Endpoint,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<Endpoint>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Build from `FACEFUSION_BASE_URL`.
    pub fn from_env() -> Result<Self> {
        let raw = std::env::var(BASE_URL_ENV)
            .map_err(|_| FacegateError::MissingBaseUrl(BASE_URL_ENV.to_string()))?;
        Ok(Self::new(raw.as_str()))
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// JSON API client with bearer-token injection.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Endpoint,
    tokens: Arc<dyn TokenSource>,
}

impl ApiClient {
    pub fn new(config: ClientConfig, tokens: impl TokenSource + 'static) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        tracing::debug!(target: "facegate::client", "API client targeting {}", config.base_url);

        Ok(Self {
            client,
            base_url: config.base_url,
            tokens: Arc::new(tokens),
        })
    }

    /// Client configured from `FACEFUSION_BASE_URL` with the token read from `FF_TOKEN`.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?, EnvToken::default())
    }

    pub fn base_url(&self) -> &Endpoint {
        &self.base_url
    }

    /// Start a request to `path` on the backend with auth headers attached.
    pub fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let url = self.base_url.join(path);
        let mut builder = self.client.request(method, url);

        if let Some(token) = self.tokens.token().filter(|t| !t.is_empty()) {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token))?;
            value.set_sensitive(true);
            builder = builder.header(AUTHORIZATION, value);
        }

        Ok(builder)
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        fetch_json(self.request(Method::GET, path)?).await
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let payload = serde_json::to_vec(body)?;
        fetch_json(self.request(Method::POST, path)?.body(payload)).await
    }
}

async fn fetch_json<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T> {
    let response = send(builder).await?;
    Ok(response.json().await?)
}

async fn send(builder: RequestBuilder) -> Result<Response> {
    let response = builder.send().await?;
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    tracing::warn!(target: "facegate::client", "Request failed with status {}: {}", status, body);
    Err(FacegateError::Status { status, body })
}
