//! Server configuration.

use anyhow::{Context, Result};
use facegate_core::Endpoint;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Build output of the front-end (`index.html`, `vite.svg`, `assets/`).
    #[serde(default = "default_dist_dir")]
    pub dist_dir: PathBuf,
    /// Origin allowed by CORS. Normalized on load.
    #[serde(default = "default_allowed_origin")]
    pub allowed_origin: Endpoint,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_dist_dir() -> PathBuf {
    PathBuf::from("./dist")
}

fn default_allowed_origin() -> Endpoint {
    Endpoint::parse("https://phh.internal")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            dist_dir: default_dist_dir(),
            allowed_origin: default_allowed_origin(),
        }
    }
}

impl Config {
    /// Load config from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        Ok(config)
    }

    /// Load config from default location (config/default.toml) or fall back to defaults.
    pub fn load() -> Result<Self> {
        let config_path = PathBuf::from("config/default.toml");
        if config_path.exists() {
            return Self::load_from(&config_path);
        }

        Ok(Config::default())
    }

    pub fn index_file(&self) -> PathBuf {
        self.dist_dir.join("index.html")
    }

    pub fn assets_dir(&self) -> PathBuf {
        self.dist_dir.join("assets")
    }

    pub fn favicon_file(&self) -> PathBuf {
        self.dist_dir.join("vite.svg")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.port, 3000);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.allowed_origin.as_str(), "https://phh.internal");
        assert_eq!(config.index_file(), PathBuf::from("./dist/index.html"));
        assert_eq!(config.assets_dir(), PathBuf::from("./dist/assets"));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str("port = 8081").unwrap();
        assert_eq!(config.port, 8081);
        assert_eq!(config.dist_dir, PathBuf::from("./dist"));
    }

    #[test]
    fn test_allowed_origin_normalized_on_load() {
        let config: Config = toml::from_str(r#"allowed_origin = " http://ui.example.org/ ""#).unwrap();
        assert_eq!(config.allowed_origin.as_str(), "https://ui.example.org");
    }

    #[test]
    fn test_load_from_missing_file_errors() {
        let err = Config::load_from(Path::new("/nonexistent/facegate.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }
}
