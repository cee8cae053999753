//! Logging setup.
//!
//! A preset picked from CLI flags sets the baseline, `--log target=level`
//! refines individual targets, and `RUST_LOG` replaces both when set. Output
//! is either human-readable text or JSON lines.

use std::collections::BTreeMap;
use tracing::Level;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

const TARGET_PREFIX: &str = "facegate::";

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!("Invalid log format: '{}'. Use 'text' or 'json'.", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogPreset {
    /// Startup and request failures only
    #[default]
    Production,
    Verbose,
    Debug,
    /// Everything, including handshake details
    Trace,
    /// Warnings and errors
    Quiet,
}

impl LogPreset {
    fn directives(self) -> &'static [&'static str] {
        match self {
            LogPreset::Production => &[
                "facegate::startup=info",
                "facegate::http=info",
                "facegate::client=warn",
                "facegate::ws=info",
                "tower_http=warn",
            ],
            LogPreset::Verbose => &["facegate=info", "tower_http=info"],
            LogPreset::Debug => &["facegate=debug", "tower_http=debug"],
            LogPreset::Trace => &["facegate=trace", "tower_http=trace"],
            LogPreset::Quiet => &["facegate=warn", "tower_http=error"],
        }
    }
}

/// Logging configuration built from CLI arguments.
#[derive(Debug, Clone, Default)]
pub struct LogConfig {
    pub preset: LogPreset,
    /// Per-target level overrides, keyed by full target name
    pub overrides: BTreeMap<String, Level>,
    pub format: LogFormat,
}

impl LogConfig {
    /// Quiet beats trace beats debug beats verbose.
    pub fn from_cli(
        verbose: bool,
        debug: bool,
        trace: bool,
        quiet: bool,
        log_overrides: Vec<String>,
        format: LogFormat,
    ) -> Self {
        let preset = if quiet {
            LogPreset::Quiet
        } else if trace {
            LogPreset::Trace
        } else if debug {
            LogPreset::Debug
        } else if verbose {
            LogPreset::Verbose
        } else {
            LogPreset::Production
        };

        let overrides = log_overrides
            .iter()
            .flat_map(|arg| arg.split(','))
            .filter_map(|part| {
                let (target, level) = part.split_once('=')?;
                let level = parse_level(level.trim())?;
                Some((qualify_target(target.trim()), level))
            })
            .collect();

        Self {
            preset,
            overrides,
            format,
        }
    }

    /// Build the filter; `RUST_LOG` wins when present.
    pub fn build_filter(&self) -> EnvFilter {
        if let Ok(env_filter) = EnvFilter::try_from_default_env() {
            return env_filter;
        }
        EnvFilter::try_new(self.directives()).unwrap_or_else(|_| EnvFilter::new("info"))
    }

    fn directives(&self) -> String {
        let mut directives: Vec<String> = self
            .preset
            .directives()
            .iter()
            .map(|d| d.to_string())
            .collect();

        for (target, level) in &self.overrides {
            directives.push(format!("{}={}", target, level.as_str().to_ascii_lowercase()));
        }

        directives.join(",")
    }
}

/// "ws" -> "facegate::ws"; full names and tower_http pass through.
fn qualify_target(target: &str) -> String {
    if target.starts_with(TARGET_PREFIX) || target == "facegate" || target.starts_with("tower_http") {
        target.to_string()
    } else {
        format!("{}{}", TARGET_PREFIX, target)
    }
}

fn parse_level(s: &str) -> Option<Level> {
    match s.to_ascii_lowercase().as_str() {
        "trace" => Some(Level::TRACE),
        "debug" => Some(Level::DEBUG),
        "info" => Some(Level::INFO),
        "warn" | "warning" => Some(Level::WARN),
        "error" => Some(Level::ERROR),
        _ => None,
    }
}

/// Install the global subscriber.
pub fn init(config: &LogConfig) {
    let filter = config.build_filter();

    match config.format {
        LogFormat::Text => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_target(true).with_thread_ids(false))
                .init();
        }
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_span_events(FmtSpan::CLOSE),
                )
                .init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_from_str() {
        assert_eq!("text".parse::<LogFormat>().unwrap(), LogFormat::Text);
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert!("yaml".parse::<LogFormat>().is_err());
    }

    #[test]
    fn test_preset_priority() {
        let config = LogConfig::from_cli(true, true, true, true, vec![], LogFormat::Text);
        assert_eq!(config.preset, LogPreset::Quiet);

        let config = LogConfig::from_cli(true, true, true, false, vec![], LogFormat::Text);
        assert_eq!(config.preset, LogPreset::Trace);

        let config = LogConfig::from_cli(true, true, false, false, vec![], LogFormat::Text);
        assert_eq!(config.preset, LogPreset::Debug);

        let config = LogConfig::from_cli(false, false, false, false, vec![], LogFormat::Text);
        assert_eq!(config.preset, LogPreset::Production);
    }

    #[test]
    fn test_overrides_are_qualified() {
        let config = LogConfig::from_cli(
            false,
            false,
            false,
            false,
            vec!["ws=debug".into(), "client=trace, tower_http=warn".into(), "http=loud".into()],
            LogFormat::Text,
        );

        assert_eq!(config.overrides.get("facegate::ws"), Some(&Level::DEBUG));
        assert_eq!(config.overrides.get("facegate::client"), Some(&Level::TRACE));
        assert_eq!(config.overrides.get("tower_http"), Some(&Level::WARN));
        assert!(!config.overrides.contains_key("facegate::http"));
    }

    #[test]
    fn test_overrides_appended_after_preset() {
        let config = LogConfig::from_cli(
            false,
            false,
            false,
            true,
            vec!["facegate::startup=info".into()],
            LogFormat::Text,
        );
        assert_eq!(
            config.directives(),
            "facegate=warn,tower_http=error,facegate::startup=info"
        );
    }
}
