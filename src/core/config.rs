//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::info;

use crate::core::language::INTERMEDIATE_LANGUAGE;

/// Default translate page endpoint
pub const DEFAULT_ENDPOINT: &str = "http://translate.google.com/translate_t";

/// Browser identity sent with every request; the service treats library
/// user agents differently.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/4.0 (compatible; MSIE 7.0; Windows NT 5.1)";

/// Configuration for translator
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatorConfig {
    /// Translate page URL, without query string
    pub endpoint: String,
    /// `User-Agent` header sent with every request
    pub user_agent: String,
    /// Language used to bridge unsupported pairs
    pub intermediate_language: String,
    /// Whether requests are spaced at all
    pub rate_control: bool,
    /// Minimum spacing between requests
    pub rate_delay_ms: u64,
    /// Per-request timeout
    pub timeout_ms: u64,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            intermediate_language: INTERMEDIATE_LANGUAGE.to_string(),
            rate_control: true,
            rate_delay_ms: 2000,
            timeout_ms: 30000,
        }
    }
}

impl TranslatorConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();

        let endpoint = std::env::var("GTRANSLATE_ENDPOINT").unwrap_or(defaults.endpoint);

        let user_agent = std::env::var("GTRANSLATE_USER_AGENT").unwrap_or(defaults.user_agent);

        let intermediate_language = std::env::var("GTRANSLATE_INTERMEDIATE_LANGUAGE")
            .unwrap_or(defaults.intermediate_language);

        let rate_control = std::env::var("GTRANSLATE_RATE_CONTROL")
            .unwrap_or_else(|_| "true".to_string())
            .parse::<bool>()?;

        let rate_delay_ms = std::env::var("GTRANSLATE_RATE_DELAY_MS")
            .unwrap_or_else(|_| "2000".to_string())
            .parse::<u64>()?;

        let timeout_ms = std::env::var("GTRANSLATE_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".to_string())
            .parse::<u64>()?;

        Ok(Self {
            endpoint,
            user_agent,
            intermediate_language,
            rate_control,
            rate_delay_ms,
            timeout_ms,
        })
    }

    /// Load configuration from `GTRANSLATE_CONFIG` if set, otherwise from the environment
    pub fn load() -> anyhow::Result<Self> {
        let config = match std::env::var("GTRANSLATE_CONFIG") {
            Ok(path) => {
                info!("Loading configuration from {}", path);
                Self::from_file(path)?
            }
            Err(_) => Self::from_env()?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Load from JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.endpoint.is_empty() {
            return Err(anyhow::anyhow!("Endpoint is required"));
        }

        if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
            return Err(anyhow::anyhow!("Endpoint must be an http(s) URL: {}", self.endpoint));
        }

        if self.user_agent.is_empty() {
            return Err(anyhow::anyhow!("User agent is required"));
        }

        if self.intermediate_language.is_empty() {
            return Err(anyhow::anyhow!("Intermediate language is required"));
        }

        if self.timeout_ms == 0 {
            return Err(anyhow::anyhow!("timeout_ms must be greater than 0"));
        }

        Ok(())
    }

    /// `rate_delay_ms` as a `Duration`
    pub fn rate_delay(&self) -> Duration {
        Duration::from_millis(self.rate_delay_ms)
    }

    /// `timeout_ms` as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TranslatorConfig::default();
        assert_eq!(config.endpoint, "http://translate.google.com/translate_t");
        assert_eq!(config.intermediate_language, "en");
        assert!(config.rate_control);
        assert_eq!(config.rate_delay(), Duration::from_millis(2000));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_bad_endpoint() {
        let config = TranslatorConfig {
            endpoint: "ftp://example.com".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = TranslatorConfig {
            endpoint: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_zero_timeout() {
        let config = TranslatorConfig {
            timeout_ms: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gtranslate.json");

        let config = TranslatorConfig {
            endpoint: "http://127.0.0.1:9000/translate_t".to_string(),
            rate_control: false,
            rate_delay_ms: 500,
            ..Default::default()
        };
        config.to_file(&path).unwrap();

        let loaded = TranslatorConfig::from_file(&path).unwrap();
        assert_eq!(loaded.endpoint, config.endpoint);
        assert!(!loaded.rate_control);
        assert_eq!(loaded.rate_delay_ms, 500);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.json");
        std::fs::write(&path, r#"{ "rate_delay_ms": 100 }"#).unwrap();

        let loaded = TranslatorConfig::from_file(&path).unwrap();
        assert_eq!(loaded.rate_delay_ms, 100);
        assert_eq!(loaded.user_agent, DEFAULT_USER_AGENT);
    }
}
