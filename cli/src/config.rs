use std::time::Duration;

use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use oa_client::{HttpOpenAustraliaClient, DEFAULT_BASE_URL};
use serde::{Deserialize, Serialize};
use serde_aux::prelude::deserialize_string_from_number;

/// Default configuration file, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "openaustralia.yaml";

/// Command-line configuration loaded from multiple sources.
///
/// Configuration is loaded in priority order (lowest to highest):
/// 1. Struct defaults
/// 2. openaustralia.yaml file (if exists)
/// 3. Environment variables with OA_ prefix (always wins)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub api: ApiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// API key issued by OpenAustralia (required, no compiled-in default).
    /// All-digit keys arrive from the environment as numbers.
    #[serde(default, deserialize_with = "deserialize_string_from_number")]
    pub key: String,

    /// API root.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds. Unset leaves the transport default.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl ApiConfig {
    /// Build an API client from these settings.
    ///
    /// # Errors
    /// Returns an error if the HTTP transport cannot be constructed.
    pub fn build_client(&self) -> Result<HttpOpenAustraliaClient, reqwest::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = self.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(HttpOpenAustraliaClient::with_client(
            builder.build()?,
            self.base_url.clone(),
            self.key.clone(),
        ))
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Log level filter (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                key: String::new(),
                base_url: default_base_url(),
                timeout_secs: None,
            },
            logging: LoggingConfig::default(),
        }
    }
}

/// Configuration loading and validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Figment(#[from] Box<figment::Error>),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    /// Returns an error if configuration cannot be loaded or is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(DEFAULT_CONFIG_FILE)
    }

    /// Load configuration with a custom YAML file path.
    ///
    /// # Errors
    /// Returns an error if configuration cannot be loaded or is invalid.
    pub fn load_from(yaml_path: &str) -> Result<Self, ConfigError> {
        let config: Self = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Yaml::file(yaml_path))
            .merge(Env::prefixed("OA_").split("__"))
            .extract()?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    /// Returns an error if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.key.trim().is_empty() {
            return Err(ConfigError::Validation(
                "api.key is required. Set OA_API__KEY environment variable or configure in openaustralia.yaml.".into(),
            ));
        }

        let base_url = &self.api.base_url;
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ConfigError::Validation(format!(
                "api.base_url '{base_url}' must start with http:// or https://"
            )));
        }

        if self.api.timeout_secs == Some(0) {
            return Err(ConfigError::Validation(
                "api.timeout_secs cannot be 0".into(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn valid_config() -> Config {
        let mut config = Config::default();
        config.api.key = "test-key".into();
        config
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.api.key.is_empty());
        assert_eq!(config.api.base_url, "https://www.openaustralia.org/api");
        assert!(config.api.timeout_secs.is_none());
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_validation_accepts_valid_config() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_empty_key() {
        let mut config = valid_config();
        config.api.key = "   ".into();
        let result = config.validate();
        assert!(result.unwrap_err().to_string().contains("api.key"));
    }

    #[test]
    fn test_debug_hides_key() {
        let debug = format!("{:?}", valid_config());
        assert!(!debug.contains("test-key"));
    }

    #[test]
    fn test_logging_section_is_optional() {
        let json = r#"{"api": {"key": "abc"}}"#;
        let config: Config = serde_json::from_str(json).expect("should parse");
        assert_eq!(config.api.key, "abc");
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_numeric_key_is_read_as_string() {
        let json = r#"{"api": {"key": 123123}}"#;
        let config: Config = serde_json::from_str(json).expect("should parse");
        assert_eq!(config.api.key, "123123");
    }

    #[test]
    fn test_build_client_uses_configured_base_url() {
        let mut config = valid_config();
        config.api.base_url = "http://localhost:9000/api/".into();
        config.api.timeout_secs = Some(5);

        let client = config.api.build_client().expect("client build");
        assert_eq!(client.base_url(), "http://localhost:9000/api");
    }

    // Table-driven boundary tests for validation rules

    #[test]
    fn base_url_boundaries() {
        let cases = [
            ("https://www.openaustralia.org/api", true, "default"),
            ("http://localhost:8080/api", true, "local http"),
            ("ftp://openaustralia.org/api", false, "ftp scheme"),
            ("www.openaustralia.org/api", false, "no scheme"),
            ("", false, "empty"),
        ];

        for (base_url, should_pass, desc) in cases {
            let mut config = valid_config();
            config.api.base_url = base_url.into();
            let result = config.validate();
            assert_eq!(result.is_ok(), should_pass, "case '{}': {:?}", desc, result);
        }
    }

    #[test]
    fn timeout_boundaries() {
        let cases = [
            (None, true, "unset"),
            (Some(0u64), false, "zero"),
            (Some(1), true, "minimum"),
            (Some(300), true, "long"),
        ];

        for (timeout, should_pass, desc) in cases {
            let mut config = valid_config();
            config.api.timeout_secs = timeout;
            let result = config.validate();
            assert_eq!(result.is_ok(), should_pass, "case '{}': {:?}", desc, result);
        }
    }
}
