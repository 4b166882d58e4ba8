// ABOUTME: Generative API settings loaded from the environment
// ABOUTME: Validates credentials, endpoint and timeouts before any client is built

use std::env;
use std::fmt;
use std::time::Duration;

use thiserror::Error;
use tracing::info;

use crate::constants::*;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("RESONANCE_GEMINI_API_KEY is not set")]
    MissingApiKey,

    #[error("Invalid timeout for {name}: {value}. Must be a positive number of seconds")]
    InvalidTimeout { name: &'static str, value: String },

    #[error("Invalid base URL: {0}. Must start with http:// or https://")]
    InvalidUrl(String),

    #[error("Value for {0} cannot be empty")]
    EmptyValue(&'static str),
}

/// Everything the gateway needs to reach the generative endpoint
#[derive(Clone, PartialEq)]
pub struct GeminiSettings {
    pub api_key: String,
    pub base_url: String,
    pub api_version: String,
    pub model: String,
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
}

impl GeminiSettings {
    /// Settings with public defaults and an explicitly supplied key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            api_version: DEFAULT_GEMINI_API_VERSION.to_string(),
            model: DEFAULT_GEMINI_MODEL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = match env::var(RESONANCE_GEMINI_API_KEY) {
            Ok(key) if !key.trim().is_empty() => key.trim().to_string(),
            _ => return Err(ConfigError::MissingApiKey),
        };

        let base_url = non_empty_var(RESONANCE_GEMINI_BASE_URL, DEFAULT_GEMINI_BASE_URL)?;
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidUrl(base_url));
        }

        let api_version = non_empty_var(RESONANCE_GEMINI_API_VERSION, DEFAULT_GEMINI_API_VERSION)?;
        let model = non_empty_var(RESONANCE_GEMINI_MODEL, DEFAULT_GEMINI_MODEL)?;

        let request_timeout =
            timeout_var(RESONANCE_HTTP_REQUEST_TIMEOUT_SECS, DEFAULT_REQUEST_TIMEOUT_SECS)?;
        let connect_timeout =
            timeout_var(RESONANCE_HTTP_CONNECT_TIMEOUT_SECS, DEFAULT_CONNECT_TIMEOUT_SECS)?;

        if model != DEFAULT_GEMINI_MODEL {
            info!("Using custom Gemini model: {}", model);
        }

        Ok(Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_version,
            model,
            request_timeout,
            connect_timeout,
        })
    }

    /// Full generateContent URL for the configured model
    pub fn generate_content_url(&self) -> String {
        format!(
            "{}/{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.api_version,
            self.model
        )
    }
}

// Keep the key out of logs and panic messages
impl fmt::Debug for GeminiSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiSettings")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("api_version", &self.api_version)
            .field("model", &self.model)
            .field("request_timeout", &self.request_timeout)
            .field("connect_timeout", &self.connect_timeout)
            .finish()
    }
}

fn non_empty_var(name: &'static str, default: &str) -> Result<String, ConfigError> {
    match env::var(name) {
        Ok(value) if value.trim().is_empty() => Err(ConfigError::EmptyValue(name)),
        Ok(value) => Ok(value.trim().to_string()),
        Err(_) => Ok(default.to_string()),
    }
}

fn timeout_var(name: &'static str, default_secs: u64) -> Result<Duration, ConfigError> {
    let raw = match env::var(name) {
        Ok(raw) => raw,
        Err(_) => return Ok(Duration::from_secs(default_secs)),
    };

    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidTimeout { name, value: raw }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serial_test::serial;

    const ALL_VARS: &[&str] = &[
        RESONANCE_GEMINI_API_KEY,
        RESONANCE_GEMINI_BASE_URL,
        RESONANCE_GEMINI_API_VERSION,
        RESONANCE_GEMINI_MODEL,
        RESONANCE_HTTP_REQUEST_TIMEOUT_SECS,
        RESONANCE_HTTP_CONNECT_TIMEOUT_SECS,
    ];

    fn clear_env() {
        for var in ALL_VARS {
            env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_from_env_requires_api_key() {
        clear_env();

        let result = GeminiSettings::from_env();

        assert_eq!(result.unwrap_err(), ConfigError::MissingApiKey);
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_blank_api_key() {
        clear_env();
        env::set_var(RESONANCE_GEMINI_API_KEY, "   ");

        assert_eq!(
            GeminiSettings::from_env().unwrap_err(),
            ConfigError::MissingApiKey
        );

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        env::set_var(RESONANCE_GEMINI_API_KEY, "test-key");

        let settings = GeminiSettings::from_env().unwrap();

        assert_eq!(settings.api_key, "test-key");
        assert_eq!(settings.base_url, DEFAULT_GEMINI_BASE_URL);
        assert_eq!(settings.model, DEFAULT_GEMINI_MODEL);
        assert_eq!(settings.request_timeout, Duration::from_secs(30));
        assert_eq!(settings.connect_timeout, Duration::from_secs(10));
        assert_eq!(
            settings.generate_content_url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent"
        );

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_with_all_custom() {
        clear_env();
        env::set_var(RESONANCE_GEMINI_API_KEY, "k");
        env::set_var(RESONANCE_GEMINI_BASE_URL, "http://localhost:8080/");
        env::set_var(RESONANCE_GEMINI_API_VERSION, "v1");
        env::set_var(RESONANCE_GEMINI_MODEL, "gemini-1.5-pro-002");
        env::set_var(RESONANCE_HTTP_REQUEST_TIMEOUT_SECS, "45");
        env::set_var(RESONANCE_HTTP_CONNECT_TIMEOUT_SECS, "3");

        let settings = GeminiSettings::from_env().unwrap();

        assert_eq!(settings.base_url, "http://localhost:8080");
        assert_eq!(settings.request_timeout, Duration::from_secs(45));
        assert_eq!(settings.connect_timeout, Duration::from_secs(3));
        assert_eq!(
            settings.generate_content_url(),
            "http://localhost:8080/v1/models/gemini-1.5-pro-002:generateContent"
        );

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_url() {
        clear_env();
        env::set_var(RESONANCE_GEMINI_API_KEY, "k");
        env::set_var(RESONANCE_GEMINI_BASE_URL, "ftp://example.com");

        assert!(matches!(
            GeminiSettings::from_env(),
            Err(ConfigError::InvalidUrl(_))
        ));

        clear_env();
    }

    #[rstest]
    #[case("0")]
    #[case("-5")]
    #[case("soon")]
    #[case("")]
    #[serial]
    fn test_from_env_invalid_timeout(#[case] value: &str) {
        clear_env();
        env::set_var(RESONANCE_GEMINI_API_KEY, "k");
        env::set_var(RESONANCE_HTTP_REQUEST_TIMEOUT_SECS, value);

        let result = GeminiSettings::from_env();

        assert!(matches!(
            result,
            Err(ConfigError::InvalidTimeout { name: RESONANCE_HTTP_REQUEST_TIMEOUT_SECS, .. })
        ));

        clear_env();
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let settings = GeminiSettings::new("super-secret");

        let rendered = format!("{:?}", settings);

        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
