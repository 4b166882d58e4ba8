// ABOUTME: Error types for the generative API gateway and response parser
// ABOUTME: Distinguishes transport, timeout, provider status and empty-content failures

use std::time::Duration;

use resonance_config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Request timed out after {} seconds", .0.as_secs_f32())]
    Timeout(Duration),

    #[error("API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Model produced no content: {0}")]
    EmptyResponse(String),

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),
}

pub type GatewayResult<T> = Result<T, GatewayError>;

/// Structured output that failed to parse or match its declared shape.
/// Carries the raw model text for diagnostics.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Malformed model response: {reason}")]
pub struct MalformedResponse {
    pub reason: String,
    pub raw: String,
}

impl MalformedResponse {
    pub(crate) fn new(reason: impl Into<String>, raw: &str) -> Self {
        Self {
            reason: reason.into(),
            raw: raw.to_string(),
        }
    }
}
