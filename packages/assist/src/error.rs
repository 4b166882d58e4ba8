// ABOUTME: Error taxonomy at the orchestrator boundary
// ABOUTME: Converts gateway and parser failures into displayable Failure records

use std::fmt;
use std::time::Duration;

use resonance_ai::{GatewayError, MalformedResponse};
use resonance_core::ValidationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssistError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Request timed out after {} seconds", .0.as_secs())]
    Timeout(Duration),

    #[error("No content produced: {0}")]
    EmptyResponse(String),

    #[error(transparent)]
    MalformedResponse(#[from] MalformedResponse),
}

impl From<GatewayError> for AssistError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::Timeout(after) => AssistError::Timeout(after),
            GatewayError::EmptyResponse(reason) => AssistError::EmptyResponse(reason),
            other => AssistError::Transport(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Validation,
    Transport,
    Timeout,
    EmptyResponse,
    MalformedResponse,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FailureKind::Validation => "validation",
            FailureKind::Transport => "transport",
            FailureKind::Timeout => "timeout",
            FailureKind::EmptyResponse => "empty response",
            FailureKind::MalformedResponse => "malformed response",
        };
        f.write_str(name)
    }
}

/// What the presentation layer shows for a failed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub kind: FailureKind,
    pub message: String,
    /// Raw model text for malformed responses
    pub raw_response: Option<String>,
}

impl From<&AssistError> for Failure {
    fn from(err: &AssistError) -> Self {
        let (kind, message) = match err {
            AssistError::Validation(e) => (FailureKind::Validation, e.to_string()),
            AssistError::Transport(detail) => (
                FailureKind::Transport,
                format!("Couldn't reach the assistant. Please try again. ({detail})"),
            ),
            AssistError::Timeout(after) => (
                FailureKind::Timeout,
                format!(
                    "The assistant took longer than {} seconds to answer. Please try again.",
                    after.as_secs()
                ),
            ),
            AssistError::EmptyResponse(_) => (
                FailureKind::EmptyResponse,
                "The assistant didn't produce a response. Please try again.".to_string(),
            ),
            AssistError::MalformedResponse(_) => (
                FailureKind::MalformedResponse,
                "The assistant's answer couldn't be read. Please try again.".to_string(),
            ),
        };

        let raw_response = match err {
            AssistError::MalformedResponse(m) => Some(m.raw.clone()),
            _ => None,
        };

        Self {
            kind,
            message,
            raw_response,
        }
    }
}
