// ABOUTME: Provider-neutral seam for text generation
// ABOUTME: GenerationConfig options pass through to the provider verbatim

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::GatewayResult;

/// Sampling options forwarded as the provider's `generationConfig`.
/// Unset options are omitted from the request body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
}

impl GenerationConfig {
    /// Short, focused free text for the expression generator
    pub fn expression() -> Self {
        Self {
            temperature: Some(0.5),
            max_output_tokens: Some(800),
            top_p: Some(0.8),
            top_k: Some(10),
        }
    }

    /// Longer structured JSON for refinement and social analysis
    pub fn analysis() -> Self {
        Self {
            temperature: Some(0.7),
            max_output_tokens: Some(2048),
            top_p: None,
            top_k: None,
        }
    }
}

/// Sends one prompt and returns the generated text.
///
/// Implementations make exactly one outbound call per invocation and never
/// retry internally.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    async fn generate(&self, prompt: &str, config: &GenerationConfig) -> GatewayResult<String>;
}
