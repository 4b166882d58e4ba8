// ABOUTME: Gemini generateContent client implementing GenerativeModel
// ABOUTME: Handles request shaping, provider errors and candidate extraction

use async_trait::async_trait;
use reqwest::Client;
use resonance_config::GeminiSettings;
use resonance_core::truncate;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, info, warn};

use crate::error::{GatewayError, GatewayResult};
use crate::model::{GenerationConfig, GenerativeModel};

const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Debug, Serialize)]
struct GeminiRequest<'a> {
    contents: Vec<GeminiContent<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: &'a GenerationConfig,
}

#[derive(Debug, Serialize)]
struct GeminiContent<'a> {
    parts: Vec<GeminiPart<'a>>,
}

#[derive(Debug, Serialize)]
struct GeminiPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    #[serde(rename = "usageMetadata")]
    usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiCandidateContent>,
    #[serde(rename = "finishReason")]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidateContent {
    #[serde(default)]
    parts: Vec<GeminiCandidatePart>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidatePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UsageMetadata {
    #[serde(rename = "promptTokenCount")]
    prompt_token_count: Option<u32>,
    #[serde(rename = "candidatesTokenCount")]
    candidates_token_count: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorEnvelope {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

/// Client for a generateContent-style endpoint
pub struct GeminiClient {
    client: Client,
    settings: GeminiSettings,
}

impl GeminiClient {
    /// Create HTTP client with timeout configuration
    fn create_client(settings: &GeminiSettings) -> GatewayResult<Client> {
        Client::builder()
            .timeout(settings.request_timeout)
            .connect_timeout(settings.connect_timeout)
            .build()
            .map_err(|e| GatewayError::ClientBuild(e.to_string()))
    }

    pub fn new(settings: GeminiSettings) -> GatewayResult<Self> {
        Ok(Self {
            client: Self::create_client(&settings)?,
            settings,
        })
    }

    /// Build a client from `RESONANCE_*` environment variables
    pub fn from_env() -> GatewayResult<Self> {
        Self::new(GeminiSettings::from_env()?)
    }

    /// Get the model being used by this client
    pub fn model(&self) -> &str {
        &self.settings.model
    }

    fn request_timeout(&self) -> Duration {
        self.settings.request_timeout
    }

    fn map_transport_error(&self, e: reqwest::Error) -> GatewayError {
        if e.is_timeout() {
            error!(
                "Gemini API request timed out after {} seconds",
                self.request_timeout().as_secs()
            );
            GatewayError::Timeout(self.request_timeout())
        } else if e.is_connect() {
            error!("Failed to connect to Gemini API: {}", e);
            GatewayError::RequestFailed(e)
        } else {
            error!("Gemini API request failed: {}", e);
            GatewayError::RequestFailed(e)
        }
    }
}

#[async_trait]
impl GenerativeModel for GeminiClient {
    async fn generate(&self, prompt: &str, config: &GenerationConfig) -> GatewayResult<String> {
        let request = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart { text: prompt }],
            }],
            generation_config: config,
        };

        info!(
            "Making Gemini API request: model={}, max_output_tokens={:?}, timeout={}s",
            self.settings.model,
            config.max_output_tokens,
            self.request_timeout().as_secs()
        );
        debug!("Prompt (first 500 chars): {}", truncate(prompt, 500));

        let response = self
            .client
            .post(self.settings.generate_content_url())
            .header(API_KEY_HEADER, &self.settings.api_key)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        info!("Received response from Gemini API: status={}", status);

        let body = response
            .text()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        if !status.is_success() {
            let message = provider_error_message(&body).unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string()
            });
            error!("Gemini API error: {} - {}", status, message);
            return Err(GatewayError::Api {
                status: status.as_u16(),
                message,
            });
        }

        extract_text(&body)
    }
}

fn provider_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<GeminiErrorEnvelope>(body)
        .ok()
        .map(|envelope| envelope.error.message)
        .or_else(|| {
            let trimmed = body.trim();
            (!trimmed.is_empty()).then(|| truncate(trimmed, 500).to_string())
        })
}

/// Pull the first candidate's text out of a successful response body
fn extract_text(body: &str) -> GatewayResult<String> {
    let value: serde_json::Value = serde_json::from_str(body).map_err(|e| {
        error!(
            "Gemini response is not JSON: {}. Body snippet: {}",
            e,
            truncate(body, 500)
        );
        GatewayError::ParseError(e.to_string())
    })?;

    let response: GeminiResponse = serde_json::from_value(value).map_err(|e| {
        warn!("Gemini response has a malformed candidate list: {}", e);
        GatewayError::EmptyResponse(format!("malformed candidate list: {}", e))
    })?;

    if let Some(usage) = &response.usage_metadata {
        debug!(
            "Gemini usage: prompt_tokens={:?}, candidate_tokens={:?}",
            usage.prompt_token_count, usage.candidates_token_count
        );
    }

    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| GatewayError::EmptyResponse("no candidates returned".to_string()))?;

    let text: String = candidate
        .content
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect()
        })
        .unwrap_or_default();

    let text = text.trim();
    if text.is_empty() {
        let reason = match candidate.finish_reason {
            Some(reason) => format!("candidate has no text (finish reason: {})", reason),
            None => "candidate has no text".to_string(),
        };
        warn!("Gemini returned an empty candidate: {}", reason);
        return Err(GatewayError::EmptyResponse(reason));
    }

    Ok(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_extract_text_joins_parts_and_trims() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"  I feel "},{"text":"great today. "}]}}]}"#;

        assert_eq!(extract_text(body).unwrap(), "I feel great today.");
    }

    #[rstest]
    #[case::no_candidates_key(r#"{}"#)]
    #[case::empty_candidates(r#"{"candidates":[]}"#)]
    #[case::candidate_without_content(r#"{"candidates":[{"finishReason":"SAFETY"}]}"#)]
    #[case::blank_text(r#"{"candidates":[{"content":{"parts":[{"text":"   "}]}}]}"#)]
    #[case::candidates_not_a_list(r#"{"candidates":"oops"}"#)]
    fn test_extract_text_empty_conditions(#[case] body: &str) {
        assert!(matches!(
            extract_text(body),
            Err(GatewayError::EmptyResponse(_))
        ));
    }

    #[test]
    fn test_extract_text_reports_finish_reason() {
        let body = r#"{"candidates":[{"finishReason":"SAFETY"}]}"#;

        match extract_text(body) {
            Err(GatewayError::EmptyResponse(reason)) => assert!(reason.contains("SAFETY")),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_extract_text_non_json_body() {
        assert!(matches!(
            extract_text("<html>oops</html>"),
            Err(GatewayError::ParseError(_))
        ));
    }

    #[test]
    fn test_provider_error_message() {
        assert_eq!(
            provider_error_message(r#"{"error":{"code":400,"message":"API key not valid"}}"#),
            Some("API key not valid".to_string())
        );
        assert_eq!(
            provider_error_message("upstream exploded"),
            Some("upstream exploded".to_string())
        );
        assert_eq!(provider_error_message("  "), None);
    }
}
