// ABOUTME: Strict parsing of structured JSON returned by the model
// ABOUTME: Strips code fences, checks top-level sections, never fills in missing fields

use resonance_core::{truncate, ExpressionAnalysis, SocialAnalysis, StructuredOutput};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::MalformedResponse;

const FENCE: &str = "```";

/// Remove markdown code fences the model may wrap around its answer.
///
/// Handles ```` ```json ... ``` ````, bare ```` ``` ```` fences, and prose before
/// the first fence. Text that already starts as JSON is only trimmed, so
/// backticks inside string values are left alone.
pub fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        return trimmed;
    }
    let Some(open) = trimmed.find(FENCE) else {
        return trimmed;
    };

    let after_open = &trimmed[open + FENCE.len()..];
    // Skip the language tag, e.g. "json"
    let tag_len = after_open
        .find(|c: char| !c.is_ascii_alphanumeric())
        .unwrap_or(after_open.len());
    let body = &after_open[tag_len..];

    let body = match body.rfind(FENCE) {
        Some(close) => &body[..close],
        None => body,
    };
    body.trim()
}

/// Parse model output into `T`, requiring exactly the sections `T` declares
pub fn parse_structured<T: StructuredOutput>(raw: &str) -> Result<T, MalformedResponse> {
    let json_text = strip_code_fences(raw);
    debug!(
        "Raw JSON response (first 5000 chars): {}",
        truncate(json_text, 5000)
    );

    let value: Value = serde_json::from_str(json_text).map_err(|e| {
        warn!(
            "JSON parsing failed: {}. JSON snippet: {}",
            e,
            truncate(json_text, 500)
        );
        MalformedResponse::new(format!("invalid JSON: {}", e), raw)
    })?;

    let Value::Object(map) = &value else {
        return Err(MalformedResponse::new("expected a JSON object", raw));
    };

    let missing: Vec<&str> = T::SECTIONS
        .iter()
        .copied()
        .filter(|section| !map.contains_key(*section))
        .collect();
    if !missing.is_empty() {
        warn!("Model response is missing sections: {:?}", missing);
        return Err(MalformedResponse::new(
            format!("missing sections: {}", missing.join(", ")),
            raw,
        ));
    }

    let unexpected: Vec<&str> = map
        .keys()
        .map(String::as_str)
        .filter(|key| !T::SECTIONS.contains(key))
        .collect();
    if !unexpected.is_empty() {
        warn!("Model response has unexpected sections: {:?}", unexpected);
        return Err(MalformedResponse::new(
            format!("unexpected sections: {}", unexpected.join(", ")),
            raw,
        ));
    }

    serde_json::from_value(value).map_err(|e| {
        warn!("Model response does not match the declared shape: {}", e);
        MalformedResponse::new(format!("section shape mismatch: {}", e), raw)
    })
}

pub fn parse_analysis(raw: &str) -> Result<ExpressionAnalysis, MalformedResponse> {
    parse_structured(raw)
}

pub fn parse_social_analysis(raw: &str) -> Result<SocialAnalysis, MalformedResponse> {
    parse_structured(raw)
}
