// ABOUTME: Request and result records for every assistant feature
// ABOUTME: Requests are immutable once sent; results replace each other on regeneration

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::slots::Slot;
use crate::presets::OTHER;
use crate::validation::{append_note, require_text, validate_intensity, ValidationError};

/// Fully resolved input for the expression generator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpressionRequest {
    pub emotion: String,
    pub emotion_intensity: u8,
    pub recipient: String,
    pub scenario: String,
    pub purpose: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub situation_note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_note: Option<String>,
}

impl ExpressionRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let slots = [
            (Slot::Emotion, &self.emotion),
            (Slot::Recipient, &self.recipient),
            (Slot::Scenario, &self.scenario),
            (Slot::Purpose, &self.purpose),
        ];
        for (slot, value) in slots {
            let value = value.trim();
            if value.is_empty() || value.eq_ignore_ascii_case(OTHER) {
                return Err(ValidationError::UnresolvedSlot(slot));
            }
        }
        validate_intensity(self.emotion_intensity)
    }

    /// Copy of this request with `note` appended to the additional user input
    pub fn with_additional_note(&self, note: Option<&str>) -> Self {
        Self {
            additional_note: append_note(self.additional_note.as_deref(), note),
            ..self.clone()
        }
    }
}

/// Text produced by one generator call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpressionResult {
    pub text: String,
    pub generated_at: DateTime<Utc>,
}

impl ExpressionResult {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            generated_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommunicationContext {
    Email,
    #[default]
    Conversation,
    Meeting,
    Presentation,
    Feedback,
    Request,
    Other,
}

impl CommunicationContext {
    pub const ALL: [CommunicationContext; 7] = [
        CommunicationContext::Email,
        CommunicationContext::Conversation,
        CommunicationContext::Meeting,
        CommunicationContext::Presentation,
        CommunicationContext::Feedback,
        CommunicationContext::Request,
        CommunicationContext::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CommunicationContext::Email => "email",
            CommunicationContext::Conversation => "conversation",
            CommunicationContext::Meeting => "meeting",
            CommunicationContext::Presentation => "presentation",
            CommunicationContext::Feedback => "feedback",
            CommunicationContext::Request => "request",
            CommunicationContext::Other => "other",
        }
    }
}

impl fmt::Display for CommunicationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommunicationContext {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|ctx| ctx.as_str() == wanted)
            .ok_or_else(|| ValidationError::UnknownContext(s.to_string()))
    }
}

/// Input for the "Express Better" refiner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefinementRequest {
    pub content: String,
    pub context: CommunicationContext,
    pub audience: String,
    pub goal: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_context: Option<String>,
}

impl RefinementRequest {
    pub fn new(
        content: impl Into<String>,
        context: CommunicationContext,
        audience: impl Into<String>,
        goal: impl Into<String>,
    ) -> Self {
        Self {
            content: content.into(),
            context,
            audience: audience.into(),
            goal: goal.into(),
            additional_context: None,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("content", &self.content)
    }

    pub fn with_additional_context(&self, note: Option<&str>) -> Self {
        Self {
            additional_context: append_note(self.additional_context.as_deref(), note),
            ..self.clone()
        }
    }
}

/// Input for social situation analysis
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialSituation {
    pub situation: String,
    pub people_involved: Vec<String>,
    pub user_reaction: String,
    pub others_reactions: String,
    pub confusing_aspects: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_context: Option<String>,
}

impl SocialSituation {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("situation", &self.situation)?;
        if self.people().next().is_none() {
            return Err(ValidationError::EmptyField("people involved"));
        }
        Ok(())
    }

    /// Non-blank, trimmed names of the people involved
    pub fn people(&self) -> impl Iterator<Item = &str> {
        self.people_involved
            .iter()
            .map(|p| p.trim())
            .filter(|p| !p.is_empty())
    }

    pub fn with_additional_context(&self, note: Option<&str>) -> Self {
        Self {
            additional_context: append_note(self.additional_context.as_deref(), note),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn request() -> ExpressionRequest {
        ExpressionRequest {
            emotion: "Happy".to_string(),
            emotion_intensity: 7,
            recipient: "Friend".to_string(),
            scenario: "School".to_string(),
            purpose: "Express feelings".to_string(),
            situation_note: None,
            additional_note: None,
        }
    }

    #[test]
    fn test_expression_request_validate() {
        assert!(request().validate().is_ok());

        let mut missing = request();
        missing.scenario = " ".to_string();
        assert_eq!(
            missing.validate(),
            Err(ValidationError::UnresolvedSlot(Slot::Scenario))
        );
    }

    #[rstest]
    #[case::emotion(Slot::Emotion)]
    #[case::recipient(Slot::Recipient)]
    #[case::scenario(Slot::Scenario)]
    #[case::purpose(Slot::Purpose)]
    fn test_other_placeholder_is_unresolved(#[case] slot: Slot) {
        let mut placeholder = request();
        let value = match slot {
            Slot::Emotion => &mut placeholder.emotion,
            Slot::Recipient => &mut placeholder.recipient,
            Slot::Scenario => &mut placeholder.scenario,
            Slot::Purpose => &mut placeholder.purpose,
        };
        *value = " other ".to_string();

        assert_eq!(
            placeholder.validate(),
            Err(ValidationError::UnresolvedSlot(slot))
        );
    }

    #[test]
    fn test_with_additional_note_keeps_base_note() {
        let base = ExpressionRequest {
            additional_note: Some("my friend lent me notes".to_string()),
            ..request()
        };

        let retry = base.with_additional_note(Some("  keep it short "));

        assert_eq!(
            retry.additional_note.as_deref(),
            Some("my friend lent me notes. keep it short")
        );
        assert_eq!(base.with_additional_note(None), base);
        assert_eq!(retry.emotion, "Happy");
    }

    #[test]
    fn test_with_additional_context_keeps_base_context() {
        let base = RefinementRequest::new("Can we talk?", CommunicationContext::Email, "", "")
            .with_additional_context(Some("first week on the team"));

        let retry = base.with_additional_context(Some("sound warmer"));

        assert_eq!(
            retry.additional_context.as_deref(),
            Some("first week on the team. sound warmer")
        );

        let situation = SocialSituation {
            situation: "They left early".to_string(),
            people_involved: vec!["Sam".to_string()],
            additional_context: Some("It was a birthday party".to_string()),
            ..Default::default()
        };
        assert_eq!(
            situation
                .with_additional_context(Some("Sam barely spoke"))
                .additional_context
                .as_deref(),
            Some("It was a birthday party. Sam barely spoke")
        );
    }

    #[test]
    fn test_expression_request_json_shape() {
        let json = serde_json::to_value(request()).unwrap();

        assert_eq!(json["emotionIntensity"], 7);
        assert!(json.get("situationNote").is_none());
    }

    #[rstest]
    #[case("email", CommunicationContext::Email)]
    #[case("Meeting", CommunicationContext::Meeting)]
    #[case(" other ", CommunicationContext::Other)]
    fn test_context_from_str(#[case] input: &str, #[case] expected: CommunicationContext) {
        assert_eq!(input.parse::<CommunicationContext>().unwrap(), expected);
    }

    #[test]
    fn test_context_from_str_unknown() {
        assert_eq!(
            "lecture".parse::<CommunicationContext>(),
            Err(ValidationError::UnknownContext("lecture".to_string()))
        );
    }

    #[test]
    fn test_refinement_requires_content() {
        let request = RefinementRequest::new("  ", CommunicationContext::Email, "Boss", "Ask");

        assert_eq!(
            request.validate(),
            Err(ValidationError::EmptyField("content"))
        );
    }

    #[test]
    fn test_social_situation_requires_people() {
        let situation = SocialSituation {
            situation: "Nobody laughed at my joke".to_string(),
            people_involved: vec!["  ".to_string()],
            ..Default::default()
        };

        assert_eq!(
            situation.validate(),
            Err(ValidationError::EmptyField("people involved"))
        );
    }
}
