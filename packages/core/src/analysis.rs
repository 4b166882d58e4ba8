// ABOUTME: Structured model output types and their embedded JSON schema examples
// ABOUTME: The same declaration drives both the prompt's schema text and response parsing

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A response shape the model is asked to return as strict JSON.
///
/// `schema_example` is serialized into the prompt, and parsing deserializes
/// into `Self`, so the two can not drift apart.
pub trait StructuredOutput: Serialize + DeserializeOwned {
    /// Required top-level keys, in prompt order
    const SECTIONS: &'static [&'static str];

    /// Instance whose string values describe what belongs in each field
    fn schema_example() -> Self;

    fn schema_json() -> String {
        let json = serde_json::to_string_pretty(&Self::schema_example());
        debug_assert!(json.is_ok(), "schema example contains only strings and lists");
        json.unwrap_or_default()
    }
}

// ============================================================================
// Expression analysis ("Express Better")
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ExpressionAnalysis {
    pub message_breakdown: MessageBreakdown,
    pub communication_feedback: CommunicationFeedback,
    pub emotional_guidance: EmotionalGuidance,
    pub improved_version: ImprovedVersion,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MessageBreakdown {
    pub main_idea: String,
    pub supporting_points: Vec<String>,
    pub action_needed: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CommunicationFeedback {
    pub tone_feedback: Vec<ToneFeedback>,
    pub clarity_feedback: Vec<ClarityFeedback>,
    pub context_feedback: Vec<ContextFeedback>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ToneFeedback {
    pub what_we_noticed: String,
    pub how_it_might_affect: String,
    pub gentler_way: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ClarityFeedback {
    pub unclear_part: String,
    pub why_it_matters: String,
    pub clearer_way: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ContextFeedback {
    pub missing_info: String,
    pub why_it_helps: String,
    pub how_to_add: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EmotionalGuidance {
    pub emotional_awareness: EmotionalAwareness,
    pub balanced_expression: BalancedExpression,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EmotionalAwareness {
    pub your_feeling: String,
    pub understanding_why: String,
    pub impact_on_others: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BalancedExpression {
    pub challenge: String,
    pub validation: String,
    pub better_approach: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ImprovedVersion {
    pub suggestion: String,
    pub explanation: String,
}

impl StructuredOutput for ExpressionAnalysis {
    const SECTIONS: &'static [&'static str] = &[
        "messageBreakdown",
        "communicationFeedback",
        "emotionalGuidance",
        "improvedVersion",
    ];

    fn schema_example() -> Self {
        Self {
            message_breakdown: MessageBreakdown {
                main_idea: "The core message they want to convey".into(),
                supporting_points: vec!["Important details that help explain their point".into()],
                action_needed: "What they'd like the other person to do".into(),
            },
            communication_feedback: CommunicationFeedback {
                tone_feedback: vec![ToneFeedback {
                    what_we_noticed: "Observation about tone in a specific part".into(),
                    how_it_might_affect: "How this tone might impact the listener".into(),
                    gentler_way: "A more effective way to express the same thing".into(),
                }],
                clarity_feedback: vec![ClarityFeedback {
                    unclear_part: "Part that might be confusing".into(),
                    why_it_matters: "Why being clearer here would help".into(),
                    clearer_way: "How to make this part more understandable".into(),
                }],
                context_feedback: vec![ContextFeedback {
                    missing_info: "Important background information that's missing".into(),
                    why_it_helps: "Why adding this information would help".into(),
                    how_to_add: "Natural way to include this information".into(),
                }],
            },
            emotional_guidance: EmotionalGuidance {
                emotional_awareness: EmotionalAwareness {
                    your_feeling: "Emotion detected in the message".into(),
                    understanding_why: "Validation of why they might feel this way".into(),
                    impact_on_others: "How these emotions might be received".into(),
                },
                balanced_expression: BalancedExpression {
                    challenge: "What's challenging about expressing this".into(),
                    validation: "Acknowledging the validity of their feelings".into(),
                    better_approach: "How to express these feelings effectively".into(),
                },
            },
            improved_version: ImprovedVersion {
                suggestion: "A revised version of their message".into(),
                explanation: "Why these changes help".into(),
            },
        }
    }
}

// ============================================================================
// Social situation analysis
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SocialAnalysis {
    pub missed_cues: Vec<String>,
    pub perspectives: Vec<Perspective>,
    pub social_rules: Vec<String>,
    pub patterns: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Perspective {
    pub person: String,
    pub viewpoint: String,
    pub reasoning: String,
}

impl StructuredOutput for SocialAnalysis {
    const SECTIONS: &'static [&'static str] =
        &["missedCues", "perspectives", "socialRules", "patterns"];

    fn schema_example() -> Self {
        Self {
            missed_cues: vec!["social cues that might have been missed".into()],
            perspectives: vec![Perspective {
                person: "person involved".into(),
                viewpoint: "their perspective".into(),
                reasoning: "why they might have felt/acted this way".into(),
            }],
            social_rules: vec!["relevant unwritten social rules".into()],
            patterns: vec!["patterns to recognize in similar situations".into()],
        }
    }
}
