// ABOUTME: Core types and validation for Resonance
// ABOUTME: Foundational package shared by the prompt builder, gateway and orchestrator

pub mod analysis;
pub mod presets;
pub mod slots;
pub mod types;
pub mod validation;

// Re-export main types
pub use analysis::{
    BalancedExpression, ClarityFeedback, CommunicationFeedback, ContextFeedback,
    EmotionalAwareness, EmotionalGuidance, ExpressionAnalysis, ImprovedVersion,
    MessageBreakdown, Perspective, SocialAnalysis, StructuredOutput, ToneFeedback,
};
pub use slots::{ExpressionForm, Slot, SlotSelection};
pub use types::{
    CommunicationContext, ExpressionRequest, ExpressionResult, RefinementRequest,
    SocialSituation,
};

// Re-export validation
pub use validation::{truncate, ValidationError};
