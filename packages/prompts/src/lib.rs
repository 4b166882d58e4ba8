// ABOUTME: Prompt construction for every Resonance feature
// ABOUTME: Pure, deterministic builders mapping typed requests to prompt strings

mod expression;
mod refinement;
mod social;
mod text;

pub use expression::build_expression_prompt;
pub use refinement::build_refinement_prompt;
pub use social::build_social_prompt;
