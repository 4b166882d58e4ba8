// ABOUTME: Prompt for the "Express Better" refiner
// ABOUTME: Embeds the ExpressionAnalysis schema example so parser and prompt share one shape

use resonance_core::validation::non_blank;
use resonance_core::{ExpressionAnalysis, RefinementRequest, StructuredOutput};

use crate::text::or_unspecified;

const GUIDELINES: &str = "Remember to:
1. Be supportive and understanding
2. Explain 'why' for each suggestion
3. Keep feedback constructive and specific
4. Focus on both clarity and emotional impact
5. Provide practical, actionable advice
6. Respond with the JSON object only";

pub fn build_refinement_prompt(req: &RefinementRequest) -> String {
    let mut details = format!(
        "Message to analyze: \"{}\"\nCommunication Context: {}\nSpeaking to: {}\nGoal: {}",
        req.content.trim(),
        req.context,
        or_unspecified(&req.audience, "Not specified"),
        or_unspecified(&req.goal, "Not specified"),
    );
    if let Some(extra) = non_blank(req.additional_context.as_deref()) {
        details.push_str("\nAdditional context from the user: ");
        details.push_str(extra);
    }

    format!(
        "You are a supportive communication coach helping someone with ADHD/High Functioning \
Autism express themselves better. Analyze their message with empathy and provide detailed, \
constructive feedback.\n\n{details}\n\nProvide a detailed analysis in this exact JSON format:\n{}\n\n{GUIDELINES}",
        ExpressionAnalysis::schema_json()
    )
}
