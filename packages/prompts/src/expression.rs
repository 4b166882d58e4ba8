// ABOUTME: Prompt for the expression generator ("Say For Me")
// ABOUTME: Interpolates resolved slots and intensity, appends optional narrative clauses

use resonance_core::validation::non_blank;
use resonance_core::ExpressionRequest;

use crate::text::sentence;

const PREAMBLE: &str = "The user is a young adult with language impairments and needs you to \
write a few sentences of expressing their feelings for them.";

const INSTRUCTIONS: &str = "Write a considerate and clear text for the user directly with some \
details to explain their true intentions and feelings with potential causes in the situation.

Start the message with 'I' and write in authentic tone. Avoid using numbers to describe the \
emotion intensity; instead, use descriptive language to convey the emotion strength based on \
the intensity level provided, combining with what happens. Write directly for them so that \
they can read it directly. Don't add anything in the brackets.";

/// Build the generator prompt. The request is expected to be validated.
pub fn build_expression_prompt(req: &ExpressionRequest) -> String {
    let mut situation = format!(
        "The user is feeling \"{}\" at an intensity level of {} on a scale from 1 to 10, \
where 1 is very mild and 10 is very strong. They want to communicate with \"{}\" in the \
\"{}\" context. The purpose is to: {}",
        req.emotion.trim(),
        req.emotion_intensity,
        req.recipient.trim(),
        req.scenario.trim(),
        sentence(&req.purpose),
    );

    if let Some(note) = non_blank(req.situation_note.as_deref()) {
        situation.push_str(" There was a situation where ");
        situation.push_str(&sentence(note));
    }
    if let Some(note) = non_blank(req.additional_note.as_deref()) {
        situation.push_str(" Additional information from user: ");
        situation.push_str(&sentence(note));
    }

    format!("{PREAMBLE}\n\n{situation}\n\n{INSTRUCTIONS}")
}
