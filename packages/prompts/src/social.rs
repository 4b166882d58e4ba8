// ABOUTME: Prompt for social situation analysis
// ABOUTME: Asks for missed cues, perspectives, unwritten rules and patterns as strict JSON

use resonance_core::validation::non_blank;
use resonance_core::{SocialAnalysis, SocialSituation, StructuredOutput};

use crate::text::or_unspecified;

pub fn build_social_prompt(situation: &SocialSituation) -> String {
    let people = situation.people().collect::<Vec<_>>().join(", ");

    let mut details = format!(
        "Situation: \"{}\"\nPeople Involved: {}\nUser's Reaction: {}\nOthers' Reactions: {}\nConfusing Aspects: {}",
        situation.situation.trim(),
        people,
        or_unspecified(&situation.user_reaction, "Not specified"),
        or_unspecified(&situation.others_reactions, "Not specified"),
        or_unspecified(&situation.confusing_aspects, "Not specified"),
    );
    if let Some(extra) = non_blank(situation.additional_context.as_deref()) {
        details.push_str("\nAdditional context from the user: ");
        details.push_str(extra);
    }

    format!(
        "Help understand this social situation from an ADHD/HFA perspective:\n\n{details}\n\n\
Provide a detailed analysis in this exact JSON format:\n{}\n\nRespond with the JSON object only.",
        SocialAnalysis::schema_json()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_social_prompt_lists_people_and_schema() {
        let situation = SocialSituation {
            situation: "Everyone went quiet after my comment".to_string(),
            people_involved: vec!["Sam".to_string(), " ".to_string(), "Priya ".to_string()],
            user_reaction: "I kept talking".to_string(),
            others_reactions: "They looked away".to_string(),
            confusing_aspects: String::new(),
            additional_context: None,
        };

        let prompt = build_social_prompt(&situation);

        assert!(prompt.contains("Situation: \"Everyone went quiet after my comment\""));
        assert!(prompt.contains("People Involved: Sam, Priya\n"));
        assert!(prompt.contains("Confusing Aspects: Not specified"));
        assert!(prompt.contains(&SocialAnalysis::schema_json()));
    }
}
