// ABOUTME: Preset tag catalogs offered by the assistant forms
// ABOUTME: Emotions, recipients, scenarios, purposes and refiner suggestions

use serde::Serialize;

/// Placeholder tag meaning "use the custom value for this slot"
pub const OTHER: &str = "Other";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Preset {
    pub label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<&'static str>,
}

impl Preset {
    const fn plain(label: &'static str) -> Self {
        Self { label, emoji: None }
    }

    const fn with_emoji(label: &'static str, emoji: &'static str) -> Self {
        Self {
            label,
            emoji: Some(emoji),
        }
    }

    pub fn is_other(&self) -> bool {
        self.label == OTHER
    }
}

pub const EMOTIONS: &[Preset] = &[
    Preset::with_emoji("Happy", "😊"),
    Preset::with_emoji("Sad", "😢"),
    Preset::with_emoji("Angry", "😡"),
    Preset::with_emoji("Worried", "😨"),
    Preset::plain(OTHER),
];

pub const DETAILED_EMOTIONS: &[Preset] = &[
    Preset::plain("Overwhelmed"),
    Preset::plain("Stressed"),
    Preset::plain("Anxious"),
    Preset::plain("Frustrated"),
    Preset::plain("Annoyed"),
    Preset::plain("Nervous"),
];

pub const RECIPIENTS: &[Preset] = &[
    Preset::plain("Friend"),
    Preset::plain("Family"),
    Preset::plain("Romantic interest"),
    Preset::plain("Peers"),
    Preset::plain(OTHER),
];

pub const SCENARIOS: &[Preset] = &[
    Preset::plain("School"),
    Preset::plain("Home"),
    Preset::plain("Public places"),
    Preset::plain("Workplace"),
    Preset::plain("Online"),
    Preset::plain("Medical Settings"),
    Preset::plain(OTHER),
];

pub const PURPOSES: &[Preset] = &[
    Preset::plain("Express feelings"),
    Preset::plain("Seek help"),
    Preset::plain(OTHER),
];

// Refiner suggestions

pub const REFINE_CONTEXTS: &[&str] = &[
    "Work/Professional",
    "Friends/Family",
    "Romantic Relationship",
    "Social Gathering",
    "Online Communication",
    "Academic Setting",
    "Healthcare",
    "Customer Service",
];

pub const REFINE_AUDIENCES: &[&str] = &[
    "Supervisor/Manager",
    "Colleague",
    "Friend",
    "Family Member",
    "Partner",
    "Acquaintance",
    "Service Provider",
    "Group/Team",
];

pub const REFINE_GOALS: &[&str] = &[
    "Clarify my message",
    "Express my feelings",
    "Set boundaries",
    "Ask for help",
    "Provide feedback",
    "Resolve conflict",
    "Make a request",
    "Share information",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TopicGroup {
    pub key: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub examples: &'static [&'static str],
}

pub const TOPIC_GROUPS: &[TopicGroup] = &[
    TopicGroup {
        key: "professional",
        title: "Professional Communication",
        description: "Refine your professional emails, messages, or presentations",
        examples: &[
            "Requesting a deadline extension",
            "Asking for clarification",
            "Providing project updates",
            "Giving constructive feedback",
        ],
    },
    TopicGroup {
        key: "personal",
        title: "Personal Relationships",
        description: "Express yourself better in personal relationships",
        examples: &[
            "Setting boundaries",
            "Expressing needs",
            "Resolving conflicts",
            "Sharing feelings",
        ],
    },
    TopicGroup {
        key: "social",
        title: "Social Situations",
        description: "Navigate social interactions more effectively",
        examples: &[
            "Joining group conversations",
            "Responding to invitations",
            "Handling misunderstandings",
            "Making new connections",
        ],
    },
];

/// Case-insensitive lookup of a preset label in `catalog`
pub fn find_preset(catalog: &'static [Preset], label: &str) -> Option<&'static Preset> {
    let wanted = label.trim();
    catalog.iter().find(|p| p.label.eq_ignore_ascii_case(wanted))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_slot_catalog_offers_other() {
        for catalog in [EMOTIONS, RECIPIENTS, SCENARIOS, PURPOSES] {
            assert!(catalog.last().is_some_and(Preset::is_other));
        }
    }

    #[test]
    fn test_find_preset_ignores_case() {
        let preset = find_preset(EMOTIONS, "happy").unwrap();

        assert_eq!(preset.label, "Happy");
        assert_eq!(preset.emoji, Some("😊"));
        assert!(find_preset(RECIPIENTS, "Stranger").is_none());
    }
}
