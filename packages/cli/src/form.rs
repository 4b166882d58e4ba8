// ABOUTME: Turns command-line flags into the tag form and request types
// ABOUTME: Preset labels are matched against the catalogs; custom text always wins

use resonance_core::presets::{self, Preset};
use resonance_core::{
    CommunicationContext, ExpressionForm, ExpressionRequest, RefinementRequest, Slot,
    SocialSituation, ValidationError,
};
use tracing::debug;

/// Preset tag and custom override given for one slot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotFlags {
    pub preset: Option<String>,
    pub custom: Option<String>,
}

impl SlotFlags {
    pub fn new(preset: Option<String>, custom: Option<String>) -> Self {
        Self { preset, custom }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateFlags {
    pub emotion: SlotFlags,
    pub intensity: Option<u8>,
    pub recipient: SlotFlags,
    pub scenario: SlotFlags,
    pub purpose: SlotFlags,
    pub situation: Option<String>,
    pub note: Option<String>,
}

fn catalog(slot: Slot) -> &'static [Preset] {
    match slot {
        Slot::Emotion => presets::EMOTIONS,
        Slot::Recipient => presets::RECIPIENTS,
        Slot::Scenario => presets::SCENARIOS,
        Slot::Purpose => presets::PURPOSES,
    }
}

/// Catalog spelling of `label`, or the label itself when it is not a preset
fn canonical_label(slot: Slot, label: &str) -> String {
    let found = presets::find_preset(catalog(slot), label).or_else(|| match slot {
        Slot::Emotion => presets::find_preset(presets::DETAILED_EMOTIONS, label),
        _ => None,
    });

    match found {
        Some(preset) => preset.label.to_string(),
        None => {
            debug!("{} '{}' is not a preset, sending it as given", slot, label);
            label.trim().to_string()
        }
    }
}

/// Fill a form the way tapping tags and typing would
pub fn build_form(flags: &GenerateFlags) -> ExpressionForm {
    let mut form = ExpressionForm::default();

    for slot in Slot::ALL {
        let slot_flags = match slot {
            Slot::Emotion => &flags.emotion,
            Slot::Recipient => &flags.recipient,
            Slot::Scenario => &flags.scenario,
            Slot::Purpose => &flags.purpose,
        };
        if let Some(preset) = &slot_flags.preset {
            form.select(slot, canonical_label(slot, preset));
        }
        if let Some(custom) = &slot_flags.custom {
            form.set_custom(slot, custom.as_str());
        }
    }

    if let Some(intensity) = flags.intensity {
        form.intensity = intensity;
    }
    form.situation_note = flags.situation.clone().unwrap_or_default();
    form.additional_note = flags.note.clone().unwrap_or_default();
    form
}

pub fn expression_request(flags: &GenerateFlags) -> Result<ExpressionRequest, ValidationError> {
    build_form(flags).resolve()
}

pub fn refinement_request(
    content: &str,
    context: &str,
    audience: &str,
    goal: &str,
    note: Option<&str>,
) -> Result<RefinementRequest, ValidationError> {
    let context: CommunicationContext = context.parse()?;
    let request =
        RefinementRequest::new(content, context, audience, goal).with_additional_context(note);
    request.validate()?;
    Ok(request)
}

/// Accepts repeated `--person` flags as well as comma separated lists
pub fn split_people(people: &[String]) -> Vec<String> {
    people
        .iter()
        .flat_map(|entry| entry.split(','))
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn social_situation(
    situation: &str,
    people: &[String],
    reaction: Option<&str>,
    others: Option<&str>,
    confusing: Option<&str>,
) -> Result<SocialSituation, ValidationError> {
    let situation = SocialSituation {
        situation: situation.to_string(),
        people_involved: split_people(people),
        user_reaction: reaction.unwrap_or_default().to_string(),
        others_reactions: others.unwrap_or_default().to_string(),
        confusing_aspects: confusing.unwrap_or_default().to_string(),
        additional_context: None,
    };
    situation.validate()?;
    Ok(situation)
}
