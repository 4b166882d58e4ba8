// ABOUTME: Tag-form slots and their preset/custom resolution
// ABOUTME: A custom value always wins over the preset chosen for the same slot

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::presets::OTHER;
use crate::types::ExpressionRequest;
use crate::validation::{non_blank, validate_intensity, ValidationError};

/// One categorical input dimension of the expression form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    Emotion,
    Recipient,
    Scenario,
    Purpose,
}

impl Slot {
    pub const ALL: [Slot; 4] = [Slot::Emotion, Slot::Recipient, Slot::Scenario, Slot::Purpose];
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Slot::Emotion => "emotion",
            Slot::Recipient => "recipient",
            Slot::Scenario => "scenario",
            Slot::Purpose => "purpose",
        };
        f.write_str(name)
    }
}

/// Preset tag plus the free-text override for a single slot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotSelection {
    pub preset: Option<String>,
    pub custom: Option<String>,
}

impl SlotSelection {
    pub fn preset(value: impl Into<String>) -> Self {
        Self {
            preset: Some(value.into()),
            custom: None,
        }
    }

    pub fn custom(value: impl Into<String>) -> Self {
        Self {
            preset: Some(OTHER.to_string()),
            custom: Some(value.into()),
        }
    }

    /// Resolve to the value sent to the model.
    ///
    /// The `Other` tag is a placeholder for "see custom value" and never
    /// resolves on its own.
    pub fn resolve(&self, slot: Slot) -> Result<String, ValidationError> {
        if let Some(custom) = non_blank(self.custom.as_deref()) {
            return Ok(custom.to_string());
        }

        match non_blank(self.preset.as_deref()) {
            Some(preset) if !preset.eq_ignore_ascii_case(OTHER) => Ok(preset.to_string()),
            _ => Err(ValidationError::UnresolvedSlot(slot)),
        }
    }
}

/// Mutable state behind the expression generator form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpressionForm {
    pub emotion: SlotSelection,
    pub intensity: u8,
    pub recipient: SlotSelection,
    pub scenario: SlotSelection,
    pub purpose: SlotSelection,
    pub situation_note: String,
    pub additional_note: String,
}

impl Default for ExpressionForm {
    fn default() -> Self {
        Self {
            emotion: SlotSelection::default(),
            intensity: 5,
            recipient: SlotSelection::default(),
            scenario: SlotSelection::default(),
            purpose: SlotSelection::default(),
            situation_note: String::new(),
            additional_note: String::new(),
        }
    }
}

impl ExpressionForm {
    pub fn slot(&self, slot: Slot) -> &SlotSelection {
        match slot {
            Slot::Emotion => &self.emotion,
            Slot::Recipient => &self.recipient,
            Slot::Scenario => &self.scenario,
            Slot::Purpose => &self.purpose,
        }
    }

    pub fn slot_mut(&mut self, slot: Slot) -> &mut SlotSelection {
        match slot {
            Slot::Emotion => &mut self.emotion,
            Slot::Recipient => &mut self.recipient,
            Slot::Scenario => &mut self.scenario,
            Slot::Purpose => &mut self.purpose,
        }
    }

    /// Tapping a tag selects it and clears any custom text for that slot
    pub fn select(&mut self, slot: Slot, preset: impl Into<String>) {
        let selection = self.slot_mut(slot);
        selection.preset = Some(preset.into());
        selection.custom = None;
    }

    pub fn set_custom(&mut self, slot: Slot, text: impl Into<String>) {
        self.slot_mut(slot).custom = Some(text.into());
    }

    /// Whether every required slot currently resolves
    pub fn is_complete(&self) -> bool {
        self.resolve().is_ok()
    }

    /// Build an immutable request, failing on the first unresolved slot
    pub fn resolve(&self) -> Result<ExpressionRequest, ValidationError> {
        validate_intensity(self.intensity)?;

        Ok(ExpressionRequest {
            emotion: self.emotion.resolve(Slot::Emotion)?,
            emotion_intensity: self.intensity,
            recipient: self.recipient.resolve(Slot::Recipient)?,
            scenario: self.scenario.resolve(Slot::Scenario)?,
            purpose: self.purpose.resolve(Slot::Purpose)?,
            situation_note: non_blank(Some(&self.situation_note)).map(str::to_string),
            additional_note: non_blank(Some(&self.additional_note)).map(str::to_string),
        })
    }
}
