//! Draft prescription lines and their dosage forms.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::dose::{DoseTriple, OverrideFlags};

/// Dosage form of a medication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MedicationType {
    Tablet,
    Capsule,
    Syrup,
    Injection,
    Cream,
    Ointment,
    Drops,
    Inhaler,
    Powder,
    Gel,
    Patch,
}

impl MedicationType {
    pub const ALL: [MedicationType; 11] = [
        MedicationType::Tablet,
        MedicationType::Capsule,
        MedicationType::Syrup,
        MedicationType::Injection,
        MedicationType::Cream,
        MedicationType::Ointment,
        MedicationType::Drops,
        MedicationType::Inhaler,
        MedicationType::Powder,
        MedicationType::Gel,
        MedicationType::Patch,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MedicationType::Tablet => "Tablet",
            MedicationType::Capsule => "Capsule",
            MedicationType::Syrup => "Syrup",
            MedicationType::Injection => "Injection",
            MedicationType::Cream => "Cream",
            MedicationType::Ointment => "Ointment",
            MedicationType::Drops => "Drops",
            MedicationType::Inhaler => "Inhaler",
            MedicationType::Powder => "Powder",
            MedicationType::Gel => "Gel",
            MedicationType::Patch => "Patch",
        }
    }
}

impl fmt::Display for MedicationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognised dosage form name.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Unknown medication type: {0}")]
pub struct UnknownMedicationType(pub String);

impl FromStr for MedicationType {
    type Err = UnknownMedicationType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        MedicationType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownMedicationType(s.to_string()))
    }
}

/// One draft prescription line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrugSuggestion {
    pub drug: String,
    pub dosage: String,
    #[serde(rename = "type")]
    pub medication_type: MedicationType,
    #[serde(flatten)]
    pub dose: DoseTriple,
}

impl DrugSuggestion {
    pub fn new(
        drug: impl Into<String>,
        dosage: impl Into<String>,
        medication_type: MedicationType,
        dose: DoseTriple,
    ) -> Self {
        Self {
            drug: drug.into(),
            dosage: dosage.into(),
            medication_type,
            dose,
        }
    }

    pub fn is_zero_dose(&self) -> bool {
        self.dose.is_zero()
    }
}

/// A draft line together with the dose it was first suggested with.
///
/// The snapshot is taken when the entry is created and cannot be changed
/// afterwards, so override detection always compares against the original
/// suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftEntry {
    suggestion: DrugSuggestion,
    snapshot: DoseTriple,
}

impl DraftEntry {
    pub fn new(suggestion: DrugSuggestion) -> Self {
        let snapshot = suggestion.dose;
        Self {
            suggestion,
            snapshot,
        }
    }

    pub fn suggestion(&self) -> &DrugSuggestion {
        &self.suggestion
    }

    pub fn snapshot(&self) -> DoseTriple {
        self.snapshot
    }

    /// Per-period comparison of the live dose against the snapshot.
    pub fn overrides(&self) -> OverrideFlags {
        self.suggestion.dose.overrides_against(&self.snapshot)
    }

    pub(crate) fn suggestion_mut(&mut self) -> &mut DrugSuggestion {
        &mut self.suggestion
    }

    pub fn into_suggestion(self) -> DrugSuggestion {
        self.suggestion
    }
}
