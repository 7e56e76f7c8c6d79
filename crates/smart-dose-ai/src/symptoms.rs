//! Keyword table from symptoms to medication hints.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// A medication suggested for the described symptoms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicationHint {
    pub name: String,
    pub dosage: String,
    /// Why it was suggested, shown next to the hint
    #[serde(default)]
    pub reasoning: String,
}

impl MedicationHint {
    pub fn new(name: &str, dosage: &str, reasoning: &str) -> Self {
        Self {
            name: name.to_string(),
            dosage: dosage.to_string(),
            reasoning: reasoning.to_string(),
        }
    }
}

/// Lowercase keyword and the (name, dosage, reasoning) hints it triggers.
/// Matched in this order.
pub const SYMPTOM_TABLE: &[(&str, &[(&str, &str, &str)])] = &[
    (
        "dizziness",
        &[("Glimepiride", "1mg", "Based on History of Diabetes + Age 58")],
    ),
    (
        "sugar",
        &[
            ("Metformin", "500mg", "Based on History of Diabetes"),
            ("Glimepiride", "1mg", "Based on History of Diabetes + Age 58"),
        ],
    ),
    (
        "diabetes",
        &[
            ("Metformin", "500mg", "Based on History of Diabetes"),
            ("Glimepiride", "1mg", "Based on History of Diabetes + Age 58"),
        ],
    ),
    (
        "hypertension",
        &[("Telmisartan", "40mg", "Based on History of Hypertension")],
    ),
    (
        "blood pressure",
        &[("Telmisartan", "40mg", "Based on History of Hypertension")],
    ),
    ("fever", &[("Paracetamol", "500mg", "Symptom: Fever")]),
    (
        "pain",
        &[
            ("Paracetamol", "500mg", "Symptom: Pain"),
            ("Ibuprofen", "400mg", "Symptom: Pain"),
        ],
    ),
    ("cough", &[("Cetirizine", "10mg", "Symptom: Cough/Allergy")]),
    ("headache", &[("Paracetamol", "500mg", "Symptom: Headache")]),
];

/// Hints for every table keyword found in `symptoms` (case-insensitive
/// substring), in table order. The first hint for a name and strength wins.
pub fn suggest_from_symptoms(symptoms: &str) -> Vec<MedicationHint> {
    let text = symptoms.trim().to_lowercase();
    if text.is_empty() {
        return Vec::new();
    }

    let mut seen = HashSet::new();
    let mut hints = Vec::new();

    for (keyword, meds) in SYMPTOM_TABLE {
        if !text.contains(keyword) {
            continue;
        }
        debug!(keyword, "Symptom keyword matched");

        for (name, dosage, reasoning) in meds.iter() {
            if seen.insert((*name, *dosage)) {
                hints.push(MedicationHint::new(name, dosage, reasoning));
            }
        }
    }

    hints
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(hints: &[MedicationHint]) -> Vec<&str> {
        hints.iter().map(|h| h.name.as_str()).collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(suggest_from_symptoms("").is_empty());
        assert!(suggest_from_symptoms("   ").is_empty());
    }

    #[test]
    fn test_single_keyword() {
        let hints = suggest_from_symptoms("Fever since two days");
        assert_eq!(hints, vec![MedicationHint::new("Paracetamol", "500mg", "Symptom: Fever")]);
    }

    #[test]
    fn test_dedupes_across_keywords() {
        let hints = suggest_from_symptoms("High SUGAR, known diabetes, dizziness");
        // dizziness comes first in the table, so its reasoning is kept
        assert_eq!(names(&hints), vec!["Glimepiride", "Metformin"]);
        assert_eq!(hints[0].reasoning, "Based on History of Diabetes + Age 58");
    }

    #[test]
    fn test_overlapping_keywords() {
        let hints = suggest_from_symptoms("fever with headache and body pain");
        assert_eq!(names(&hints), vec!["Paracetamol", "Ibuprofen"]);
        assert_eq!(hints[0].reasoning, "Symptom: Fever");
    }

    #[test]
    fn test_unrelated_text() {
        assert!(suggest_from_symptoms("routine follow-up").is_empty());
    }
}
