//! Medication knowledge base.
//!
//! Static tables that turn a bare drug name into a complete draft line:
//! dosage form, default dose, and the text formats drugs arrive in from
//! patient records.

mod dosage;
mod frequency;
mod medication_type;
mod prescription_text;

pub use dosage::*;
pub use frequency::*;
pub use medication_type::*;
pub use prescription_text::*;

use crate::models::{DoseTriple, DrugSuggestion};

/// Type and dose tables used together.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    pub types: MedicationTypeResolver,
    pub dosages: SmartDosageResolver,
}

impl KnowledgeBase {
    pub fn new() -> Self {
        Self::default()
    }

    /// A suggestion for `name` at its smart default dose.
    pub fn suggest(&self, name: &str, dosage: &str) -> DrugSuggestion {
        self.suggest_with_dose(name, dosage, self.dosages.resolve(name))
    }

    /// A suggestion for `name` at a known dose.
    pub fn suggest_with_dose(&self, name: &str, dosage: &str, dose: DoseTriple) -> DrugSuggestion {
        DrugSuggestion::new(name, dosage, self.types.resolve(name), dose)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MedicationType;

    #[test]
    fn test_suggest_fills_type_and_dose() {
        let kb = KnowledgeBase::new();
        let s = kb.suggest("Pregabalin", "75mg");

        assert_eq!(s.drug, "Pregabalin");
        assert_eq!(s.dosage, "75mg");
        assert_eq!(s.medication_type, MedicationType::Capsule);
        assert_eq!(s.dose, DoseTriple::new(0, 0, 1));
    }
}
