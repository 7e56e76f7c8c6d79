//! Property tests for symptom hints and model output parsing.

use std::collections::HashSet;

use proptest::prelude::*;

use smart_dose_ai::{parse_model_output, suggest_from_symptoms, to_medication_hints, SYMPTOM_TABLE};

proptest! {
    #[test]
    fn hints_are_unique(text in "\\PC{0,80}") {
        let hints = suggest_from_symptoms(&text);
        let mut seen = HashSet::new();
        for hint in &hints {
            prop_assert!(seen.insert((hint.name.clone(), hint.dosage.clone())));
        }
    }

    #[test]
    fn keyword_anywhere_is_found(
        prefix in "[a-z ]{0,20}",
        suffix in "[a-z ]{0,20}",
        index in 0usize..SYMPTOM_TABLE.len(),
    ) {
        let (keyword, meds) = SYMPTOM_TABLE[index];
        let text = format!("{}{}{}", prefix, keyword.to_uppercase(), suffix);
        let hints = suggest_from_symptoms(&text);

        for (name, dosage, _) in meds {
            prop_assert!(hints.iter().any(|h| h.name == *name && h.dosage == *dosage));
        }
    }

    #[test]
    fn json_is_found_inside_prose(prefix in "[^{}]{0,40}", suffix in "[^{}]{0,40}") {
        let response = format!(
            "{}{{\"suggestions\":[{{\"name\":\"Metformin\",\"dosage\":\"500mg\"}}]}}{}",
            prefix, suffix
        );
        let output = parse_model_output(&response).unwrap();
        prop_assert_eq!(to_medication_hints(&output).len(), 1);
    }
}
