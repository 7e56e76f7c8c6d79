//! Drug name → dosage form.
//!
//! Lookup order:
//! - Exact (case-sensitive) name in the type table
//! - Ordered keyword rules over the lowercased name
//! - Tablet

use std::collections::HashMap;

use crate::models::MedicationType;

/// Resolver for the dosage form of a drug.
#[derive(Debug, Clone)]
pub struct MedicationTypeResolver {
    /// Exact drug name → form
    known: HashMap<String, MedicationType>,
    /// (keywords, form), checked in order; any keyword matches
    keyword_rules: Vec<(Vec<String>, MedicationType)>,
}

impl Default for MedicationTypeResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl MedicationTypeResolver {
    /// Create a resolver with the built-in tables.
    pub fn new() -> Self {
        Self {
            known: Self::default_types(),
            keyword_rules: Self::default_keyword_rules(),
        }
    }

    /// Resolve the dosage form. Never fails.
    pub fn resolve(&self, drug_name: &str) -> MedicationType {
        if let Some(t) = self.known.get(drug_name) {
            return *t;
        }

        let lower = drug_name.to_lowercase();
        self.keyword_rules
            .iter()
            .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k.as_str())))
            .map(|(_, t)| *t)
            .unwrap_or(MedicationType::Tablet)
    }

    /// Add or replace an exact-name entry.
    pub fn add_type(&mut self, drug_name: &str, medication_type: MedicationType) {
        self.known.insert(drug_name.to_string(), medication_type);
    }

    /// Append a keyword rule after the built-in ones.
    pub fn add_keyword_rule(&mut self, keywords: &[&str], medication_type: MedicationType) {
        self.keyword_rules.push((
            keywords.iter().map(|k| k.to_lowercase()).collect(),
            medication_type,
        ));
    }

    fn default_types() -> HashMap<String, MedicationType> {
        use MedicationType::*;

        let mut map = HashMap::new();

        for name in [
            "Glimepiride",
            "Metformin",
            "Telmisartan",
            "Aspirin",
            "Paracetamol",
            "Ibuprofen",
            "Atorvastatin",
            "Amlodipine",
            "Losartan",
            "Aceclofenac",
            "Diclofenac",
            "Cetirizine",
            "Montelukast",
            "Levothyroxine",
            "Propranolol",
            "Azithromycin",
            "Ciprofloxacin",
            "Metoprolol",
            "Rosuvastatin",
            "Clopidogrel",
            "Pantoprazole",
            "Gliclazide",
            "Sitagliptin",
            "Sumatriptan",
        ] {
            map.insert(name.to_string(), Tablet);
        }

        map.insert("Cough Syrup".into(), Syrup);
        map.insert("Ambroxol".into(), Syrup);

        map.insert("Insulin".into(), Injection);
        map.insert("Vitamin B12".into(), Injection);

        map.insert("Betamethasone".into(), Cream);
        map.insert("Clotrimazole".into(), Cream);
        map.insert("Fusidic Acid".into(), Cream);

        map.insert("Omeprazole".into(), Capsule);
        map.insert("Vitamin D".into(), Capsule);
        map.insert("Pregabalin".into(), Capsule);
        map.insert("Amoxicillin".into(), Capsule);
        map.insert("Thiocolchicoside".into(), Capsule);

        map.insert("Salbutamol Inhaler".into(), Inhaler);
        map.insert("Salbutamol".into(), Inhaler);

        map
    }

    fn default_keyword_rules() -> Vec<(Vec<String>, MedicationType)> {
        fn rule(keywords: &[&str], t: MedicationType) -> (Vec<String>, MedicationType) {
            (keywords.iter().map(|k| k.to_string()).collect(), t)
        }

        vec![
            rule(&["syrup"], MedicationType::Syrup),
            rule(&["injection", "insulin"], MedicationType::Injection),
            rule(&["cream", "ointment"], MedicationType::Cream),
            rule(&["capsule"], MedicationType::Capsule),
            rule(&["drops"], MedicationType::Drops),
            rule(&["inhaler"], MedicationType::Inhaler),
        ]
    }
}
