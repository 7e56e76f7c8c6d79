//! Initial suggestion list for a prescription draft.
//!
//! Sources, first non-empty wins:
//! 1. Active medications, dosed from their frequency text
//! 2. The most recent visit's prescriptions, dosed from the smart defaults
//! 3. A fixed Paracetamol + Pantoprazole fallback
//!
//! Inputs that cannot become a line are skipped and reported, never raised.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::knowledge::{is_as_needed, parse_frequency, parse_prescription_line, KnowledgeBase};
use crate::models::{DoseTriple, DrugSuggestion, PatientSummary};

/// Lines used when the patient has nothing usable on record.
const FALLBACK_LINES: [(&str, &str); 2] = [("Paracetamol", "650mg"), ("Pantoprazole", "40mg")];

/// Starting lines for a draft opened without a patient.
const DEFAULT_LINES: [(&str, &str, DoseTriple); 3] = [
    ("Glimepiride", "1mg", DoseTriple::new(1, 0, 0)),
    ("Metformin", "500mg", DoseTriple::new(1, 0, 1)),
    ("Telmisartan", "40mg", DoseTriple::new(1, 0, 0)),
];

/// Where the suggestions came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuggestionSource {
    ActiveMedications,
    RecentVisit,
    Fallback,
}

/// An input that did not become a suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkippedInput {
    /// Same name and strength already seen (case-insensitive)
    Duplicate { name: String, dosage: String },
    /// PRN schedule; left for the doctor to add
    AsNeeded { name: String },
    /// Frequency resolved to 0-0-0
    ZeroDose { name: String },
    /// Visit text without a "<name> <strength>" shape
    Unparseable { text: String },
}

/// Builder output with provenance.
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionReport {
    pub suggestions: Vec<DrugSuggestion>,
    pub source: SuggestionSource,
    pub skipped: Vec<SkippedInput>,
}

/// Derives draft suggestions from a patient's record.
#[derive(Debug, Clone, Default)]
pub struct SuggestionBuilder {
    knowledge: KnowledgeBase,
}

impl SuggestionBuilder {
    /// Create a builder with the built-in knowledge base.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder over a customised knowledge base.
    pub fn with_knowledge(knowledge: KnowledgeBase) -> Self {
        Self { knowledge }
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    /// Ordered, de-duplicated suggestions for a patient.
    pub fn build(&self, patient: &PatientSummary) -> Vec<DrugSuggestion> {
        self.build_with_report(patient).suggestions
    }

    /// Suggestions plus their source and every skipped input.
    pub fn build_with_report(&self, patient: &PatientSummary) -> SuggestionReport {
        // Shared across both record sources: a PRN or zero-dose active
        // medication also suppresses the same drug in the visit list.
        let mut seen: HashSet<(String, String)> = HashSet::new();
        let mut skipped = Vec::new();

        let from_meds = self.from_active_medications(patient, &mut seen, &mut skipped);
        if !from_meds.is_empty() {
            return self.finish(patient, from_meds, SuggestionSource::ActiveMedications, skipped);
        }

        let from_visit = self.from_recent_visit(patient, &mut seen, &mut skipped);
        if !from_visit.is_empty() {
            return self.finish(patient, from_visit, SuggestionSource::RecentVisit, skipped);
        }

        let fallback = FALLBACK_LINES
            .iter()
            .map(|(name, dosage)| self.knowledge.suggest(name, dosage))
            .collect();
        self.finish(patient, fallback, SuggestionSource::Fallback, skipped)
    }

    /// The fixed list for a draft with no patient selected.
    pub fn default_suggestions(&self) -> Vec<DrugSuggestion> {
        DEFAULT_LINES
            .iter()
            .map(|(name, dosage, dose)| self.knowledge.suggest_with_dose(name, dosage, *dose))
            .collect()
    }

    fn from_active_medications(
        &self,
        patient: &PatientSummary,
        seen: &mut HashSet<(String, String)>,
        skipped: &mut Vec<SkippedInput>,
    ) -> Vec<DrugSuggestion> {
        let mut result = Vec::new();

        for med in &patient.medications {
            if !seen.insert(dedupe_key(&med.name, &med.dosage)) {
                skip(
                    skipped,
                    SkippedInput::Duplicate {
                        name: med.name.clone(),
                        dosage: med.dosage.clone(),
                    },
                );
                continue;
            }

            let dose = parse_frequency(&med.frequency)
                .unwrap_or_else(|| self.knowledge.dosages.resolve(&med.name));

            if dose.is_zero() {
                skip(skipped, SkippedInput::ZeroDose { name: med.name.clone() });
                continue;
            }
            if is_as_needed(&med.frequency) {
                skip(skipped, SkippedInput::AsNeeded { name: med.name.clone() });
                continue;
            }

            result.push(self.knowledge.suggest_with_dose(&med.name, &med.dosage, dose));
        }

        result
    }

    fn from_recent_visit(
        &self,
        patient: &PatientSummary,
        seen: &mut HashSet<(String, String)>,
        skipped: &mut Vec<SkippedInput>,
    ) -> Vec<DrugSuggestion> {
        let Some(last_visit) = patient.visit_history.first() else {
            return Vec::new();
        };

        let mut result = Vec::new();

        for text in &last_visit.prescriptions {
            let Some(line) = parse_prescription_line(text) else {
                skip(skipped, SkippedInput::Unparseable { text: text.clone() });
                continue;
            };

            if !seen.insert(dedupe_key(&line.name, &line.dosage)) {
                skip(
                    skipped,
                    SkippedInput::Duplicate {
                        name: line.name,
                        dosage: line.dosage,
                    },
                );
                continue;
            }

            let dose = self.knowledge.dosages.resolve(&line.name);
            if dose.is_zero() {
                skip(skipped, SkippedInput::ZeroDose { name: line.name });
                continue;
            }

            result.push(self.knowledge.suggest_with_dose(&line.name, &line.dosage, dose));
        }

        result
    }

    fn finish(
        &self,
        patient: &PatientSummary,
        suggestions: Vec<DrugSuggestion>,
        source: SuggestionSource,
        skipped: Vec<SkippedInput>,
    ) -> SuggestionReport {
        info!(
            patient = %patient.name,
            ?source,
            count = suggestions.len(),
            skipped = skipped.len(),
            "Built prescription suggestions"
        );
        SuggestionReport {
            suggestions,
            source,
            skipped,
        }
    }
}

fn dedupe_key(name: &str, dosage: &str) -> (String, String) {
    (name.to_lowercase(), dosage.to_lowercase())
}

fn skip(skipped: &mut Vec<SkippedInput>, input: SkippedInput) {
    debug!(?input, "Skipped suggestion input");
    skipped.push(input);
}
