//! Editable prescription draft.
//!
//! A draft is a list of [`DraftEntry`] values, each owning its live
//! suggestion and the dose it was first suggested with. Entries are added
//! by the builder, from the catalog, or in bulk; all three snapshot at
//! insertion. Doctor edits go through the session so roller limits apply.

mod confirm;

pub use confirm::*;

use thiserror::Error;
use tracing::{debug, info};

use crate::demo;
use crate::models::{
    DosePeriod, DraftEntry, DrugSuggestion, MedicationType, OverrideFlags, PatientSummary,
};
use crate::suggest::SuggestionBuilder;

/// Draft edit errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SessionError {
    #[error("No draft entry at index {index} (draft has {len})")]
    NoSuchEntry { index: usize, len: usize },
}

pub type SessionResult<T> = Result<T, SessionError>;

/// Limits and amounts applied to every draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSettings {
    /// Highest roller value per period
    pub max_units_per_period: u8,
    /// Fixed order amount reported at confirmation
    pub order_amount: u32,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            max_units_per_period: 5,
            order_amount: 450,
        }
    }
}

/// One prescription being drafted.
#[derive(Debug, Clone)]
pub struct PrescriptionSession {
    builder: SuggestionBuilder,
    settings: SessionSettings,
    patient: PatientSummary,
    /// False when opened without a selected patient
    has_patient: bool,
    entries: Vec<DraftEntry>,
    symptoms: String,
    instructions: String,
}

impl PrescriptionSession {
    /// Open a draft for a patient, or the default draft when `None`.
    pub fn new(
        builder: SuggestionBuilder,
        patient: Option<PatientSummary>,
        settings: SessionSettings,
    ) -> Self {
        let has_patient = patient.is_some();
        let patient = patient.unwrap_or_else(demo::default_patient_summary);
        let symptoms = patient.condition.clone();

        let mut session = Self {
            builder,
            settings,
            patient,
            has_patient,
            entries: Vec::new(),
            symptoms,
            instructions: String::new(),
        };
        session.entries = session.initial_entries();

        info!(
            patient = %session.patient.name,
            has_patient,
            entries = session.entries.len(),
            "Opened prescription draft"
        );
        session
    }

    pub fn patient(&self) -> &PatientSummary {
        &self.patient
    }

    pub fn has_patient(&self) -> bool {
        self.has_patient
    }

    pub fn settings(&self) -> SessionSettings {
        self.settings
    }

    pub fn entries(&self) -> &[DraftEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Live suggestions in draft order.
    pub fn suggestions(&self) -> impl Iterator<Item = &DrugSuggestion> {
        self.entries.iter().map(DraftEntry::suggestion)
    }

    /// Append a line, snapshotting its current dose. Returns its index.
    pub fn add_suggestion(&mut self, suggestion: DrugSuggestion) -> usize {
        debug!(drug = %suggestion.drug, dose = %suggestion.dose, "Added draft entry");
        self.entries.push(DraftEntry::new(suggestion));
        self.entries.len() - 1
    }

    /// Add a medicine picked from the catalog at its smart default dose.
    pub fn add_medicine(&mut self, name: &str, dosage: &str) -> usize {
        let suggestion = self.builder.knowledge().suggest(name, dosage);
        self.add_suggestion(suggestion)
    }

    /// Add several medicines at once. Returns how many were added.
    pub fn add_medicines<I, N, D>(&mut self, medicines: I) -> usize
    where
        I: IntoIterator<Item = (N, D)>,
        N: AsRef<str>,
        D: AsRef<str>,
    {
        let before = self.entries.len();
        for (name, dosage) in medicines {
            self.add_medicine(name.as_ref(), dosage.as_ref());
        }
        self.entries.len() - before
    }

    /// Remove a line together with its snapshot.
    pub fn remove(&mut self, index: usize) -> SessionResult<DrugSuggestion> {
        self.check_index(index)?;
        let removed = self.entries.remove(index).into_suggestion();
        debug!(index, drug = %removed.drug, "Removed draft entry");
        Ok(removed)
    }

    /// Set one period's units from the roller, clamped to the configured
    /// maximum. Returns the stored value.
    pub fn set_dose(&mut self, index: usize, period: DosePeriod, units: u8) -> SessionResult<u8> {
        let max = self.settings.max_units_per_period;
        let entry = self.entry_mut(index)?;
        let units = units.min(max);
        entry.suggestion_mut().dose.set(period, units);
        debug!(index, ?period, units, "Dose edited");
        Ok(units)
    }

    /// Change the dosage form of a line.
    pub fn set_medication_type(
        &mut self,
        index: usize,
        medication_type: MedicationType,
    ) -> SessionResult<()> {
        self.entry_mut(index)?.suggestion_mut().medication_type = medication_type;
        Ok(())
    }

    /// Which periods of a line differ from its snapshot.
    /// Out-of-range indices report no overrides.
    pub fn is_overridden(&self, index: usize) -> OverrideFlags {
        self.entries
            .get(index)
            .map(DraftEntry::overrides)
            .unwrap_or_default()
    }

    /// Indices of lines currently at 0-0-0.
    pub fn zero_dose_indices(&self) -> Vec<usize> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.suggestion().is_zero_dose())
            .map(|(i, _)| i)
            .collect()
    }

    /// Rebuild the draft from the patient record, discarding every edit.
    /// Returns the new line count.
    pub fn regenerate(&mut self) -> usize {
        self.entries = self.initial_entries();
        info!(
            patient = %self.patient.name,
            entries = self.entries.len(),
            "Regenerated prescription draft"
        );
        self.entries.len()
    }

    pub fn symptoms(&self) -> &str {
        &self.symptoms
    }

    pub fn set_symptoms(&mut self, symptoms: impl Into<String>) {
        self.symptoms = symptoms.into();
    }

    pub fn instructions(&self) -> &str {
        &self.instructions
    }

    pub fn set_instructions(&mut self, instructions: impl Into<String>) {
        self.instructions = instructions.into();
    }

    fn initial_entries(&self) -> Vec<DraftEntry> {
        let suggestions = if self.has_patient {
            self.builder.build(&self.patient)
        } else {
            self.builder.default_suggestions()
        };
        suggestions.into_iter().map(DraftEntry::new).collect()
    }

    fn check_index(&self, index: usize) -> SessionResult<()> {
        if index < self.entries.len() {
            Ok(())
        } else {
            Err(SessionError::NoSuchEntry {
                index,
                len: self.entries.len(),
            })
        }
    }

    fn entry_mut(&mut self, index: usize) -> SessionResult<&mut DraftEntry> {
        let len = self.entries.len();
        self.entries
            .get_mut(index)
            .ok_or(SessionError::NoSuchEntry { index, len })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DoseTriple;

    fn default_session() -> PrescriptionSession {
        PrescriptionSession::new(SuggestionBuilder::new(), None, SessionSettings::default())
    }

    #[test]
    fn test_default_session() {
        let session = default_session();
        assert!(!session.has_patient());
        assert_eq!(session.len(), 3);
        assert_eq!(session.patient().name, "Rajesh Kumar");
        assert_eq!(session.symptoms(), "Hypertension, Type 2 Diabetes");
    }

    #[test]
    fn test_add_then_edit_marks_override() {
        let mut session = default_session();
        let index = session.add_medicine("Atorvastatin", "20mg");
        session.set_dose(index, DosePeriod::Morning, 1).unwrap();

        assert_eq!(
            session.is_overridden(index),
            OverrideFlags {
                morning: true,
                afternoon: false,
                night: false
            }
        );
    }

    #[test]
    fn test_edit_back_to_snapshot_clears_override() {
        let mut session = default_session();
        session.set_dose(0, DosePeriod::Night, 1).unwrap();
        assert!(session.is_overridden(0).night);

        session.set_dose(0, DosePeriod::Night, 0).unwrap();
        assert!(!session.is_overridden(0).any());
    }

    #[test]
    fn test_set_dose_clamps_to_max() {
        let mut session = default_session();
        assert_eq!(session.set_dose(0, DosePeriod::Morning, 9).unwrap(), 5);
        assert_eq!(session.entries()[0].suggestion().dose.morning, 5);
    }

    #[test]
    fn test_edits_out_of_range() {
        let mut session = default_session();
        assert_eq!(
            session.set_dose(7, DosePeriod::Morning, 1),
            Err(SessionError::NoSuchEntry { index: 7, len: 3 })
        );
        assert!(session.remove(3).is_err());
        assert!(!session.is_overridden(99).any());
    }

    #[test]
    fn test_remove_keeps_pairs_aligned() {
        let mut session = default_session();
        session.set_dose(2, DosePeriod::Night, 2).unwrap();

        let removed = session.remove(1).unwrap();
        assert_eq!(removed.drug, "Metformin");
        assert_eq!(session.len(), 2);

        let telmisartan = &session.entries()[1];
        assert_eq!(telmisartan.suggestion().drug, "Telmisartan");
        assert_eq!(telmisartan.snapshot(), DoseTriple::new(1, 0, 0));
        assert!(session.is_overridden(1).night);
        assert!(!session.is_overridden(0).any());
    }

    #[test]
    fn test_add_medicines_snapshots_each() {
        let mut session = default_session();
        let added = session.add_medicines([("Cetirizine", "10mg"), ("Vitamin D", "60,000 IU")]);

        assert_eq!(added, 2);
        assert_eq!(session.len(), 5);
        assert_eq!(session.entries()[4].snapshot(), DoseTriple::new(1, 0, 0));
        assert_eq!(
            session.entries()[4].suggestion().medication_type,
            MedicationType::Capsule
        );
    }

    #[test]
    fn test_set_medication_type() {
        let mut session = default_session();
        session.set_medication_type(0, MedicationType::Syrup).unwrap();
        assert_eq!(
            session.entries()[0].suggestion().medication_type,
            MedicationType::Syrup
        );
    }

    #[test]
    fn test_zero_dose_indices() {
        let mut session = default_session();
        for period in DosePeriod::ALL {
            session.set_dose(1, period, 0).unwrap();
        }
        assert_eq!(session.zero_dose_indices(), vec![1]);
    }

    #[test]
    fn test_regenerate_discards_edits() {
        let mut session = default_session();
        session.add_medicine("Iron", "100mg");
        session.set_dose(0, DosePeriod::Afternoon, 3).unwrap();

        assert_eq!(session.regenerate(), 3);
        assert!(session.entries().iter().all(|e| !e.overrides().any()));
    }
}
