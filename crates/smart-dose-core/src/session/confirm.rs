//! Confirmation: drop 0-0-0 lines and build the order payload.

use thiserror::Error;
use tracing::{info, warn};

use super::PrescriptionSession;
use crate::models::{PrescriptionData, PrescriptionMedication};

/// Rejected confirmation. The draft is left untouched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfirmError {
    #[error("Please add at least one medication with a dosage")]
    NoDosedMedications,
}

/// Result of a successful confirmation.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmOutcome {
    pub prescription: PrescriptionData,
    /// Lines dropped for being 0-0-0
    pub removed: usize,
}

impl ConfirmOutcome {
    /// Notice shown when lines were dropped.
    pub fn removed_notice(&self) -> Option<String> {
        (self.removed > 0).then(|| {
            format!(
                "{} medicine(s) with 0-0-0 dosage removed from prescription",
                self.removed
            )
        })
    }
}

impl PrescriptionSession {
    /// Filter out zero-dose lines and build the payload.
    pub fn confirm(&self) -> Result<ConfirmOutcome, ConfirmError> {
        let (valid, zero): (Vec<_>, Vec<_>) = self
            .suggestions()
            .partition(|s| !s.is_zero_dose());

        if valid.is_empty() {
            warn!(
                patient = %self.patient.name,
                zero_dose = zero.len(),
                "Confirmation rejected: no dosed medications"
            );
            return Err(ConfirmError::NoDosedMedications);
        }

        let instructions = self.instructions.trim();
        let prescription = PrescriptionData {
            patient_name: self.patient.name.clone(),
            patient_age: self.patient.age,
            patient_weight: self.patient.weight,
            patient_history: self.patient.condition.clone(),
            symptoms: self.symptoms.clone(),
            medications: valid.into_iter().map(PrescriptionMedication::from).collect(),
            additional_instructions: (!instructions.is_empty()).then(|| instructions.to_string()),
            order_amount: self.settings.order_amount,
        };

        info!(
            patient = %prescription.patient_name,
            medications = prescription.medications.len(),
            removed = zero.len(),
            "Prescription confirmed"
        );

        Ok(ConfirmOutcome {
            prescription,
            removed: zero.len(),
        })
    }
}
