//! Medication suggestions from model output.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::prompts::{build_full_prompt, PatientContext};
use crate::symptoms::{suggest_from_symptoms, MedicationHint};

/// Extraction errors.
#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Invalid response format: {0}")]
    InvalidFormat(String),

    #[error("Model inference error: {0}")]
    Inference(String),
}

pub type ExtractionResult<T> = Result<T, ExtractionError>;

/// Raw suggestion output from a model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelOutput {
    pub suggestions: Vec<RawSuggestion>,
}

/// One suggestion as the model wrote it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawSuggestion {
    pub name: String,
    pub dosage: String,
    #[serde(default)]
    pub frequency: Option<String>,
    #[serde(default)]
    pub reasoning: Option<String>,
}

/// Parse model output JSON into structured suggestions.
pub fn parse_model_output(response: &str) -> ExtractionResult<ModelOutput> {
    // Models sometimes wrap the object in prose or code fences
    let json_start = response.find('{').ok_or_else(|| {
        ExtractionError::InvalidFormat("No JSON object found in response".into())
    })?;
    let json_end = response.rfind('}').ok_or_else(|| {
        ExtractionError::InvalidFormat("No closing brace found in response".into())
    })?;
    if json_end < json_start {
        return Err(ExtractionError::InvalidFormat(
            "Closing brace before opening brace".into(),
        ));
    }

    let output: ModelOutput = serde_json::from_str(&response[json_start..=json_end])?;
    Ok(output)
}

/// Convert raw suggestions to hints, dropping blank names and repeats.
pub fn to_medication_hints(output: &ModelOutput) -> Vec<MedicationHint> {
    let mut seen = HashSet::new();

    output
        .suggestions
        .iter()
        .filter(|s| !s.name.trim().is_empty())
        .filter(|s| seen.insert((s.name.trim().to_lowercase(), s.dosage.trim().to_lowercase())))
        .map(|s| MedicationHint {
            name: s.name.trim().to_string(),
            dosage: s.dosage.trim().to_string(),
            reasoning: s.reasoning.clone().unwrap_or_default(),
        })
        .collect()
}

/// A text-completion backend.
pub trait CompletionModel {
    fn complete(&self, prompt: &str) -> ExtractionResult<String>;
}

/// Ask the model for hints. Any model or parse failure falls back to the
/// keyword table, as does an empty answer.
pub fn suggest_with_model<M: CompletionModel + ?Sized>(
    model: &M,
    symptoms: &str,
    patient: &PatientContext,
) -> Vec<MedicationHint> {
    let prompt = build_full_prompt(symptoms, patient, true);

    let hints = model
        .complete(&prompt)
        .and_then(|response| parse_model_output(&response))
        .map(|output| to_medication_hints(&output));

    match hints {
        Ok(hints) if !hints.is_empty() => {
            debug!(count = hints.len(), "Model suggestions parsed");
            hints
        }
        Ok(_) => {
            debug!("Model returned no suggestions, using keyword table");
            suggest_from_symptoms(symptoms)
        }
        Err(e) => {
            warn!(error = %e, "Model suggestion failed, using keyword table");
            suggest_from_symptoms(symptoms)
        }
    }
}
