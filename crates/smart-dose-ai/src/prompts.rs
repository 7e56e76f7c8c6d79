//! Prompts for model-based medication suggestions.
//!
//! These prompts ask for a single JSON object so the answer can be parsed
//! with [`crate::parse_model_output`].

use serde::{Deserialize, Serialize};

/// System prompt for the prescribing assistant.
pub const SYSTEM_PROMPT: &str = r#"You are a clinical assistant helping an Indian general physician draft a prescription.

Given the patient's symptoms and history, suggest medications the doctor may consider.
For each suggestion give:
- name: Generic drug name (e.g. Metformin, Telmisartan, Paracetamol)
- dosage: Strength with unit (e.g. 500mg, 40mg, 10ml)
- frequency: Morning-afternoon-night units as "M-A-N" (e.g. "1-0-1"), or null
- reasoning: One short line explaining the suggestion

Only suggest commonly available medicines. The doctor reviews every suggestion.

Output JSON with a "suggestions" array."#;

/// Patient details included in a suggestion prompt.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatientContext {
    pub name: String,
    pub age: u32,
    pub weight: f64,
    /// Known conditions, comma-separated
    pub condition: String,
    /// "<name> <dosage>" for each current medication
    pub current_medications: Vec<String>,
}

/// User prompt for one patient.
pub fn make_suggestion_prompt(symptoms: &str, patient: &PatientContext) -> String {
    let medications = if patient.current_medications.is_empty() {
        "None".to_string()
    } else {
        patient.current_medications.join(", ")
    };

    format!(
        r#"Patient: {}, {} years, {} kg
History: {}
Current medications: {}
Symptoms: "{}"

Return a JSON object with a "suggestions" array. Each suggestion should have:
- name: Generic drug name
- dosage: Strength with unit
- frequency: "M-A-N" schedule (null if unsure)
- reasoning: Why it is suggested"#,
        patient.name, patient.age, patient.weight, patient.condition, medications, symptoms
    )
}

/// JSON grammar constraint to keep the model's answer parseable.
pub const JSON_GRAMMAR: &str = r#"
root ::= object
object ::= "{" ws "\"suggestions\"" ws ":" ws suggestions ws "}"
suggestions ::= "[" ws (suggestion (ws "," ws suggestion)*)? ws "]"
suggestion ::= "{" ws
    "\"name\"" ws ":" ws string ws "," ws
    "\"dosage\"" ws ":" ws string ws "," ws
    "\"frequency\"" ws ":" ws (string | "null") ws "," ws
    "\"reasoning\"" ws ":" ws string ws
"}"
string ::= "\"" ([^"\\] | "\\" .)* "\""
ws ::= [ \t\n]*
"#;

/// Few-shot examples: (symptoms, expected answer).
pub const FEW_SHOT_EXAMPLES: &[(&str, &str)] = &[
    (
        "High sugar readings and frequent urination",
        r#"{"suggestions":[{"name":"Metformin","dosage":"500mg","frequency":"1-0-1","reasoning":"Elevated blood sugar"}]}"#,
    ),
    (
        "Fever and body pain for two days",
        r#"{"suggestions":[{"name":"Paracetamol","dosage":"650mg","frequency":"1-1-1","reasoning":"Fever with myalgia"}]}"#,
    ),
];

/// Build a complete prompt with system context and optional examples.
pub fn build_full_prompt(symptoms: &str, patient: &PatientContext, include_examples: bool) -> String {
    let mut prompt = String::new();

    prompt.push_str("<|system|>\n");
    prompt.push_str(SYSTEM_PROMPT);
    prompt.push_str("\n<|end|>\n");

    if include_examples {
        let example_patient = PatientContext {
            name: "Example Patient".to_string(),
            age: 50,
            weight: 70.0,
            condition: "General Checkup".to_string(),
            current_medications: Vec::new(),
        };
        for (input, output) in FEW_SHOT_EXAMPLES {
            prompt.push_str("<|user|>\n");
            prompt.push_str(&make_suggestion_prompt(input, &example_patient));
            prompt.push_str("\n<|end|>\n");
            prompt.push_str("<|assistant|>\n");
            prompt.push_str(output);
            prompt.push_str("\n<|end|>\n");
        }
    }

    prompt.push_str("<|user|>\n");
    prompt.push_str(&make_suggestion_prompt(symptoms, patient));
    prompt.push_str("\n<|end|>\n");
    prompt.push_str("<|assistant|>\n");

    prompt
}
