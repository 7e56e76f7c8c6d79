//! Patient models.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Condition text used when a patient has none recorded.
pub const GENERAL_CHECKUP: &str = "General Checkup";

/// A medication the patient is currently taking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientMedicationRecord {
    pub name: String,
    pub dosage: String,
    /// Schedule in "M-A-N" form, e.g. "1-0-1", or free text such as "As needed"
    pub frequency: String,
}

impl PatientMedicationRecord {
    pub fn new(name: impl Into<String>, dosage: impl Into<String>, frequency: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dosage: dosage.into(),
            frequency: frequency.into(),
        }
    }
}

/// A past visit as seen by the prescriber.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisitRecord {
    pub date: String,
    #[serde(default)]
    pub diagnosis: String,
    /// Each entry is "<DrugName> <Dosage>", e.g. "Metformin 500mg"
    pub prescriptions: Vec<String>,
}

/// Read-only patient input for a prescription draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientSummary {
    pub name: String,
    pub age: u32,
    pub weight: f64,
    pub condition: String,
    pub blood_pressure: String,
    pub blood_sugar: String,
    pub heart_rate: String,
    pub medications: Vec<PatientMedicationRecord>,
    /// Most recent visit first
    pub visit_history: Vec<VisitRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PatientStatus {
    Active,
    #[serde(rename = "Follow-up Required")]
    FollowUpRequired,
    Inactive,
}

/// Latest recorded vitals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientVitals {
    pub blood_pressure: String,
    pub blood_sugar: String,
    pub heart_rate: String,
    pub temperature: String,
    pub weight: f64,
    pub spo2: String,
    pub recorded_at: String,
}

/// A visit in the full patient record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientVisit {
    pub id: String,
    /// ISO date (YYYY-MM-DD)
    pub date: String,
    pub diagnosis: String,
    pub symptoms: String,
    pub prescriptions: Vec<String>,
    pub notes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub follow_up_date: Option<String>,
}

/// An active medication in the full patient record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveMedication {
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    pub start_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    pub prescribed_by: String,
}

/// Full patient record as kept in the patient directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientRecord {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub phone: String,
    pub email: String,
    pub weight: f64,
    pub height: f64,
    pub blood_group: String,
    pub allergies: Vec<String>,
    pub medical_conditions: Vec<String>,
    pub address: String,
    pub registered_date: String,
    pub last_visit: String,
    pub status: PatientStatus,
    pub vitals: PatientVitals,
    pub visits: Vec<PatientVisit>,
    pub active_medications: Vec<ActiveMedication>,
}

impl PatientRecord {
    /// Condition line shown to the prescriber.
    pub fn condition(&self) -> String {
        if self.medical_conditions.is_empty() {
            GENERAL_CHECKUP.to_string()
        } else {
            self.medical_conditions.join(", ")
        }
    }

    /// Convert to the prescriber's input shape.
    pub fn summary(&self) -> PatientSummary {
        PatientSummary {
            name: self.name.clone(),
            age: self.age,
            weight: if self.weight > 0.0 { self.weight } else { self.vitals.weight },
            condition: self.condition(),
            blood_pressure: self.vitals.blood_pressure.clone(),
            blood_sugar: self.vitals.blood_sugar.clone(),
            heart_rate: self.vitals.heart_rate.clone(),
            medications: self
                .active_medications
                .iter()
                .map(|m| PatientMedicationRecord::new(&m.name, &m.dosage, &m.frequency))
                .collect(),
            visit_history: self
                .visits
                .iter()
                .map(|v| VisitRecord {
                    date: display_date(&v.date),
                    diagnosis: v.diagnosis.clone(),
                    prescriptions: v.prescriptions.clone(),
                })
                .collect(),
        }
    }

    /// Case-insensitive match on name, phone, id or any condition.
    pub fn matches(&self, query: &str) -> bool {
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&q)
            || self.phone.contains(&q)
            || self.id.to_lowercase().contains(&q)
            || self
                .medical_conditions
                .iter()
                .any(|c| c.to_lowercase().contains(&q))
    }
}

/// Format an ISO date as "29 Jan 2026"; anything else passes through.
fn display_date(date: &str) -> String {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|d| d.format("%-d %b %Y").to_string())
        .unwrap_or_else(|_| date.to_string())
}

/// A history line on the dashboard's recent-patients card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardHistoryEntry {
    pub date: String,
    pub diagnosis: String,
    /// Comma-separated prescriptions, e.g. "Metformin 500mg, Glimepiride 1mg"
    pub prescription: String,
}

/// Compact patient shown in the dashboard's recent list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardPatient {
    pub id: u32,
    pub name: String,
    pub last_visit: String,
    pub condition: String,
    pub status: String,
    pub age: u32,
    pub phone: String,
    pub email: String,
    pub weight: f64,
    pub blood_pressure: String,
    pub blood_sugar: String,
    pub heart_rate: String,
    pub active_medications: Vec<PatientMedicationRecord>,
    pub medical_history: Vec<DashboardHistoryEntry>,
    pub next_appointment: String,
}

impl DashboardPatient {
    /// Convert to the prescriber's input shape.
    pub fn summary(&self) -> PatientSummary {
        PatientSummary {
            name: self.name.clone(),
            age: self.age,
            weight: self.weight,
            condition: self.condition.clone(),
            blood_pressure: self.blood_pressure.clone(),
            blood_sugar: self.blood_sugar.clone(),
            heart_rate: self.heart_rate.clone(),
            medications: self.active_medications.clone(),
            visit_history: self
                .medical_history
                .iter()
                .map(|h| VisitRecord {
                    date: h.date.clone(),
                    diagnosis: h.diagnosis.clone(),
                    prescriptions: h
                        .prescription
                        .split(',')
                        .map(|p| p.trim().to_string())
                        .collect(),
                })
                .collect(),
        }
    }
}

/// Rejected new-patient form.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PatientFormError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

/// The "add patient" form as typed by the doctor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewPatient {
    pub name: String,
    pub age: String,
    pub gender: String,
    pub phone: String,
    pub email: String,
    pub weight: String,
    pub height: String,
    pub blood_group: String,
    /// Comma-separated
    pub allergies: String,
    /// Comma-separated
    pub conditions: String,
    pub address: String,
}

impl NewPatient {
    /// Build a record from the form, filling defaults for blank fields.
    pub fn into_record(self, now: DateTime<Utc>) -> Result<PatientRecord, PatientFormError> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(PatientFormError::MissingField("name"));
        }
        if self.age.trim().is_empty() {
            return Err(PatientFormError::MissingField("age"));
        }
        let phone = self.phone.trim().to_string();
        if phone.is_empty() {
            return Err(PatientFormError::MissingField("phone"));
        }

        let millis = now.timestamp_millis().to_string();
        let id = format!("PAT-{}", &millis[millis.len().saturating_sub(6)..]);

        let email = match self.email.trim() {
            "" => format!("{}@email.com", name.to_lowercase().split_whitespace().collect::<Vec<_>>().join(".")),
            e => e.to_string(),
        };
        let address = match self.address.trim() {
            "" => "Address not provided".to_string(),
            a => a.to_string(),
        };
        let gender = match self.gender.trim().to_lowercase().as_str() {
            "male" => Gender::Male,
            "female" => Gender::Female,
            _ => Gender::Other,
        };
        let weight = parse_positive(&self.weight).unwrap_or(70.0);
        let height = parse_positive(&self.height).unwrap_or(170.0);

        let mut medical_conditions = split_list(&self.conditions);
        if medical_conditions.is_empty() {
            medical_conditions.push(GENERAL_CHECKUP.to_string());
        }

        Ok(PatientRecord {
            id,
            name,
            age: leading_integer(&self.age),
            gender,
            phone,
            email,
            weight,
            height,
            blood_group: self.blood_group.trim().to_string(),
            allergies: split_list(&self.allergies),
            medical_conditions,
            address,
            registered_date: now.format("%Y-%m-%d").to_string(),
            last_visit: "New Patient".to_string(),
            status: PatientStatus::Active,
            vitals: PatientVitals {
                blood_pressure: "120/80 mmHg".into(),
                blood_sugar: "110 mg/dL".into(),
                heart_rate: "72 bpm".into(),
                temperature: "98.4°F".into(),
                weight,
                spo2: "98%".into(),
                recorded_at: now.to_rfc3339(),
            },
            visits: Vec::new(),
            active_medications: Vec::new(),
        })
    }
}

fn split_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

fn parse_positive(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| *v > 0.0)
}

/// Leading digits of the text as an integer; 0 when there are none.
fn leading_integer(text: &str) -> u32 {
    let digits: String = text.trim().chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}
