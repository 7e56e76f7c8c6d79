//! Confirmed prescription payload and print header.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::doctor::{ClinicDetails, DoctorProfile};
use super::dose::DoseTriple;
use super::suggestion::DrugSuggestion;

/// One confirmed line of a prescription.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrescriptionMedication {
    pub drug: String,
    pub dosage: String,
    pub morning: u8,
    pub afternoon: u8,
    pub night: u8,
}

impl PrescriptionMedication {
    pub fn dose(&self) -> DoseTriple {
        DoseTriple::new(self.morning, self.afternoon, self.night)
    }
}

impl From<&DrugSuggestion> for PrescriptionMedication {
    fn from(s: &DrugSuggestion) -> Self {
        Self {
            drug: s.drug.clone(),
            dosage: s.dosage.clone(),
            morning: s.dose.morning,
            afternoon: s.dose.afternoon,
            night: s.dose.night,
        }
    }
}

/// Payload handed to the print/confirmation collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrescriptionData {
    pub patient_name: String,
    pub patient_age: u32,
    pub patient_weight: f64,
    pub patient_history: String,
    pub symptoms: String,
    pub medications: Vec<PrescriptionMedication>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_instructions: Option<String>,
    pub order_amount: u32,
}

impl PrescriptionData {
    /// Export to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// The follow-up date falls outside the calendar.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Follow-up {days} days after {issued_on} is out of range")]
pub struct FollowUpOutOfRange {
    pub issued_on: NaiveDate,
    pub days: u32,
}

/// Letterhead and numbering for a printed prescription.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintHeader {
    /// "RX-YYYYMMDD-NNN"
    pub rx_number: String,
    pub issued_on: NaiveDate,
    pub follow_up_on: NaiveDate,
    pub doctor_name: String,
    pub doctor_qualification: String,
    pub doctor_registration: String,
    pub clinic: ClinicDetails,
}

impl PrintHeader {
    /// Build a header issued on `issued_on`. Only the last three digits of
    /// `serial` are used.
    pub fn new(
        doctor: &DoctorProfile,
        clinic: &ClinicDetails,
        issued_on: NaiveDate,
        follow_up_days: u32,
        serial: u32,
    ) -> Result<Self, FollowUpOutOfRange> {
        let follow_up_on = issued_on
            .checked_add_signed(Duration::days(i64::from(follow_up_days)))
            .ok_or(FollowUpOutOfRange {
                issued_on,
                days: follow_up_days,
            })?;

        Ok(Self {
            rx_number: format!("RX-{}-{:03}", issued_on.format("%Y%m%d"), serial % 1000),
            issued_on,
            follow_up_on,
            doctor_name: doctor.full_name.clone(),
            doctor_qualification: doctor.qualification.clone(),
            doctor_registration: doctor.registration_number.clone(),
            clinic: clinic.clone(),
        })
    }

    /// Plain-text rendering of a prescription under this header.
    pub fn render(&self, data: &PrescriptionData) -> String {
        let mut out = String::new();

        out.push_str(&format!("{}\n", self.clinic.name));
        out.push_str(&format!("{}\n", self.clinic.address));
        out.push_str(&format!("{}\n\n", self.clinic.contact));
        out.push_str(&format!(
            "{} ({})  Reg. No: {}\n",
            self.doctor_name, self.doctor_qualification, self.doctor_registration
        ));
        out.push_str(&format!(
            "Date: {}  Rx No: {}\n\n",
            self.issued_on.format("%d %b %Y"),
            self.rx_number
        ));
        out.push_str(&format!(
            "Patient: {}  Age: {} years  Weight: {} kg\n",
            data.patient_name, data.patient_age, data.patient_weight
        ));
        out.push_str(&format!("History: {}\n", data.patient_history));
        if !data.symptoms.is_empty() {
            out.push_str(&format!("Symptoms: {}\n", data.symptoms));
        }
        out.push_str("\nRx\n");

        for (i, med) in data.medications.iter().enumerate() {
            out.push_str(&format!(
                "{}. {} {}  {}\n",
                i + 1,
                med.drug,
                med.dosage,
                med.dose()
            ));
        }

        if let Some(instructions) = &data.additional_instructions {
            out.push_str(&format!("\nInstructions: {}\n", instructions));
        }
        out.push_str(&format!(
            "\nNext Follow-up: {}\n",
            self.follow_up_on.format("%d %b %Y")
        ));

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo;

    fn payload() -> PrescriptionData {
        PrescriptionData {
            patient_name: "Rajesh Kumar".into(),
            patient_age: 58,
            patient_weight: 72.0,
            patient_history: "Hypertension, Type 2 Diabetes".into(),
            symptoms: "dizziness".into(),
            medications: vec![PrescriptionMedication {
                drug: "Metformin".into(),
                dosage: "500mg".into(),
                morning: 1,
                afternoon: 0,
                night: 1,
            }],
            additional_instructions: None,
            order_amount: 450,
        }
    }

    #[test]
    fn test_payload_json_keys() {
        let json: serde_json::Value = serde_json::from_str(&payload().to_json().unwrap()).unwrap();

        assert_eq!(json["patientName"], "Rajesh Kumar");
        assert_eq!(json["orderAmount"], 450);
        assert_eq!(json["medications"][0]["night"], 1);
        assert!(json.get("additionalInstructions").is_none());
    }

    #[test]
    fn test_header_numbering_and_follow_up() {
        let issued = NaiveDate::from_ymd_opt(2026, 2, 5).unwrap();
        let header = PrintHeader::new(
            &demo::default_doctor(),
            &ClinicDetails::default(),
            issued,
            15,
            1007,
        )
        .unwrap();

        assert_eq!(header.rx_number, "RX-20260205-007");
        assert_eq!(header.follow_up_on, NaiveDate::from_ymd_opt(2026, 2, 20).unwrap());
    }

    #[test]
    fn test_render_lists_medications_in_schedule_notation() {
        let issued = NaiveDate::from_ymd_opt(2026, 2, 5).unwrap();
        let header = PrintHeader::new(
            &demo::default_doctor(),
            &ClinicDetails::default(),
            issued,
            15,
            42,
        )
        .unwrap();

        let text = header.render(&payload());
        assert!(text.contains("1. Metformin 500mg  1-0-1"));
        assert!(text.contains("Rx No: RX-20260205-042"));
        assert!(!text.contains("Instructions:"));
    }

    #[test]
    fn test_follow_up_past_calendar_end_is_an_error() {
        let issued = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let result = PrintHeader::new(
            &demo::default_doctor(),
            &ClinicDetails::default(),
            issued,
            u32::MAX,
            1,
        );

        assert_eq!(
            result,
            Err(FollowUpOutOfRange {
                issued_on: issued,
                days: u32::MAX,
            })
        );
    }
}
