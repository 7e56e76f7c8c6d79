//! Draft session integration tests: editing, overrides, confirmation.

use smart_dose_core::demo;
use smart_dose_core::models::{
    DosePeriod, DoseTriple, MedicationType, PatientMedicationRecord, PatientSummary,
};
use smart_dose_core::session::{ConfirmError, PrescriptionSession, SessionError, SessionSettings};
use smart_dose_core::suggest::SuggestionBuilder;

fn session_for(meds: &[(&str, &str, &str)]) -> PrescriptionSession {
    let patient = PatientSummary {
        medications: meds
            .iter()
            .map(|(n, d, f)| PatientMedicationRecord::new(*n, *d, *f))
            .collect(),
        visit_history: Vec::new(),
        ..demo::default_patient_summary()
    };
    PrescriptionSession::new(
        SuggestionBuilder::new(),
        Some(patient),
        SessionSettings::default(),
    )
}

fn three_line_session() -> PrescriptionSession {
    session_for(&[
        ("Metformin", "500mg", "1-0-1"),
        ("Telmisartan", "40mg", "1-0-0"),
        ("Atorvastatin", "10mg", "0-0-1"),
    ])
}

#[test]
fn test_add_then_edit_morning_is_overridden() {
    let mut session = session_for(&[]);
    let index = session.add_medicine("Metformin", "500mg");

    session.set_dose(index, DosePeriod::Morning, 2).unwrap();

    let flags = session.is_overridden(index);
    assert!(flags.morning);
    assert!(!flags.afternoon);
    assert!(!flags.night);
}

#[test]
fn test_edit_back_to_suggestion_clears_override() {
    let mut session = three_line_session();

    session.set_dose(0, DosePeriod::Night, 0).unwrap();
    assert!(session.is_overridden(0).night);

    session.set_dose(0, DosePeriod::Night, 1).unwrap();
    assert!(!session.is_overridden(0).any());
}

#[test]
fn test_remove_keeps_snapshots_paired() {
    let mut session = three_line_session();
    session.set_dose(2, DosePeriod::Morning, 1).unwrap();

    let removed = session.remove(1).unwrap();
    assert_eq!(removed.drug, "Telmisartan");
    assert_eq!(session.len(), 2);

    let entries = session.entries();
    assert_eq!(entries[0].suggestion().drug, "Metformin");
    assert_eq!(entries[0].snapshot(), DoseTriple::new(1, 0, 1));
    assert_eq!(entries[1].suggestion().drug, "Atorvastatin");
    assert_eq!(entries[1].snapshot(), DoseTriple::new(0, 0, 1));

    // the edit moved with its line
    assert!(session.is_overridden(1).morning);
    assert!(!session.is_overridden(0).any());
}

#[test]
fn test_out_of_range_edits_are_errors() {
    let mut session = three_line_session();

    assert_eq!(
        session.set_dose(3, DosePeriod::Morning, 1),
        Err(SessionError::NoSuchEntry { index: 3, len: 3 })
    );
    assert!(session.remove(7).is_err());
    assert!(!session.is_overridden(42).any());
}

#[test]
fn test_roller_is_clamped() {
    let mut session = three_line_session();
    assert_eq!(session.set_dose(0, DosePeriod::Afternoon, 12).unwrap(), 5);
    assert_eq!(session.entries()[0].suggestion().dose.afternoon, 5);
}

#[test]
fn test_change_type() {
    let mut session = three_line_session();
    session
        .set_medication_type(0, MedicationType::Syrup)
        .unwrap();
    assert_eq!(
        session.entries()[0].suggestion().medication_type,
        MedicationType::Syrup
    );
    // a type change is not a dose override
    assert!(!session.is_overridden(0).any());
}

#[test]
fn test_bulk_add_snapshots_each_line() {
    let mut session = session_for(&[]);
    let before = session.len();

    let added = session.add_medicines([("Insulin Glargine", "10 units"), ("Cetirizine", "10mg")]);
    assert_eq!(added, 2);
    assert_eq!(session.len(), before + 2);

    let insulin = &session.entries()[before];
    assert_eq!(insulin.suggestion().medication_type, MedicationType::Injection);
    assert_eq!(insulin.snapshot(), DoseTriple::new(1, 0, 1));
}

#[test]
fn test_confirm_drops_zero_lines() {
    let mut session = three_line_session();
    for period in DosePeriod::ALL {
        session.set_dose(1, period, 0).unwrap();
    }
    assert_eq!(session.zero_dose_indices(), vec![1]);
    session.set_instructions("  Take after food  ");

    let outcome = session.confirm().unwrap();
    assert_eq!(outcome.removed, 1);
    assert_eq!(
        outcome.removed_notice().as_deref(),
        Some("1 medicine(s) with 0-0-0 dosage removed from prescription")
    );

    let data = outcome.prescription;
    assert_eq!(data.medications.len(), 2);
    assert_eq!(data.additional_instructions.as_deref(), Some("Take after food"));
    assert_eq!(data.order_amount, 450);

    // the draft itself is untouched
    assert_eq!(session.len(), 3);
}

#[test]
fn test_all_zero_draft_is_rejected() {
    let mut session = session_for(&[("Metformin", "500mg", "1-0-1")]);
    for period in DosePeriod::ALL {
        session.set_dose(0, period, 0).unwrap();
    }

    assert_eq!(session.confirm(), Err(ConfirmError::NoDosedMedications));
}

#[test]
fn test_regenerate_discards_edits() {
    let mut session = three_line_session();
    session.add_medicine("Cetirizine", "10mg");
    session.set_dose(0, DosePeriod::Morning, 3).unwrap();

    assert_eq!(session.regenerate(), 3);
    assert!(session.entries().iter().all(|e| !e.overrides().any()));
}

#[test]
fn test_payload_json_shape() {
    let session = three_line_session();
    let json = session.confirm().unwrap().prescription.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["patientName"], "Rajesh Kumar");
    assert_eq!(value["medications"][0]["drug"], "Metformin");
    assert_eq!(value["medications"][0]["night"], 1);
    assert!(value.get("additionalInstructions").is_none());
}
