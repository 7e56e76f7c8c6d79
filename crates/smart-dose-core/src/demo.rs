//! Built-in demo data: the default doctor, the dashboard's recent patients
//! and the patient directory's starting records.

use chrono::NaiveDate;

use crate::models::{
    ActiveMedication, DashboardHistoryEntry, DashboardPatient, DoctorProfile, Gender,
    PatientMedicationRecord, PatientRecord, PatientStatus, PatientSummary, PatientVisit,
    PatientVitals,
};

/// Signed-in doctor used by demo mode.
pub fn default_doctor() -> DoctorProfile {
    DoctorProfile {
        id: "DOC-001".to_string(),
        full_name: "Dr. Priya Sharma".to_string(),
        phone: "+91 98765 43210".to_string(),
        email: "dr.priya@doz3.health".to_string(),
        qualification: "MBBS, MD (Internal Medicine)".to_string(),
        specialization: "Internal Medicine".to_string(),
        registration_number: "MCI-12345678".to_string(),
        clinic_name: "DOZ3 Digital Health Clinic".to_string(),
        clinic_address: "42, 1st Cross, Indiranagar, Bengaluru - 560038".to_string(),
        experience: 12,
        avatar_url: None,
        signature_url: None,
    }
}

/// Patient shown on a draft opened without a selected patient.
pub fn default_patient_summary() -> PatientSummary {
    PatientSummary {
        name: "Rajesh Kumar".to_string(),
        age: 58,
        weight: 72.0,
        condition: "Hypertension, Type 2 Diabetes".to_string(),
        blood_pressure: "140/90".to_string(),
        blood_sugar: "185 mg/dL".to_string(),
        heart_rate: "78 bpm".to_string(),
        medications: Vec::new(),
        visit_history: Vec::new(),
    }
}

/// Recent patients on the dashboard, most recent visit first.
pub fn dashboard_patients() -> Vec<DashboardPatient> {
    SEEDS
        .iter()
        .enumerate()
        .map(|(i, seed)| DashboardPatient {
            id: i as u32 + 1,
            name: seed.name.to_string(),
            last_visit: short_date(seed.last_visit),
            condition: seed.conditions.to_string(),
            status: seed.status.to_string(),
            age: seed.age,
            phone: seed.phone.to_string(),
            email: seed.email.to_string(),
            weight: seed.weight,
            blood_pressure: seed.blood_pressure.to_string(),
            blood_sugar: seed.blood_sugar.to_string(),
            heart_rate: seed.heart_rate.to_string(),
            active_medications: seed.medication_records(),
            medical_history: seed
                .history
                .iter()
                .map(|(date, diagnosis, prescription)| DashboardHistoryEntry {
                    date: short_date(date),
                    diagnosis: diagnosis.to_string(),
                    prescription: prescription.to_string(),
                })
                .collect(),
            next_appointment: short_date(seed.next_appointment),
        })
        .collect()
}

/// Starting records of the patient directory (ids `PAT-001`…).
pub fn default_patient_records() -> Vec<PatientRecord> {
    SEEDS
        .iter()
        .enumerate()
        .map(|(i, seed)| seed.to_record(&format!("PAT-{:03}", i + 1)))
        .collect()
}

/// "2026-02-03" → "Feb 3, 2026"
fn short_date(iso: &str) -> String {
    NaiveDate::parse_from_str(iso, "%Y-%m-%d")
        .map(|d| d.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|_| iso.to_string())
}

struct PatientSeed {
    name: &'static str,
    age: u32,
    gender: Gender,
    phone: &'static str,
    email: &'static str,
    weight: f64,
    height: f64,
    blood_group: &'static str,
    allergies: &'static [&'static str],
    /// Comma-separated
    conditions: &'static str,
    status: &'static str,
    last_visit: &'static str,
    next_appointment: &'static str,
    blood_pressure: &'static str,
    blood_sugar: &'static str,
    heart_rate: &'static str,
    /// (name, dosage, frequency)
    medications: &'static [(&'static str, &'static str, &'static str)],
    /// (ISO date, diagnosis, comma-separated prescriptions), newest first
    history: &'static [(&'static str, &'static str, &'static str)],
}

impl PatientSeed {
    fn medication_records(&self) -> Vec<PatientMedicationRecord> {
        self.medications
            .iter()
            .map(|(name, dosage, frequency)| PatientMedicationRecord::new(*name, *dosage, *frequency))
            .collect()
    }

    fn to_record(&self, id: &str) -> PatientRecord {
        let registered = self
            .history
            .last()
            .map(|(date, _, _)| *date)
            .unwrap_or(self.last_visit);
        let doctor = "Dr. Priya Sharma";

        PatientRecord {
            id: id.to_string(),
            name: self.name.to_string(),
            age: self.age,
            gender: self.gender,
            phone: self.phone.to_string(),
            email: self.email.to_string(),
            weight: self.weight,
            height: self.height,
            blood_group: self.blood_group.to_string(),
            allergies: self.allergies.iter().map(|a| a.to_string()).collect(),
            medical_conditions: self.conditions.split(", ").map(String::from).collect(),
            address: "Bengaluru, Karnataka".to_string(),
            registered_date: registered.to_string(),
            last_visit: self.last_visit.to_string(),
            status: match self.status {
                "Follow-up Required" => PatientStatus::FollowUpRequired,
                _ => PatientStatus::Active,
            },
            vitals: PatientVitals {
                blood_pressure: format!("{} mmHg", self.blood_pressure),
                blood_sugar: self.blood_sugar.to_string(),
                heart_rate: self.heart_rate.to_string(),
                temperature: "98.6°F".to_string(),
                weight: self.weight,
                spo2: "98%".to_string(),
                recorded_at: self.last_visit.to_string(),
            },
            visits: self
                .history
                .iter()
                .enumerate()
                .map(|(n, (date, diagnosis, prescriptions))| PatientVisit {
                    id: format!("{}-V{}", id, self.history.len() - n),
                    date: date.to_string(),
                    diagnosis: diagnosis.to_string(),
                    symptoms: diagnosis.to_string(),
                    prescriptions: prescriptions.split(", ").map(String::from).collect(),
                    notes: String::new(),
                    follow_up_date: (n == 0).then(|| self.next_appointment.to_string()),
                })
                .collect(),
            active_medications: self
                .medications
                .iter()
                .map(|(name, dosage, frequency)| ActiveMedication {
                    name: name.to_string(),
                    dosage: dosage.to_string(),
                    frequency: frequency.to_string(),
                    start_date: registered.to_string(),
                    end_date: None,
                    prescribed_by: doctor.to_string(),
                })
                .collect(),
        }
    }
}

static SEEDS: &[PatientSeed] = &[
    PatientSeed {
        name: "Rajesh Kumar",
        age: 58,
        gender: Gender::Male,
        phone: "+91 98765 43210",
        email: "rajesh.kumar@email.com",
        weight: 72.0,
        height: 170.0,
        blood_group: "B+",
        allergies: &["Sulfa drugs"],
        conditions: "Type 2 Diabetes, Hypertension",
        status: "Follow-up Required",
        last_visit: "2026-02-03",
        next_appointment: "2026-02-10",
        blood_pressure: "140/90",
        blood_sugar: "185 mg/dL",
        heart_rate: "78 bpm",
        medications: &[
            ("Glimepiride", "1mg", "1-0-0"),
            ("Metformin", "500mg", "1-0-1"),
            ("Telmisartan", "40mg", "1-0-0"),
        ],
        history: &[
            ("2026-02-03", "Elevated blood sugar levels", "Metformin 500mg, Glimepiride 1mg"),
            ("2026-01-15", "High BP, Fatigue", "Telmisartan 40mg"),
            ("2025-12-10", "Regular checkup", "Continue existing medication"),
        ],
    },
    PatientSeed {
        name: "Priya Sharma",
        age: 34,
        gender: Gender::Female,
        phone: "+91 98765 43211",
        email: "priya.sharma@email.com",
        weight: 58.0,
        height: 160.0,
        blood_group: "O+",
        allergies: &["Dust"],
        conditions: "Asthma",
        status: "Stable",
        last_visit: "2026-02-02",
        next_appointment: "2026-03-02",
        blood_pressure: "120/80",
        blood_sugar: "95 mg/dL",
        heart_rate: "72 bpm",
        medications: &[
            ("Salbutamol Inhaler", "100mcg", "1-1-1"),
            ("Montelukast", "10mg", "0-0-1"),
        ],
        history: &[
            ("2026-02-02", "Mild asthma attack", "Salbutamol Inhaler 100mcg, Montelukast 10mg"),
            ("2026-01-05", "Routine checkup", "Montelukast 10mg"),
        ],
    },
    PatientSeed {
        name: "Anil Verma",
        age: 45,
        gender: Gender::Male,
        phone: "+91 98765 43212",
        email: "anil.verma@email.com",
        weight: 78.0,
        height: 175.0,
        blood_group: "A+",
        allergies: &[],
        conditions: "Chronic Back Pain, Mild Hypertension",
        status: "Follow-up Required",
        last_visit: "2026-02-01",
        next_appointment: "2026-02-08",
        blood_pressure: "130/85",
        blood_sugar: "102 mg/dL",
        heart_rate: "75 bpm",
        medications: &[
            ("Aceclofenac", "100mg", "1-0-1"),
            ("Thiocolchicoside", "4mg", "1-0-1"),
            ("Pregabalin", "75mg", "0-0-1"),
        ],
        history: &[
            ("2026-02-01", "Chronic lower back pain - Flare up", "Aceclofenac 100mg, Thiocolchicoside 4mg, Pregabalin 75mg"),
            ("2026-01-10", "Back pain management", "Diclofenac 50mg"),
        ],
    },
    PatientSeed {
        name: "Meera Patel",
        age: 52,
        gender: Gender::Female,
        phone: "+91 98765 43213",
        email: "meera.patel@email.com",
        weight: 65.0,
        height: 158.0,
        blood_group: "AB+",
        allergies: &[],
        conditions: "Hypothyroidism",
        status: "Stable",
        last_visit: "2026-01-31",
        next_appointment: "2026-04-30",
        blood_pressure: "125/82",
        blood_sugar: "90 mg/dL",
        heart_rate: "70 bpm",
        medications: &[
            ("Levothyroxine", "75mcg", "1-0-0"),
        ],
        history: &[
            ("2026-01-31", "Hypothyroidism - Dose adjustment", "Levothyroxine 75mcg"),
            ("2025-12-20", "TSH monitoring", "Levothyroxine 50mcg"),
        ],
    },
    PatientSeed {
        name: "Suresh Reddy",
        age: 61,
        gender: Gender::Male,
        phone: "+91 98765 43214",
        email: "suresh.reddy@email.com",
        weight: 82.0,
        height: 172.0,
        blood_group: "O-",
        allergies: &["Penicillin"],
        conditions: "Hypertension, High Cholesterol",
        status: "Follow-up Required",
        last_visit: "2026-01-30",
        next_appointment: "2026-02-13",
        blood_pressure: "150/95",
        blood_sugar: "105 mg/dL",
        heart_rate: "80 bpm",
        medications: &[
            ("Amlodipine", "10mg", "1-0-0"),
            ("Telmisartan", "40mg", "1-0-0"),
            ("Atorvastatin", "20mg", "0-0-1"),
        ],
        history: &[
            ("2026-01-30", "Uncontrolled hypertension with dyslipidemia", "Amlodipine 10mg, Atorvastatin 20mg"),
            ("2026-01-02", "Regular checkup", "Telmisartan 40mg"),
        ],
    },
    PatientSeed {
        name: "Kavita Singh",
        age: 29,
        gender: Gender::Female,
        phone: "+91 98765 43215",
        email: "kavita.singh@email.com",
        weight: 54.0,
        height: 162.0,
        blood_group: "B-",
        allergies: &[],
        conditions: "Migraine",
        status: "Stable",
        last_visit: "2026-01-29",
        next_appointment: "2026-03-29",
        blood_pressure: "118/75",
        blood_sugar: "88 mg/dL",
        heart_rate: "68 bpm",
        medications: &[
            ("Sumatriptan", "50mg", "1-0-0"),
            ("Propranolol", "40mg", "1-0-1"),
        ],
        history: &[
            ("2026-01-29", "Chronic migraine with aura", "Sumatriptan 50mg, Propranolol 40mg"),
            ("2025-12-15", "Severe headache", "Paracetamol 650mg"),
        ],
    },
    PatientSeed {
        name: "Vikram Malhotra",
        age: 55,
        gender: Gender::Male,
        phone: "+91 98765 43216",
        email: "vikram.m@email.com",
        weight: 85.0,
        height: 178.0,
        blood_group: "A-",
        allergies: &[],
        conditions: "High Cholesterol",
        status: "Stable",
        last_visit: "2026-01-28",
        next_appointment: "2026-04-28",
        blood_pressure: "135/88",
        blood_sugar: "98 mg/dL",
        heart_rate: "74 bpm",
        medications: &[
            ("Atorvastatin", "20mg", "0-0-1"),
        ],
        history: &[
            ("2026-01-28", "High LDL cholesterol", "Atorvastatin 20mg"),
            ("2025-12-05", "Lipid panel review", "Atorvastatin 20mg"),
        ],
    },
    PatientSeed {
        name: "Anita Desai",
        age: 67,
        gender: Gender::Female,
        phone: "+91 98765 43217",
        email: "anita.desai@email.com",
        weight: 62.0,
        height: 155.0,
        blood_group: "O+",
        allergies: &["Aspirin"],
        conditions: "Arthritis",
        status: "Follow-up Required",
        last_visit: "2026-01-27",
        next_appointment: "2026-02-10",
        blood_pressure: "138/86",
        blood_sugar: "110 mg/dL",
        heart_rate: "76 bpm",
        medications: &[
            ("Ibuprofen", "400mg", "1-0-1"),
            ("Calcium", "500mg", "0-1-0"),
            ("Vitamin D", "60,000 IU", "1-0-0"),
        ],
        history: &[
            ("2026-01-27", "Osteoarthritis", "Ibuprofen 400mg, Calcium 500mg, Vitamin D 60,000 IU"),
            ("2025-12-28", "Joint pain", "Diclofenac 50mg"),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_dates_are_display_formatted() {
        let patients = dashboard_patients();
        assert_eq!(patients.len(), 8);
        assert_eq!(patients[0].name, "Rajesh Kumar");
        assert_eq!(patients[0].last_visit, "Feb 3, 2026");
        assert_eq!(patients[0].medical_history[1].date, "Jan 15, 2026");
    }

    #[test]
    fn test_default_records_have_unique_ids() {
        let records = default_patient_records();
        let mut ids: Vec<_> = records.iter().map(|r| r.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), records.len());
        assert_eq!(records[0].id, "PAT-001");
    }

    #[test]
    fn test_record_and_dashboard_agree_on_medications() {
        let record = &default_patient_records()[2];
        let dashboard = &dashboard_patients()[2];
        assert_eq!(record.summary().medications, dashboard.summary().medications);
        assert_eq!(record.medical_conditions, vec!["Chronic Back Pain", "Mild Hypertension"]);
    }

    #[test]
    fn test_short_date_passes_through_non_iso() {
        assert_eq!(short_date("New Patient"), "New Patient");
    }
}
