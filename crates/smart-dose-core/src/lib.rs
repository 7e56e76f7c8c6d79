//! Smart-Dose Core Library
//!
//! Dosage suggestions and draft review for a doctor's prescription portal.
//!
//! # Architecture
//!
//! ```text
//! Patient record ──► Suggestion Builder ──► Draft (entries + snapshots)
//!   (active meds,      (type resolver,           │
//!    recent visit)      dosage resolver,     doctor edits
//!                       frequency parser)        │
//!                                          Override tracking
//!                                                │
//!                                        Confirmation filter
//!                                        (drops 0-0-0 lines)
//!                                                │
//!                                         PrescriptionData
//! ```
//!
//! # Core Principle
//!
//! **Every suggestion is reviewed.** The engine proposes a dose triple for each
//! line; the doctor can change any period, and changes are tracked against the
//! original suggestion until confirmation.
//!
//! # Modules
//!
//! - [`knowledge`]: Dosage form, default dose, and frequency tables
//! - [`suggest`]: Initial draft from a patient record
//! - [`session`]: Editable draft, override tracking, confirmation
//! - [`catalog`]: Static medicine catalog with search
//! - [`directory`]: Patient list with persisted additions
//! - [`auth`]: Mocked sign-in and onboarding
//! - [`db`]: SQLite key/value storage
//! - [`config`]: Layered runtime configuration

pub mod auth;
pub mod catalog;
pub mod config;
pub mod db;
pub mod demo;
pub mod directory;
pub mod knowledge;
pub mod models;
pub mod session;
pub mod suggest;

// Re-export commonly used types
pub use auth::{AuthSession, AuthState, OnboardingStep};
pub use catalog::MedicineCatalog;
pub use crate::config::SmartDoseConfig;
pub use db::{Database, KeyValueStore, MemoryStore, StorageSlot};
pub use directory::PatientDirectory;
pub use knowledge::KnowledgeBase;
pub use models::{
    DosePeriod, DoseTriple, DraftEntry, DrugSuggestion, MedicationType, OverrideFlags,
    PatientRecord, PatientSummary, PrescriptionData, PrintHeader,
};
pub use session::{ConfirmOutcome, PrescriptionSession, SessionSettings};
pub use suggest::SuggestionBuilder;

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::path::Path;
use std::sync::{Arc, Mutex};

use chrono::Utc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use models::{
    DashboardPatient, DoctorProfile, DrugSchedule, Medicine, NewPatient, PatientStatus,
    QuickAddOption,
};

type SharedDatabase = Arc<Mutex<Database>>;

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum SmartDoseError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<db::DbError> for SmartDoseError {
    fn from(e: db::DbError) -> Self {
        SmartDoseError::DatabaseError(e.to_string())
    }
}

impl From<serde_json::Error> for SmartDoseError {
    fn from(e: serde_json::Error) -> Self {
        SmartDoseError::SerializationError(e.to_string())
    }
}

impl From<config::ConfigError> for SmartDoseError {
    fn from(e: config::ConfigError) -> Self {
        SmartDoseError::ConfigError(e.to_string())
    }
}

impl From<session::SessionError> for SmartDoseError {
    fn from(e: session::SessionError) -> Self {
        SmartDoseError::InvalidInput(e.to_string())
    }
}

impl From<session::ConfirmError> for SmartDoseError {
    fn from(e: session::ConfirmError) -> Self {
        SmartDoseError::InvalidInput(e.to_string())
    }
}

impl From<auth::AuthError> for SmartDoseError {
    fn from(e: auth::AuthError) -> Self {
        SmartDoseError::InvalidInput(e.to_string())
    }
}

impl From<models::PatientFormError> for SmartDoseError {
    fn from(e: models::PatientFormError) -> Self {
        SmartDoseError::InvalidInput(e.to_string())
    }
}

impl From<models::UnknownMedicationType> for SmartDoseError {
    fn from(e: models::UnknownMedicationType) -> Self {
        SmartDoseError::InvalidInput(e.to_string())
    }
}

impl From<models::FollowUpOutOfRange> for SmartDoseError {
    fn from(e: models::FollowUpOutOfRange) -> Self {
        SmartDoseError::ConfigError(e.to_string())
    }
}

impl<T> From<std::sync::PoisonError<T>> for SmartDoseError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        SmartDoseError::DatabaseError(format!("Lock poisoned: {}", e))
    }
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

/// Install a `tracing` subscriber. Falls back to `RUST_LOG`, then the
/// default filter. Returns false if a subscriber was already installed.
#[uniffi::export]
pub fn init_logging(filter: Option<String>) -> bool {
    let filter = match filter {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(SmartDoseConfig::default().log_filter)),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_ok()
}

/// Open or create a database at the given path. Configuration comes from
/// `config_path` (if given) and the environment.
#[uniffi::export]
pub fn open_database(
    path: String,
    config_path: Option<String>,
) -> Result<Arc<SmartDoseCore>, SmartDoseError> {
    let config = SmartDoseConfig::load(config_path.as_deref().map(Path::new))?;
    let db = Database::open(&path)?;
    info!(path = %path, "Opened database");
    Ok(Arc::new(SmartDoseCore::new(db, config)))
}

/// Create an in-memory database with default configuration (for testing).
#[uniffi::export]
pub fn open_database_in_memory() -> Result<Arc<SmartDoseCore>, SmartDoseError> {
    let db = Database::open_in_memory()?;
    Ok(Arc::new(SmartDoseCore::new(db, SmartDoseConfig::default())))
}


// =========================================================================
// Main API Object
// =========================================================================

/// Thread-safe engine handle for FFI.
#[derive(uniffi::Object)]
pub struct SmartDoseCore {
    db: SharedDatabase,
    config: SmartDoseConfig,
    catalog: MedicineCatalog,
    builder: SuggestionBuilder,
    directory: Mutex<PatientDirectory<StorageSlot<SharedDatabase>>>,
    auth: Mutex<AuthSession<StorageSlot<SharedDatabase>>>,
}

impl SmartDoseCore {
    /// Wire every component to one database.
    pub fn new(db: Database, config: SmartDoseConfig) -> Self {
        let db = Arc::new(Mutex::new(db));
        let directory = PatientDirectory::load(StorageSlot::new(
            Arc::clone(&db),
            config.patient_records_key.clone(),
        ));
        let auth = AuthSession::load(
            StorageSlot::new(Arc::clone(&db), config.auth_key.clone()),
            config.demo_mode,
            config.default_doctor.clone(),
        );

        Self {
            db,
            catalog: MedicineCatalog::new(),
            builder: SuggestionBuilder::new(),
            directory: Mutex::new(directory),
            auth: Mutex::new(auth),
            config,
        }
    }

    pub fn config(&self) -> &SmartDoseConfig {
        &self.config
    }

    fn open_draft(&self, patient: Option<PatientSummary>) -> Arc<DraftHandle> {
        let session = PrescriptionSession::new(
            self.builder.clone(),
            patient,
            self.config.session_settings(),
        );
        Arc::new(DraftHandle {
            draft_id: Uuid::new_v4().to_string(),
            session: Mutex::new(session),
        })
    }
}

#[uniffi::export]
impl SmartDoseCore {
    // =========================================================================
    // Patient Operations
    // =========================================================================

    /// All patients, doctor-added first.
    pub fn list_patients(&self) -> Result<Vec<FfiPatient>, SmartDoseError> {
        let directory = self.directory.lock()?;
        Ok(directory.records().iter().map(FfiPatient::from).collect())
    }

    /// Get a patient by ID.
    pub fn get_patient(&self, id: String) -> Result<Option<FfiPatient>, SmartDoseError> {
        let directory = self.directory.lock()?;
        Ok(directory.get(&id).map(FfiPatient::from))
    }

    /// Search by name, phone, ID or condition, optionally by status label
    /// ("All" means any status).
    pub fn search_patients(
        &self,
        query: String,
        status: Option<String>,
    ) -> Result<Vec<FfiPatient>, SmartDoseError> {
        let status = match status.as_deref() {
            Some(label) => parse_status(label)?,
            None => None,
        };
        let directory = self.directory.lock()?;
        Ok(directory
            .search(&query, status)
            .into_iter()
            .map(FfiPatient::from)
            .collect())
    }

    /// Validate the add-patient form and store the new patient.
    pub fn add_patient(&self, form: FfiNewPatient) -> Result<FfiPatient, SmartDoseError> {
        let mut directory = self.directory.lock()?;
        let record = directory.add_from_form(form.into(), Utc::now())?;
        Ok(FfiPatient::from(record))
    }

    /// The dashboard's recent-patients list.
    pub fn dashboard_patients(&self) -> Vec<FfiPatientCard> {
        demo::dashboard_patients()
            .iter()
            .map(FfiPatientCard::from)
            .collect()
    }

    // =========================================================================
    // Catalog Operations
    // =========================================================================

    /// Search the medicine catalog. `None` or "All" means every category.
    pub fn search_medicines(&self, query: String, category: Option<String>) -> Vec<FfiMedicine> {
        self.catalog
            .search(&query, category.as_deref())
            .into_iter()
            .map(FfiMedicine::from)
            .collect()
    }

    pub fn medicine_categories(&self) -> Vec<String> {
        self.catalog.categories()
    }

    /// Filter the prescriber's quick-add list.
    pub fn quick_add_options(
        &self,
        query: String,
        category: Option<String>,
    ) -> Vec<FfiQuickAddOption> {
        self.catalog
            .filter_quick_add(&query, category.as_deref())
            .into_iter()
            .map(FfiQuickAddOption::from)
            .collect()
    }

    pub fn quick_add_categories(&self) -> Vec<String> {
        self.catalog.quick_add_categories()
    }

    // =========================================================================
    // Draft Operations
    // =========================================================================

    /// Open a draft for a directory patient, or the default draft when no
    /// patient is selected.
    pub fn start_draft(
        &self,
        patient_id: Option<String>,
    ) -> Result<Arc<DraftHandle>, SmartDoseError> {
        let patient = match patient_id {
            Some(id) => {
                let directory = self.directory.lock()?;
                let summary = directory
                    .summary(&id)
                    .ok_or_else(|| SmartDoseError::NotFound(format!("patient {}", id)))?;
                Some(summary)
            }
            None => None,
        };
        Ok(self.open_draft(patient))
    }

    /// Open a draft for a patient on the dashboard's recent list.
    pub fn start_dashboard_draft(&self, id: u32) -> Result<Arc<DraftHandle>, SmartDoseError> {
        let patient = demo::dashboard_patients()
            .into_iter()
            .find(|p| p.id == id)
            .ok_or_else(|| SmartDoseError::NotFound(format!("dashboard patient {}", id)))?;
        Ok(self.open_draft(Some(patient.summary())))
    }

    /// Plain-text prescription for a confirmed payload, signed by the
    /// current doctor and dated today.
    pub fn render_prescription(
        &self,
        prescription_json: String,
        serial: u32,
    ) -> Result<String, SmartDoseError> {
        let data: PrescriptionData = serde_json::from_str(&prescription_json)?;
        let doctor = self
            .auth
            .lock()?
            .doctor()
            .cloned()
            .unwrap_or_else(|| self.config.default_doctor.clone());

        let header = PrintHeader::new(
            &doctor,
            &self.config.clinic,
            Utc::now().date_naive(),
            self.config.follow_up_days,
            serial,
        )?;
        Ok(header.render(&data))
    }

    // =========================================================================
    // Auth Operations
    // =========================================================================

    pub fn auth_state(&self) -> Result<FfiAuthState, SmartDoseError> {
        Ok(self.auth.lock()?.state().into())
    }

    /// Request an OTP for a phone number.
    pub fn login(&self, phone: String) -> Result<FfiAuthState, SmartDoseError> {
        let mut auth = self.auth.lock()?;
        auth.login(&phone)?;
        Ok(auth.state().into())
    }

    pub fn verify_otp(&self, otp: String) -> Result<FfiAuthState, SmartDoseError> {
        let mut auth = self.auth.lock()?;
        auth.verify_otp(&otp)?;
        Ok(auth.state().into())
    }

    pub fn complete_profile(&self, doctor: FfiDoctor) -> Result<FfiAuthState, SmartDoseError> {
        let mut auth = self.auth.lock()?;
        auth.complete_profile(doctor.into());
        Ok(auth.state().into())
    }

    pub fn skip_to_app(&self) -> Result<FfiAuthState, SmartDoseError> {
        let mut auth = self.auth.lock()?;
        auth.skip_to_app();
        Ok(auth.state().into())
    }

    pub fn logout(&self) -> Result<FfiAuthState, SmartDoseError> {
        let mut auth = self.auth.lock()?;
        auth.logout();
        Ok(auth.state().into())
    }

    // =========================================================================
    // Storage
    // =========================================================================

    /// Keys currently held in local storage.
    pub fn storage_keys(&self) -> Result<Vec<String>, SmartDoseError> {
        let db = self.db.lock()?;
        Ok(db.storage_keys()?)
    }
}

// =========================================================================
// Draft Object
// =========================================================================

/// One prescription draft being reviewed.
#[derive(uniffi::Object)]
pub struct DraftHandle {
    draft_id: String,
    session: Mutex<PrescriptionSession>,
}

#[uniffi::export]
impl DraftHandle {
    pub fn draft_id(&self) -> String {
        self.draft_id.clone()
    }

    pub fn patient_name(&self) -> Result<String, SmartDoseError> {
        Ok(self.session.lock()?.patient().name.clone())
    }

    /// Current lines with their suggested doses and override flags.
    pub fn entries(&self) -> Result<Vec<FfiDraftEntry>, SmartDoseError> {
        let session = self.session.lock()?;
        Ok(session.entries().iter().map(FfiDraftEntry::from).collect())
    }

    /// Add a medicine at its default dose. Returns its index.
    pub fn add_medicine(&self, name: String, dosage: String) -> Result<u32, SmartDoseError> {
        let index = self.session.lock()?.add_medicine(&name, &dosage);
        Ok(index as u32)
    }

    /// Add several quick-add options at once. Returns how many were added.
    pub fn add_medicines(&self, medicines: Vec<FfiQuickAddOption>) -> Result<u32, SmartDoseError> {
        let added = self
            .session
            .lock()?
            .add_medicines(medicines.into_iter().map(|m| (m.name, m.dosage)));
        Ok(added as u32)
    }

    pub fn remove(&self, index: u32) -> Result<FfiDrugSuggestion, SmartDoseError> {
        let removed = self.session.lock()?.remove(index as usize)?;
        Ok(removed.into())
    }

    /// Set one period's units. Returns the stored (clamped) value.
    pub fn set_dose(
        &self,
        index: u32,
        period: FfiDosePeriod,
        units: u8,
    ) -> Result<u8, SmartDoseError> {
        Ok(self
            .session
            .lock()?
            .set_dose(index as usize, period.into(), units)?)
    }

    pub fn set_medication_type(
        &self,
        index: u32,
        medication_type: String,
    ) -> Result<(), SmartDoseError> {
        let medication_type: MedicationType = medication_type.parse()?;
        Ok(self
            .session
            .lock()?
            .set_medication_type(index as usize, medication_type)?)
    }

    pub fn overrides(&self, index: u32) -> Result<FfiOverrides, SmartDoseError> {
        Ok(self.session.lock()?.is_overridden(index as usize).into())
    }

    pub fn zero_dose_indices(&self) -> Result<Vec<u32>, SmartDoseError> {
        let session = self.session.lock()?;
        Ok(session
            .zero_dose_indices()
            .into_iter()
            .map(|i| i as u32)
            .collect())
    }

    /// Discard all edits and rebuild from the patient record.
    pub fn regenerate(&self) -> Result<u32, SmartDoseError> {
        Ok(self.session.lock()?.regenerate() as u32)
    }

    pub fn symptoms(&self) -> Result<String, SmartDoseError> {
        Ok(self.session.lock()?.symptoms().to_string())
    }

    pub fn set_symptoms(&self, symptoms: String) -> Result<(), SmartDoseError> {
        self.session.lock()?.set_symptoms(symptoms);
        Ok(())
    }

    pub fn set_instructions(&self, instructions: String) -> Result<(), SmartDoseError> {
        self.session.lock()?.set_instructions(instructions);
        Ok(())
    }

    /// Drop 0-0-0 lines and build the order payload.
    pub fn confirm(&self) -> Result<FfiConfirmation, SmartDoseError> {
        let outcome = self.session.lock()?.confirm()?;
        FfiConfirmation::try_from(outcome)
    }
}

// =========================================================================
// FFI Types
// =========================================================================

/// Time of day for a dose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum FfiDosePeriod {
    Morning,
    Afternoon,
    Night,
}

impl From<FfiDosePeriod> for DosePeriod {
    fn from(period: FfiDosePeriod) -> Self {
        match period {
            FfiDosePeriod::Morning => DosePeriod::Morning,
            FfiDosePeriod::Afternoon => DosePeriod::Afternoon,
            FfiDosePeriod::Night => DosePeriod::Night,
        }
    }
}

/// FFI-safe suggestion.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiDrugSuggestion {
    pub drug: String,
    pub dosage: String,
    pub medication_type: String,
    pub morning: u8,
    pub afternoon: u8,
    pub night: u8,
}

impl From<DrugSuggestion> for FfiDrugSuggestion {
    fn from(s: DrugSuggestion) -> Self {
        Self {
            medication_type: s.medication_type.to_string(),
            morning: s.dose.morning,
            afternoon: s.dose.afternoon,
            night: s.dose.night,
            drug: s.drug,
            dosage: s.dosage,
        }
    }
}

/// Which periods differ from the original suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Record)]
pub struct FfiOverrides {
    pub morning: bool,
    pub afternoon: bool,
    pub night: bool,
}

impl From<OverrideFlags> for FfiOverrides {
    fn from(flags: OverrideFlags) -> Self {
        Self {
            morning: flags.morning,
            afternoon: flags.afternoon,
            night: flags.night,
        }
    }
}

/// FFI-safe draft line.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiDraftEntry {
    pub suggestion: FfiDrugSuggestion,
    /// Dose as first suggested
    pub suggested: String,
    pub overrides: FfiOverrides,
}

impl From<&DraftEntry> for FfiDraftEntry {
    fn from(entry: &DraftEntry) -> Self {
        Self {
            suggestion: entry.suggestion().clone().into(),
            suggested: entry.snapshot().to_string(),
            overrides: entry.overrides().into(),
        }
    }
}

/// FFI-safe confirmed line.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPrescriptionLine {
    pub drug: String,
    pub dosage: String,
    pub morning: u8,
    pub afternoon: u8,
    pub night: u8,
}

/// FFI-safe confirmation result.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiConfirmation {
    pub lines: Vec<FfiPrescriptionLine>,
    pub removed: u32,
    pub removed_notice: Option<String>,
    pub order_amount: u32,
    /// Full payload, camelCase JSON
    pub prescription_json: String,
}

impl TryFrom<ConfirmOutcome> for FfiConfirmation {
    type Error = SmartDoseError;

    fn try_from(outcome: ConfirmOutcome) -> Result<Self, Self::Error> {
        let prescription_json = outcome.prescription.to_json()?;
        let removed_notice = outcome.removed_notice();
        let ConfirmOutcome {
            prescription,
            removed,
        } = outcome;

        Ok(Self {
            lines: prescription
                .medications
                .into_iter()
                .map(|m| FfiPrescriptionLine {
                    drug: m.drug,
                    dosage: m.dosage,
                    morning: m.morning,
                    afternoon: m.afternoon,
                    night: m.night,
                })
                .collect(),
            removed: removed as u32,
            removed_notice,
            order_amount: prescription.order_amount,
            prescription_json,
        })
    }
}

/// FFI-safe patient.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPatient {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub phone: String,
    pub condition: String,
    pub status: String,
    pub last_visit: String,
    pub weight: f64,
    pub blood_group: String,
    pub allergies: Vec<String>,
}

impl From<&PatientRecord> for FfiPatient {
    fn from(patient: &PatientRecord) -> Self {
        Self {
            id: patient.id.clone(),
            name: patient.name.clone(),
            age: patient.age,
            gender: format!("{:?}", patient.gender),
            phone: patient.phone.clone(),
            condition: patient.condition(),
            status: status_label(patient.status).to_string(),
            last_visit: patient.last_visit.clone(),
            weight: patient.weight,
            blood_group: patient.blood_group.clone(),
            allergies: patient.allergies.clone(),
        }
    }
}

/// FFI-safe add-patient form. Blank optional fields get defaults.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiNewPatient {
    pub name: String,
    pub age: String,
    pub gender: String,
    pub phone: String,
    pub email: String,
    pub weight: String,
    pub height: String,
    pub blood_group: String,
    pub allergies: String,
    pub conditions: String,
    pub address: String,
}

impl From<FfiNewPatient> for NewPatient {
    fn from(form: FfiNewPatient) -> Self {
        NewPatient {
            name: form.name,
            age: form.age,
            gender: form.gender,
            phone: form.phone,
            email: form.email,
            weight: form.weight,
            height: form.height,
            blood_group: form.blood_group,
            allergies: form.allergies,
            conditions: form.conditions,
            address: form.address,
        }
    }
}

/// FFI-safe dashboard card.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPatientCard {
    pub id: u32,
    pub name: String,
    pub age: u32,
    pub condition: String,
    pub status: String,
    pub last_visit: String,
    pub next_appointment: String,
}

impl From<&DashboardPatient> for FfiPatientCard {
    fn from(p: &DashboardPatient) -> Self {
        Self {
            id: p.id,
            name: p.name.clone(),
            age: p.age,
            condition: p.condition.clone(),
            status: p.status.clone(),
            last_visit: p.last_visit.clone(),
            next_appointment: p.next_appointment.clone(),
        }
    }
}

/// FFI-safe catalog medicine.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiMedicine {
    pub id: String,
    pub name: String,
    pub generic_name: String,
    pub brand: String,
    pub dosages: Vec<String>,
    pub medication_type: String,
    pub category: String,
    pub schedule: String,
    pub side_effects: Vec<String>,
    pub usage_notes: String,
    pub incentive_per_unit: u32,
    pub in_stock: bool,
}

impl From<&Medicine> for FfiMedicine {
    fn from(m: &Medicine) -> Self {
        Self {
            id: m.id.clone(),
            name: m.name.clone(),
            generic_name: m.generic_name.clone(),
            brand: m.brand.clone(),
            dosages: m.dosages.clone(),
            medication_type: m.medication_type.to_string(),
            category: m.category.clone(),
            schedule: schedule_label(m.schedule).to_string(),
            side_effects: m.side_effects.clone(),
            usage_notes: m.usage_notes.clone(),
            incentive_per_unit: m.incentive_per_unit,
            in_stock: m.in_stock,
        }
    }
}

/// FFI-safe quick-add option.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiQuickAddOption {
    pub name: String,
    pub dosage: String,
    pub category: String,
}

impl From<&QuickAddOption> for FfiQuickAddOption {
    fn from(o: &QuickAddOption) -> Self {
        Self {
            name: o.name.clone(),
            dosage: o.dosage.clone(),
            category: o.category.clone(),
        }
    }
}

/// FFI-safe doctor profile.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiDoctor {
    pub id: String,
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub qualification: String,
    pub specialization: String,
    pub registration_number: String,
    pub clinic_name: String,
    pub clinic_address: String,
    pub experience: u32,
}

impl From<&DoctorProfile> for FfiDoctor {
    fn from(d: &DoctorProfile) -> Self {
        Self {
            id: d.id.clone(),
            full_name: d.full_name.clone(),
            phone: d.phone.clone(),
            email: d.email.clone(),
            qualification: d.qualification.clone(),
            specialization: d.specialization.clone(),
            registration_number: d.registration_number.clone(),
            clinic_name: d.clinic_name.clone(),
            clinic_address: d.clinic_address.clone(),
            experience: d.experience,
        }
    }
}

impl From<FfiDoctor> for DoctorProfile {
    fn from(d: FfiDoctor) -> Self {
        DoctorProfile {
            id: d.id,
            full_name: d.full_name,
            phone: d.phone,
            email: d.email,
            qualification: d.qualification,
            specialization: d.specialization,
            registration_number: d.registration_number,
            clinic_name: d.clinic_name,
            clinic_address: d.clinic_address,
            experience: d.experience,
            avatar_url: None,
            signature_url: None,
        }
    }
}

/// FFI-safe auth state.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiAuthState {
    pub is_authenticated: bool,
    pub is_onboarding_complete: bool,
    pub doctor: Option<FfiDoctor>,
    /// Kebab-case step name, e.g. "profile-setup"
    pub onboarding_step: String,
}

impl From<&AuthState> for FfiAuthState {
    fn from(state: &AuthState) -> Self {
        Self {
            is_authenticated: state.is_authenticated,
            is_onboarding_complete: state.is_onboarding_complete,
            doctor: state.doctor.as_ref().map(FfiDoctor::from),
            onboarding_step: step_label(state.onboarding_step).to_string(),
        }
    }
}

fn status_label(status: PatientStatus) -> &'static str {
    match status {
        PatientStatus::Active => "Active",
        PatientStatus::FollowUpRequired => "Follow-up Required",
        PatientStatus::Inactive => "Inactive",
    }
}

/// `None` for "All", which filters nothing.
fn parse_status(label: &str) -> Result<Option<PatientStatus>, SmartDoseError> {
    let label = label.trim();
    if label.eq_ignore_ascii_case(catalog::ALL_CATEGORIES) {
        return Ok(None);
    }
    [
        PatientStatus::Active,
        PatientStatus::FollowUpRequired,
        PatientStatus::Inactive,
    ]
    .into_iter()
    .find(|s| status_label(*s).eq_ignore_ascii_case(label))
    .map(Some)
    .ok_or_else(|| SmartDoseError::InvalidInput(format!("Unknown patient status: {}", label)))
}

fn schedule_label(schedule: DrugSchedule) -> &'static str {
    match schedule {
        DrugSchedule::Otc => "OTC",
        DrugSchedule::H => "H",
        DrugSchedule::H1 => "H1",
        DrugSchedule::X => "X",
    }
}

fn step_label(step: OnboardingStep) -> &'static str {
    match step {
        OnboardingStep::Splash => "splash",
        OnboardingStep::Login => "login",
        OnboardingStep::Otp => "otp",
        OnboardingStep::ProfileSetup => "profile-setup",
        OnboardingStep::Complete => "complete",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_round_trip_through_ffi() {
        let core = open_database_in_memory().unwrap();
        let draft = core.start_draft(Some("PAT-001".into())).unwrap();

        let entries = draft.entries().unwrap();
        assert!(!entries.is_empty());
        assert!(entries.iter().all(|e| !e.overrides.morning));

        let stored = draft.set_dose(0, FfiDosePeriod::Morning, 9).unwrap();
        assert_eq!(stored, 5);
        assert!(draft.overrides(0).unwrap().morning);

        let confirmation = draft.confirm().unwrap();
        assert_eq!(confirmation.order_amount, 450);
        assert!(confirmation.prescription_json.contains("\"patientName\""));

        let text = core
            .render_prescription(confirmation.prescription_json, 7)
            .unwrap();
        assert!(text.contains("-007"));
    }

    #[test]
    fn test_unknown_patient_is_not_found() {
        let core = open_database_in_memory().unwrap();
        assert!(matches!(
            core.start_draft(Some("PAT-999".into())),
            Err(SmartDoseError::NotFound(_))
        ));
    }

    #[test]
    fn test_default_draft_without_patient() {
        let core = open_database_in_memory().unwrap();
        let draft = core.start_draft(None).unwrap();

        let drugs: Vec<String> = draft
            .entries()
            .unwrap()
            .into_iter()
            .map(|e| e.suggestion.drug)
            .collect();
        assert_eq!(drugs, vec!["Glimepiride", "Metformin", "Telmisartan"]);
    }

    #[test]
    fn test_set_medication_type_validates_name() {
        let core = open_database_in_memory().unwrap();
        let draft = core.start_draft(None).unwrap();

        draft.set_medication_type(0, "syrup".into()).unwrap();
        assert_eq!(draft.entries().unwrap()[0].suggestion.medication_type, "Syrup");
        assert!(matches!(
            draft.set_medication_type(0, "lozenge".into()),
            Err(SmartDoseError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_search_patients_by_status_label() {
        let core = open_database_in_memory().unwrap();
        let follow_ups = core
            .search_patients(String::new(), Some("follow-up required".into()))
            .unwrap();
        assert!(follow_ups.iter().all(|p| p.status == "Follow-up Required"));
        assert!(core
            .search_patients(String::new(), Some("asleep".into()))
            .is_err());
    }

    #[test]
    fn test_all_status_label_is_no_filter() {
        let core = open_database_in_memory().unwrap();
        let everyone = core
            .search_patients(String::new(), Some("All".into()))
            .unwrap();
        assert_eq!(everyone.len(), core.list_patients().unwrap().len());
        assert_eq!(
            core.search_patients("PAT-004".into(), Some("all".into()))
                .unwrap()[0]
                .name,
            "Meera Patel"
        );
    }

    #[test]
    fn test_out_of_range_follow_up_is_a_config_error() {
        let db = Database::open_in_memory().unwrap();
        let config = SmartDoseConfig {
            follow_up_days: u32::MAX,
            ..SmartDoseConfig::default()
        };
        let core = SmartDoseCore::new(db, config);
        let draft = core.start_draft(Some("PAT-001".into())).unwrap();
        let confirmation = draft.confirm().unwrap();

        assert!(matches!(
            core.render_prescription(confirmation.prescription_json, 1),
            Err(SmartDoseError::ConfigError(_))
        ));
    }

    #[test]
    fn test_auth_state_persists_in_database() {
        let core = open_database_in_memory().unwrap();
        // demo mode starts signed in
        assert!(core.auth_state().unwrap().is_authenticated);

        core.skip_to_app().unwrap();
        assert!(core
            .storage_keys()
            .unwrap()
            .contains(&"doz3_doctor_auth".to_string()));
        assert_eq!(core.auth_state().unwrap().onboarding_step, "complete");
    }
}
