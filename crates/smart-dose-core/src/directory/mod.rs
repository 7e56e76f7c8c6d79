//! Patient directory.
//!
//! The built-in records are always present; records the doctor adds are
//! kept in a [`PatientStore`] and listed first. Store failures never reach
//! the caller: a failed load shows the defaults, a failed save keeps the
//! change in memory only.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::db::{DbResult, KeyValueStore, StorageSlot};
use crate::demo;
use crate::models::{NewPatient, PatientFormError, PatientRecord, PatientStatus, PatientSummary};

const ID_PREFIX: &str = "PAT-";

/// Persistence for doctor-added patient records.
pub trait PatientStore {
    /// Records added by the doctor, newest first.
    fn load_added(&self) -> DbResult<Vec<PatientRecord>>;

    /// Replace the stored additions.
    fn save_added(&self, records: &[PatientRecord]) -> DbResult<()>;
}

impl<S: KeyValueStore> PatientStore for StorageSlot<S> {
    fn load_added(&self) -> DbResult<Vec<PatientRecord>> {
        Ok(self.load_json::<Vec<PatientRecord>>()?.unwrap_or_default())
    }

    fn save_added(&self, records: &[PatientRecord]) -> DbResult<()> {
        self.save_json(records)
    }
}

/// Added records first (minus any that shadow a default id), then defaults.
/// The first record wins when ids repeat.
pub fn merge_patient_records(
    added: Vec<PatientRecord>,
    defaults: Vec<PatientRecord>,
) -> Vec<PatientRecord> {
    let default_ids: HashSet<String> = defaults.iter().map(|p| p.id.clone()).collect();
    let mut seen = HashSet::new();

    added
        .into_iter()
        .filter(|p| !default_ids.contains(&p.id))
        .chain(defaults)
        .filter(|p| seen.insert(p.id.clone()))
        .collect()
}

/// Patient list backed by a store.
pub struct PatientDirectory<P> {
    store: P,
    default_ids: HashSet<String>,
    records: Vec<PatientRecord>,
}

impl<P: PatientStore> PatientDirectory<P> {
    /// Load with the built-in default records.
    pub fn load(store: P) -> Self {
        Self::load_with_defaults(store, demo::default_patient_records())
    }

    /// Load with a custom default list.
    pub fn load_with_defaults(store: P, defaults: Vec<PatientRecord>) -> Self {
        let added = store.load_added().unwrap_or_else(|e| {
            warn!(error = %e, "Could not load stored patients, using defaults");
            Vec::new()
        });
        let default_ids = defaults.iter().map(|p| p.id.clone()).collect();
        let records = merge_patient_records(added, defaults);

        info!(patients = records.len(), "Loaded patient directory");
        Self {
            store,
            default_ids,
            records,
        }
    }

    pub fn records(&self) -> &[PatientRecord] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&PatientRecord> {
        self.records.iter().find(|p| p.id == id)
    }

    /// Prescriber input for a patient.
    pub fn summary(&self, id: &str) -> Option<PatientSummary> {
        self.get(id).map(PatientRecord::summary)
    }

    /// Add a record at the top of the list and persist the additions.
    /// Existing records are never replaced: an id already in the list is
    /// swapped for the next free one.
    pub fn add(&mut self, mut record: PatientRecord) -> &PatientRecord {
        let id = self.unused_id(&record.id);
        if id != record.id {
            debug!(taken = %record.id, id = %id, "Patient id in use");
            record.id = id;
        }
        info!(id = %record.id, name = %record.name, "Added patient");
        self.records.insert(0, record);
        self.persist();
        &self.records[0]
    }

    /// Validate the add-patient form and add the resulting record.
    pub fn add_from_form(
        &mut self,
        form: NewPatient,
        now: DateTime<Utc>,
    ) -> Result<&PatientRecord, PatientFormError> {
        let record = form.into_record(now)?;
        Ok(self.add(record))
    }

    /// Records matching a search query and optional status, in list order.
    pub fn search(&self, query: &str, status: Option<PatientStatus>) -> Vec<&PatientRecord> {
        self.records
            .iter()
            .filter(|p| status.map_or(true, |s| p.status == s))
            .filter(|p| p.matches(query))
            .collect()
    }

    /// `id` if free, else the next unused id. `PAT-` ids count up from
    /// their numeric suffix; others get a `-N` suffix.
    fn unused_id(&self, id: &str) -> String {
        let taken = |candidate: &str| self.records.iter().any(|p| p.id == candidate);
        if !taken(id) {
            return id.to_string();
        }

        let numeric = id
            .strip_prefix(ID_PREFIX)
            .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|digits| digits.parse::<u64>().ok().map(|n| (n, digits.len())));

        let mut step: u64 = 1;
        loop {
            let candidate = match numeric.and_then(|(n, width)| Some((n.checked_add(step)?, width))) {
                Some((n, width)) => format!("{}{:0width$}", ID_PREFIX, n, width = width),
                None => format!("{}-{}", id, step + 1),
            };
            if !taken(&candidate) {
                return candidate;
            }
            step += 1;
        }
    }

    fn persist(&self) {
        let added: Vec<PatientRecord> = self
            .records
            .iter()
            .filter(|p| !self.default_ids.contains(&p.id))
            .cloned()
            .collect();

        if let Err(e) = self.store.save_added(&added) {
            warn!(error = %e, "Could not persist added patients");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{DbError, MemoryStore};
    use chrono::TimeZone;
    use std::cell::RefCell;

    const KEY: &str = "doz3_patient_records";

    fn form(name: &str) -> NewPatient {
        NewPatient {
            name: name.into(),
            age: "30".into(),
            phone: "9000000000".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_load_defaults_when_store_empty() {
        let store = MemoryStore::new();
        let directory = PatientDirectory::load(StorageSlot::new(&store, KEY));
        assert_eq!(directory.records().len(), 8);
    }

    #[test]
    fn test_added_records_come_first_and_persist() {
        let store = MemoryStore::new();
        {
            let mut directory = PatientDirectory::load(StorageSlot::new(&store, KEY));
            directory.add_from_form(form("Kavya Rao"), Utc::now()).unwrap();
        }

        let reloaded = PatientDirectory::load(StorageSlot::new(&store, KEY));
        assert_eq!(reloaded.records().len(), 9);
        assert_eq!(reloaded.records()[0].name, "Kavya Rao");

        // only the addition is stored
        let stored: Vec<PatientRecord> = StorageSlot::new(&store, KEY).load_added().unwrap();
        assert_eq!(stored.len(), 1);
    }

    #[test]
    fn test_colliding_timestamp_ids_keep_both_patients() {
        let store = MemoryStore::new();
        let first = Utc.timestamp_millis_opt(1_700_000_123_456).unwrap();
        let later = Utc.timestamp_millis_opt(1_700_001_123_456).unwrap();
        {
            let mut directory = PatientDirectory::load(StorageSlot::new(&store, KEY));
            directory.add_from_form(form("Alice Thomas"), first).unwrap();
            directory.add_from_form(form("Bob Mathew"), later).unwrap();
            directory.add_from_form(form("Chitra Das"), later).unwrap();
            assert_eq!(directory.records().len(), 11);
        }

        let reloaded = PatientDirectory::load(StorageSlot::new(&store, KEY));
        let added: Vec<(&str, &str)> = reloaded.records()[..3]
            .iter()
            .map(|p| (p.id.as_str(), p.name.as_str()))
            .collect();
        assert_eq!(
            added,
            vec![
                ("PAT-123458", "Chitra Das"),
                ("PAT-123457", "Bob Mathew"),
                ("PAT-123456", "Alice Thomas"),
            ]
        );
        assert_eq!(reloaded.records().len(), 11);
    }

    #[test]
    fn test_default_id_is_not_replaced() {
        let store = MemoryStore::new();
        let defaults = demo::default_patient_records();
        let mut copy = defaults[0].clone();
        copy.name = "Rajesh Kumar Jr".into();
        {
            let mut directory = PatientDirectory::load(StorageSlot::new(&store, KEY));
            let added = directory.add(copy.clone());
            assert_ne!(added.id, defaults[0].id);
        }

        let reloaded = PatientDirectory::load(StorageSlot::new(&store, KEY));
        assert_eq!(reloaded.records().len(), defaults.len() + 1);
        assert_eq!(reloaded.records()[0].name, "Rajesh Kumar Jr");
        assert_eq!(reloaded.get(&defaults[0].id).unwrap().name, defaults[0].name);
    }

    #[test]
    fn test_merge_drops_shadowed_and_repeated_ids() {
        let defaults = demo::default_patient_records();
        let mut shadow = defaults[0].clone();
        shadow.name = "Imposter".into();
        let extra = form("Kavya Rao").into_record(Utc::now()).unwrap();

        let merged = merge_patient_records(
            vec![shadow, extra.clone(), extra.clone()],
            defaults.clone(),
        );

        assert_eq!(merged.len(), defaults.len() + 1);
        assert_eq!(merged[0].id, extra.id);
        assert_eq!(merged[1].name, defaults[0].name);
    }

    #[test]
    fn test_corrupt_store_falls_back_to_defaults() {
        let store = MemoryStore::new();
        store.set_item(KEY, "{broken").unwrap();

        let directory = PatientDirectory::load(StorageSlot::new(&store, KEY));
        assert_eq!(directory.records().len(), 8);
    }

    struct FailingStore {
        saves: RefCell<usize>,
    }

    impl PatientStore for FailingStore {
        fn load_added(&self) -> DbResult<Vec<PatientRecord>> {
            Err(DbError::NotFound("offline".into()))
        }

        fn save_added(&self, _records: &[PatientRecord]) -> DbResult<()> {
            *self.saves.borrow_mut() += 1;
            Err(DbError::NotFound("offline".into()))
        }
    }

    #[test]
    fn test_save_failure_keeps_record_in_memory() {
        let mut directory = PatientDirectory::load(FailingStore {
            saves: RefCell::new(0),
        });
        directory.add_from_form(form("Kavya Rao"), Utc::now()).unwrap();

        assert_eq!(directory.records()[0].name, "Kavya Rao");
        assert_eq!(*directory.store.saves.borrow(), 1);
    }

    #[test]
    fn test_invalid_form_is_rejected() {
        let store = MemoryStore::new();
        let mut directory = PatientDirectory::load(StorageSlot::new(&store, KEY));
        let mut bad = form("Kavya Rao");
        bad.age.clear();

        assert_eq!(
            directory.add_from_form(bad, Utc::now()).err(),
            Some(PatientFormError::MissingField("age"))
        );
        assert_eq!(directory.records().len(), 8);
    }

    #[test]
    fn test_search_with_status() {
        let store = MemoryStore::new();
        let directory = PatientDirectory::load(StorageSlot::new(&store, KEY));

        let follow_ups = directory.search("", Some(PatientStatus::FollowUpRequired));
        assert_eq!(follow_ups.len(), 4);

        let hits = directory.search("hypertension", None);
        assert!(hits.iter().any(|p| p.name == "Rajesh Kumar"));

        assert_eq!(directory.search("PAT-004", None)[0].name, "Meera Patel");
    }

    #[test]
    fn test_summary_for_prescriber() {
        let store = MemoryStore::new();
        let directory = PatientDirectory::load(StorageSlot::new(&store, KEY));

        let summary = directory.summary("PAT-001").unwrap();
        assert_eq!(summary.medications.len(), 3);
        assert_eq!(summary.condition, "Type 2 Diabetes, Hypertension");
        assert!(directory.summary("PAT-999").is_none());
    }
}
