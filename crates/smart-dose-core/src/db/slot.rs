//! A single JSON document under a fixed storage key.

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{DbResult, KeyValueStore};

/// One key of a [`KeyValueStore`], read and written as JSON.
#[derive(Debug, Clone)]
pub struct StorageSlot<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> StorageSlot<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Decode the stored document; `None` when the key is unset.
    pub fn load_json<T: DeserializeOwned>(&self) -> DbResult<Option<T>> {
        match self.store.get_item(&self.key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Encode and store a document.
    pub fn save_json<T: Serialize + ?Sized>(&self, value: &T) -> DbResult<()> {
        let raw = serde_json::to_string(value)?;
        self.store.set_item(&self.key, &raw)
    }

    /// Delete the document. Returns whether it existed.
    pub fn clear(&self) -> DbResult<bool> {
        self.store.remove_item(&self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{DbError, MemoryStore};

    #[test]
    fn test_json_round_trip_and_clear() {
        let store = MemoryStore::new();
        let slot = StorageSlot::new(&store, "numbers");

        assert_eq!(slot.load_json::<Vec<u32>>().unwrap(), None);

        slot.save_json(&vec![1u32, 2, 3]).unwrap();
        assert_eq!(slot.load_json::<Vec<u32>>().unwrap(), Some(vec![1, 2, 3]));

        assert!(slot.clear().unwrap());
        assert_eq!(slot.load_json::<Vec<u32>>().unwrap(), None);
    }

    #[test]
    fn test_corrupt_document_is_an_error() {
        let store = MemoryStore::new();
        store.set_item("numbers", "not json").unwrap();

        let slot = StorageSlot::new(&store, "numbers");
        assert!(matches!(slot.load_json::<Vec<u32>>(), Err(DbError::Json(_))));
    }
}
