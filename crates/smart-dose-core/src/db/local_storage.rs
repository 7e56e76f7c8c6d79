//! Key/value storage operations.

use std::sync::{Arc, Mutex};

use rusqlite::{params, OptionalExtension};

use super::{Database, DbResult};

/// String key/value storage.
pub trait KeyValueStore {
    /// Value stored under `key`, if any.
    fn get_item(&self, key: &str) -> DbResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: &str) -> DbResult<()>;

    /// Delete `key`. Returns whether it existed.
    fn remove_item(&self, key: &str) -> DbResult<bool>;
}

impl KeyValueStore for Database {
    fn get_item(&self, key: &str) -> DbResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM local_storage WHERE key = ?",
                [key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set_item(&self, key: &str, value: &str) -> DbResult<()> {
        self.conn.execute(
            r#"
            INSERT INTO local_storage (key, value, updated_at)
            VALUES (?1, ?2, datetime('now'))
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
            params![key, value],
        )?;
        Ok(())
    }

    fn remove_item(&self, key: &str) -> DbResult<bool> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM local_storage WHERE key = ?", [key])?;
        Ok(rows_affected > 0)
    }
}

impl Database {
    /// All stored keys, sorted.
    pub fn storage_keys(&self) -> DbResult<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT key FROM local_storage ORDER BY key")?;
        let keys = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(keys)
    }
}

/// Shared database handle, as held by the FFI object.
impl KeyValueStore for Arc<Mutex<Database>> {
    fn get_item(&self, key: &str) -> DbResult<Option<String>> {
        self.lock()?.get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> DbResult<()> {
        self.lock()?.set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> DbResult<bool> {
        self.lock()?.remove_item(key)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get_item(&self, key: &str) -> DbResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> DbResult<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> DbResult<bool> {
        (**self).remove_item(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing() {
        let db = Database::open_in_memory().unwrap();
        assert_eq!(db.get_item("nope").unwrap(), None);
    }

    #[test]
    fn test_set_get_overwrite() {
        let db = Database::open_in_memory().unwrap();

        db.set_item("doz3_doctor_auth", "{\"a\":1}").unwrap();
        db.set_item("doz3_doctor_auth", "{\"a\":2}").unwrap();

        assert_eq!(
            db.get_item("doz3_doctor_auth").unwrap().as_deref(),
            Some("{\"a\":2}")
        );
        assert_eq!(db.storage_keys().unwrap(), vec!["doz3_doctor_auth"]);
    }

    #[test]
    fn test_remove() {
        let db = Database::open_in_memory().unwrap();
        db.set_item("k", "v").unwrap();

        assert!(db.remove_item("k").unwrap());
        assert!(!db.remove_item("k").unwrap());
        assert_eq!(db.get_item("k").unwrap(), None);
    }

    #[test]
    fn test_shared_handle() {
        let shared = Arc::new(Mutex::new(Database::open_in_memory().unwrap()));
        shared.set_item("k", "v").unwrap();
        assert_eq!(shared.get_item("k").unwrap().as_deref(), Some("v"));
    }
}
