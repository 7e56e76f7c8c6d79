//! SQLite schema definition.

/// Complete database schema for smart-dose.
pub const SCHEMA: &str = r#"
-- ============================================================================
-- Local storage
-- ============================================================================

-- String key/value pairs. Values are JSON documents written by the
-- patient directory and the auth session.
CREATE TABLE IF NOT EXISTS local_storage (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL,
    updated_at TEXT NOT NULL DEFAULT (datetime('now'))
);
"#;
