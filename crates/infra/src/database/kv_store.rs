//! Synchronous helpers over the `kv_store` table.
//!
//! The app persists whole JSON documents under fixed string keys. Writes are
//! full-value replacements; there are no partial updates at this layer.

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};

/// Read the stored value for a key, if any.
pub(crate) fn get_value(conn: &Connection, key: &str) -> rusqlite::Result<Option<String>> {
    conn.query_row("SELECT value FROM kv_store WHERE key = ?1", params![key], |row| row.get(0))
        .optional()
}

/// Replace the stored value for a key (upsert).
pub(crate) fn set_value(conn: &Connection, key: &str, value: &str) -> rusqlite::Result<()> {
    let now = Utc::now().timestamp();
    conn.execute(
        "INSERT INTO kv_store (key, value, updated_at)
         VALUES (?1, ?2, ?3)
         ON CONFLICT(key) DO UPDATE SET
            value = excluded.value,
            updated_at = excluded.updated_at",
        params![key, value, now],
    )?;
    Ok(())
}
