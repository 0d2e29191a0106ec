//! The photo table and its version policy.
//!
//! The declared version lives in `PRAGMA user_version`. There are no
//! incremental migrations: when the stored version differs from the declared
//! one the table is dropped and recreated, losing every row.

use rusqlite::Connection;
use ts_core::{Error, Result};

/// Version of the id-bearing photo table.
pub const SCHEMA_VERSION: i64 = 2;

/// Name of the only table.
pub const PHOTOS_TABLE: &str = "photos";

const CREATE_PHOTOS: &str = r#"
CREATE TABLE IF NOT EXISTS photos (
    id         TEXT,
    latitude   DOUBLE,
    longitude  DOUBLE,
    image_data BLOB
);
"#;

const DROP_PHOTOS: &str = "DROP TABLE IF EXISTS photos;";

/// What [`ensure_schema`] had to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaAction {
    /// Fresh database: table created and version stamped.
    Created,
    /// Stored version matched; nothing changed.
    Unchanged,
    /// Stored version differed; table dropped and recreated.
    Recreated { from: i64 },
}

/// Read the stored schema version (0 for a fresh database).
pub fn stored_version(conn: &Connection) -> Result<i64> {
    conn.query_row("PRAGMA user_version", [], |row| row.get(0))
        .map_err(|e| Error::database(format!("Failed to read user_version: {e}")))
}

/// Whether the photo table currently exists.
pub fn table_exists(conn: &Connection) -> Result<bool> {
    conn.query_row(
        "SELECT COUNT(*) > 0 FROM sqlite_master WHERE type='table' AND name=?1",
        [PHOTOS_TABLE],
        |row| row.get(0),
    )
    .map_err(|e| Error::database(e.to_string()))
}

/// Bring the database to `declared`, dropping the table on any mismatch.
pub fn ensure_schema(conn: &Connection, declared: i64) -> Result<SchemaAction> {
    if declared <= 0 {
        return Err(Error::InvalidInput(format!(
            "schema version must be positive, got {declared}"
        )));
    }

    let stored = stored_version(conn)?;

    let tx = conn
        .unchecked_transaction()
        .map_err(|e| Error::database(e.to_string()))?;

    let action = if stored == 0 && !table_exists(&tx)? {
        tx.execute_batch(CREATE_PHOTOS)
            .map_err(|e| Error::database(format!("Failed to create photos table: {e}")))?;
        SchemaAction::Created
    } else if stored == declared {
        // Someone may have dropped the table behind our back.
        tx.execute_batch(CREATE_PHOTOS)
            .map_err(|e| Error::database(format!("Failed to create photos table: {e}")))?;
        SchemaAction::Unchanged
    } else {
        tracing::warn!(
            stored,
            declared,
            "Photo schema version changed; dropping all stored photos"
        );
        tx.execute_batch(DROP_PHOTOS)
            .map_err(|e| Error::database(format!("Failed to drop photos table: {e}")))?;
        tx.execute_batch(CREATE_PHOTOS)
            .map_err(|e| Error::database(format!("Failed to recreate photos table: {e}")))?;
        SchemaAction::Recreated { from: stored }
    };

    tx.pragma_update(None, "user_version", declared)
        .map_err(|e| Error::database(format!("Failed to stamp user_version: {e}")))?;

    tx.commit().map_err(|e| Error::database(e.to_string()))?;

    tracing::debug!(?action, version = declared, "Photo schema ready");
    Ok(action)
}
