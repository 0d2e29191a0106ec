//! Photo CRUD operations.
//!
//! Reads and deletes treat a missing table as an empty one.

use rusqlite::Connection;
use ts_core::{Error, PhotoId, Result};

use crate::models::PhotoRecord;
use crate::schema;

const COLS: &str = "id, latitude, longitude, image_data";

/// Append one photo row. The store assigns no id.
///
/// SQLite stores NaN as NULL, so non-finite coordinates are refused.
pub fn insert_photo(
    conn: &Connection,
    id: Option<&PhotoId>,
    latitude: f64,
    longitude: f64,
    image_bytes: &[u8],
) -> Result<()> {
    if !latitude.is_finite() || !longitude.is_finite() {
        return Err(Error::Validation(format!(
            "coordinates must be finite, got ({latitude}, {longitude})"
        )));
    }

    conn.execute(
        "INSERT INTO photos (id, latitude, longitude, image_data) VALUES (?1, ?2, ?3, ?4)",
        rusqlite::params![id.map(PhotoId::as_str), latitude, longitude, image_bytes],
    )
    .map_err(|e| Error::database(e.to_string()))?;
    Ok(())
}

/// Full table scan in storage order.
pub fn list_photos(conn: &Connection) -> Result<Vec<PhotoRecord>> {
    if !schema::table_exists(conn)? {
        return Ok(Vec::new());
    }

    let q = format!("SELECT {COLS} FROM photos");
    let mut stmt = conn.prepare(&q).map_err(|e| Error::database(e.to_string()))?;
    let rows = stmt
        .query_map([], PhotoRecord::from_row)
        .map_err(|e| Error::database(e.to_string()))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| Error::database(e.to_string()))?;
    Ok(rows)
}

/// Delete every row carrying `id`. Returns how many were removed.
pub fn delete_photos_by_id(conn: &Connection, id: &PhotoId) -> Result<usize> {
    if !schema::table_exists(conn)? {
        return Ok(0);
    }
    conn.execute("DELETE FROM photos WHERE id = ?1", [id.as_str()])
        .map_err(|e| Error::database(e.to_string()))
}

/// Remove every row. Returns how many were removed.
pub fn clear_photos(conn: &Connection) -> Result<usize> {
    if !schema::table_exists(conn)? {
        return Ok(0);
    }
    conn.execute("DELETE FROM photos", [])
        .map_err(|e| Error::database(e.to_string()))
}

pub fn count_photos(conn: &Connection) -> Result<i64> {
    if !schema::table_exists(conn)? {
        return Ok(0);
    }
    conn.query_row("SELECT COUNT(*) FROM photos", [], |row| row.get(0))
        .map_err(|e| Error::database(e.to_string()))
}
