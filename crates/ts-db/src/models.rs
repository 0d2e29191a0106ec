//! Rust structs mapping to database tables.

use ts_core::{LatLng, PhotoId};

/// One row of the `photos` table.
#[derive(Debug, Clone, PartialEq)]
pub struct PhotoRecord {
    pub id: Option<PhotoId>,
    pub latitude: f64,
    pub longitude: f64,
    /// PNG-encoded image.
    pub image_bytes: Vec<u8>,
}

impl PhotoRecord {
    pub fn from_row(row: &rusqlite::Row) -> rusqlite::Result<Self> {
        let id: Option<String> = row.get(0)?;
        Ok(Self {
            id: id.map(PhotoId::from),
            latitude: row.get(1)?,
            longitude: row.get(2)?,
            image_bytes: row.get(3)?,
        })
    }

    pub fn position(&self) -> LatLng {
        LatLng::new(self.latitude, self.longitude)
    }
}
