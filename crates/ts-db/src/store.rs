//! The persistence seam used by the map binding.

use ts_core::{PhotoId, Result};

use crate::models::PhotoRecord;
use crate::pool::{get_conn, DbPool};
use crate::queries::photos;

/// Insert, scan and delete photo records.
///
/// Implementations surface engine failures as `Error::Database` and never retry.
pub trait ImageStore {
    /// Append one record. `id` is stored as given and may repeat.
    fn insert(
        &self,
        id: Option<&PhotoId>,
        latitude: f64,
        longitude: f64,
        image_bytes: &[u8],
    ) -> Result<()>;

    /// Every stored record, in no particular order. Empty when there are none.
    fn read_all(&self) -> Result<Vec<PhotoRecord>>;

    /// Remove every record with `id`; returns the number removed.
    fn delete_by_id(&self, id: &PhotoId) -> Result<usize>;

    /// Remove every record; returns the number removed.
    fn clear_all(&self) -> Result<usize>;
}

/// [`ImageStore`] over the SQLite pool.
#[derive(Clone)]
pub struct SqliteImageStore {
    pool: DbPool,
}

impl SqliteImageStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

impl ImageStore for SqliteImageStore {
    fn insert(
        &self,
        id: Option<&PhotoId>,
        latitude: f64,
        longitude: f64,
        image_bytes: &[u8],
    ) -> Result<()> {
        let conn = get_conn(&self.pool)?;
        photos::insert_photo(&conn, id, latitude, longitude, image_bytes)?;
        tracing::debug!(
            id = id.map(PhotoId::as_str),
            latitude,
            longitude,
            bytes = image_bytes.len(),
            "Stored photo"
        );
        Ok(())
    }

    fn read_all(&self) -> Result<Vec<PhotoRecord>> {
        let conn = get_conn(&self.pool)?;
        let records = photos::list_photos(&conn)?;
        tracing::debug!(count = records.len(), "Read stored photos");
        Ok(records)
    }

    fn delete_by_id(&self, id: &PhotoId) -> Result<usize> {
        let conn = get_conn(&self.pool)?;
        let removed = photos::delete_photos_by_id(&conn, id)?;
        tracing::debug!(%id, removed, "Deleted photos by id");
        Ok(removed)
    }

    fn clear_all(&self) -> Result<usize> {
        let conn = get_conn(&self.pool)?;
        let removed = photos::clear_photos(&conn)?;
        tracing::info!(removed, "Cleared all photos");
        Ok(removed)
    }
}
