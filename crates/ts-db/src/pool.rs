//! Connection pool management for SQLite via r2d2.

use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use ts_core::{Error, Result};

use crate::schema::{self, SCHEMA_VERSION};

/// Type alias for the database connection pool.
pub type DbPool = Pool<SqliteConnectionManager>;

/// Type alias for a pooled database connection.
pub type PooledConnection = r2d2::PooledConnection<SqliteConnectionManager>;

/// Knobs for [`init_pool_with_options`].
#[derive(Debug, Clone, Copy)]
pub struct PoolOptions {
    pub max_connections: u32,
    /// Schema version the caller expects; a mismatch wipes the table.
    pub schema_version: i64,
}

impl Default for PoolOptions {
    fn default() -> Self {
        Self {
            max_connections: 4,
            schema_version: SCHEMA_VERSION,
        }
    }
}

/// Initialize a database pool backed by a file on disk.
///
/// Creates the SQLite file if it does not exist, enables WAL journal mode on
/// every new connection, and brings the photo table to [`SCHEMA_VERSION`].
pub fn init_pool(db_path: &str) -> Result<DbPool> {
    init_pool_with_options(db_path, PoolOptions::default())
}

/// Like [`init_pool`], but with an explicit declared schema version.
pub fn init_pool_with_version(db_path: &str, schema_version: i64) -> Result<DbPool> {
    init_pool_with_options(
        db_path,
        PoolOptions {
            schema_version,
            ..PoolOptions::default()
        },
    )
}

pub fn init_pool_with_options(db_path: &str, options: PoolOptions) -> Result<DbPool> {
    let manager = SqliteConnectionManager::file(db_path)
        .with_init(|conn| conn.execute_batch("PRAGMA journal_mode = WAL;"));

    build_and_migrate(manager, options, "connection pool")
}

/// Initialize an in-memory database pool (useful for tests).
///
/// Each call creates a uniquely-named shared-cache in-memory database so
/// that parallel tests do not interfere with each other, while all
/// connections *within* a single pool still share state.
pub fn init_memory_pool() -> Result<DbPool> {
    use std::sync::atomic::{AtomicU64, Ordering};
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    let uri = format!("file:photos_memdb_{n}?mode=memory&cache=shared");

    let manager = SqliteConnectionManager::file(uri);

    build_and_migrate(manager, PoolOptions::default(), "in-memory pool")
}

fn build_and_migrate(
    manager: SqliteConnectionManager,
    options: PoolOptions,
    what: &str,
) -> Result<DbPool> {
    if options.max_connections == 0 {
        return Err(Error::Validation(
            "database.max_connections must be at least 1".into(),
        ));
    }

    let pool = Pool::builder()
        .max_size(options.max_connections)
        .build(manager)
        .map_err(|e| Error::database(format!("Failed to create {what}: {e}")))?;

    let conn = get_conn(&pool)?;
    schema::ensure_schema(&conn, options.schema_version)?;

    Ok(pool)
}

/// Convenience helper to get a connection from the pool.
pub fn get_conn(pool: &DbPool) -> Result<PooledConnection> {
    pool.get()
        .map_err(|e| Error::database(format!("Failed to get connection from pool: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_memory_pool() {
        let pool = init_memory_pool().unwrap();
        assert_eq!(pool.max_size(), 4);
    }

    #[test]
    fn test_schema_ready_on_init() {
        let pool = init_memory_pool().unwrap();
        let conn = get_conn(&pool).unwrap();
        assert!(schema::table_exists(&conn).unwrap());
        assert_eq!(schema::stored_version(&conn).unwrap(), SCHEMA_VERSION);
    }

    #[test]
    fn test_memory_pools_are_isolated() {
        let a = init_memory_pool().unwrap();
        let b = init_memory_pool().unwrap();
        get_conn(&a)
            .unwrap()
            .execute("INSERT INTO photos (id) VALUES ('x')", [])
            .unwrap();
        let n: i64 = get_conn(&b)
            .unwrap()
            .query_row("SELECT COUNT(*) FROM photos", [], |row| row.get(0))
            .unwrap();
        assert_eq!(n, 0);
    }

    #[test]
    fn test_file_pool_creates_database() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photos.db");
        let pool = init_pool(path.to_str().unwrap()).unwrap();
        assert!(path.exists());
        let conn = get_conn(&pool).unwrap();
        assert!(schema::table_exists(&conn).unwrap());
    }

    #[test]
    fn test_zero_connections_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photos.db");
        let err = init_pool_with_options(
            path.to_str().unwrap(),
            PoolOptions {
                max_connections: 0,
                ..PoolOptions::default()
            },
        )
        .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }
}
