//! ts-db: database access and persistence layer.
//!
//! This crate provides SQLite-backed storage for photo records with
//! connection pooling, a destructive versioned schema, typed models, the
//! photo query module and the [`ImageStore`] seam used by the map binding.

pub mod models;
pub mod pool;
pub mod queries;
pub mod schema;
pub mod store;

pub use models::PhotoRecord;
pub use store::{ImageStore, SqliteImageStore};
