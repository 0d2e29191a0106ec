//! ts-core: shared types, IDs, errors, geography and configuration.
//!
//! This crate is the foundational dependency for all other ts-* crates.

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;

// Re-export the most commonly used items at the crate root.
pub use error::{Error, Result};
pub use geo::{LatLng, LatLngBounds, LatLngBoundsBuilder};
pub use ids::PhotoId;
