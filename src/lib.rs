//! Travelstory - geotagged photos on a clustered map
//!
//! This library crate exposes the command implementations for integration testing.

pub mod app;

pub use app::{PhotoSummary, Travelstory};
