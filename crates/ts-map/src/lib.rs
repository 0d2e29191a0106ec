//! ts-map: glue between the photo store and an external clustering map.
//!
//! The map SDK owns spatial grouping, camera projection and icon drawing.
//! This crate feeds it [`PhotoPoint`]s through the [`ClusterManager`] and
//! [`MapCamera`] seams, and supplies the marker and click policy it calls
//! back into.

pub mod binding;
pub mod component;
pub mod headless;
pub mod point;
pub mod render;

pub use binding::{MapBinding, SelectionOutcome};
pub use component::{ClusterManager, MapCamera};
pub use headless::{CameraRequest, HeadlessCamera, HeadlessClusters};
pub use point::{PhotoPoint, PlaceSelection};
pub use render::{ClusterMarker, ItemMarker, MarkerRenderer};
