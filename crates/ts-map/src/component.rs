//! Seams standing in for the map SDK.
//!
//! Implementations own the clustering algorithm and camera; the binding only
//! registers points and requests view changes.

use std::sync::Arc;

use ts_core::{LatLng, LatLngBounds, Result};

use crate::point::PhotoPoint;

/// The SDK's point-clustering manager.
pub trait ClusterManager {
    /// Register one point. It shows up after the next [`cluster`](Self::cluster).
    fn add_item(&mut self, item: Arc<PhotoPoint>);

    /// Register many points at once.
    fn add_items(&mut self, items: Vec<Arc<PhotoPoint>>) {
        for item in items {
            self.add_item(item);
        }
    }

    /// Recompute clusters over everything registered so far.
    fn cluster(&mut self);
}

/// The SDK's map camera.
pub trait MapCamera {
    /// Jump to `center` at `zoom`.
    fn move_camera(&mut self, center: LatLng, zoom: f32);

    /// Animate so that `bounds` fits the viewport with `padding` pixels spare.
    ///
    /// May fail when the map has not been laid out yet.
    fn animate_to_bounds(&mut self, bounds: LatLngBounds, padding: u32) -> Result<()>;
}
