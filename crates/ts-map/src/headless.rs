//! A map with no screen.
//!
//! Keeps whatever the binding registers and the last camera request, and
//! logs each call. The CLI drives the binding through these.

use std::sync::Arc;

use ts_core::{LatLng, LatLngBounds, Result};

use crate::component::{ClusterManager, MapCamera};
use crate::point::PhotoPoint;

#[derive(Debug, Default)]
pub struct HeadlessClusters {
    items: Vec<Arc<PhotoPoint>>,
    recomputes: usize,
}

impl HeadlessClusters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Arc<PhotoPoint>] {
        &self.items
    }

    /// How many times a recompute was requested.
    pub fn recomputes(&self) -> usize {
        self.recomputes
    }
}

impl ClusterManager for HeadlessClusters {
    fn add_item(&mut self, item: Arc<PhotoPoint>) {
        tracing::trace!(label = %item.label, "Registered point");
        self.items.push(item);
    }

    fn cluster(&mut self) {
        self.recomputes += 1;
        tracing::debug!(points = self.items.len(), "Recompute clusters");
    }
}

/// The last thing a [`HeadlessCamera`] was asked to do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraRequest {
    Center { center: LatLng, zoom: f32 },
    Fit { bounds: LatLngBounds, padding: u32 },
}

#[derive(Debug, Default)]
pub struct HeadlessCamera {
    last: Option<CameraRequest>,
}

impl HeadlessCamera {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_request(&self) -> Option<CameraRequest> {
        self.last
    }
}

impl MapCamera for HeadlessCamera {
    fn move_camera(&mut self, center: LatLng, zoom: f32) {
        tracing::debug!(
            latitude = center.latitude,
            longitude = center.longitude,
            zoom,
            "Move camera"
        );
        self.last = Some(CameraRequest::Center { center, zoom });
    }

    fn animate_to_bounds(&mut self, bounds: LatLngBounds, padding: u32) -> Result<()> {
        tracing::debug!(?bounds, padding, "Fit camera to bounds");
        self.last = Some(CameraRequest::Fit { bounds, padding });
        Ok(())
    }
}
