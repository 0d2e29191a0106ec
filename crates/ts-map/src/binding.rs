//! The view-model between the photo store and the map.
//!
//! [`MapBinding`] owns the store, the cluster manager and the camera, plus
//! the in-memory working set of [`PhotoPoint`]s. Everything runs on the
//! caller's thread.

use std::sync::Arc;

use ts_core::config::{Config, MapConfig};
use ts_core::{LatLngBounds, PhotoId, Result};
use ts_db::ImageStore;
use ts_media::{decode, encode_png, DynamicImage};

use crate::component::{ClusterManager, MapCamera};
use crate::point::{PhotoPoint, PlaceSelection};
use crate::render::MarkerRenderer;

/// What happened to a selected photo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// Stored and put on the map under this id.
    Placed(PhotoId),
    /// The store rejected the write; the photo was logged and discarded.
    Dropped,
}

pub struct MapBinding<S, C, M> {
    store: S,
    clusters: C,
    camera: M,
    renderer: MarkerRenderer,
    map: MapConfig,
    points: Vec<Arc<PhotoPoint>>,
    selected: Option<Arc<PhotoPoint>>,
}

impl<S, C, M> MapBinding<S, C, M>
where
    S: ImageStore,
    C: ClusterManager,
    M: MapCamera,
{
    pub fn new(store: S, clusters: C, camera: M, config: &Config) -> Self {
        Self {
            store,
            clusters,
            camera,
            renderer: MarkerRenderer::new(&config.map, &config.images),
            map: config.map.clone(),
            points: Vec::new(),
            selected: None,
        }
    }

    /// Startup: put every stored photo on the map and recompute once.
    ///
    /// Every record is decoded before any is registered, so a malformed blob
    /// aborts the load with nothing on the map. Call once per binding.
    pub fn load_from_store(&mut self) -> Result<usize> {
        let records = self.store.read_all()?;

        let mut loaded = Vec::with_capacity(records.len());
        for record in records {
            let image = decode(&record.image_bytes)?;
            let point = PhotoPoint::new(
                record.id.clone(),
                record.position(),
                self.map.default_label.clone(),
                image,
                self.renderer.thumbnail_dimension,
            )?;
            loaded.push(Arc::new(point));
        }

        let count = loaded.len();
        tracing::info!(count, "Loaded photos from store");

        self.points.extend(loaded.iter().cloned());
        self.clusters.add_items(loaded);
        self.clusters.cluster();
        Ok(count)
    }

    /// A photo was picked for `place`: store it, show it, center on it.
    ///
    /// Encoding failures propagate. Storage failures are logged and the photo
    /// is dropped.
    pub fn on_photo_selected(
        &mut self,
        place: PlaceSelection,
        image: DynamicImage,
    ) -> Result<SelectionOutcome> {
        let bytes = encode_png(&image)?;
        let id = PhotoId::generate();
        let position = place.position;
        let point = PhotoPoint::new(
            Some(id.clone()),
            position,
            place.name,
            image,
            self.renderer.thumbnail_dimension,
        )?;

        if let Err(e) = self
            .store
            .insert(Some(&id), position.latitude, position.longitude, &bytes)
        {
            tracing::error!(error = %e, place = %point.label, "Failed to store photo; dropping it");
            return Ok(SelectionOutcome::Dropped);
        }

        let point = Arc::new(point);
        self.points.push(point.clone());
        self.clusters.add_item(point);
        self.clusters.cluster();
        self.camera.move_camera(position, self.map.zoom_in_level);

        tracing::info!(%id, "Placed photo");
        Ok(SelectionOutcome::Placed(id))
    }

    /// The picker was dismissed without a photo.
    pub fn on_selection_cancelled(&self) {
        tracing::info!("Photo selection cancelled");
    }

    /// Zoom to fit a cluster's members. Returns whether the click was consumed.
    pub fn on_cluster_click(&mut self, members: &[Arc<PhotoPoint>]) -> bool {
        let bounds = match LatLngBounds::from_points(members.iter().map(|p| &p.position)) {
            Ok(bounds) => bounds,
            Err(_) => return false,
        };

        if let Err(e) = self.camera.animate_to_bounds(bounds, self.map.bounds_padding) {
            tracing::warn!(error = %e, "Could not zoom to cluster");
        }
        true
    }

    /// Mark a single photo as selected. The click is not consumed, so the
    /// map still shows the marker's title.
    pub fn on_item_click(&mut self, point: &Arc<PhotoPoint>) -> bool {
        tracing::info!(label = %point.label, "Photo marker clicked");
        self.selected = Some(point.clone());
        false
    }

    pub fn selected(&self) -> Option<&Arc<PhotoPoint>> {
        self.selected.as_ref()
    }

    /// The in-memory working set, in registration order.
    pub fn points(&self) -> &[Arc<PhotoPoint>] {
        &self.points
    }

    pub fn renderer(&self) -> &MarkerRenderer {
        &self.renderer
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn clusters(&self) -> &C {
        &self.clusters
    }

    pub fn camera(&self) -> &M {
        &self.camera
    }
}
