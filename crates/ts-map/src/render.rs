//! Marker policy the cluster component calls back into.

use std::sync::Arc;

use ts_core::config::{ImageConfig, MapConfig};
use ts_media::DynamicImage;

use crate::point::PhotoPoint;

/// Icon content for a lone photo.
#[derive(Debug, Clone)]
pub struct ItemMarker {
    pub thumbnail: DynamicImage,
    pub title: String,
}

/// Icon content for an aggregate marker.
#[derive(Debug, Clone)]
pub struct ClusterMarker {
    /// At most `max_cluster_thumbnails`, in member order.
    pub thumbnails: Vec<DynamicImage>,
    /// Number of photos in the cluster, drawn as the badge.
    pub count: usize,
}

impl ClusterMarker {
    pub fn badge(&self) -> String {
        self.count.to_string()
    }
}

/// Decides how points and clusters are drawn.
#[derive(Debug, Clone)]
pub struct MarkerRenderer {
    pub thumbnail_dimension: u32,
    pub min_cluster_size: usize,
    pub max_cluster_thumbnails: usize,
}

impl MarkerRenderer {
    pub fn new(map: &MapConfig, images: &ImageConfig) -> Self {
        Self {
            thumbnail_dimension: images.thumbnail_dimension,
            min_cluster_size: map.min_cluster_size,
            max_cluster_thumbnails: map.max_cluster_thumbnails,
        }
    }

    /// Groups smaller than `min_cluster_size` are drawn as individual markers.
    pub fn should_render_as_cluster(&self, size: usize) -> bool {
        size >= self.min_cluster_size
    }

    pub fn render_item(&self, point: &PhotoPoint) -> ItemMarker {
        ItemMarker {
            thumbnail: point.thumbnail.clone(),
            title: point.label.clone(),
        }
    }

    pub fn render_cluster(&self, members: &[Arc<PhotoPoint>]) -> ClusterMarker {
        let thumbnails = members
            .iter()
            .take(self.max_cluster_thumbnails)
            .map(|p| p.thumbnail.clone())
            .collect();
        ClusterMarker {
            thumbnails,
            count: members.len(),
        }
    }
}

impl Default for MarkerRenderer {
    fn default() -> Self {
        Self::new(&MapConfig::default(), &ImageConfig::default())
    }
}
