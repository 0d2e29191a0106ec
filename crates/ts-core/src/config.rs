//! Application configuration types.
//!
//! The top-level [`Config`] struct is deserialized from JSON. Every section
//! defaults sensibly so a completely empty `{}` file is valid.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::Error;

// ---------------------------------------------------------------------------
// Top-level Config
// ---------------------------------------------------------------------------

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub database: DatabaseConfig,
    pub map: MapConfig,
    pub images: ImageConfig,
}

impl Config {
    /// Deserialize a `Config` from a JSON string.
    pub fn from_json(json_str: &str) -> Result<Self> {
        serde_json::from_str(json_str)
            .map_err(|e| Error::Validation(format!("config parse error: {e}")))
    }

    /// Load configuration from a file path, falling back to defaults if the
    /// path is `None` or the file does not exist.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(contents) => Self::from_json(&contents).unwrap_or_else(|e| {
                tracing::warn!("Failed to parse config file {}: {e}", path.display());
                Self::default()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("No config file at {}; using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                tracing::warn!("Failed to read config file {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Load configuration from a file that must exist and parse.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Return a list of validation warnings (non-fatal issues).
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if self.database.path.as_os_str().is_empty() {
            warnings.push("database.path is empty".into());
        }
        if self.database.max_connections == 0 {
            warnings.push("database.max_connections is 0; no connection can be opened".into());
        }

        if self.map.min_cluster_size < 2 {
            warnings.push(format!(
                "map.min_cluster_size is {}; single photos will render as clusters",
                self.map.min_cluster_size
            ));
        }
        if self.map.max_cluster_thumbnails == 0 {
            warnings.push("map.max_cluster_thumbnails is 0; cluster markers will be empty".into());
        }
        if !(MIN_ZOOM..=MAX_ZOOM).contains(&self.map.zoom_in_level) {
            warnings.push(format!(
                "map.zoom_in_level {} is outside {MIN_ZOOM}..={MAX_ZOOM}",
                self.map.zoom_in_level
            ));
        }

        if self.images.thumbnail_dimension == 0 {
            warnings.push("images.thumbnail_dimension is 0".into());
        }

        warnings
    }
}

const MIN_ZOOM: f32 = 2.0;
const MAX_ZOOM: f32 = 21.0;

// ---------------------------------------------------------------------------
// Sub-configs
// ---------------------------------------------------------------------------

/// Local database settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub path: PathBuf,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("travelstory.db"),
            max_connections: 4,
        }
    }
}

/// Marker, cluster and camera behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Zoom level used when centering on a newly placed photo.
    pub zoom_in_level: f32,
    /// Padding in pixels around a cluster's bounds when zooming into it.
    pub bounds_padding: u32,
    /// Smallest group that renders as an aggregate marker.
    pub min_cluster_size: usize,
    /// Thumbnails drawn on an aggregate marker.
    pub max_cluster_thumbnails: usize,
    /// Title for photos loaded from the database.
    pub default_label: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            zoom_in_level: 9.5,
            bounds_padding: 100,
            min_cluster_size: 2,
            max_cluster_thumbnails: 4,
            default_label: "Walter".into(),
        }
    }
}

/// Image handling settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    /// Edge length in pixels of the square marker thumbnail frame.
    pub thumbnail_dimension: u32,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            thumbnail_dimension: 64,
        }
    }
}
