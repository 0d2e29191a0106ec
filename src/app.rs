//! Command implementations on top of the store and map binding.
//!
//! The command line stands in for the picker and the place widget: a file
//! path is the picked image and `--lat/--lng/--place` is the chosen place.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use ts_core::config::Config;
use ts_core::{LatLng, PhotoId};
use ts_db::pool::{init_pool_with_options, PoolOptions};
use ts_db::{ImageStore, SqliteImageStore};
use ts_map::{HeadlessCamera, HeadlessClusters, MapBinding, PlaceSelection, SelectionOutcome};

/// One row as shown by `list`.
#[derive(Debug, Clone, Serialize)]
pub struct PhotoSummary {
    pub id: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub bytes: usize,
    /// `None` when the stored blob does not decode.
    pub width: Option<u32>,
    pub height: Option<u32>,
}

pub struct Travelstory {
    config: Config,
    store: SqliteImageStore,
}

impl Travelstory {
    /// Open (or create) the database named by `config.database`.
    pub fn open(config: Config) -> Result<Self> {
        let db_path = config.database.path.to_string_lossy().into_owned();
        tracing::debug!("Opening photo database at {}", db_path);

        let pool = init_pool_with_options(
            &db_path,
            PoolOptions {
                max_connections: config.database.max_connections,
                ..PoolOptions::default()
            },
        )
        .with_context(|| format!("Failed to open database {db_path}"))?;

        Ok(Self {
            config,
            store: SqliteImageStore::new(pool),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &SqliteImageStore {
        &self.store
    }

    /// Load the map, then place the image at `file` at `position`.
    pub fn add_photo(
        &self,
        file: &Path,
        position: LatLng,
        place: Option<String>,
    ) -> Result<SelectionOutcome> {
        anyhow::ensure!(
            position.is_finite(),
            "coordinates must be finite numbers, got ({}, {})",
            position.latitude,
            position.longitude
        );
        anyhow::ensure!(
            (-90.0..=90.0).contains(&position.latitude),
            "latitude {} is outside -90..=90",
            position.latitude
        );
        let position = LatLng::new(position.latitude, position.longitude);

        let mut binding = MapBinding::new(
            self.store.clone(),
            HeadlessClusters::new(),
            HeadlessCamera::new(),
            &self.config,
        );
        binding
            .load_from_store()
            .context("Failed to load stored photos")?;

        let data = std::fs::read(file)
            .with_context(|| format!("Failed to read image file: {}", file.display()))?;
        let image = ts_media::decode(&data)
            .with_context(|| format!("Failed to decode image file: {}", file.display()))?;

        let name = place.unwrap_or_else(|| self.config.map.default_label.clone());
        let outcome = binding.on_photo_selected(PlaceSelection::new(name, position), image)?;
        Ok(outcome)
    }

    pub fn list(&self) -> Result<Vec<PhotoSummary>> {
        let records = self.store.read_all()?;
        Ok(records
            .into_iter()
            .map(|r| {
                let dims = ts_media::decode(&r.image_bytes)
                    .map(|img| (img.width(), img.height()))
                    .ok();
                PhotoSummary {
                    id: r.id.map(String::from),
                    latitude: r.latitude,
                    longitude: r.longitude,
                    bytes: r.image_bytes.len(),
                    width: dims.map(|d| d.0),
                    height: dims.map(|d| d.1),
                }
            })
            .collect())
    }

    pub fn delete(&self, id: &PhotoId) -> Result<usize> {
        Ok(self.store.delete_by_id(id)?)
    }

    pub fn clear(&self) -> Result<usize> {
        Ok(self.store.clear_all()?)
    }

    /// Write each stored photo to `out_dir` as `NNNN_<id>.png`.
    ///
    /// Every blob is decoded first; a malformed one aborts the export.
    pub fn export(&self, out_dir: &Path) -> Result<Vec<PathBuf>> {
        std::fs::create_dir_all(out_dir)
            .with_context(|| format!("Failed to create directory: {}", out_dir.display()))?;

        let mut written = Vec::new();
        for (i, record) in self.store.read_all()?.into_iter().enumerate() {
            let image = ts_media::decode(&record.image_bytes)
                .with_context(|| format!("Stored photo #{i} is not a valid image"))?;
            let png = ts_media::encode_png(&image)?;

            let stem = record
                .id
                .as_ref()
                .map(|id| file_safe(id.as_str()))
                .unwrap_or_else(|| "photo".to_string());
            let path = out_dir.join(format!("{i:04}_{stem}.png"));
            std::fs::write(&path, png)
                .with_context(|| format!("Failed to write image file: {}", path.display()))?;
            written.push(path);
        }

        tracing::info!(count = written.len(), "Exported photos to {}", out_dir.display());
        Ok(written)
    }
}

fn file_safe(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, Rgb, RgbImage};

    fn app_in(dir: &Path) -> Travelstory {
        let mut config = Config::default();
        config.database.path = dir.join("photos.db");
        Travelstory::open(config).unwrap()
    }

    fn write_jpeg(path: &Path) {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(30, 20, Rgb([1, 2, 3])))
            .save_with_format(path, image::ImageFormat::Jpeg)
            .unwrap();
    }

    #[test]
    fn add_list_delete() {
        let dir = tempfile::tempdir().unwrap();
        let app = app_in(dir.path());
        let file = dir.path().join("pick.jpg");
        write_jpeg(&file);

        let outcome = app
            .add_photo(&file, LatLng::new(37.5, 127.0), Some("Seoul".into()))
            .unwrap();
        let SelectionOutcome::Placed(id) = outcome else {
            panic!("expected photo to be placed");
        };

        let listed = app.list().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id.as_deref(), Some(id.as_str()));
        assert_eq!((listed[0].width, listed[0].height), (Some(30), Some(20)));

        assert_eq!(app.delete(&id).unwrap(), 1);
        assert!(app.list().unwrap().is_empty());
    }

    #[test]
    fn add_rejects_out_of_range_latitude() {
        let dir = tempfile::tempdir().unwrap();
        let app = app_in(dir.path());
        let file = dir.path().join("pick.jpg");
        write_jpeg(&file);

        let bad = LatLng {
            latitude: 91.0,
            longitude: 0.0,
        };
        assert!(app.add_photo(&file, bad, None).is_err());
        assert!(app.list().unwrap().is_empty());
    }

    #[test]
    fn add_rejects_non_finite_longitude() {
        let dir = tempfile::tempdir().unwrap();
        let app = app_in(dir.path());
        let file = dir.path().join("pick.jpg");
        write_jpeg(&file);

        for longitude in [f64::INFINITY, f64::NAN] {
            let bad = LatLng {
                latitude: 0.0,
                longitude,
            };
            assert!(app.add_photo(&file, bad, None).is_err());
        }

        assert!(app.list().unwrap().is_empty());
        let outcome = app.add_photo(&file, LatLng::new(1.0, 1.0), None).unwrap();
        assert!(matches!(outcome, SelectionOutcome::Placed(_)));
        assert_eq!(app.list().unwrap().len(), 1);
    }

    #[test]
    fn add_rejects_non_image_file() {
        let dir = tempfile::tempdir().unwrap();
        let app = app_in(dir.path());
        let file = dir.path().join("notes.txt");
        std::fs::write(&file, "hello").unwrap();

        assert!(app.add_photo(&file, LatLng::new(0.0, 0.0), None).is_err());
        assert!(app.list().unwrap().is_empty());
    }

    #[test]
    fn export_writes_png_per_photo() {
        let dir = tempfile::tempdir().unwrap();
        let app = app_in(dir.path());
        let file = dir.path().join("pick.jpg");
        write_jpeg(&file);
        app.add_photo(&file, LatLng::new(1.0, 1.0), None).unwrap();
        app.add_photo(&file, LatLng::new(2.0, 2.0), None).unwrap();

        let out = dir.path().join("out");
        let written = app.export(&out).unwrap();
        assert_eq!(written.len(), 2);
        for path in &written {
            let bytes = std::fs::read(path).unwrap();
            assert!(bytes.starts_with(b"\x89PNG"));
        }
    }

    #[test]
    fn clear_reports_removed_rows() {
        let dir = tempfile::tempdir().unwrap();
        let app = app_in(dir.path());
        let file = dir.path().join("pick.jpg");
        write_jpeg(&file);
        app.add_photo(&file, LatLng::new(1.0, 1.0), None).unwrap();

        assert_eq!(app.clear().unwrap(), 1);
        assert_eq!(app.clear().unwrap(), 0);
    }

    #[test]
    fn file_safe_replaces_separators() {
        assert_eq!(file_safe("a/b c"), "a_b_c");
        assert_eq!(file_safe("ok-id_1"), "ok-id_1");
    }
}
