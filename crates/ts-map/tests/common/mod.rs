//! Shared fakes for map binding tests.
//!
//! [`FakeClusterer`] stands in for the SDK's clustering: a greedy merge of
//! every point within `radius_m` metres of a group's first member.

#![allow(dead_code)]

use std::sync::Arc;

use geo::{Distance, Haversine, Point};
use image::{Rgb, RgbImage};
use ts_core::{Error, LatLng, LatLngBounds, PhotoId, Result};
use ts_db::{ImageStore, PhotoRecord};
use ts_map::{ClusterManager, MapCamera, PhotoPoint};
use ts_media::DynamicImage;

pub const SEOUL_CITY_HALL: (f64, f64) = (37.5663, 126.9779);
pub const GWANGHWAMUN: (f64, f64) = (37.5759, 126.9769);
pub const BUSAN: (f64, f64) = (35.1796, 129.0756);

pub fn solid(width: u32, height: u32, shade: u8) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_pixel(
        width,
        height,
        Rgb([shade, shade / 2, 255 - shade]),
    ))
}

pub fn latlng((lat, lng): (f64, f64)) -> LatLng {
    LatLng::new(lat, lng)
}

fn metres_between(a: LatLng, b: LatLng) -> f64 {
    Haversine::distance(
        Point::new(a.longitude, a.latitude),
        Point::new(b.longitude, b.latitude),
    )
}

pub struct FakeClusterer {
    radius_m: f64,
    items: Vec<Arc<PhotoPoint>>,
    groups: Vec<Vec<Arc<PhotoPoint>>>,
    recomputes: usize,
}

impl FakeClusterer {
    pub fn new(radius_m: f64) -> Self {
        Self {
            radius_m,
            items: Vec::new(),
            groups: Vec::new(),
            recomputes: 0,
        }
    }

    pub fn items(&self) -> &[Arc<PhotoPoint>] {
        &self.items
    }

    /// Groups from the last recompute.
    pub fn groups(&self) -> &[Vec<Arc<PhotoPoint>>] {
        &self.groups
    }

    pub fn recomputes(&self) -> usize {
        self.recomputes
    }
}

impl ClusterManager for FakeClusterer {
    fn add_item(&mut self, item: Arc<PhotoPoint>) {
        self.items.push(item);
    }

    fn cluster(&mut self) {
        self.recomputes += 1;
        let mut groups: Vec<Vec<Arc<PhotoPoint>>> = Vec::new();
        for item in &self.items {
            let home = groups
                .iter_mut()
                .find(|g| metres_between(g[0].position, item.position) <= self.radius_m);
            match home {
                Some(group) => group.push(item.clone()),
                None => groups.push(vec![item.clone()]),
            }
        }
        self.groups = groups;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CameraCall {
    Move(LatLng, f32),
    Fit(LatLngBounds, u32),
}

#[derive(Default)]
pub struct RecordingCamera {
    pub calls: Vec<CameraCall>,
    pub fail_animations: bool,
}

impl MapCamera for RecordingCamera {
    fn move_camera(&mut self, center: LatLng, zoom: f32) {
        self.calls.push(CameraCall::Move(center, zoom));
    }

    fn animate_to_bounds(&mut self, bounds: LatLngBounds, padding: u32) -> Result<()> {
        self.calls.push(CameraCall::Fit(bounds, padding));
        if self.fail_animations {
            return Err(Error::Internal("map not laid out".into()));
        }
        Ok(())
    }
}

/// A store whose engine rejects every write.
pub struct FullDiskStore;

impl ImageStore for FullDiskStore {
    fn insert(&self, _: Option<&PhotoId>, _: f64, _: f64, _: &[u8]) -> Result<()> {
        Err(Error::database("database or disk is full"))
    }

    fn read_all(&self) -> Result<Vec<PhotoRecord>> {
        Ok(Vec::new())
    }

    fn delete_by_id(&self, _: &PhotoId) -> Result<usize> {
        Ok(0)
    }

    fn clear_all(&self) -> Result<usize> {
        Ok(0)
    }
}
