//! Working-set entries handed to the cluster component.

use ts_core::{LatLng, PhotoId, Result};
use ts_media::{thumbnail, DynamicImage};

/// A place picked by the user: what the autocomplete widget hands back.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceSelection {
    pub name: String,
    pub position: LatLng,
}

impl PlaceSelection {
    pub fn new(name: impl Into<String>, position: LatLng) -> Self {
        Self {
            name: name.into(),
            position,
        }
    }
}

/// A decoded, labelled photo on the map.
#[derive(Debug, Clone)]
pub struct PhotoPoint {
    pub id: Option<PhotoId>,
    pub position: LatLng,
    pub label: String,
    pub image: DynamicImage,
    /// Marker-sized copy of `image`, computed once.
    pub thumbnail: DynamicImage,
}

impl PhotoPoint {
    /// Build a point, scaling its thumbnail to fit `thumbnail_dimension`.
    pub fn new(
        id: Option<PhotoId>,
        position: LatLng,
        label: impl Into<String>,
        image: DynamicImage,
        thumbnail_dimension: u32,
    ) -> Result<Self> {
        let thumbnail = thumbnail(&image, thumbnail_dimension)?;
        Ok(Self {
            id,
            position,
            label: label.into(),
            image,
            thumbnail,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, RgbImage};

    #[test]
    fn new_scales_thumbnail() {
        let image = DynamicImage::ImageRgb8(RgbImage::new(128, 256));
        let point = PhotoPoint::new(None, LatLng::new(1.0, 2.0), "Jeju", image, 32).unwrap();
        assert_eq!(point.image.dimensions(), (128, 256));
        assert_eq!(point.thumbnail.dimensions(), (16, 32));
        assert_eq!(point.label, "Jeju");
    }

    #[test]
    fn new_rejects_zero_dimension() {
        let image = DynamicImage::ImageRgb8(RgbImage::new(2, 2));
        assert!(PhotoPoint::new(None, LatLng::new(0.0, 0.0), "x", image, 0).is_err());
    }
}
