//! Geographic coordinates and bounding regions.
//!
//! [`LatLngBounds`] may cross the antimeridian: in that case
//! `southwest.longitude > northeast.longitude`.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A position in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

impl LatLng {
    /// Create a position. Latitude is clamped to [-90, 90] and longitude
    /// wrapped into [-180, 180).
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: latitude.clamp(-90.0, 90.0),
            longitude: wrap_longitude(longitude),
        }
    }

    /// Whether both coordinates are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

fn wrap_longitude(lng: f64) -> f64 {
    if (-180.0..180.0).contains(&lng) {
        lng
    } else {
        ((lng - 180.0) % 360.0 + 360.0) % 360.0 - 180.0
    }
}

/// Degrees travelled westward from `from` to reach `to`.
fn degrees_west(from: f64, to: f64) -> f64 {
    (from - to + 360.0) % 360.0
}

/// Degrees travelled eastward from `from` to reach `to`.
fn degrees_east(from: f64, to: f64) -> f64 {
    (to - from + 360.0) % 360.0
}

/// Axis-aligned region spanned by a set of positions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLngBounds {
    pub southwest: LatLng,
    pub northeast: LatLng,
}

impl LatLngBounds {
    /// Start an incremental builder.
    pub fn builder() -> LatLngBoundsBuilder {
        LatLngBoundsBuilder::default()
    }

    /// Bounds covering every position in `points`.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a LatLng>) -> Result<Self> {
        let mut builder = Self::builder();
        for p in points {
            builder.include(*p);
        }
        builder.build()
    }

    /// Whether the region wraps across the 180th meridian.
    pub fn crosses_antimeridian(&self) -> bool {
        self.southwest.longitude > self.northeast.longitude
    }

    fn contains_longitude(&self, lng: f64) -> bool {
        let (west, east) = (self.southwest.longitude, self.northeast.longitude);
        if west <= east {
            west <= lng && lng <= east
        } else {
            west <= lng || lng <= east
        }
    }

    /// Whether `point` lies inside the region, edges included.
    pub fn contains(&self, point: LatLng) -> bool {
        self.southwest.latitude <= point.latitude
            && point.latitude <= self.northeast.latitude
            && self.contains_longitude(point.longitude)
    }

    /// Midpoint of the region, taken across the antimeridian when it wraps.
    pub fn center(&self) -> LatLng {
        let lat = (self.southwest.latitude + self.northeast.latitude) / 2.0;
        let west = self.southwest.longitude;
        let mut east = self.northeast.longitude;
        if west > east {
            east += 360.0;
        }
        LatLng::new(lat, (west + east) / 2.0)
    }
}

/// Collects positions and widens the region to include each one.
///
/// Longitude grows in whichever direction adds fewer degrees.
#[derive(Debug, Clone, Default)]
pub struct LatLngBoundsBuilder {
    south: f64,
    north: f64,
    west: Option<f64>,
    east: f64,
}

impl LatLngBoundsBuilder {
    /// Widen the region to cover `point`.
    pub fn include(&mut self, point: LatLng) -> &mut Self {
        let LatLng {
            latitude: lat,
            longitude: lng,
        } = point;

        match self.west {
            None => {
                self.south = lat;
                self.north = lat;
                self.west = Some(lng);
                self.east = lng;
            }
            Some(west) => {
                self.south = self.south.min(lat);
                self.north = self.north.max(lat);

                let contained = if west <= self.east {
                    west <= lng && lng <= self.east
                } else {
                    west <= lng || lng <= self.east
                };
                if !contained {
                    if degrees_west(west, lng) < degrees_east(self.east, lng) {
                        self.west = Some(lng);
                    } else {
                        self.east = lng;
                    }
                }
            }
        }
        self
    }

    /// Finish the region. Fails when no point was included.
    pub fn build(&self) -> Result<LatLngBounds> {
        let west = self
            .west
            .ok_or_else(|| Error::InvalidInput("cannot build bounds from zero points".into()))?;
        Ok(LatLngBounds {
            southwest: LatLng {
                latitude: self.south,
                longitude: west,
            },
            northeast: LatLng {
                latitude: self.north,
                longitude: self.east,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_wraps_longitude() {
        assert_eq!(LatLng::new(10.0, 190.0).longitude, -170.0);
        assert_eq!(LatLng::new(10.0, -190.0).longitude, 170.0);
        assert_eq!(LatLng::new(10.0, 180.0).longitude, -180.0);
        assert_eq!(LatLng::new(95.0, 0.0).latitude, 90.0);
    }

    #[test]
    fn single_point_bounds() {
        let p = LatLng::new(37.5, 127.0);
        let b = LatLngBounds::from_points([&p]).unwrap();
        assert_eq!(b.southwest, p);
        assert_eq!(b.northeast, p);
        assert_eq!(b.center(), p);
    }

    #[test]
    fn bounds_span_all_points() {
        let pts = [
            LatLng::new(37.0, 126.0),
            LatLng::new(38.0, 127.5),
            LatLng::new(36.5, 126.8),
        ];
        let b = LatLngBounds::from_points(pts.iter()).unwrap();
        assert_eq!(b.southwest, LatLng::new(36.5, 126.0));
        assert_eq!(b.northeast, LatLng::new(38.0, 127.5));
        assert!(!b.crosses_antimeridian());
        for p in &pts {
            assert!(b.contains(*p));
        }
        assert!(!b.contains(LatLng::new(39.0, 127.0)));
    }

    #[test]
    fn bounds_take_short_way_across_antimeridian() {
        let pts = [LatLng::new(-17.0, 178.0), LatLng::new(-18.0, -179.0)];
        let b = LatLngBounds::from_points(pts.iter()).unwrap();
        assert!(b.crosses_antimeridian());
        assert_eq!(b.southwest.longitude, 178.0);
        assert_eq!(b.northeast.longitude, -179.0);
        assert!(b.contains(LatLng::new(-17.5, 179.5)));
        assert!(!b.contains(LatLng::new(-17.5, 0.0)));
        assert_eq!(b.center().longitude, 179.5);
    }

    #[test]
    fn empty_builder_is_error() {
        let err = LatLngBounds::builder().build().unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }
}
