use crate::error::GeohashError;
use crate::index::constants::{COORD_DECIMALS, LAT_RANGE, LNG_RANGE};
use geo_types::Point;
use serde::{Deserialize, Serialize};

/// Trait for types that can provide longitude/latitude values.
///
/// Implemented for `(f64, f64)` tuples, `geo_types::Point<f64>` and [`LngLat`].
/// Tuples are read as `(longitude, latitude)`, points as `x = longitude`, `y = latitude`.
pub trait Coordinate {
    /// Returns the x-coordinate (longitude).
    fn x(&self) -> f64;
    /// Returns the y-coordinate (latitude).
    fn y(&self) -> f64;
}

impl Coordinate for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }
    fn y(&self) -> f64 {
        self.1
    }
}

impl Coordinate for Point<f64> {
    fn x(&self) -> f64 {
        Point::x(*self)
    }
    fn y(&self) -> f64 {
        Point::y(*self)
    }
}

impl Coordinate for LngLat {
    fn x(&self) -> f64 {
        self.longitude
    }
    fn y(&self) -> f64 {
        self.latitude
    }
}

/// A validated WGS84 position, longitude first.
///
/// Out-of-range and non-finite values are rejected at construction, never clamped.
///
/// # Example
/// ```
/// use geohash_rs::LngLat;
///
/// # fn main() -> Result<(), geohash_rs::GeohashError> {
/// let chengdu = LngLat::new(104.061029, 30.543534)?;
/// assert_eq!(chengdu.longitude(), 104.061029);
/// assert!(LngLat::new(181.0, 0.0).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawLngLat")]
pub struct LngLat {
    longitude: f64,
    latitude: f64,
}

#[derive(Deserialize)]
struct RawLngLat {
    longitude: f64,
    latitude: f64,
}

impl TryFrom<RawLngLat> for LngLat {
    type Error = GeohashError;

    fn try_from(raw: RawLngLat) -> Result<Self, Self::Error> {
        LngLat::new(raw.longitude, raw.latitude)
    }
}

impl LngLat {
    pub fn new(longitude: f64, latitude: f64) -> Result<Self, GeohashError> {
        validate_longitude(longitude)?;
        validate_latitude(latitude)?;
        Ok(Self {
            longitude,
            latitude,
        })
    }

    /// Validates any [`Coordinate`] into an `LngLat`.
    pub fn from_coord(coord: &impl Coordinate) -> Result<Self, GeohashError> {
        Self::new(coord.x(), coord.y())
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }
}

impl TryFrom<Point<f64>> for LngLat {
    type Error = GeohashError;

    fn try_from(point: Point<f64>) -> Result<Self, Self::Error> {
        Self::from_coord(&point)
    }
}

impl From<LngLat> for Point<f64> {
    fn from(value: LngLat) -> Self {
        Point::new(value.longitude, value.latitude)
    }
}

/// Checks that `longitude` is finite and within [-180, 180].
pub fn validate_longitude(longitude: f64) -> Result<(), GeohashError> {
    if (LNG_RANGE.0..=LNG_RANGE.1).contains(&longitude) {
        Ok(())
    } else {
        log::debug!("Rejecting longitude {}", longitude);
        Err(GeohashError::InvalidLongitude(longitude))
    }
}

/// Checks that `latitude` is finite and within [-90, 90].
pub fn validate_latitude(latitude: f64) -> Result<(), GeohashError> {
    if (LAT_RANGE.0..=LAT_RANGE.1).contains(&latitude) {
        Ok(())
    } else {
        log::debug!("Rejecting latitude {}", latitude);
        Err(GeohashError::InvalidLatitude(latitude))
    }
}

/// Rounds to the fixed number of output decimals.
pub(crate) fn round_coord(value: f64) -> f64 {
    let scale = 10f64.powi(COORD_DECIMALS);
    (value * scale).round() / scale
}
