use crate::coord::validate_latitude;
use crate::error::GeohashError;
use serde::{Deserialize, Serialize};

/// Equatorial radius in meters.
pub const EA: f64 = 6_378_137.0;

/// Polar radius in meters.
pub const EB: f64 = 6_356_725.0;

/// Earth radii used by the distance and bounding-box calculations.
///
/// Missing fields fall back to the defaults when deserialized.
///
/// # Example
/// ```
/// use geohash_rs::Ellipsoid;
///
/// # fn main() -> Result<(), geohash_rs::GeohashError> {
/// let earth = Ellipsoid::default();
/// assert_eq!(earth.corrected_radius(90.0)?, 6_356_725.0);
///
/// let custom = Ellipsoid::from_json(r#"{"polar_radius": 6356752.3}"#)?;
/// assert_eq!(custom.equatorial_radius, 6_378_137.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ellipsoid {
    pub equatorial_radius: f64,
    pub polar_radius: f64,
}

impl Default for Ellipsoid {
    fn default() -> Self {
        Self {
            equatorial_radius: EA,
            polar_radius: EB,
        }
    }
}

impl Ellipsoid {
    pub fn new(equatorial_radius: f64, polar_radius: f64) -> Result<Self, GeohashError> {
        let ellipsoid = Self {
            equatorial_radius,
            polar_radius,
        };
        ellipsoid.validate()?;
        Ok(ellipsoid)
    }

    /// Reads an ellipsoid from JSON, validating the radii.
    pub fn from_json(s: &str) -> Result<Self, GeohashError> {
        let ellipsoid: Self =
            serde_json::from_str(s).map_err(|e| GeohashError::InvalidConfig(e.to_string()))?;
        ellipsoid.validate()?;
        Ok(ellipsoid)
    }

    pub fn with_equatorial_radius(mut self, radius: f64) -> Self {
        self.equatorial_radius = radius;
        self
    }

    pub fn with_polar_radius(mut self, radius: f64) -> Self {
        self.polar_radius = radius;
        self
    }

    /// Both radii must be finite and positive.
    pub fn validate(&self) -> Result<(), GeohashError> {
        for (name, radius) in [
            ("equatorial_radius", self.equatorial_radius),
            ("polar_radius", self.polar_radius),
        ] {
            if !radius.is_finite() || radius <= 0.0 {
                return Err(GeohashError::InvalidConfig(format!(
                    "{} must be positive, got {}",
                    name, radius
                )));
            }
        }
        Ok(())
    }

    /// Local radius at `latitude`, interpolated linearly from the polar radius.
    ///
    /// `EB + (EB - EA) * (90 - latitude) / 90`. This is linear in the signed latitude,
    /// so the southern hemisphere gets smaller radii than the northern one.
    pub fn corrected_radius(&self, latitude: f64) -> Result<f64, GeohashError> {
        validate_latitude(latitude)?;
        let (ea, eb) = (self.equatorial_radius, self.polar_radius);
        Ok(eb + (eb - ea) * (90.0 - latitude) / 90.0)
    }
}

/// [`Ellipsoid::corrected_radius`] with the default radii.
pub fn corrected_radius(latitude: f64) -> Result<f64, GeohashError> {
    Ellipsoid::default().corrected_radius(latitude)
}
