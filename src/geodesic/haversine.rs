use crate::coord::{Coordinate, round_coord, validate_latitude, validate_longitude};
use crate::error::GeohashError;
use crate::geodesic::ellipsoid::Ellipsoid;
use geo_types::{Rect, coord};
use serde::{Deserialize, Serialize};

/// `haversin(θ) = sin²(θ / 2)`
fn haversin(theta: f64) -> f64 {
    let v = (theta / 2.0).sin();
    v * v
}

/// Longitude/latitude limits reachable from a center within a given distance.
///
/// Values are rounded to six decimals and are not clamped to the valid ranges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub max_lng: f64,
    pub min_lng: f64,
    pub max_lat: f64,
    pub min_lat: f64,
}

impl BoundingBox {
    /// `(max_lng, min_lng, max_lat, min_lat)`
    pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
        (self.max_lng, self.min_lng, self.max_lat, self.min_lat)
    }

    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(
            coord! { x: self.min_lng, y: self.min_lat },
            coord! { x: self.max_lng, y: self.max_lat },
        )
    }

    /// Whether `point` lies inside the box, edges included.
    pub fn contains(&self, point: &impl Coordinate) -> bool {
        (self.min_lng..=self.max_lng).contains(&point.x())
            && (self.min_lat..=self.max_lat).contains(&point.y())
    }
}

impl Ellipsoid {
    /// Great-circle distance in meters between two coordinates.
    ///
    /// The radius comes from [`Ellipsoid::corrected_radius`] at the first point's latitude.
    pub fn distance(
        &self,
        from: &impl Coordinate,
        to: &impl Coordinate,
    ) -> Result<f64, GeohashError> {
        validate_latitude(from.y())?;
        validate_latitude(to.y())?;
        validate_longitude(from.x())?;
        validate_longitude(to.x())?;

        let radius = self.corrected_radius(from.y())?;

        let lng1 = from.x().to_radians();
        let lat1 = from.y().to_radians();
        let lng2 = to.x().to_radians();
        let lat2 = to.y().to_radians();

        let dlng = (lng1 - lng2).abs();
        let dlat = (lat1 - lat2).abs();

        let a = haversin(dlat) + lat1.cos() * lat2.cos() * haversin(dlng);
        Ok(2.0 * radius * a.sqrt().asin())
    }

    /// Box of longitudes and latitudes reachable from `center` within `distance` meters.
    ///
    /// The longitude half-span solves the haversine equation along the center's
    /// parallel; the latitude half-span is the arc along its meridian. Where no parallel
    /// solution exists (near the poles) the longitude half-span is 180 degrees.
    pub fn bounding_box(
        &self,
        center: &impl Coordinate,
        distance: f64,
    ) -> Result<BoundingBox, GeohashError> {
        let (lng, lat) = (center.x(), center.y());
        validate_latitude(lat)?;
        validate_longitude(lng)?;
        if !distance.is_finite() || distance < 0.0 {
            return Err(GeohashError::InvalidDistance(distance));
        }

        let radius = self.corrected_radius(lat)?;
        let a = haversin(distance / radius);

        let cos_lat = lat.to_radians().cos();
        let ratio = (a / (cos_lat * cos_lat)).min(1.0);
        let lng_span = (2.0 * ratio.sqrt().asin()).to_degrees();
        let lat_span = (distance / radius).to_degrees();

        Ok(BoundingBox {
            max_lng: round_coord(lng + lng_span),
            min_lng: round_coord(lng - lng_span),
            max_lat: round_coord(lat + lat_span),
            min_lat: round_coord(lat - lat_span),
        })
    }
}

/// Great-circle distance in meters using the default [`Ellipsoid`].
///
/// # Example
/// ```
/// use geohash_rs::distance;
///
/// # fn main() -> Result<(), geohash_rs::GeohashError> {
/// let d = distance(104.061029, 30.543533, 104.061029, 30.552567)?;
/// assert!((d - 1000.0).abs() < 5.0);
/// # Ok(())
/// # }
/// ```
pub fn distance(lng1: f64, lat1: f64, lng2: f64, lat2: f64) -> Result<f64, GeohashError> {
    Ellipsoid::default().distance(&(lng1, lat1), &(lng2, lat2))
}

/// Bounding box around `(lng, lat)` for `distance` meters using the default [`Ellipsoid`].
///
/// # Example
/// ```
/// use geohash_rs::bounding_box;
///
/// # fn main() -> Result<(), geohash_rs::GeohashError> {
/// let bbox = bounding_box(1000.0, 104.061029, 30.543533)?;
/// assert_eq!(bbox.max_lat, 30.552567);
/// assert_eq!(bbox.min_lat, 30.534499);
/// # Ok(())
/// # }
/// ```
pub fn bounding_box(distance: f64, lng: f64, lat: f64) -> Result<BoundingBox, GeohashError> {
    Ellipsoid::default().bounding_box(&(lng, lat), distance)
}
