use crate::coord::LngLat;
use crate::error::GeohashError;
use geo_types::Geometry;
use geojson::GeoJson;
use std::str::FromStr;
use wkt::Wkt;

/// Parses a geometry string, auto-detecting WKT or GeoJSON format.
///
/// GeoJSON is detected by a leading `{`, everything else is tried as WKT.
pub fn parse_geometry(s: &str) -> Result<Geometry<f64>, GeohashError> {
    let trimmed = s.trim();
    if trimmed.starts_with('{') {
        parse_geojson(trimmed)
    } else {
        parse_wkt(trimmed)
    }
}

/// Parses a GeoJSON string into a `geo_types::Geometry`.
pub fn parse_geojson(s: &str) -> Result<Geometry<f64>, GeohashError> {
    let geojson: GeoJson = s
        .parse()
        .map_err(|e: geojson::Error| GeohashError::GeometryParseError(e.to_string()))?;

    match geojson {
        GeoJson::Geometry(geom) => {
            Geometry::try_from(geom).map_err(|e| GeohashError::GeometryParseError(e.to_string()))
        }
        GeoJson::Feature(feat) => feat
            .geometry
            .ok_or_else(|| GeohashError::GeometryParseError("Feature has no geometry".to_string()))
            .and_then(|g| {
                Geometry::try_from(g).map_err(|e| GeohashError::GeometryParseError(e.to_string()))
            }),
        GeoJson::FeatureCollection(_) => Err(GeohashError::GeometryParseError(
            "FeatureCollection not supported, use individual geometries".to_string(),
        )),
    }
}

/// Parses a WKT string into a `geo_types::Geometry`.
pub fn parse_wkt(s: &str) -> Result<Geometry<f64>, GeohashError> {
    let wkt: Wkt<f64> =
        Wkt::from_str(s).map_err(|e| GeohashError::GeometryParseError(e.to_string()))?;

    wkt.try_into().map_err(|_| {
        GeohashError::GeometryParseError("Failed to convert WKT to geometry".to_string())
    })
}

/// Parses a single position from text.
///
/// Accepts a GeoJSON point (bare or inside a Feature), a WKT `POINT(lng lat)`, or a
/// plain `"lng,lat"` / `"lng lat"` pair. Longitude always comes first.
///
/// # Example
/// ```
/// use geohash_rs::{GeohashError, parse_coordinate};
///
/// # fn main() -> Result<(), GeohashError> {
/// let a = parse_coordinate("104.061029, 30.543534")?;
/// let b = parse_coordinate("POINT(104.061029 30.543534)")?;
/// assert_eq!(a, b);
///
/// assert!(matches!(
///     parse_coordinate("east,30.5"),
///     Err(GeohashError::InvalidArgumentType(_))
/// ));
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// - [`GeohashError::InvalidArgumentType`] - a token is not a number, the pair has the
///   wrong number of parts, or the geometry is not a point
/// - [`GeohashError::GeometryParseError`] - malformed WKT or GeoJSON
/// - [`GeohashError::InvalidLongitude`] / [`GeohashError::InvalidLatitude`] - out of range
pub fn parse_coordinate(s: &str) -> Result<LngLat, GeohashError> {
    let trimmed = s.trim();

    if trimmed.starts_with('{') || trimmed.contains('(') {
        return match parse_geometry(trimmed)? {
            Geometry::Point(pt) => LngLat::try_from(pt),
            _ => Err(GeohashError::InvalidArgumentType(format!(
                "expected a point geometry, got {:?}",
                trimmed
            ))),
        };
    }

    let tokens: Vec<&str> = trimmed
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .collect();

    let [lng, lat] = tokens.as_slice() else {
        return Err(GeohashError::InvalidArgumentType(format!(
            "expected \"longitude,latitude\", got {:?}",
            trimmed
        )));
    };

    LngLat::new(parse_number(lng)?, parse_number(lat)?)
}

fn parse_number(token: &str) -> Result<f64, GeohashError> {
    token
        .parse::<f64>()
        .map_err(|_| GeohashError::InvalidArgumentType(format!("{:?} is not a number", token)))
}
