use thiserror::Error;

/// Error type for geohash-rs operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeohashError {
    /// Longitude outside [-180, 180] or not finite.
    #[error("Invalid longitude: {0} (must be within [-180, 180])")]
    InvalidLongitude(f64),
    /// Latitude outside [-90, 90] or not finite.
    #[error("Invalid latitude: {0} (must be within [-90, 90])")]
    InvalidLatitude(f64),
    /// The hash contains a character outside the base32 alphabet.
    #[error("Invalid geohash character: {0:?}")]
    InvalidHashCharacter(char),
    /// The hash length is outside the supported range (1-12).
    #[error("Invalid geohash length: {0} (must be within [1, 12])")]
    InvalidHashLength(usize),
    /// A coordinate given as text was not numeric.
    #[error("Invalid argument type: {0}")]
    InvalidArgumentType(String),
    /// A search distance was negative or not finite.
    #[error("Invalid distance: {0}")]
    InvalidDistance(f64),
    /// Ellipsoid configuration was rejected.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
    /// Failed to parse geometry from string (GeoJSON or WKT).
    #[error("Geometry parse error: {0}")]
    GeometryParseError(String),
}
