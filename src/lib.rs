//! # geohash-rs
//!
//! Geohash encoding and latitude-corrected haversine distance. All positions are given
//! longitude first.
//!
//! There are currently three main entry points.
//!
//! ### 1. Free functions - Encode, Decode, Neighbors
//!
//! ```
//! use geohash_rs::{decode, encode, neighbors};
//!
//! # fn main() -> Result<(), geohash_rs::GeohashError> {
//! let hash = encode(104.061029, 30.543534)?;
//! assert_eq!(hash, "wm3vzbqbvx");
//!
//! let center = decode(&hash)?;
//! println!("{}, {}", center.longitude(), center.latitude());
//!
//! let around = neighbors(&hash)?;
//! assert_eq!(around.len(), 8);
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. Distance and bounding boxes
//!
//! ```
//! use geohash_rs::{bounding_box, distance};
//!
//! # fn main() -> Result<(), geohash_rs::GeohashError> {
//! let meters = distance(104.061029, 30.543533, 104.061029, 30.552567)?;
//! assert!((meters - 1000.0).abs() < 5.0);
//!
//! let bbox = bounding_box(1000.0, 104.061029, 30.543533)?;
//! assert!(bbox.max_lng > 104.061029);
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. `GeohashCell` - Single Cell Operations
//!
//! ```
//! use geohash_rs::GeohashCell;
//!
//! # fn main() -> Result<(), geohash_rs::GeohashError> {
//! let cell = GeohashCell::from_wgs84(&(-2.248, 53.481))?;
//! println!("{}", cell.id);
//! let polygon = cell.to_polygon();
//! let feature = cell.to_geojson();
//! # Ok(())
//! # }
//! ```
//!

pub mod api;
pub mod coord;
pub mod error;
pub mod geodesic;
pub mod geom;
pub mod index;

pub use api::{CellsToGeoJson, GeohashCell, decode_all, encode_all};
pub use coord::{Coordinate, LngLat, validate_latitude, validate_longitude};
pub use error::GeohashError;
pub use geodesic::{BoundingBox, EA, EB, Ellipsoid, bounding_box, corrected_radius, distance};
pub use geom::{parse_coordinate, parse_geojson, parse_geometry, parse_wkt};
pub use index::{
    ALPHABET, BitFraction, DEFAULT_HASH_LENGTH, Direction, LOC_BITS, MAX_HASH_LENGTH,
    MIN_HASH_LENGTH, PRECISION_TABLE, PrecisionEntry, decode, decode_bounds, dequantize,
    encode, encode_with_length, neighbor, neighbors, precision, quantize,
};

pub use geo_types;
pub use geojson;
