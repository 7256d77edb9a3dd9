use crate::api::cell::GeohashCell;
use crate::coord::{Coordinate, LngLat};
use crate::error::GeohashError;
use crate::index::{decode, encode};
use geojson::FeatureCollection;
use rayon::prelude::*;

/// Encodes every coordinate in parallel, keeping input order.
///
/// Each position gets its own `Result`, so one bad coordinate does not fail the batch.
///
/// # Example
/// ```
/// use geohash_rs::encode_all;
///
/// let hashes = encode_all(&[(104.061029, 30.543534), (200.0, 0.0)]);
/// assert_eq!(hashes[0].as_deref(), Ok("wm3vzbqbvx"));
/// assert!(hashes[1].is_err());
/// ```
pub fn encode_all<C: Coordinate + Sync>(coords: &[C]) -> Vec<Result<String, GeohashError>> {
    log::trace!("Encoding {} coordinates", coords.len());
    coords.par_iter().map(|c| encode(c.x(), c.y())).collect()
}

/// Decodes every hash in parallel, keeping input order.
pub fn decode_all<S: AsRef<str> + Sync>(hashes: &[S]) -> Vec<Result<LngLat, GeohashError>> {
    log::trace!("Decoding {} hashes", hashes.len());
    hashes.par_iter().map(|h| decode(h.as_ref())).collect()
}

/// Trait for converting collections of [`GeohashCell`]s to GeoJSON.
///
/// Implemented for `[GeohashCell]`, so it also applies to `Vec<GeohashCell>`.
pub trait CellsToGeoJson {
    /// One polygon feature per cell, in order.
    fn to_feature_collection(&self) -> FeatureCollection;
}

impl CellsToGeoJson for [GeohashCell] {
    fn to_feature_collection(&self) -> FeatureCollection {
        let features = self.par_iter().map(|c| c.to_geojson()).collect();
        FeatureCollection {
            bbox: None,
            features,
            foreign_members: None,
        }
    }
}
