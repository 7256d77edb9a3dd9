pub mod batch;
pub mod cell;

pub use batch::{CellsToGeoJson, decode_all, encode_all};
pub use cell::GeohashCell;
