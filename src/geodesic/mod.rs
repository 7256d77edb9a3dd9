mod ellipsoid;
mod haversine;

pub use ellipsoid::{EA, EB, Ellipsoid, corrected_radius};
pub use haversine::{BoundingBox, bounding_box, distance};
