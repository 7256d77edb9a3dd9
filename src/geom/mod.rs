mod parse;

pub use parse::{parse_coordinate, parse_geojson, parse_geometry, parse_wkt};
