use crate::coord::{Coordinate, LngLat};
use crate::error::GeohashError;
use crate::geodesic::{BoundingBox, Ellipsoid};
use crate::index::{decode, decode_bounds, encode, encode_with_length, neighbors};
use geo::{Centroid, Intersects};
use geo_types::{Geometry, Polygon, Rect, coord};
use geojson::{Feature, JsonObject, JsonValue};
use wkt::ToWkt;

/// A single geohash cell: its hash, decoded center and exact extent.
///
/// # Example
///
/// ```
/// use geohash_rs::GeohashCell;
///
/// # fn main() -> Result<(), geohash_rs::GeohashError> {
/// let cell = GeohashCell::from_wgs84(&(104.061029, 30.543534))?;
/// assert_eq!(cell.id, "wm3vzbqbvx");
///
/// let polygon = cell.to_polygon();
/// assert_eq!(polygon.exterior().coords().count(), 5);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GeohashCell {
    /// Base32 geohash of this cell
    pub id: String,
    /// Cell center, rounded to six decimals
    pub center: LngLat,
    /// South-west to north-east extent, unrounded
    pub bounds: Rect<f64>,
}

impl GeohashCell {
    /// Create a cell from an existing hash of 1-12 characters.
    pub fn from_hash(id: &str) -> Result<Self, GeohashError> {
        let center = decode(id)?;
        let bounds = decode_bounds(id)?;

        Ok(Self {
            id: id.to_string(),
            center,
            bounds,
        })
    }

    /// Create the 10-character cell containing a longitude/latitude position.
    ///
    /// # Example
    /// ```
    /// use geohash_rs::GeohashCell;
    /// use geo_types::Point;
    ///
    /// # fn main() -> Result<(), geohash_rs::GeohashError> {
    /// let from_tuple = GeohashCell::from_wgs84(&(-2.248, 53.481))?;
    /// let from_point = GeohashCell::from_wgs84(&Point::new(-2.248, 53.481))?;
    /// assert_eq!(from_tuple, from_point);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_wgs84(coord: &impl Coordinate) -> Result<Self, GeohashError> {
        let id = encode(coord.x(), coord.y())?;
        Self::from_hash(&id)
    }

    /// Create the cell of `length` characters containing a position.
    pub fn from_wgs84_with_length(
        coord: &impl Coordinate,
        length: usize,
    ) -> Result<Self, GeohashError> {
        let id = encode_with_length(coord.x(), coord.y(), length)?;
        Self::from_hash(&id)
    }

    /// Create cells from an arbitrary `geo_types::Geometry`.
    ///
    /// Points give their own cell, polygons the cell of their centroid, and multi
    /// geometries and collections one cell per member. Lines are not supported.
    pub fn from_geometry(geom: Geometry<f64>, length: usize) -> Result<Vec<Self>, GeohashError> {
        match geom {
            Geometry::Point(pt) => Ok(vec![Self::from_wgs84_with_length(&pt, length)?]),
            Geometry::MultiPoint(mp) => mp
                .0
                .iter()
                .map(|pt| Self::from_wgs84_with_length(pt, length))
                .collect(),
            Geometry::Polygon(poly) => match poly.centroid() {
                Some(centroid) => Ok(vec![Self::from_wgs84_with_length(&centroid, length)?]),
                None => Ok(vec![]),
            },
            Geometry::MultiPolygon(mp) => {
                let mut cells = Vec::new();
                for poly in mp.0 {
                    if let Some(centroid) = poly.centroid() {
                        cells.push(Self::from_wgs84_with_length(&centroid, length)?);
                    }
                }
                Ok(cells)
            }
            Geometry::Rect(rect) => Ok(vec![Self::from_wgs84_with_length(
                &rect.centroid(),
                length,
            )?]),
            Geometry::GeometryCollection(gc) => {
                let mut all_cells = Vec::new();
                for g in gc.0 {
                    all_cells.extend(Self::from_geometry(g, length)?);
                }
                Ok(all_cells)
            }
            _ => Err(GeohashError::GeometryParseError(
                "Unsupported geometry type".to_string(),
            )),
        }
    }

    /// Number of characters in the hash.
    pub fn length(&self) -> usize {
        self.id.chars().count()
    }

    pub fn longitude(&self) -> f64 {
        self.center.longitude()
    }

    pub fn latitude(&self) -> f64 {
        self.center.latitude()
    }

    /// Whether a position lies inside the cell, edges included.
    pub fn contains(&self, coord: &impl Coordinate) -> bool {
        self.bounds.intersects(&coord! { x: coord.x(), y: coord.y() })
    }

    /// Converts this cell to a closed rectangular polygon.
    pub fn to_polygon(&self) -> Polygon<f64> {
        self.bounds.to_polygon()
    }

    /// The cell polygon as WKT.
    pub fn to_wkt(&self) -> String {
        self.to_polygon().wkt_string()
    }

    /// The cell polygon as a GeoJSON feature with the hash and center as properties.
    pub fn to_geojson(&self) -> Feature {
        let mut properties = JsonObject::new();
        properties.insert("geohash".to_string(), JsonValue::from(self.id.clone()));
        properties.insert("longitude".to_string(), JsonValue::from(self.longitude()));
        properties.insert("latitude".to_string(), JsonValue::from(self.latitude()));

        let polygon = self.to_polygon();
        Feature {
            bbox: None,
            geometry: Some(geojson::Geometry::new(geojson::Value::from(&polygon))),
            id: None,
            properties: Some(properties),
            foreign_members: None,
        }
    }

    /// The eight surrounding 10-character cells in raster order.
    pub fn neighbors(&self) -> Result<Vec<GeohashCell>, GeohashError> {
        neighbors(&self.id)?
            .iter()
            .map(|id| GeohashCell::from_hash(id))
            .collect()
    }

    /// Distance in meters from this cell's center to `other`.
    pub fn distance_to(&self, other: &impl Coordinate) -> Result<f64, GeohashError> {
        Ellipsoid::default().distance(&self.center, other)
    }

    /// Bounding box `distance` meters around this cell's center.
    pub fn bounding_box(&self, distance: f64) -> Result<BoundingBox, GeohashError> {
        Ellipsoid::default().bounding_box(&self.center, distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::parse_geometry;
    use geo_types::{MultiPoint, Point, polygon};

    #[test]
    fn test_from_hash() -> Result<(), GeohashError> {
        let cell = GeohashCell::from_hash("wm3vzbqbvx")?;

        assert_eq!(cell.length(), 10);
        assert_eq!(cell.longitude(), 104.061025);
        assert_eq!(cell.latitude(), 30.543534);
        assert!(cell.contains(&(104.061029, 30.543534)));
        Ok(())
    }

    #[test]
    fn test_from_hash_invalid() {
        assert_eq!(
            GeohashCell::from_hash("wm3o"),
            Err(GeohashError::InvalidHashCharacter('o'))
        );
        assert_eq!(
            GeohashCell::from_hash(""),
            Err(GeohashError::InvalidHashLength(0))
        );
    }

    #[test]
    fn test_from_wgs84_contains_source() -> Result<(), GeohashError> {
        for (lng, lat) in [(-2.248, 53.481), (151.2093, -33.8688), (0.0, 0.0)] {
            let cell = GeohashCell::from_wgs84(&Point::new(lng, lat))?;
            assert!(cell.contains(&(lng, lat)));
            assert!(!cell.contains(&(lng + 0.01, lat)));
        }
        Ok(())
    }

    #[test]
    fn test_from_wgs84_with_length() -> Result<(), GeohashError> {
        let cell = GeohashCell::from_wgs84_with_length(&(104.061029, 30.543534), 3)?;
        assert_eq!(cell.id, "wm3");
        assert_eq!(cell.bounds.width(), 360.0 / 256.0);
        assert_eq!(cell.bounds.height(), 180.0 / 128.0);
        Ok(())
    }

    #[test]
    fn test_from_geometry_polygon_centroid() -> Result<(), GeohashError> {
        let poly = polygon![
            (x: 104.0, y: 30.0),
            (x: 105.0, y: 30.0),
            (x: 105.0, y: 31.0),
            (x: 104.0, y: 31.0),
            (x: 104.0, y: 30.0),
        ];
        let cells = GeohashCell::from_geometry(Geometry::Polygon(poly), 5)?;
        assert_eq!(cells.len(), 1);
        assert!(cells[0].contains(&(104.5, 30.5)));
        Ok(())
    }

    #[test]
    fn test_from_geometry_multipoint() -> Result<(), GeohashError> {
        let mp = MultiPoint::from(vec![(104.06, 30.54), (-2.248, 53.481)]);
        let cells = GeohashCell::from_geometry(Geometry::MultiPoint(mp), 6)?;
        assert_eq!(cells.len(), 2);
        assert!(cells.iter().all(|c| c.length() == 6));
        Ok(())
    }

    #[test]
    fn test_from_parsed_geometry_collection() -> Result<(), GeohashError> {
        let geom = parse_geometry("GEOMETRYCOLLECTION(POINT(1 1), POINT(2 2))")?;
        let cells = GeohashCell::from_geometry(geom, 4)?;
        assert_eq!(cells.len(), 2);
        Ok(())
    }

    #[test]
    fn test_from_geometry_rejects_lines() -> Result<(), GeohashError> {
        let geom = parse_geometry("LINESTRING(0 0, 1 1)")?;
        assert!(matches!(
            GeohashCell::from_geometry(geom, 4),
            Err(GeohashError::GeometryParseError(_))
        ));
        Ok(())
    }

    #[test]
    fn test_to_wkt() -> Result<(), GeohashError> {
        let cell = GeohashCell::from_hash("s")?;
        let wkt = cell.to_wkt();
        assert!(wkt.starts_with("POLYGON"));
        assert!(wkt.contains("45 45"));
        Ok(())
    }

    #[test]
    fn test_to_geojson() -> Result<(), GeohashError> {
        let cell = GeohashCell::from_hash("wm3")?;
        let feature = cell.to_geojson();

        assert_eq!(
            feature.property("geohash").and_then(|v| v.as_str()),
            Some("wm3")
        );
        assert!(feature.geometry.is_some());

        let json = serde_json::to_string(&feature).unwrap();
        assert!(json.contains("\"Polygon\""));
        Ok(())
    }

    #[test]
    fn test_neighbors() -> Result<(), GeohashError> {
        let cell = GeohashCell::from_hash("wm3vzbqbvx")?;
        let around = cell.neighbors()?;
        assert_eq!(around.len(), 8);
        assert_eq!(around[1].id, "wm3vzbqcj8");
        assert!(around.iter().all(|n| n.id != cell.id));
        Ok(())
    }

    #[test]
    fn test_distance_and_bounding_box() -> Result<(), GeohashError> {
        let cell = GeohashCell::from_hash("wm3vzbqbvx")?;
        let d = cell.distance_to(&(104.061025, 30.552567))?;
        assert!((d - 1000.0).abs() < 5.0);

        let bbox = cell.bounding_box(1000.0)?;
        assert!(bbox.contains(&cell.center));
        Ok(())
    }
}
