use crate::error::GeohashError;
use crate::index::codec::{check_length, decode, encode};
use crate::index::precision::precision;

/// Position of an adjacent cell relative to the cell being expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    UpperLeft,
    Up,
    UpperRight,
    Left,
    Right,
    LowerLeft,
    Down,
    LowerRight,
}

impl Direction {
    /// All eight directions in raster order (north row first, west to east).
    pub const ALL: [Direction; 8] = [
        Direction::UpperLeft,
        Direction::Up,
        Direction::UpperRight,
        Direction::Left,
        Direction::Right,
        Direction::LowerLeft,
        Direction::Down,
        Direction::LowerRight,
    ];

    /// Unit offset `(dlng, dlat)` in cell steps.
    pub fn offset(self) -> (f64, f64) {
        match self {
            Direction::UpperLeft => (-1.0, 1.0),
            Direction::Up => (0.0, 1.0),
            Direction::UpperRight => (1.0, 1.0),
            Direction::Left => (-1.0, 0.0),
            Direction::Right => (1.0, 0.0),
            Direction::LowerLeft => (-1.0, -1.0),
            Direction::Down => (0.0, -1.0),
            Direction::LowerRight => (1.0, -1.0),
        }
    }
}

/// Returns the eight cells around `hash` in raster order.
///
/// The center of `hash` is shifted by one cell step in each [`Direction`] and the
/// shifted point is re-encoded with [`encode`], so results are always 10 characters.
/// For 12-character input the one-cell shift stays inside the same 10-character cell,
/// so all eight results equal the input's 10-character prefix. There is no wraparound at the antimeridian and no clamping at the poles: a shifted
/// point off the map fails with the same range error as a direct `encode`.
///
/// # Example
/// ```
/// use geohash_rs::neighbors;
///
/// # fn main() -> Result<(), geohash_rs::GeohashError> {
/// let around = neighbors("wm3vzbqbvx")?;
/// assert_eq!(around[1], "wm3vzbqcj8"); // up
/// assert_eq!(around[6], "wm3vzbqbvw"); // down
/// # Ok(())
/// # }
/// ```
pub fn neighbors(hash: &str) -> Result<[String; 8], GeohashError> {
    let mut cells: [String; 8] = Default::default();
    for (slot, direction) in cells.iter_mut().zip(Direction::ALL) {
        *slot = neighbor(hash, direction)?;
    }
    Ok(cells)
}

/// Returns the single adjacent cell of `hash` in `direction`.
pub fn neighbor(hash: &str, direction: Direction) -> Result<String, GeohashError> {
    let length = hash.chars().count();
    check_length(length)?;

    let center = decode(hash)?;
    let entry = precision(length)?;
    let (dx, dy) = direction.offset();

    let longitude = center.longitude() + dx * entry.lng_step();
    let latitude = center.latitude() + dy * entry.lat_step();

    encode(longitude, latitude).inspect_err(|_| {
        log::warn!(
            "{:?} neighbor of {} falls outside the map at ({}, {})",
            direction,
            hash,
            longitude,
            latitude
        );
    })
}
