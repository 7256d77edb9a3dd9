use crate::error::GeohashError;
use crate::index::constants::{MAX_HASH_LENGTH, MIN_HASH_LENGTH};

/// Bisection steps applied to longitude and latitude for one hash length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrecisionEntry {
    pub lng_bits: u8,
    pub lat_bits: u8,
}

impl PrecisionEntry {
    const fn new(lng_bits: u8, lat_bits: u8) -> Self {
        Self { lng_bits, lat_bits }
    }

    /// Longitude extent of one cell, in degrees.
    pub fn lng_step(&self) -> f64 {
        360.0 / 2f64.powi(self.lng_bits as i32)
    }

    /// Latitude extent of one cell, in degrees.
    pub fn lat_step(&self) -> f64 {
        180.0 / 2f64.powi(self.lat_bits as i32)
    }

    pub fn total_bits(&self) -> usize {
        self.lng_bits as usize + self.lat_bits as usize
    }
}

/// Split of bits per hash length, indexed by `length - 1`.
///
/// Kept as published, including the 9-character row, which gives latitude the extra bit.
pub const PRECISION_TABLE: [PrecisionEntry; MAX_HASH_LENGTH] = [
    PrecisionEntry::new(3, 2),
    PrecisionEntry::new(5, 5),
    PrecisionEntry::new(8, 7),
    PrecisionEntry::new(10, 10),
    PrecisionEntry::new(13, 12),
    PrecisionEntry::new(15, 15),
    PrecisionEntry::new(18, 17),
    PrecisionEntry::new(20, 20),
    PrecisionEntry::new(22, 23),
    PrecisionEntry::new(25, 25),
    PrecisionEntry::new(28, 27),
    PrecisionEntry::new(30, 30),
];

/// Looks up the precision entry for a hash length in 1-12.
///
/// # Example
/// ```
/// use geohash_rs::precision;
///
/// # fn main() -> Result<(), geohash_rs::GeohashError> {
/// let entry = precision(10)?;
/// assert_eq!((entry.lng_bits, entry.lat_bits), (25, 25));
/// assert!(precision(13).is_err());
/// # Ok(())
/// # }
/// ```
pub fn precision(length: usize) -> Result<PrecisionEntry, GeohashError> {
    if !(MIN_HASH_LENGTH..=MAX_HASH_LENGTH).contains(&length) {
        return Err(GeohashError::InvalidHashLength(length));
    }
    Ok(PRECISION_TABLE[length - 1])
}
