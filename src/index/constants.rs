/// Base32 alphabet; `a`, `i`, `l` and `o` are left out.
pub const ALPHABET: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

/// Bisection rounds applied to each axis by the default encoder.
pub const LOC_BITS: u8 = 25;

/// Bits carried by a single hash character.
pub const BITS_PER_CHAR: usize = 5;

/// Length of a hash produced by [`encode`](crate::encode).
pub const DEFAULT_HASH_LENGTH: usize = 10;

/// Shortest supported hash length
pub const MIN_HASH_LENGTH: usize = 1;

/// Longest supported hash length
pub const MAX_HASH_LENGTH: usize = 12;

/// Longitude interval [min, max]
pub const LNG_RANGE: (f64, f64) = (-180.0, 180.0);

/// Latitude interval [min, max]
pub const LAT_RANGE: (f64, f64) = (-90.0, 90.0);

/// Decimal places kept on decoded and bounding-box output.
pub const COORD_DECIMALS: i32 = 6;
