pub mod codec;
pub mod constants;
pub mod neighbors;
pub mod precision;
pub mod quantizer;

pub use codec::{decode, decode_bounds, encode, encode_with_length};
pub use constants::{
    ALPHABET, DEFAULT_HASH_LENGTH, LOC_BITS, MAX_HASH_LENGTH, MIN_HASH_LENGTH,
};
pub use neighbors::{Direction, neighbor, neighbors};
pub use precision::{PRECISION_TABLE, PrecisionEntry, precision};
pub use quantizer::{BitFraction, dequantize, dequantize_interval, quantize};
