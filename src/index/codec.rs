use crate::coord::{LngLat, round_coord, validate_latitude, validate_longitude};
use crate::error::GeohashError;
use crate::index::constants::{
    ALPHABET, BITS_PER_CHAR, LAT_RANGE, LNG_RANGE, LOC_BITS, MAX_HASH_LENGTH, MIN_HASH_LENGTH,
};
use crate::index::quantizer::{BitFraction, dequantize, dequantize_interval, quantize};
use geo_types::{Rect, coord};

/// Encodes a longitude/latitude pair as a 10-character geohash.
///
/// Each axis is bisected 25 times. The two bit streams are interleaved, longitude on
/// even positions and latitude on odd ones, then read five bits at a time through the
/// base32 alphabet.
///
/// # Example
/// ```
/// use geohash_rs::encode;
///
/// # fn main() -> Result<(), geohash_rs::GeohashError> {
/// let hash = encode(104.061029, 30.543534)?;
/// assert_eq!(hash, "wm3vzbqbvx");
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// - [`GeohashError::InvalidLongitude`] - longitude outside [-180, 180]
/// - [`GeohashError::InvalidLatitude`] - latitude outside [-90, 90]
pub fn encode(longitude: f64, latitude: f64) -> Result<String, GeohashError> {
    encode_bits(longitude, latitude, LOC_BITS, LOC_BITS)
}

/// Encodes a longitude/latitude pair as a geohash of `length` characters (1-12).
///
/// Longitude receives the extra bit when `5 * length` is odd. At length 10 the result
/// is identical to [`encode`].
///
/// # Example
/// ```
/// use geohash_rs::encode_with_length;
///
/// # fn main() -> Result<(), geohash_rs::GeohashError> {
/// assert_eq!(encode_with_length(104.061029, 30.543534, 3)?, "wm3");
/// assert_eq!(encode_with_length(104.061029, 30.543534, 12)?, "wm3vzbqbvxrj");
/// # Ok(())
/// # }
/// ```
pub fn encode_with_length(
    longitude: f64,
    latitude: f64,
    length: usize,
) -> Result<String, GeohashError> {
    check_length(length)?;
    let total = (length * BITS_PER_CHAR) as u8;
    let lng_rounds = total.div_ceil(2);
    let lat_rounds = total / 2;
    encode_bits(longitude, latitude, lng_rounds, lat_rounds)
}

fn encode_bits(
    longitude: f64,
    latitude: f64,
    lng_rounds: u8,
    lat_rounds: u8,
) -> Result<String, GeohashError> {
    validate_longitude(longitude)?;
    validate_latitude(latitude)?;

    let lng_bits = quantize(longitude, LNG_RANGE.0, LNG_RANGE.1, lng_rounds);
    let lat_bits = quantize(latitude, LAT_RANGE.0, LAT_RANGE.1, lat_rounds);

    let total = lng_bits.len() + lat_bits.len();
    let mut hash = String::with_capacity(total / BITS_PER_CHAR);
    let mut quintet = 0usize;

    for i in 0..total {
        let bit = if i % 2 == 0 {
            lng_bits.bit(i / 2)
        } else {
            lat_bits.bit(i / 2)
        };
        quintet = (quintet << 1) | bit as usize;

        if i % BITS_PER_CHAR == BITS_PER_CHAR - 1 {
            hash.push(ALPHABET[quintet] as char);
            quintet = 0;
        }
    }

    Ok(hash)
}

/// Decodes a geohash to the center of its cell, rounded to six decimals.
///
/// # Example
/// ```
/// use geohash_rs::decode;
///
/// # fn main() -> Result<(), geohash_rs::GeohashError> {
/// let center = decode("wm3vzbqbvx")?;
/// assert!((center.longitude() - 104.061029).abs() < 1e-5);
/// assert!((center.latitude() - 30.543534).abs() < 1e-5);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// - [`GeohashError::InvalidHashLength`] - empty or longer than 12 characters
/// - [`GeohashError::InvalidHashCharacter`] - a character outside the alphabet
pub fn decode(hash: &str) -> Result<LngLat, GeohashError> {
    let (lng_bits, lat_bits) = deinterleave(hash)?;
    let longitude = dequantize(&lng_bits, LNG_RANGE.0, LNG_RANGE.1);
    let latitude = dequantize(&lat_bits, LAT_RANGE.0, LAT_RANGE.1);
    LngLat::new(round_coord(longitude), round_coord(latitude))
}

/// Returns the exact (unrounded) rectangle covered by a geohash.
///
/// `min` is the south-west corner and `max` the north-east corner.
pub fn decode_bounds(hash: &str) -> Result<Rect<f64>, GeohashError> {
    let (lng_bits, lat_bits) = deinterleave(hash)?;
    let (west, east) = dequantize_interval(&lng_bits, LNG_RANGE.0, LNG_RANGE.1);
    let (south, north) = dequantize_interval(&lat_bits, LAT_RANGE.0, LAT_RANGE.1);
    Ok(Rect::new(
        coord! { x: west, y: south },
        coord! { x: east, y: north },
    ))
}

/// Looks up the 5-bit value of one hash character.
pub fn char_index(c: char) -> Result<usize, GeohashError> {
    if !c.is_ascii() {
        return Err(GeohashError::InvalidHashCharacter(c));
    }
    ALPHABET
        .iter()
        .position(|&symbol| symbol == c as u8)
        .ok_or(GeohashError::InvalidHashCharacter(c))
}

/// Splits a hash back into its longitude (even) and latitude (odd) bit streams.
fn deinterleave(hash: &str) -> Result<(BitFraction, BitFraction), GeohashError> {
    check_length(hash.chars().count())?;

    let mut lng_bits = BitFraction::new();
    let mut lat_bits = BitFraction::new();
    let mut position = 0usize;

    for c in hash.chars() {
        let value = char_index(c).inspect_err(|_| {
            log::debug!("Rejecting geohash {:?}: bad character {:?}", hash, c);
        })?;

        for shift in (0..BITS_PER_CHAR).rev() {
            let bit = (value >> shift) & 1 == 1;
            if position % 2 == 0 {
                lng_bits.push(bit);
            } else {
                lat_bits.push(bit);
            }
            position += 1;
        }
    }

    Ok((lng_bits, lat_bits))
}

pub(crate) fn check_length(length: usize) -> Result<(), GeohashError> {
    if (MIN_HASH_LENGTH..=MAX_HASH_LENGTH).contains(&length) {
        Ok(())
    } else {
        Err(GeohashError::InvalidHashLength(length))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::constants::DEFAULT_HASH_LENGTH;

    #[test]
    fn test_encode_known_hash() -> Result<(), GeohashError> {
        assert_eq!(encode(104.061029, 30.543534)?, "wm3vzbqbvx");
        assert_eq!(encode(-0.1, 51.5)?, "gcpuvxr1jz");
        Ok(())
    }

    #[test]
    fn test_encode_range_corners() -> Result<(), GeohashError> {
        assert_eq!(encode(0.0, 0.0)?, "s000000000");
        assert_eq!(encode(-180.0, -90.0)?, "0000000000");
        assert_eq!(encode(180.0, 90.0)?, "zzzzzzzzzz");
        Ok(())
    }

    #[test]
    fn test_encode_rejects_out_of_range() {
        assert_eq!(encode(181.0, 0.0), Err(GeohashError::InvalidLongitude(181.0)));
        assert_eq!(encode(-181.0, 0.0), Err(GeohashError::InvalidLongitude(-181.0)));
        assert_eq!(encode(0.0, 91.0), Err(GeohashError::InvalidLatitude(91.0)));
        assert_eq!(encode(0.0, -91.0), Err(GeohashError::InvalidLatitude(-91.0)));
    }

    #[test]
    fn test_encode_checks_longitude_first() {
        assert_eq!(encode(200.0, 100.0), Err(GeohashError::InvalidLongitude(200.0)));
    }

    #[test]
    fn test_encode_uses_alphabet_only() -> Result<(), GeohashError> {
        for (lng, lat) in [(-122.4194, 37.7749), (151.2093, -33.8688), (-43.1729, -22.9068)] {
            let hash = encode(lng, lat)?;
            assert_eq!(hash.len(), DEFAULT_HASH_LENGTH);
            assert!(hash.bytes().all(|b| ALPHABET.contains(&b)));
        }
        Ok(())
    }

    #[test]
    fn test_decode_known_hash() -> Result<(), GeohashError> {
        let center = decode("wm3vzbqbvx")?;
        assert!((center.longitude() - 104.061029).abs() < 1e-5);
        assert!((center.latitude() - 30.543534).abs() < 1e-5);
        assert_eq!(center.longitude(), 104.061025);
        assert_eq!(center.latitude(), 30.543534);
        Ok(())
    }

    #[test]
    fn test_decode_short_hashes() -> Result<(), GeohashError> {
        let w = decode("w")?;
        assert_eq!((w.longitude(), w.latitude()), (112.5, 22.5));

        let wm3 = decode("wm3")?;
        assert_eq!((wm3.longitude(), wm3.latitude()), (103.359375, 30.234375));
        Ok(())
    }

    #[test]
    fn test_roundtrip_reproduces_hash() -> Result<(), GeohashError> {
        let cell_w = 360.0 / 2f64.powi(25);
        let cell_h = 180.0 / 2f64.powi(25);

        for (lng, lat) in [(104.061029, 30.543534), (-2.248, 53.481), (-179.99, -89.99)] {
            let hash = encode(lng, lat)?;
            let center = decode(&hash)?;
            assert!((center.longitude() - lng).abs() <= cell_w);
            assert!((center.latitude() - lat).abs() <= cell_h);
            assert_eq!(encode(center.longitude(), center.latitude())?, hash);
        }
        Ok(())
    }

    #[test]
    fn test_decode_rejects_unknown_characters() {
        for bad in ["wm3a", "ilo", "WM3", "wm3-", "wm3é"] {
            assert!(
                matches!(decode(bad), Err(GeohashError::InvalidHashCharacter(_))),
                "expected {bad:?} to be rejected"
            );
        }
        assert_eq!(
            decode("wm3a"),
            Err(GeohashError::InvalidHashCharacter('a'))
        );
    }

    #[test]
    fn test_decode_rejects_bad_length() {
        assert_eq!(decode(""), Err(GeohashError::InvalidHashLength(0)));
        assert_eq!(
            decode("0123456789bcd"),
            Err(GeohashError::InvalidHashLength(13))
        );
    }

    #[test]
    fn test_encode_with_length() -> Result<(), GeohashError> {
        assert_eq!(encode_with_length(104.061029, 30.543534, 1)?, "w");
        assert_eq!(encode_with_length(104.061029, 30.543534, 3)?, "wm3");
        assert_eq!(
            encode_with_length(104.061029, 30.543534, 10)?,
            encode(104.061029, 30.543534)?
        );
        assert_eq!(
            encode_with_length(104.061029, 30.543534, 12)?,
            "wm3vzbqbvxrj"
        );
        Ok(())
    }

    #[test]
    fn test_encode_with_length_is_prefix() -> Result<(), GeohashError> {
        let full = encode_with_length(-2.248, 53.481, 12)?;
        for length in 1..=12 {
            assert_eq!(encode_with_length(-2.248, 53.481, length)?, full[..length]);
        }
        Ok(())
    }

    #[test]
    fn test_encode_with_length_rejects_bad_length() {
        assert_eq!(
            encode_with_length(0.0, 0.0, 0),
            Err(GeohashError::InvalidHashLength(0))
        );
        assert_eq!(
            encode_with_length(0.0, 0.0, 13),
            Err(GeohashError::InvalidHashLength(13))
        );
    }

    #[test]
    fn test_decode_bounds() -> Result<(), GeohashError> {
        let rect = decode_bounds("w")?;
        assert_eq!(rect.min(), coord! { x: 90.0, y: 0.0 });
        assert_eq!(rect.max(), coord! { x: 135.0, y: 45.0 });

        let rect = decode_bounds("wm3vzbqbvx")?;
        assert!((rect.width() - 360.0 / 2f64.powi(25)).abs() < 1e-12);
        assert!((rect.height() - 180.0 / 2f64.powi(25)).abs() < 1e-12);
        assert!(rect.min().x <= 104.061029 && 104.061029 < rect.max().x);
        Ok(())
    }

    #[test]
    fn test_char_index() {
        assert_eq!(char_index('0'), Ok(0));
        assert_eq!(char_index('b'), Ok(10));
        assert_eq!(char_index('z'), Ok(31));
        assert!(char_index('o').is_err());
    }
}
