/// Maximum number of bits a [`BitFraction`] can hold.
pub const MAX_FRACTION_BITS: u8 = 64;

/// A fixed-length binary fraction, most significant bit first.
///
/// Records the sequence of left/right choices taken while bisecting a bounded interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BitFraction {
    bits: u64,
    len: u8,
}

impl BitFraction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one bit as the new least significant position.
    ///
    /// Callers keep `len` below [`MAX_FRACTION_BITS`].
    pub(crate) fn push(&mut self, bit: bool) {
        debug_assert!(self.len < MAX_FRACTION_BITS);
        self.bits = (self.bits << 1) | bit as u64;
        self.len += 1;
    }

    /// Unchecked form of [`BitFraction::get`]; `index` must be below `len`.
    pub(crate) fn bit(&self, index: usize) -> bool {
        debug_assert!(index < self.len as usize);
        (self.bits >> (self.len as usize - 1 - index)) & 1 == 1
    }

    /// Returns the bit at `index`, counting from the most significant, or `None` past
    /// the end.
    pub fn get(&self, index: usize) -> Option<bool> {
        (index < self.len()).then(|| self.bit(index))
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len()).map(|i| self.bit(i))
    }
}

/// Bisects `[low, high)` `rounds` times, recording which half `value` falls in.
///
/// A value equal to the midpoint goes to the upper half. The value is not clamped;
/// callers validate the range first.
pub fn quantize(value: f64, mut low: f64, mut high: f64, rounds: u8) -> BitFraction {
    let rounds = rounds.min(MAX_FRACTION_BITS);
    let mut fraction = BitFraction::new();
    for _ in 0..rounds {
        let mid = (low + high) / 2.0;
        if value >= mid {
            fraction.push(true);
            low = mid;
        } else {
            fraction.push(false);
            high = mid;
        }
    }
    fraction
}

/// Replays `bits` over `[low, high)` and returns the narrowest interval reached.
pub fn dequantize_interval(bits: &BitFraction, mut low: f64, mut high: f64) -> (f64, f64) {
    for bit in bits.iter() {
        let mid = (low + high) / 2.0;
        if bit {
            low = mid;
        } else {
            high = mid;
        }
    }
    (low, high)
}

/// Midpoint of the interval resolved by `bits`.
///
/// Lossy: the result is the center of the cell, not the value originally quantized.
pub fn dequantize(bits: &BitFraction, low: f64, high: f64) -> f64 {
    let (low, high) = dequantize_interval(bits, low, high);
    (low + high) / 2.0
}
