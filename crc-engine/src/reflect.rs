//! Bit order reversal within a fixed width.

/// Reverses the order of the low `bits` bits of `value`.
///
/// Bits above position `bits - 1` are ignored, and are zero in the result.
/// Widths above 64 reverse the whole value, a width of zero yields zero.
///
/// ```
/// use crc_engine::reflect::reflect;
///
/// assert_eq!(reflect(0b0001, 4), 0b1000);
/// assert_eq!(reflect(0xF0_0001, 4), 0b1000);
/// assert_eq!(reflect(1, 64), 1 << 63);
/// ```
#[must_use]
pub const fn reflect(value: u64, bits: u8) -> u64 {
    match bits {
        0 => 0,
        // The bits above the width end up below bit `64 - bits` and are shifted out.
        1..=63 => value.reverse_bits() >> (64 - bits),
        _ => value.reverse_bits(),
    }
}

/// Reverses the bit order of a single byte.
#[must_use]
pub const fn reflect_byte(byte: u8) -> u8 {
    byte.reverse_bits()
}
