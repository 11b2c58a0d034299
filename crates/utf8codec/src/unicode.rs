//! Shared scalar-value classification and the replacement constants.

/// U+FFFD REPLACEMENT CHARACTER as a 16-bit code unit.
pub(crate) const REPLACEMENT_UNIT: u16 = 0xFFFD;

/// The UTF-8 encoding of U+FFFD, substituted for each erroneous unit.
pub(crate) const REPLACEMENT_BYTES: [u8; 3] = [0xEF, 0xBF, 0xBD];

pub(crate) const fn is_high_surrogate(unit: u16) -> bool {
    matches!(unit, 0xD800..=0xDBFF)
}

pub(crate) const fn is_low_surrogate(unit: u16) -> bool {
    matches!(unit, 0xDC00..=0xDFFF)
}

/// Combines a high/low surrogate pair into one supplementary code point.
pub(crate) const fn combine_pair(high: u16, low: u16) -> u32 {
    ((high as u32 - 0xD800) << 10) + (low as u32 - 0xDC00) + 0x1_0000
}

/// Splits a supplementary code point back into its surrogate pair.
///
/// Inverse of [`combine_pair`]; `cp` must be in 0x10000..=0x10FFFF.
pub(crate) const fn split_supplementary(cp: u32) -> (u16, u16) {
    let v = cp - 0x1_0000;
    (0xD800 + (v >> 10) as u16, 0xDC00 + (v & 0x3FF) as u16)
}

/// Length of the minimal UTF-8 encoding of a scalar value.
#[cfg(test)]
pub(crate) const fn encoded_len(cp: u32) -> usize {
    match cp {
        0..=0x7F => 1,
        0x80..=0x7FF => 2,
        0x800..=0xFFFF => 3,
        _ => 4,
    }
}
