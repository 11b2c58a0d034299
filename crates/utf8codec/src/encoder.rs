//! Wide-string → UTF-8 encoder.
//!
//! The input is a sequence of 16-bit code units. A high surrogate followed by
//! a low surrogate combines into one supplementary code point first; any
//! surrogate unit without a valid partner is an encoding error for that
//! single unit and never consumes or corrupts its neighbors.

use alloc::vec::Vec;

use crate::{
    error::EncodeError,
    unicode::{REPLACEMENT_BYTES, combine_pair, is_high_surrogate, is_low_surrogate},
};

/// Iterator over the code points of a wide string.
///
/// Yields `Err` carrying the offending unit and its index for every lone
/// surrogate. A valid pair consumes two units, everything else one.
struct CodePoints<'a> {
    units: &'a [u16],
    index: usize,
}

impl<'a> CodePoints<'a> {
    fn new(units: &'a [u16]) -> Self {
        Self { units, index: 0 }
    }
}

impl Iterator for CodePoints<'_> {
    type Item = Result<u32, EncodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        let unit = *self.units.get(self.index)?;
        let index = self.index;
        self.index += 1;

        if is_high_surrogate(unit) {
            return match self.units.get(self.index) {
                Some(&low) if is_low_surrogate(low) => {
                    self.index += 1;
                    Some(Ok(combine_pair(unit, low)))
                }
                _ => Some(Err(EncodeError::LoneSurrogate { unit, index })),
            };
        }
        if is_low_surrogate(unit) {
            return Some(Err(EncodeError::LoneSurrogate { unit, index }));
        }
        Some(Ok(u32::from(unit)))
    }
}

/// Appends the minimal-length UTF-8 encoding of `cp` to `out`.
///
/// `cp` must be a scalar value; surrogates are screened out before this point.
fn push_utf8(out: &mut Vec<u8>, cp: u32) {
    match cp {
        0..=0x7F => out.push(cp as u8),
        0x80..=0x7FF => {
            out.extend_from_slice(&[0xC0 | (cp >> 6) as u8, 0x80 | (cp & 0x3F) as u8]);
        }
        0x800..=0xFFFF => {
            out.extend_from_slice(&[
                0xE0 | (cp >> 12) as u8,
                0x80 | ((cp >> 6) & 0x3F) as u8,
                0x80 | (cp & 0x3F) as u8,
            ]);
        }
        _ => {
            out.extend_from_slice(&[
                0xF0 | (cp >> 18) as u8,
                0x80 | ((cp >> 12) & 0x3F) as u8,
                0x80 | ((cp >> 6) & 0x3F) as u8,
                0x80 | (cp & 0x3F) as u8,
            ]);
        }
    }
}

/// Encodes a wide string as UTF-8.
///
/// Every lone surrogate half becomes the three-byte encoding of U+FFFD; the
/// call itself never fails. Use [`encode_strict`] to fail instead.
///
/// ```rust
/// let bytes = utf8codec::encode(&[0x0041, 0xD834, 0xDF06]);
/// assert_eq!(bytes, [0x41, 0xF0, 0x9D, 0x8C, 0x86]);
/// ```
#[must_use]
pub fn encode(units: &[u16]) -> Vec<u8> {
    let mut out = Vec::with_capacity(units.len());
    for cp in CodePoints::new(units) {
        match cp {
            Ok(cp) => push_utf8(&mut out, cp),
            Err(_) => out.extend_from_slice(&REPLACEMENT_BYTES),
        }
    }
    out
}

/// Encodes a wide string as UTF-8, failing on the first lone surrogate.
///
/// # Errors
///
/// Returns [`EncodeError::LoneSurrogate`] for the first surrogate unit that
/// is not part of a valid high/low pair. No partial output is produced.
pub fn encode_strict(units: &[u16]) -> Result<Vec<u8>, EncodeError> {
    let mut out = Vec::with_capacity(units.len());
    for cp in CodePoints::new(units) {
        push_utf8(&mut out, cp?);
    }
    Ok(out)
}
