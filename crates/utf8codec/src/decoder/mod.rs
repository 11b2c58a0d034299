//! UTF-8 → wide-string decoder.
//!
//! What it does
//! - Classifies each lead byte into its sequence length and the allowed
//!   range for the first continuation byte, then folds continuation bytes
//!   into an accumulator one at a time.
//! - Applies the WHATWG maximal-subpart rule on malformed input: only the
//!   already-consumed prefix of a broken sequence is replaced by U+FFFD, and
//!   the byte that broke it is reprocessed as a fresh lead byte. Decoding
//!   `E9 00 00` therefore yields U+FFFD followed by two NULs, not three
//!   replacement characters.
//!
//! Invariants
//! - Single forward scan; the cursor never re-reads a consumed error run.
//! - The restricted first-continuation ranges (E0→A0..BF, ED→80..9F,
//!   F0→90..BF, F4→80..8F) reject overlong encodings, encoded surrogates,
//!   and code points above U+10FFFF at the earliest possible byte.
//! - `Start` with no pending accumulator is the only accepting state.

use alloc::vec::Vec;

use crate::{
    error::DecodeError,
    unicode::{REPLACEMENT_UNIT, split_supplementary},
};

#[cfg(test)]
mod tests;

/// Decoder state: between sequences, or inside a multi-byte sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum State {
    /// The next byte is a lead byte.
    #[default]
    Start,
    /// Partway through a multi-byte sequence.
    Continuation {
        /// Code point bits folded in so far.
        acc: u32,
        /// Continuation bytes still expected (1..=3).
        remaining: u8,
        /// Inclusive bounds for the next byte. Restricted after an
        /// E0/ED/F0/F4 lead, plain 0x80..=0xBF afterwards.
        lo: u8,
        hi: u8,
    },
}

/// Outcome of pushing one byte into the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// Byte consumed; a complete scalar value was assembled.
    Scalar(u32),
    /// Byte consumed; the sequence expects more continuation bytes.
    Incomplete,
    /// Byte consumed; it can never begin a sequence (0x80..=0xC1, 0xF5..=0xFF).
    InvalidLead,
    /// Byte NOT consumed; the pending prefix was malformed. The machine has
    /// reset to `Start` and the same byte must be pushed again.
    Rejected,
}

/// Push-based UTF-8 state machine, one byte per step.
#[derive(Debug, Default)]
struct Utf8Decoder {
    state: State,
}

impl Utf8Decoder {
    fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, byte: u8) -> Step {
        match self.state {
            State::Start => match byte {
                0x00..=0x7F => Step::Scalar(u32::from(byte)),
                0xC2..=0xDF => {
                    self.state = State::Continuation {
                        acc: u32::from(byte & 0x1F),
                        remaining: 1,
                        lo: 0x80,
                        hi: 0xBF,
                    };
                    Step::Incomplete
                }
                0xE0..=0xEF => {
                    let (lo, hi) = match byte {
                        0xE0 => (0xA0, 0xBF),
                        0xED => (0x80, 0x9F),
                        _ => (0x80, 0xBF),
                    };
                    self.state = State::Continuation {
                        acc: u32::from(byte & 0x0F),
                        remaining: 2,
                        lo,
                        hi,
                    };
                    Step::Incomplete
                }
                0xF0..=0xF4 => {
                    let (lo, hi) = match byte {
                        0xF0 => (0x90, 0xBF),
                        0xF4 => (0x80, 0x8F),
                        _ => (0x80, 0xBF),
                    };
                    self.state = State::Continuation {
                        acc: u32::from(byte & 0x07),
                        remaining: 3,
                        lo,
                        hi,
                    };
                    Step::Incomplete
                }
                _ => Step::InvalidLead,
            },
            State::Continuation { acc, remaining, lo, hi } => {
                if !(lo..=hi).contains(&byte) {
                    self.state = State::Start;
                    return Step::Rejected;
                }
                let acc = acc << 6 | u32::from(byte & 0x3F);
                if remaining == 1 {
                    self.state = State::Start;
                    Step::Scalar(acc)
                } else {
                    self.state = State::Continuation {
                        acc,
                        remaining: remaining - 1,
                        lo: 0x80,
                        hi: 0xBF,
                    };
                    Step::Incomplete
                }
            }
        }
    }

    /// True if end of input would truncate a pending sequence.
    fn pending(&self) -> bool {
        self.state != State::Start
    }
}

/// Appends `cp` to `out` as one unit or, for supplementary values, a
/// surrogate pair.
fn push_unit(out: &mut Vec<u16>, cp: u32) {
    if let Ok(unit) = u16::try_from(cp) {
        out.push(unit);
    } else {
        let (high, low) = split_supplementary(cp);
        out.push(high);
        out.push(low);
    }
}

/// Decodes a byte sequence into wide-string code units.
///
/// Malformed input never fails: each maximal subpart of an ill-formed
/// sequence becomes one U+FFFD, and supplementary scalar values come out as
/// surrogate pairs. Use [`decode_strict`] to fail instead.
///
/// ```rust
/// assert_eq!(utf8codec::decode(&[0xF0, 0x9D, 0x8C, 0x86]), [0xD834, 0xDF06]);
/// assert_eq!(utf8codec::decode(&[0xE9, 0x00, 0x00]), [0xFFFD, 0x00, 0x00]);
/// ```
#[must_use]
pub fn decode(bytes: &[u8]) -> Vec<u16> {
    let mut out = Vec::with_capacity(bytes.len());
    let mut machine = Utf8Decoder::new();
    let mut i = 0;
    while i < bytes.len() {
        match machine.push(bytes[i]) {
            Step::Scalar(cp) => {
                push_unit(&mut out, cp);
                i += 1;
            }
            Step::Incomplete => i += 1,
            Step::InvalidLead => {
                out.push(REPLACEMENT_UNIT);
                i += 1;
            }
            // Replace the consumed prefix, then retry the same byte as a
            // fresh lead.
            Step::Rejected => out.push(REPLACEMENT_UNIT),
        }
    }
    if machine.pending() {
        out.push(REPLACEMENT_UNIT);
    }
    out
}

/// Decodes a byte sequence into wide-string code units, failing on the first
/// malformed byte.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidLeadByte`] or
/// [`DecodeError::InvalidContinuationByte`] carrying the offending byte and
/// its index, or [`DecodeError::UnexpectedEndOfInput`] when the input stops
/// inside a multi-byte sequence. No partial output is produced.
pub fn decode_strict(bytes: &[u8]) -> Result<Vec<u16>, DecodeError> {
    let mut out = Vec::with_capacity(bytes.len());
    let mut machine = Utf8Decoder::new();
    for (index, &byte) in bytes.iter().enumerate() {
        match machine.push(byte) {
            Step::Scalar(cp) => push_unit(&mut out, cp),
            Step::Incomplete => {}
            Step::InvalidLead => return Err(DecodeError::InvalidLeadByte { byte, index }),
            Step::Rejected => return Err(DecodeError::InvalidContinuationByte { byte, index }),
        }
    }
    if machine.pending() {
        return Err(DecodeError::UnexpectedEndOfInput { index: bytes.len() });
    }
    Ok(out)
}
