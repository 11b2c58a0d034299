use thiserror::Error;

/// Error returned by [`encode_strict`](crate::encode_strict).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    /// A surrogate code unit that is not part of a valid high/low pair.
    #[error("lone surrogate U+{unit:04X} at unit index {index} is not a scalar value")]
    LoneSurrogate {
        /// The offending code unit.
        unit: u16,
        /// Index of the unit in the input.
        index: usize,
    },
}

/// Error returned by [`decode_strict`](crate::decode_strict).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// A byte that can never begin a UTF-8 sequence (0x80..=0xC1, 0xF5..=0xFF).
    #[error("invalid lead byte 0x{byte:02X} at byte index {index}")]
    InvalidLeadByte {
        /// The offending byte.
        byte: u8,
        /// Index of the byte in the input.
        index: usize,
    },
    /// A byte outside the range a pending multi-byte sequence allows next.
    ///
    /// Covers both plain non-continuation bytes and the restricted
    /// first-continuation ranges that reject overlong encodings, encoded
    /// surrogates, and code points above U+10FFFF.
    #[error("invalid continuation byte 0x{byte:02X} at byte index {index}")]
    InvalidContinuationByte {
        /// The offending byte.
        byte: u8,
        /// Index of the byte in the input.
        index: usize,
    },
    /// Input ended in the middle of a multi-byte sequence.
    #[error("unexpected end of input at byte index {index}")]
    UnexpectedEndOfInput {
        /// Length of the input, where the missing continuation byte would be.
        index: usize,
    },
}
