//! UTF-8 encoder/decoder for wide (16-bit code unit) strings.
//!
//! [`encode`] turns a sequence of UTF-16-style code units into UTF-8 bytes;
//! [`decode`] turns an arbitrary byte sequence back into code units. Both are
//! pure, stateless functions, and both follow the WHATWG replacement policy:
//! a lone surrogate half on the encode side, or a malformed byte run on the
//! decode side, becomes U+FFFD instead of failing the call. The decoder
//! replaces exactly the maximal subpart of each malformed sequence, so a byte
//! that merely *broke* a sequence is reprocessed as a fresh lead byte.
//!
//! The stricter variants [`encode_strict`] and [`decode_strict`] fail on the
//! first offending unit or byte instead, with no partial output.
//!
//! ```rust
//! use utf8codec::{decode, encode};
//!
//! // "𝌆" as a surrogate pair, plus a lone high surrogate.
//! let bytes = encode(&[0xD834, 0xDF06, 0xD800]);
//! assert_eq!(bytes, [0xF0, 0x9D, 0x8C, 0x86, 0xEF, 0xBF, 0xBD]);
//!
//! // Truncated four-byte sequence: one replacement character.
//! assert_eq!(decode(&[0xF0, 0x9D]), [0xFFFD]);
//! ```

#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod decoder;
mod encoder;
mod error;
mod unicode;


pub use decoder::{decode, decode_strict};
pub use encoder::{encode, encode_strict};
pub use error::{DecodeError, EncodeError};
