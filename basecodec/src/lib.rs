//! Binary-to-text transcoding for the RFC 4648 family of encodings and
//! close relatives.
//!
//! One generic bit-packing engine serves every variant; each standard is an
//! [`Alphabet`] descriptor holding its symbol table, reverse lookup, block
//! geometry, and padding policy. The catalog in [`variants`] covers base16
//! (both cases), base32 (RFC 4648, extended hex, Crockford), and base64
//! (standard, URL-safe, URL-safe unpadded).
//!
//! Encoding always succeeds. Decoding classifies malformed input into one of
//! three [`DecodeError`] categories: a bad or misplaced character, a symbol
//! count that cannot form whole bytes, or incorrect padding.
//!
//! ```
//! use basecodec::{BASE64, BASE32_CROCKFORD, DecodeError};
//!
//! assert_eq!(BASE64.encode(b"foobar"), "Zm9vYmFy");
//! assert_eq!(BASE64.decode("Zm9vYmFy").as_deref(), Ok(b"foobar".as_slice()));
//!
//! assert_eq!(BASE32_CROCKFORD.encode(b"Hello World"), "91JPRV3F41BPYWKCCG");
//! assert_eq!(BASE64.decode("Zm9v!"), Err(DecodeError::Symbol { index: 4, byte: b'!' }));
//! ```
//!
//! Output goes into any [`Sink`]: `String` and `Vec<u8>` for growable
//! results, `SmallVec`/`ArrayVec` for stack buffers, or a raw `&mut [u8]`
//! through the `*_slice` methods on [`Alphabet`].

// for benchmarks
#[cfg(test)]
use criterion as _;

mod alphabet;
mod engine;
mod error;
mod sink;
pub mod variants;


pub use alphabet::{Alphabet, Padding};
pub use error::{BufferTooSmall, DecodeError, SliceDecodeError};
pub use sink::{FixedSink, Sink};
pub use variants::{
    BASE32, BASE32_CROCKFORD, BASE32_HEX, BASE64, BASE64_URL, BASE64_URL_UNPADDED, HEX_LOWER,
    HEX_UPPER,
};
