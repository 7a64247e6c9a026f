//! The catalog of standard alphabet descriptors.
//!
//! Each variant is one [`Alphabet`] value; pick one and call the encode and
//! decode methods on it. All of them are plain data built at compile time,
//! safe to share across threads.

use crate::alphabet::{Alphabet, Padding};

/// Base16 with lowercase `a`-`f`, RFC 4648 §8. Decoding accepts both cases.
pub static HEX_LOWER: Alphabet = Alphabet::new(b"0123456789abcdef", 4).case_insensitive();

/// Base16 with uppercase `A`-`F`, RFC 4648 §8. Decoding accepts both cases.
pub static HEX_UPPER: Alphabet = Alphabet::new(b"0123456789ABCDEF", 4).case_insensitive();

/// Base32 per RFC 4648 §6: `A`-`Z` plus digits `2`-`7`, padded with `=`.
pub static BASE32: Alphabet = Alphabet::new(b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567", 5)
    .case_insensitive()
    .padding(Padding::Required(b'='));

/// Base32 with the "extended hex" alphabet per RFC 4648 §7: `0`-`9` plus
/// `A`-`V`, padded with `=`.
pub static BASE32_HEX: Alphabet = Alphabet::new(b"0123456789ABCDEFGHIJKLMNOPQRSTUV", 5)
    .case_insensitive()
    .padding(Padding::Required(b'='));

/// Douglas Crockford's base32: unpadded, case-insensitive, dashes ignored
/// anywhere in the input.
///
/// The letters `I`, `L`, and `O` are absent from the symbol table but decode
/// as the digits they resemble. `U` is reserved by the standard for
/// checksums and is rejected as data.
pub static BASE32_CROCKFORD: Alphabet = Alphabet::new(b"0123456789ABCDEFGHJKMNPQRSTVWXYZ", 5)
    .case_insensitive()
    .alias(b"Oo", b'0')
    .alias(b"IiLl", b'1')
    .ignore(b"-");

/// Base64 per RFC 4648 §4: `+` and `/` symbols, padded with `=`.
/// Case-sensitive, like all base64 variants.
pub static BASE64: Alphabet = Alphabet::new(
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/",
    6,
)
.padding(Padding::Required(b'='));

/// URL- and filename-safe base64 per RFC 4648 §5: `-` and `_` symbols,
/// padded with `=`.
pub static BASE64_URL: Alphabet = Alphabet::new(
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_",
    6,
)
.padding(Padding::Required(b'='));

/// URL-safe base64 without padding. Encoding emits no pad symbols; decoding
/// tolerates padding but it must exactly complete the final block.
pub static BASE64_URL_UNPADDED: Alphabet = Alphabet::new(
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_",
    6,
)
.padding(Padding::Optional(b'='));
