//! Alphabet descriptors and reverse-lookup table construction.
//!
//! An [`Alphabet`] fully describes one encoding standard: the ordered symbol
//! table, the reverse lookup built from it, the block geometry derived from
//! the bit width, and the padding policy. Descriptors are built in const
//! context so the standard variants can live in `static`s; construction
//! mistakes (duplicate symbols, colliding pad characters) fail compilation.
//!
//! Table construction is deliberately separate from the bit-packing engine in
//! [`engine`](crate::engine) so it can be tested on its own.

/// Reverse table entry for a byte that is not part of the input alphabet.
pub(crate) const INVALID: u8 = 0xFF;

/// Reverse table entry for a byte that is skipped during decoding.
pub(crate) const IGNORED: u8 = 0xFE;

/// Reverse table entry for the pad symbol.
pub(crate) const PAD: u8 = 0xFD;

/// Whether a reverse table entry carries a symbol's bit value.
///
/// Bit values are at most 6 bits wide, so they never collide with sentinels.
pub(crate) const fn is_value(entry: u8) -> bool {
    entry < 0x40
}

/// Pad symbol and policy for one alphabet.
///
/// The pad symbol only exists together with a policy that uses it, so a
/// descriptor cannot require padding without saying what the pad symbol is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Padding {
    /// The alphabet has no pad symbol. Encoded output ends after the last
    /// data symbol and pad characters in the input are invalid symbols.
    None,
    /// Encoded output is padded to the block boundary with this symbol, and
    /// decoded input must carry exactly that padding.
    Required(u8),
    /// Encoded output is unpadded, but decoded input may carry padding as
    /// long as it exactly completes the final block.
    Optional(u8),
}

/// Immutable descriptor of one binary-to-text encoding standard.
///
/// Built once, usually as a `static`, and shared freely: it has no interior
/// mutability, so any number of threads may encode and decode with the same
/// descriptor concurrently.
pub struct Alphabet {
    /// Forward table, `2^bits` ASCII symbols, index = bit value.
    pub(crate) symbols: &'static [u8],
    /// Reverse table over all byte values, bit value or sentinel.
    pub(crate) decode: [u8; 256],
    /// Bits encoded per symbol: 4 (hex), 5 (base32), or 6 (base64).
    pub(crate) bits: usize,
    /// Bytes per block, the smallest whole-bit grouping.
    pub(crate) block_bytes: usize,
    /// Symbols per block. `block_symbols * bits == block_bytes * 8`.
    pub(crate) block_symbols: usize,
    pub(crate) padding: Padding,
}

impl Alphabet {
    /// Creates a descriptor from its defining symbol string.
    ///
    /// The reverse table initially maps exactly the given symbols; use the
    /// builder methods to add case folding, aliases, ignored characters, and
    /// a padding policy.
    ///
    /// # Panics
    ///
    /// Panics (at const evaluation time for `static` descriptors) if the
    /// table length is not `2^bits` or a symbol is duplicated or non-ASCII.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)] // symbol indexes fit 6 bits
    pub const fn new(symbols: &'static [u8], bits: usize) -> Self {
        assert!(bits >= 1 && bits <= 6, "symbols must encode 1 to 6 bits");
        assert!(
            symbols.len() == 1 << bits,
            "symbol table length must be 2^bits"
        );

        let mut decode = [INVALID; 256];
        let mut index = 0;
        while index < symbols.len() {
            let symbol = symbols[index];
            assert!(symbol.is_ascii(), "alphabet symbols must be ASCII");
            assert!(
                decode[symbol as usize] == INVALID,
                "duplicate symbol in alphabet"
            );
            decode[symbol as usize] = index as u8;
            index += 1;
        }

        // smallest symbol count that covers whole bytes
        let mut block_symbols = 1;
        while (block_symbols * bits) % 8 != 0 {
            block_symbols += 1;
        }

        Self {
            symbols,
            decode,
            bits,
            block_bytes: block_symbols * bits / 8,
            block_symbols,
            padding: Padding::None,
        }
    }

    /// Makes decoding accept both cases of every letter in the alphabet.
    ///
    /// Encoding is unaffected and keeps producing the defining case.
    #[must_use]
    pub const fn case_insensitive(mut self) -> Self {
        let mut upper = b'A';
        while upper <= b'Z' {
            let lower = upper.to_ascii_lowercase();
            let from_upper = self.decode[upper as usize];
            let from_lower = self.decode[lower as usize];
            if is_value(from_upper) && from_lower == INVALID {
                self.decode[lower as usize] = from_upper;
            } else if is_value(from_lower) && from_upper == INVALID {
                self.decode[upper as usize] = from_lower;
            }
            upper += 1;
        }
        self
    }

    /// Maps extra input characters to the bit value of a canonical symbol.
    ///
    /// Used for alphabets that deliberately fold look-alike characters, such
    /// as Crockford's `O` reading as `0`. Characters the standard reserves
    /// (Crockford's checksum-only `U`) are simply never mapped and stay
    /// invalid.
    ///
    /// # Panics
    ///
    /// Panics if `canonical` is not in the alphabet or an alias character
    /// already has a meaning.
    #[must_use]
    pub const fn alias(mut self, symbols: &[u8], canonical: u8) -> Self {
        let value = self.decode[canonical as usize];
        assert!(is_value(value), "alias canonical symbol must be in the alphabet");

        let mut index = 0;
        while index < symbols.len() {
            let symbol = symbols[index];
            assert!(
                self.decode[symbol as usize] == INVALID,
                "alias symbol already has a meaning"
            );
            self.decode[symbol as usize] = value;
            index += 1;
        }
        self
    }

    /// Marks characters to be skipped during decoding.
    ///
    /// Ignored characters may appear anywhere in the input, never count
    /// toward length validation, and are not produced when encoding.
    ///
    /// # Panics
    ///
    /// Panics if a character already has a meaning.
    #[must_use]
    pub const fn ignore(mut self, symbols: &[u8]) -> Self {
        let mut index = 0;
        while index < symbols.len() {
            let symbol = symbols[index];
            assert!(
                self.decode[symbol as usize] == INVALID,
                "ignored symbol already has a meaning"
            );
            self.decode[symbol as usize] = IGNORED;
            index += 1;
        }
        self
    }

    /// Sets the padding policy.
    ///
    /// # Panics
    ///
    /// Panics if the pad symbol already has a meaning.
    #[must_use]
    pub const fn padding(mut self, padding: Padding) -> Self {
        match padding {
            Padding::None => {}
            Padding::Required(pad) | Padding::Optional(pad) => {
                assert!(
                    self.decode[pad as usize] == INVALID,
                    "pad symbol must not collide with the alphabet"
                );
                self.decode[pad as usize] = PAD;
            }
        }
        self.padding = padding;
        self
    }

    /// Bits of data carried by one symbol.
    #[must_use]
    pub const fn bits_per_symbol(&self) -> usize {
        self.bits
    }

    /// Smallest `(bytes, symbols)` pair with no fractional bits.
    #[must_use]
    pub const fn block_sizes(&self) -> (usize, usize) {
        (self.block_bytes, self.block_symbols)
    }

    /// Reverse table lookup for one input byte.
    pub(crate) const fn lookup(&self, byte: u8) -> u8 {
        self.decode[byte as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variants::*;

    static ALL: [&Alphabet; 8] = [
        &HEX_LOWER,
        &HEX_UPPER,
        &BASE32,
        &BASE32_HEX,
        &BASE32_CROCKFORD,
        &BASE64,
        &BASE64_URL,
        &BASE64_URL_UNPADDED,
    ];

    #[test]
    fn block_geometry_is_whole_bits() {
        for alphabet in ALL {
            let (bytes, symbols) = alphabet.block_sizes();
            assert_eq!(
                symbols * alphabet.bits_per_symbol(),
                bytes * 8,
                "block must cover whole bytes"
            );
            assert_eq!(
                alphabet.symbols.len(),
                1 << alphabet.bits_per_symbol(),
                "forward table must have one symbol per bit value"
            );
        }
    }

    #[test]
    fn expected_block_sizes() {
        assert_eq!(HEX_LOWER.block_sizes(), (1, 2));
        assert_eq!(BASE32.block_sizes(), (5, 8));
        assert_eq!(BASE32_CROCKFORD.block_sizes(), (5, 8));
        assert_eq!(BASE64.block_sizes(), (3, 4));
    }

    #[test]
    fn forward_table_round_trips_through_reverse() {
        for alphabet in ALL {
            for (value, &symbol) in alphabet.symbols.iter().enumerate() {
                assert_eq!(
                    alphabet.lookup(symbol),
                    value as u8,
                    "symbol {:?} must map back to its index",
                    symbol as char
                );
            }
        }
    }

    #[test]
    fn case_insensitive_tables_accept_both_cases() {
        for alphabet in [&HEX_LOWER, &HEX_UPPER, &BASE32, &BASE32_HEX, &BASE32_CROCKFORD] {
            for &symbol in alphabet.symbols {
                if symbol.is_ascii_alphabetic() {
                    assert_eq!(
                        alphabet.lookup(symbol.to_ascii_uppercase()),
                        alphabet.lookup(symbol.to_ascii_lowercase()),
                        "letter case must not matter for {:?}",
                        symbol as char
                    );
                }
            }
        }
    }

    #[test]
    fn base64_tables_are_case_sensitive() {
        assert_ne!(BASE64.lookup(b'A'), BASE64.lookup(b'a'));
        assert_ne!(BASE64_URL.lookup(b'Z'), BASE64_URL.lookup(b'z'));
    }

    #[test]
    fn crockford_aliases_and_exclusions() {
        for alias in [b'O', b'o'] {
            assert_eq!(BASE32_CROCKFORD.lookup(alias), BASE32_CROCKFORD.lookup(b'0'));
        }
        for alias in [b'I', b'i', b'L', b'l'] {
            assert_eq!(BASE32_CROCKFORD.lookup(alias), BASE32_CROCKFORD.lookup(b'1'));
        }

        // reserved for checksums, never valid data
        assert_eq!(BASE32_CROCKFORD.lookup(b'U'), INVALID);
        assert_eq!(BASE32_CROCKFORD.lookup(b'u'), INVALID);

        assert_eq!(BASE32_CROCKFORD.lookup(b'-'), IGNORED);
    }

    #[test]
    fn pad_symbol_is_tracked_in_reverse_table() {
        assert_eq!(BASE32.lookup(b'='), PAD);
        assert_eq!(BASE64_URL_UNPADDED.lookup(b'='), PAD);
        assert_eq!(HEX_LOWER.lookup(b'='), INVALID);
        assert_eq!(BASE32_CROCKFORD.lookup(b'='), INVALID);
    }

    #[test]
    fn unmapped_bytes_stay_invalid() {
        assert_eq!(BASE32.lookup(b'0'), INVALID);
        assert_eq!(BASE32.lookup(b' '), INVALID);
        assert_eq!(BASE64.lookup(b'-'), INVALID);
        assert_eq!(BASE64_URL.lookup(b'+'), INVALID);
        assert_eq!(HEX_LOWER.lookup(b'g'), INVALID);
        assert_eq!(HEX_LOWER.lookup(0xFF), INVALID);
    }
}
