//! The bit-packing encoder, bit-parsing decoder, and size calculators.
//!
//! Everything here is generic over the [`Alphabet`] descriptor: input bytes
//! are treated as a big-endian bit string and sliced into
//! `bits_per_symbol`-wide fields, most significant first. Decoding reverses
//! that, after classifying the input and validating symbol and pad counts
//! against the alphabet's padding policy.

use crate::alphabet::{self, Alphabet, Padding};
use crate::error::{BufferTooSmall, DecodeError, SliceDecodeError};
use crate::sink::{FixedSink, Sink};

impl Alphabet {
    /// Exact length of the encoded text for `len` input bytes.
    #[must_use]
    pub const fn encoded_size(&self, len: usize) -> usize {
        match self.padding {
            // every block is written in full, pad symbols included
            Padding::Required(_) => len.div_ceil(self.block_bytes) * self.block_symbols,
            Padding::None | Padding::Optional(_) => (len * 8).div_ceil(self.bits),
        }
    }

    /// Upper bound on the byte count decodable from `len` input characters.
    ///
    /// This is a pre-sizing bound, not a validity check: ignored characters
    /// and pad symbols in the input can make the actual decoded length
    /// smaller.
    #[must_use]
    pub const fn decoded_max_size(&self, len: usize) -> usize {
        match self.padding {
            // valid padded input is always whole blocks; a trailing partial
            // block can only be rejected, so it contributes nothing
            Padding::Required(_) => len / self.block_symbols * self.block_bytes,
            Padding::None | Padding::Optional(_) => len * self.bits / 8,
        }
    }

    /// Number of whole bytes represented by a final block of `remainder`
    /// data symbols, or [`None`] if no byte count encodes to that many
    /// symbols.
    const fn remainder_bytes(&self, remainder: usize) -> Option<usize> {
        let bytes = remainder * self.bits / 8;
        if (bytes * 8).div_ceil(self.bits) == remainder {
            Some(bytes)
        } else {
            None
        }
    }

    /// Encodes `bytes`, returning the text as a [`String`].
    ///
    /// Encoding cannot fail: every byte sequence is representable.
    #[must_use]
    pub fn encode(&self, bytes: impl AsRef<[u8]>) -> String {
        let bytes = bytes.as_ref();
        let mut result = String::with_capacity(self.encoded_size(bytes.len()));
        self.encode_to(&mut result, bytes);
        result
    }

    /// Encodes `bytes` into `sink`.
    ///
    /// Writes exactly [`encoded_size`](Self::encoded_size) of the input
    /// length, reserving that much up front.
    pub fn encode_to<S: Sink>(&self, sink: &mut S, bytes: &[u8]) {
        sink.reserve(self.encoded_size(bytes.len()));

        let mask = (1 << self.bits) - 1;
        let mut accumulator: usize = 0;
        let mut bits = 0;
        let mut emitted = 0;
        for &byte in bytes {
            accumulator = (accumulator << 8) | usize::from(byte);
            bits += 8;
            while bits >= self.bits {
                bits -= self.bits;
                sink.push(self.symbols[(accumulator >> bits) & mask]);
                emitted += 1;
            }
            accumulator &= (1 << bits) - 1;
        }

        if bits > 0 {
            // final partial symbol, low-order bits zero-filled
            sink.push(self.symbols[(accumulator << (self.bits - bits)) & mask]);
            emitted += 1;
        }

        if let Padding::Required(pad) = self.padding {
            while emitted % self.block_symbols != 0 {
                sink.push(pad);
                emitted += 1;
            }
        }
    }

    /// Encodes `bytes` into the start of `out`, returning the text length.
    ///
    /// If capacity remains past the output, a NUL terminator is written
    /// after it (not counted in the returned length), so the buffer can
    /// double as a C-style string.
    ///
    /// # Errors
    ///
    /// Returns [`BufferTooSmall`] if `out` is shorter than
    /// [`encoded_size`](Self::encoded_size) of the input; `out` is untouched
    /// in that case.
    pub fn encode_slice(&self, bytes: &[u8], out: &mut [u8]) -> Result<usize, BufferTooSmall> {
        if out.len() < self.encoded_size(bytes.len()) {
            return Err(BufferTooSmall);
        }

        let mut sink = FixedSink::new(out);
        self.encode_to(&mut sink, bytes);
        sink.terminate();
        Ok(sink.written())
    }

    /// Decodes encoded text, returning the bytes as a [`Vec<u8>`].
    ///
    /// # Errors
    ///
    /// Returns the [`DecodeError`] classifying the first problem found.
    pub fn decode(&self, input: impl AsRef<[u8]>) -> Result<Vec<u8>, DecodeError> {
        let input = input.as_ref();
        let mut result = Vec::new();
        self.decode_to(&mut result, input)?;
        Ok(result)
    }

    /// Decodes encoded text into `sink`.
    ///
    /// The input is validated in full before anything is written, so the
    /// sink is untouched when an error is returned.
    ///
    /// # Errors
    ///
    /// - [`DecodeError::Symbol`]: a character that is not a symbol, an
    ///   ignored character, or well-placed padding. Data after a pad symbol
    ///   reports the data character.
    /// - [`DecodeError::Length`]: the data symbol count cannot represent a
    ///   whole number of bytes.
    /// - [`DecodeError::Padding`]: pad symbols present, absent, or counted
    ///   wrongly for the padding policy.
    #[expect(clippy::cast_possible_truncation)] // bytes are taken 8 bits at a time
    pub fn decode_to<S: Sink>(&self, sink: &mut S, input: &[u8]) -> Result<(), DecodeError> {
        let mut data_count = 0;
        let mut pad_count = 0;
        for (index, &byte) in input.iter().enumerate() {
            match self.lookup(byte) {
                alphabet::IGNORED => {}
                alphabet::PAD => pad_count += 1,
                alphabet::INVALID => return Err(DecodeError::Symbol { index, byte }),
                _ => {
                    if pad_count > 0 {
                        // padding must be a contiguous suffix
                        return Err(DecodeError::Symbol { index, byte });
                    }
                    data_count += 1;
                }
            }
        }

        let decoded_len = self.check_lengths(data_count, pad_count)?;

        sink.reserve(decoded_len);
        let mut accumulator: usize = 0;
        let mut bits = 0;
        for &byte in input {
            let value = self.lookup(byte);
            if !alphabet::is_value(value) {
                continue;
            }
            accumulator = (accumulator << self.bits) | usize::from(value);
            bits += self.bits;
            if bits >= 8 {
                bits -= 8;
                sink.push((accumulator >> bits) as u8);
                accumulator &= (1 << bits) - 1;
            }
        }
        // leftover low-order bits are the encoder's zero fill; they are
        // dropped without checking, matching the lenient reference behavior
        Ok(())
    }

    /// Decodes encoded text into the start of `out`, returning the byte
    /// count.
    ///
    /// # Errors
    ///
    /// Returns [`SliceDecodeError::BufferTooSmall`] if `out` is shorter than
    /// [`decoded_max_size`](Self::decoded_max_size) of the input, before
    /// anything is written. Decode failures are forwarded as
    /// [`SliceDecodeError::Decode`].
    pub fn decode_slice(&self, input: &[u8], out: &mut [u8]) -> Result<usize, SliceDecodeError> {
        if out.len() < self.decoded_max_size(input.len()) {
            return Err(SliceDecodeError::BufferTooSmall);
        }

        let mut sink = FixedSink::new(out);
        self.decode_to(&mut sink, input)?;
        Ok(sink.written())
    }

    /// Validates data and pad symbol counts, returning the decoded byte
    /// count.
    fn check_lengths(&self, data_count: usize, pad_count: usize) -> Result<usize, DecodeError> {
        match self.padding {
            Padding::None => self.check_unpadded(data_count, pad_count),
            Padding::Required(_) => self.check_padded(data_count, pad_count),
            Padding::Optional(_) => {
                if pad_count == 0 {
                    self.check_unpadded(data_count, pad_count)
                } else {
                    self.check_padded(data_count, pad_count)
                }
            }
        }
    }

    fn check_unpadded(&self, data_count: usize, pad_count: usize) -> Result<usize, DecodeError> {
        debug_assert_eq!(pad_count, 0, "pad symbols classify as invalid here");

        let remainder = data_count % self.block_symbols;
        match self.remainder_bytes(remainder) {
            Some(bytes) => Ok(data_count / self.block_symbols * self.block_bytes + bytes),
            None => Err(DecodeError::Length),
        }
    }

    fn check_padded(&self, data_count: usize, pad_count: usize) -> Result<usize, DecodeError> {
        if (data_count + pad_count) % self.block_symbols != 0 {
            return Err(DecodeError::Padding);
        }

        let remainder = data_count % self.block_symbols;
        let Some(bytes) = self.remainder_bytes(remainder) else {
            return Err(DecodeError::Length);
        };

        let expected_pad = (self.block_symbols - remainder) % self.block_symbols;
        if pad_count != expected_pad {
            return Err(DecodeError::Padding);
        }

        Ok(data_count / self.block_symbols * self.block_bytes + bytes)
    }
}
