//! Error types for decoding and for the fixed-buffer call surface.

/// Error classifying why encoded text failed to decode.
///
/// Exactly one category applies per failed decode; encoding cannot fail.
/// Decoding is pure, so retrying is meaningless and the only recovery is
/// fixing the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// A character that is neither an alphabet symbol, an ignored character,
    /// nor a pad symbol in a position where padding may appear.
    #[error("invalid symbol {byte:#04x} at index {index}")]
    Symbol {
        /// Position of the offending byte in the input.
        index: usize,
        /// The offending byte.
        byte: u8,
    },
    /// The count of data symbols cannot represent a whole number of bytes.
    #[error("symbol count does not map to a whole number of bytes")]
    Length,
    /// Pad symbols are present, absent, or counted wrongly for the
    /// alphabet's padding policy.
    #[error("pad symbols do not match the expected padding")]
    Padding,
}

/// The output buffer is too small for the encoded text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("output buffer too small for encoded data")]
pub struct BufferTooSmall;

/// Error decoding into a fixed-size buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SliceDecodeError {
    /// The input failed to decode.
    #[error(transparent)]
    Decode(#[from] DecodeError),
    /// The output buffer is smaller than
    /// [`decoded_max_size`](crate::Alphabet::decoded_max_size) of the input.
    #[error("output buffer too small for decoded data")]
    BufferTooSmall,
}
