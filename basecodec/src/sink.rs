//! Output buffer abstraction for the transcoding engine.
//!
//! The engine writes symbols and bytes through the [`Sink`] trait rather than
//! into a concrete container. Growable containers ([`Vec<u8>`], [`String`],
//! [`SmallVec`]) implement it directly; fixed-capacity output goes through
//! [`ArrayVec`] or [`FixedSink`] over a raw byte slice.
//!
//! The engine always calls [`reserve`](Sink::reserve) with the exact output
//! size (or, for decoding, the final byte count) before writing, so a
//! fixed-capacity sink sized via [`encoded_size`](crate::Alphabet::encoded_size)
//! or [`decoded_max_size`](crate::Alphabet::decoded_max_size) never sees a
//! push past its capacity.

use arrayvec::ArrayVec;
use smallvec::SmallVec;

/// A linear byte buffer the engine can append to.
///
/// Output is appended after any existing content; callers that reuse a sink
/// across calls are expected to [`truncate`](Sink::truncate) it themselves.
pub trait Sink {
    /// Ensures space for `additional` more bytes.
    ///
    /// Fixed-capacity implementations instead assert that the space exists,
    /// since they cannot grow.
    fn reserve(&mut self, additional: usize);

    /// Appends one byte.
    fn push(&mut self, byte: u8);

    /// Current number of bytes in the sink.
    fn len(&self) -> usize;

    /// Whether the sink currently holds no bytes.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Shortens the sink to `len` bytes. No effect if already shorter.
    fn truncate(&mut self, len: usize);
}

impl Sink for Vec<u8> {
    fn reserve(&mut self, additional: usize) {
        Vec::reserve(self, additional);
    }

    fn push(&mut self, byte: u8) {
        Vec::push(self, byte);
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn truncate(&mut self, len: usize) {
        Vec::truncate(self, len);
    }
}

/// Encoded symbols are ASCII, so a [`String`] sink stays valid UTF-8 as long
/// as it is only written through the engine.
impl Sink for String {
    fn reserve(&mut self, additional: usize) {
        String::reserve(self, additional);
    }

    fn push(&mut self, byte: u8) {
        String::push(self, char::from(byte));
    }

    fn len(&self) -> usize {
        String::len(self)
    }

    fn truncate(&mut self, len: usize) {
        String::truncate(self, len);
    }
}

impl<A: smallvec::Array<Item = u8>> Sink for SmallVec<A> {
    fn reserve(&mut self, additional: usize) {
        SmallVec::reserve(self, additional);
    }

    fn push(&mut self, byte: u8) {
        SmallVec::push(self, byte);
    }

    fn len(&self) -> usize {
        SmallVec::len(self)
    }

    fn truncate(&mut self, len: usize) {
        SmallVec::truncate(self, len);
    }
}

impl<const CAP: usize> Sink for ArrayVec<u8, CAP> {
    fn reserve(&mut self, additional: usize) {
        assert!(
            additional <= self.remaining_capacity(),
            "array sink capacity too small for output"
        );
    }

    fn push(&mut self, byte: u8) {
        ArrayVec::push(self, byte);
    }

    fn len(&self) -> usize {
        ArrayVec::len(self)
    }

    fn truncate(&mut self, len: usize) {
        ArrayVec::truncate(self, len);
    }
}

/// Fixed-capacity sink over a raw byte slice.
///
/// Tracks how much of the slice has been written; the rest of the slice is
/// untouched. Used by the `*_slice` methods on
/// [`Alphabet`](crate::Alphabet), which size-check the slice up front.
pub struct FixedSink<'a> {
    buf: &'a mut [u8],
    len: usize,
}

impl<'a> FixedSink<'a> {
    /// Creates a sink writing to the start of `buf`.
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, len: 0 }
    }

    /// Number of bytes written so far.
    #[must_use]
    pub fn written(&self) -> usize {
        self.len
    }

    /// Writes a NUL terminator after the output if capacity allows.
    ///
    /// The terminator does not count toward [`written`](Self::written); it
    /// exists for C-style string compatibility of encoded text buffers.
    pub fn terminate(&mut self) {
        if self.len < self.buf.len() {
            self.buf[self.len] = 0;
        }
    }
}

impl Sink for FixedSink<'_> {
    fn reserve(&mut self, additional: usize) {
        assert!(
            additional <= self.buf.len() - self.len,
            "fixed sink capacity too small for output"
        );
    }

    fn push(&mut self, byte: u8) {
        self.buf[self.len] = byte;
        self.len += 1;
    }

    fn len(&self) -> usize {
        self.len
    }

    fn truncate(&mut self, len: usize) {
        if len < self.len {
            self.len = len;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_sink_tracks_written_length() {
        let mut buf = [0xAAu8; 4];
        let mut sink = FixedSink::new(&mut buf);
        sink.push(b'a');
        sink.push(b'b');
        assert_eq!(sink.written(), 2);
        assert_eq!(sink.len(), 2);

        sink.terminate();
        assert_eq!(buf, *b"ab\0\xAA");
    }

    #[test]
    fn fixed_sink_terminator_skipped_at_capacity() {
        let mut buf = [0u8; 2];
        let mut sink = FixedSink::new(&mut buf);
        sink.push(b'x');
        sink.push(b'y');
        sink.terminate();
        assert_eq!(buf, *b"xy");
    }

    #[test]
    #[should_panic(expected = "fixed sink capacity too small")]
    fn fixed_sink_reserve_checks_capacity() {
        let mut buf = [0u8; 2];
        FixedSink::new(&mut buf).reserve(3);
    }

    #[test]
    fn string_sink_appends_ascii() {
        let mut out = String::from("pre:");
        Sink::push(&mut out, b'a');
        Sink::push(&mut out, b'1');
        assert_eq!(out, "pre:a1");

        Sink::truncate(&mut out, 4);
        assert_eq!(out, "pre:");
    }
}
