//! Elias-delta coding of positive integers.
//!
//! Each integer `N` is written low bit first as three fields:
//!
//! 1. `u` zero bits, where `L` is the bit length of `N` and `u = floor(log2 L)`
//! 2. `u + 1` bits holding `L` with its leading 1 rotated down to bit 0, so the
//!    lowest bit of the field is always set and terminates the zero run
//! 3. `L - 1` bits holding `N` without its leading 1
//!
//! A codeword therefore takes `2u + L` bits; `1` is the single bit `1`.
//!
//! Codewords are packed back to back, LSB first within each byte, and the
//! stream is padded with zeros only up to the next byte. Because the
//! terminator sits at the low end of the length field, the decoder finds
//! field boundaries with a trailing-zero count on 64-bit little-endian words
//! rather than scanning bit by bit.
//!
//! The stream does not record how many integers it holds; the caller keeps
//! that count alongside the bytes.
//!
//! # Example
//!
//! ```rust
//! use ircodec::{EliasDelta, IntegerCodec};
//!
//! let codec = EliasDelta::new();
//! let encoded = codec.encode_to_vec(&[1, 2, 3]).unwrap();
//! assert_eq!(encoded, vec![0x45, 0x01]);
//!
//! let decoded = codec.decode_to_vec(&encoded, 3).unwrap();
//! assert_eq!(decoded, vec![1, 2, 3]);
//! ```

use std::iter::FusedIterator;

use crate::error::CodecError;
use crate::maths::{bit_length, floor_log2, low_mask};
use crate::traits::IntegerCodec;

const WORD_BITS: u32 = 64;

/// Longest zero prefix a `u64` can need: `floor(log2 64)`.
const MAX_UNARY: u32 = 6;

/// Number of bits in the codeword for `value`.
///
/// Zero has no codeword and reports 0.
///
/// ```rust
/// use ircodec::elias_delta::codeword_bits;
///
/// assert_eq!(codeword_bits(1), 1);
/// assert_eq!(codeword_bits(2), 4);
/// assert_eq!(codeword_bits(13), 8);
/// ```
#[inline]
pub fn codeword_bits(value: u64) -> u32 {
    let length = bit_length(value);
    2 * floor_log2(u64::from(length)) + length
}

#[inline]
fn bytes_for(bits: usize) -> usize {
    (bits + 7) / 8
}

/// Elias-delta integer codec.
///
/// Stateless; see the [module documentation](self) for the bit layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EliasDelta;

impl EliasDelta {
    /// Create a new Elias-delta codec.
    pub fn new() -> Self {
        Self
    }

    /// Lazily decode `count` integers from the front of `source`.
    ///
    /// The iterator stops after the first error.
    pub fn iter<'a>(&self, source: &'a [u8], count: usize) -> Iter<'a> {
        Iter {
            decoder: Decoder::new(source),
            remaining: count,
            requested: count,
        }
    }

    /// Total bits needed for `source`, rejecting zeros.
    fn stream_bits(source: &[u64]) -> Result<usize, CodecError> {
        let mut bits = 0usize;
        for (index, &value) in source.iter().enumerate() {
            if value == 0 {
                log::debug!("elias-delta: refusing to encode zero at index {}", index);
                return Err(CodecError::InvalidInput { index });
            }
            bits += codeword_bits(value) as usize;
        }
        Ok(bits)
    }
}

impl IntegerCodec for EliasDelta {
    fn name(&self) -> &'static str {
        "elias_delta"
    }

    fn encoded_len(&self, source: &[u64]) -> Result<usize, CodecError> {
        Ok(bytes_for(Self::stream_bits(source)?))
    }

    fn encode(&self, destination: &mut [u8], source: &[u64]) -> Result<usize, CodecError> {
        let needed = self.encoded_len(source)?;
        if destination.len() < needed {
            log::debug!(
                "elias-delta: {} integers need {} bytes, destination has {}",
                source.len(),
                needed,
                destination.len()
            );
            return Err(CodecError::BufferTooSmall {
                needed,
                capacity: destination.len(),
            });
        }

        destination.fill(0);
        let mut writer = BitWriter::new(destination);

        for &value in source {
            let length = bit_length(value);
            let unary = floor_log2(u64::from(length));

            // The prefix zeros are already in place.
            writer.skip(unary);

            let zig_zag = ((u64::from(length) & !(1u64 << unary)) << 1) | 1;
            writer.put(zig_zag, unary + 1);

            writer.put(value & !(1u64 << (length - 1)), length - 1);
        }

        let written = bytes_for(writer.position());
        log::trace!(
            "elias-delta: encoded {} integers into {} bytes",
            source.len(),
            written
        );
        Ok(written)
    }

    fn decode(&self, destination: &mut [u64], source: &[u8]) -> Result<(), CodecError> {
        let requested = destination.len();
        let mut decoder = Decoder::new(source);

        for slot in destination.iter_mut() {
            *slot = decoder.next_integer().map_err(|error| {
                let error = with_requested(error, requested);
                log::debug!("elias-delta: decode failed: {}", error);
                error
            })?;
        }

        log::trace!(
            "elias-delta: decoded {} integers from {} of {} bytes",
            requested,
            bytes_for(decoder.bit_position()),
            source.len()
        );
        Ok(())
    }
}

fn with_requested(error: CodecError, requested: usize) -> CodecError {
    match error {
        CodecError::TruncatedStream { decoded, .. } => {
            CodecError::TruncatedStream { decoded, requested }
        }
        other => other,
    }
}

/// OR-writes bit fields into a zeroed byte buffer.
///
/// Capacity is checked by the caller before any field is written; slice
/// indexing still bounds every store.
struct BitWriter<'a> {
    bytes: &'a mut [u8],
    position: usize,
}

impl<'a> BitWriter<'a> {
    fn new(bytes: &'a mut [u8]) -> Self {
        Self { bytes, position: 0 }
    }

    fn position(&self) -> usize {
        self.position
    }

    /// Advance over `width` bits that are already zero.
    #[inline]
    fn skip(&mut self, width: u32) {
        self.position += width as usize;
    }

    /// OR the low `width` bits of `bits` into the stream at the cursor.
    ///
    /// A field of up to 64 bits at a sub-byte offset of up to 7 spans at most
    /// nine bytes, so the window is built in a `u128`.
    #[inline]
    fn put(&mut self, bits: u64, width: u32) {
        if width == 0 {
            return;
        }
        let start = self.position / 8;
        let shift = (self.position % 8) as u32;
        let span = ((shift + width + 7) / 8) as usize;
        let window = u128::from(bits & low_mask(width)) << shift;

        for (byte, pattern) in self.bytes[start..start + span]
            .iter_mut()
            .zip(window.to_le_bytes())
        {
            *byte |= pattern;
        }
        self.position += width as usize;
    }
}

/// Read cursor over an Elias-delta stream.
///
/// The cursor holds the current 64-bit word (loaded little-endian, so bit `b`
/// of the stream is bit `b % 64` of word `b / 64`) with consumed bits shifted
/// out, and fetches the next word when a field runs off the end. Fetches
/// never read past `source`; a partial final word is zero-padded and any
/// codeword that ends in that padding is reported as truncated.
///
/// After an error the cursor position is unspecified.
#[derive(Debug, Clone)]
pub struct Decoder<'a> {
    source: &'a [u8],
    // byte offset of the word after `word`
    next_word: usize,
    word: u64,
    bits_used: u32,
    position: usize,
    decoded: usize,
}

impl<'a> Decoder<'a> {
    /// Start decoding at bit 0 of `source`.
    pub fn new(source: &'a [u8]) -> Self {
        Self {
            source,
            next_word: 0,
            word: 0,
            bits_used: WORD_BITS,
            position: 0,
            decoded: 0,
        }
    }

    /// Bits consumed so far.
    pub fn bit_position(&self) -> usize {
        self.position
    }

    /// Integers decoded so far.
    pub fn decoded(&self) -> usize {
        self.decoded
    }

    /// Decode the next integer.
    ///
    /// # Errors
    ///
    /// - [`CodecError::TruncatedStream`] if the codeword does not end inside
    ///   `source`.
    /// - [`CodecError::Malformed`] if the prefix or length field describes an
    ///   integer wider than 64 bits.
    pub fn next_integer(&mut self) -> Result<u64, CodecError> {
        let unary = self.scan_unary()?;
        if unary > MAX_UNARY as usize {
            return Err(CodecError::Malformed {
                index: self.decoded,
            });
        }
        let unary = unary as u32;

        let zig_zag = self.take(unary + 1)?;
        let length = (zig_zag >> 1) | (1u64 << unary);
        if length > u64::from(WORD_BITS) {
            return Err(CodecError::Malformed {
                index: self.decoded,
            });
        }
        let length = length as u32;

        let value = self.take(length - 1)? | (1u64 << (length - 1));

        if self.position > self.source.len() * 8 {
            return Err(self.truncated());
        }
        self.decoded += 1;
        Ok(value)
    }

    fn truncated(&self) -> CodecError {
        CodecError::TruncatedStream {
            decoded: self.decoded,
            requested: self.decoded + 1,
        }
    }

    /// Load the next word, zero-padding past the end of the source.
    fn fetch(&mut self) -> Result<(), CodecError> {
        let start = self.next_word;
        if start >= self.source.len() {
            return Err(self.truncated());
        }
        let end = (start + 8).min(self.source.len());
        let mut bytes = [0u8; 8];
        bytes[..end - start].copy_from_slice(&self.source[start..end]);

        self.word = u64::from_le_bytes(bytes);
        self.bits_used = 0;
        self.next_word = start + 8;
        Ok(())
    }

    #[inline]
    fn consume(&mut self, width: u32) {
        self.word = self.word.checked_shr(width).unwrap_or(0);
        self.bits_used += width;
        self.position += width as usize;
    }

    /// Count zero bits up to the next set bit, leaving the set bit unread.
    fn scan_unary(&mut self) -> Result<usize, CodecError> {
        let mut unary = 0usize;
        loop {
            if self.word != 0 {
                let zeros = self.word.trailing_zeros();
                self.consume(zeros);
                return Ok(unary + zeros as usize);
            }
            // The rest of this word is zero: count it and carry on.
            let rest = WORD_BITS - self.bits_used;
            unary += rest as usize;
            self.position += rest as usize;
            self.bits_used = WORD_BITS;
            self.fetch()?;
        }
    }

    /// Read the next `width` bits (`width <= 64`) as an integer, low bit first.
    fn take(&mut self, width: u32) -> Result<u64, CodecError> {
        if width == 0 {
            return Ok(0);
        }
        let available = WORD_BITS - self.bits_used;
        if width <= available {
            let bits = self.word & low_mask(width);
            self.consume(width);
            return Ok(bits);
        }

        // Straddles a word boundary: low bits from this word, high bits from
        // the next.
        let low = self.word;
        self.position += available as usize;
        self.bits_used = WORD_BITS;
        self.fetch()?;

        let high_width = width - available;
        let high = self.word & low_mask(high_width);
        self.consume(high_width);
        Ok(low | (high << available))
    }
}

/// Iterator over a fixed number of integers, created by [`EliasDelta::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    decoder: Decoder<'a>,
    remaining: usize,
    requested: usize,
}

impl Iterator for Iter<'_> {
    type Item = Result<u64, CodecError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        match self.decoder.next_integer() {
            Ok(value) => {
                self.remaining -= 1;
                Some(Ok(value))
            }
            Err(error) => {
                self.remaining = 0;
                Some(Err(with_requested(error, self.requested)))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
