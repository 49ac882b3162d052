//! The interface shared by integer codecs.

use crate::error::CodecError;

/// Compresses ordered sequences of positive integers into byte streams.
///
/// Streams carry no count: the caller stores how many integers a byte range
/// holds and passes it back on decode (as the length of the output slice).
///
/// Implementations are stateless, so a single instance can be shared across
/// threads.
pub trait IntegerCodec: Send + Sync {
    /// Short, stable name of the codec, suitable for an index header.
    fn name(&self) -> &'static str;

    /// Exact number of bytes [`encode`](Self::encode) will write for `source`.
    ///
    /// # Errors
    ///
    /// [`CodecError::InvalidInput`] if `source` contains a zero.
    fn encoded_len(&self, source: &[u64]) -> Result<usize, CodecError>;

    /// Encode `source` into `destination`, returning the bytes used.
    ///
    /// Bytes of `destination` past the returned length are zeroed.
    ///
    /// # Errors
    ///
    /// - [`CodecError::InvalidInput`] if `source` contains a zero.
    /// - [`CodecError::BufferTooSmall`] if `destination` is shorter than
    ///   [`encoded_len`](Self::encoded_len).
    fn encode(&self, destination: &mut [u8], source: &[u64]) -> Result<usize, CodecError>;

    /// Decode exactly `destination.len()` integers from the front of `source`.
    ///
    /// # Errors
    ///
    /// [`CodecError::TruncatedStream`] if `source` holds fewer integers than
    /// requested. Contents of `destination` are unspecified on error.
    fn decode(&self, destination: &mut [u64], source: &[u8]) -> Result<(), CodecError>;

    /// Encode into a freshly allocated, exactly sized buffer.
    fn encode_to_vec(&self, source: &[u64]) -> Result<Vec<u8>, CodecError> {
        let mut encoded = vec![0u8; self.encoded_len(source)?];
        let written = self.encode(&mut encoded, source)?;
        encoded.truncate(written);
        Ok(encoded)
    }

    /// Decode `count` integers into a freshly allocated vector.
    fn decode_to_vec(&self, source: &[u8], count: usize) -> Result<Vec<u64>, CodecError> {
        let mut decoded = vec![0u64; count];
        self.decode(&mut decoded, source)?;
        Ok(decoded)
    }

    /// Average encoded size of `source`, in bits per integer.
    fn bits_per_integer(&self, source: &[u64]) -> Result<f64, CodecError> {
        if source.is_empty() {
            return Ok(0.0);
        }
        let bytes = self.encoded_len(source)?;
        Ok((bytes * 8) as f64 / source.len() as f64)
    }
}
