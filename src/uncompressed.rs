//! Uncompressed storage: each integer as eight little-endian bytes.
//!
//! Useful as a baseline when measuring compression, and for indexes built
//! without a codec.

use crate::error::CodecError;
use crate::traits::IntegerCodec;

const INTEGER_BYTES: usize = std::mem::size_of::<u64>();

/// Stores integers verbatim.
///
/// Zero is rejected so the contract matches the compressing codecs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Uncompressed;

impl Uncompressed {
    /// Create a new uncompressed codec.
    pub fn new() -> Self {
        Self
    }
}

impl IntegerCodec for Uncompressed {
    fn name(&self) -> &'static str {
        "none"
    }

    fn encoded_len(&self, source: &[u64]) -> Result<usize, CodecError> {
        if let Some(index) = source.iter().position(|&value| value == 0) {
            return Err(CodecError::InvalidInput { index });
        }
        Ok(source.len() * INTEGER_BYTES)
    }

    fn encode(&self, destination: &mut [u8], source: &[u64]) -> Result<usize, CodecError> {
        let needed = self.encoded_len(source)?;
        if destination.len() < needed {
            return Err(CodecError::BufferTooSmall {
                needed,
                capacity: destination.len(),
            });
        }

        destination.fill(0);
        for (chunk, value) in destination.chunks_exact_mut(INTEGER_BYTES).zip(source) {
            chunk.copy_from_slice(&value.to_le_bytes());
        }
        log::trace!("none: stored {} integers", source.len());
        Ok(needed)
    }

    fn decode(&self, destination: &mut [u64], source: &[u8]) -> Result<(), CodecError> {
        let available = source.len() / INTEGER_BYTES;
        if available < destination.len() {
            return Err(CodecError::TruncatedStream {
                decoded: available,
                requested: destination.len(),
            });
        }

        for (value, chunk) in destination.iter_mut().zip(source.chunks_exact(INTEGER_BYTES)) {
            let mut bytes = [0u8; INTEGER_BYTES];
            bytes.copy_from_slice(chunk);
            *value = u64::from_le_bytes(bytes);
        }
        Ok(())
    }
}
