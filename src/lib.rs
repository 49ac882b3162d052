//! Postings compression and retrieval evaluation primitives.
//!
//! `ircodec` provides integer codecs for the postings lists of an inverted
//! index, plus the evaluation tools used to compare retrieval runs built on
//! them:
//!
//! - **Elias-delta**: bit-level, self-delimiting codewords for positive
//!   integers, decodable a 64-bit word at a time
//! - **Uncompressed**: eight bytes per integer, as a baseline
//! - **Evaluation**: TREC qrels and Mean Reciprocal Rank (feature `eval`)
//! - **Statistics**: the paired t-test (feature `eval`)
//!
//! Codecs never store the number of integers in a stream; an index keeps
//! that count next to each postings segment and hands it back on decode.
//!
//! # Example
//!
//! ```rust
//! use ircodec::{EliasDelta, IntegerCodec};
//!
//! let codec = EliasDelta::new();
//! let gaps = vec![3u64, 1, 1, 12, 700, 2];
//!
//! let mut buffer = vec![0u8; codec.encoded_len(&gaps).unwrap()];
//! let written = codec.encode(&mut buffer, &gaps).unwrap();
//!
//! let mut decoded = vec![0u64; gaps.len()];
//! codec.decode(&mut decoded, &buffer[..written]).unwrap();
//! assert_eq!(gaps, decoded);
//! ```
//!
//! # References
//!
//! - Elias, P. (1975). "Universal codeword sets and representations of the integers"
//! - Voorhees, E. (1999). "The TREC-8 Question Answering Track Report"

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
mod traits;

pub mod elias_delta;
pub mod maths;
pub mod uncompressed;

#[cfg(feature = "eval")]
pub mod evaluate;
#[cfg(feature = "eval")]
pub mod statistics;

pub use elias_delta::EliasDelta;
pub use error::{AssessmentError, CodecError};
pub use traits::IntegerCodec;
pub use uncompressed::Uncompressed;

/// Codec selection, as recorded in an index header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CodecKind {
    /// No compression (eight little-endian bytes per integer).
    #[default]
    None,
    /// Elias-delta codewords.
    EliasDelta,
}

impl CodecKind {
    /// Every supported codec.
    pub const ALL: [CodecKind; 2] = [CodecKind::None, CodecKind::EliasDelta];

    /// An instance of the selected codec.
    pub fn codec(self) -> Box<dyn IntegerCodec> {
        match self {
            CodecKind::None => Box::new(Uncompressed::new()),
            CodecKind::EliasDelta => Box::new(EliasDelta::new()),
        }
    }

    /// The name stored for this codec, matching [`IntegerCodec::name`].
    pub fn name(self) -> &'static str {
        match self {
            CodecKind::None => "none",
            CodecKind::EliasDelta => "elias_delta",
        }
    }

    /// Look a codec up by its stored name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names_round_trip() {
        for kind in CodecKind::ALL {
            assert_eq!(CodecKind::from_name(kind.name()), Some(kind));
            assert_eq!(kind.codec().name(), kind.name());
        }
        assert_eq!(CodecKind::from_name("vbyte"), None);
        assert_eq!(CodecKind::default(), CodecKind::None);
    }
}
