//! Error types for codecs and relevance assessments.

/// Errors reported by an [`IntegerCodec`](crate::IntegerCodec).
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The source sequence contained a zero, which has no codeword.
    #[error("cannot encode zero (source index {index})")]
    InvalidInput {
        /// Index of the offending integer in the source sequence.
        index: usize,
    },
    /// The destination buffer cannot hold the encoded stream.
    #[error("destination buffer too small: need {needed} bytes, have {capacity}")]
    BufferTooSmall {
        /// Bytes required for the whole sequence.
        needed: usize,
        /// Bytes available in the destination.
        capacity: usize,
    },
    /// The stream ended before the requested number of integers was decoded.
    #[error("stream truncated after {decoded} of {requested} integers")]
    TruncatedStream {
        /// Integers successfully decoded before the stream ran out.
        decoded: usize,
        /// Integers the caller asked for.
        requested: usize,
    },
    /// The bits at the cursor cannot have been produced by the encoder.
    #[error("malformed codeword at output index {index}")]
    Malformed {
        /// Output index of the codeword being decoded.
        index: usize,
    },
}

/// Errors reported while loading relevance assessments.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AssessmentError {
    /// A qrels line did not have four fields or its score was not an integer.
    #[error("malformed qrels line {line}: {reason}")]
    MalformedLine {
        /// One-based line number.
        line: usize,
        /// What was wrong with the line.
        reason: String,
    },
}
