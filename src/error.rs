//! Error type shared by parsing, decoding and the codec.

/// Errors produced while validating input or decoding a byte stream.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompressionError {
    /// The identifier list was empty.
    #[error("input list must not be empty")]
    EmptyInput,

    /// A token could not be read as a non-negative 32-bit integer.
    #[error("invalid value in input: \"{token}\"")]
    InvalidToken {
        /// The offending token, trimmed.
        token: String,
    },

    /// Identifiers were out of order or duplicated.
    #[error("document ids must be strictly ascending, found {current} after {previous} at position {index}")]
    NotAscending {
        /// Position of `current` in the list.
        index: usize,
        /// The identifier before `current`.
        previous: u32,
        /// The identifier that broke the ordering.
        current: u32,
    },

    /// The stream ended while a number was still being read.
    #[error("byte stream ends mid-number ({pending} continuation bytes pending)")]
    TruncatedStream {
        /// Continuation bytes read for the unfinished number.
        pending: usize,
    },

    /// A value does not fit in 32 bits.
    #[error("value exceeds 32 bits")]
    Overflow,

    /// Decoded gaps differ from the gaps that were encoded.
    #[error("decoded gaps do not match encoded gaps")]
    Mismatch,
}

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, CompressionError>;
