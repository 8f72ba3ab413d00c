//! Error types returned by the sequence algorithms.

use thiserror::Error;

/// Failure of a sequence operation.
///
/// Every variant is a deterministic function of the input: nothing is
/// retried internally and nothing is rolled back. A destructive operation
/// that fails part way may leave the sequence partially modified.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeqError {
    /// The sequence rejects element replacement.
    #[error("sequence does not support element replacement")]
    UnsupportedMutation,

    /// An index lies outside `[0, len)`.
    #[error("index {index} out of bounds for sequence of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// A reduction was asked for the extremum of an empty collection.
    #[error("collection is empty")]
    EmptyInput,

    /// `copy` was given a source longer than its destination.
    #[error("source of length {src_len} does not fit in destination of length {dest_len}")]
    SourceTooLarge { src_len: usize, dest_len: usize },
}

pub type Result<T> = std::result::Result<T, SeqError>;
