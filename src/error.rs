// Typed errors for the corpus and weighting stages.
//
// Library functions return these so callers (and tests) can tell a bad
// input record apart from an empty corpus. The binary wraps them in
// anyhow with path context.

use thiserror::Error;

/// Errors raised while reading a corpus or computing weights over it.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// The year field of a record is not an integer.
    #[error("record {record}: year field {value:?} is not an integer")]
    MalformedYear { record: u64, value: String },

    /// A record is too short to carry the expected field.
    #[error("record {record}: missing {field} field")]
    MissingField { record: u64, field: &'static str },

    /// IDF is undefined without at least one document.
    #[error("corpus contains no documents; IDF is undefined")]
    EmptyCorpus,

    /// Underlying CSV reader failure (I/O or malformed quoting).
    #[error("failed to read corpus record: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, CorpusError>;
