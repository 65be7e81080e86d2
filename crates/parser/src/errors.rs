use thiserror::Error;

/// Errors surfaced by the extraction engine.
///
/// Empty documents and missing sections are not errors: they produce empty
/// records. Only a malformed upstream stream or an invalid configuration is
/// reported, once, to the caller.
#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("Invalid text item at index {index}: {reason}")]
    InvalidTextItem { index: usize, reason: String },

    #[error("Too many text items: {count} exceeds the limit of {limit}")]
    TooManyTextItems { count: usize, limit: usize },

    #[error("Invalid parser configuration: {0}")]
    InvalidConfig(String),
}
