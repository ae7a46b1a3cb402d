//! Error types for expansion, tokenization and grammar loading.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for the expansion and rendering pipeline.
pub type Result<T> = std::result::Result<T, LSystemError>;

/// Errors raised while expanding or tokenizing an L-System.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LSystemError {
    /// A negative rewriting step count was requested.
    #[error("order must be non-negative, not {order}")]
    InvalidOrder { order: i64 },

    /// A value-carrying operator was followed by text that is not a number.
    #[error(
        "couldn't parse {text:?} as a value for {op:?} at position {position}; \
         remaining unparsed string: {remaining:?}"
    )]
    MalformedNumber {
        /// The operator character as it appeared in the input.
        op: char,
        /// The numeric portion of the literal that failed to parse.
        text: String,
        /// Byte offset of the operator character.
        position: usize,
        /// Everything after the operator character.
        remaining: String,
    },
}

/// Errors raised while reading grammar definition files.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: invalid ANGLE value {text:?}")]
    BadAngle { line: usize, text: String },

    #[error("line {line}: definition outside of a `<Title> {{` block")]
    OutsideBlock { line: usize },

    #[error("block {title:?} is missing its closing `}}`")]
    Unterminated { title: String },
}
