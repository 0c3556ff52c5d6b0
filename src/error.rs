//! Error types for configuration parsing and serialization.
//!
//! All parse-level errors carry the line and column at which the tokenizer
//! or tree builder gave up. These errors are primarily internal diagnostics:
//! the tolerant entry point [`crate::parse`] swallows them and returns an
//! empty root, while [`crate::try_parse`] surfaces them to callers that want
//! to know why a document was rejected.

use thiserror::Error;

/// Represents all possible errors that can occur while reading or writing
/// configuration documents.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// IO error while reading input or writing output.
    #[error("IO error: {0}")]
    Io(String),

    /// Malformed text at the tokenizer level (bad literal, unterminated
    /// string, stray character).
    #[error("syntax error at line {line}, column {column}: {msg}")]
    Syntax {
        line: usize,
        column: usize,
        msg: String,
    },

    /// The token stream was well-formed text but structurally invalid for a
    /// configuration document.
    #[error("unexpected {found} at line {line}, column {column}, expected {expected}")]
    UnexpectedToken {
        line: usize,
        column: usize,
        expected: String,
        found: String,
    },

    /// Input ended in the middle of a document.
    #[error("unexpected end of input at line {line}, column {column}")]
    UnexpectedEof { line: usize, column: usize },

    /// A number literal that does not fit the decimal value range.
    #[error("invalid number literal `{literal}` at line {line}, column {column}")]
    InvalidNumber {
        line: usize,
        column: usize,
        literal: String,
    },

    /// Two members of the same object share a key.
    #[error("duplicate member key `{key}` at line {line}, column {column}")]
    DuplicateKey {
        line: usize,
        column: usize,
        key: String,
    },

    /// The input buffer is not valid UTF-8.
    #[error("input is not valid UTF-8")]
    InvalidUtf8,
}

impl Error {
    /// Creates a tokenizer-level syntax error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_config::Error;
    ///
    /// let err = Error::syntax(10, 5, "unterminated string");
    /// assert!(err.to_string().contains("line 10"));
    /// ```
    pub fn syntax(line: usize, column: usize, msg: &str) -> Self {
        Error::Syntax {
            line,
            column,
            msg: msg.to_string(),
        }
    }

    /// Creates a structural error for a token that is valid text but cannot
    /// appear at the current position.
    pub fn unexpected_token(line: usize, column: usize, expected: &str, found: &str) -> Self {
        Error::UnexpectedToken {
            line,
            column,
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    /// Creates an end-of-input error.
    pub fn unexpected_eof(line: usize, column: usize) -> Self {
        Error::UnexpectedEof { line, column }
    }

    /// Creates an error for a number literal outside the decimal range.
    pub fn invalid_number(line: usize, column: usize, literal: &str) -> Self {
        Error::InvalidNumber {
            line,
            column,
            literal: literal.to_string(),
        }
    }

    /// Creates an error for a repeated object member key.
    pub fn duplicate_key(line: usize, column: usize, key: &str) -> Self {
        Error::DuplicateKey {
            line,
            column,
            key: key.to_string(),
        }
    }

    /// Creates an I/O error for reader/writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
