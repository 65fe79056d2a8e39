//! Error types for scanning and parsing.
//!
//! Every failure in the pipeline is reported as a [`ParseError`]: a kind
//! discriminant, a human-readable message, and the position of the offending
//! input (byte offset and 1-based line). The first error encountered aborts
//! the whole operation; there is no recovery mode and no partial result.

use thiserror::Error;

/// Classification of scan and parse failures.
///
/// The first three kinds are lexical and raised by the scanner; the rest are
/// syntactic and raised by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ErrorKind {
    /// A string literal reached end of input before its closing quote.
    #[error("unterminated string")]
    UnterminatedString,
    /// A number literal is malformed or does not fit its 64-bit type.
    #[error("invalid number")]
    InvalidNumber,
    /// A character or token that no grammar rule accepts at this position.
    #[error("unexpected token")]
    UnexpectedToken,
    /// An object member began with something other than a string key.
    #[error("expected object key")]
    ExpectedKey,
    /// An object key was not followed by `:`.
    #[error("expected colon")]
    ExpectedColon,
    /// An object member was not followed by `,` or `}`.
    #[error("expected comma or closing brace")]
    ExpectedCommaOrBrace,
    /// An array element was not followed by `,` or `]`.
    #[error("expected comma or closing bracket")]
    ExpectedCommaOrBracket,
    /// Input ended inside an object before its `}`.
    #[error("unterminated object")]
    UnterminatedObject,
    /// Input ended inside an array before its `]`.
    #[error("unterminated array")]
    UnterminatedArray,
}

/// A fatal scan or parse failure with its position in the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} at line {line} (byte {offset})")]
pub struct ParseError {
    kind: ErrorKind,
    message: String,
    offset: usize,
    line: usize,
}

impl ParseError {
    /// Create an error of the given kind at a byte offset and 1-based line.
    pub fn new(kind: ErrorKind, message: impl Into<String>, offset: usize, line: usize) -> Self {
        Self {
            kind,
            message: message.into(),
            offset,
            line,
        }
    }

    /// The kind discriminant of this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The human-readable message, without the position suffix.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Byte offset of the offending input.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// 1-based line of the offending input.
    pub fn line(&self) -> usize {
        self.line
    }
}
