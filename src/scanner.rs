//! JSON scanner/tokenizer.
//!
//! Converts raw JSON text into a flat token sequence for the parser in a
//! single left-to-right pass. Structural characters map one-to-one to tokens,
//! literals are decoded in place, and a successful scan always ends with
//! exactly one [`TokenKind::Eof`].
//!
//! String contents are carried through uninterpreted: the payload is the raw
//! text between the quotes, with escape sequences left as written. A
//! backslash only shields the byte after it from terminating the literal.

use std::fmt;

use crate::error::{ErrorKind, ParseError};

/// Token classification, with decoded payloads for literal-bearing kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// Left brace `{`
    LeftBrace,
    /// Right brace `}`
    RightBrace,
    /// Left bracket `[`
    LeftBracket,
    /// Right bracket `]`
    RightBracket,
    /// Colon `:`
    Colon,
    /// Comma `,`
    Comma,
    /// Null literal
    Null,
    /// Boolean literal
    Bool(bool),
    /// Number literal without a decimal point
    Int(i64),
    /// Number literal with a decimal point
    Float(f64),
    /// String literal (content between the quotes, escapes uninterpreted)
    String(String),
    /// End of input
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::LeftBrace => f.write_str("'{'"),
            TokenKind::RightBrace => f.write_str("'}'"),
            TokenKind::LeftBracket => f.write_str("'['"),
            TokenKind::RightBracket => f.write_str("']'"),
            TokenKind::Colon => f.write_str("':'"),
            TokenKind::Comma => f.write_str("','"),
            TokenKind::Null => f.write_str("'null'"),
            TokenKind::Bool(_) => f.write_str("boolean"),
            TokenKind::Int(_) | TokenKind::Float(_) => f.write_str("number"),
            TokenKind::String(_) => f.write_str("string"),
            TokenKind::Eof => f.write_str("end of input"),
        }
    }
}

/// A token together with the position of its first character.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What was scanned.
    pub kind: TokenKind,
    /// Byte offset of the token's first character.
    pub offset: usize,
    /// 1-based line of the token's first character.
    pub line: usize,
}

/// Single-pass tokenizer over a text buffer.
pub struct Scanner<'a> {
    input: &'a [u8],
    pos: usize,
    line: usize,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner for the given input.
    pub fn new(input: &'a str) -> Self {
        Self {
            input: input.as_bytes(),
            pos: 0,
            line: 1,
        }
    }

    /// Peek at the current byte without consuming it.
    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    /// Consume and return the current byte.
    fn advance(&mut self) -> Option<u8> {
        let b = self.input.get(self.pos).copied();
        if b.is_some() {
            self.pos += 1;
        }
        b
    }

    /// Skip whitespace. Only spaces and newlines separate tokens; newlines
    /// feed the line counter used in error positions.
    fn skip_whitespace(&mut self) {
        while let Some(b) = self.peek() {
            match b {
                b' ' => {
                    self.advance();
                }
                b'\n' => {
                    self.advance();
                    self.line += 1;
                }
                _ => break,
            }
        }
    }

    /// Read the next token from the input.
    pub fn next_token(&mut self) -> Result<Token, ParseError> {
        self.skip_whitespace();

        let offset = self.pos;
        let line = self.line;

        let kind = match self.peek() {
            None => TokenKind::Eof,
            Some(b'{') => {
                self.advance();
                TokenKind::LeftBrace
            }
            Some(b'}') => {
                self.advance();
                TokenKind::RightBrace
            }
            Some(b'[') => {
                self.advance();
                TokenKind::LeftBracket
            }
            Some(b']') => {
                self.advance();
                TokenKind::RightBracket
            }
            Some(b':') => {
                self.advance();
                TokenKind::Colon
            }
            Some(b',') => {
                self.advance();
                TokenKind::Comma
            }
            Some(b'"') => return self.read_string(),
            Some(b'-') | Some(b'0'..=b'9') => return self.read_number(),
            Some(b) if b.is_ascii_alphabetic() => return self.read_keyword(),
            Some(b) => {
                return Err(ParseError::new(
                    ErrorKind::UnexpectedToken,
                    format!("unexpected character '{}'", b.escape_ascii()),
                    offset,
                    line,
                ));
            }
        };

        Ok(Token { kind, offset, line })
    }

    /// Read a string token. The error position for an unterminated literal
    /// is the opening quote.
    fn read_string(&mut self) -> Result<Token, ParseError> {
        let offset = self.pos;
        let line = self.line;

        // Consume opening quote
        self.advance();
        let start = self.pos;

        loop {
            match self.advance() {
                None => {
                    return Err(ParseError::new(
                        ErrorKind::UnterminatedString,
                        "unterminated string, input ended before closing '\"'",
                        offset,
                        line,
                    ));
                }
                Some(b'"') => break,
                Some(b'\\') => {
                    // The shielded byte passes through without interpretation,
                    // so an escaped quote does not end the literal.
                    self.advance();
                }
                Some(_) => {}
            }
        }

        let end = self.pos - 1; // closing quote
        let content = std::str::from_utf8(&self.input[start..end]).map_err(|_| {
            ParseError::new(
                ErrorKind::UnexpectedToken,
                "invalid UTF-8 in string",
                offset,
                line,
            )
        })?;

        Ok(Token {
            kind: TokenKind::String(content.to_string()),
            offset,
            line,
        })
    }

    /// Read a number token. A decimal point selects the float variant.
    fn read_number(&mut self) -> Result<Token, ParseError> {
        let offset = self.pos;
        let line = self.line;

        if self.peek() == Some(b'-') {
            self.advance();
        }

        match self.peek() {
            Some(b'0'..=b'9') => {
                while let Some(b'0'..=b'9') = self.peek() {
                    self.advance();
                }
            }
            _ => {
                return Err(ParseError::new(
                    ErrorKind::InvalidNumber,
                    "expected digit after '-'",
                    offset,
                    line,
                ));
            }
        }

        let mut is_float = false;
        if self.peek() == Some(b'.') {
            self.advance();
            is_float = true;
            match self.peek() {
                Some(b'0'..=b'9') => {
                    while let Some(b'0'..=b'9') = self.peek() {
                        self.advance();
                    }
                }
                _ => {
                    return Err(ParseError::new(
                        ErrorKind::InvalidNumber,
                        "expected digit after decimal point",
                        offset,
                        line,
                    ));
                }
            }
        }

        let text = std::str::from_utf8(&self.input[offset..self.pos]).map_err(|_| {
            ParseError::new(ErrorKind::InvalidNumber, "invalid number", offset, line)
        })?;

        let kind = if is_float {
            let value: f64 = text.parse().map_err(|_| {
                ParseError::new(
                    ErrorKind::InvalidNumber,
                    format!("invalid number '{}'", text),
                    offset,
                    line,
                )
            })?;
            if !value.is_finite() {
                return Err(ParseError::new(
                    ErrorKind::InvalidNumber,
                    format!("number '{}' does not fit a 64-bit float", text),
                    offset,
                    line,
                ));
            }
            TokenKind::Float(value)
        } else {
            let value: i64 = text.parse().map_err(|_| {
                ParseError::new(
                    ErrorKind::InvalidNumber,
                    format!("number '{}' does not fit a 64-bit integer", text),
                    offset,
                    line,
                )
            })?;
            TokenKind::Int(value)
        };

        Ok(Token { kind, offset, line })
    }

    /// Read a keyword token: a maximal alphabetic run matched against the
    /// three JSON literals.
    fn read_keyword(&mut self) -> Result<Token, ParseError> {
        let offset = self.pos;
        let line = self.line;

        while let Some(b) = self.peek() {
            if b.is_ascii_alphabetic() {
                self.advance();
            } else {
                break;
            }
        }

        let word = std::str::from_utf8(&self.input[offset..self.pos]).map_err(|_| {
            ParseError::new(ErrorKind::UnexpectedToken, "invalid keyword", offset, line)
        })?;

        let kind = match word {
            "true" => TokenKind::Bool(true),
            "false" => TokenKind::Bool(false),
            "null" => TokenKind::Null,
            other => {
                return Err(ParseError::new(
                    ErrorKind::UnexpectedToken,
                    format!("unknown keyword '{}'", other),
                    offset,
                    line,
                ));
            }
        };

        Ok(Token { kind, offset, line })
    }
}

/// Scan JSON text into its complete token sequence.
///
/// On success the sequence always ends with exactly one [`TokenKind::Eof`],
/// even for empty input. The first lexical error aborts the scan.
pub fn scan(input: &str) -> Result<Vec<Token>, ParseError> {
    let mut scanner = Scanner::new(input);
    let mut tokens = Vec::new();
    loop {
        let token = scanner.next_token()?;
        let done = matches!(token.kind, TokenKind::Eof);
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
    }
}
