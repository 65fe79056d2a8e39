//! Recursive descent JSON parser.
//!
//! Consumes a token sequence with a single cursor and one token of lookahead,
//! no backtracking. Each nesting level of object or array is one call frame,
//! so recursion depth equals document nesting depth; no explicit depth limit
//! is imposed, the call stack is the bound.
//!
//! The grammar covers exactly one document: anything after the top-level
//! value is an error, and the first error anywhere aborts the parse with no
//! partial result.

use indexmap::IndexMap;

use crate::error::{ErrorKind, ParseError};
use crate::scanner::{scan, Token, TokenKind};
use crate::value::JsonValue;

/// Recursive descent parser over a scanned token sequence.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    eof: Token,
}

impl Parser {
    /// Create a parser for the given token sequence.
    ///
    /// The scanner always terminates its output with an [`TokenKind::Eof`];
    /// a hand-built sequence without one is treated as if it ended there.
    pub fn new(tokens: Vec<Token>) -> Self {
        let eof = match tokens.last() {
            Some(t) if matches!(t.kind, TokenKind::Eof) => t.clone(),
            Some(t) => Token {
                kind: TokenKind::Eof,
                offset: t.offset,
                line: t.line,
            },
            None => Token {
                kind: TokenKind::Eof,
                offset: 0,
                line: 1,
            },
        };
        Self {
            tokens,
            pos: 0,
            eof,
        }
    }

    /// Parse the whole sequence into a single value.
    pub fn parse(&mut self) -> Result<JsonValue, ParseError> {
        let value = self.parse_value()?;

        // The grammar covers one document; trailing tokens are an error.
        let trailing = self.current();
        if !matches!(trailing.kind, TokenKind::Eof) {
            return Err(ParseError::new(
                ErrorKind::UnexpectedToken,
                format!("unexpected {} after top-level value", trailing.kind),
                trailing.offset,
                trailing.line,
            ));
        }

        Ok(value)
    }

    /// The token under the cursor. Past the end of the sequence this is Eof,
    /// so lookahead never runs out.
    fn current(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&self.eof)
    }

    /// Move the cursor to the next token.
    fn advance(&mut self) {
        self.pos += 1;
    }

    /// Parse a single JSON value at the cursor.
    fn parse_value(&mut self) -> Result<JsonValue, ParseError> {
        let token = self.current().clone();
        match token.kind {
            TokenKind::Null => {
                self.advance();
                Ok(JsonValue::Null)
            }
            TokenKind::Bool(b) => {
                self.advance();
                Ok(JsonValue::Bool(b))
            }
            TokenKind::Int(n) => {
                self.advance();
                Ok(JsonValue::Integer(n))
            }
            TokenKind::Float(x) => {
                self.advance();
                Ok(JsonValue::Float(x))
            }
            TokenKind::String(s) => {
                self.advance();
                Ok(JsonValue::String(s))
            }
            TokenKind::LeftBrace => self.parse_object(),
            TokenKind::LeftBracket => self.parse_array(),
            TokenKind::Eof => Err(ParseError::new(
                ErrorKind::UnexpectedToken,
                "unexpected end of input, expected a value",
                token.offset,
                token.line,
            )),
            other => Err(ParseError::new(
                ErrorKind::UnexpectedToken,
                format!("unexpected {} in value position", other),
                token.offset,
                token.line,
            )),
        }
    }

    /// Parse a JSON object. A repeated key overwrites its value in place and
    /// keeps the key's original position.
    fn parse_object(&mut self) -> Result<JsonValue, ParseError> {
        // Consume opening brace
        self.advance();

        let mut map = IndexMap::new();

        // Empty object
        if matches!(self.current().kind, TokenKind::RightBrace) {
            self.advance();
            return Ok(JsonValue::Object(map));
        }

        loop {
            // Expect string key
            let token = self.current().clone();
            let key = match token.kind {
                TokenKind::String(s) => s,
                TokenKind::Eof => {
                    return Err(ParseError::new(
                        ErrorKind::UnterminatedObject,
                        "unterminated object, input ended before '}'",
                        token.offset,
                        token.line,
                    ));
                }
                other => {
                    return Err(ParseError::new(
                        ErrorKind::ExpectedKey,
                        format!("expected string key, found {}", other),
                        token.offset,
                        token.line,
                    ));
                }
            };
            self.advance();

            // Expect colon
            let token = self.current().clone();
            if !matches!(token.kind, TokenKind::Colon) {
                return Err(ParseError::new(
                    ErrorKind::ExpectedColon,
                    format!("expected ':' after object key, found {}", token.kind),
                    token.offset,
                    token.line,
                ));
            }
            self.advance();

            // Parse value
            let value = self.parse_value()?;
            map.insert(key, value);

            // Expect comma or closing brace
            let token = self.current().clone();
            match token.kind {
                TokenKind::Comma => {
                    self.advance();
                    if matches!(self.current().kind, TokenKind::RightBrace) {
                        let close = self.current();
                        return Err(ParseError::new(
                            ErrorKind::ExpectedCommaOrBrace,
                            "trailing comma before '}'",
                            close.offset,
                            close.line,
                        ));
                    }
                }
                TokenKind::RightBrace => {
                    self.advance();
                    break;
                }
                TokenKind::Eof => {
                    return Err(ParseError::new(
                        ErrorKind::UnterminatedObject,
                        "unterminated object, input ended before '}'",
                        token.offset,
                        token.line,
                    ));
                }
                other => {
                    return Err(ParseError::new(
                        ErrorKind::ExpectedCommaOrBrace,
                        format!("expected ',' or '}}' after object member, found {}", other),
                        token.offset,
                        token.line,
                    ));
                }
            }
        }

        Ok(JsonValue::Object(map))
    }

    /// Parse a JSON array.
    fn parse_array(&mut self) -> Result<JsonValue, ParseError> {
        // Consume opening bracket
        self.advance();

        let mut items = Vec::new();

        // Empty array
        if matches!(self.current().kind, TokenKind::RightBracket) {
            self.advance();
            return Ok(JsonValue::Array(items));
        }

        loop {
            // Running out of input at element position means the bracket
            // was never closed.
            if matches!(self.current().kind, TokenKind::Eof) {
                let token = self.current();
                return Err(ParseError::new(
                    ErrorKind::UnterminatedArray,
                    "unterminated array, input ended before ']'",
                    token.offset,
                    token.line,
                ));
            }

            let value = self.parse_value()?;
            items.push(value);

            // Expect comma or closing bracket
            let token = self.current().clone();
            match token.kind {
                TokenKind::Comma => {
                    self.advance();
                    if matches!(self.current().kind, TokenKind::RightBracket) {
                        let close = self.current();
                        return Err(ParseError::new(
                            ErrorKind::ExpectedCommaOrBracket,
                            "trailing comma before ']'",
                            close.offset,
                            close.line,
                        ));
                    }
                }
                TokenKind::RightBracket => {
                    self.advance();
                    break;
                }
                TokenKind::Eof => {
                    return Err(ParseError::new(
                        ErrorKind::UnterminatedArray,
                        "unterminated array, input ended before ']'",
                        token.offset,
                        token.line,
                    ));
                }
                other => {
                    return Err(ParseError::new(
                        ErrorKind::ExpectedCommaOrBracket,
                        format!("expected ',' or ']' after array element, found {}", other),
                        token.offset,
                        token.line,
                    ));
                }
            }
        }

        Ok(JsonValue::Array(items))
    }
}

/// Parse JSON text into a value tree.
///
/// Runs the scanner and the parser in sequence. The input must hold exactly
/// one document; the first lexical or syntactic error aborts with no partial
/// result.
pub fn parse(input: &str) -> Result<JsonValue, ParseError> {
    let tokens = scan(input)?;
    let mut parser = Parser::new(tokens);
    parser.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_null() {
        assert_eq!(parse("null").unwrap(), JsonValue::Null);
    }

    #[test]
    fn test_parse_booleans() {
        assert_eq!(parse("true").unwrap(), JsonValue::Bool(true));
        assert_eq!(parse("false").unwrap(), JsonValue::Bool(false));
    }

    #[test]
    fn test_parse_numbers() {
        assert_eq!(parse("42").unwrap(), JsonValue::Integer(42));
        assert_eq!(parse("-123").unwrap(), JsonValue::Integer(-123));
        assert_eq!(parse("3.5").unwrap(), JsonValue::Float(3.5));
        assert_eq!(parse("-0.25").unwrap(), JsonValue::Float(-0.25));
    }

    #[test]
    fn test_parse_string() {
        assert_eq!(
            parse(r#""hello""#).unwrap(),
            JsonValue::String("hello".to_string())
        );
    }

    #[test]
    fn test_parse_array() {
        assert_eq!(
            parse("[1, 2, 3]").unwrap(),
            JsonValue::Array(vec![
                JsonValue::Integer(1),
                JsonValue::Integer(2),
                JsonValue::Integer(3),
            ])
        );
    }

    #[test]
    fn test_parse_object_preserves_order() {
        let result = parse(r#"{"z": 1, "a": 2}"#).unwrap();
        let obj = result.as_object().unwrap();
        let keys: Vec<&str> = obj.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["z", "a"]);
    }

    #[test]
    fn test_duplicate_key_overwrites_in_place() {
        let result = parse(r#"{"a": 1, "b": 2, "a": 3}"#).unwrap();
        let obj = result.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        // The repeated key keeps its original position.
        assert_eq!(
            obj.get_index(0),
            Some((&"a".to_string(), &JsonValue::Integer(3)))
        );
        assert_eq!(
            obj.get_index(1),
            Some((&"b".to_string(), &JsonValue::Integer(2)))
        );
    }

    #[test]
    fn test_empty_containers() {
        assert_eq!(parse("{}").unwrap(), JsonValue::Object(IndexMap::new()));
        assert_eq!(parse("[]").unwrap(), JsonValue::Array(vec![]));
    }

    #[test]
    fn test_nested_structure() {
        let result = parse(r#"{"arr": [1, {"nested": true}], "num": 42}"#).unwrap();
        assert!(result.is_object());
        let arr = result.get("arr").unwrap();
        assert!(arr.is_array());
        let nested = arr.get_index(1).unwrap();
        assert_eq!(nested.get("nested"), Some(&JsonValue::Bool(true)));
    }

    #[test]
    fn test_empty_input_rejected() {
        let err = parse("").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedToken);
    }

    #[test]
    fn test_trailing_content_rejected() {
        let err = parse("null extra").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedToken);
        assert_eq!(err.offset(), 5);
    }

    #[test]
    fn test_non_string_key_rejected() {
        let err = parse("{1: 2}").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ExpectedKey);
    }

    #[test]
    fn test_missing_colon_rejected() {
        let err = parse(r#"{"a" 1}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ExpectedColon);
    }

    #[test]
    fn test_missing_comma_rejected() {
        let err = parse(r#"{"a": 1 "b": 2}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ExpectedCommaOrBrace);

        let err = parse("[1 2]").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ExpectedCommaOrBracket);
    }

    #[test]
    fn test_trailing_comma_rejected() {
        let err = parse(r#"{"a": 1,}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ExpectedCommaOrBrace);

        let err = parse("[1, 2,]").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ExpectedCommaOrBracket);
    }

    #[test]
    fn test_unterminated_object() {
        assert_eq!(
            parse(r#"{"a": 1"#).unwrap_err().kind(),
            ErrorKind::UnterminatedObject
        );
        assert_eq!(parse("{").unwrap_err().kind(), ErrorKind::UnterminatedObject);
    }

    #[test]
    fn test_unterminated_array() {
        assert_eq!(parse("[1, 2").unwrap_err().kind(), ErrorKind::UnterminatedArray);
        assert_eq!(parse("[").unwrap_err().kind(), ErrorKind::UnterminatedArray);
        assert_eq!(parse("[1,").unwrap_err().kind(), ErrorKind::UnterminatedArray);
    }

    #[test]
    fn test_value_position_errors() {
        assert_eq!(parse(":").unwrap_err().kind(), ErrorKind::UnexpectedToken);
        assert_eq!(parse(",").unwrap_err().kind(), ErrorKind::UnexpectedToken);
        assert_eq!(parse("}").unwrap_err().kind(), ErrorKind::UnexpectedToken);
        assert_eq!(
            parse(r#"{"a": }"#).unwrap_err().kind(),
            ErrorKind::UnexpectedToken
        );
    }

    #[test]
    fn test_error_position_in_multiline_input() {
        let err = parse("{\n  \"a\": 1,\n  \"b\" 2\n}").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ExpectedColon);
        assert_eq!(err.line(), 3);
    }

    #[test]
    fn test_parser_without_eof_token_is_handled() {
        // A hand-built sequence missing the Eof terminator still parses.
        let tokens = scan("[1]")
            .unwrap()
            .into_iter()
            .filter(|t| !matches!(t.kind, TokenKind::Eof))
            .collect();
        let mut parser = Parser::new(tokens);
        assert_eq!(
            parser.parse().unwrap(),
            JsonValue::Array(vec![JsonValue::Integer(1)])
        );
    }
}
