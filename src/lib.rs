//! json-tree - a self-contained JSON parser and pretty-printer.
//!
//! Text goes through a two-stage pipeline with a value tree in the middle:
//! the scanner turns raw characters into a flat token sequence, and a
//! recursive descent parser turns the tokens into a [`JsonValue`] tree that
//! the renderer can serialize back to indented text.
//!
//! # Architecture
//!
//! - [`scanner`] - Tokenizer producing an Eof-terminated token sequence
//! - [`parser`] - Recursive descent parser building the value tree
//! - [`value`] - The tagged union of JSON value types
//! - [`render`] - Indented pretty-printer
//! - [`error`] - Error kinds and the position-carrying [`ParseError`]
//!
//! # Example
//!
//! ```
//! use json_tree::{parse, render};
//!
//! let value = parse(r#"{"name":"Ada","age":36}"#).unwrap();
//! assert_eq!(value.get("name").and_then(|v| v.as_str()), Some("Ada"));
//! assert_eq!(value.get("age").and_then(|v| v.as_i64()), Some(36));
//!
//! let text = render(&value);
//! assert!(text.starts_with("{\n"));
//! ```
//!
//! Parsing either yields a complete tree or a single [`ParseError`] for the
//! first problem found; there is no partial result. Nesting depth is bounded
//! only by the call stack, so pathologically deep documents can exhaust it.

// Library code must avoid unwrap/expect/panic and propagate errors instead.
// Tests are checked separately with `cargo test`.
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]

pub mod error;
pub mod parser;
pub mod render;
pub mod scanner;
pub mod value;

// Re-export commonly used types
pub use error::{ErrorKind, ParseError};
pub use parser::{parse, Parser};
pub use render::{render, render_indented};
pub use scanner::{scan, Scanner, Token, TokenKind};
pub use value::JsonValue;
