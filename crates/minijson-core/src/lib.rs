//! # minijson-core
//!
//! A minimal JSON value model: a tagged-union tree ([`Value`]), a
//! recursive-descent parser that turns UTF-8 text into a tree, and a
//! serializer that turns a tree back into compact JSON text. The parser and
//! serializer are independent consumers of the value model and do not
//! depend on each other.
//!
//! The parser is deliberately lenient: it reads exactly one value and
//! ignores trailing content, treats commas and colons as optional
//! separators, and stores string contents verbatim without interpreting
//! backslash escapes. See [`parser`] for the full contract.
//!
//! ## Quick start
//!
//! ```rust
//! use minijson_core::{parse, serialize, Value};
//!
//! let value = parse(r#"{"name":"Alice","scores":[95,87,92]}"#).unwrap();
//! assert_eq!(value.get("name").and_then(Value::as_str), Some("Alice"));
//!
//! // Compact output, object keys in sorted order.
//! assert_eq!(serialize(&value), r#"{"name":"Alice","scores":[95,87,92]}"#);
//! ```
//!
//! ## Modules
//!
//! - [`value`] — the `Value` tree and typed accessors
//! - [`parser`] — text → `Value`
//! - [`serializer`] — `Value` → compact text
//! - [`error`] — parse and access error types

pub mod error;
pub mod parser;
pub mod serializer;
pub mod value;

pub use error::{AccessError, ParseError};
pub use parser::{parse, parse_with_max_depth, DEFAULT_MAX_DEPTH};
pub use serializer::serialize;
pub use value::Value;
