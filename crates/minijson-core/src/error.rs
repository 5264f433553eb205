//! Error types for JSON parsing and typed value access.

use thiserror::Error;

/// Errors that can occur while parsing JSON text.
///
/// Parse errors carry no position information; a failure anywhere in the
/// input aborts the whole parse and no partial tree is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A literal keyword (`null`, `true`, `false`) was started but the full
    /// keyword was not present (truncated input or a misspelling).
    #[error("malformed literal")]
    MalformedLiteral,

    /// A numeric token could not be converted to an integer or a float.
    #[error("malformed number")]
    MalformedNumber,

    /// A string ran to the end of input without a closing `"`.
    #[error("unterminated string")]
    UnterminatedString,

    /// An object key parsed to something other than a string.
    #[error("object key is not a string")]
    InvalidKey,

    /// Arrays/objects nested deeper than the configured maximum.
    #[error("nesting deeper than {0} levels")]
    NestingTooDeep(usize),
}

/// Errors that can occur during typed access to a [`crate::Value`].
///
/// Access errors are local to the call that made them and never corrupt
/// the tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    /// Typed access used on the wrong active variant, e.g. key-indexing
    /// a non-object.
    #[error("expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// Positional access beyond the end of an array.
    #[error("index {index} out of range for array of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}
