//! Recursive-descent JSON parser.
//!
//! The parser walks a UTF-8 input with a single byte cursor and one byte of
//! lookahead: at each value position it skips whitespace, inspects the next
//! byte, and dispatches to a sub-parser (literal, number, string, array,
//! object). Containers recurse back into value parsing, with an explicit
//! depth counter bounding the recursion.
//!
//! # Lenient by contract
//!
//! - The top-level entry parses exactly one value and ignores anything after
//!   it, so `{"a":1};` parses to `{"a":1}`.
//! - Commas in arrays/objects and colons after keys are consumed when
//!   present but never required or counted.
//! - String contents are the verbatim bytes between the quotes; backslash
//!   escapes are not interpreted, so a string cannot contain `"`.
//! - Numbers are a bare run of digits, `.`, and `e` — no sign handling, so
//!   leading-minus numbers do not parse.

use std::collections::BTreeMap;

use crate::error::ParseError;
use crate::value::Value;

/// Nesting bound used by [`parse`]. Deep enough for any realistic document,
/// shallow enough that adversarial bracket runs fail with
/// [`ParseError::NestingTooDeep`] instead of exhausting the call stack.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Parse one JSON value from `text`, ignoring trailing content.
pub fn parse(text: &str) -> Result<Value, ParseError> {
    parse_with_max_depth(text, DEFAULT_MAX_DEPTH)
}

/// Parse one JSON value with an explicit container-nesting bound.
pub fn parse_with_max_depth(text: &str, max_depth: usize) -> Result<Value, ParseError> {
    Parser::new(text, max_depth).parse_value()
}

struct Parser<'a> {
    text: &'a str,
    pos: usize,
    depth: usize,
    max_depth: usize,
}

impl<'a> Parser<'a> {
    fn new(text: &'a str, max_depth: usize) -> Self {
        Parser {
            text,
            pos: 0,
            depth: 0,
            max_depth,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.text.as_bytes().get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t' | b'\n' | b'\r')) {
            self.pos += 1;
        }
    }

    /// Consume `byte` if it is next; no-op otherwise.
    fn eat(&mut self, byte: u8) {
        if self.peek() == Some(byte) {
            self.pos += 1;
        }
    }

    fn enter(&mut self) -> Result<(), ParseError> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(ParseError::NestingTooDeep(self.max_depth));
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    /// One value position: skip whitespace, dispatch on the lookahead byte.
    /// Anything that is not a literal, string, or container start is handed
    /// to the number parser (which rejects it as `MalformedNumber`).
    fn parse_value(&mut self) -> Result<Value, ParseError> {
        self.skip_whitespace();
        match self.peek() {
            Some(b'n') => self.parse_literal("null", Value::Null),
            Some(b't') => self.parse_literal("true", Value::Bool(true)),
            Some(b'f') => self.parse_literal("false", Value::Bool(false)),
            Some(b'"') => self.parse_string(),
            Some(b'[') => self.parse_array(),
            Some(b'{') => self.parse_object(),
            _ => self.parse_number(),
        }
    }

    fn parse_literal(&mut self, keyword: &str, value: Value) -> Result<Value, ParseError> {
        if self.text[self.pos..].starts_with(keyword) {
            self.pos += keyword.len();
            Ok(value)
        } else {
            Err(ParseError::MalformedLiteral)
        }
    }

    /// Greedily consume digits, `.`, and `e`; the token is a float if it
    /// contains `.` or `e`, an integer otherwise. An empty token (EOF or a
    /// byte no sub-parser claims, including `-`) fails conversion.
    fn parse_number(&mut self) -> Result<Value, ParseError> {
        let start = self.pos;
        while matches!(self.peek(), Some(b) if b.is_ascii_digit() || b == b'.' || b == b'e') {
            self.pos += 1;
        }
        let token = &self.text[start..self.pos];
        if token.contains('.') || token.contains('e') {
            token
                .parse::<f64>()
                .map(Value::Float)
                .map_err(|_| ParseError::MalformedNumber)
        } else {
            token
                .parse::<i64>()
                .map(Value::Int)
                .map_err(|_| ParseError::MalformedNumber)
        }
    }

    /// The verbatim bytes between the opening quote and the next `"`.
    fn parse_string(&mut self) -> Result<Value, ParseError> {
        self.pos += 1; // opening "
        let start = self.pos;
        let mut end = start;
        let bytes = self.text.as_bytes();
        while end < bytes.len() && bytes[end] != b'"' {
            end += 1;
        }
        if end == bytes.len() {
            return Err(ParseError::UnterminatedString);
        }
        self.pos = end + 1; // closing "
        Ok(Value::String(self.text[start..end].to_string()))
    }

    fn parse_array(&mut self) -> Result<Value, ParseError> {
        self.enter()?;
        self.pos += 1; // [
        let mut items = Vec::new();
        loop {
            self.skip_whitespace();
            match self.peek() {
                None | Some(b']') => break,
                _ => {}
            }
            items.push(self.parse_value()?);
            self.skip_whitespace();
            self.eat(b',');
        }
        self.eat(b']');
        self.leave();
        Ok(Value::Array(items))
    }

    /// Keys are parsed as full values and rejected unless they are strings;
    /// a repeated key overwrites the earlier entry.
    fn parse_object(&mut self) -> Result<Value, ParseError> {
        self.enter()?;
        self.pos += 1; // {
        let mut map = BTreeMap::new();
        loop {
            self.skip_whitespace();
            match self.peek() {
                None | Some(b'}') => break,
                _ => {}
            }
            let key = match self.parse_value()? {
                Value::String(s) => s,
                _ => return Err(ParseError::InvalidKey),
            };
            self.skip_whitespace();
            self.eat(b':');
            let value = self.parse_value()?;
            map.insert(key, value);
            self.skip_whitespace();
            self.eat(b',');
        }
        self.eat(b'}');
        self.leave();
        Ok(Value::Object(map))
    }
}
