use std::collections::BTreeMap;

use minijson_core::{parse, parse_with_max_depth, ParseError, Value};

/// Helper: build an object value from key/value pairs.
fn obj(pairs: &[(&str, Value)]) -> Value {
    let map: BTreeMap<String, Value> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect();
    Value::Object(map)
}

// ============================================================================
// Literals
// ============================================================================

#[test]
fn parse_null() {
    assert_eq!(parse("null"), Ok(Value::Null));
}

#[test]
fn parse_true() {
    assert_eq!(parse("true"), Ok(Value::Bool(true)));
}

#[test]
fn parse_false() {
    assert_eq!(parse("false"), Ok(Value::Bool(false)));
}

#[test]
fn parse_literal_with_surrounding_whitespace() {
    assert_eq!(parse("  \t\r\n null"), Ok(Value::Null));
}

#[test]
fn truncated_literal_is_malformed() {
    assert_eq!(parse("nul"), Err(ParseError::MalformedLiteral));
    assert_eq!(parse("tru"), Err(ParseError::MalformedLiteral));
    assert_eq!(parse("fals"), Err(ParseError::MalformedLiteral));
}

#[test]
fn misspelled_literal_is_malformed() {
    assert_eq!(parse("nill"), Err(ParseError::MalformedLiteral));
}

// ============================================================================
// Numbers
// ============================================================================

#[test]
fn digits_only_is_int() {
    assert_eq!(parse("3"), Ok(Value::Int(3)));
    assert_eq!(parse("1234567890"), Ok(Value::Int(1234567890)));
}

#[test]
fn dot_makes_float() {
    assert_eq!(parse("3.0"), Ok(Value::Float(3.0)));
    assert_eq!(parse("3.25"), Ok(Value::Float(3.25)));
}

#[test]
fn exponent_makes_float() {
    assert_eq!(parse("3e2"), Ok(Value::Float(300.0)));
}

#[test]
fn empty_input_is_malformed_number() {
    // EOF at a value position falls through to the number sub-parser.
    assert_eq!(parse(""), Err(ParseError::MalformedNumber));
    assert_eq!(parse("   "), Err(ParseError::MalformedNumber));
}

#[test]
fn leading_minus_is_not_supported() {
    // Sign handling was never part of the grammar; `-` is not a number
    // start, so the empty digit run fails conversion.
    assert_eq!(parse("-5"), Err(ParseError::MalformedNumber));
}

#[test]
fn garbage_number_is_malformed() {
    assert_eq!(parse("1.2.3"), Err(ParseError::MalformedNumber));
    assert_eq!(parse("e"), Err(ParseError::MalformedNumber));
    assert_eq!(parse("x"), Err(ParseError::MalformedNumber));
}

// ============================================================================
// Strings
// ============================================================================

#[test]
fn parse_simple_string() {
    assert_eq!(parse(r#""hello""#), Ok(Value::String("hello".into())));
}

#[test]
fn parse_empty_string() {
    assert_eq!(parse(r#""""#), Ok(Value::String(String::new())));
}

#[test]
fn string_bytes_are_verbatim_no_escape_decoding() {
    // The two-character sequence backslash-n stays two characters.
    assert_eq!(parse(r#""a\nb""#), Ok(Value::String("a\\nb".into())));
}

#[test]
fn string_stops_at_first_quote() {
    // Escaped quotes are not understood: the string ends at the first `"`
    // and the rest of the input is trailing garbage.
    assert_eq!(parse(r#""a\"b""#), Ok(Value::String("a\\".into())));
}

#[test]
fn unterminated_string() {
    assert_eq!(parse(r#""abc"#), Err(ParseError::UnterminatedString));
}

// ============================================================================
// Arrays
// ============================================================================

#[test]
fn parse_empty_array() {
    assert_eq!(parse("[]"), Ok(Value::Array(vec![])));
    assert_eq!(parse("[ \n ]"), Ok(Value::Array(vec![])));
}

#[test]
fn parse_flat_array() {
    assert_eq!(
        parse(r#"[1, "two", true, null]"#),
        Ok(Value::Array(vec![
            Value::Int(1),
            Value::String("two".into()),
            Value::Bool(true),
            Value::Null,
        ]))
    );
}

#[test]
fn parse_nested_arrays() {
    assert_eq!(
        parse("[[1],[2,[3]]]"),
        Ok(Value::Array(vec![
            Value::Array(vec![Value::Int(1)]),
            Value::Array(vec![Value::Int(2), Value::Array(vec![Value::Int(3)])]),
        ]))
    );
}

#[test]
fn array_commas_are_optional() {
    // Separators are consumed when present but never required.
    assert_eq!(
        parse("[1 2 3]"),
        Ok(Value::Array(vec![
            Value::Int(1),
            Value::Int(2),
            Value::Int(3),
        ]))
    );
}

#[test]
fn array_trailing_comma_is_tolerated() {
    assert_eq!(
        parse("[1,2,]"),
        Ok(Value::Array(vec![Value::Int(1), Value::Int(2)]))
    );
}

#[test]
fn malformed_element_fails_whole_array() {
    assert_eq!(parse("[1, x, 3]"), Err(ParseError::MalformedNumber));
}

// ============================================================================
// Objects
// ============================================================================

#[test]
fn parse_empty_object() {
    assert_eq!(parse("{}"), Ok(obj(&[])));
    assert_eq!(parse("{  }"), Ok(obj(&[])));
}

#[test]
fn parse_flat_object() {
    assert_eq!(
        parse(r#"{"a": 1, "b": "two"}"#),
        Ok(obj(&[
            ("a", Value::Int(1)),
            ("b", Value::String("two".into())),
        ]))
    );
}

#[test]
fn parse_nested_object() {
    assert_eq!(
        parse(r#"{"outer": {"inner": [1, 2]}}"#),
        Ok(obj(&[(
            "outer",
            obj(&[("inner", Value::Array(vec![Value::Int(1), Value::Int(2)]))]),
        )]))
    );
}

#[test]
fn duplicate_keys_last_write_wins() {
    let v = parse(r#"{"a":1,"a":2}"#).unwrap();
    assert_eq!(v.get("a").and_then(Value::as_int), Some(2));
    assert_eq!(v.as_object().map(BTreeMap::len), Some(1));
}

#[test]
fn non_string_key_is_invalid() {
    assert_eq!(parse(r#"{1: "a"}"#), Err(ParseError::InvalidKey));
    assert_eq!(parse(r#"{null: "a"}"#), Err(ParseError::InvalidKey));
}

#[test]
fn object_colon_and_comma_are_optional() {
    assert_eq!(
        parse(r#"{"a" 1 "b" 2}"#),
        Ok(obj(&[("a", Value::Int(1)), ("b", Value::Int(2))]))
    );
}

#[test]
fn malformed_value_fails_whole_object() {
    assert_eq!(parse(r#"{"a": tru}"#), Err(ParseError::MalformedLiteral));
}

// ============================================================================
// Top-level contract: one value, trailing content ignored
// ============================================================================

#[test]
fn trailing_semicolon_is_ignored() {
    let v = parse("{\"test\": 10};").unwrap();
    assert_eq!(v, obj(&[("test", Value::Int(10))]));
}

#[test]
fn trailing_text_is_ignored() {
    assert_eq!(parse("42 and more"), Ok(Value::Int(42)));
    assert_eq!(parse("[1] [2]"), Ok(Value::Array(vec![Value::Int(1)])));
}

// ============================================================================
// Nesting depth
// ============================================================================

#[test]
fn nesting_at_the_bound_parses() {
    let text = format!("{}1{}", "[".repeat(8), "]".repeat(8));
    assert_eq!(
        parse_with_max_depth(&text, 8).map(|v| v.is_array()),
        Ok(true)
    );
}

#[test]
fn nesting_beyond_the_bound_fails() {
    let text = format!("{}1{}", "[".repeat(9), "]".repeat(9));
    assert_eq!(
        parse_with_max_depth(&text, 8),
        Err(ParseError::NestingTooDeep(8))
    );
}

#[test]
fn adversarial_bracket_run_fails_cleanly() {
    // Far deeper than any stack could recurse through if unbounded.
    let text = "[".repeat(1_000_000);
    assert_eq!(
        parse(&text),
        Err(ParseError::NestingTooDeep(minijson_core::DEFAULT_MAX_DEPTH))
    );
}

#[test]
fn depth_counts_containers_not_values() {
    // Three scalars in one array only use one level.
    assert!(parse_with_max_depth("[1,2,3]", 1).is_ok());
    assert!(parse_with_max_depth(r#"{"a":1}"#, 1).is_ok());
    assert_eq!(
        parse_with_max_depth(r#"{"a":[1]}"#, 1),
        Err(ParseError::NestingTooDeep(1))
    );
}
