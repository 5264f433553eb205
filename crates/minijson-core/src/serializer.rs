//! Compact JSON serializer.
//!
//! Walks a [`Value`] tree and emits minified JSON with no inserted
//! whitespace. Serialization is total: every well-formed tree produces a
//! string. Object members are emitted in the map's key-sorted order, which
//! makes the output deterministic regardless of how the tree was built.
//!
//! String contents are emitted verbatim between quotes, mirroring the
//! parser's non-escaping contract; strings containing `"` or `\` are
//! outside the supported round-trip set.

use std::fmt::Write;

use crate::value::Value;

/// Serialize `value` into compact JSON text.
pub fn serialize(value: &Value) -> String {
    let mut out = String::new();
    write_value(value, &mut out);
    out
}

fn write_value(value: &Value, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Int(i) => {
            let _ = write!(out, "{i}");
        }
        Value::Float(f) => write_float(*f, out),
        Value::String(s) => {
            out.push('"');
            out.push_str(s);
            out.push('"');
        }
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(item, out);
            }
            out.push(']');
        }
        Value::Object(map) => {
            out.push('{');
            let mut first = true;
            for (key, val) in map {
                if !first {
                    out.push(',');
                }
                first = false;
                out.push('"');
                out.push_str(key);
                out.push_str("\":");
                write_value(val, out);
            }
            out.push('}');
        }
    }
}

/// Default decimal rendering of the float, with `.0` appended when a finite
/// value would otherwise print as a bare integer — the text keeps the
/// int/float distinction visible. Exact round-tripping of floats is not
/// guaranteed.
fn write_float(f: f64, out: &mut String) {
    let start = out.len();
    let _ = write!(out, "{f}");
    if f.is_finite() && !out[start..].contains('.') && !out[start..].contains('e') {
        out.push_str(".0");
    }
}
