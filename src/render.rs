//! Indented rendering of value trees.
//!
//! Serializes a [`JsonValue`] back to multi-line text with two spaces of
//! indentation per nesting level. Rendering is total: any tree renders
//! without a failure mode, and output for a given tree is deterministic.
//!
//! String contents are emitted verbatim between quotes, mirroring the
//! scanner's no-decoding rule, so escape sequences survive a round trip
//! exactly as written.

use indexmap::IndexMap;

use crate::value::JsonValue;

const INDENT: &str = "  ";

/// Render a value tree to indented text at nesting level 0.
pub fn render(value: &JsonValue) -> String {
    render_indented(value, 0)
}

/// Render a value tree to indented text starting at the given nesting level.
///
/// The level sets the indentation of a container's children and closing
/// delimiter; the first line carries no leading indent so the output can be
/// spliced after a key or into surrounding text.
pub fn render_indented(value: &JsonValue, level: usize) -> String {
    let mut output = String::new();
    write_value(value, level, &mut output);
    output
}

/// Append one value to the output at the given nesting level.
fn write_value(value: &JsonValue, level: usize, output: &mut String) {
    match value {
        JsonValue::Null => output.push_str("null"),
        JsonValue::Bool(true) => output.push_str("true"),
        JsonValue::Bool(false) => output.push_str("false"),
        JsonValue::Integer(n) => output.push_str(&n.to_string()),
        JsonValue::Float(x) => output.push_str(&format_float(*x)),
        JsonValue::String(s) => write_string(s, output),
        JsonValue::Array(items) => write_array(items, level, output),
        JsonValue::Object(entries) => write_object(entries, level, output),
    }
}

/// Format a float so it reads back as a float: a finite value with no
/// fractional part keeps a trailing `.0`.
fn format_float(x: f64) -> String {
    if x.is_finite() && x.fract() == 0.0 {
        format!("{:.1}", x)
    } else {
        x.to_string()
    }
}

/// Append a string literal, contents verbatim.
fn write_string(s: &str, output: &mut String) {
    output.push('"');
    output.push_str(s);
    output.push('"');
}

/// Append an array, one element per line. Empty arrays stay inline.
fn write_array(items: &[JsonValue], level: usize, output: &mut String) {
    if items.is_empty() {
        output.push_str("[]");
        return;
    }

    output.push_str("[\n");
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            output.push_str(",\n");
        }
        push_indent(level + 1, output);
        write_value(item, level + 1, output);
    }
    output.push('\n');
    push_indent(level, output);
    output.push(']');
}

/// Append an object, one member per line in insertion order. Empty objects
/// stay inline.
fn write_object(entries: &IndexMap<String, JsonValue>, level: usize, output: &mut String) {
    if entries.is_empty() {
        output.push_str("{}");
        return;
    }

    output.push_str("{\n");
    for (i, (key, value)) in entries.iter().enumerate() {
        if i > 0 {
            output.push_str(",\n");
        }
        push_indent(level + 1, output);
        write_string(key, output);
        output.push_str(": ");
        write_value(value, level + 1, output);
    }
    output.push('\n');
    push_indent(level, output);
    output.push('}');
}

fn push_indent(level: usize, output: &mut String) {
    for _ in 0..level {
        output.push_str(INDENT);
    }
}
