//! Lua encoder: renders a [`LuaValue`] as Lua table-constructor source.
//!
//! The output format is a compatibility contract with luacheck config files
//! generated by earlier tooling, so the layout is fixed byte for byte:
//!
//! - **Strings**: double-quoted, only `"` is escaped (as `\"`)
//! - **Tables and sequences**: `{`, one entry per line, `,\n` between entries, `}`
//!   on its own line at the parent's indentation
//! - **Keys**: bare when they are Lua names (`^[A-Za-z_][A-Za-z0-9_]*$`),
//!   otherwise `["key"]`
//! - **Empty containers**: `{\n\n}`, the entry line stays even with no entries
//!
//! # Example
//! ```
//! use cfx_luacheck::{render, LuaTable, LuaValue};
//! let table = LuaTable::new().with("read_globals", vec!["Wait", "CreateThread"]);
//! assert_eq!(
//!     render(&LuaValue::Table(table), 0),
//!     "{\n  read_globals = {\n    \"Wait\",\n    \"CreateThread\"\n  }\n}"
//! );
//! ```

use crate::types::{LuaTable, LuaValue};

/// Render a value at the given indentation depth (two spaces per level).
///
/// Only nested lines are indented; the caller places the first line.
pub fn render(value: &LuaValue, indent: usize) -> String {
    let mut out = String::new();
    encode_value(value, indent, &mut out);
    out
}

/// Render a top-level assignment: `name = <value>`.
pub fn format_assignment(name: &str, value: &LuaValue) -> String {
    let mut out = String::with_capacity(name.len() + 3);
    out.push_str(name);
    out.push_str(" = ");
    encode_value(value, 0, &mut out);
    out
}

fn encode_value(value: &LuaValue, indent: usize, out: &mut String) {
    match value {
        LuaValue::Nil => out.push_str("nil"),
        LuaValue::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        LuaValue::Integer(n) => out.push_str(&n.to_string()),
        LuaValue::Float(f) => out.push_str(&format_float(*f)),
        LuaValue::String(s) => encode_string(s, out),
        LuaValue::Sequence(items) => encode_sequence(items, indent, out),
        LuaValue::Table(table) => encode_table(table, indent, out),
    }
}

/// `{\n<indent+1>item,\n<indent+1>item\n<indent>}`
fn encode_sequence(items: &[LuaValue], indent: usize, out: &mut String) {
    let entry_indent = make_indent(indent + 1);
    out.push_str("{\n");
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(",\n");
        }
        out.push_str(&entry_indent);
        encode_value(item, indent + 1, out);
    }
    out.push('\n');
    out.push_str(&make_indent(indent));
    out.push('}');
}

/// Same bracketing as sequences, entries rendered as `key = value`.
fn encode_table(table: &LuaTable, indent: usize, out: &mut String) {
    let entry_indent = make_indent(indent + 1);
    out.push_str("{\n");
    for (i, (key, value)) in table.iter().enumerate() {
        if i > 0 {
            out.push_str(",\n");
        }
        out.push_str(&entry_indent);
        encode_key(key, out);
        out.push_str(" = ");
        encode_value(value, indent + 1, out);
    }
    out.push('\n');
    out.push_str(&make_indent(indent));
    out.push('}');
}

/// Only the double quote is escaped. Control characters and backslashes pass
/// through untouched; callers sanitize them if they need to.
fn encode_string(s: &str, out: &mut String) {
    out.push('"');
    for ch in s.chars() {
        if ch == '"' {
            out.push_str("\\\"");
        } else {
            out.push(ch);
        }
    }
    out.push('"');
}

/// Keys that are Lua names go out bare; everything else as `["key"]`, verbatim.
fn encode_key(key: &str, out: &mut String) {
    if is_lua_name(key) {
        out.push_str(key);
    } else {
        out.push_str("[\"");
        out.push_str(key);
        out.push_str("\"]");
    }
}

/// `^[A-Za-z_][A-Za-z0-9_]*$`
pub(crate) fn is_lua_name(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Format a float the way JavaScript's `Number#toString` does: whole numbers
/// without a fraction, -0 as 0, the non-finite values spelled out, and
/// exponent notation (`1e+21`, `1e-7`) outside `[1e-6, 1e21)`.
fn format_float(f: f64) -> String {
    if f.is_nan() {
        return "NaN".to_string();
    }
    if f.is_infinite() {
        return if f > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    // Normalize -0 to 0
    let f = if f == 0.0 { 0.0 } else { f };
    let magnitude = f.abs();
    if magnitude >= 1e21 || (magnitude != 0.0 && magnitude < 1e-6) {
        let exp = format!("{:e}", f);
        return match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => {
                format!("{}e+{}", mantissa, power)
            }
            _ => exp,
        };
    }
    if f.fract() == 0.0 && magnitude < (i64::MAX as f64) {
        return (f as i64).to_string();
    }
    format!("{}", f)
}

/// Generate a 2-space-per-level indentation string.
fn make_indent(depth: usize) -> String {
    "  ".repeat(depth)
}
