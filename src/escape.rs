//! String-literal escaping for emitted type text.
//!
//! Literal-type variants are rendered as double-quoted strings. Escaping is
//! deterministic: shorthand escapes for the common control characters, and
//! lowercase `\uXXXX` for every other control or non-ASCII character.
//! Characters outside the Basic Multilingual Plane are emitted as UTF-16
//! surrogate pairs, which is how the target type system spells them.

use std::fmt::Write;

/// Render a literal value as a double-quoted, escaped string literal.
pub fn quote_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        escape_char(c, &mut out);
    }
    out.push('"');
    out
}

fn escape_char(c: char, out: &mut String) {
    match c {
        '"' => out.push_str("\\\""),
        '\\' => out.push_str("\\\\"),
        '\n' => out.push_str("\\n"),
        '\r' => out.push_str("\\r"),
        '\t' => out.push_str("\\t"),
        '\u{0c}' => out.push_str("\\f"),
        '\u{08}' => out.push_str("\\b"),
        c if (c as u32) >= 0x20 && (c as u32) < 0x7f => out.push(c),
        c => {
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units) {
                // Infallible: writing to a String cannot error.
                let _ = write!(out, "\\u{:04x}", unit);
            }
        }
    }
}
