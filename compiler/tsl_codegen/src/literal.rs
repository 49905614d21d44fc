//! Logging of string literals.
//!
//! The translator picks the cheapest runtime primitive for the literal:
//!
//! | bytes | emitted                              |
//! |-------|--------------------------------------|
//! | 0     | nothing                              |
//! | 1     | `<logger>::log_char('c')`            |
//! | ≥ 2   | `<logger>::log_event_str("text")`    |
//!
//! Length is measured in UTF-8 bytes, so a single non-ASCII character takes
//! the string path. Literals with embedded NULs log their pieces in a comma
//! expression.

use std::fmt::Write;

use crate::ExprBuffer;

/// Append code logging the literal `text` to `buf`.
///
/// `log_event_str` reads a C string, so a literal with embedded NULs is
/// split around them and the pieces are chained with the comma operator;
/// each NUL is logged with `log_char`.
pub fn emit_string_log(logger: &str, text: &str, buf: &mut ExprBuffer) {
    if text.is_empty() {
        tracing::trace!("empty string literal, nothing to log");
        return;
    }
    if text.len() == 1 || !text.contains('\0') {
        buf.push_expr(&primitive_call(logger, text));
        return;
    }

    let mut calls = Vec::new();
    for (i, segment) in text.split('\0').enumerate() {
        if i > 0 {
            calls.push(format!("{logger}::log_char('\\000')"));
        }
        if !segment.is_empty() {
            calls.push(primitive_call(logger, segment));
        }
    }
    buf.push_expr(&format!("({})", calls.join(", ")));
}

/// The cheapest primitive call logging the non-empty `text`.
fn primitive_call(logger: &str, text: &str) -> String {
    match (text.chars().next(), text.len()) {
        (Some(c), 1) => format!("{logger}::log_char('{}')", escape_char(c)),
        _ => format!("{logger}::log_event_str(\"{}\")", escape_str(text)),
    }
}

/// Escape one character for a C++ character or string literal.
pub fn escape_char(c: char) -> String {
    let mut out = String::with_capacity(4);
    push_escaped(&mut out, c);
    out
}

/// Escape `text` for a C++ string literal.
pub fn escape_str(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    for c in text.chars() {
        push_escaped(&mut out, c);
    }
    out
}

fn push_escaped(out: &mut String, c: char) {
    match c {
        '\\' => out.push_str("\\\\"),
        '\'' => out.push_str("\\'"),
        '"' => out.push_str("\\\""),
        // Keeps `??x` from being read as a trigraph.
        '?' => out.push_str("\\?"),
        '\x07' => out.push_str("\\a"),
        '\x08' => out.push_str("\\b"),
        '\x0c' => out.push_str("\\f"),
        '\n' => out.push_str("\\n"),
        '\r' => out.push_str("\\r"),
        '\t' => out.push_str("\\t"),
        '\x0b' => out.push_str("\\v"),
        c if c.is_ascii_control() => {
            // Fixed width so a following digit is never absorbed.
            let _ = write!(out, "\\{:03o}", u32::from(c));
        }
        c => out.push(c),
    }
}
