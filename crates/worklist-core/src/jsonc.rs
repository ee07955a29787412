//! JSON-with-comments parsing
//!
//! Parsing is two separate steps:
//!
//! 1. [`strip_comments`] blanks out `//` and `/* */` comments, leaving string
//!    literals untouched and every newline in place.
//! 2. [`parse_strict`] hands the result to `serde_json`, which rejects
//!    anything that is not plain JSON (trailing commas included).
//!
//! [`parse_document`] composes the two; [`parse_works`] additionally requires
//! a top-level array.

use crate::error::{Result, WorklistError};
use serde_json::Value;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Scan {
    Code,
    String,
    LineComment,
    BlockComment,
}

/// Replace comments with whitespace
///
/// Every comment character becomes a space except line breaks, so line and
/// column numbers reported by the JSON parser still match the source.
/// An unterminated block comment blanks the rest of the input.
pub fn strip_comments(text: &str) -> String {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    let mut scan = Scan::Code;

    while let Some(c) = chars.next() {
        match scan {
            Scan::Code => match c {
                '"' => {
                    out.push(c);
                    scan = Scan::String;
                }
                '/' if chars.peek() == Some(&'/') => {
                    chars.next();
                    out.push_str("  ");
                    scan = Scan::LineComment;
                }
                '/' if chars.peek() == Some(&'*') => {
                    chars.next();
                    out.push_str("  ");
                    scan = Scan::BlockComment;
                }
                _ => out.push(c),
            },
            Scan::String => {
                out.push(c);
                match c {
                    // Keep the escaped char verbatim so `\"` does not close the string
                    '\\' => {
                        if let Some(escaped) = chars.next() {
                            out.push(escaped);
                        }
                    }
                    '"' => scan = Scan::Code,
                    _ => {}
                }
            }
            Scan::LineComment => match c {
                '\n' => {
                    out.push(c);
                    scan = Scan::Code;
                }
                '\r' => out.push(c),
                _ => out.push(' '),
            },
            Scan::BlockComment => {
                if c == '*' && chars.peek() == Some(&'/') {
                    chars.next();
                    out.push_str("  ");
                    scan = Scan::Code;
                } else if c == '\n' || c == '\r' {
                    out.push(c);
                } else {
                    out.push(' ');
                }
            }
        }
    }

    out
}

/// Parse strict JSON
pub fn parse_strict(text: &str) -> Result<Value> {
    Ok(serde_json::from_str(text)?)
}

/// Parse a JSON-with-comments document into a JSON value
pub fn parse_document(raw: &str) -> Result<Value> {
    parse_strict(&strip_comments(raw))
}

/// Parse the works document, which must be a top-level array
pub fn parse_works(raw: &str) -> Result<Vec<Value>> {
    match parse_document(raw)? {
        Value::Array(items) => Ok(items),
        other => Err(WorklistError::ParseError(format!(
            "expected a top-level array of work entries, found {}",
            json_type_name(&other)
        ))),
    }
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
