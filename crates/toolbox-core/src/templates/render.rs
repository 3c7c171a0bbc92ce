//! Placeholder substitution for `{{key}}` markers

use crate::error::GenerateError;
use std::collections::HashMap;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Substitution values keyed by placeholder name
pub type Variables = HashMap<&'static str, String>;

/// Replace every `{{key}}` in `source` with its value.
///
/// Single pass: substituted values are copied verbatim and never scanned for
/// markers, so user-supplied text cannot inject placeholders.
pub fn substitute(
    template: &'static str,
    source: &str,
    vars: &Variables,
) -> Result<String, GenerateError> {
    let mut out = String::with_capacity(source.len());
    let mut rest = source;

    while let Some(start) = rest.find(OPEN) {
        out.push_str(&rest[..start]);
        let after_open = &rest[start + OPEN.len()..];
        let end = after_open.find(CLOSE).ok_or_else(|| GenerateError::Template {
            template,
            reason: "unterminated placeholder".to_string(),
        })?;

        let key = after_open[..end].trim();
        let value = vars.get(key).ok_or_else(|| GenerateError::Template {
            template,
            reason: format!("unknown placeholder '{}'", key),
        })?;
        out.push_str(value);

        rest = &after_open[end + CLOSE.len()..];
    }
    out.push_str(rest);

    Ok(out)
}

/// Quoted Rust string literal for `text`, with escapes
pub fn rust_string_literal(text: &str) -> String {
    format!("{:?}", text)
}

/// Escape text for use inside HTML element content or attributes
pub fn html_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
