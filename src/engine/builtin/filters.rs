//! Named value filters

use super::BuiltinEngineError;

/// Apply one named filter to a value.
pub(super) fn apply(name: &str, value: &str) -> Result<String, BuiltinEngineError> {
    match name {
        "trim" => Ok(value.trim().to_string()),
        "upper_case" => Ok(value.to_uppercase()),
        "lower_case" => Ok(value.to_lowercase()),
        "sanitize_string" => Ok(sanitize_value(value)),
        "whole_number" => Ok(value.chars().filter(char::is_ascii_digit).collect()),
        other => Err(BuiltinEngineError::UnknownFilter(other.to_string())),
    }
}

/// The generic sanitize pass: strip HTML-like tags and control characters,
/// then trim surrounding whitespace.
pub(super) fn sanitize_value(value: &str) -> String {
    let stripped: String = strip_tags(value)
        .chars()
        .filter(|c| !c.is_control())
        .collect();
    stripped.trim().to_string()
}

/// Remove `<...>` tag sequences. An unterminated `<` drops the remainder of
/// the string, matching the usual strip-tags behavior.
fn strip_tags(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut in_tag = false;
    for c in value.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}
