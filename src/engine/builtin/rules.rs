//! Named validation rules
//!
//! Each rule answers pass/fail for one value. The caller (the engine) has
//! already skipped empty values for every rule except `required`.

use super::BuiltinEngineError;

/// Check one named rule against a value. `Ok(true)` means the rule passed.
pub(super) fn check(
    name: &str,
    param: Option<&str>,
    value: &str,
) -> Result<bool, BuiltinEngineError> {
    match name {
        "required" => Ok(!value.is_empty()),
        "valid_email" => Ok(is_email(value)),
        "valid_url" => Ok(is_url(value)),
        "max_len" => Ok(value.chars().count() <= len_param(name, param)?),
        "min_len" => Ok(value.chars().count() >= len_param(name, param)?),
        "exact_len" => Ok(value.chars().count() == len_param(name, param)?),
        "numeric" => Ok(value.parse::<f64>().is_ok()),
        "integer" => Ok(value.parse::<i64>().is_ok()),
        "boolean" => Ok(matches!(
            value.to_ascii_lowercase().as_str(),
            "0" | "1" | "true" | "false" | "yes" | "no" | "on" | "off"
        )),
        "alpha" => Ok(!value.is_empty() && value.chars().all(char::is_alphabetic)),
        "alpha_numeric" => Ok(!value.is_empty() && value.chars().all(char::is_alphanumeric)),
        "contains" => {
            let allowed = required_param(name, param)?;
            Ok(allowed.split(';').any(|option| option == value))
        }
        "min_numeric" => Ok(match value.parse::<f64>() {
            Ok(number) => number >= numeric_param(name, param)?,
            Err(_) => false,
        }),
        "max_numeric" => Ok(match value.parse::<f64>() {
            Ok(number) => number <= numeric_param(name, param)?,
            Err(_) => false,
        }),
        other => Err(BuiltinEngineError::UnknownRule(other.to_string())),
    }
}

fn required_param<'a>(rule: &str, param: Option<&'a str>) -> Result<&'a str, BuiltinEngineError> {
    param.ok_or_else(|| BuiltinEngineError::BadParam {
        rule: rule.to_string(),
        param: None,
    })
}

fn len_param(rule: &str, param: Option<&str>) -> Result<usize, BuiltinEngineError> {
    let raw = required_param(rule, param)?;
    raw.parse().map_err(|_| BuiltinEngineError::BadParam {
        rule: rule.to_string(),
        param: Some(raw.to_string()),
    })
}

fn numeric_param(rule: &str, param: Option<&str>) -> Result<f64, BuiltinEngineError> {
    let raw = required_param(rule, param)?;
    raw.parse().map_err(|_| BuiltinEngineError::BadParam {
        rule: rule.to_string(),
        param: Some(raw.to_string()),
    })
}

/// One `@`, a non-empty local part, and a dotted domain without whitespace.
/// Deliberately permissive; real deliverability is not a validation concern.
fn is_email(value: &str) -> bool {
    let mut parts = value.splitn(2, '@');
    let (Some(local), Some(domain)) = (parts.next(), parts.next()) else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && domain.contains('.')
        && !value.chars().any(char::is_whitespace)
        && !domain.contains('@')
}

fn is_url(value: &str) -> bool {
    let rest = value
        .strip_prefix("http://")
        .or_else(|| value.strip_prefix("https://"));
    match rest {
        Some(rest) => {
            let host = rest.split('/').next().unwrap_or_default();
            !host.is_empty() && !host.chars().any(char::is_whitespace)
        }
        None => false,
    }
}
