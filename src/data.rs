//! Field data and error records
//!
//! This module defines the shapes that flow through the validation pipeline:
//! the [`FieldMap`] holding submitted values, the [`ErrorRecord`] produced for
//! each rule violation, and the [`Rendered`] output of the human-readable
//! error renderer together with its [`RenderOptions`].

use std::collections::BTreeMap;

/// Submitted form data: an ordered mapping from field name to value.
///
/// Values are strings, matching the semantics of form posts. Iteration order
/// is the field-name order, which keeps pipeline output deterministic.
pub type FieldMap = BTreeMap<String, String>;

/// A single rule violation from the validation run.
///
/// `value` holds the field's value as it stood when the rule failed, after
/// pre-filters (and any in-place filtering the engine performed during
/// validation), not the original input.
///
/// # Examples
///
/// ```
/// use formvet::ErrorRecord;
///
/// let record = ErrorRecord {
///     field: "email".to_string(),
///     value: "not-an-email".to_string(),
///     rule: "valid_email".to_string(),
///     param: None,
/// };
/// assert_eq!(record.to_string(), "email: rule 'valid_email' failed");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ErrorRecord {
    /// Name of the field that failed validation.
    pub field: String,
    /// The field's (filtered) value at the time of failure.
    pub value: String,
    /// Name of the violated rule.
    pub rule: String,
    /// The rule's parameter, when the rule takes one (e.g. `max_len,32`).
    pub param: Option<String>,
}

impl std::fmt::Display for ErrorRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.param {
            Some(param) => write!(
                f,
                "{}: rule '{}' failed (param {})",
                self.field, self.rule, param
            ),
            None => write!(f, "{}: rule '{}' failed", self.field, self.rule),
        }
    }
}

/// Options for rendering accumulated errors into human-readable form.
///
/// `field_class` and `error_class` are style-hook labels handed to the
/// renderer; the built-in engine emits them as CSS classes on the spans
/// wrapping the field name and the message.
///
/// # Examples
///
/// ```
/// use formvet::RenderOptions;
///
/// let opts = RenderOptions::default();
/// assert!(!opts.convert_to_string);
/// assert_eq!(opts.field_class, "formvet-field");
///
/// let opts = RenderOptions::as_string().error_class("alert");
/// assert!(opts.convert_to_string);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Render a single formatted string instead of a per-field map.
    pub convert_to_string: bool,
    /// Style-hook label for the field name wrapper.
    pub field_class: String,
    /// Style-hook label for the error message wrapper.
    pub error_class: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            convert_to_string: false,
            field_class: "formvet-field".to_string(),
            error_class: "formvet-error-message".to_string(),
        }
    }
}

impl RenderOptions {
    /// Default options with `convert_to_string` set.
    pub fn as_string() -> Self {
        RenderOptions {
            convert_to_string: true,
            ..Self::default()
        }
    }

    /// Replace the field-name style hook.
    pub fn field_class(mut self, class: impl Into<String>) -> Self {
        self.field_class = class.into();
        self
    }

    /// Replace the error-message style hook.
    pub fn error_class(mut self, class: impl Into<String>) -> Self {
        self.error_class = class.into();
        self
    }
}

/// Human-readable error output, shaped per [`RenderOptions::convert_to_string`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rendered {
    /// A single formatted string (one line per error).
    Text(String),
    /// A mapping from field name to its rendered message(s).
    PerField(BTreeMap<String, String>),
}

impl Rendered {
    /// The formatted string, if this is the `Text` shape.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Rendered::Text(text) => Some(text),
            Rendered::PerField(_) => None,
        }
    }

    /// The per-field map, if this is the `PerField` shape.
    pub fn as_per_field(&self) -> Option<&BTreeMap<String, String>> {
        match self {
            Rendered::Text(_) => None,
            Rendered::PerField(map) => Some(map),
        }
    }
}
