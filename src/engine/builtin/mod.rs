//! The built-in validation engine

mod filters;
mod messages;
mod rules;

use std::fmt;

use crate::config::{FilterSpec, RuleSpec};
use crate::data::{ErrorRecord, FieldMap, RenderOptions, Rendered};
use crate::engine::Engine;
use crate::locale::Locale;

/// Configuration errors from the built-in engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuiltinEngineError {
    /// A filter name no filter is registered under.
    UnknownFilter(String),
    /// A rule name no rule is registered under.
    UnknownRule(String),
    /// A rule parameter that is missing or does not parse.
    BadParam {
        /// The rule whose parameter was rejected.
        rule: String,
        /// The offending parameter, if one was given.
        param: Option<String>,
    },
}

impl fmt::Display for BuiltinEngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuiltinEngineError::UnknownFilter(name) => write!(f, "unknown filter: {:?}", name),
            BuiltinEngineError::UnknownRule(name) => write!(f, "unknown rule: {:?}", name),
            BuiltinEngineError::BadParam {
                rule,
                param: Some(param),
            } => write!(f, "rule {:?}: bad parameter {:?}", rule, param),
            BuiltinEngineError::BadParam { rule, param: None } => {
                write!(f, "rule {:?}: missing required parameter", rule)
            }
        }
    }
}

impl std::error::Error for BuiltinEngineError {}

/// A validation engine with built-in filters, rules and message templates.
///
/// Constructed bound to a [`Locale`], which only affects
/// [`render_errors`](Engine::render_errors).
///
/// Supported **filters**: `trim`, `upper_case`, `lower_case`,
/// `sanitize_string`, `whole_number`.
///
/// Supported **rules**: `required`, `valid_email`, `max_len,N`, `min_len,N`,
/// `exact_len,N`, `numeric`, `integer`, `boolean`, `alpha`, `alpha_numeric`,
/// `contains,a;b;c`, `valid_url`, `min_numeric,N`, `max_numeric,N`.
///
/// Except for `required`, every rule passes on an empty value: whether a
/// field may be absent is `required`'s concern alone, so `valid_email` on an
/// optional empty field does not fail.
///
/// # Examples
///
/// ```
/// use formvet::{BuiltinEngine, Engine, Locale};
///
/// let engine = BuiltinEngine::new(Locale::En);
/// let data = [("bio".to_string(), " <b>hi</b> ".to_string())]
///     .into_iter()
///     .collect();
///
/// let clean = engine.sanitize(data);
/// assert_eq!(clean["bio"], "hi");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinEngine {
    locale: Locale,
}

impl BuiltinEngine {
    /// An engine rendering messages for `locale`.
    pub fn new(locale: Locale) -> Self {
        BuiltinEngine { locale }
    }

    /// The locale this engine renders messages for.
    #[inline]
    pub fn locale(&self) -> Locale {
        self.locale
    }
}

impl Engine for BuiltinEngine {
    type Error = BuiltinEngineError;

    fn sanitize(&self, data: FieldMap) -> FieldMap {
        data.into_iter()
            .map(|(field, value)| (field, filters::sanitize_value(&value)))
            .collect()
    }

    fn filter(&self, mut data: FieldMap, spec: &FilterSpec) -> Result<FieldMap, Self::Error> {
        for (field, names) in spec.iter() {
            let Some(value) = data.get_mut(field) else {
                continue;
            };
            for name in names {
                let filtered = filters::apply(name, value)?;
                *value = filtered;
            }
        }
        Ok(data)
    }

    fn validate(&self, data: &mut FieldMap, spec: &RuleSpec) -> Result<Vec<ErrorRecord>, Self::Error> {
        let mut errors = Vec::new();
        for (field, field_rules) in spec.iter() {
            // A field absent from the data validates as empty, so `required`
            // still catches it.
            let value = data.get(field).cloned().unwrap_or_default();
            for rule in field_rules {
                if value.is_empty() && rule.name() != "required" {
                    continue;
                }
                if !rules::check(rule.name(), rule.param(), &value)? {
                    errors.push(ErrorRecord {
                        field: field.to_string(),
                        value: value.clone(),
                        rule: rule.name().to_string(),
                        param: rule.param().map(str::to_string),
                    });
                }
            }
        }
        Ok(errors)
    }

    fn render_errors(&self, errors: &[ErrorRecord], opts: &RenderOptions) -> Rendered {
        messages::render(self.locale, errors, opts)
    }
}
