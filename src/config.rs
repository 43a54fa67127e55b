//! Per-form configuration
//!
//! Each concrete form in an application declares one immutable [`FormConfig`]:
//! the rendering locale, the pre-filters applied before validation, the rules
//! the data must meet, and the post-filters applied after validation. The
//! config is built once (typically in a `fn config() -> FormConfig` next to
//! the form's constructor) and shared by every instance of that form.
//!
//! # Examples
//!
//! ```
//! use formvet::{FormConfig, Locale, Rule};
//!
//! let config = FormConfig::builder()
//!     .locale(Locale::En)
//!     .pre_filter("username", ["trim", "lower_case"])
//!     .rule("username", Rule::new("required"))
//!     .rule("username", Rule::with_param("max_len", "32"))
//!     .post_filter("username", ["sanitize_string"])
//!     .build();
//!
//! assert_eq!(config.locale(), Locale::En);
//! assert!(!config.post_filters().is_empty());
//! ```

use crate::locale::Locale;

/// A named validation rule with an optional parameter.
///
/// The rule name is resolved by the engine; an unknown name is a
/// configuration error surfaced when the pipeline first runs. Parameters are
/// uninterpreted strings here; the engine parses them (e.g. `max_len` expects
/// a length).
///
/// # Examples
///
/// ```
/// use formvet::Rule;
///
/// let required = Rule::new("required");
/// assert_eq!(required.name(), "required");
/// assert_eq!(required.param(), None);
///
/// let max = Rule::with_param("max_len", "32");
/// assert_eq!(max.param(), Some("32"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rule {
    name: String,
    param: Option<String>,
}

impl Rule {
    /// A parameterless rule.
    pub fn new(name: impl Into<String>) -> Self {
        Rule {
            name: name.into(),
            param: None,
        }
    }

    /// A rule carrying a parameter.
    pub fn with_param(name: impl Into<String>, param: impl Into<String>) -> Self {
        Rule {
            name: name.into(),
            param: Some(param.into()),
        }
    }

    /// The rule name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The rule parameter, if any.
    #[inline]
    pub fn param(&self) -> Option<&str> {
        self.param.as_deref()
    }
}

/// An ordered mapping from field name to the filter names applied to it.
///
/// Declaration order is preserved both across fields and within a field's
/// filter list; engines apply filters in exactly this order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FilterSpec {
    entries: Vec<(String, Vec<String>)>,
}

impl FilterSpec {
    /// An empty spec (no filters declared).
    pub fn new() -> Self {
        Self::default()
    }

    /// Append filters for a field. Repeated calls for the same field extend
    /// its filter list.
    pub fn add<I, S>(&mut self, field: impl Into<String>, filters: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let field = field.into();
        let filters = filters.into_iter().map(Into::into);
        match self.entries.iter_mut().find(|(name, _)| *name == field) {
            Some((_, existing)) => existing.extend(filters),
            None => self.entries.push((field, filters.collect())),
        }
    }

    /// Whether any filter is declared at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate fields and their filter lists in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(field, filters)| (field.as_str(), filters.as_slice()))
    }
}

/// An ordered mapping from field name to the rules it must meet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RuleSpec {
    entries: Vec<(String, Vec<Rule>)>,
}

impl RuleSpec {
    /// An empty spec (no rules declared).
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule for a field. Repeated calls for the same field extend
    /// its rule list.
    pub fn add(&mut self, field: impl Into<String>, rule: Rule) {
        let field = field.into();
        match self.entries.iter_mut().find(|(name, _)| *name == field) {
            Some((_, existing)) => existing.push(rule),
            None => self.entries.push((field, vec![rule])),
        }
    }

    /// Whether any rule is declared at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate fields and their rule lists in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Rule])> {
        self.entries
            .iter()
            .map(|(field, rules)| (field.as_str(), rules.as_slice()))
    }
}

/// Immutable configuration for one kind of form.
///
/// Built via [`FormConfig::builder`]; never mutated afterwards. The same
/// config value is meant to be shared by every instance of the form it
/// describes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormConfig {
    locale: Locale,
    pre_filters: FilterSpec,
    rules: RuleSpec,
    post_filters: FilterSpec,
}

impl FormConfig {
    /// Start building a config. The locale defaults to [`Locale::PtBr`].
    pub fn builder() -> FormConfigBuilder {
        FormConfigBuilder {
            config: FormConfig::default(),
        }
    }

    /// The rendering locale.
    #[inline]
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Filters applied before validation.
    #[inline]
    pub fn pre_filters(&self) -> &FilterSpec {
        &self.pre_filters
    }

    /// Rules the data must meet.
    #[inline]
    pub fn rules(&self) -> &RuleSpec {
        &self.rules
    }

    /// Filters applied after validation. An empty spec skips the post-filter
    /// stage entirely.
    #[inline]
    pub fn post_filters(&self) -> &FilterSpec {
        &self.post_filters
    }
}

/// Builder for [`FormConfig`].
///
/// # Examples
///
/// ```
/// use formvet::{FormConfig, Rule};
///
/// let config = FormConfig::builder()
///     .pre_filter("name", ["trim"])
///     .rule("name", Rule::new("required"))
///     .build();
///
/// assert!(config.post_filters().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct FormConfigBuilder {
    config: FormConfig,
}

impl FormConfigBuilder {
    /// Set the rendering locale.
    pub fn locale(mut self, locale: Locale) -> Self {
        self.config.locale = locale;
        self
    }

    /// Declare pre-filters for a field, applied before validation in the
    /// given order.
    pub fn pre_filter<I, S>(mut self, field: impl Into<String>, filters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.pre_filters.add(field, filters);
        self
    }

    /// Declare a rule for a field.
    pub fn rule(mut self, field: impl Into<String>, rule: Rule) -> Self {
        self.config.rules.add(field, rule);
        self
    }

    /// Declare several rules for a field at once.
    pub fn rules<I>(mut self, field: impl Into<String>, rules: I) -> Self
    where
        I: IntoIterator<Item = Rule>,
    {
        let field = field.into();
        for rule in rules {
            self.config.rules.add(field.clone(), rule);
        }
        self
    }

    /// Declare post-filters for a field, applied after validation in the
    /// given order.
    pub fn post_filter<I, S>(mut self, field: impl Into<String>, filters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.post_filters.add(field, filters);
        self
    }

    /// Finish building.
    pub fn build(self) -> FormConfig {
        self.config
    }
}
