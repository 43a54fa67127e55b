//! The validate-once form facade
//!
//! A [`Form`] pairs submitted data with a [`FormConfig`] and an
//! [`Engine`], and runs the pre-filter, validate, post-filter pipeline
//! lazily, at most once. Every accessor triggers the run on first use and
//! afterwards reads the cached outcome, so the validity flag, validated
//! data and error list always describe the same single execution.
//!
//! The one-shot cell making this work is a [`std::cell::OnceCell`], which is
//! `!Sync`: a form belongs to the single request that built it, and the
//! type system keeps concurrent accessors from racing the pipeline.

use std::cell::OnceCell;

use crate::config::FormConfig;
use crate::data::{ErrorRecord, FieldMap, RenderOptions, Rendered};
use crate::engine::Engine;

/// Cached result of one pipeline run. Both views come from the same
/// execution, which is what keeps the accessors mutually consistent.
#[derive(Debug)]
struct Outcome {
    validated: FieldMap,
    errors: Vec<ErrorRecord>,
}

/// A form holding submitted data, validated lazily and at most once.
///
/// Applications typically wrap `Form` per concrete form kind: a function or
/// newtype supplying the [`FormConfig`] and engine, with the request data as
/// the only per-instance input.
///
/// # Examples
///
/// ```
/// use formvet::{BuiltinEngine, Form, FormConfig, Locale, Rule};
///
/// fn signup_config() -> FormConfig {
///     FormConfig::builder()
///         .locale(Locale::En)
///         .pre_filter("name", ["trim"])
///         .rule("name", Rule::new("required"))
///         .rule("email", Rule::new("valid_email"))
///         .build()
/// }
///
/// let data = [
///     ("name".to_string(), "  Ada  ".to_string()),
///     ("email".to_string(), "ada@example.com".to_string()),
/// ]
/// .into_iter()
/// .collect();
///
/// let form = Form::new(signup_config(), BuiltinEngine::new(Locale::En), data);
/// assert_eq!(form.is_valid(), Ok(true));
/// assert_eq!(form.validated().unwrap()["name"], "Ada");
/// ```
///
/// # Reading results while invalid
///
/// [`validated`](Form::validated) is meaningful even when the form is
/// invalid (fields carry their filtered values), but it is not guaranteed
/// complete or correct; check [`is_valid`](Form::is_valid) before acting on
/// it.
#[derive(Debug)]
pub struct Form<E: Engine> {
    config: FormConfig,
    engine: E,
    raw: FieldMap,
    outcome: OnceCell<Outcome>,
}

impl<E: Engine> Form<E> {
    /// A form over `data`, sanitized by the engine's generic cleanup pass
    /// before storage.
    ///
    /// Construction is cheap: no filters or rules run until the first
    /// accessor call.
    pub fn new(config: FormConfig, engine: E, data: FieldMap) -> Self {
        let raw = engine.sanitize(data);
        Form {
            config,
            engine,
            raw,
            outcome: OnceCell::new(),
        }
    }

    /// A form over `data` stored exactly as given, skipping the sanitize
    /// pass.
    pub fn without_sanitize(config: FormConfig, engine: E, data: FieldMap) -> Self {
        Form {
            config,
            engine,
            raw: data,
            outcome: OnceCell::new(),
        }
    }

    /// The stored input data (after sanitizing, when enabled at
    /// construction).
    #[inline]
    pub fn raw(&self) -> &FieldMap {
        &self.raw
    }

    /// The form's configuration.
    #[inline]
    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// The engine this form validates with.
    #[inline]
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Whether the data met every rule. Triggers the pipeline on first use.
    ///
    /// `Err` means the pipeline could not run at all (unknown filter or rule
    /// name); it never means the data was invalid.
    pub fn is_valid(&self) -> Result<bool, E::Error> {
        Ok(self.run()?.errors.is_empty())
    }

    /// The validated (filtered) data. Triggers the pipeline on first use.
    ///
    /// Check [`is_valid`](Form::is_valid) first; see the type-level note on
    /// reading results while invalid.
    pub fn validated(&self) -> Result<&FieldMap, E::Error> {
        Ok(&self.run()?.validated)
    }

    /// The accumulated rule violations, in field declaration order.
    /// Triggers the pipeline on first use. Empty means valid.
    pub fn errors(&self) -> Result<&[ErrorRecord], E::Error> {
        Ok(&self.run()?.errors)
    }

    /// Human-readable rendering of the violations, delegated to the engine.
    /// Triggers the pipeline on first use, like every other accessor.
    pub fn readable_errors(&self, opts: &RenderOptions) -> Result<Rendered, E::Error> {
        let outcome = self.run()?;
        Ok(self.engine.render_errors(&outcome.errors, opts))
    }

    /// Run the pipeline once and cache the outcome.
    ///
    /// Engine configuration errors are not cached: the pipeline did not
    /// complete, and a later call re-attempts it.
    fn run(&self) -> Result<&Outcome, E::Error> {
        if let Some(outcome) = self.outcome.get() {
            return Ok(outcome);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(fields = self.raw.len(), "running validation pipeline");

        let mut validated = self
            .engine
            .filter(self.raw.clone(), self.config.pre_filters())?;

        let errors = self.engine.validate(&mut validated, self.config.rules())?;

        if !self.config.post_filters().is_empty() {
            validated = self.engine.filter(validated, self.config.post_filters())?;
        }

        #[cfg(feature = "tracing")]
        if errors.is_empty() {
            tracing::debug!("validation pipeline passed");
        } else {
            tracing::warn!(violations = errors.len(), "validation pipeline failed");
        }

        Ok(self.outcome.get_or_init(|| Outcome { validated, errors }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Rule;
    use crate::engine::BuiltinEngine;
    use crate::locale::Locale;

    fn data(pairs: &[(&str, &str)]) -> FieldMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn pre_rule_post_ordering() {
        let config = FormConfig::builder()
            .pre_filter("name", ["trim"])
            .rule("name", Rule::new("required"))
            .post_filter("name", ["upper_case"])
            .build();
        let form = Form::new(config, BuiltinEngine::default(), data(&[("name", " bob ")]));

        assert_eq!(form.is_valid(), Ok(true));
        assert_eq!(form.validated().unwrap()["name"], "BOB");
    }

    #[test]
    fn validity_agrees_with_error_list() {
        let config = FormConfig::builder()
            .rule("email", Rule::new("valid_email"))
            .build();
        let form = Form::new(
            config,
            BuiltinEngine::default(),
            data(&[("email", "not-an-email")]),
        );

        assert_eq!(form.is_valid(), Ok(false));
        let errors = form.errors().unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "email");
        assert_eq!(errors[0].rule, "valid_email");
        assert_eq!(form.is_valid().unwrap(), errors.is_empty());
    }

    #[test]
    fn error_value_is_the_filtered_value() {
        let config = FormConfig::builder()
            .pre_filter("code", ["upper_case"])
            .rule("code", Rule::with_param("exact_len", "4"))
            .build();
        let form = Form::new(config, BuiltinEngine::default(), data(&[("code", "abc")]));

        let errors = form.errors().unwrap();
        assert_eq!(errors[0].value, "ABC");
        assert_eq!(errors[0].param.as_deref(), Some("4"));
    }

    #[test]
    fn sanitize_toggle_changes_stored_raw_data() {
        let config = FormConfig::builder().build();
        let input = data(&[("bio", " <b>hi</b> ")]);

        let sanitized = Form::new(config.clone(), BuiltinEngine::default(), input.clone());
        let untouched = Form::without_sanitize(config, BuiltinEngine::default(), input);

        assert_eq!(sanitized.raw()["bio"], "hi");
        assert_eq!(untouched.raw()["bio"], " <b>hi</b> ");
        assert_ne!(
            sanitized.validated().unwrap(),
            untouched.validated().unwrap()
        );
    }

    #[test]
    fn unknown_rule_surfaces_from_the_triggering_accessor() {
        let config = FormConfig::builder()
            .rule("name", Rule::new("telepathy"))
            .build();
        let form = Form::new(config, BuiltinEngine::default(), data(&[("name", "bob")]));

        assert!(form.is_valid().is_err());
        // Not memoized: the next accessor re-attempts and fails the same way.
        assert!(form.errors().is_err());
    }

    #[test]
    fn readable_errors_triggers_the_pipeline_itself() {
        let config = FormConfig::builder()
            .locale(Locale::En)
            .rule("name", Rule::new("required"))
            .build();
        let form = Form::new(config, BuiltinEngine::new(Locale::En), FieldMap::new());

        // First accessor called on this instance.
        let rendered = form.readable_errors(&RenderOptions::default()).unwrap();
        let map = rendered.as_per_field().unwrap();
        assert_eq!(map["name"], "The Name field is required");
    }

    #[test]
    fn repeated_accessors_return_identical_views() {
        let config = FormConfig::builder()
            .pre_filter("name", ["trim"])
            .rule("name", Rule::new("required"))
            .build();
        let form = Form::new(config, BuiltinEngine::default(), data(&[("name", " bob ")]));

        let first = form.validated().unwrap().clone();
        assert_eq!(form.is_valid(), Ok(true));
        assert_eq!(form.validated().unwrap(), &first);
        assert!(form.errors().unwrap().is_empty());
    }
}
