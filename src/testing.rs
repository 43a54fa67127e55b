//! Testing utilities and helpers for Formvet
//!
//! This module provides instrumentation for testing code built on forms:
//! a counting engine decorator for proving the validate-once contract, and
//! assertion macros over a form's validity.
//!
//! # Examples
//!
//! ## CountingEngine
//!
//! ```rust
//! use formvet::testing::CountingEngine;
//! use formvet::{BuiltinEngine, Form, FormConfig, Rule};
//!
//! let config = FormConfig::builder()
//!     .rule("name", Rule::new("required"))
//!     .build();
//! let engine = CountingEngine::new(BuiltinEngine::default());
//!
//! let data = [("name".to_string(), "bob".to_string())].into_iter().collect();
//! let form = Form::new(config, engine, data);
//!
//! form.is_valid().unwrap();
//! form.is_valid().unwrap();
//! assert_eq!(form.engine().validate_calls(), 1);
//! ```
//!
//! ## Assertion macros
//!
//! ```rust
//! use formvet::{assert_invalid, assert_valid, BuiltinEngine, Form, FormConfig, Rule};
//!
//! let config = FormConfig::builder()
//!     .rule("email", Rule::new("valid_email"))
//!     .build();
//!
//! let good = [("email".to_string(), "a@b.com".to_string())].into_iter().collect();
//! let form = Form::new(config.clone(), BuiltinEngine::default(), good);
//! assert_valid!(form);
//!
//! let bad = [("email".to_string(), "nope".to_string())].into_iter().collect();
//! let form = Form::new(config, BuiltinEngine::default(), bad);
//! assert_invalid!(form);
//! ```

use std::cell::Cell;

use crate::config::{FilterSpec, RuleSpec};
use crate::data::{ErrorRecord, FieldMap, RenderOptions, Rendered};
use crate::engine::Engine;

/// An engine decorator counting how often each capability is invoked.
///
/// Wrap any engine with it and hand the result to a [`Form`]; the counters
/// prove how many times the pipeline actually ran, independent of how many
/// accessor calls were made.
#[derive(Debug)]
pub struct CountingEngine<E> {
    inner: E,
    sanitize: Cell<usize>,
    filter: Cell<usize>,
    validate: Cell<usize>,
    render: Cell<usize>,
}

impl<E> CountingEngine<E> {
    /// Wrap `inner`, all counters at zero.
    pub fn new(inner: E) -> Self {
        CountingEngine {
            inner,
            sanitize: Cell::new(0),
            filter: Cell::new(0),
            validate: Cell::new(0),
            render: Cell::new(0),
        }
    }

    /// Number of `sanitize` calls so far.
    pub fn sanitize_calls(&self) -> usize {
        self.sanitize.get()
    }

    /// Number of `filter` calls so far (pre and post stages both count).
    pub fn filter_calls(&self) -> usize {
        self.filter.get()
    }

    /// Number of `validate` calls so far.
    pub fn validate_calls(&self) -> usize {
        self.validate.get()
    }

    /// Number of `render_errors` calls so far.
    pub fn render_calls(&self) -> usize {
        self.render.get()
    }
}

impl<E: Engine> Engine for CountingEngine<E> {
    type Error = E::Error;

    fn sanitize(&self, data: FieldMap) -> FieldMap {
        self.sanitize.set(self.sanitize.get() + 1);
        self.inner.sanitize(data)
    }

    fn filter(&self, data: FieldMap, spec: &FilterSpec) -> Result<FieldMap, Self::Error> {
        self.filter.set(self.filter.get() + 1);
        self.inner.filter(data, spec)
    }

    fn validate(&self, data: &mut FieldMap, spec: &RuleSpec) -> Result<Vec<ErrorRecord>, Self::Error> {
        self.validate.set(self.validate.get() + 1);
        self.inner.validate(data, spec)
    }

    fn render_errors(&self, errors: &[ErrorRecord], opts: &RenderOptions) -> Rendered {
        self.render.set(self.render.get() + 1);
        self.inner.render_errors(errors, opts)
    }
}

/// Assert that a form validates cleanly.
///
/// Panics with the accumulated errors if the form is invalid, and with the
/// engine error if the pipeline could not run.
#[macro_export]
macro_rules! assert_valid {
    ($form:expr) => {
        match $form.is_valid() {
            Ok(true) => {}
            Ok(false) => {
                panic!("Expected valid form, got errors: {:?}", $form.errors());
            }
            Err(e) => panic!("Engine configuration error: {}", e),
        }
    };
}

/// Assert that a form fails validation (but the pipeline itself runs).
#[macro_export]
macro_rules! assert_invalid {
    ($form:expr) => {
        match $form.is_valid() {
            Ok(false) => {}
            Ok(true) => panic!("Expected invalid form, but it validated cleanly"),
            Err(e) => panic!("Engine configuration error: {}", e),
        }
    };
}
