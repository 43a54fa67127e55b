//! # Formvet
//!
//! Lazy, memoized form validation for Rust.
//!
//! A [`Form`] owns a snapshot of submitted data and a validation engine, and
//! runs a fixed pipeline over it: per-field **pre-filters**, then **rules**,
//! then optional **post-filters**. The pipeline runs at most once per form
//! instance, triggered by the first accessor call, and every read view
//! (validity flag, validated data, error records, rendered messages) reports
//! from that single run.
//!
//! ## Quick Example
//!
//! ```rust
//! use formvet::{BuiltinEngine, Form, FormConfig, Locale, Rule};
//!
//! let config = FormConfig::builder()
//!     .locale(Locale::En)
//!     .pre_filter("name", ["trim"])
//!     .rule("name", Rule::new("required"))
//!     .rule("email", Rule::new("valid_email"))
//!     .post_filter("name", ["upper_case"])
//!     .build();
//!
//! let data = [
//!     ("name".to_string(), " bob ".to_string()),
//!     ("email".to_string(), "bob@example.com".to_string()),
//! ]
//! .into_iter()
//! .collect();
//!
//! let form = Form::new(config, BuiltinEngine::new(Locale::En), data);
//!
//! assert_eq!(form.is_valid(), Ok(true));
//! assert_eq!(form.validated().unwrap()["name"], "BOB");
//! ```
//!
//! ## Error accumulation
//!
//! Rule violations never abort the pipeline; every field is checked and each
//! violation becomes an [`ErrorRecord`]. Only configuration mistakes (an
//! unknown filter or rule name) surface as `Err` from the accessors.
//!
//! ```rust
//! use formvet::{BuiltinEngine, Form, FormConfig, Rule};
//!
//! let config = FormConfig::builder()
//!     .rule("email", Rule::new("valid_email"))
//!     .rule("age", Rule::new("integer"))
//!     .build();
//!
//! let data = [
//!     ("email".to_string(), "not-an-email".to_string()),
//!     ("age".to_string(), "abc".to_string()),
//! ]
//! .into_iter()
//! .collect();
//!
//! let form = Form::new(config, BuiltinEngine::default(), data);
//!
//! assert_eq!(form.is_valid(), Ok(false));
//! assert_eq!(form.errors().unwrap().len(), 2);
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod config;
pub mod data;
pub mod engine;
pub mod form;
pub mod locale;
pub mod testing;

// Re-exports
pub use config::{FilterSpec, FormConfig, FormConfigBuilder, Rule, RuleSpec};
pub use data::{ErrorRecord, FieldMap, RenderOptions, Rendered};
pub use engine::{BuiltinEngine, BuiltinEngineError, Engine};
pub use form::Form;
pub use locale::Locale;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{FormConfig, Rule};
    pub use crate::data::{ErrorRecord, FieldMap, RenderOptions, Rendered};
    pub use crate::engine::{BuiltinEngine, Engine};
    pub use crate::form::Form;
    pub use crate::locale::Locale;
}
