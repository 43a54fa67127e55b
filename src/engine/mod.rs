//! Validation engines
//!
//! An [`Engine`] is the capability a [`Form`](crate::Form) needs from its
//! validation backend: a generic sanitize pass, named per-field filtering,
//! rule validation with error accumulation, and locale-aware rendering of
//! the accumulated errors. The form's pipeline logic never depends on a
//! concrete backend, so alternate engines can be substituted freely.
//!
//! The crate ships one implementation, [`BuiltinEngine`], covering the
//! common filters and rules; its docs list the supported names.

mod builtin;

pub use builtin::{BuiltinEngine, BuiltinEngineError};

use crate::config::{FilterSpec, RuleSpec};
use crate::data::{ErrorRecord, FieldMap, RenderOptions, Rendered};

/// Capability contract for a validation backend.
///
/// `Error` covers configuration mistakes only (an unknown filter or rule
/// name, a malformed rule parameter). Data that merely fails validation is
/// not an error at this level; violations come back as [`ErrorRecord`]s from
/// [`validate`](Engine::validate).
pub trait Engine {
    /// Configuration errors surfaced by `filter` and `validate`.
    type Error: std::error::Error;

    /// Generic, rule-independent cleanup applied uniformly to every field.
    ///
    /// Sanitizing is total: it cannot fail and needs no per-field
    /// configuration.
    fn sanitize(&self, data: FieldMap) -> FieldMap;

    /// Apply named per-field filters in declaration order.
    ///
    /// Fields named in `spec` but absent from `data` are skipped. An unknown
    /// filter name fails the whole call.
    fn filter(&self, data: FieldMap, spec: &FilterSpec) -> Result<FieldMap, Self::Error>;

    /// Check named per-field rules, accumulating every violation.
    ///
    /// All fields are checked regardless of earlier failures. The engine may
    /// filter `data` in place as a side effect; each returned record carries
    /// the field's value as it stood when that rule failed. An unknown rule
    /// name or malformed parameter fails the whole call.
    fn validate(&self, data: &mut FieldMap, spec: &RuleSpec) -> Result<Vec<ErrorRecord>, Self::Error>;

    /// Render accumulated errors into human-readable form for the engine's
    /// locale.
    fn render_errors(&self, errors: &[ErrorRecord], opts: &RenderOptions) -> Rendered;
}
