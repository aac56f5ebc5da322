//! Closure-backed rules
//!
//! [`by`] turns a plain function into a rule; [`with_context`] does the same
//! for functions that also read the [`ValidationContext`]. They are the quick
//! way to add a one-off check without declaring a type.

use crate::foundation::{Error, Rule, ValidationContext, Value};
use std::fmt;

// ============================================================================
// BY
// ============================================================================

/// A rule backed by a function of the value.
#[derive(Clone, Copy)]
pub struct By<F> {
    check: F,
}

impl<F> fmt::Debug for By<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("By").finish_non_exhaustive()
    }
}

impl<F> Rule for By<F>
where
    F: Fn(&Value<'_>) -> Result<(), Error> + Send + Sync,
{
    fn validate(&self, value: &Value<'_>) -> Result<(), Error> {
        (self.check)(value)
    }
}

/// Wraps a function as a rule.
///
/// ```rust,ignore
/// use ruleset_validator::prelude::*;
///
/// let even = by(|value| match value.indirect() {
///     Value::Int(i) if i % 2 != 0 => Err(ValidationError::new("even", "must be even").into()),
///     _ => Ok(()),
/// });
/// assert!(validate(&3, even).is_err());
/// ```
pub fn by<F>(check: F) -> By<F>
where
    F: Fn(&Value<'_>) -> Result<(), Error> + Send + Sync,
{
    By { check }
}

// ============================================================================
// WITH CONTEXT
// ============================================================================

/// A rule backed by a function of the context and the value.
#[derive(Clone, Copy)]
pub struct WithContext<F> {
    check: F,
}

impl<F> fmt::Debug for WithContext<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WithContext").finish_non_exhaustive()
    }
}

impl<F> Rule for WithContext<F>
where
    F: Fn(&ValidationContext, &Value<'_>) -> Result<(), Error> + Send + Sync,
{
    fn validate(&self, value: &Value<'_>) -> Result<(), Error> {
        (self.check)(&ValidationContext::background(), value)
    }

    fn validate_with_context(&self, ctx: &ValidationContext, value: &Value<'_>) -> Result<(), Error> {
        (self.check)(ctx, value)
    }
}

/// Wraps a context-aware function as a rule.
///
/// Called without a context (through [`validate`](crate::foundation::validate)),
/// the function receives an empty one.
pub fn with_context<F>(check: F) -> WithContext<F>
where
    F: Fn(&ValidationContext, &Value<'_>) -> Result<(), Error> + Send + Sync,
{
    WithContext { check }
}
