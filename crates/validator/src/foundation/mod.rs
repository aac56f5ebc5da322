//! Core validation types, traits and the rule orchestrator
//!
//! This module contains the fundamental building blocks of the validation system:
//!
//! - **Values**: [`Value`], [`Record`], [`ToValue`]
//! - **Traits**: [`Rule`], [`IntoRules`], [`Validatable`]
//! - **Errors**: [`Error`], [`ValidationError`], [`ValidationErrors`]
//! - **Context**: [`ValidationContext`]
//!
//! # Architecture
//!
//! ## 1. One value shape
//!
//! Rules are not generic over their input. Every input is first described as a
//! [`Value`], and each rule matches on the shapes it understands:
//!
//! ```rust,ignore
//! use ruleset_validator::prelude::*;
//!
//! assert!(validate("hello", length(2, 10)).is_ok());
//! assert!(validate(&vec![1, 2, 3], length(2, 10)).is_ok());
//! ```
//!
//! ## 2. Ordered rule lists
//!
//! A rule list runs in order and stops at the first failure, so the order
//! decides which message the caller sees:
//!
//! ```rust,ignore
//! let err = validate("", (required(), length(5, 10))).unwrap_err();
//! assert_eq!(err.to_string(), "cannot be blank");
//! ```
//!
//! ## 3. Keyed aggregation
//!
//! Struct fields, map keys and collection elements are all checked, and
//! their failures are collected into one [`ValidationErrors`] keyed by field
//! name, key or index.
//!
//! ## 4. Self-validation
//!
//! A value with no explicit rules falls back to its own [`Validatable`]
//! implementation, if it has one.

pub mod context;
pub mod convert;
pub mod error;
pub mod record;
pub mod traits;
pub mod value;

pub use context::{ValidationContext, ValidationContextBuilder};
pub use convert::ToValue;
pub use error::{Error, ValidationError, ValidationErrors};
pub use record::{Record, RecordField};
pub use traits::{IntoRules, Rule, Rules, Validatable};
pub use value::{Delegate, Null, Value, ValueKind};

use std::sync::Arc;
use tracing::{debug, trace};

// ============================================================================
// ENTRY POINTS
// ============================================================================

/// Validates a value against an ordered rule list.
///
/// Equivalent to [`validate_with_context`] with an empty context.
///
/// # Examples
///
/// ```rust,ignore
/// use ruleset_validator::prelude::*;
///
/// assert!(validate(&42, (min(10), max(100))).is_ok());
/// assert_eq!(
///     validate(&5, min(10)).unwrap_err().to_string(),
///     "must be no less than 10",
/// );
/// ```
pub fn validate<T: ToValue + ?Sized>(value: &T, rules: impl IntoRules) -> Result<(), Error> {
    validate_with_context(&ValidationContext::background(), value, rules)
}

/// Validates a value against an ordered rule list, passing `ctx` to every rule.
///
/// Rules run in order and the first failure is returned. With an empty rule
/// list the value's own [`Validatable`] implementation is used, if any.
pub fn validate_with_context<T: ToValue + ?Sized>(
    ctx: &ValidationContext,
    value: &T,
    rules: impl IntoRules,
) -> Result<(), Error> {
    validate_value(ctx, &value.to_value(), &rules.into_rules())
}

/// Runs an already converted value through a rule slice.
///
/// This is the orchestrator that structural rules (`each`, `when`, `map`, …)
/// call back into, so nested rule lists compose with the same semantics as
/// top-level ones.
pub fn validate_value(
    ctx: &ValidationContext,
    value: &Value<'_>,
    rules: &[Arc<dyn Rule>],
) -> Result<(), Error> {
    if rules.is_empty() {
        return validate_self(ctx, value);
    }

    for rule in rules {
        if rule.skips_rest() {
            return Ok(());
        }
        if let Err(err) = rule.validate_with_context(ctx, value) {
            return Err(log_rejection(err));
        }
    }
    Ok(())
}

/// Self-validation fallback for a value with no explicit rules.
fn validate_self(ctx: &ValidationContext, value: &Value<'_>) -> Result<(), Error> {
    match value {
        Value::Delegate(delegate) => delegate
            .validator()
            .validate_with_context(ctx)
            .map_err(log_rejection),
        Value::Nullable(Some(inner)) => validate_self(ctx, inner),
        Value::Seq(items) => {
            let mut errors = ValidationErrors::new();
            for (index, item) in items.iter().enumerate() {
                accumulate(&mut errors, index.to_string(), validate_self(ctx, item))?;
            }
            errors.into_result()
        }
        Value::Map(entries) => {
            let mut errors = ValidationErrors::new();
            for (key, item) in entries {
                accumulate(&mut errors, key.clone(), validate_self(ctx, item))?;
            }
            errors.into_result()
        }
        _ => Ok(()),
    }
}

/// Records a keyed result into an aggregate.
///
/// Usage errors are not data failures and abort the traversal instead.
pub(crate) fn accumulate(
    errors: &mut ValidationErrors,
    key: String,
    result: Result<(), Error>,
) -> Result<(), Error> {
    match result {
        Err(err) if err.is_usage() => {
            debug!(key = %key, error = %err, "traversal aborted");
            Err(err)
        }
        other => {
            errors.set(key, other);
            Ok(())
        }
    }
}

fn log_rejection(err: Error) -> Error {
    match &err {
        Error::Rule(rule) => trace!(code = rule.code(), "value rejected"),
        Error::Fields(fields) => trace!(failed = fields.len(), "value rejected"),
        Error::Usage(message) => debug!(error = %message, "validation aborted"),
    }
    err
}

// ============================================================================
// TESTS
// ============================================================================
