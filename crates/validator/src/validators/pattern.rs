//! Text format validators
//!
//! This module is the hook for format checkers: [`string_rule`] turns any
//! `Fn(&str) -> bool` into a rule, and [`matches_regex`] checks a regular
//! expression. Both skip absent and empty values and reject non-text input.
//!
//! # Examples
//!
//! ```rust,ignore
//! use regex::Regex;
//! use ruleset_validator::prelude::*;
//!
//! let digits = string_rule(|s| s.bytes().all(|b| b.is_ascii_digit()), "must contain digits only");
//! assert!(validate("12345", digits).is_ok());
//!
//! let zip = matches_regex(Regex::new(r"^[0-9]{5}$").unwrap());
//! assert!(validate("1234", zip).is_err());
//! ```

use crate::foundation::{Error, Rule, ValidationError, Value};
use crate::macros::rule_config;
use regex::Regex;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

pub const ERR_MATCH_INVALID: ValidationError =
    ValidationError::from_static("validation_match_invalid", "must be in a valid format");

/// Extracts the text of a value, or reports that it has none.
fn ensure_str<'v>(value: &'v Value<'_>) -> Result<&'v str, Error> {
    value
        .as_str()
        .ok_or_else(|| Error::usage("must be either a string or byte slice"))
}

// ============================================================================
// STRING RULE
// ============================================================================

/// A rule backed by a text predicate.
#[derive(Clone)]
pub struct StringRule {
    check: Arc<dyn Fn(&str) -> bool + Send + Sync>,
    err: ValidationError,
    enabled: bool,
}

rule_config!(StringRule);

impl fmt::Debug for StringRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringRule")
            .field("err", &self.err)
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}

impl Rule for StringRule {
    fn validate(&self, value: &Value<'_>) -> Result<(), Error> {
        let value = value.indirect();
        if !self.enabled || value.is_empty() {
            return Ok(());
        }
        if (self.check)(ensure_str(value)?) {
            Ok(())
        } else {
            Err(self.err.clone().into())
        }
    }
}

/// Creates a rule from a text predicate and the message shown on failure.
///
/// The error code is empty; use [`string_rule_with_error`] to set one.
pub fn string_rule<F>(check: F, message: impl Into<Cow<'static, str>>) -> StringRule
where
    F: Fn(&str) -> bool + Send + Sync + 'static,
{
    string_rule_with_error(check, ValidationError::new("", message))
}

/// Creates a rule from a text predicate and a full error.
pub fn string_rule_with_error<F>(check: F, err: ValidationError) -> StringRule
where
    F: Fn(&str) -> bool + Send + Sync + 'static,
{
    StringRule {
        check: Arc::new(check),
        err,
        enabled: true,
    }
}

// ============================================================================
// MATCH
// ============================================================================

/// Requires text to match a regular expression.
#[derive(Debug, Clone)]
pub struct Match {
    pattern: Regex,
    err: ValidationError,
    enabled: bool,
}

rule_config!(Match);

impl Match {
    /// The expression values must match.
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }
}

impl Rule for Match {
    fn validate(&self, value: &Value<'_>) -> Result<(), Error> {
        let value = value.indirect();
        if !self.enabled || value.is_empty() {
            return Ok(());
        }
        if self.pattern.is_match(ensure_str(value)?) {
            Ok(())
        } else {
            Err(self.err.clone().into())
        }
    }
}

/// Creates a rule that requires text to match `pattern`.
pub fn matches_regex(pattern: Regex) -> Match {
    Match {
        pattern,
        err: ERR_MATCH_INVALID,
        enabled: true,
    }
}
