//! WHEN combinator - conditional validation
//!
//! This module provides the [`When`] combinator which picks one of two rule
//! lists based on a condition fixed at construction time. The condition is a
//! plain `bool`, usually computed from another field of the value being
//! validated.
//!
//! # Use Cases
//!
//! - A field that is only required when another field is set
//! - Different bounds depending on an account type
//!
//! # Examples
//!
//! ```rust,ignore
//! use ruleset_validator::prelude::*;
//!
//! let is_company = true;
//! let rule = when(is_company, required()).otherwise(nil());
//! assert!(validate("ACME Inc.", rule).is_ok());
//! ```

use crate::foundation::{
    Error, IntoRules, Rule, Rules, ValidationContext, Value, validate_value,
};
use std::fmt;

/// Runs one rule list when the condition holds and another one otherwise.
///
/// Both lists go through the regular orchestrator, so
/// `when(false, a).otherwise(b)` behaves exactly like validating with `b`.
/// The `otherwise` list defaults to no rules.
#[derive(Clone)]
pub struct When {
    condition: bool,
    rules: Rules,
    else_rules: Rules,
}

impl When {
    /// Creates a new `When` combinator.
    pub fn new(condition: bool, rules: impl IntoRules) -> Self {
        Self {
            condition,
            rules: rules.into_rules(),
            else_rules: Rules::new(),
        }
    }

    /// Sets the rules used when the condition is `false`.
    #[must_use = "builder methods must be chained or built"]
    pub fn otherwise(mut self, rules: impl IntoRules) -> Self {
        self.else_rules = rules.into_rules();
        self
    }

    /// Returns the condition.
    pub fn condition(&self) -> bool {
        self.condition
    }

    fn active_rules(&self) -> &Rules {
        if self.condition {
            &self.rules
        } else {
            &self.else_rules
        }
    }
}

impl fmt::Debug for When {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("When")
            .field("condition", &self.condition)
            .field("rules", &self.rules.len())
            .field("else_rules", &self.else_rules.len())
            .finish()
    }
}

impl Rule for When {
    fn validate(&self, value: &Value<'_>) -> Result<(), Error> {
        self.validate_with_context(&ValidationContext::background(), value)
    }

    fn validate_with_context(&self, ctx: &ValidationContext, value: &Value<'_>) -> Result<(), Error> {
        validate_value(ctx, value, self.active_rules())
    }
}

/// Creates a `When` combinator.
///
/// # Examples
///
/// ```rust,ignore
/// use ruleset_validator::prelude::*;
///
/// let rule = when(false, required()).otherwise(length(0, 3));
/// assert!(validate("", rule.clone()).is_ok());
/// assert!(validate("abcd", rule).is_err());
/// ```
pub fn when(condition: bool, rules: impl IntoRules) -> When {
    When::new(condition, rules)
}
