//! EACH combinator - validates each element of a collection

use crate::foundation::{
    Error, IntoRules, Rule, Rules, ValidationContext, ValidationErrors, Value, accumulate,
    validate_value,
};
use std::fmt;
use std::sync::Arc;

// ============================================================================
// EACH COMBINATOR
// ============================================================================

/// Validates every element of a sequence or every value of a map.
///
/// Failures are collected into one aggregate keyed by the element index (for
/// sequences) or by the map key. An empty or absent collection is valid; add
/// `required()` in front to forbid it. Absent elements are validated like any
/// other value, so `required()` inside `each` rejects them.
///
/// # Examples
///
/// ```rust,ignore
/// use ruleset_validator::prelude::*;
///
/// let tags = vec!["rust", "", "go"];
/// let err = validate(&tags, each(required())).unwrap_err();
/// assert_eq!(err.to_string(), "1: cannot be blank.");
/// ```
#[derive(Clone)]
pub struct Each {
    rules: Rules,
}

impl Each {
    /// Creates a new EACH combinator.
    pub fn new(rules: impl IntoRules) -> Self {
        Self {
            rules: rules.into_rules(),
        }
    }

    /// Returns the rules applied to each element.
    pub fn rules(&self) -> &[Arc<dyn Rule>] {
        &self.rules
    }
}

impl fmt::Debug for Each {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Each")
            .field("rules", &self.rules.len())
            .finish()
    }
}

impl Rule for Each {
    fn validate(&self, value: &Value<'_>) -> Result<(), Error> {
        self.validate_with_context(&ValidationContext::background(), value)
    }

    fn validate_with_context(&self, ctx: &ValidationContext, value: &Value<'_>) -> Result<(), Error> {
        let mut errors = ValidationErrors::new();
        match value.indirect() {
            Value::Nil => return Ok(()),
            Value::Seq(items) => {
                for (index, item) in items.iter().enumerate() {
                    let result = validate_value(ctx, item, &self.rules);
                    accumulate(&mut errors, index.to_string(), result)?;
                }
            }
            Value::Map(entries) => {
                for (key, item) in entries {
                    let result = validate_value(ctx, item, &self.rules);
                    accumulate(&mut errors, key.clone(), result)?;
                }
            }
            _ => return Err(Error::usage("must be an iterable (map, slice or array)")),
        }
        errors.into_result()
    }
}

/// Creates an EACH combinator.
pub fn each(rules: impl IntoRules) -> Each {
    Each::new(rules)
}

// ============================================================================
// TESTS
// ============================================================================
