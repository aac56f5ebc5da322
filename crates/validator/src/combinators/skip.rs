//! SKIP combinator - stops a rule list early

use crate::foundation::{Error, Rule, Value};

/// Ends evaluation of the rule list it appears in and reports success.
///
/// Rules placed before it still run. Use [`when`](Skip::when) to make the
/// skip conditional:
///
/// ```rust,ignore
/// use ruleset_validator::prelude::*;
///
/// let draft = true;
/// assert!(validate("", (skip().when(draft), required())).is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skip {
    active: bool,
}

impl Skip {
    /// Creates an active skip.
    pub const fn new() -> Self {
        Self { active: true }
    }

    /// Skips only when `condition` holds.
    #[must_use = "builder methods must be chained or built"]
    pub const fn when(mut self, condition: bool) -> Self {
        self.active = condition;
        self
    }
}

impl Default for Skip {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for Skip {
    fn validate(&self, _value: &Value<'_>) -> Result<(), Error> {
        Ok(())
    }

    fn skips_rest(&self) -> bool {
        self.active
    }
}

/// Creates an active skip rule.
pub const fn skip() -> Skip {
    Skip::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::each;
    use crate::foundation::validate;
    use crate::validators::{length, required};

    #[test]
    fn skip_stops_remaining_rules() {
        assert!(validate("", (skip(), required())).is_ok());
    }

    #[test]
    fn rules_before_skip_still_run() {
        assert!(validate("", (required(), skip())).is_err());
    }

    #[test]
    fn inactive_skip_is_transparent() {
        assert!(validate("", (skip().when(false), required())).is_err());
        assert!(validate("abc", (skip().when(false), length(1, 5))).is_ok());
    }

    #[test]
    fn skip_inside_each() {
        let items = vec!["", ""];
        assert!(validate(&items, each((skip(), required()))).is_ok());
    }
}
