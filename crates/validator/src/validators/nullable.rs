//! Presence validators
//!
//! # Validators
//!
//! - [`Required`] - value must be present and not empty
//! - [`nil_or_not_empty`] - absent is fine, present but empty is not
//! - [`NotNil`] - value must be present; its content is not checked
//!
//! "Absent" means `None`, an invalid [`Null`](crate::foundation::Null) or
//! a null JSON value. "Empty" is the zero value of the type: `""`, `0`,
//! `false`, an empty collection or the zero time.
//!
//! # Examples
//!
//! ```rust,ignore
//! use ruleset_validator::prelude::*;
//!
//! assert!(validate("hello", required()).is_ok());
//! assert!(validate("", required()).is_err());
//! assert!(validate(&None::<String>, nil_or_not_empty()).is_ok());
//! assert!(validate(&Some(""), nil_or_not_empty()).is_err());
//! ```

use crate::foundation::{Error, Rule, ValidationError, Value};
use crate::macros::rule_config;

pub const ERR_REQUIRED: ValidationError =
    ValidationError::from_static("validation_required", "cannot be blank");
pub const ERR_NIL_OR_NOT_EMPTY: ValidationError = ValidationError::from_static(
    "validation_nil_or_not_empty_required",
    "cannot be blank",
);
pub const ERR_NOT_NIL: ValidationError =
    ValidationError::from_static("validation_not_nil_required", "is required");

// ============================================================================
// REQUIRED
// ============================================================================

/// Rejects empty values, and absent values unless built with
/// [`nil_or_not_empty`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Required {
    skip_nil: bool,
    err: ValidationError,
    enabled: bool,
}

rule_config!(Required);

impl Rule for Required {
    fn validate(&self, value: &Value<'_>) -> Result<(), Error> {
        if !self.enabled {
            return Ok(());
        }
        let is_nil = value.is_nil();
        let failed = if self.skip_nil {
            !is_nil && value.is_empty()
        } else {
            is_nil || value.is_empty()
        };
        if failed {
            Err(self.err.clone().into())
        } else {
            Ok(())
        }
    }
}

/// Requires a present, non-empty value.
#[must_use]
pub fn required() -> Required {
    Required {
        skip_nil: false,
        err: ERR_REQUIRED,
        enabled: true,
    }
}

/// Accepts an absent value but rejects a present empty one.
#[must_use]
pub fn nil_or_not_empty() -> Required {
    Required {
        skip_nil: true,
        err: ERR_NIL_OR_NOT_EMPTY,
        enabled: true,
    }
}

// ============================================================================
// NOT NIL
// ============================================================================

/// Rejects absent values only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotNil {
    err: ValidationError,
    enabled: bool,
}

rule_config!(NotNil);

impl Rule for NotNil {
    fn validate(&self, value: &Value<'_>) -> Result<(), Error> {
        if self.enabled && value.is_nil() {
            Err(self.err.clone().into())
        } else {
            Ok(())
        }
    }
}

/// Requires a present value, which may be empty.
#[must_use]
pub fn not_nil() -> NotNil {
    NotNil {
        err: ERR_NOT_NIL,
        enabled: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{Null, validate};
    use pretty_assertions::assert_eq;

    #[test]
    fn required_rejects_absent_and_empty() {
        assert!(validate("x", required()).is_ok());
        assert!(validate(&1, required()).is_ok());
        assert!(validate(&vec![0], required()).is_ok());

        for err in [
            validate("", required()),
            validate(&0, required()),
            validate(&None::<i32>, required()),
            validate(&Vec::<i32>::new(), required()),
            validate(&Null::<String>::invalid(), required()),
        ] {
            assert_eq!(err.unwrap_err().to_string(), "cannot be blank");
        }
    }

    #[test]
    fn nil_or_not_empty_accepts_absent() {
        assert!(validate(&None::<&str>, nil_or_not_empty()).is_ok());
        assert!(validate(&Some("a"), nil_or_not_empty()).is_ok());
        let err = validate(&Some(""), nil_or_not_empty()).unwrap_err();
        assert_eq!(err.code(), Some("validation_nil_or_not_empty_required"));
    }

    #[test]
    fn not_nil_ignores_content() {
        assert!(validate(&Some(""), not_nil()).is_ok());
        let err = validate(&None::<&str>, not_nil()).unwrap_err();
        assert_eq!(err.to_string(), "is required");
    }

    #[test]
    fn disabled_rules_accept_everything() {
        assert!(validate("", required().when(false)).is_ok());
        assert!(validate(&None::<i32>, not_nil().when(false)).is_ok());
        assert!(validate("", required().when(true)).is_err());
    }

    #[test]
    fn error_override_leaves_default_untouched() {
        let base = required();
        let custom = base.clone().error("please fill in");
        assert_eq!(custom.err().message(), "please fill in");
        assert_eq!(custom.err().code(), "validation_required");
        assert_eq!(base.err(), &ERR_REQUIRED);
        assert_eq!(required().err().message(), "cannot be blank");
    }
}
