//! Absence validators
//!
//! The inverse of the presence rules: [`nil`] requires the value to be
//! absent, [`empty`] requires it to be absent or the zero value of its type.

use crate::foundation::{Error, Rule, ValidationError, Value};
use crate::macros::rule_config;

pub const ERR_NIL: ValidationError = ValidationError::from_static("validation_nil", "must be blank");
pub const ERR_EMPTY: ValidationError =
    ValidationError::from_static("validation_empty", "must be blank");

/// Requires the value to be absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nil {
    err: ValidationError,
    enabled: bool,
}

rule_config!(Nil);

impl Rule for Nil {
    fn validate(&self, value: &Value<'_>) -> Result<(), Error> {
        if !self.enabled || value.is_nil() {
            Ok(())
        } else {
            Err(self.err.clone().into())
        }
    }
}

/// Requires the value to be absent or the zero value of its type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Empty {
    err: ValidationError,
    enabled: bool,
}

rule_config!(Empty);

impl Rule for Empty {
    fn validate(&self, value: &Value<'_>) -> Result<(), Error> {
        if !self.enabled || value.is_empty() {
            Ok(())
        } else {
            Err(self.err.clone().into())
        }
    }
}

/// Creates a rule that requires an absent value.
#[must_use]
pub fn nil() -> Nil {
    Nil {
        err: ERR_NIL,
        enabled: true,
    }
}

/// Creates a rule that requires an absent or empty value.
#[must_use]
pub fn empty() -> Empty {
    Empty {
        err: ERR_EMPTY,
        enabled: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::validate;

    #[test]
    fn nil_rule() {
        assert!(validate(&None::<i32>, nil()).is_ok());
        assert!(validate(&Some(0), nil()).is_err());
        assert!(validate("", nil()).is_err());
        assert!(validate("abc", nil().when(false)).is_ok());
    }

    #[test]
    fn empty_rule() {
        assert!(validate(&None::<i32>, empty()).is_ok());
        assert!(validate(&Some(0), empty()).is_ok());
        assert!(validate("", empty()).is_ok());
        let err = validate("abc", empty()).unwrap_err();
        assert_eq!(err.to_string(), "must be blank");
        assert_eq!(err.code(), Some("validation_empty"));
        assert!(validate("abc", empty().when(false)).is_ok());
        assert!(validate(&Some(3), empty().when(true)).is_err());
    }

    #[test]
    fn error_object_replaces_error() {
        let custom = ValidationError::new("must_be_unset", "leave this empty");
        let err = validate("abc", nil().error_object(custom.clone())).unwrap_err();
        assert_eq!(err.as_rule(), Some(&custom));
    }
}
