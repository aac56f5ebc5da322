//! Membership validators
//!
//! [`is_in`] accepts only listed values, [`not_in`] rejects listed values.
//! Values are compared by deep equality after pointers and nullable wrappers
//! are stripped; signed and unsigned integers compare by numeric value.
//! Absent and empty values always pass.

use crate::foundation::{Error, Rule, ToValue, ValidationError, Value};
use crate::macros::rule_config;

pub const ERR_IN_INVALID: ValidationError =
    ValidationError::from_static("validation_in_invalid", "must be a valid value");
pub const ERR_NOT_IN_INVALID: ValidationError =
    ValidationError::from_static("validation_not_in_invalid", "must not be in list");

fn candidates<I, V>(values: I) -> Vec<Value<'static>>
where
    I: IntoIterator<Item = V>,
    V: ToValue,
{
    values
        .into_iter()
        .map(|v| v.to_value().into_owned())
        .collect()
}

fn contains(candidates: &[Value<'static>], value: &Value<'_>) -> bool {
    candidates.iter().any(|c| c.indirect() == value)
}

// ============================================================================
// IN
// ============================================================================

/// Accepts only values from a fixed list.
#[derive(Debug, Clone, PartialEq)]
pub struct In {
    values: Vec<Value<'static>>,
    err: ValidationError,
    enabled: bool,
}

rule_config!(In);

impl In {
    /// The accepted values.
    pub fn values(&self) -> &[Value<'static>] {
        &self.values
    }
}

impl Rule for In {
    fn validate(&self, value: &Value<'_>) -> Result<(), Error> {
        let value = value.indirect();
        if !self.enabled || value.is_empty() || contains(&self.values, value) {
            Ok(())
        } else {
            Err(self.err.clone().into())
        }
    }
}

/// Creates a rule that accepts only the listed values.
///
/// ```rust,ignore
/// assert!(validate(&1, is_in([1, 2])).is_ok());
/// assert!(validate(&3, is_in([1, 2])).is_err());
/// assert!(validate("b", is_in(["a", "b"])).is_ok());
/// ```
pub fn is_in<I, V>(values: I) -> In
where
    I: IntoIterator<Item = V>,
    V: ToValue,
{
    In {
        values: candidates(values),
        err: ERR_IN_INVALID,
        enabled: true,
    }
}

// ============================================================================
// NOT IN
// ============================================================================

/// Rejects values from a fixed list.
#[derive(Debug, Clone, PartialEq)]
pub struct NotIn {
    values: Vec<Value<'static>>,
    err: ValidationError,
    enabled: bool,
}

rule_config!(NotIn);

impl NotIn {
    /// The rejected values.
    pub fn values(&self) -> &[Value<'static>] {
        &self.values
    }
}

impl Rule for NotIn {
    fn validate(&self, value: &Value<'_>) -> Result<(), Error> {
        let value = value.indirect();
        if self.enabled && !value.is_empty() && contains(&self.values, value) {
            Err(self.err.clone().into())
        } else {
            Ok(())
        }
    }
}

/// Creates a rule that rejects the listed values.
pub fn not_in<I, V>(values: I) -> NotIn
where
    I: IntoIterator<Item = V>,
    V: ToValue,
{
    NotIn {
        values: candidates(values),
        err: ERR_NOT_IN_INVALID,
        enabled: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{Null, validate};
    use rstest::rstest;

    #[rstest]
    #[case(1, true)]
    #[case(2, true)]
    #[case(3, false)]
    #[case(0, true)]
    fn in_integers(#[case] input: i32, #[case] valid: bool) {
        assert_eq!(validate(&input, is_in([1, 2])).is_ok(), valid);
    }

    #[test]
    fn in_unwraps_pointers() {
        let v = 1;
        let pointer = Some(Box::new(&v));
        assert!(validate(&pointer, is_in([1, 2])).is_ok());
        assert!(validate(&Null::valid(2u8), is_in([1, 2])).is_ok());
        assert!(validate(&None::<i32>, is_in([1, 2])).is_ok());
    }

    #[test]
    fn in_with_no_candidates_rejects_present_values() {
        let err = validate(&1, is_in(Vec::<i32>::new())).unwrap_err();
        assert_eq!(err.to_string(), "must be a valid value");
    }

    #[test]
    fn in_compares_text_and_sequences() {
        let allowed = ["a".to_string(), "b".to_string()];
        assert!(validate("b", is_in(&allowed)).is_ok());
        assert!(validate("c", is_in(&allowed)).is_err());
        assert!(validate(&vec![1, 2], is_in([vec![1, 2]])).is_ok());
    }

    #[test]
    fn not_in() {
        assert!(validate(&3, super::not_in([1, 2])).is_ok());
        assert!(validate(&0, super::not_in([0, 1])).is_ok());
        let err = validate(&1, super::not_in([1, 2])).unwrap_err();
        assert_eq!(err.to_string(), "must not be in list");
        assert_eq!(err.code(), Some("validation_not_in_invalid"));
    }
}
