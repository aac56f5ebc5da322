//! Threshold validators
//!
//! [`min`] and [`max`] bound a value from one side, inclusively by default.
//! [`Threshold::exclusive`] switches to a strict comparison and the matching
//! error. The zero value of a type (and the zero time) counts as "not set"
//! and always passes; combine with `required()` to reject it.

use crate::foundation::{Error, Rule, ValidationError, Value};
use crate::macros::rule_config;
use chrono::{DateTime, Utc};
use std::cmp::Ordering;
use std::fmt::{self, Display};

/// Error for `min(t)`.
pub const ERR_MIN_GREATER_EQUAL_THAN_REQUIRED: ValidationError = ValidationError::from_static(
    "validation_min_greater_equal_than_required",
    "must be no less than {threshold}",
);

/// Error for `min(t).exclusive()`.
pub const ERR_MIN_GREATER_THAN_REQUIRED: ValidationError = ValidationError::from_static(
    "validation_min_greater_than_required",
    "must be greater than {threshold}",
);

/// Error for `max(t)`.
pub const ERR_MAX_LESS_EQUAL_THAN_REQUIRED: ValidationError = ValidationError::from_static(
    "validation_max_less_equal_than_required",
    "must be no greater than {threshold}",
);

/// Error for `max(t).exclusive()`.
pub const ERR_MAX_LESS_THAN_REQUIRED: ValidationError = ValidationError::from_static(
    "validation_max_less_than_required",
    "must be less than {threshold}",
);

// ============================================================================
// BOUND
// ============================================================================

/// A threshold type: something a [`Value`] can be ordered against.
///
/// Integers compare against any integer or float value, floats against any
/// number, text against text and times against times. Any other pairing is a
/// usage error.
pub trait Bound: Display + Send + Sync + 'static {
    /// Orders `value` relative to `self`; `None` if incomparable (NaN).
    fn compare(&self, value: &Value<'_>) -> Result<Option<Ordering>, Error>;
}

fn unsupported(value: &Value<'_>) -> Error {
    Error::usage(format!("type not supported: {}", value.kind()))
}

macro_rules! impl_integer_bound {
    ($($t:ty),+) => {
        $(
            impl Bound for $t {
                fn compare(&self, value: &Value<'_>) -> Result<Option<Ordering>, Error> {
                    let threshold = *self as i128;
                    match value {
                        Value::Int(i) => Ok(Some(i128::from(*i).cmp(&threshold))),
                        Value::Uint(u) => Ok(Some(i128::from(*u).cmp(&threshold))),
                        Value::Float(f) => Ok(f.partial_cmp(&(threshold as f64))),
                        other => Err(unsupported(other)),
                    }
                }
            }
        )+
    };
}

impl_integer_bound!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

macro_rules! impl_float_bound {
    ($($t:ty),+) => {
        $(
            impl Bound for $t {
                fn compare(&self, value: &Value<'_>) -> Result<Option<Ordering>, Error> {
                    let threshold = f64::from(*self);
                    match value {
                        Value::Int(i) => Ok((*i as f64).partial_cmp(&threshold)),
                        Value::Uint(u) => Ok((*u as f64).partial_cmp(&threshold)),
                        Value::Float(f) => Ok(f.partial_cmp(&threshold)),
                        other => Err(unsupported(other)),
                    }
                }
            }
        )+
    };
}

impl_float_bound!(f32, f64);

fn compare_text(threshold: &str, value: &Value<'_>) -> Result<Option<Ordering>, Error> {
    match value {
        Value::Str(s) => Ok(Some((**s).cmp(threshold))),
        other => Err(unsupported(other)),
    }
}

impl Bound for &'static str {
    fn compare(&self, value: &Value<'_>) -> Result<Option<Ordering>, Error> {
        compare_text(self, value)
    }
}

impl Bound for String {
    fn compare(&self, value: &Value<'_>) -> Result<Option<Ordering>, Error> {
        compare_text(self, value)
    }
}

impl Bound for DateTime<Utc> {
    fn compare(&self, value: &Value<'_>) -> Result<Option<Ordering>, Error> {
        match value {
            Value::Time(t) => Ok(Some(t.cmp(self))),
            other => Err(unsupported(other)),
        }
    }
}

// ============================================================================
// THRESHOLD
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operator {
    GreaterThan,
    GreaterEqual,
    LessThan,
    LessEqual,
}

impl Operator {
    fn accepts(self, ordering: Ordering) -> bool {
        match self {
            Self::GreaterThan => ordering.is_gt(),
            Self::GreaterEqual => ordering.is_ge(),
            Self::LessThan => ordering.is_lt(),
            Self::LessEqual => ordering.is_le(),
        }
    }
}

/// Checks a value against a one-sided bound.
#[derive(Debug, Clone)]
pub struct Threshold<T: Bound> {
    threshold: T,
    operator: Operator,
    err: ValidationError,
    enabled: bool,
}

rule_config!(Threshold<T: Bound>);

impl<T: Bound> Threshold<T> {
    fn new(threshold: T, operator: Operator, err: ValidationError) -> Self {
        Self {
            threshold,
            operator,
            err,
            enabled: true,
        }
    }

    /// Excludes the bound itself from the accepted range.
    ///
    /// Also switches the default error to the strict variant; an error set
    /// earlier with `error`/`error_object` is replaced, so configure the
    /// message after this call.
    #[must_use = "builder methods must be chained or built"]
    pub fn exclusive(mut self) -> Self {
        match self.operator {
            Operator::GreaterEqual => {
                self.operator = Operator::GreaterThan;
                self.err = ERR_MIN_GREATER_THAN_REQUIRED;
            }
            Operator::LessEqual => {
                self.operator = Operator::LessThan;
                self.err = ERR_MAX_LESS_THAN_REQUIRED;
            }
            Operator::GreaterThan | Operator::LessThan => {}
        }
        self
    }

    /// The configured bound.
    pub fn threshold(&self) -> &T {
        &self.threshold
    }
}

impl<T: Bound> Rule for Threshold<T> {
    fn validate(&self, value: &Value<'_>) -> Result<(), Error> {
        if !self.enabled {
            return Ok(());
        }
        let value = value.indirect();
        if value.is_empty() {
            return Ok(());
        }

        let ordering = self.threshold.compare(value)?;
        if ordering.is_some_and(|o| self.operator.accepts(o)) {
            Ok(())
        } else {
            Err(self
                .err
                .clone()
                .with_param("threshold", &self.threshold)
                .into())
        }
    }
}

impl<T: Bound> Display for Threshold<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = match self.operator {
            Operator::GreaterThan => ">",
            Operator::GreaterEqual => ">=",
            Operator::LessThan => "<",
            Operator::LessEqual => "<=",
        };
        write!(f, "{op} {}", self.threshold)
    }
}

/// Requires the value to be no less than `min`.
pub fn min<T: Bound>(min: T) -> Threshold<T> {
    Threshold::new(min, Operator::GreaterEqual, ERR_MIN_GREATER_EQUAL_THAN_REQUIRED)
}

/// Requires the value to be no greater than `max`.
pub fn max<T: Bound>(max: T) -> Threshold<T> {
    Threshold::new(max, Operator::LessEqual, ERR_MAX_LESS_EQUAL_THAN_REQUIRED)
}

/// Requires a time no earlier than `min`.
///
/// The zero time is the Unix epoch: a value of exactly
/// `1970-01-01T00:00:00Z` counts as "not set" and passes regardless of `min`.
/// Use `not_nil()` with an `Option<DateTime<Utc>>` when the epoch is a
/// meaningful input.
pub fn min_time(min: DateTime<Utc>) -> Threshold<DateTime<Utc>> {
    self::min(min)
}

/// Requires a time no later than `max`.
///
/// As with [`min_time`], a value of exactly `1970-01-01T00:00:00Z` counts as
/// "not set" and passes.
pub fn max_time(max: DateTime<Utc>) -> Threshold<DateTime<Utc>> {
    self::max(max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{Null, validate};
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn message(result: Result<(), Error>) -> Option<String> {
        result.err().map(|e| e.to_string())
    }

    #[rstest]
    #[case(2, None)]
    #[case(0, None)]
    #[case(1, Some("must be no less than 2"))]
    #[case(3, None)]
    fn min_inclusive(#[case] input: i32, #[case] expected: Option<&str>) {
        assert_eq!(message(validate(&input, min(2))).as_deref(), expected);
    }

    #[rstest]
    #[case(2, Some("must be greater than 2"))]
    #[case(3, None)]
    #[case(0, None)]
    fn min_exclusive(#[case] input: i32, #[case] expected: Option<&str>) {
        assert_eq!(message(validate(&input, min(2).exclusive())).as_deref(), expected);
    }

    #[rstest]
    #[case(2, None)]
    #[case(3, Some("must be no greater than 2"))]
    #[case(1, None)]
    fn max_inclusive(#[case] input: i32, #[case] expected: Option<&str>) {
        assert_eq!(message(validate(&input, max(2))).as_deref(), expected);
    }

    #[test]
    fn max_exclusive() {
        let err = validate(&2, max(2).exclusive()).unwrap_err();
        assert_eq!(err.to_string(), "must be less than 2");
        assert_eq!(err.code(), Some("validation_max_less_than_required"));
    }

    #[test]
    fn mixed_integer_widths() {
        assert!(validate(&10u64, min(5i8)).is_ok());
        assert!(validate(&-1i64, max(5u8)).is_ok());
        assert!(validate(&2.5f64, min(3)).is_err());
    }

    #[test]
    fn floats_and_text() {
        assert!(validate(&1.5, max(1.0)).is_err());
        assert!(validate("b", min("a")).is_ok());
        assert!(validate("a", min("b")).is_err());
        assert!(validate("", min("b")).is_ok());
    }

    #[test]
    fn nullable_and_pointers_unwrap() {
        assert!(validate(&Null::valid(1), min(2)).is_err());
        assert!(validate(&Null::<i32>::invalid(), min(2)).is_ok());
        assert!(validate(&Some(Box::new(1)), min(2)).is_err());
    }

    #[test]
    fn time_thresholds() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let before = Utc.with_ymd_and_hms(2023, 6, 1, 0, 0, 0).unwrap();

        assert!(validate(&start, min_time(start)).is_ok());
        assert!(validate(&start, min_time(start).exclusive()).is_err());
        assert!(validate(&before, max_time(start)).is_ok());
        assert_eq!(
            validate(&before, min_time(start)).unwrap_err().to_string(),
            "must be no less than 2024-01-01 00:00:00 UTC"
        );
        assert!(validate(&DateTime::<Utc>::default(), min_time(start)).is_ok());
    }

    #[test]
    fn epoch_counts_as_unset() {
        let before_epoch = Utc.with_ymd_and_hms(1960, 1, 1, 0, 0, 0).unwrap();
        assert!(validate(&DateTime::<Utc>::UNIX_EPOCH, max_time(before_epoch)).is_ok());
        assert!(validate(&Some(DateTime::<Utc>::UNIX_EPOCH), crate::validators::required()).is_err());
    }

    #[test]
    fn type_mismatch_is_usage_error() {
        let err = validate("text", min(3)).unwrap_err();
        assert!(err.is_usage());
        assert_eq!(err.to_string(), "type not supported: string");
    }

    #[test]
    fn configuration() {
        let rule = min(10).error("too small: {threshold}");
        assert_eq!(validate(&3, rule.clone()).unwrap_err().to_string(), "too small: 10");
        assert_eq!(rule.err().code(), "validation_min_greater_equal_than_required");

        let custom = ValidationError::new("custom", "custom message");
        assert_eq!(
            validate(&3, min(10).error_object(custom)).unwrap_err().code(),
            Some("custom")
        );
        assert!(validate(&3, min(10).when(false)).is_ok());
    }

    #[test]
    fn display() {
        assert_eq!(min(3).exclusive().to_string(), "> 3");
        assert_eq!(max(1.5).to_string(), "<= 1.5");
    }
}
