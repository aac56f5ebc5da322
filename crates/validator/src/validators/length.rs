//! Length validators
//!
//! [`length`] measures text in bytes, [`rune_length`] in characters.
//! Sequences and maps are measured by element count in both modes.
//! An absent or empty value always passes; combine with `required()` to
//! reject it.

use crate::foundation::{Error, Rule, ValidationError, Value};
use crate::macros::rule_config;

pub const ERR_LENGTH_TOO_LONG: ValidationError = ValidationError::from_static(
    "validation_length_too_long",
    "the length must be no more than {max}",
);
pub const ERR_LENGTH_TOO_SHORT: ValidationError = ValidationError::from_static(
    "validation_length_too_short",
    "the length must be no less than {min}",
);
pub const ERR_LENGTH_INVALID: ValidationError = ValidationError::from_static(
    "validation_length_invalid",
    "the length must be exactly {min}",
);
pub const ERR_LENGTH_OUT_OF_RANGE: ValidationError = ValidationError::from_static(
    "validation_length_out_of_range",
    "the length must be between {min} and {max}",
);
pub const ERR_LENGTH_EMPTY_REQUIRED: ValidationError = ValidationError::from_static(
    "validation_length_empty_required",
    "the value must be empty",
);

// ============================================================================
// LENGTH MODE
// ============================================================================

/// How to count text length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LengthMode {
    /// Count UTF-8 bytes.
    #[default]
    Bytes,
    /// Count Unicode scalar values.
    Chars,
}

impl LengthMode {
    /// Measures the length of a string according to this mode.
    #[inline]
    fn measure(self, input: &str) -> usize {
        match self {
            LengthMode::Bytes => input.len(),
            LengthMode::Chars => input.chars().count(),
        }
    }
}

// ============================================================================
// LENGTH
// ============================================================================

/// Checks that a value's length lies within `min..=max`.
///
/// A bound of `0` leaves that side open, except that `length(0, 0)` means the
/// value must be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Length {
    min: usize,
    max: usize,
    mode: LengthMode,
    err: ValidationError,
    enabled: bool,
}

rule_config!(Length);

impl Length {
    /// Creates a length rule with the given counting mode.
    pub fn new(min: usize, max: usize, mode: LengthMode) -> Self {
        let err = match (min, max) {
            (0, 0) => ERR_LENGTH_EMPTY_REQUIRED,
            (0, _) => ERR_LENGTH_TOO_LONG,
            (_, 0) => ERR_LENGTH_TOO_SHORT,
            _ if min == max => ERR_LENGTH_INVALID,
            _ => ERR_LENGTH_OUT_OF_RANGE,
        };
        Self {
            min,
            max,
            mode,
            err,
            enabled: true,
        }
    }

    /// The lower bound.
    pub fn min(&self) -> usize {
        self.min
    }

    /// The upper bound.
    pub fn max(&self) -> usize {
        self.max
    }

    /// The counting mode for text.
    pub fn mode(&self) -> LengthMode {
        self.mode
    }

    fn measure(&self, value: &Value<'_>) -> Result<usize, Error> {
        match value {
            Value::Str(s) => Ok(self.mode.measure(s)),
            Value::Seq(items) => Ok(items.len()),
            Value::Map(entries) => Ok(entries.len()),
            other => Err(Error::usage(format!(
                "cannot get the length of {}",
                other.kind()
            ))),
        }
    }

    fn accepts(&self, len: usize) -> bool {
        let too_short = self.min > 0 && len < self.min;
        let too_long = self.max > 0 && len > self.max;
        let must_be_empty = self.min == 0 && self.max == 0 && len > 0;
        !(too_short || too_long || must_be_empty)
    }
}

impl Rule for Length {
    fn validate(&self, value: &Value<'_>) -> Result<(), Error> {
        if !self.enabled {
            return Ok(());
        }
        let value = value.indirect();
        if value.is_empty() {
            return Ok(());
        }

        if self.accepts(self.measure(value)?) {
            Ok(())
        } else {
            Err(self
                .err
                .clone()
                .with_params([("min", self.min), ("max", self.max)])
                .into())
        }
    }
}

/// Requires the length to be within `min..=max`, counting text in bytes.
pub fn length(min: usize, max: usize) -> Length {
    Length::new(min, max, LengthMode::Bytes)
}

/// Requires the length to be within `min..=max`, counting text in characters.
pub fn rune_length(min: usize, max: usize) -> Length {
    Length::new(min, max, LengthMode::Chars)
}
