//! FIELD combinator - validates named fields of structs
//!
//! [`validate_struct`] walks a [`Record`](crate::foundation::Record) and
//! checks each listed [`Field`] with its own rule list. Every field is
//! checked; failures are collected into one aggregate keyed by field name.
//!
//! ```rust,ignore
//! use ruleset_validator::prelude::*;
//!
//! struct Address { street: String, city: String }
//! record!(Address { "Street" => street, "City" => city });
//!
//! let address = Address { street: String::new(), city: String::new() };
//! let err = validate_struct(&address, [
//!     field("Street", required()),
//!     field("City", required()),
//! ]).unwrap_err();
//! assert_eq!(err.to_string(), "City: cannot be blank; Street: cannot be blank.");
//! ```

use crate::foundation::{
    Error, IntoRules, Rule, Rules, ToValue, ValidationContext, ValidationErrors, Value,
    accumulate, validate_value,
};
use std::borrow::Cow;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

// ============================================================================
// FIELD
// ============================================================================

/// A struct field name paired with the rules for its value.
///
/// With no rules the field is checked by its own self-validation, if it has
/// any, and is otherwise accepted.
#[derive(Clone)]
pub struct Field {
    name: Cow<'static, str>,
    rules: Rules,
}

impl Field {
    /// Pairs a field name with its rules.
    pub fn new(name: impl Into<Cow<'static, str>>, rules: impl IntoRules) -> Self {
        Self {
            name: name.into(),
            rules: rules.into_rules(),
        }
    }

    /// Returns the field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the field's rules.
    pub fn rules(&self) -> &[Arc<dyn Rule>] {
        &self.rules
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("rules", &self.rules.len())
            .finish()
    }
}

/// Pairs a field name with its rules.
pub fn field(name: impl Into<Cow<'static, str>>, rules: impl IntoRules) -> Field {
    Field::new(name, rules)
}

// ============================================================================
// STRUCT VALIDATION
// ============================================================================

/// Validates the listed fields of a struct.
///
/// Equivalent to [`validate_struct_with_context`] with an empty context.
pub fn validate_struct<T, I>(value: &T, fields: I) -> Result<(), Error>
where
    T: ToValue + ?Sized,
    I: IntoIterator<Item = Field>,
{
    validate_struct_with_context(&ValidationContext::background(), value, fields)
}

/// Validates the listed fields of a struct, passing `ctx` to every rule.
///
/// Fields are resolved by name, including fields promoted from embedded
/// structs. An embedded struct listed without rules has its failures merged
/// into this aggregate rather than nested under its own name; a field listed
/// here keeps its own entry over a promoted one with the same name.
///
/// # Errors
///
/// - `Error::Fields` with one entry per failing field.
/// - `Error::Usage` if `value` is not a struct, a field name does not
///   resolve or is listed twice; a usage error raised by a field's rules is returned as is.
pub fn validate_struct_with_context<T, I>(
    ctx: &ValidationContext,
    value: &T,
    fields: I,
) -> Result<(), Error>
where
    T: ToValue + ?Sized,
    I: IntoIterator<Item = Field>,
{
    let value = value.to_value();
    let record = match value.indirect() {
        Value::Nil => return Ok(()),
        Value::Record(record) => record,
        other => {
            return Err(Error::usage(format!(
                "only a struct can be validated, got {}",
                other.kind()
            )));
        }
    };

    let mut listed = HashSet::new();
    let mut errors = ValidationErrors::new();
    let mut promoted = ValidationErrors::new();
    for entry in fields {
        if !listed.insert(entry.name.clone()) {
            return Err(Error::usage(format!(
                "field \"{}\" is listed more than once",
                entry.name
            )));
        }
        let target = record.lookup(&entry.name)?;
        let result = validate_value(ctx, target.value(), &entry.rules);

        match result {
            Err(Error::Fields(nested)) if target.is_embedded() && entry.rules.is_empty() => {
                for (key, err) in nested {
                    promoted.insert(key, err);
                }
            }
            other => accumulate(&mut errors, entry.name.into_owned(), other)?,
        }
    }

    // Listed fields own their key; promoted errors only fill the gaps.
    for (key, err) in promoted {
        if !listed.contains(key.as_str()) && !errors.contains(&key) {
            errors.insert(key, err);
        }
    }
    errors.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Record;
    use crate::validators::{length, required};
    use pretty_assertions::assert_eq;

    struct Address {
        street: String,
        city: String,
    }

    impl ToValue for Address {
        fn to_value(&self) -> Value<'_> {
            Record::new("Address")
                .field("Street", &self.street)
                .field("City", &self.city)
                .into_value()
        }
    }

    fn blank() -> Address {
        Address {
            street: String::new(),
            city: String::new(),
        }
    }

    #[test]
    fn keys_are_sorted() {
        let err = validate_struct(&blank(), [field("Street", required()), field("City", required())])
            .unwrap_err();
        assert_eq!(err.to_string(), "City: cannot be blank; Street: cannot be blank.");
    }

    #[test]
    fn all_fields_are_checked() {
        let address = Address {
            street: "Main".into(),
            city: "X".into(),
        };
        let err = validate_struct(
            &address,
            [field("Street", length(5, 50)), field("City", length(2, 50))],
        )
        .unwrap_err();
        assert_eq!(err.as_fields().map(ValidationErrors::len), Some(2));
    }

    #[test]
    fn unknown_field_is_usage_error() {
        let err = validate_struct(&blank(), [field("Zip", required())]).unwrap_err();
        assert!(err.is_usage());
        assert_eq!(err.to_string(), "field \"Zip\" cannot be found in the struct");
    }

    #[test]
    fn scalar_is_usage_error() {
        let err = validate_struct(&5, [field("Zip", required())]).unwrap_err();
        assert_eq!(err.to_string(), "only a struct can be validated, got int");
    }

    #[test]
    fn absent_struct_is_valid() {
        let none: Option<Address> = None;
        assert!(validate_struct(&none, [field("Zip", required())]).is_ok());
    }

    #[test]
    fn fields_without_rules_are_skipped() {
        assert!(validate_struct(&blank(), [field("Street", ())]).is_ok());
    }
}
