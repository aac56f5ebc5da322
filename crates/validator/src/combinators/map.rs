//! MAP combinator - validates a dynamic map by declared key names
//!
//! [`Map`] is the keyed-map counterpart of `validate_struct`: each [`Key`]
//! names an entry and the rules for its value. Failures are aggregated under
//! the key name.
//!
//! ```rust,ignore
//! use ruleset_validator::prelude::*;
//! use std::collections::HashMap;
//!
//! let data = HashMap::from([("name", "Qiang"), ("email", "")]);
//! let rule = map([
//!     key("name", (required(), length(2, 40))),
//!     key("email", required()),
//!     key("phone", ()).optional(),
//! ]);
//! let err = validate(&data, rule).unwrap_err();
//! assert_eq!(err.to_string(), "email: cannot be blank.");
//! ```

use crate::foundation::{
    Error, IntoRules, Rule, Rules, ValidationContext, ValidationError, ValidationErrors, Value,
    accumulate, validate_value,
};
use std::collections::HashSet;
use std::fmt;

/// Error reported for a required key absent from the map.
pub const ERR_KEY_MISSING: ValidationError =
    ValidationError::from_static("validation_key_missing", "required key is missing");

/// Error reported for a key that no [`Key`] declares.
pub const ERR_KEY_UNEXPECTED: ValidationError =
    ValidationError::from_static("validation_key_unexpected", "key not expected");

// ============================================================================
// KEY
// ============================================================================

/// One declared map entry and the rules for its value.
#[derive(Clone)]
pub struct Key {
    name: String,
    rules: Rules,
    optional: bool,
}

impl Key {
    /// Declares a required key.
    pub fn new(name: impl Into<String>, rules: impl IntoRules) -> Self {
        Self {
            name: name.into(),
            rules: rules.into_rules(),
            optional: false,
        }
    }

    /// Allows the key to be absent from the map.
    #[must_use = "builder methods must be chained or built"]
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// The key name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns `true` if the key may be absent.
    pub fn is_optional(&self) -> bool {
        self.optional
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Key")
            .field("name", &self.name)
            .field("rules", &self.rules.len())
            .field("optional", &self.optional)
            .finish()
    }
}

/// Declares a required map key.
pub fn key(name: impl Into<String>, rules: impl IntoRules) -> Key {
    Key::new(name, rules)
}

// ============================================================================
// MAP
// ============================================================================

/// Validates a keyed map entry by entry.
///
/// An absent map is valid. Keys that no [`Key`] declares are rejected unless
/// [`allow_extra_keys`](Map::allow_extra_keys) is set.
#[derive(Debug, Clone)]
pub struct Map {
    keys: Vec<Key>,
    allow_extra_keys: bool,
}

impl Map {
    /// Creates a map rule from its declared keys.
    pub fn new(keys: impl IntoIterator<Item = Key>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
            allow_extra_keys: false,
        }
    }

    /// Accepts keys that are not declared.
    #[must_use = "builder methods must be chained or built"]
    pub fn allow_extra_keys(mut self) -> Self {
        self.allow_extra_keys = true;
        self
    }

    /// The declared keys.
    pub fn keys(&self) -> &[Key] {
        &self.keys
    }
}

impl Rule for Map {
    fn validate(&self, value: &Value<'_>) -> Result<(), Error> {
        self.validate_with_context(&ValidationContext::background(), value)
    }

    fn validate_with_context(&self, ctx: &ValidationContext, value: &Value<'_>) -> Result<(), Error> {
        let entries = match value.indirect() {
            Value::Nil => return Ok(()),
            Value::Map(entries) => entries,
            _ => return Err(Error::usage("only a map can be validated")),
        };

        let mut declared = HashSet::new();
        for key in &self.keys {
            if !declared.insert(key.name.as_str()) {
                return Err(Error::usage(format!(
                    "key \"{}\" is listed more than once",
                    key.name
                )));
            }
        }

        let mut errors = ValidationErrors::new();
        for key in &self.keys {
            match entries.iter().find(|(name, _)| *name == key.name) {
                Some((_, item)) => {
                    let result = validate_value(ctx, item, &key.rules);
                    accumulate(&mut errors, key.name.clone(), result)?;
                }
                None if key.optional => {}
                None => {
                    errors.insert(key.name.clone(), ERR_KEY_MISSING.into());
                }
            }
        }

        if !self.allow_extra_keys {
            for (name, _) in entries {
                if !self.keys.iter().any(|key| key.name == *name) {
                    errors.insert(name.clone(), ERR_KEY_UNEXPECTED.into());
                }
            }
        }

        errors.into_result()
    }
}

/// Creates a map rule from its declared keys.
pub fn map(keys: impl IntoIterator<Item = Key>) -> Map {
    Map::new(keys)
}
