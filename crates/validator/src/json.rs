//! JSON integration.
//!
//! - `serde_json::Value` implements [`ToValue`], so parsed documents can be
//!   validated with the same rules as Rust values.
//! - Errors implement `Serialize`: a rule error becomes its rendered message
//!   and an aggregate becomes an object keyed like its text form.
//!
//! # Examples
//!
//! ```
//! use ruleset_validator::prelude::*;
//! use serde_json::json;
//!
//! let doc = json!({ "name": "", "tags": ["a", ""] });
//! let err = validate(&doc, map([
//!     key("name", required()),
//!     key("tags", each(required())),
//! ])).unwrap_err();
//!
//! assert_eq!(
//!     serde_json::to_value(&err).unwrap(),
//!     json!({ "name": "cannot be blank", "tags": { "1": "cannot be blank" } }),
//! );
//! ```

use crate::foundation::{Error, ToValue, ValidationError, ValidationErrors, Value};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::borrow::Cow;

impl ToValue for serde_json::Value {
    fn to_value(&self) -> Value<'_> {
        match self {
            serde_json::Value::Null => Value::Nil,
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Value::Uint(u)
                } else {
                    n.as_f64().map_or(Value::Nil, Value::Float)
                }
            }
            serde_json::Value::String(s) => Value::Str(Cow::Borrowed(s)),
            serde_json::Value::Array(items) => {
                Value::Seq(items.iter().map(ToValue::to_value).collect())
            }
            serde_json::Value::Object(entries) => Value::Map(
                entries
                    .iter()
                    .map(|(k, v)| (k.clone(), v.to_value()))
                    .collect(),
            ),
        }
    }
}

impl Serialize for ValidationError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.render())
    }
}

impl Serialize for ValidationErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, error) in self.iter() {
            map.serialize_entry(key, error)?;
        }
        map.end()
    }
}

impl Serialize for Error {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Error::Rule(err) => err.serialize(serializer),
            Error::Fields(errs) => errs.serialize(serializer),
            Error::Usage(message) => serializer.serialize_str(message),
        }
    }
}
