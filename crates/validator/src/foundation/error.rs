//! Error types for validation failures
//!
//! Three shapes of failure flow out of the engine:
//!
//! - [`ValidationError`]: one violated constraint, carrying a stable code,
//!   a message template and the parameters that fill it.
//! - [`ValidationErrors`]: a keyed aggregate produced by struct, map and
//!   collection traversal. Entries may themselves be aggregates.
//! - [`Error::Usage`]: a programming mistake (unknown field, unsupported type),
//!   reported as plain text and never stored in an aggregate by the engine.
//!
//! All string fields use `Cow<'static, str>` so default errors can be `const`.

use smallvec::SmallVec;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

// ============================================================================
// ERROR
// ============================================================================

/// The error returned by every rule and entry point.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A single rule rejected the value.
    #[error("{0}")]
    Rule(#[from] ValidationError),

    /// Several fields, elements or keys failed.
    #[error("{0}")]
    Fields(#[from] ValidationErrors),

    /// The engine was used incorrectly; fix the calling code.
    #[error("{0}")]
    Usage(Cow<'static, str>),
}

impl Error {
    /// Creates a usage error.
    pub fn usage(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Usage(message.into())
    }

    /// Returns `true` for usage errors.
    #[must_use]
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::Usage(_))
    }

    /// Returns the rule error, if this is one.
    #[must_use]
    pub fn as_rule(&self) -> Option<&ValidationError> {
        match self {
            Self::Rule(err) => Some(err),
            _ => None,
        }
    }

    /// Returns the aggregate, if this is one.
    #[must_use]
    pub fn as_fields(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Fields(errs) => Some(errs),
            _ => None,
        }
    }

    /// Returns the error code of a rule error.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.as_rule().map(ValidationError::code)
    }
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured validation error: code, message template and parameters.
///
/// The message may contain `{name}` placeholders which are filled from the
/// parameters when the error is displayed. Placeholders without a matching
/// parameter are left as literal text.
///
/// Every builder method consumes `self` and returns the modified copy, so a
/// rule's default error is never changed through another rule.
///
/// # Examples
///
/// ```rust,ignore
/// use ruleset_validator::foundation::ValidationError;
///
/// let error = ValidationError::new("too_short", "must be at least {min} long")
///     .with_param("min", "5");
/// assert_eq!(error.to_string(), "must be at least 5 long");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    code: Cow<'static, str>,
    message: Cow<'static, str>,
    params: SmallVec<[(Cow<'static, str>, String); 2]>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message template.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            params: SmallVec::new(),
        }
    }

    /// Creates an error from static strings; usable in `const` items.
    #[must_use]
    pub const fn from_static(code: &'static str, message: &'static str) -> Self {
        Self {
            code: Cow::Borrowed(code),
            message: Cow::Borrowed(message),
            params: SmallVec::new_const(),
        }
    }

    /// Returns the machine-readable error code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the raw message template.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the bound parameters in insertion order.
    pub fn params(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_ref(), v.as_str()))
    }

    /// Looks up a parameter value by name.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns a copy with the message template replaced. The code is kept.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = message.into();
        self
    }

    /// Returns a copy bound to exactly these parameters.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_params<K, V, I>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Cow<'static, str>>,
        V: fmt::Display,
    {
        self.params = params
            .into_iter()
            .map(|(k, v)| (k.into(), v.to_string()))
            .collect();
        self
    }

    /// Returns a copy with one parameter added or replaced.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(mut self, name: impl Into<Cow<'static, str>>, value: impl fmt::Display) -> Self {
        let name = name.into();
        let value = value.to_string();
        match self.params.iter().position(|(k, _)| *k == name) {
            Some(i) => self.params[i].1 = value,
            None => self.params.push((name, value)),
        }
        self
    }

    /// Renders the message template with the bound parameters.
    #[must_use]
    pub fn render(&self) -> Cow<'_, str> {
        if self.params.is_empty() || !self.message.contains('{') {
            return Cow::Borrowed(&self.message);
        }

        let mut out = String::with_capacity(self.message.len() + 8);
        let mut rest: &str = &self.message;
        while let Some(start) = rest.find('{') {
            out.push_str(&rest[..start]);
            let after = &rest[start + 1..];
            let Some(end) = after.find('}') else {
                out.push_str(&rest[start..]);
                rest = "";
                break;
            };
            let name = &after[..end];
            match self.param(name) {
                Some(value) => out.push_str(value),
                None => {
                    out.push('{');
                    out.push_str(name);
                    out.push('}');
                }
            }
            rest = &after[end + 1..];
        }
        out.push_str(rest);
        Cow::Owned(out)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// VALIDATION ERRORS (AGGREGATE)
// ============================================================================

/// Field-, index- or key-addressed collection of errors.
///
/// Keys are kept sorted, so the rendered text does not depend on the order in
/// which fields or map entries were visited:
///
/// ```text
/// Address: (State: must be in a valid format.); Email: must be a valid email address.
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors {
    entries: BTreeMap<String, Error>,
}

impl ValidationErrors {
    /// Creates an empty aggregate.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an aggregate from manually collected results, dropping every
    /// `Ok` entry. Returns `Ok(())` when nothing failed.
    ///
    /// ```rust,ignore
    /// let result = ValidationErrors::filter([
    ///     ("name", validate(&name, (required(), length(5, 20)))),
    ///     ("zip", validate(&zip, (required(), matches_regex(zip_re)))),
    /// ]);
    /// ```
    pub fn filter<K, I>(entries: I) -> Result<(), Error>
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Result<(), Error>)>,
    {
        let mut errors = Self::new();
        for (key, result) in entries {
            errors.set(key, result);
        }
        errors.into_result()
    }

    /// Records `result` under `key` if it is an error.
    pub fn set(&mut self, key: impl Into<String>, result: Result<(), Error>) {
        if let Err(err) = result {
            self.insert(key, err);
        }
    }

    /// Inserts an error under `key`, returning the one it replaced.
    pub fn insert(&mut self, key: impl Into<String>, error: Error) -> Option<Error> {
        self.entries.insert(key.into(), error)
    }

    /// Returns the error recorded for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Error> {
        self.entries.get(key)
    }

    /// Returns `true` if an error is recorded for `key`.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of failing keys (not counting nested entries).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(key, error)` pairs in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Error)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Converts into a result: `Ok(())` if empty, otherwise `Err(Error::Fields)`.
    pub fn into_result(self) -> Result<(), Error> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(Error::Fields(self))
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, error)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            match error {
                Error::Fields(nested) => write!(f, "{key}: ({nested})")?,
                other => write!(f, "{key}: {other}")?,
            }
        }
        f.write_str(".")
    }
}

impl std::error::Error for ValidationErrors {}

impl IntoIterator for ValidationErrors {
    type Item = (String, Error);
    type IntoIter = std::collections::btree_map::IntoIter<String, Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = (&'a String, &'a Error);
    type IntoIter = std::collections::btree_map::Iter<'a, String, Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const ERR_SAMPLE: ValidationError =
        ValidationError::from_static("sample", "must be between {min} and {max}");

    #[test]
    fn renders_bound_params() {
        let err = ERR_SAMPLE.with_params([("min", 2), ("max", 4)]);
        assert_eq!(err.to_string(), "must be between 2 and 4");
        assert_eq!(err.code(), "sample");
    }

    #[test]
    fn leaves_unresolved_placeholders() {
        let err = ERR_SAMPLE.with_param("min", 2);
        assert_eq!(err.to_string(), "must be between 2 and {max}");
        assert_eq!(ERR_SAMPLE.to_string(), "must be between {min} and {max}");
    }

    #[test]
    fn unterminated_placeholder_is_literal() {
        let err = ValidationError::new("x", "value {min").with_param("min", 1);
        assert_eq!(err.to_string(), "value {min");
    }

    #[test]
    fn rendering_is_idempotent() {
        let err = ERR_SAMPLE.with_params([("min", 1), ("max", 9)]);
        assert_eq!(err.render(), err.render());
    }

    #[test]
    fn with_message_keeps_code_and_original() {
        let original = ERR_SAMPLE;
        let custom = original.clone().with_message("custom");
        assert_eq!(custom.code(), "sample");
        assert_eq!(custom.message(), "custom");
        assert_eq!(original.message(), "must be between {min} and {max}");
    }

    #[test]
    fn with_param_replaces_existing() {
        let err = ERR_SAMPLE.with_param("min", 1).with_param("min", 3);
        assert_eq!(err.param("min"), Some("3"));
        assert_eq!(err.params().count(), 1);
    }

    #[test]
    fn aggregate_renders_sorted_and_nested() {
        let mut inner = ValidationErrors::new();
        inner.insert("State", ValidationError::new("c", "must be in a valid format").into());

        let mut errs = ValidationErrors::new();
        errs.insert("Email", ValidationError::new("c", "must be a valid email address").into());
        errs.insert("Address", Error::Fields(inner));

        assert_eq!(
            errs.to_string(),
            "Address: (State: must be in a valid format.); Email: must be a valid email address."
        );
    }

    #[test]
    fn empty_aggregate_is_ok() {
        assert_eq!(ValidationErrors::new().into_result(), Ok(()));
    }

    #[test]
    fn filter_drops_successes() {
        let result = ValidationErrors::filter([
            ("name", Ok(())),
            ("zip", Err(ValidationError::new("r", "cannot be blank").into())),
            ("email", Err(ValidationError::new("e", "must be a valid email address").into())),
        ]);
        let err = result.unwrap_err();
        assert_eq!(
            err.to_string(),
            "email: must be a valid email address; zip: cannot be blank."
        );
        assert_eq!(err.as_fields().map(ValidationErrors::len), Some(2));
    }

    #[test]
    fn filter_all_ok_is_ok() {
        let result = ValidationErrors::filter([("a", Ok(())), ("b", Ok(()))]);
        assert!(result.is_ok());
    }

    #[test]
    fn usage_error_renders_plainly() {
        let err = Error::usage("cannot get the length of int");
        assert!(err.is_usage());
        assert_eq!(err.to_string(), "cannot get the length of int");
    }
}
