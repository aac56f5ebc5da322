//! The dynamic value shape every rule receives
//!
//! Rules are not generic over the values they check. Instead, anything being
//! validated is first described as a [`Value`]: a closed set of shapes
//! (absent, scalar, text, time, sequence, keyed map, record) plus two wrapper
//! shapes, the nullable scalar and the self-validating delegate. Rules match
//! on the shape they understand and report the rest as unsupported.
//!
//! Most callers never build a `Value` by hand; see [`ToValue`](super::ToValue).

use crate::foundation::record::Record;
use crate::foundation::traits::Validatable;
use chrono::{DateTime, Utc};
use std::borrow::Cow;
use std::fmt;

/// Shared absent value returned when a wrapper resolves to nothing.
static NIL: Value<'static> = Value::Nil;

// ============================================================================
// VALUE
// ============================================================================

/// A borrowed, dynamically shaped view of a value under validation.
#[derive(Debug, Clone, Default)]
pub enum Value<'a> {
    /// No value: `None`, a missing pointer, an unset nullable.
    #[default]
    Nil,

    /// Boolean.
    Bool(bool),

    /// Signed integer.
    Int(i64),

    /// Unsigned integer.
    Uint(u64),

    /// Floating point number.
    Float(f64),

    /// UTF-8 text.
    Str(Cow<'a, str>),

    /// Point in time.
    Time(DateTime<Utc>),

    /// Ordered sequence (`Vec`, slice, array).
    Seq(Vec<Value<'a>>),

    /// Keyed map. Keys are kept as their string form, in insertion order.
    Map(Vec<(String, Value<'a>)>),

    /// A struct with named fields.
    Record(Record<'a>),

    /// A scalar wrapper with an explicit validity flag; `None` when invalid.
    Nullable(Option<Box<Value<'a>>>),

    /// A value paired with its own validation logic.
    Delegate(Delegate<'a>),
}

impl<'a> Value<'a> {
    /// Creates a text value.
    pub fn str(s: impl Into<Cow<'a, str>>) -> Self {
        Self::Str(s.into())
    }

    /// Creates a sequence from anything convertible to values.
    pub fn seq<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value<'a>>,
    {
        Self::Seq(items.into_iter().map(Into::into).collect())
    }

    /// Creates a keyed map.
    pub fn map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value<'a>>,
    {
        Self::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Wraps a value in the nullable shape.
    pub fn nullable(value: Option<Value<'a>>) -> Self {
        Self::Nullable(value.map(Box::new))
    }

    /// Pairs a value with the validation logic of its source.
    pub fn delegate(validator: &'a dyn Validatable, value: Value<'a>) -> Self {
        Self::Delegate(Delegate {
            validator,
            value: Box::new(value),
        })
    }

    /// Strips delegate and nullable wrappers; an unset nullable becomes `Nil`.
    #[must_use]
    pub fn indirect(&self) -> &Value<'a> {
        match self {
            Value::Delegate(d) => d.value.indirect(),
            Value::Nullable(Some(inner)) => inner.indirect(),
            Value::Nullable(None) => &NIL,
            other => other,
        }
    }

    /// Returns `true` if the value is absent once wrappers are stripped.
    #[must_use]
    pub fn is_nil(&self) -> bool {
        matches!(self.indirect(), Value::Nil)
    }

    /// Returns `true` if the value is absent or the zero value of its shape.
    ///
    /// Records are never empty. The zero time is the Unix epoch.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self.indirect() {
            Value::Nil => true,
            Value::Bool(b) => !b,
            Value::Int(i) => *i == 0,
            Value::Uint(u) => *u == 0,
            Value::Float(f) => *f == 0.0,
            Value::Str(s) => s.is_empty(),
            Value::Time(t) => *t == DateTime::<Utc>::default(),
            Value::Seq(items) => items.is_empty(),
            Value::Map(entries) => entries.is_empty(),
            Value::Record(_) | Value::Nullable(_) | Value::Delegate(_) => false,
        }
    }

    /// Returns the shape of the value once wrappers are stripped.
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self.indirect() {
            Value::Nil => ValueKind::Nil,
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Uint(_) => ValueKind::Uint,
            Value::Float(_) => ValueKind::Float,
            Value::Str(_) => ValueKind::String,
            Value::Time(_) => ValueKind::Time,
            Value::Seq(_) => ValueKind::Sequence,
            Value::Map(_) => ValueKind::Map,
            Value::Record(_) | Value::Nullable(_) | Value::Delegate(_) => ValueKind::Struct,
        }
    }

    /// Returns the text, if this is a text value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self.indirect() {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the record, if this is a struct.
    #[must_use]
    pub fn as_record(&self) -> Option<&Record<'a>> {
        match self.indirect() {
            Value::Record(r) => Some(r),
            _ => None,
        }
    }

    /// Returns the self-validation capability attached to this value.
    #[must_use]
    pub fn validatable(&self) -> Option<&'a dyn Validatable> {
        match self {
            Value::Delegate(d) => Some(d.validator),
            _ => None,
        }
    }

    /// Detaches the value from borrowed data.
    ///
    /// Delegates lose their validation logic and keep only their value.
    #[must_use]
    pub fn into_owned(self) -> Value<'static> {
        match self {
            Value::Nil => Value::Nil,
            Value::Bool(b) => Value::Bool(b),
            Value::Int(i) => Value::Int(i),
            Value::Uint(u) => Value::Uint(u),
            Value::Float(f) => Value::Float(f),
            Value::Str(s) => Value::Str(Cow::Owned(s.into_owned())),
            Value::Time(t) => Value::Time(t),
            Value::Seq(items) => Value::Seq(items.into_iter().map(Value::into_owned).collect()),
            Value::Map(entries) => Value::Map(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, v.into_owned()))
                    .collect(),
            ),
            Value::Record(r) => Value::Record(r.into_owned()),
            Value::Nullable(v) => Value::Nullable(v.map(|inner| Box::new(inner.into_owned()))),
            Value::Delegate(d) => d.value.into_owned(),
        }
    }
}

impl PartialEq for Value<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Delegate(a), b) => a.value.as_ref() == b,
            (a, Value::Delegate(b)) => a == b.value.as_ref(),
            (Value::Nil, Value::Nil) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Uint(a), Value::Uint(b)) => a == b,
            (Value::Int(i), Value::Uint(u)) | (Value::Uint(u), Value::Int(i)) => {
                u64::try_from(*i).is_ok_and(|i| i == *u)
            }
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Time(a), Value::Time(b)) => a == b,
            (Value::Seq(a), Value::Seq(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Record(a), Value::Record(b)) => a == b,
            (Value::Nullable(a), Value::Nullable(b)) => a == b,
            _ => false,
        }
    }
}

macro_rules! impl_from_scalar {
    ($($variant:ident($target:ty) <= $($t:ty),+;)*) => {
        $($(
            impl From<$t> for Value<'_> {
                fn from(v: $t) -> Self {
                    Value::$variant(<$target>::from(v))
                }
            }
        )+)*
    };
}

impl_from_scalar! {
    Bool(bool) <= bool;
    Int(i64) <= i8, i16, i32, i64;
    Uint(u64) <= u8, u16, u32, u64;
    Float(f64) <= f32, f64;
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(s: &'a str) -> Self {
        Value::Str(Cow::Borrowed(s))
    }
}

impl From<String> for Value<'_> {
    fn from(s: String) -> Self {
        Value::Str(Cow::Owned(s))
    }
}

impl From<DateTime<Utc>> for Value<'_> {
    fn from(t: DateTime<Utc>) -> Self {
        Value::Time(t)
    }
}

impl<'a> From<Vec<Value<'a>>> for Value<'a> {
    fn from(items: Vec<Value<'a>>) -> Self {
        Value::Seq(items)
    }
}

impl<'a> From<Record<'a>> for Value<'a> {
    fn from(record: Record<'a>) -> Self {
        Value::Record(record)
    }
}

impl<'a, T: Into<Value<'a>>> From<Option<T>> for Value<'a> {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Nil, Into::into)
    }
}

// ============================================================================
// DELEGATE
// ============================================================================

/// A value together with the [`Validatable`] it was produced from.
#[derive(Clone)]
pub struct Delegate<'a> {
    validator: &'a dyn Validatable,
    value: Box<Value<'a>>,
}

impl<'a> Delegate<'a> {
    /// The self-validation capability.
    #[must_use]
    pub fn validator(&self) -> &'a dyn Validatable {
        self.validator
    }

    /// The wrapped value.
    #[must_use]
    pub fn value(&self) -> &Value<'a> {
        &self.value
    }
}

impl fmt::Debug for Delegate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Delegate")
            .field("validator", &"<validatable>")
            .field("value", &self.value)
            .finish()
    }
}

// ============================================================================
// VALUE KIND
// ============================================================================

/// Lightweight classification of a [`Value`], used in usage error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Nil,
    Bool,
    Int,
    Uint,
    Float,
    String,
    Time,
    Sequence,
    Map,
    Struct,
}

impl ValueKind {
    /// Lowercase name of the kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Uint => "uint",
            Self::Float => "float",
            Self::String => "string",
            Self::Time => "time",
            Self::Sequence => "sequence",
            Self::Map => "map",
            Self::Struct => "struct",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// NULLABLE WRAPPER
// ============================================================================

/// A value with an explicit validity flag, as produced by database drivers.
///
/// An invalid `Null` is seen by rules as absent, whatever `value` holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Null<T> {
    /// The wrapped value; meaningful only when `valid` is set.
    pub value: T,
    /// Whether `value` is present.
    pub valid: bool,
}

impl<T> Null<T> {
    /// A present value.
    pub fn valid(value: T) -> Self {
        Self { value, valid: true }
    }

    /// An absent value.
    pub fn invalid() -> Self
    where
        T: Default,
    {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indirect_strips_nullable() {
        let set = Value::nullable(Some(Value::from("abc")));
        let unset = Value::nullable(None);
        assert_eq!(set.indirect(), &Value::from("abc"));
        assert!(unset.is_nil());
        assert!(unset.is_empty());
    }

    #[test]
    fn zero_values_are_empty() {
        assert!(Value::Nil.is_empty());
        assert!(Value::from(0).is_empty());
        assert!(Value::from(0u8).is_empty());
        assert!(Value::from(0.0).is_empty());
        assert!(Value::from("").is_empty());
        assert!(Value::from(false).is_empty());
        assert!(Value::Seq(vec![]).is_empty());
        assert!(Value::from(DateTime::<Utc>::default()).is_empty());
        assert!(!Value::from("a").is_empty());
        assert!(!Value::Seq(vec![Value::Nil]).is_empty());
    }

    #[test]
    fn signed_and_unsigned_compare_numerically() {
        assert_eq!(Value::from(1), Value::from(1u8));
        assert_ne!(Value::from(-1), Value::from(u64::MAX));
        assert_ne!(Value::from(1), Value::from("1"));
        assert_ne!(Value::from(1), Value::from(1.0));
    }

    #[test]
    fn kind_names() {
        assert_eq!(Value::from(3).kind().to_string(), "int");
        assert_eq!(Value::seq([1, 2]).kind(), ValueKind::Sequence);
        assert_eq!(Value::nullable(Some(Value::from("x"))).kind(), ValueKind::String);
    }

    #[test]
    fn into_owned_keeps_content() {
        let text = String::from("borrowed");
        let value = Value::map([("k", Value::from(text.as_str()))]);
        let owned = value.clone().into_owned();
        assert_eq!(owned, value);
    }
}
