//! Conversions from Rust values into [`Value`]

use crate::foundation::record::Record;
use crate::foundation::value::{Null, Value};
use chrono::{DateTime, Utc};
use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::fmt::Display;
use std::hash::BuildHasher;
use std::sync::Arc;

/// Describes a Rust value as a dynamic [`Value`] that rules can inspect.
///
/// Text and nested data are borrowed, so the conversion is cheap enough to
/// run on every validation call. Structs implement it with
/// [`record!`](crate::record).
pub trait ToValue {
    /// Returns the dynamic view of `self`.
    fn to_value(&self) -> Value<'_>;
}

macro_rules! impl_to_value {
    ($variant:ident($target:ty) <= $($t:ty),+) => {
        $(
            impl ToValue for $t {
                #[inline]
                #[allow(trivial_numeric_casts)]
                fn to_value(&self) -> Value<'_> {
                    Value::$variant(*self as $target)
                }
            }
        )+
    };
}

impl_to_value!(Int(i64) <= i8, i16, i32, i64, isize);
impl_to_value!(Uint(u64) <= u8, u16, u32, u64, usize);
impl_to_value!(Float(f64) <= f32, f64);

impl ToValue for bool {
    fn to_value(&self) -> Value<'_> {
        Value::Bool(*self)
    }
}

impl ToValue for char {
    fn to_value(&self) -> Value<'_> {
        Value::Str(Cow::Owned(self.to_string()))
    }
}

impl ToValue for str {
    fn to_value(&self) -> Value<'_> {
        Value::Str(Cow::Borrowed(self))
    }
}

impl ToValue for String {
    fn to_value(&self) -> Value<'_> {
        Value::Str(Cow::Borrowed(self.as_str()))
    }
}

impl ToValue for Cow<'_, str> {
    fn to_value(&self) -> Value<'_> {
        Value::Str(Cow::Borrowed(self.as_ref()))
    }
}

impl ToValue for DateTime<Utc> {
    fn to_value(&self) -> Value<'_> {
        Value::Time(*self)
    }
}

impl<T: ToValue> ToValue for Null<T> {
    fn to_value(&self) -> Value<'_> {
        Value::nullable(self.valid.then(|| self.value.to_value()))
    }
}

impl<T: ToValue> ToValue for Option<T> {
    fn to_value(&self) -> Value<'_> {
        self.as_ref().map_or(Value::Nil, ToValue::to_value)
    }
}

// ============================================================================
// POINTERS
// ============================================================================

impl<T: ToValue + ?Sized> ToValue for &T {
    fn to_value(&self) -> Value<'_> {
        (**self).to_value()
    }
}

impl<T: ToValue + ?Sized> ToValue for Box<T> {
    fn to_value(&self) -> Value<'_> {
        (**self).to_value()
    }
}

impl<T: ToValue + ?Sized> ToValue for Arc<T> {
    fn to_value(&self) -> Value<'_> {
        (**self).to_value()
    }
}

// ============================================================================
// COLLECTIONS
// ============================================================================

impl<T: ToValue> ToValue for [T] {
    fn to_value(&self) -> Value<'_> {
        Value::Seq(self.iter().map(ToValue::to_value).collect())
    }
}

impl<T: ToValue, const N: usize> ToValue for [T; N] {
    fn to_value(&self) -> Value<'_> {
        self.as_slice().to_value()
    }
}

impl<T: ToValue> ToValue for Vec<T> {
    fn to_value(&self) -> Value<'_> {
        self.as_slice().to_value()
    }
}

impl<T: ToValue> ToValue for VecDeque<T> {
    fn to_value(&self) -> Value<'_> {
        Value::Seq(self.iter().map(ToValue::to_value).collect())
    }
}

impl<K: Display, V: ToValue, S: BuildHasher> ToValue for HashMap<K, V, S> {
    fn to_value(&self) -> Value<'_> {
        Value::Map(
            self.iter()
                .map(|(k, v)| (k.to_string(), v.to_value()))
                .collect(),
        )
    }
}

impl<K: Display, V: ToValue> ToValue for BTreeMap<K, V> {
    fn to_value(&self) -> Value<'_> {
        Value::Map(
            self.iter()
                .map(|(k, v)| (k.to_string(), v.to_value()))
                .collect(),
        )
    }
}

// ============================================================================
// DYNAMIC VALUES
// ============================================================================

impl ToValue for Value<'_> {
    fn to_value(&self) -> Value<'_> {
        self.clone()
    }
}

impl ToValue for Record<'_> {
    fn to_value(&self) -> Value<'_> {
        Value::Record(self.clone())
    }
}
