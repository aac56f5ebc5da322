//! Core traits for the validation system
//!
//! - [`Rule`]: one check applied to a [`Value`].
//! - [`IntoRules`]: anything that can stand in for an ordered rule list.
//! - [`Validatable`]: a type that knows how to validate itself.

use crate::foundation::context::ValidationContext;
use crate::foundation::error::Error;
use crate::foundation::value::Value;
use std::sync::Arc;

/// An owned, shareable, ordered list of rules.
pub type Rules = Vec<Arc<dyn Rule>>;

// ============================================================================
// RULE
// ============================================================================

/// A single validation rule.
///
/// Rules are immutable once built. Configuration methods on the built-in
/// rules consume the rule and return a reconfigured copy, so one rule value
/// can be shared across threads and reused for any number of inputs.
///
/// # Examples
///
/// ```rust,ignore
/// use ruleset_validator::prelude::*;
///
/// struct Even;
///
/// impl Rule for Even {
///     fn validate(&self, value: &Value<'_>) -> Result<(), Error> {
///         match value.indirect() {
///             Value::Int(i) if i % 2 != 0 => {
///                 Err(ValidationError::new("even", "must be even").into())
///             }
///             _ => Ok(()),
///         }
///     }
/// }
///
/// assert!(validate(&4, Even).is_ok());
/// ```
pub trait Rule: Send + Sync {
    /// Checks the value.
    fn validate(&self, value: &Value<'_>) -> Result<(), Error>;

    /// Checks the value with request-scoped data available.
    ///
    /// Defaults to [`validate`](Self::validate); override it for rules that
    /// read the context or contain nested rule lists.
    fn validate_with_context(&self, ctx: &ValidationContext, value: &Value<'_>) -> Result<(), Error> {
        let _ = ctx;
        self.validate(value)
    }

    /// Returns `true` if the remaining rules of the list must not run.
    fn skips_rest(&self) -> bool {
        false
    }
}

impl<R: Rule + ?Sized> Rule for Arc<R> {
    fn validate(&self, value: &Value<'_>) -> Result<(), Error> {
        (**self).validate(value)
    }

    fn validate_with_context(&self, ctx: &ValidationContext, value: &Value<'_>) -> Result<(), Error> {
        (**self).validate_with_context(ctx, value)
    }

    fn skips_rest(&self) -> bool {
        (**self).skips_rest()
    }
}

impl<R: Rule + ?Sized> Rule for Box<R> {
    fn validate(&self, value: &Value<'_>) -> Result<(), Error> {
        (**self).validate(value)
    }

    fn validate_with_context(&self, ctx: &ValidationContext, value: &Value<'_>) -> Result<(), Error> {
        (**self).validate_with_context(ctx, value)
    }

    fn skips_rest(&self) -> bool {
        (**self).skips_rest()
    }
}

// ============================================================================
// RULE LISTS
// ============================================================================

/// Conversion into an ordered rule list.
///
/// Implemented for `()` (no rules), any single rule, tuples of up to twelve
/// rules, and an already built [`Rules`] vector.
pub trait IntoRules {
    /// Builds the rule list.
    fn into_rules(self) -> Rules;
}

impl IntoRules for () {
    fn into_rules(self) -> Rules {
        Vec::new()
    }
}

impl<R: Rule + 'static> IntoRules for R {
    fn into_rules(self) -> Rules {
        vec![Arc::new(self)]
    }
}

impl IntoRules for Rules {
    fn into_rules(self) -> Rules {
        self
    }
}

macro_rules! impl_into_rules_for_tuple {
    ($($name:ident),+) => {
        impl<$($name: Rule + 'static),+> IntoRules for ($($name,)+) {
            #[allow(non_snake_case)]
            fn into_rules(self) -> Rules {
                let ($($name,)+) = self;
                vec![$(Arc::new($name) as Arc<dyn Rule>),+]
            }
        }
    };
}

impl_into_rules_for_tuple!(A);
impl_into_rules_for_tuple!(A, B);
impl_into_rules_for_tuple!(A, B, C);
impl_into_rules_for_tuple!(A, B, C, D);
impl_into_rules_for_tuple!(A, B, C, D, E);
impl_into_rules_for_tuple!(A, B, C, D, E, F);
impl_into_rules_for_tuple!(A, B, C, D, E, F, G);
impl_into_rules_for_tuple!(A, B, C, D, E, F, G, H);
impl_into_rules_for_tuple!(A, B, C, D, E, F, G, H, I);
impl_into_rules_for_tuple!(A, B, C, D, E, F, G, H, I, J);
impl_into_rules_for_tuple!(A, B, C, D, E, F, G, H, I, J, K);
impl_into_rules_for_tuple!(A, B, C, D, E, F, G, H, I, J, K, L);

// ============================================================================
// SELF-VALIDATION
// ============================================================================

/// A type that carries its own validation logic.
///
/// The engine calls it when a value is validated without explicit rules: a
/// top-level `validate(&x, ())`, a struct field listed with no rules, or an
/// element of a collection. Attach it to a struct's value with
/// `record!(validated MyType { .. })`.
pub trait Validatable: Sync {
    /// Validates `self`.
    fn validate(&self) -> Result<(), Error>;

    /// Validates `self` with request-scoped data available.
    fn validate_with_context(&self, ctx: &ValidationContext) -> Result<(), Error> {
        let _ = ctx;
        self.validate()
    }
}
