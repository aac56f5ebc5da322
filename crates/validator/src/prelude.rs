//! Prelude module for convenient imports.
//!
//! Provides a single `use ruleset_validator::prelude::*;` import that brings
//! in the value model, the rule traits, every built-in rule and every
//! combinator.
//!
//! # Examples
//!
//! ```rust,ignore
//! use ruleset_validator::prelude::*;
//!
//! let username = (required(), rune_length(3, 20));
//! let tags = each((required(), length(1, 32)));
//! let settings = map([key("theme", is_in(["dark", "light"])), key("tz", required()).optional()]);
//! ```

// ============================================================================
// FOUNDATION: Values, traits, errors, context
// ============================================================================

pub use crate::foundation::{
    Delegate, Error, IntoRules, Null, Record, RecordField, Rule, Rules, ToValue, Validatable,
    ValidationContext, ValidationContextBuilder, ValidationError, ValidationErrors, Value,
    ValueKind, validate, validate_value, validate_with_context,
};

// ============================================================================
// VALIDATORS: All built-in rules
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;

// ============================================================================
// COMBINATORS: Composition functions and types
// ============================================================================

pub use crate::combinators::{
    By, ERR_KEY_MISSING, ERR_KEY_UNEXPECTED, Each, Field, Key, Map, Skip, When, WithContext, by,
    each, field, key, map, skip, validate_struct, validate_struct_with_context, when,
    with_context,
};

// ============================================================================
// MACROS
// ============================================================================

pub use crate::record;
