//! Built-in validators
//!
//! Leaf rules that check a single value. Every rule here shares the same
//! configuration methods: `error(message)` keeps the code and replaces the
//! message, `error_object(err)` replaces the whole error, and `when(bool)`
//! disables the rule when `false`.
//!
//! # Categories
//!
//! - **Threshold**: [`min`], [`max`], [`min_time`], [`max_time`]
//! - **Length**: [`length`], [`rune_length`]
//! - **Membership**: [`is_in`], [`not_in`]
//! - **Presence**: [`required`], [`nil_or_not_empty`], [`not_nil`]
//! - **Absence**: [`nil`], [`empty`]
//! - **Format**: [`matches_regex`], [`string_rule`]
//!
//! # Examples
//!
//! ```rust,ignore
//! use ruleset_validator::prelude::*;
//!
//! let username = (required(), rune_length(3, 20));
//! let age = (min(18), max(130));
//! let role = is_in(["admin", "member"]);
//! ```

// Threshold validators
pub mod range;

// Size validators
pub mod length;

// Value set validators
pub mod membership;

// Presence validators
pub mod absent;
pub mod nullable;

// Text validators
pub mod pattern;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use absent::{ERR_EMPTY, ERR_NIL, Empty, Nil, empty, nil};
pub use length::{
    ERR_LENGTH_EMPTY_REQUIRED, ERR_LENGTH_INVALID, ERR_LENGTH_OUT_OF_RANGE, ERR_LENGTH_TOO_LONG,
    ERR_LENGTH_TOO_SHORT, Length, LengthMode, length, rune_length,
};
pub use membership::{ERR_IN_INVALID, ERR_NOT_IN_INVALID, In, NotIn, is_in, not_in};
pub use nullable::{
    ERR_NIL_OR_NOT_EMPTY, ERR_NOT_NIL, ERR_REQUIRED, NotNil, Required, nil_or_not_empty, not_nil,
    required,
};
pub use pattern::{
    ERR_MATCH_INVALID, Match, StringRule, matches_regex, string_rule, string_rule_with_error,
};
pub use range::{
    Bound, ERR_MAX_LESS_EQUAL_THAN_REQUIRED, ERR_MAX_LESS_THAN_REQUIRED,
    ERR_MIN_GREATER_EQUAL_THAN_REQUIRED, ERR_MIN_GREATER_THAN_REQUIRED, Threshold, max, max_time,
    min, min_time,
};
