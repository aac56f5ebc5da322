//! Structural rules
//!
//! Combinators hold nested rule lists and feed them back into the
//! orchestrator, threading the same [`ValidationContext`](crate::foundation::ValidationContext):
//!
//! - [`each`]: every element of a sequence or map
//! - [`when`]: one of two rule lists, picked by a condition
//! - [`map`] / [`key`]: a dynamic map by declared key names
//! - [`validate_struct`] / [`field`]: a struct by field names
//! - [`skip`]: ends the current rule list early
//! - [`by`] / [`with_context`]: closures as rules

pub mod each;
pub mod field;
pub mod inline;
pub mod map;
pub mod skip;
pub mod when;

pub use each::{Each, each};
pub use field::{Field, field, validate_struct, validate_struct_with_context};
pub use inline::{By, WithContext, by, with_context};
pub use map::{ERR_KEY_MISSING, ERR_KEY_UNEXPECTED, Key, Map, key, map};
pub use skip::{Skip, skip};
pub use when::{When, when};
