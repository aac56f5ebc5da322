//! # ruleset-validator
//!
//! Rule-based validation for values, maps, collections and structs, with
//! failures aggregated by field name, key or index.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ruleset_validator::prelude::*;
//!
//! // A rule list runs in order and stops at the first failure
//! assert!(validate("alice", (required(), rune_length(3, 20))).is_ok());
//!
//! let err = validate(&15, (required(), min(18))).unwrap_err();
//! assert_eq!(err.to_string(), "must be no less than 18");
//! ```
//!
//! ## Structs
//!
//! Structs describe their fields with the [`record!`] macro and list the
//! rules per field with [`field`](combinators::field):
//!
//! ```rust,ignore
//! use ruleset_validator::prelude::*;
//!
//! struct Address { street: String, city: String }
//! record!(Address { "Street" => street, "City" => city });
//!
//! let addr = Address { street: String::new(), city: "Oslo".into() };
//! let err = validate_struct(&addr, [
//!     field("Street", required()),
//!     field("City", (required(), length(2, 50))),
//! ]).unwrap_err();
//! assert_eq!(err.to_string(), "Street: cannot be blank.");
//! ```
//!
//! ## Built-in Rules
//!
//! - **Presence**: [`required`](validators::required), [`not_nil`](validators::not_nil),
//!   [`nil_or_not_empty`](validators::nil_or_not_empty), [`nil`](validators::nil),
//!   [`empty`](validators::empty)
//! - **Size**: [`length`](validators::length), [`rune_length`](validators::rune_length)
//! - **Threshold**: [`min`](validators::min), [`max`](validators::max)
//! - **Membership**: [`is_in`](validators::is_in), [`not_in`](validators::not_in)
//! - **Format**: [`matches_regex`](validators::matches_regex),
//!   [`string_rule`](validators::string_rule)
//! - **Composition**: [`each`](combinators::each), [`map`](combinators::map),
//!   [`when`](combinators::when), [`skip`](combinators::skip), [`by`](combinators::by)

// Error carries its code, message and params inline; every rule returns it.
#![allow(clippy::result_large_err)]

pub mod combinators;
pub mod foundation;
#[cfg(feature = "serde")]
pub mod json;
mod macros;
pub mod prelude;
pub mod validators;
