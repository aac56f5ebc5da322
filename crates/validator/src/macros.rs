//! Macros for describing structs to the engine with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`record!`]: implement `ToValue` for a struct from its field list
//!
//! # Examples
//!
//! ```rust,ignore
//! use ruleset_validator::prelude::*;
//!
//! struct Base { id: u64 }
//! record!(Base { "ID" => id });
//!
//! struct Customer {
//!     base: Base,
//!     name: String,
//!     email: String,
//! }
//!
//! // Field names become aggregate keys; `embed` promotes the fields of `base`.
//! record!(validated Customer { embed base, "Name" => name, "Email" => email });
//!
//! impl Validatable for Customer {
//!     fn validate(&self) -> Result<(), Error> {
//!         validate_struct(self, [
//!             field("ID", min(1u64)),
//!             field("Name", (required(), length(5, 20))),
//!             field("Email", required()),
//!         ])
//!     }
//! }
//! ```

// ============================================================================
// RECORD MACRO
// ============================================================================

/// Implements `ToValue` for a struct by listing its fields.
///
/// Each entry is one of:
///
/// - `field`: exposed under its Rust name
/// - `"Name" => field`: exposed under `Name`
/// - `embed field` / `embed "Name" => field`: an embedded struct whose own
///   fields are promoted, so `validate_struct` finds them by simple name
///
/// Prefix the type with `validated` to attach the struct's `Validatable`
/// implementation, which the engine then uses whenever the struct is
/// validated without explicit rules (as a field, a collection element, or at
/// the top level).
///
/// Only non-generic structs are supported.
#[macro_export]
macro_rules! record {
    (validated $ty:ident { $($body:tt)* }) => {
        impl $crate::foundation::ToValue for $ty {
            fn to_value(&self) -> $crate::foundation::Value<'_> {
                $crate::record!(@fields self, $crate::foundation::Record::new(stringify!($ty)); $($body)*)
                    .validated_by(self)
            }
        }
    };

    ($ty:ident { $($body:tt)* }) => {
        impl $crate::foundation::ToValue for $ty {
            fn to_value(&self) -> $crate::foundation::Value<'_> {
                $crate::record!(@fields self, $crate::foundation::Record::new(stringify!($ty)); $($body)*)
                    .into_value()
            }
        }
    };

    // ── Field list muncher ──────────────────────────────────────────────
    (@fields $this:ident, $rec:expr; ) => {
        $rec
    };

    (@fields $this:ident, $rec:expr; embed $name:literal => $f:ident $(, $($rest:tt)*)?) => {
        $crate::record!(@fields $this, $rec.embed($name, &$this.$f); $($($rest)*)?)
    };

    (@fields $this:ident, $rec:expr; embed $f:ident $(, $($rest:tt)*)?) => {
        $crate::record!(@fields $this, $rec.embed(stringify!($f), &$this.$f); $($($rest)*)?)
    };

    (@fields $this:ident, $rec:expr; $name:literal => $f:ident $(, $($rest:tt)*)?) => {
        $crate::record!(@fields $this, $rec.field($name, &$this.$f); $($($rest)*)?)
    };

    (@fields $this:ident, $rec:expr; $f:ident $(, $($rest:tt)*)?) => {
        $crate::record!(@fields $this, $rec.field(stringify!($f), &$this.$f); $($($rest)*)?)
    };
}

// ============================================================================
// RULE CONFIGURATION
// ============================================================================

/// Adds the configuration methods shared by every leaf rule.
///
/// The rule type must have an `err: ValidationError` and an `enabled: bool`
/// field.
macro_rules! rule_config {
    ($ty:ident $(<$g:ident: $bound:path>)?) => {
        impl$(<$g: $bound>)? $ty$(<$g>)? {
            /// Overrides the error message; the error code is kept.
            #[must_use = "builder methods must be chained or built"]
            pub fn error(mut self, message: impl Into<std::borrow::Cow<'static, str>>) -> Self {
                self.err = self.err.with_message(message);
                self
            }

            /// Replaces the error reported on failure.
            #[must_use = "builder methods must be chained or built"]
            pub fn error_object(mut self, err: $crate::foundation::ValidationError) -> Self {
                self.err = err;
                self
            }

            /// Applies the rule only when `condition` holds. A disabled rule
            /// accepts every value.
            #[must_use = "builder methods must be chained or built"]
            pub fn when(mut self, condition: bool) -> Self {
                self.enabled = condition;
                self
            }

            /// The error reported on failure.
            pub fn err(&self) -> &$crate::foundation::ValidationError {
                &self.err
            }
        }
    };
}

pub(crate) use rule_config;
