//! Validation context threaded through rules
//!
//! A [`ValidationContext`] carries request-scoped data that context-aware
//! rules can read, e.g. a set of already-registered names for a uniqueness
//! check. The engine itself never inspects it; it is passed unchanged to every
//! rule, including the rules nested inside `each`, `when` and `map`.
//!
//! # Examples
//!
//! ```rust,ignore
//! use ruleset_validator::prelude::*;
//!
//! let ctx = ValidationContextBuilder::new().with("expected", "good sample").build();
//! let rule = with_context(|ctx, value| {
//!     match (ctx.get::<&str>("expected"), value.as_str()) {
//!         (Some(expected), Some(s)) if *expected == s => Ok(()),
//!         _ => Err(ValidationError::new("unexpected", "unexpected value").into()),
//!     }
//! });
//! assert!(validate_with_context(&ctx, "good sample", rule).is_ok());
//! ```

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

// ============================================================================
// VALIDATION CONTEXT
// ============================================================================

/// Typed key/value data available to rules during one validation call.
#[derive(Default)]
pub struct ValidationContext {
    data: HashMap<String, Box<dyn Any + Send + Sync>>,
    parent: Option<Arc<ValidationContext>>,
}

impl ValidationContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The empty context used by the context-free entry points.
    #[must_use]
    pub fn background() -> Self {
        Self::default()
    }

    /// Creates a context whose lookups fall back to `parent`.
    #[must_use]
    pub fn with_parent(parent: Arc<ValidationContext>) -> Self {
        Self {
            data: HashMap::new(),
            parent: Some(parent),
        }
    }

    /// Creates an empty child of a shared context.
    #[must_use]
    pub fn child(self: &Arc<Self>) -> Self {
        Self::with_parent(Arc::clone(self))
    }

    /// Adds a value to the context.
    pub fn insert<T: Send + Sync + 'static>(&mut self, key: impl Into<String>, value: T) {
        self.data.insert(key.into(), Box::new(value));
    }

    /// Gets a value, searching parents if the key is not set locally.
    ///
    /// Returns `None` if the key is missing or holds a different type.
    #[must_use]
    pub fn get<T: 'static>(&self, key: &str) -> Option<&T> {
        if let Some(value) = self.data.get(key) {
            return value.downcast_ref::<T>();
        }
        self.parent.as_ref().and_then(|p| p.get(key))
    }

    /// Checks if a key exists locally or in any parent.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.data.contains_key(key) || self.parent.as_ref().is_some_and(|p| p.contains(key))
    }

    /// Number of local entries (excluding parents).
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if there are no local entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl fmt::Debug for ValidationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&str> = self.data.keys().map(String::as_str).collect();
        keys.sort_unstable();
        f.debug_struct("ValidationContext")
            .field("keys", &keys)
            .field("parent", &self.parent)
            .finish()
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Builder for [`ValidationContext`].
#[derive(Debug, Default)]
pub struct ValidationContextBuilder {
    context: ValidationContext,
}

impl ValidationContextBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a value.
    #[must_use = "builder methods must be chained or built"]
    pub fn with<T: Send + Sync + 'static>(mut self, key: impl Into<String>, value: T) -> Self {
        self.context.insert(key, value);
        self
    }

    /// Sets the parent context.
    #[must_use = "builder methods must be chained or built"]
    pub fn parent(mut self, parent: Arc<ValidationContext>) -> Self {
        self.context.parent = Some(parent);
        self
    }

    /// Builds the context.
    #[must_use]
    pub fn build(self) -> ValidationContext {
        self.context
    }
}
