//! Ambient context fields inherited by messages
//!
//! This module provides:
//! - `Context`: the capability of supplying recorded fields
//! - `LogContext`: an immutable, derivable field list for request/operation scope

use super::value::{Parameter, Value};
use std::fmt;
use std::sync::Arc;

/// Source of inherited message fields.
///
/// The logger only asks a context for its recorded fields; how they are stored
/// is up to the implementation.
pub trait Context {
    fn fields(&self) -> Vec<Parameter>;
}

impl<C: Context + ?Sized> Context for &C {
    fn fields(&self) -> Vec<Parameter> {
        (**self).fields()
    }
}

impl<C: Context + ?Sized> Context for Arc<C> {
    fn fields(&self) -> Vec<Parameter> {
        (**self).fields()
    }
}

impl Context for [Parameter] {
    fn fields(&self) -> Vec<Parameter> {
        self.to_vec()
    }
}

impl Context for Vec<Parameter> {
    fn fields(&self) -> Vec<Parameter> {
        self.clone()
    }
}

/// Ordered, immutable set of context fields.
///
/// Deriving a child with [`LogContext::with_value`] leaves the parent
/// untouched, so a context can be handed down a call chain and extended at
/// each layer.
///
/// # Example
///
/// ```
/// use logfmt_logger::core::{Context, LogContext};
///
/// let request = LogContext::new().with_value("request_id", "abc-123");
/// let db = request.with_value("table", "users");
///
/// assert_eq!(request.len(), 1);
/// assert_eq!(db.fields().len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LogContext {
    fields: Arc<Vec<Parameter>>,
}

impl LogContext {
    /// Create a new empty log context
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive a child context with one more field
    #[must_use]
    pub fn with_value(&self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        let mut fields = Vec::with_capacity(self.fields.len() + 1);
        fields.extend(self.fields.iter().cloned());
        fields.push(Parameter::new(name, value));
        Self {
            fields: Arc::new(fields),
        }
    }

    /// Borrow the recorded fields in insertion order
    pub fn as_slice(&self) -> &[Parameter] {
        &self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }
}

impl Context for LogContext {
    fn fields(&self) -> Vec<Parameter> {
        self.fields.as_ref().clone()
    }
}

impl fmt::Display for LogContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, p) in self.fields.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}={}", p.name, p.value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_context_creation() {
        let ctx = LogContext::new();
        assert!(ctx.is_empty());
        assert!(ctx.fields().is_empty());
    }

    #[test]
    fn test_derived_context_keeps_parent() {
        let parent = LogContext::new().with_value("user_id", 123);
        let child = parent.with_value("action", "login");

        assert_eq!(parent.len(), 1);
        assert_eq!(child.len(), 2);
        assert_eq!(child.as_slice()[0].name, "user_id");
        assert_eq!(child.as_slice()[1].name, "action");
    }

    #[test]
    fn test_fields_in_insertion_order() {
        let ctx = LogContext::new()
            .with_value("b", 2)
            .with_value("a", 1)
            .with_value("b", 3);

        let names: Vec<_> = ctx.fields().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["b", "a", "b"]);
    }

    #[test]
    fn test_context_display() {
        let ctx = LogContext::new()
            .with_value("key1", "value1")
            .with_value("key2", 42);
        assert_eq!(ctx.to_string(), "key1=value1 key2=42");
    }

    #[test]
    fn test_slice_and_vec_contexts() {
        let params = vec![Parameter::new("trace", "t-1")];
        assert_eq!(params.fields().len(), 1);
        assert_eq!(params.as_slice().fields().len(), 1);
        assert_eq!((&params).fields().len(), 1);
    }
}
