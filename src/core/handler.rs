//! Handler trait for message sinks

use super::{error::Result, message::Message};
use std::fmt;
use std::sync::Arc;

/// A sink offered every message that passes the level threshold.
///
/// Handlers are called synchronously on the logging thread, in registration
/// order. A returned error is not propagated to the caller of the entry point.
pub trait Handler: Send + Sync {
    fn handle(&self, message: &Message) -> Result<()>;

    fn name(&self) -> &str {
        "handler"
    }
}

impl<H: Handler + ?Sized> Handler for Arc<H> {
    fn handle(&self, message: &Message) -> Result<()> {
        (**self).handle(message)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<H: Handler + ?Sized> Handler for Box<H> {
    fn handle(&self, message: &Message) -> Result<()> {
        (**self).handle(message)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Handler backed by a closure.
pub struct FnHandler<F> {
    name: String,
    f: F,
}

impl<F> fmt::Debug for FnHandler<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnHandler").field("name", &self.name).finish()
    }
}

impl<F> Handler for FnHandler<F>
where
    F: Fn(&Message) -> Result<()> + Send + Sync,
{
    fn handle(&self, message: &Message) -> Result<()> {
        (self.f)(message)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Build a named handler from a closure.
///
/// # Example
///
/// ```
/// use logfmt_logger::{handler_fn, Logger};
///
/// let logger = Logger::builder()
///     .discard_output()
///     .handler(handler_fn("alerts", |m| {
///         if m.code().is_some() {
///             // page someone
///         }
///         Ok(())
///     }))
///     .build();
/// assert_eq!(logger.handler_count(), 1);
/// ```
pub fn handler_fn<F>(name: impl Into<String>, f: F) -> FnHandler<F>
where
    F: Fn(&Message) -> Result<()> + Send + Sync,
{
    FnHandler {
        name: name.into(),
        f,
    }
}
