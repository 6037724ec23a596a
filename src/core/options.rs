//! Functional options applied to a message during construction

use super::log_context::Context;
use super::message::Message;
use super::value::{ErrorRef, Value};
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

/// A mutation applied to a [`Message`] before it is emitted.
///
/// Options run strictly in the order they are given, and each one observes
/// the state left by the previous ones. Custom options wrap a closure:
///
/// ```
/// use logfmt_logger::{Level, Message, MessageOption, with_code};
///
/// let default_status = MessageOption::new(|m: &mut Message| {
///     if m.code().is_some() && m.status_code().is_none() {
///         m.set_status_code(500);
///     }
/// });
///
/// let mut m = Message::new(Level::Error, "save failed");
/// m.apply([with_code("E_SAVE"), default_status]);
/// assert_eq!(m.status_code(), Some(500));
/// ```
pub struct MessageOption(Box<dyn FnOnce(&mut Message) + Send>);

impl MessageOption {
    pub fn new<F>(f: F) -> Self
    where
        F: FnOnce(&mut Message) + Send + 'static,
    {
        MessageOption(Box::new(f))
    }

    pub fn apply(self, message: &mut Message) {
        (self.0)(message)
    }
}

impl fmt::Debug for MessageOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MessageOption")
    }
}

/// Attach a named parameter.
pub fn with_value(name: impl Into<String>, value: impl Into<Value>) -> MessageOption {
    let name = name.into();
    let value = value.into();
    MessageOption::new(move |m| m.push_parameter(name, value))
}

/// Attach a parameter rendered through its `Display` implementation.
pub fn with_display<T: fmt::Display + ?Sized>(name: impl Into<String>, value: &T) -> MessageOption {
    with_value(name, Value::display(value))
}

/// Attach a parameter rendered through its `Debug` implementation.
pub fn with_debug<T: fmt::Debug + ?Sized>(name: impl Into<String>, value: &T) -> MessageOption {
    with_value(name, Value::debug(value))
}

/// Attach the fields recorded by a context.
pub fn with_context<C: Context + ?Sized>(ctx: &C) -> MessageOption {
    let fields = ctx.fields();
    MessageOption::new(move |m| m.push_context(&fields))
}

/// Attach an error cause. The encoder emits it as the `error` field.
pub fn with_error<E>(err: E) -> MessageOption
where
    E: StdError + Send + Sync + 'static,
{
    with_error_ref(Arc::new(err))
}

/// Attach a boxed error cause.
pub fn with_boxed_error(err: Box<dyn StdError + Send + Sync + 'static>) -> MessageOption {
    with_error_ref(Arc::from(err))
}

/// Attach an already shared error cause.
pub fn with_error_ref(err: ErrorRef) -> MessageOption {
    MessageOption::new(move |m| m.set_error(err))
}

/// Set the error code. The last code applied wins.
pub fn with_code(code: impl Into<String>) -> MessageOption {
    let code = code.into();
    MessageOption::new(move |m| m.set_code(code))
}

/// Suggest an HTTP status code for the caller's response. The last one wins.
pub fn with_status_code(status: u16) -> MessageOption {
    MessageOption::new(move |m| m.set_status_code(status))
}
