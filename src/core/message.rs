//! Log message record

use super::log_context::Context;
use super::log_level::Level;
use super::logfmt;
use super::options::MessageOption;
use super::value::{ErrorRef, Parameter, Value};
use chrono::{DateTime, FixedOffset, Local};
use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;
use std::io::{self, Write};

/// A structured log event.
///
/// A message is created by an entry point, configured by its options, and
/// then handed to the primary output and to every registered handler. It also
/// implements [`std::error::Error`], so a logged event can be returned as the
/// error value of the function that logged it:
///
/// ```
/// use logfmt_logger::{Logger, Message, with_value};
///
/// fn open(logger: &Logger, path: &str) -> Result<(), Message> {
///     Err(logger.error("cannot open file", [with_value("path", path)]))
/// }
///
/// let logger = Logger::builder().discard_output().build();
/// let err = open(&logger, "/etc/app.conf").unwrap_err();
/// assert_eq!(err.to_string(), "cannot open file");
/// ```
#[derive(Debug, Clone)]
pub struct Message {
    timestamp: DateTime<FixedOffset>,
    level: Level,
    text: Cow<'static, str>,
    error: Option<ErrorRef>,
    parameters: Vec<Parameter>,
    context: Vec<Parameter>,
    code: Option<String>,
    status_code: Option<u16>,
}

impl Message {
    /// Create a message stamped with the current local time.
    pub fn new(level: Level, text: impl Into<Cow<'static, str>>) -> Self {
        Self::new_at(level, text, Local::now().fixed_offset())
    }

    /// Create a message with an explicit timestamp.
    pub fn new_at(
        level: Level,
        text: impl Into<Cow<'static, str>>,
        timestamp: DateTime<FixedOffset>,
    ) -> Self {
        Self {
            timestamp,
            level,
            text: text.into(),
            error: None,
            parameters: Vec::new(),
            context: Vec::new(),
            code: None,
            status_code: None,
        }
    }

    /// Apply options in order; each one sees the effects of those before it.
    pub fn apply<I>(&mut self, opts: I) -> &mut Self
    where
        I: IntoIterator<Item = MessageOption>,
    {
        for opt in opts {
            opt.apply(self);
        }
        self
    }

    pub fn timestamp(&self) -> DateTime<FixedOffset> {
        self.timestamp
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The attached cause, if any.
    pub fn error(&self) -> Option<&ErrorRef> {
        self.error.as_ref()
    }

    /// Parameters attached explicitly, in attachment order.
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// Parameters inherited from a context, in attachment order.
    pub fn context(&self) -> &[Parameter] {
        &self.context
    }

    /// Error code associated with the message.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// HTTP status code suggested for a client response.
    pub fn status_code(&self) -> Option<u16> {
        self.status_code
    }

    pub fn push_parameter(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.parameters.push(Parameter::new(name, value));
    }

    /// Append every field recorded by `ctx` to the context list.
    pub fn push_context<C: Context + ?Sized>(&mut self, ctx: &C) {
        self.context.extend(ctx.fields());
    }

    pub fn set_error(&mut self, err: ErrorRef) {
        self.error = Some(err);
    }

    /// Set the error code; an empty code clears it.
    pub fn set_code(&mut self, code: impl Into<String>) {
        let code = code.into();
        self.code = (!code.is_empty()).then_some(code);
    }

    /// Set the suggested status code; zero clears it.
    pub fn set_status_code(&mut self, status: u16) {
        self.status_code = (status != 0).then_some(status);
    }

    /// Render as a single logfmt line without the line terminator.
    pub fn to_logfmt(&self) -> String {
        let mut out = String::with_capacity(128);
        logfmt::encode(self, &mut out);
        out
    }

    /// Write the logfmt line plus terminator to `w` and flush.
    pub fn write_logfmt<W: Write>(&self, w: W) -> io::Result<()> {
        logfmt::write(self, w)
    }

    /// Render as a structured JSON object.
    pub fn to_json(&self) -> serde_json::Value {
        super::json_format::to_json(self)
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl StdError for Message {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.error
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}
