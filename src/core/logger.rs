//! Main logger implementation
//!
//! A [`Logger`] owns one emit pipeline: the level threshold, the primary
//! output and the handler registry. Every entry point builds a [`Message`],
//! applies its options in order, runs the pipeline and returns the message.
//! Nothing is queued; all work happens on the calling thread.

use super::{
    config::{LoggerConfig, OutputTarget},
    error::{LoggerError, Result},
    handler::Handler,
    log_context::Context,
    log_level::Level,
    message::Message,
    metrics::LoggerMetrics,
    options::{with_context, with_error, MessageOption},
};
use parking_lot::{Mutex, RwLock};
use std::any::Any;
use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;
use std::io::{self, Write};
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

/// Called with the handler name and the error whenever a handler fails.
pub type HandlerErrorCallback = Arc<dyn Fn(&str, &LoggerError) + Send + Sync>;

/// Callback reporting handler failures on stderr.
pub fn stderr_diagnostics() -> HandlerErrorCallback {
    Arc::new(|name: &str, err: &LoggerError| {
        let _ = writeln!(io::stderr(), "[LOGGER ERROR] Handler '{}' failed: {}", name, err);
    })
}

/// Destination of the logfmt line written for every accepted message.
pub enum Output {
    Stdout,
    Stderr,
    Writer(Box<dyn Write + Send>),
    /// Skip the primary write; handlers still run
    Discard,
}

impl Output {
    pub fn writer<W: Write + Send + 'static>(w: W) -> Self {
        Output::Writer(Box::new(w))
    }
}

impl Default for Output {
    fn default() -> Self {
        Output::Stdout
    }
}

impl From<OutputTarget> for Output {
    fn from(target: OutputTarget) -> Self {
        match target {
            OutputTarget::Stdout => Output::Stdout,
            OutputTarget::Stderr => Output::Stderr,
            OutputTarget::Discard => Output::Discard,
        }
    }
}

impl fmt::Debug for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Stdout => f.write_str("Stdout"),
            Output::Stderr => f.write_str("Stderr"),
            Output::Writer(_) => f.write_str("Writer(..)"),
            Output::Discard => f.write_str("Discard"),
        }
    }
}

type HandlerList = Arc<Vec<Arc<dyn Handler>>>;

pub struct Logger {
    min_level: AtomicU8,
    /// Serializes writes so concurrent lines never interleave
    output: Mutex<Output>,
    /// Copy-on-write: dispatch clones the `Arc` and iterates without the lock
    handlers: RwLock<HandlerList>,
    on_handler_error: RwLock<Option<HandlerErrorCallback>>,
    metrics: LoggerMetrics,
}

impl Logger {
    /// Create a logger writing to stdout with an `Info` threshold.
    #[must_use]
    pub fn new() -> Self {
        Self::with_parts(Level::Info, Output::Stdout, Vec::new(), None)
    }

    /// Create a logger from serializable settings.
    #[must_use]
    pub fn from_config(config: &LoggerConfig) -> Self {
        Self::with_parts(config.min_level, config.output.into(), Vec::new(), None)
    }

    fn with_parts(
        min_level: Level,
        output: Output,
        handlers: Vec<Arc<dyn Handler>>,
        on_handler_error: Option<HandlerErrorCallback>,
    ) -> Self {
        Self {
            min_level: AtomicU8::new(min_level as u8),
            output: Mutex::new(output),
            handlers: RwLock::new(Arc::new(handlers)),
            on_handler_error: RwLock::new(on_handler_error),
            metrics: LoggerMetrics::new(),
        }
    }

    /// Apply threshold and output from `config`. Handlers are kept.
    pub fn configure(&self, config: &LoggerConfig) {
        self.set_min_level(config.min_level);
        self.set_output(config.output.into());
    }

    pub fn set_min_level(&self, level: Level) {
        self.min_level.store(level as u8, Ordering::Relaxed);
    }

    pub fn min_level(&self) -> Level {
        Level::from_u8(self.min_level.load(Ordering::Relaxed))
    }

    /// True when a message at `level` would be emitted.
    ///
    /// Entry points always check this themselves; call it only to skip
    /// building expensive option values.
    #[inline]
    pub fn enabled(&self, level: Level) -> bool {
        level >= self.min_level()
    }

    /// Replace the primary output, returning the previous one.
    pub fn set_output(&self, output: Output) -> Output {
        std::mem::replace(&mut *self.output.lock(), output)
    }

    /// Register a handler. Handlers run in registration order.
    ///
    /// Safe to call while other threads are logging: in-flight dispatches keep
    /// using the list they started with.
    pub fn add_handler<H: Handler + 'static>(&self, handler: H) {
        self.add_shared_handler(Arc::new(handler));
    }

    pub fn add_shared_handler(&self, handler: Arc<dyn Handler>) {
        let mut handlers = self.handlers.write();
        let mut next = Vec::with_capacity(handlers.len() + 1);
        next.extend(handlers.iter().cloned());
        next.push(handler);
        *handlers = Arc::new(next);
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.read().len()
    }

    /// Install (or remove) the callback told about handler failures.
    ///
    /// Without a callback, failures are only counted in [`LoggerMetrics`].
    pub fn set_handler_error_callback(&self, callback: Option<HandlerErrorCallback>) {
        *self.on_handler_error.write() = callback;
    }

    /// Get the logger metrics for detailed observability
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub fn flush(&self) -> Result<()> {
        match &mut *self.output.lock() {
            Output::Stdout => io::stdout().flush()?,
            Output::Stderr => io::stderr().flush()?,
            Output::Writer(w) => w.flush()?,
            Output::Discard => {}
        }
        Ok(())
    }

    /// Build, configure and emit a message at `level`.
    pub fn log<I>(&self, level: Level, text: impl Into<Cow<'static, str>>, opts: I) -> Message
    where
        I: IntoIterator<Item = MessageOption>,
    {
        let mut message = Message::new(level, text);
        message.apply(opts);
        self.dispatch(&message);
        message
    }

    /// Like [`Logger::log`], then attaches the fields of `ctx` after all
    /// explicit options.
    pub fn log_ctx<C, I>(
        &self,
        level: Level,
        ctx: &C,
        text: impl Into<Cow<'static, str>>,
        opts: I,
    ) -> Message
    where
        C: Context + ?Sized,
        I: IntoIterator<Item = MessageOption>,
    {
        let mut message = Message::new(level, text);
        message.apply(opts);
        message.apply([with_context(ctx)]);
        self.dispatch(&message);
        message
    }

    #[inline]
    pub fn debug<I>(&self, text: impl Into<Cow<'static, str>>, opts: I) -> Message
    where
        I: IntoIterator<Item = MessageOption>,
    {
        self.log(Level::Debug, text, opts)
    }

    #[inline]
    pub fn info<I>(&self, text: impl Into<Cow<'static, str>>, opts: I) -> Message
    where
        I: IntoIterator<Item = MessageOption>,
    {
        self.log(Level::Info, text, opts)
    }

    #[inline]
    pub fn warn<I>(&self, text: impl Into<Cow<'static, str>>, opts: I) -> Message
    where
        I: IntoIterator<Item = MessageOption>,
    {
        self.log(Level::Warning, text, opts)
    }

    #[inline]
    pub fn error<I>(&self, text: impl Into<Cow<'static, str>>, opts: I) -> Message
    where
        I: IntoIterator<Item = MessageOption>,
    {
        self.log(Level::Error, text, opts)
    }

    #[inline]
    pub fn debug_ctx<C, I>(&self, ctx: &C, text: impl Into<Cow<'static, str>>, opts: I) -> Message
    where
        C: Context + ?Sized,
        I: IntoIterator<Item = MessageOption>,
    {
        self.log_ctx(Level::Debug, ctx, text, opts)
    }

    #[inline]
    pub fn info_ctx<C, I>(&self, ctx: &C, text: impl Into<Cow<'static, str>>, opts: I) -> Message
    where
        C: Context + ?Sized,
        I: IntoIterator<Item = MessageOption>,
    {
        self.log_ctx(Level::Info, ctx, text, opts)
    }

    #[inline]
    pub fn warn_ctx<C, I>(&self, ctx: &C, text: impl Into<Cow<'static, str>>, opts: I) -> Message
    where
        C: Context + ?Sized,
        I: IntoIterator<Item = MessageOption>,
    {
        self.log_ctx(Level::Warning, ctx, text, opts)
    }

    #[inline]
    pub fn error_ctx<C, I>(&self, ctx: &C, text: impl Into<Cow<'static, str>>, opts: I) -> Message
    where
        C: Context + ?Sized,
        I: IntoIterator<Item = MessageOption>,
    {
        self.log_ctx(Level::Error, ctx, text, opts)
    }

    /// Log an error with both a context and a cause.
    ///
    /// Same as [`Logger::error`] with `with_context(ctx)` and `with_error(err)`
    /// appended after `opts`.
    pub fn error_ctx_err<C, E, I>(
        &self,
        ctx: &C,
        err: E,
        text: impl Into<Cow<'static, str>>,
        opts: I,
    ) -> Message
    where
        C: Context + ?Sized,
        E: StdError + Send + Sync + 'static,
        I: IntoIterator<Item = MessageOption>,
    {
        let mut message = Message::new(Level::Error, text);
        message.apply(opts);
        message.apply([with_context(ctx), with_error(err)]);
        self.dispatch(&message);
        message
    }

    /// Run the emit pipeline for an already built message.
    ///
    /// Below the threshold nothing happens. Otherwise the logfmt line goes to
    /// the primary output, then each handler is called once, in registration
    /// order. Handler errors and panics are swallowed so later handlers and
    /// the caller are unaffected.
    pub fn dispatch(&self, message: &Message) {
        if !self.enabled(message.level()) {
            self.metrics.record_filtered();
            return;
        }

        self.write_output(message);

        let handlers = Arc::clone(&self.handlers.read());
        let callback = self.on_handler_error.read().clone();
        for handler in handlers.iter() {
            let result = panic::catch_unwind(AssertUnwindSafe(|| handler.handle(message)));
            let err = match result {
                Ok(Ok(())) => continue,
                Ok(Err(e)) => e,
                Err(panic_info) => {
                    LoggerError::handler(handler.name(), panic_message(panic_info.as_ref()))
                }
            };
            self.metrics.record_handler_failure();
            if let Some(ref callback) = callback {
                let _ = panic::catch_unwind(AssertUnwindSafe(|| callback(handler.name(), &err)));
            }
        }

        self.metrics.record_emitted();
    }

    fn write_output(&self, message: &Message) {
        let mut output = self.output.lock();
        let result = match &mut *output {
            Output::Stdout => message.write_logfmt(io::stdout().lock()),
            Output::Stderr => message.write_logfmt(io::stderr().lock()),
            Output::Writer(w) => message.write_logfmt(&mut **w),
            Output::Discard => Ok(()),
        };
        if result.is_err() {
            self.metrics.record_output_failure();
        }
    }
}

fn panic_message(panic_info: &(dyn Any + Send)) -> String {
    if let Some(s) = panic_info.downcast_ref::<&str>() {
        format!("panicked: {}", s)
    } else if let Some(s) = panic_info.downcast_ref::<String>() {
        format!("panicked: {}", s)
    } else {
        "panicked".to_string()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("min_level", &self.min_level())
            .field("output", &*self.output.lock())
            .field("handlers", &self.handler_count())
            .field("metrics", &self.metrics)
            .finish()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use logfmt_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .min_level(Level::Debug)
///     .output_writer(std::io::sink())
///     .handler(handler_fn("audit", |_m| Ok(())))
///     .on_handler_error(stderr_diagnostics())
///     .build();
///
/// assert_eq!(logger.min_level(), Level::Debug);
/// ```
pub struct LoggerBuilder {
    min_level: Level,
    output: Output,
    handlers: Vec<Arc<dyn Handler>>,
    on_handler_error: Option<HandlerErrorCallback>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            min_level: Level::Info,
            output: Output::Stdout,
            handlers: Vec::new(),
            on_handler_error: None,
        }
    }

    /// Set minimum log level
    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: Level) -> Self {
        self.min_level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn output(mut self, output: Output) -> Self {
        self.output = output;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn output_writer<W: Write + Send + 'static>(self, w: W) -> Self {
        self.output(Output::writer(w))
    }

    #[must_use = "builder methods return a new value"]
    pub fn discard_output(self) -> Self {
        self.output(Output::Discard)
    }

    /// Take threshold and output from serializable settings
    #[must_use = "builder methods return a new value"]
    pub fn config(self, config: &LoggerConfig) -> Self {
        self.min_level(config.min_level).output(config.output.into())
    }

    /// Add a handler
    #[must_use = "builder methods return a new value"]
    pub fn handler<H: Handler + 'static>(mut self, handler: H) -> Self {
        self.handlers.push(Arc::new(handler));
        self
    }

    /// Set callback for handler failure notifications
    #[must_use = "builder methods return a new value"]
    pub fn on_handler_error(mut self, callback: HandlerErrorCallback) -> Self {
        self.on_handler_error = Some(callback);
        self
    }

    /// Build the logger
    pub fn build(self) -> Logger {
        Logger::with_parts(
            self.min_level,
            self.output,
            self.handlers,
            self.on_handler_error,
        )
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a new builder for configuring a Logger
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
