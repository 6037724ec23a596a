//! Process-wide logger and free-function entry points
//!
//! The global logger starts with an `Info` threshold, writes to stdout and has
//! no handlers. Register handlers during startup; registering later is safe,
//! since dispatch works on a snapshot of the handler list.

use crate::core::{
    Context, HandlerErrorCallback, Handler, Level, Logger, LoggerConfig, Message, MessageOption,
    Output,
};
use once_cell::sync::Lazy;
use std::borrow::Cow;
use std::error::Error as StdError;

static GLOBAL_LOGGER: Lazy<Logger> = Lazy::new(Logger::new);

/// The process-wide logger used by the free functions.
pub fn logger() -> &'static Logger {
    &GLOBAL_LOGGER
}

/// Apply threshold and output from `config` to the global logger.
pub fn configure(config: &LoggerConfig) {
    GLOBAL_LOGGER.configure(config);
}

pub fn add_handler<H: Handler + 'static>(handler: H) {
    GLOBAL_LOGGER.add_handler(handler);
}

pub fn set_min_level(level: Level) {
    GLOBAL_LOGGER.set_min_level(level);
}

pub fn min_level() -> Level {
    GLOBAL_LOGGER.min_level()
}

/// Replace the global primary output, returning the previous one.
pub fn set_output(output: Output) -> Output {
    GLOBAL_LOGGER.set_output(output)
}

pub fn set_handler_error_callback(callback: Option<HandlerErrorCallback>) {
    GLOBAL_LOGGER.set_handler_error_callback(callback);
}

pub fn log<I>(level: Level, text: impl Into<Cow<'static, str>>, opts: I) -> Message
where
    I: IntoIterator<Item = MessageOption>,
{
    GLOBAL_LOGGER.log(level, text, opts)
}

/// Log a debug level message.
pub fn debug<I>(text: impl Into<Cow<'static, str>>, opts: I) -> Message
where
    I: IntoIterator<Item = MessageOption>,
{
    GLOBAL_LOGGER.debug(text, opts)
}

/// Log an info level message.
pub fn info<I>(text: impl Into<Cow<'static, str>>, opts: I) -> Message
where
    I: IntoIterator<Item = MessageOption>,
{
    GLOBAL_LOGGER.info(text, opts)
}

/// Log a warning level message.
pub fn warn<I>(text: impl Into<Cow<'static, str>>, opts: I) -> Message
where
    I: IntoIterator<Item = MessageOption>,
{
    GLOBAL_LOGGER.warn(text, opts)
}

/// Log an error level message.
pub fn error<I>(text: impl Into<Cow<'static, str>>, opts: I) -> Message
where
    I: IntoIterator<Item = MessageOption>,
{
    GLOBAL_LOGGER.error(text, opts)
}

/// Log a debug level message with context fields attached last.
pub fn debug_ctx<C, I>(ctx: &C, text: impl Into<Cow<'static, str>>, opts: I) -> Message
where
    C: Context + ?Sized,
    I: IntoIterator<Item = MessageOption>,
{
    GLOBAL_LOGGER.debug_ctx(ctx, text, opts)
}

/// Log an info level message with context fields attached last.
pub fn info_ctx<C, I>(ctx: &C, text: impl Into<Cow<'static, str>>, opts: I) -> Message
where
    C: Context + ?Sized,
    I: IntoIterator<Item = MessageOption>,
{
    GLOBAL_LOGGER.info_ctx(ctx, text, opts)
}

/// Log a warning level message with context fields attached last.
pub fn warn_ctx<C, I>(ctx: &C, text: impl Into<Cow<'static, str>>, opts: I) -> Message
where
    C: Context + ?Sized,
    I: IntoIterator<Item = MessageOption>,
{
    GLOBAL_LOGGER.warn_ctx(ctx, text, opts)
}

/// Log an error level message with context fields attached last.
pub fn error_ctx<C, I>(ctx: &C, text: impl Into<Cow<'static, str>>, opts: I) -> Message
where
    C: Context + ?Sized,
    I: IntoIterator<Item = MessageOption>,
{
    GLOBAL_LOGGER.error_ctx(ctx, text, opts)
}

/// Log an error with a context and a cause, both attached after `opts`.
///
/// ```no_run
/// use logfmt_logger::{error_ctx_err, with_value, LogContext};
///
/// let ctx = LogContext::new().with_value("request_id", "abc-123");
/// let err = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
/// error_ctx_err(&ctx, err, "cannot save upload", [with_value("bytes", 4096)]);
/// ```
pub fn error_ctx_err<C, E, I>(
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
    GLOBAL_LOGGER.error_ctx_err(ctx, err, text, opts)
}
