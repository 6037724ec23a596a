//! # Logfmt Logger
//!
//! Structured, leveled logging. Each event carries a constant text plus typed
//! key/value properties, is filtered by severity, rendered as a logfmt line
//! and offered to every registered handler.
//!
//! ## Features
//!
//! - **Constant messages**: no printf-style formatting; variable data goes in
//!   parameters, which keeps messages easy to search and filter
//! - **Functional options**: any number of parameters, a context, an error,
//!   an error code and a status code in a single call
//! - **Messages are errors**: every entry point returns the [`Message`], which
//!   implements `std::error::Error`
//! - **Lossless logfmt**: deterministic field order and minimal quoting
//!
//! ```
//! use logfmt_logger::prelude::*;
//!
//! let logger = Logger::builder().output_writer(std::io::sink()).build();
//! let ctx = LogContext::new().with_value("request_id", "abc-123");
//!
//! let m = logger.warn_ctx(&ctx, "slow query", [with_value("ms", 950)]);
//! assert_eq!(m.to_string(), "slow query");
//! assert!(m.to_logfmt().ends_with("warn msg=\"slow query\" ms=950 request_id=abc-123"));
//! ```

pub mod core;
pub mod global;
pub mod handlers;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        handler_fn, stderr_diagnostics, with_boxed_error, with_code, with_context, with_debug,
        with_display, with_error, with_status_code, with_value, Context, Handler, Level,
        LogContext, Logger, LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics, Message,
        MessageOption, Output, OutputTarget, Parameter, Result, Value,
    };
    pub use crate::handlers::{FileHandler, JsonHandler, WriterHandler};
}

pub use crate::core::{
    handler_fn, stderr_diagnostics, with_boxed_error, with_code, with_context, with_debug,
    with_display, with_error, with_error_ref, with_status_code, with_value, Context, ErrorRef,
    FnHandler, Handler, HandlerErrorCallback, Level, LogContext, Logger, LoggerBuilder,
    LoggerConfig, LoggerError, LoggerMetrics, Message, MessageOption, Output, OutputTarget,
    Parameter, Result, Value,
};
pub use global::{
    add_handler, configure, debug, debug_ctx, error, error_ctx, error_ctx_err, info, info_ctx,
    log, logger, min_level, set_handler_error_callback, set_min_level, set_output, warn,
    warn_ctx,
};
pub use handlers::{FileHandler, JsonHandler, WriterHandler};
