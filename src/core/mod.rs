//! Core logger types and traits

pub mod config;
pub mod error;
pub mod handler;
pub mod json_format;
pub mod log_context;
pub mod log_level;
pub mod logfmt;
pub mod logger;
pub mod message;
pub mod metrics;
pub mod options;
pub mod value;

pub use config::{LoggerConfig, OutputTarget};
pub use error::{LoggerError, Result};
pub use handler::{handler_fn, FnHandler, Handler};
pub use log_context::{Context, LogContext};
pub use log_level::Level;
pub use logger::{stderr_diagnostics, HandlerErrorCallback, Logger, LoggerBuilder, Output};
pub use message::Message;
pub use metrics::LoggerMetrics;
pub use options::{
    with_boxed_error, with_code, with_context, with_debug, with_display, with_error,
    with_error_ref, with_status_code, with_value, MessageOption,
};
pub use value::{ErrorRef, Parameter, Value};
