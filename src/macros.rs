//! Logging macros with `key => value` parameter shorthand.
//!
//! Message text stays constant; variable data goes into parameters.
//!
//! # Examples
//!
//! ```
//! use logfmt_logger::prelude::*;
//! use logfmt_logger::info;
//!
//! let logger = Logger::builder().discard_output().build();
//!
//! // Basic logging
//! info!(logger, "server started");
//!
//! // With parameters
//! let port = 8080;
//! let m = info!(logger, "listening", "port" => port, "tls" => false);
//! assert_eq!(m.parameters().len(), 2);
//! ```

/// Log a message at the given level.
///
/// # Examples
///
/// ```
/// # use logfmt_logger::prelude::*;
/// # let logger = Logger::builder().discard_output().build();
/// use logfmt_logger::log;
/// log!(logger, Level::Info, "simple message");
/// log!(logger, Level::Error, "request failed", "status" => 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $text:expr $(, $key:expr => $value:expr)* $(,)?) => {
        $logger.log($level, $text, [$($crate::with_value($key, $value)),*])
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use logfmt_logger::prelude::*;
/// # let logger = Logger::builder().discard_output().build();
/// use logfmt_logger::debug;
/// debug!(logger, "cache lookup", "key" => "user:42", "hit" => true);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use logfmt_logger::prelude::*;
/// # let logger = Logger::builder().discard_output().build();
/// use logfmt_logger::info;
/// info!(logger, "application started");
/// info!(logger, "batch processed", "items" => 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Info, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use logfmt_logger::prelude::*;
/// # let logger = Logger::builder().discard_output().build();
/// use logfmt_logger::warn;
/// warn!(logger, "low disk space");
/// warn!(logger, "retrying", "attempt" => 3, "max" => 5);
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Warning, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use logfmt_logger::prelude::*;
/// # let logger = Logger::builder().discard_output().build();
/// use logfmt_logger::error;
/// error!(logger, "failed to connect to database");
/// error!(logger, "internal error", "code" => 500);
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Error, $($arg)+)
    };
}
