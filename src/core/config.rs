//! Logger configuration
//!
//! `LoggerConfig` is the serializable part of a logger's setup: the level
//! threshold and the primary output target. Handlers are code, not config, and
//! are registered through [`LoggerBuilder`](super::LoggerBuilder) or
//! [`Logger::add_handler`](super::Logger::add_handler).

use super::error::{LoggerError, Result};
use super::log_level::Level;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Primary output selectable from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputTarget {
    #[default]
    Stdout,
    Stderr,
    Discard,
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputTarget::Stdout => "stdout",
            OutputTarget::Stderr => "stderr",
            OutputTarget::Discard => "discard",
        })
    }
}

impl FromStr for OutputTarget {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "stdout" => Ok(OutputTarget::Stdout),
            "stderr" => Ok(OutputTarget::Stderr),
            "discard" | "none" => Ok(OutputTarget::Discard),
            _ => Err(LoggerError::config(
                "output",
                format!("unknown output target '{}'", s),
            )),
        }
    }
}

/// Serializable logger settings.
///
/// # Example
///
/// ```
/// use logfmt_logger::{Level, LoggerConfig, OutputTarget};
///
/// let config = LoggerConfig::from_json(r#"{"min_level": "Warning"}"#).unwrap();
/// assert_eq!(config.min_level, Level::Warning);
/// assert_eq!(config.output, OutputTarget::Stdout);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
    pub min_level: Level,
    pub output: OutputTarget,
}

impl LoggerConfig {
    /// Parse a configuration from JSON text
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}
