//! Writer handler implementation

use crate::core::{Handler, Level, Message, Result};
use parking_lot::Mutex;
use std::io::Write;

/// Writes the logfmt line of every message to an arbitrary writer.
///
/// A handler-level threshold can be set to forward only the more severe
/// messages, e.g. errors to a secondary stream.
pub struct WriterHandler<W: Write + Send> {
    writer: Mutex<W>,
    min_level: Level,
    name: String,
}

impl<W: Write + Send> WriterHandler<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
            min_level: Level::Debug,
            name: "writer".to_string(),
        }
    }

    /// Only handle messages at or above `level`
    #[must_use]
    pub fn with_min_level(mut self, level: Level) -> Self {
        self.min_level = level;
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Recover the wrapped writer
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl<W: Write + Send> Handler for WriterHandler<W> {
    fn handle(&self, message: &Message) -> Result<()> {
        if message.level() < self.min_level {
            return Ok(());
        }
        let mut writer = self.writer.lock();
        message.write_logfmt(&mut *writer)?;
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
