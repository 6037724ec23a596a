//! JSON handler for structured logging

use crate::core::{Handler, Message, Result};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

/// JSON handler for structured logging
///
/// Writes each message as a single-line JSON object (JSONL format), with
/// keys in the same order as the logfmt rendering.
pub struct JsonHandler<W: Write + Send> {
    writer: Mutex<W>,
    pretty: bool,
}

impl<W: Write + Send> JsonHandler<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
            pretty: false,
        }
    }

    /// Pretty-print each object over several lines
    #[must_use]
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl JsonHandler<File> {
    /// Create a JSON handler appending to the file at `path`
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::new(file))
    }
}

impl<W: Write + Send> Handler for JsonHandler<W> {
    fn handle(&self, message: &Message) -> Result<()> {
        let json = message.to_json();
        let text = if self.pretty {
            serde_json::to_string_pretty(&json)?
        } else {
            serde_json::to_string(&json)?
        };

        let mut writer = self.writer.lock();
        writeln!(writer, "{}", text)?;
        writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "json"
    }
}
