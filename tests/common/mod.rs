//! Shared helpers for integration tests

#![allow(dead_code)]

use logfmt_logger::prelude::*;
use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

/// In-memory writer that can be inspected after being handed to a logger
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().clone()).expect("log output is UTF-8")
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Handler that records every message it is given
#[derive(Default)]
pub struct RecordingHandler {
    pub messages: Mutex<Vec<Message>>,
}

impl RecordingHandler {
    pub fn texts(&self) -> Vec<String> {
        self.messages
            .lock()
            .iter()
            .map(|m| m.text().to_string())
            .collect()
    }
}

impl Handler for RecordingHandler {
    fn handle(&self, message: &Message) -> Result<()> {
        self.messages.lock().push(message.clone());
        Ok(())
    }

    fn name(&self) -> &str {
        "recording"
    }
}

/// Strip the leading timestamp from a logfmt line
pub fn without_timestamp(line: &str) -> &str {
    line.split_once(' ').map(|(_, rest)| rest).unwrap_or(line)
}
