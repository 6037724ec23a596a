//! File handler implementation

use crate::core::{Handler, LoggerError, Message, Result};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

/// Appends the logfmt line of every message to a file.
///
/// Each line is flushed before `handle` returns.
pub struct FileHandler {
    file: Mutex<File>,
    path: PathBuf,
}

impl FileHandler {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                LoggerError::handler("file", format!("cannot open '{}': {}", path.display(), e))
            })?;

        Ok(Self {
            file: Mutex::new(file),
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Handler for FileHandler {
    fn handle(&self, message: &Message) -> Result<()> {
        let mut file = self.file.lock();
        message.write_logfmt(&mut *file)?;
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}
