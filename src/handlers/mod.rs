//! Handler implementations

pub mod file;
pub mod json;
pub mod writer;

pub use file::FileHandler;
pub use json::JsonHandler;
pub use writer::WriterHandler;

pub use crate::core::Handler;
