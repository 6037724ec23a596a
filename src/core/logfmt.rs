//! Logfmt encoder
//!
//! Produces one line per message with a fixed field order:
//!
//! ```text
//! <timestamp> <level> msg=<text> [error=<err>] <parameters...> <context...> [code=<code>] [status=<status>]
//! ```
//!
//! Values are quoted only when needed; see [`write_value_string`].

use super::message::Message;
use super::value::Value;
use chrono::{DateTime, TimeZone};
use std::fmt::Write as _;
use std::io::{self, BufWriter, Write};

/// Timestamp layout: microseconds and a numeric UTC offset,
/// e.g. `2025-01-08T10:30:45.123456+0000`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f%z";

/// Line terminator appended after every message.
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

const WRITE_BUFFER_SIZE: usize = 1024;

/// Format a timestamp the way it appears at the start of a logfmt line.
pub fn format_timestamp<Tz>(timestamp: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

/// Append the logfmt rendering of `message` to `out`, without a terminator.
pub fn encode(message: &Message, out: &mut String) {
    out.push_str(&format_timestamp(&message.timestamp()));
    out.push(' ');
    out.push_str(message.level().as_str());

    write_str_property(out, "msg", message.text());
    if let Some(err) = message.error() {
        write_str_property(out, "error", &err.to_string());
    }
    for p in message.parameters() {
        write_property(out, &p.name, &p.value);
    }
    for p in message.context() {
        write_property(out, &p.name, &p.value);
    }
    if let Some(code) = message.code() {
        write_str_property(out, "code", code);
    }
    if let Some(status) = message.status_code() {
        let _ = write!(out, " status={}", status);
    }
}

/// Write the full line for `message`, terminator included, and flush.
pub fn write<W: Write>(message: &Message, w: W) -> io::Result<()> {
    let mut line = String::with_capacity(128);
    encode(message, &mut line);
    line.push_str(LINE_ENDING);

    let mut writer = BufWriter::with_capacity(WRITE_BUFFER_SIZE, w);
    writer.write_all(line.as_bytes())?;
    writer.flush()
}

/// Append ` key=value`, rendering the value according to its variant.
pub fn write_property(out: &mut String, key: &str, value: &Value) {
    out.push(' ');
    out.push_str(key);
    out.push('=');
    match value {
        Value::Bool(b) => {
            let _ = write!(out, "{}", b);
        }
        Value::Int(i) => {
            let _ = write!(out, "{}", i);
        }
        Value::Uint(u) => {
            let _ = write!(out, "{}", u);
        }
        Value::Float(f) => {
            let _ = write!(out, "{}", f);
        }
        Value::Str(s) | Value::Display(s) | Value::Debug(s) => write_value_string(out, s),
        Value::Error(e) => write_value_string(out, &e.to_string()),
    }
}

fn write_str_property(out: &mut String, key: &str, value: &str) {
    out.push(' ');
    out.push_str(key);
    out.push('=');
    write_value_string(out, value);
}

/// Append a text value, quoting and escaping only when required.
///
/// - A value containing `"`, `=`, or any character at or below `' '` is
///   wrapped in double quotes.
/// - Inside quotes, `\` and `"` are escaped with a backslash when the value
///   contains `"`, `=`, or a backslash.
/// - A backslash alone never causes quoting: `C:\path` is written bare.
pub fn write_value_string(out: &mut String, value: &str) {
    let mut needs_quotes = false;
    let mut needs_escape = false;
    let mut has_backslash = false;
    for c in value.chars() {
        if c == '"' || c == '=' {
            needs_quotes = true;
            needs_escape = true;
        } else if c <= ' ' {
            needs_quotes = true;
        } else if c == '\\' {
            has_backslash = true;
        }
    }

    if !needs_quotes {
        out.push_str(value);
        return;
    }

    out.push('"');
    if needs_escape || has_backslash {
        for c in value.chars() {
            if c == '\\' || c == '"' {
                out.push('\\');
            }
            out.push(c);
        }
    } else {
        out.push_str(value);
    }
    out.push('"');
}
