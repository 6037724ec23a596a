//! Structured JSON rendering of messages
//!
//! Keys follow the logfmt field order. Later duplicates of a parameter name
//! overwrite earlier ones, since a JSON object cannot carry the same key
//! twice. Parameters or context fields named like a message field are written
//! under a `fields.` prefix so they never replace it.

use super::message::Message;
use chrono::SecondsFormat;
use std::borrow::Cow;

/// Keys owned by the message itself.
const RESERVED_KEYS: [&str; 6] = ["timestamp", "level", "msg", "error", "code", "status"];

fn field_key(name: &str) -> Cow<'_, str> {
    if RESERVED_KEYS.contains(&name) {
        Cow::Owned(format!("fields.{}", name))
    } else {
        Cow::Borrowed(name)
    }
}

/// Build the JSON object for a message.
pub fn to_json(message: &Message) -> serde_json::Value {
    let mut json_obj = serde_json::Map::new();

    json_obj.insert(
        "timestamp".to_string(),
        serde_json::Value::String(
            message
                .timestamp()
                .to_rfc3339_opts(SecondsFormat::Micros, false),
        ),
    );
    json_obj.insert(
        "level".to_string(),
        serde_json::Value::String(message.level().as_str().to_string()),
    );
    json_obj.insert(
        "msg".to_string(),
        serde_json::Value::String(message.text().to_string()),
    );

    if let Some(err) = message.error() {
        json_obj.insert(
            "error".to_string(),
            serde_json::Value::String(err.to_string()),
        );
    }

    for p in message.parameters().iter().chain(message.context()) {
        json_obj.insert(field_key(&p.name).into_owned(), p.value.to_json_value());
    }

    if let Some(code) = message.code() {
        json_obj.insert("code".to_string(), serde_json::Value::String(code.to_string()));
    }
    if let Some(status) = message.status_code() {
        json_obj.insert("status".to_string(), serde_json::Value::Number(status.into()));
    }

    serde_json::Value::Object(json_obj)
}
