//! Typed property values attached to messages

use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Shared, thread-safe error cause.
pub type ErrorRef = Arc<dyn StdError + Send + Sync + 'static>;

/// Value of a message property.
///
/// The variant decides how the logfmt encoder renders the value. Booleans and
/// numbers use their natural decimal form and are never quoted; every other
/// variant is rendered as text and passes through the string-quoting rule.
#[derive(Debug, Clone)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Str(String),
    /// An error, rendered as its message text
    Error(ErrorRef),
    /// Text produced by a `Display` implementation
    Display(String),
    /// Generic fallback produced by a `Debug` implementation
    Debug(String),
}

impl Value {
    /// Wrap an error so it renders as its message text.
    pub fn error<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Value::Error(Arc::new(err))
    }

    /// Capture the `Display` text of any value.
    pub fn display<T: fmt::Display + ?Sized>(value: &T) -> Self {
        Value::Display(value.to_string())
    }

    /// Capture the `Debug` text of any value.
    pub fn debug<T: fmt::Debug + ?Sized>(value: &T) -> Self {
        Value::Debug(format!("{:?}", value))
    }

    /// Convert to serde_json::Value for JSON serialization
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Int(i) => serde_json::Value::Number((*i).into()),
            Value::Uint(u) => serde_json::Value::Number((*u).into()),
            Value::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            other => serde_json::Value::String(other.to_string()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Uint(u) => write!(f, "{}", u),
            Value::Float(fl) => write!(f, "{}", fl),
            Value::Str(s) | Value::Display(s) | Value::Debug(s) => f.write_str(s),
            Value::Error(e) => write!(f, "{}", e),
        }
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(v: $t) -> Self {
                Value::Int(v as i64)
            }
        })*
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(v: $t) -> Self {
                Value::Uint(v as u64)
            }
        })*
    };
}

impl_from_signed!(i8, i16, i32, i64, isize);
impl_from_unsigned!(u8, u16, u32, u64, usize);

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<f32> for Value {
    fn from(f: f32) -> Self {
        // Widen through the shortest f32 text so 0.1f32 still renders as 0.1.
        Value::Float(f.to_string().parse().unwrap_or(f as f64))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::Str(s.clone())
    }
}

impl From<Cow<'_, str>> for Value {
    fn from(s: Cow<'_, str>) -> Self {
        Value::Str(s.into_owned())
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::Str(c.to_string())
    }
}

impl From<Duration> for Value {
    fn from(d: Duration) -> Self {
        Value::Display(format!("{:?}", d))
    }
}

impl From<ErrorRef> for Value {
    fn from(e: ErrorRef) -> Self {
        Value::Error(e)
    }
}

/// A named value attached to a message.
///
/// Names are not required to be unique; duplicates are all emitted in the
/// order they were attached.
#[derive(Debug, Clone)]
pub struct Parameter {
    pub name: String,
    pub value: Value,
}

impl Parameter {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        let name = name.into();
        debug_assert!(!name.is_empty(), "parameter name must not be empty");
        Self {
            name,
            value: value.into(),
        }
    }
}
