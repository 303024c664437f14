//! Log value representation and formatting.

use serde::Serialize;
use std::fmt;

/// A value handed to the console API.
///
/// The console accepts a closed set of shapes rather than arbitrary host
/// objects: primitives, structured data (anything serializable, rendered as
/// JSON), and an opaque debug-rendered fallback for everything else.
#[derive(Clone, Debug, PartialEq)]
pub enum LogValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    /// Structured data rendered as JSON.
    Structured(serde_json::Value),
    /// Pre-rendered debug representation of a host value.
    Other(String),
}

impl LogValue {
    /// Capture any serializable value as structured data.
    ///
    /// A failing `Serialize` implementation degrades to the value's debug
    /// form instead of propagating the error.
    pub fn from_serialize<T: Serialize + fmt::Debug>(value: &T) -> Self {
        match serde_json::to_value(value) {
            Ok(v) => LogValue::Structured(v),
            Err(_) => LogValue::Other(format!("{:?}", value)),
        }
    }

    /// Capture a host value by its debug representation.
    pub fn other<T: fmt::Debug>(value: &T) -> Self {
        LogValue::Other(format!("{:?}", value))
    }

    /// The string content when this value is a plain string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            LogValue::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for LogValue {
    fn from(s: &str) -> Self {
        LogValue::Str(s.to_string())
    }
}

impl From<String> for LogValue {
    fn from(s: String) -> Self {
        LogValue::Str(s)
    }
}

impl From<bool> for LogValue {
    fn from(b: bool) -> Self {
        LogValue::Bool(b)
    }
}

impl From<i32> for LogValue {
    fn from(i: i32) -> Self {
        LogValue::Int(i as i64)
    }
}

impl From<i64> for LogValue {
    fn from(i: i64) -> Self {
        LogValue::Int(i)
    }
}

impl From<f64> for LogValue {
    fn from(f: f64) -> Self {
        LogValue::Float(f)
    }
}

impl From<serde_json::Value> for LogValue {
    fn from(v: serde_json::Value) -> Self {
        LogValue::Structured(v)
    }
}

/// Format a single value for display. Never fails.
pub fn format(value: &LogValue) -> String {
    match value {
        LogValue::Null => "null".to_string(),
        LogValue::Bool(b) => b.to_string(),
        LogValue::Int(i) => i.to_string(),
        LogValue::Float(r) => {
            if r.is_nan() {
                "NaN".to_string()
            } else if r.is_infinite() {
                if *r > 0.0 {
                    "Infinity".to_string()
                } else {
                    "-Infinity".to_string()
                }
            } else {
                r.to_string()
            }
        }
        LogValue::Str(s) => s.clone(),
        LogValue::Structured(v) => serde_json::to_string(v).unwrap_or_else(|_| v.to_string()),
        LogValue::Other(s) => s.clone(),
    }
}

impl fmt::Display for LogValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format(self))
    }
}
