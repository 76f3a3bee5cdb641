//! Log arguments and how they are rendered into a line

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::error::LogResult;

/// One argument passed to a logging method
///
/// Strings and primitives are used as-is. Objects, arrays and `null` are
/// rendered as compact JSON, so a map shows up as `{"a":1}` rather than
/// an opaque debug dump.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Text(String),
    Structured(Value),
}

impl Arg {
    /// Serialize any value into a structured argument
    ///
    /// Values serde cannot represent as JSON (for example maps with
    /// non-string keys) degrade to an `[unserializable: ...]` placeholder.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Self {
        Self::try_json(value).unwrap_or_else(|e| Arg::Text(format!("[unserializable: {}]", e)))
    }

    /// Like [`Arg::json`], but hands the serialization error back
    ///
    /// Object keys keep their declaration or insertion order.
    pub fn try_json<T: Serialize + ?Sized>(value: &T) -> LogResult<Self> {
        Ok(Arg::from(serde_json::to_value(value)?))
    }

    /// Text written to the sinks for this argument
    pub fn render(&self) -> String {
        match self {
            Arg::Text(text) => text.clone(),
            Arg::Structured(value) => value.to_string(),
        }
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Text(text) => f.write_str(text),
            Arg::Structured(value) => write!(f, "{}", value),
        }
    }
}

/// Render every argument and join them with a single space
pub fn join_args(args: &[Arg]) -> String {
    args.iter().map(Arg::render).collect::<Vec<_>>().join(" ")
}

impl From<Value> for Arg {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => Arg::Text(s),
            Value::Bool(b) => Arg::Text(b.to_string()),
            Value::Number(n) => Arg::Text(n.to_string()),
            other => Arg::Structured(other),
        }
    }
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Arg::Text(value.to_string())
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Arg::Text(value)
    }
}

impl From<&String> for Arg {
    fn from(value: &String) -> Self {
        Arg::Text(value.clone())
    }
}

macro_rules! impl_from_display {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Arg {
                fn from(value: $ty) -> Self {
                    Arg::Text(value.to_string())
                }
            }
        )*
    };
}

impl_from_display!(bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<f64> for Arg {
    fn from(value: f64) -> Self {
        Arg::Text(format_float(value))
    }
}

impl From<f32> for Arg {
    fn from(value: f32) -> Self {
        // f32 -> f64 widening would print 0.1f32 as 0.10000000149011612
        if value.is_finite() && value != 0.0 {
            Arg::Text(value.to_string())
        } else {
            Arg::Text(format_float(f64::from(value)))
        }
    }
}

/// `Infinity`, `-Infinity` and `0` for negative zero; everything else as `Display`
fn format_float(value: f64) -> String {
    if value == f64::INFINITY {
        "Infinity".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}
