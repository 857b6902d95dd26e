//! Filter values and their literal form inside an expression.
//!
//! | Value | Literal |
//! |-------|---------|
//! | text | `"value"` (no escaping) |
//! | integer / float | decimal text, unquoted |
//! | boolean | `true` / `false` |
//! | list | `[a, b, c]`, each element formatted as a scalar |
//!
//! ```rust
//! use sieve_query::value::{FilterValue, Scalar};
//!
//! assert_eq!(Scalar::from("John").to_string(), "\"John\"");
//! assert_eq!(Scalar::from(1_000_000).to_string(), "1000000");
//! assert_eq!(FilterValue::from(vec![20, 30, 40]).to_string(), "[20, 30, 40]");
//! ```

use std::fmt::{self, Write};

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::error::{FilterError, FilterResult};

/// A single value operand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Float value.
    Float(f64),
    /// Text value.
    Text(String),
}

impl Scalar {
    /// Name of the value kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Bool(_) => "boolean",
            Self::Int(_) => "integer",
            Self::Float(_) => "float",
            Self::Text(_) => "text",
        }
    }

    /// Write the literal form of this value.
    pub fn write_literal(&self, buf: &mut String) {
        match self {
            Self::Text(s) => write_quoted(buf, s),
            Self::Bool(b) => buf.push_str(if *b { "true" } else { "false" }),
            Self::Int(i) => {
                let _ = write!(buf, "{}", i);
            }
            Self::Float(f) => write_float(buf, *f),
        }
    }

    /// Write this value as a quoted text literal whatever its kind.
    pub fn write_text_literal(&self, buf: &mut String) {
        match self {
            Self::Text(s) => write_quoted(buf, s),
            other => {
                buf.push('"');
                other.write_literal(buf);
                buf.push('"');
            }
        }
    }
}

#[inline]
fn write_quoted(buf: &mut String, s: &str) {
    buf.reserve(s.len() + 2);
    buf.push('"');
    buf.push_str(s);
    buf.push('"');
}

fn write_float(buf: &mut String, f: f64) {
    if f.is_nan() {
        buf.push_str("NaN");
    } else if f.is_infinite() {
        buf.push_str(if f > 0.0 { "Infinity" } else { "-Infinity" });
    } else if f == 0.0 {
        buf.push('0');
    } else {
        let _ = write!(buf, "{}", f);
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = String::new();
        self.write_literal(&mut buf);
        f.write_str(&buf)
    }
}

impl From<bool> for Scalar {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i8> for Scalar {
    fn from(v: i8) -> Self {
        Self::Int(v as i64)
    }
}

impl From<i16> for Scalar {
    fn from(v: i16) -> Self {
        Self::Int(v as i64)
    }
}

impl From<i32> for Scalar {
    fn from(v: i32) -> Self {
        Self::Int(v as i64)
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<u8> for Scalar {
    fn from(v: u8) -> Self {
        Self::Int(v as i64)
    }
}

impl From<u16> for Scalar {
    fn from(v: u16) -> Self {
        Self::Int(v as i64)
    }
}

impl From<u32> for Scalar {
    fn from(v: u32) -> Self {
        Self::Int(v as i64)
    }
}

impl From<f32> for Scalar {
    /// Keeps the shortest `f32` form, so `0.1f32` stays `0.1`.
    fn from(v: f32) -> Self {
        Self::Float(v.to_string().parse().unwrap_or(v as f64))
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<String> for Scalar {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<&String> for Scalar {
    fn from(v: &String) -> Self {
        Self::Text(v.clone())
    }
}

impl From<SmolStr> for Scalar {
    fn from(v: SmolStr) -> Self {
        Self::Text(v.to_string())
    }
}

impl TryFrom<serde_json::Value> for Scalar {
    type Error = FilterError;

    fn try_from(value: serde_json::Value) -> FilterResult<Self> {
        use serde_json::Value;

        match value {
            Value::Bool(b) => Ok(Self::Bool(b)),
            Value::String(s) => Ok(Self::Text(s)),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Ok(Self::Int(i)),
                None => n
                    .as_f64()
                    .map(Self::Float)
                    .ok_or_else(|| FilterError::type_mismatch("number", n)),
            },
            other => Err(FilterError::type_mismatch(
                "text, number or boolean",
                json_kind(&other),
            )),
        }
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;

    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "text",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// An operand: a scalar, or a flat list of scalars for the `in` family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    /// A single value.
    Scalar(Scalar),
    /// List of values.
    List(Vec<Scalar>),
}

impl FilterValue {
    /// Build a list value from anything iterable.
    pub fn list<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Scalar>,
    {
        Self::List(values.into_iter().map(Into::into).collect())
    }

    /// Check if this is a list value.
    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// Name of the value kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Scalar(s) => s.kind(),
            Self::List(_) => "list",
        }
    }

    /// Write the literal form of this value.
    ///
    /// With `force_text` every scalar is written as quoted text.
    pub fn write_literal(&self, buf: &mut String, force_text: bool) {
        let write_scalar = |s: &Scalar, buf: &mut String| {
            if force_text {
                s.write_text_literal(buf);
            } else {
                s.write_literal(buf);
            }
        };

        match self {
            Self::Scalar(s) => write_scalar(s, buf),
            Self::List(values) => {
                buf.push('[');
                for (i, v) in values.iter().enumerate() {
                    if i > 0 {
                        buf.push_str(", ");
                    }
                    write_scalar(v, buf);
                }
                buf.push(']');
            }
        }
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = String::new();
        self.write_literal(&mut buf, false);
        f.write_str(&buf)
    }
}

macro_rules! impl_from_scalar {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for FilterValue {
                fn from(v: $t) -> Self {
                    Self::Scalar(v.into())
                }
            }
        )*
    };
}

impl_from_scalar!(bool, i8, i16, i32, i64, u8, u16, u32, f32, f64, String, &str, &String, SmolStr);

impl From<Scalar> for FilterValue {
    fn from(v: Scalar) -> Self {
        Self::Scalar(v)
    }
}

impl<T: Into<Scalar>> From<Vec<T>> for FilterValue {
    fn from(v: Vec<T>) -> Self {
        Self::list(v)
    }
}

impl<T: Into<Scalar>, const N: usize> From<[T; N]> for FilterValue {
    fn from(v: [T; N]) -> Self {
        Self::list(v)
    }
}

impl TryFrom<serde_json::Value> for FilterValue {
    type Error = FilterError;

    fn try_from(value: serde_json::Value) -> FilterResult<Self> {
        match value {
            serde_json::Value::Array(items) => items
                .into_iter()
                .map(Scalar::try_from)
                .collect::<FilterResult<Vec<_>>>()
                .map(Self::List),
            other => Scalar::try_from(other).map(Self::Scalar),
        }
    }
}
