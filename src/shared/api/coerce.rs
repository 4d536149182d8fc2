//! Lenient deserialization for admin form payloads.
//!
//! The admin UI posts whatever the form inputs hold: numbers arrive as
//! numbers or strings, list fields as JSON arrays or junk, flags as anything
//! truthy. Handlers pick an entity default when the payload cannot be read
//! as the expected type instead of rejecting the request.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Integer field that tolerates numeric strings and falls back to a
/// handler-chosen default for anything unparseable. Decimal input is
/// truncated toward zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LenientInt(Option<i32>);

impl LenientInt {
    pub fn unwrap_or(self, default: i32) -> i32 {
        self.0.unwrap_or(default)
    }
}

impl From<i32> for LenientInt {
    fn from(value: i32) -> Self {
        LenientInt(Some(value))
    }
}

impl<'de> Deserialize<'de> for LenientInt {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(LenientInt(parse_int(&value)))
    }
}

fn parse_int(value: &Value) -> Option<i32> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
            .and_then(|i| i32::try_from(i).ok()),
        Value::String(s) => s.trim().parse::<f64>().ok().map(|f| f.trunc() as i32),
        _ => None,
    }
}

/// List field stored as a jsonb string array. Accepted only when the payload
/// already carries an array; any other shape stores an empty list. Scalar
/// elements are stringified, nested values dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LenientList(Vec<String>);

impl LenientList {
    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for LenientList {
    fn from(items: Vec<String>) -> Self {
        LenientList(items)
    }
}

impl<'de> Deserialize<'de> for LenientList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let items = match value {
            Value::Array(values) => values
                .into_iter()
                .filter_map(|v| match v {
                    Value::String(s) => Some(s),
                    Value::Number(n) => Some(n.to_string()),
                    Value::Bool(b) => Some(b.to_string()),
                    _ => None,
                })
                .collect(),
            _ => Vec::new(),
        };
        Ok(LenientList(items))
    }
}

/// Boolean flag following JSON truthiness: null, false, 0 and "" are false,
/// everything else is true. Missing fields default to false.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Truthy(bool);

impl Truthy {
    pub fn as_bool(self) -> bool {
        self.0
    }
}

impl From<bool> for Truthy {
    fn from(value: bool) -> Self {
        Truthy(value)
    }
}

impl<'de> Deserialize<'de> for Truthy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let truthy = match &value {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        };
        Ok(Truthy(truthy))
    }
}
