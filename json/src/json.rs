use crate::error::{JsonError, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;

pub fn loads<T: DeserializeOwned>(text: &str) -> Result<T> {
    Ok(serde_json::from_str(text)?)
}

// 上游返回的数值字段可能是number也可能是字符串
pub fn as_f64(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite())
}

/// Looks up a JSON pointer (`/a/0/b`) and coerces the value to f64.
pub fn get_f64(value: &Value, pointer: &str) -> Option<f64> {
    value.pointer(pointer).and_then(as_f64)
}

pub fn get_i64(value: &Value, pointer: &str) -> Option<i64> {
    match value.pointer(pointer)? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

pub fn get_str<'a>(value: &'a Value, pointer: &str) -> Option<&'a str> {
    value.pointer(pointer).and_then(Value::as_str)
}

pub fn get_array<'a>(value: &'a Value, pointer: &str) -> Option<&'a Vec<Value>> {
    value.pointer(pointer).and_then(Value::as_array)
}

pub fn require_f64(value: &Value, pointer: &str) -> Result<f64> {
    get_f64(value, pointer).ok_or_else(|| JsonError::missing(pointer))
}

pub fn require_array<'a>(value: &'a Value, pointer: &str) -> Result<&'a Vec<Value>> {
    get_array(value, pointer).ok_or_else(|| JsonError::missing(pointer))
}
