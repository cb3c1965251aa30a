//! Field access helpers for loosely typed API payloads.
//!
//! Upstream fields may be absent, `null`, `false`, `0`, `""` or a real value.
//! These helpers give each of those states an explicit meaning instead of
//! relying on ad-hoc checks at every call site.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};

use crate::html::strip_html;

/// Leading numeric prefix accepted when converting text to a number
static NUMERIC_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(\d+(\.\d*)?|\.\d+)([eE][+-]?\d+)?")
        .expect("Failed to compile numeric prefix regex - this is a bug")
});

/// Whether a value counts as "set": `null`, `false`, `0`, `0.0`, `""`, `"0"`
/// and empty arrays/objects do not.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty() && s != "0",
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

/// The value under `key` if the key exists and is not `null`.
pub(crate) fn present<'a>(payload: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    payload.get(key).filter(|v| !v.is_null())
}

/// The value under `key` if it is truthy.
pub(crate) fn truthy<'a>(payload: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    payload.get(key).filter(|v| is_truthy(v))
}

/// Text form of a scalar value. Booleans render as `"1"`/`""`; arrays,
/// objects and `null` have no text form.
pub(crate) fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(true) => Some("1".to_string()),
        Value::Bool(false) => Some(String::new()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Sanitized text of `key` when it is truthy.
pub(crate) fn truthy_text(payload: &Map<String, Value>, key: &str) -> Option<String> {
    truthy(payload, key)
        .and_then(scalar_text)
        .map(|text| strip_html(&text))
}

/// Sanitized text of `key` when it is present, even if falsy.
pub(crate) fn present_text(payload: &Map<String, Value>, key: &str) -> Option<String> {
    present(payload, key)
        .and_then(scalar_text)
        .map(|text| strip_html(&text))
}

/// Converts text to a number the lenient way: leading whitespace is skipped,
/// the longest numeric prefix is used, and text without one is `0`.
pub(crate) fn lenient_number(text: &str) -> f64 {
    NUMERIC_PREFIX
        .find(text.trim_start())
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// Formats `value` with exactly `decimals` fractional digits, rounding half
/// away from zero and using `.` as the separator.
///
/// The scaled value is first cut to 15 significant digits so that binary
/// representation error does not decide ties: `0.285` rounds to `0.29`.
pub(crate) fn format_decimal(value: f64, decimals: usize) -> String {
    let factor = 10f64.powi(decimals as i32);
    let scaled = value * factor;
    let scaled = format!("{:.14e}", scaled).parse::<f64>().unwrap_or(scaled);
    let rounded = scaled.round() / factor;
    // Avoid "-0.000"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{:.*}", decimals, rounded)
}
