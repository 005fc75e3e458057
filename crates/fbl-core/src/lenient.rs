//! Lenient deserializers for the feedback API's loosely typed JSON.
//!
//! The API emits booleans as `true`, `1` or `"1"` and ids as numbers or
//! numeric strings. Emptiness follows the API's own notion: `null`, `""`,
//! `"0"`, `0`, `false` and empty containers all count as empty.
//!
//! Every helper is meant to be paired with `#[serde(default)]` so a missing
//! key never reaches the deserializer.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Whether a JSON value is non-empty.
#[must_use]
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty() && s != "0",
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Read any JSON value as a boolean using [`truthy`].
///
/// # Errors
///
/// Only fails when the input is not valid JSON.
pub fn bool_from_any<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
    let value = Option::<Value>::deserialize(d)?;
    Ok(value.as_ref().is_some_and(truthy))
}

/// Read a numeric id that may arrive as a number or a numeric string.
#[must_use]
pub fn id_from_value(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Optional id; unparseable values become `None`.
///
/// # Errors
///
/// Only fails when the input is not valid JSON.
pub fn opt_id_from_any<'de, D: Deserializer<'de>>(d: D) -> Result<Option<u64>, D::Error> {
    let value = Option::<Value>::deserialize(d)?;
    Ok(value.as_ref().and_then(id_from_value))
}

/// Required id; unparseable values become `0`.
///
/// # Errors
///
/// Only fails when the input is not valid JSON.
pub fn id_from_any<'de, D: Deserializer<'de>>(d: D) -> Result<u64, D::Error> {
    opt_id_from_any(d).map(Option::unwrap_or_default)
}

/// Render a scalar as text. Empty strings and `null` become `None`.
#[must_use]
pub fn text_from_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}

/// Optional free text that may arrive as any scalar.
///
/// # Errors
///
/// Only fails when the input is not valid JSON.
pub fn opt_text_from_any<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    let value = Option::<Value>::deserialize(d)?;
    Ok(value.as_ref().and_then(text_from_value))
}

/// Free text that may arrive as any scalar; `null` becomes an empty string.
///
/// # Errors
///
/// Only fails when the input is not valid JSON.
pub fn text_from_any<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    opt_text_from_any(d).map(Option::unwrap_or_default)
}

/// Optional marker value kept as text, `None` whenever it is empty by
/// [`truthy`]. Used for opaque ids such as survey ids.
///
/// # Errors
///
/// Only fails when the input is not valid JSON.
pub fn opt_truthy_text_from_any<'de, D: Deserializer<'de>>(
    d: D,
) -> Result<Option<String>, D::Error> {
    let value = Option::<Value>::deserialize(d)?;
    Ok(value
        .as_ref()
        .filter(|value| truthy(value))
        .and_then(text_from_value))
}
