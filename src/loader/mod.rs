//! Format decoders
//!
//! Lower raw configuration text into the generic value tree. Each
//! decoder maps its native document model onto [`Value`] variants; the
//! validator never sees a format-specific type.

pub mod ini;

use crate::value::Value;
use anyhow::{Context as _, Result, anyhow};

/// File extensions accepted by the suite, sorted.
pub const SUPPORTED_FORMATS: [&str; 3] = [".ini", ".json", ".toml"];

/// Decode `text` according to the file extension (leading dot,
/// lowercase).
///
/// # Errors
///
/// Returns an error if:
/// - The extension is not one of [`SUPPORTED_FORMATS`]
/// - The text is not a well-formed document of that format
pub fn decode(extension: &str, text: &str) -> Result<Value> {
    match extension {
        ".json" => decode_json(text),
        ".toml" => decode_toml(text),
        ".ini" => ini::decode(text),
        other => Err(anyhow!("Unsupported format: {other}")),
    }
}

/// Decode a JSON document into the generic value tree.
///
/// # Errors
///
/// Returns an error if the text is not well-formed JSON.
pub fn decode_json(text: &str) -> Result<Value> {
    let parsed: serde_json::Value = serde_json::from_str(text).context("invalid JSON")?;
    Ok(from_json(parsed))
}

fn decode_toml(text: &str) -> Result<Value> {
    let parsed: toml::Table = toml::from_str(text).context("invalid TOML")?;
    Ok(from_toml(toml::Value::Table(parsed)))
}

fn from_json(value: serde_json::Value) -> Value {
    match value {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(flag) => Value::Bool(flag),
        serde_json::Value::Number(number) => {
            if let Some(integer) = number.as_i64() {
                Value::Int(integer)
            } else {
                // Out-of-range integers degrade to their float value.
                Value::Float(number.as_f64().unwrap_or(f64::NAN))
            }
        }
        serde_json::Value::String(text) => Value::String(text),
        serde_json::Value::Array(items) => {
            Value::Sequence(items.into_iter().map(from_json).collect())
        }
        serde_json::Value::Object(entries) => Value::Mapping(
            entries
                .into_iter()
                .map(|(key, value)| (key, from_json(value)))
                .collect(),
        ),
    }
}

fn from_toml(value: toml::Value) -> Value {
    match value {
        toml::Value::String(text) => Value::String(text),
        toml::Value::Integer(integer) => Value::Int(integer),
        toml::Value::Float(float) => Value::Float(float),
        toml::Value::Boolean(flag) => Value::Bool(flag),
        // No dedicated variant for datetimes; keep the textual form.
        toml::Value::Datetime(datetime) => Value::String(datetime.to_string()),
        toml::Value::Array(items) => Value::Sequence(items.into_iter().map(from_toml).collect()),
        toml::Value::Table(entries) => Value::Mapping(
            entries
                .into_iter()
                .map(|(key, value)| (key, from_toml(value)))
                .collect(),
        ),
    }
}
