//! Recursive structural validator
//!
//! Walks a decoded value and a schema node in lockstep, collecting
//! path-qualified error messages. Mismatches are data, not failures:
//! every finding is returned as a message, never raised.

use crate::schema::SchemaNode;
use crate::value::Value;

/// Outcome of classifying a value against a declared `type`.
enum TypeCheck {
    Ok,
    Mismatch,
    UnknownType,
}

/// Validate `value` against `schema`, returning every error found at or
/// below `path`.
///
/// A failed `type` check short-circuits the node: a wrong-typed value
/// cannot be meaningfully checked against `enum`, `properties`, or
/// `items`, and recursing anyway would bury the root cause in cascading
/// noise. The same applies when the schema declares a type name this
/// validator does not know.
#[must_use]
pub fn validate(value: &Value, schema: &SchemaNode, path: &str) -> Vec<String> {
    let mut errors = Vec::new();

    if let Some(type_name) = schema.type_name.as_deref() {
        match check_type(value, type_name) {
            TypeCheck::Ok => {}
            TypeCheck::UnknownType => {
                errors.push(format!("{path}: Unknown schema type '{type_name}'"));
                return errors;
            }
            TypeCheck::Mismatch => {
                errors.push(format!(
                    "{path}: Expected type '{type_name}' but received value {value}"
                ));
                return errors;
            }
        }
    }

    if let Some(allowed) = schema.enum_values.as_deref()
        && !allowed.contains(value)
    {
        errors.push(format!(
            "{path}: value {value} is not in allowed set {}",
            render_set(allowed)
        ));
    }

    match (schema.type_name.as_deref(), value) {
        (Some("object"), &Value::Mapping(ref entries)) => {
            validate_object(entries, schema, path, &mut errors);
        }
        (Some("array"), &Value::Sequence(ref items)) => {
            if let Some(item_schema) = schema.items.as_deref() {
                for (index, item) in items.iter().enumerate() {
                    errors.extend(validate(item, item_schema, &format!("{path}[{index}]")));
                }
            }
        }
        _ => {}
    }

    errors
}

/// Object checks: required keys, declared properties, then unexpected
/// keys when `additionalProperties` is false.
fn validate_object(
    entries: &[(String, Value)],
    schema: &SchemaNode,
    path: &str,
    errors: &mut Vec<String>,
) {
    let member = |key: &str| {
        entries
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value)
    };

    for name in &schema.required {
        if member(name).is_none() {
            errors.push(format!("{path}: missing required key '{name}'"));
        }
    }

    for (name, subschema) in &schema.properties {
        if let Some(value) = member(name) {
            errors.extend(validate(value, subschema, &format!("{path}.{name}")));
        }
    }

    if !schema.additional_properties {
        let mut unexpected: Vec<&str> = entries
            .iter()
            .map(|(name, _)| name.as_str())
            .filter(|key| !schema.properties.iter().any(|(name, _)| name == key))
            .collect();
        unexpected.sort_unstable();
        for key in unexpected {
            errors.push(format!("{path}: unexpected key '{key}'"));
        }
    }
}

/// Classify `value` against a declared type name.
///
/// Booleans are their own type: they never satisfy `number` or
/// `integer`, and a string never satisfies `array` even though both are
/// iterable in some source formats.
fn check_type(value: &Value, expected: &str) -> TypeCheck {
    let matches = match expected {
        "string" => matches!(*value, Value::String(_)),
        "number" => matches!(*value, Value::Int(_) | Value::Float(_)),
        "integer" => matches!(*value, Value::Int(_)),
        "boolean" => matches!(*value, Value::Bool(_)),
        "array" => matches!(*value, Value::Sequence(_)),
        "object" => matches!(*value, Value::Mapping(_)),
        "null" => matches!(*value, Value::Null),
        _ => return TypeCheck::UnknownType,
    };
    if matches {
        TypeCheck::Ok
    } else {
        TypeCheck::Mismatch
    }
}

/// Render an allowed set as `[v1, v2, ...]` for enum error messages.
fn render_set(values: &[Value]) -> String {
    let rendered: Vec<String> = values.iter().map(ToString::to_string).collect();
    format!("[{}]", rendered.join(", "))
}
