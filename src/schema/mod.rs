//! Typed schema model
//!
//! Schemas are authored as a declarative document (conventionally JSON)
//! in a small subset of JSON Schema and parsed from the decoded value
//! tree into this typed form.

use crate::value::Value;

/// One node of the schema tree.
///
/// Recognized keywords: `type`, `enum`, `properties`, `required`,
/// `items`, and `additionalProperties`. Unrecognized keywords — and
/// recognized keywords carrying an unexpected shape — are silently
/// ignored, so newer schema documents keep loading on older binaries.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaNode {
    /// Declared `type`, kept verbatim. An unknown type name is reported
    /// during validation rather than at parse time so the error carries
    /// the path of the offending node.
    pub type_name: Option<String>,

    /// Allowed literal values (`enum`), compared by value equality.
    pub enum_values: Option<Vec<Value>>,

    /// Nested schemas per object key (`properties`), declaration order.
    pub properties: Vec<(String, SchemaNode)>,

    /// Keys that must be present (`required`), declaration order.
    pub required: Vec<String>,

    /// Schema applied to every sequence element (`items`).
    pub items: Option<Box<SchemaNode>>,

    /// `additionalProperties`: whether keys outside `properties` are
    /// tolerated on object nodes.
    pub additional_properties: bool,
}

impl Default for SchemaNode {
    #[inline]
    fn default() -> Self {
        Self {
            type_name: None,
            enum_values: None,
            properties: Vec::new(),
            required: Vec::new(),
            items: None,
            additional_properties: true,
        }
    }
}

impl SchemaNode {
    /// Parse a schema node from a decoded value tree.
    ///
    /// Never fails: a non-mapping input yields the permissive default
    /// node that matches everything.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let mut node = Self::default();
        let Value::Mapping(entries) = value else {
            return node;
        };

        for (keyword, entry) in entries {
            match keyword.as_str() {
                "type" => {
                    if let Value::String(name) = entry {
                        node.type_name = Some(name.clone());
                    }
                }
                "enum" => {
                    if let Value::Sequence(allowed) = entry {
                        node.enum_values = Some(allowed.clone());
                    }
                }
                "properties" => {
                    if let Value::Mapping(properties) = entry {
                        node.properties = properties
                            .iter()
                            .map(|(name, subschema)| (name.clone(), Self::from_value(subschema)))
                            .collect();
                    }
                }
                "required" => {
                    if let Value::Sequence(names) = entry {
                        node.required = names
                            .iter()
                            .filter_map(|name| match *name {
                                Value::String(ref name) => Some(name.clone()),
                                _ => None,
                            })
                            .collect();
                    }
                }
                "items" => {
                    node.items = Some(Box::new(Self::from_value(entry)));
                }
                "additionalProperties" => {
                    if let Value::Bool(allow) = entry {
                        node.additional_properties = *allow;
                    }
                }
                // Forward-compatible subset: anything else is ignored.
                _ => {}
            }
        }

        node
    }
}
