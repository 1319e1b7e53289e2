//! Importers: example JSON and external JSON Schema, both into the internal
//! tree.
//!
//! The two translations are independent, pure, and total over syntactically
//! valid input. Parsing is all-or-nothing: a syntax error yields
//! [`ParseError`] and no tree, so the caller's previous root stays in place.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ParseError;
use crate::node::{SchemaNode, Ty};

/// Deserialize with JSON-path context in the error.
pub fn parse_json<T: DeserializeOwned>(src: &str) -> Result<T, ParseError> {
    let de = &mut serde_json::Deserializer::from_str(src);
    serde_path_to_error::deserialize::<_, T>(de).map_err(|err| ParseError {
        path: err.path().to_string(),
        source: err.into_inner(),
    })
}

/// Derive a schema tree from an example JSON document.
pub fn import_json(text: &str) -> Result<SchemaNode, ParseError> {
    let value: Value = parse_json(text)?;
    Ok(from_json_value(&value, "root"))
}

/// Read an existing JSON Schema document back into the internal tree.
pub fn import_json_schema(text: &str) -> Result<SchemaNode, ParseError> {
    let value: Value = parse_json(text)?;
    Ok(from_json_schema(&value, "root"))
}

/// Infer a node from one example value. Requiredness is never inferred.
///
/// Arrays take their element shape from the first element only; an empty
/// array leaves the element unknown. Objects recurse in document key order
/// (the parser already resolved duplicate keys last-write-wins).
pub fn from_json_value(value: &Value, name: &str) -> SchemaNode {
    let ty = match value {
        Value::Null => Ty::Null,
        Value::Bool(_) => Ty::Bool,
        Value::Number(_) => Ty::Number,
        Value::String(_) => Ty::String { enum_: Vec::new() },
        Value::Array(elements) => Ty::Array {
            item: elements
                .first()
                .map(|first| Box::new(from_json_value(first, "items"))),
        },
        Value::Object(map) => Ty::Object {
            properties: map
                .iter()
                .map(|(key, child)| from_json_value(child, key))
                .collect(),
        },
    };
    SchemaNode::new(name, ty)
}

/// Translate one external schema object into a node named `name`.
///
/// `type` is taken at face value; a missing or unrecognized label lands on
/// `null`, the same sink the raw-JSON importer uses for undefined-ish input.
/// A node is required when its *own* schema object's `required` array lists
/// its *own* name. Standard JSON Schema would consult the parent's list
/// instead; this importer deliberately does not.
pub fn from_json_schema(schema: &Value, name: &str) -> SchemaNode {
    let ty = match schema.get("type").and_then(Value::as_str) {
        Some("object") => Ty::Object {
            properties: schema
                .get("properties")
                .and_then(Value::as_object)
                .map(|props| {
                    props
                        .iter()
                        .map(|(key, child)| from_json_schema(child, key))
                        .collect()
                })
                .unwrap_or_default(),
        },
        Some("array") => Ty::Array {
            item: schema
                .get("items")
                .map(|items| Box::new(from_json_schema(items, "items"))),
        },
        Some("string") => Ty::String {
            // ordered, verbatim; non-string entries are dropped
            enum_: schema
                .get("enum")
                .and_then(Value::as_array)
                .map(|xs| {
                    xs.iter()
                        .filter_map(Value::as_str)
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
        },
        Some("number") => Ty::Number,
        Some("boolean") => Ty::Bool,
        _ => Ty::Null,
    };

    let required = schema
        .get("required")
        .and_then(Value::as_array)
        .is_some_and(|names| names.iter().any(|n| n.as_str() == Some(name)));

    SchemaNode {
        name: name.to_string(),
        ty,
        description: schema
            .get("description")
            .and_then(Value::as_str)
            .map(str::to_string),
        required,
    }
}
