//! Canonical JSON Schema emission.
//!
//! Deterministic by construction: entries are inserted in declaration order
//! and the `preserve_order` map keeps iteration faithful to insertion, so
//! the same tree always renders to the same bytes.
//!
//! Known asymmetry with the importer, kept deliberately: `enum` is captured
//! on import but never emitted here.

use serde_json::{Map, Value};

use crate::node::{SchemaNode, Ty};

/// Render the whole tree as two-space-indented JSON Schema text.
pub fn render(root: &SchemaNode) -> String {
    serde_json::to_string_pretty(&schema_value(root)).unwrap()
}

/// Top-level schema document for `root`'s children.
pub fn schema_value(root: &SchemaNode) -> Value {
    let children: &[SchemaNode] = match &root.ty {
        Ty::Object { properties } => properties,
        _ => &[],
    };
    let (properties, required) = collect(children);

    let mut out = Map::new();
    out.insert("type".into(), Value::from("object"));
    out.insert("properties".into(), Value::Object(properties));
    if !required.is_empty() {
        out.insert("required".into(), names_array(required));
    }
    Value::Object(out)
}

/// One `properties` map plus the containing object's `required` names, in
/// declaration order (never sorted).
fn collect(children: &[SchemaNode]) -> (Map<String, Value>, Vec<String>) {
    let mut properties = Map::new();
    let mut required = Vec::new();

    for child in children {
        let mut entry = Map::new();
        entry.insert("type".into(), Value::from(child.ty.label()));
        if let Some(text) = &child.description {
            entry.insert("description".into(), Value::from(text.clone()));
        }
        if child.required {
            required.push(child.name.clone());
        }

        match &child.ty {
            Ty::Object { properties: nested } => {
                let (nested_props, nested_required) = collect(nested);
                entry.insert("properties".into(), Value::Object(nested_props));
                if !nested_required.is_empty() {
                    entry.insert("required".into(), names_array(nested_required));
                }
            }
            Ty::Array { item: Some(item) } => {
                let mut items = Map::new();
                items.insert("type".into(), Value::from(item.ty.label()));
                if let Ty::Object { properties: nested } = &item.ty {
                    let (nested_props, nested_required) = collect(nested);
                    items.insert("properties".into(), Value::Object(nested_props));
                    if !nested_required.is_empty() {
                        items.insert("required".into(), names_array(nested_required));
                    }
                }
                entry.insert("items".into(), Value::Object(items));
            }
            // element type unknown (empty source array): no items key at all
            Ty::Array { item: None } => {}
            _ => {}
        }

        properties.insert(child.name.clone(), Value::Object(entry));
    }

    (properties, required)
}

fn names_array(names: Vec<String>) -> Value {
    Value::Array(names.into_iter().map(Value::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::{from_json_value, import_json_schema};
    use serde_json::json;

    fn string_node(name: &str, required: bool) -> SchemaNode {
        let mut node = SchemaNode::new(name, Ty::String { enum_: Vec::new() });
        node.required = required;
        node
    }

    fn object_root(children: Vec<SchemaNode>) -> SchemaNode {
        SchemaNode::new("root", Ty::Object { properties: children })
    }

    #[test]
    fn required_keeps_declaration_order() {
        let root = object_root(vec![string_node("b", true), string_node("a", true)]);
        let value = schema_value(&root);
        assert_eq!(value["required"], json!(["b", "a"]));
    }

    #[test]
    fn properties_keep_declaration_order_in_the_text() {
        let root = object_root(vec![string_node("b", false), string_node("a", false)]);
        let text = render(&root);
        assert!(text.find("\"b\"").unwrap() < text.find("\"a\"").unwrap());
        // byte-identical on repeat
        assert_eq!(text, render(&root));
    }

    #[test]
    fn nested_required_lands_on_the_containing_object() {
        let user = SchemaNode::new(
            "user",
            Ty::Object { properties: vec![string_node("name", true)] },
        );
        let value = schema_value(&object_root(vec![user]));
        assert_eq!(value["properties"]["user"]["required"], json!(["name"]));
        assert!(value.get("required").is_none());
    }

    #[test]
    fn array_items_recurse_only_into_objects() {
        let root = from_json_value(&json!({"tags": [{"label": "x", "n": 1}]}), "root");
        let value = schema_value(&root);
        let items = &value["properties"]["tags"]["items"];
        assert_eq!(items["type"], "object");
        assert_eq!(items["properties"]["label"]["type"], "string");
        assert_eq!(items["properties"]["n"]["type"], "number");

        // scalar elements stop at {type}
        let root = from_json_value(&json!({"ids": [1, 2]}), "root");
        let value = schema_value(&root);
        assert_eq!(value["properties"]["ids"]["items"], json!({"type": "number"}));
    }

    #[test]
    fn unknown_element_type_emits_no_items_key() {
        let root = from_json_value(&json!({"empty": []}), "root");
        let value = schema_value(&root);
        assert_eq!(value["properties"]["empty"], json!({"type": "array"}));
        // and rendering the tree does not fail
        let _ = render(&root);
    }

    #[test]
    fn enum_is_not_emitted() {
        let mut color = string_node("color", false);
        color.ty = Ty::String { enum_: vec!["red".into(), "blue".into()] };
        let value = schema_value(&object_root(vec![color]));
        assert_eq!(value["properties"]["color"], json!({"type": "string"}));
    }

    #[test]
    fn description_is_emitted_when_present_even_if_empty() {
        let mut a = string_node("a", false);
        a.description = Some(String::new());
        let b = string_node("b", false);
        let value = schema_value(&object_root(vec![a, b]));
        assert_eq!(value["properties"]["a"]["description"], json!(""));
        assert!(value["properties"]["b"].get("description").is_none());
    }

    #[test]
    fn leaf_root_renders_an_empty_document() {
        let root = SchemaNode::new("root", Ty::Number);
        let value = schema_value(&root);
        assert_eq!(value, json!({"type": "object", "properties": {}}));
    }

    #[test]
    fn render_reimport_preserves_structure_but_not_required() {
        let root = object_root(vec![
            string_node("a", true),
            SchemaNode::new("b", Ty::Number),
        ]);
        let first = render(&root);
        let reimported = import_json_schema(&first).unwrap();
        let second = render(&reimported);

        let v1: Value = serde_json::from_str(&first).unwrap();
        let v2: Value = serde_json::from_str(&second).unwrap();
        // property structure and types survive the trip
        assert_eq!(v1["properties"], v2["properties"]);
        // requiredness does not: the importer reads a node's own list, and
        // the emitter writes the parent's
        assert_eq!(v1["required"], json!(["a"]));
        assert!(v2.get("required").is_none());
    }
}
