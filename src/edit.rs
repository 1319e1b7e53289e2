//! Child-list editing, the way an interactive caller drives it: read the
//! editable list at the current path, change it locally, rebuild the tree.

use indexmap::IndexSet;

use crate::node::{SchemaNode, Ty};
use crate::path::{editable_children, replace_children};

/// A freshly added property.
///
/// A new `array` property starts out holding a `string` element named
/// `item` (imported trees name the element `items`; hand-added ones keep
/// the historical singular).
pub fn new_property(name: impl Into<String>, ty: Ty, required: bool) -> SchemaNode {
    let ty = match ty {
        Ty::Array { item: None } => Ty::Array {
            item: Some(Box::new(SchemaNode::new(
                "item",
                Ty::String { enum_: Vec::new() },
            ))),
        },
        other => other,
    };
    let mut node = SchemaNode::new(name, ty);
    node.required = required;
    node
}

/// Replace the same-named entry in place or append at the end. Sibling names
/// stay unique under any sequence of these ops.
pub fn upsert(children: &mut Vec<SchemaNode>, node: SchemaNode) {
    match children.iter_mut().find(|c| c.name == node.name) {
        Some(slot) => *slot = node,
        None => children.push(node),
    }
}

/// Drop the entry named `name`; reports whether anything was removed.
pub fn remove(children: &mut Vec<SchemaNode>, name: &str) -> bool {
    let before = children.len();
    children.retain(|c| c.name != name);
    children.len() != before
}

/// Sibling-uniqueness invariant check.
pub fn names_are_unique(children: &[SchemaNode]) -> bool {
    let mut seen = IndexSet::with_capacity(children.len());
    children.iter().all(|c| seen.insert(c.name.as_str()))
}

/// Add (or replace) `node` under the node addressed by `path`
/// (`path[0]` is the root's own name), returning the new root.
pub fn add_at(root: &SchemaNode, path: &[String], node: SchemaNode) -> SchemaNode {
    let mut children = editable_children(root, path).to_vec();
    upsert(&mut children, node);
    replace_children(root, below_root(path), children)
}

/// Remove the child named `name` under the node addressed by `path`,
/// returning the new root.
pub fn remove_at(root: &SchemaNode, path: &[String], name: &str) -> SchemaNode {
    let mut children = editable_children(root, path).to_vec();
    remove(&mut children, name);
    replace_children(root, below_root(path), children)
}

fn below_root(path: &[String]) -> &[String] {
    path.get(1..).unwrap_or(&[])
}
