//! Path-addressed navigation and persistent updates.
//!
//! A path is a sequence of segment names from the root down. The resolver's
//! paths include the root's own name as element 0; the mutator's paths start
//! below the root. Arrays consume a segment without reading it (callers pass
//! the literal `items` there by convention). Both walks are total: a segment
//! that resolves nowhere leaves the walk where it stands instead of failing.

use crate::node::{SchemaNode, Ty};

/// Child list the caller may edit at the node addressed by `path`
/// (`path[0]` is the root's own name; resolution walks the rest).
///
/// Objects expose their properties; arrays expose the properties of an
/// object-typed element. Anything else has nothing to edit, and neither do
/// unresolvable paths.
pub fn editable_children<'a>(root: &'a SchemaNode, path: &[String]) -> &'a [SchemaNode] {
    let mut current = root;
    for segment in path.iter().skip(1) {
        match &current.ty {
            Ty::Object { properties } => {
                if let Some(child) = properties.iter().find(|p| p.name == *segment) {
                    current = child;
                }
                // unknown name: stay put and keep walking
            }
            Ty::Array { item: Some(item) } => current = item,
            _ => {}
        }
    }

    match &current.ty {
        Ty::Object { properties } => properties,
        Ty::Array { item: Some(item) } => match &item.ty {
            Ty::Object { properties } => properties,
            _ => &[],
        },
        _ => &[],
    }
}

/// Rebuild `node` with the child list at `path` (root's own name excluded)
/// replaced by `new_children`, returning the new tree.
///
/// Exactly one branch is rebuilt per segment; every off-path subtree is
/// carried over unchanged. A path that does not address a real container
/// leaves the tree unchanged at that level — the update never fails.
pub fn replace_children(
    node: &SchemaNode,
    path: &[String],
    new_children: Vec<SchemaNode>,
) -> SchemaNode {
    let Some((segment, rest)) = path.split_first() else {
        return match &node.ty {
            Ty::Object { .. } => with_ty(node, Ty::Object { properties: new_children }),
            Ty::Array { item: Some(item) } if matches!(item.ty, Ty::Object { .. }) => {
                let element = with_ty(item, Ty::Object { properties: new_children });
                with_ty(node, Ty::Array { item: Some(Box::new(element)) })
            }
            // not an editable container: no-op
            _ => node.clone(),
        };
    };

    match &node.ty {
        Ty::Object { properties } => {
            let mut properties = properties.clone();
            if let Some(slot) = properties.iter_mut().find(|p| p.name == *segment) {
                let rebuilt = replace_children(slot, rest, new_children);
                *slot = rebuilt;
            }
            with_ty(node, Ty::Object { properties })
        }
        // arrays always descend into the element, whatever the segment says
        Ty::Array { item: Some(item) } => {
            let element = replace_children(item, rest, new_children);
            with_ty(node, Ty::Array { item: Some(Box::new(element)) })
        }
        _ => node.clone(),
    }
}

fn with_ty(node: &SchemaNode, ty: Ty) -> SchemaNode {
    SchemaNode {
        name: node.name.clone(),
        ty,
        description: node.description.clone(),
        required: node.required,
    }
}
