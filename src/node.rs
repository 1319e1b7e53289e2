// Strongly-typed schema tree. No serde_json::Value here.

/// Wire-level type of a schema node. Container payloads live on the variant,
/// so an object always carries a property list and only arrays carry an
/// element node.
#[derive(Debug, Clone, PartialEq)]
pub enum Ty {
    Null,
    Bool,
    Number,
    String {
        /// Allowed literal values; empty means unconstrained.
        enum_: Vec<String>,
    },
    Array {
        /// Element shape. `None` when derived from an empty source array:
        /// the element type is unknown and consumers must tolerate that.
        item: Option<Box<SchemaNode>>,
    },
    Object {
        /// Ordered children; names are unique within one list.
        properties: Vec<SchemaNode>,
    },
}

/// One node of the schema tree.
///
/// `name` is unique among siblings and conventionally `root` at the top.
/// `required` is interpreted by the node's *parent* at serialization time.
/// Nodes are immutable value trees: edits replace whole nodes by name,
/// never patch them in place.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaNode {
    pub name: String,
    pub ty: Ty,
    pub description: Option<String>,
    pub required: bool,
}

impl Ty {
    pub fn label(&self) -> &'static str {
        match self {
            Ty::Null => "null",
            Ty::Bool => "boolean",
            Ty::Number => "number",
            Ty::String { .. } => "string",
            Ty::Array { .. } => "array",
            Ty::Object { .. } => "object",
        }
    }

    /// Inverse of [`Ty::label`] for freshly created nodes; containers start
    /// empty. Anything outside the closed label set is rejected.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "null" => Some(Ty::Null),
            "boolean" => Some(Ty::Bool),
            "number" => Some(Ty::Number),
            "string" => Some(Ty::String { enum_: Vec::new() }),
            "array" => Some(Ty::Array { item: None }),
            "object" => Some(Ty::Object { properties: Vec::new() }),
            _ => None,
        }
    }
}

impl SchemaNode {
    pub fn new(name: impl Into<String>, ty: Ty) -> Self {
        Self {
            name: name.into(),
            ty,
            description: None,
            required: false,
        }
    }

    /// Session root: an empty object named `root`. Imports replace it
    /// wholesale; edits rebuild it through the mutator.
    pub fn root() -> Self {
        Self::new("root", Ty::Object { properties: Vec::new() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_is_an_empty_object() {
        let root = SchemaNode::root();
        assert_eq!(root.name, "root");
        assert_eq!(root.ty, Ty::Object { properties: Vec::new() });
        assert!(!root.required);
        assert!(root.description.is_none());
    }

    #[test]
    fn labels_round_trip_over_the_closed_set() {
        for label in ["null", "boolean", "number", "string", "array", "object"] {
            let ty = Ty::from_label(label).expect("known label");
            assert_eq!(ty.label(), label);
        }
        assert!(Ty::from_label("integer").is_none());
        assert!(Ty::from_label("").is_none());
    }
}
