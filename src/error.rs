//! Error types for the schema-builder core.
//!
//! Only malformed input text is an error. Unresolvable navigation paths and
//! updates against non-container nodes are silent no-ops by contract, so
//! nothing here models them.

use thiserror::Error;

/// Malformed input text handed to either importer.
///
/// Import is all-or-nothing: on a parse failure the caller's previously held
/// tree stays in place.
#[derive(Error, Debug)]
#[error("invalid JSON at {path}: {source}")]
pub struct ParseError {
    /// JSON path of the failing token, as reported by the deserializer.
    pub path: String,
    #[source]
    pub source: serde_json::Error,
}
