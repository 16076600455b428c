//! Core note types for jotter.
//!
//! A note has no fixed schema: it is whatever JSON object the client sent,
//! plus an `id` assigned by the store.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Name of the identifier field on every stored note.
pub const ID_FIELD: &str = "id";

/// Client-supplied note fields.
pub type Fields = Map<String, Value>;

/// A single note record.
///
/// Serializes as the underlying JSON object, so records read from disk are
/// passed back to clients verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Note(Fields);

impl Note {
    /// Build a note from client fields and an identifier.
    ///
    /// The identifier always wins over an `id` the client supplied; field
    /// order is otherwise preserved.
    #[must_use]
    pub fn new(mut fields: Fields, id: String) -> Self {
        fields.insert(ID_FIELD.to_string(), Value::String(id));
        Self(fields)
    }

    /// The note's identifier, if it carries a string `id`.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.0.get(ID_FIELD).and_then(Value::as_str)
    }

    /// Check if this note's identifier equals `id`.
    #[must_use]
    pub fn has_id(&self, id: &str) -> bool {
        self.id() == Some(id)
    }
}

/// Generate a fresh note identifier (random 128-bit UUID, hyphenated).
#[must_use]
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}
