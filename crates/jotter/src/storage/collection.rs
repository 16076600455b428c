//! On-disk representation of the note collection.
//!
//! The store file is a single pretty-printed JSON array of note objects.
//! These helpers are pure; all file I/O lives in [`super::NoteStore`].

use std::path::Path;

use crate::error::{Error, Result};
use crate::note::{generate_id, Fields, Note};

/// Contents of a freshly initialized store file.
pub const EMPTY_COLLECTION: &str = "[]";

/// Parse the raw contents of the store file at `path`.
///
/// # Errors
///
/// Returns [`Error::StorageParse`] if the bytes are not a JSON array of objects.
pub fn decode(path: &Path, bytes: &[u8]) -> Result<Vec<Note>> {
    serde_json::from_slice(bytes).map_err(|source| Error::storage_parse(path, source))
}

/// Serialize the collection with two-space indentation.
///
/// # Errors
///
/// Returns an error if a note cannot be serialized.
pub fn encode(notes: &[Note]) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(notes)?)
}

/// Append a note built from `fields` under a freshly generated identifier.
///
/// The identifier is regenerated until it collides with no existing note.
pub fn push_note(notes: &mut Vec<Note>, fields: Fields) -> Note {
    let mut id = generate_id();
    while notes.iter().any(|note| note.has_id(&id)) {
        id = generate_id();
    }

    let note = Note::new(fields, id);
    notes.push(note.clone());
    note
}

/// Drop every note whose identifier equals `id`, keeping the others in order.
///
/// Returns the number of notes removed.
pub fn remove_by_id(notes: &mut Vec<Note>, id: &str) -> usize {
    let before = notes.len();
    notes.retain(|note| !note.has_id(id));
    before - notes.len()
}
