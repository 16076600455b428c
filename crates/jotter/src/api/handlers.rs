//! Request handlers for the notes API.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use tracing::info;

use super::error::ApiError;
use super::extract::NoteFields;
use super::AppState;
use crate::note::Note;

/// Acknowledgment returned by every delete, matched or not.
pub const DELETE_MESSAGE: &str = "Note deleted successfully!";

/// Body of a delete response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteResponse {
    /// Fixed acknowledgment text.
    pub message: &'static str,
}

impl Default for DeleteResponse {
    fn default() -> Self {
        Self {
            message: DELETE_MESSAGE,
        }
    }
}

/// `GET /api/notes`
pub async fn list_notes(State(state): State<AppState>) -> Result<Json<Vec<Note>>, ApiError> {
    let notes = state.store.list().await?;
    Ok(Json(notes))
}

/// `POST /api/notes`, with a JSON or urlencoded form body.
pub async fn create_note(
    State(state): State<AppState>,
    NoteFields(fields): NoteFields,
) -> Result<Json<Note>, ApiError> {
    let note = state.store.append(fields).await?;
    info!(id = note.id().unwrap_or_default(), "note created");
    Ok(Json(note))
}

/// `DELETE /api/notes/:id`
pub async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let removed = state.store.remove(&id).await?;
    info!(id = %id, removed, "note delete requested");
    Ok(Json(DeleteResponse::default()))
}
