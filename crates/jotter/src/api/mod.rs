//! REST API for notes.
//!
//! | Method | Path             | Response                                   |
//! |--------|------------------|--------------------------------------------|
//! | GET    | `/api/notes`     | every stored note                          |
//! | POST   | `/api/notes`     | the created note, with its new `id`        |
//! | DELETE | `/api/notes/:id` | `{"message":"Note deleted successfully!"}` |
//!
//! `POST` bodies may be JSON or `application/x-www-form-urlencoded`.
//! Storage failures surface as `500` responses (see [`ApiError`]).

mod error;
mod extract;
mod handlers;

use std::sync::Arc;

use axum::routing::{delete, get};
use axum::Router;

use crate::storage::NoteStore;

pub use error::{ApiError, INTERNAL_ERROR_MESSAGE};
pub use handlers::{DeleteResponse, DELETE_MESSAGE};

/// Shared state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The note store all requests go through.
    pub store: Arc<NoteStore>,
}

impl AppState {
    /// Wrap a store for sharing across requests.
    #[must_use]
    pub fn new(store: NoteStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

/// Build the `/api` router.
#[must_use]
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/notes",
            get(handlers::list_notes).post(handlers::create_note),
        )
        .route("/api/notes/:id", delete(handlers::delete_note))
        .with_state(state)
}
