//! `jotter` - A minimal note-taking backend
//!
//! This library provides the note store, which persists notes in a single
//! JSON file, and the HTTP layer that exposes it as a small REST API next to
//! the static web app.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod note;
pub mod server;
pub mod storage;

pub use api::AppState;
pub use config::Config;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use note::Note;
pub use storage::NoteStore;
