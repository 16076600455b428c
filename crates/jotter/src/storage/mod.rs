//! Storage layer for jotter.
//!
//! This module persists the note collection in a single JSON file. Every
//! operation re-reads the file; nothing is cached between calls.

pub mod collection;

use std::path::{Path, PathBuf};

use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::note::{Fields, Note};

/// File-backed note store.
///
/// Provides:
/// - Listing the collection exactly as stored
/// - Appending a note under a freshly generated identifier
/// - Removing notes by identifier
///
/// Mutations hold a per-store lock across the whole read-modify-write cycle,
/// so concurrent creates and deletes never overwrite each other. Writes go
/// to a sibling temporary file that is renamed over the store file.
#[derive(Debug)]
pub struct NoteStore {
    /// Path to the JSON collection file.
    path: PathBuf,
    /// Serializes mutations of the file.
    write_lock: Mutex<()>,
}

impl NoteStore {
    /// Create a store backed by the file at `path`.
    ///
    /// No I/O happens here; the file is expected to exist by the first call.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Get the path to the store file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check whether the store file exists.
    pub async fn exists(&self) -> bool {
        tokio::fs::try_exists(&self.path).await.unwrap_or(false)
    }

    /// Create an empty collection file.
    ///
    /// Creates parent directories as needed. An existing file is left alone
    /// unless `overwrite` is set. Returns `true` if a file was written.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be created.
    pub async fn init(&self, overwrite: bool) -> Result<bool> {
        let _guard = self.write_lock.lock().await;

        if !overwrite && self.exists().await {
            debug!("Note store already exists at {}", self.path.display());
            return Ok(false);
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|source| Error::DirectoryCreate {
                        path: parent.to_path_buf(),
                        source,
                    })?;
            }
        }

        self.write_bytes(collection::EMPTY_COLLECTION.as_bytes()).await?;
        info!("Initialized empty note store at {}", self.path.display());
        Ok(true)
    }

    /// Read every note in the collection, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, unreadable, or malformed.
    pub async fn list(&self) -> Result<Vec<Note>> {
        self.read().await
    }

    /// Append a note built from `fields` and return it with its new `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be read or written back.
    pub async fn append(&self, fields: Fields) -> Result<Note> {
        let _guard = self.write_lock.lock().await;

        let mut notes = self.read().await?;
        let note = collection::push_note(&mut notes, fields);
        self.write(&notes).await?;

        debug!(
            "Appended note {} ({} total)",
            note.id().unwrap_or_default(),
            notes.len()
        );
        Ok(note)
    }

    /// Remove every note whose `id` equals `id`.
    ///
    /// Returns the number of notes removed; an unknown id removes nothing and
    /// is not an error. The file is rewritten either way.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be read or written back.
    pub async fn remove(&self, id: &str) -> Result<usize> {
        let _guard = self.write_lock.lock().await;

        let mut notes = self.read().await?;
        let removed = collection::remove_by_id(&mut notes, id);
        self.write(&notes).await?;

        if removed == 0 {
            debug!("No note with id {} to remove", id);
        } else {
            debug!("Removed {} note(s) with id {}", removed, id);
        }
        Ok(removed)
    }

    async fn read(&self) -> Result<Vec<Note>> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| Error::storage_read(&self.path, source))?;
        collection::decode(&self.path, &bytes)
    }

    async fn write(&self, notes: &[Note]) -> Result<()> {
        let bytes = collection::encode(notes)?;
        self.write_bytes(&bytes).await
    }

    /// Replace the store file with `bytes` via a sibling temporary file.
    ///
    /// The temporary file is removed again if either step fails.
    async fn write_bytes(&self, bytes: &[u8]) -> Result<()> {
        let tmp_path = self.temp_path();

        let result = match tokio::fs::write(&tmp_path, bytes).await {
            Ok(()) => tokio::fs::rename(&tmp_path, &self.path)
                .await
                .map_err(|source| Error::storage_write(&self.path, source)),
            Err(source) => Err(Error::storage_write(&tmp_path, source)),
        };

        if result.is_err() {
            discard_temp(&tmp_path).await;
        }
        result
    }

    /// Sibling path used for atomic replacement of the store file.
    fn temp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map_or_else(|| "notes".into(), |name| name.to_string_lossy());
        self.path
            .with_file_name(format!(".{file_name}.{}.tmp", Uuid::new_v4()))
    }
}

/// Best-effort removal of a leftover temporary file.
async fn discard_temp(tmp_path: &Path) {
    match tokio::fs::remove_file(tmp_path).await {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => warn!(
            "Failed to remove temporary file {}: {}",
            tmp_path.display(),
            e
        ),
    }
}
