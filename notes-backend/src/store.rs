//! NoteStore — one-file-per-note storage in a single directory.
//!
//! The directory *is* the persistence format: each note is a plain UTF-8
//! file whose filename is the note name. Controllers go through the public
//! methods here and never touch the filesystem directly, so the engine
//! could be swapped (e.g. for a key-value store) without touching the HTTP
//! layer.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// A stored note: the filename and its full text content.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Note {
    pub name: String,
    pub text: String,
}

#[derive(Debug, Error)]
pub enum StoreError {
    /// Name is empty, `.`, or contains a path separator or `..` sequence.
    #[error("invalid note name")]
    InvalidName,
    #[error("note not found")]
    NotFound,
    #[error("note already exists")]
    AlreadyExists,
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Reject names that could escape the storage directory once joined.
///
/// The original service joined names onto the directory unsanitized; this
/// check is the deliberate hardening fix over that behavior.
fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && !name.contains('/')
        && !name.contains('\\')
        && !name.contains("..")
}

pub struct NoteStore {
    storage_dir: PathBuf,
}

impl NoteStore {
    /// Open the store, creating the storage directory recursively if it
    /// does not exist yet. Idempotent.
    pub fn open(storage_dir: PathBuf) -> io::Result<Self> {
        fs::create_dir_all(&storage_dir)?;
        Ok(Self { storage_dir })
    }

    pub fn storage_dir(&self) -> &Path {
        &self.storage_dir
    }

    /// Resolve a note name to its path inside the storage directory.
    fn note_path(&self, name: &str) -> Result<PathBuf, StoreError> {
        if !is_valid_name(name) {
            return Err(StoreError::InvalidName);
        }
        Ok(self.storage_dir.join(name))
    }

    /// Read a note's full text. `NotFound` if it does not exist.
    pub fn get(&self, name: &str) -> Result<String, StoreError> {
        let path = self.note_path(name)?;
        if !path.exists() {
            return Err(StoreError::NotFound);
        }
        Ok(fs::read_to_string(&path)?)
    }

    /// Overwrite an existing note's contents. `NotFound` if it does not
    /// exist. The existence check and the write are two separate steps —
    /// concurrent requests on the same name interleave arbitrarily
    /// (last write wins, no isolation).
    pub fn put(&self, name: &str, text: &str) -> Result<(), StoreError> {
        let path = self.note_path(name)?;
        if !path.exists() {
            return Err(StoreError::NotFound);
        }
        fs::write(&path, text)?;
        Ok(())
    }

    /// Remove a note. `NotFound` if it does not exist.
    pub fn delete(&self, name: &str) -> Result<(), StoreError> {
        let path = self.note_path(name)?;
        if !path.exists() {
            return Err(StoreError::NotFound);
        }
        fs::remove_file(&path)?;
        Ok(())
    }

    /// Enumerate every note in the storage directory and read its full
    /// contents. Ordering is whatever the directory enumeration yields —
    /// not guaranteed stable or sorted. Cost is linear in total stored
    /// bytes per call.
    pub fn list(&self) -> Result<Vec<Note>, StoreError> {
        let mut notes = Vec::new();
        for entry in fs::read_dir(&self.storage_dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().to_string();
            let text = fs::read_to_string(entry.path())?;
            notes.push(Note { name, text });
        }
        Ok(notes)
    }

    /// Create a new note. `AlreadyExists` if an entry with that name is
    /// already present — the first writer's text is kept.
    pub fn create_if_absent(&self, name: &str, text: &str) -> Result<(), StoreError> {
        let path = self.note_path(name)?;
        if path.exists() {
            return Err(StoreError::AlreadyExists);
        }
        fs::write(&path, text)?;
        Ok(())
    }
}
