//! File-backed slot with atomic writes.

use crate::domain::Note;
use crate::store::storage::{NoteStorage, StorageError, StorageResult, decode, encode};
use std::io::{self, Write as IoWrite};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// Default slot name.
pub const DEFAULT_KEY: &str = "notes";

/// Stores the note list as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Creates storage for slot `key` inside `dir`.
    pub fn new(dir: impl AsRef<Path>, key: &str) -> Self {
        Self {
            path: dir.as_ref().join(format!("{key}.json")),
        }
    }

    /// Creates storage at an explicit file path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the slot file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl NoteStorage for JsonFileStorage {
    fn load(&self) -> StorageResult<Option<Vec<Note>>> {
        let raw = match std::fs::read(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no saved notes");
                return Ok(None);
            }
            Err(e) => return Err(self.io_error(e)),
        };

        if raw.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }

        let notes = decode(&raw, &self.path.display().to_string())?;
        debug!(path = %self.path.display(), count = notes.len(), "loaded notes");
        Ok(Some(notes))
    }

    fn save_all(&mut self, notes: &[Note]) -> StorageResult<()> {
        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        std::fs::create_dir_all(&parent).map_err(|e| self.io_error(e))?;

        let content = encode(notes)?;
        let mut temp = NamedTempFile::new_in(&parent).map_err(|e| self.io_error(e))?;
        temp.write_all(content.as_bytes())
            .map_err(|e| self.io_error(e))?;

        temp.persist(&self.path)
            .map_err(|e| StorageError::AtomicWrite {
                path: self.path.clone(),
                source: e.error,
            })?;

        debug!(path = %self.path.display(), count = notes.len(), "persisted notes");
        Ok(())
    }
}
