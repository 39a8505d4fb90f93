//! NoteStorage port, its error type, and the in-memory slot.

use crate::domain::Note;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing the persisted slot.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The slot holds data that is not a valid note array.
    #[error("corrupt note data in {location}: {source}")]
    Corrupt {
        location: String,
        #[source]
        source: serde_json::Error,
    },

    /// The notes could not be encoded.
    #[error("failed to encode notes: {0}")]
    Encode(#[source] serde_json::Error),

    /// An I/O error occurred.
    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The temp-file rename at the end of a write failed.
    #[error("atomic write failed for {path}: {source}")]
    AtomicWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StorageError {
    /// Returns true if the stored payload could not be parsed.
    pub fn is_corrupt(&self) -> bool {
        matches!(self, StorageError::Corrupt { .. })
    }
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// A single key-value slot holding the whole note list.
///
/// Implementations are written in full on every change; there are no partial
/// writes.
pub trait NoteStorage {
    /// Reads the slot. `Ok(None)` means nothing has been stored yet.
    fn load(&self) -> StorageResult<Option<Vec<Note>>>;

    /// Replaces the slot contents with `notes`.
    fn save_all(&mut self, notes: &[Note]) -> StorageResult<()>;
}

impl<S: NoteStorage + ?Sized> NoteStorage for &mut S {
    fn load(&self) -> StorageResult<Option<Vec<Note>>> {
        (**self).load()
    }

    fn save_all(&mut self, notes: &[Note]) -> StorageResult<()> {
        (**self).save_all(notes)
    }
}

/// Encodes notes as a compact JSON array.
pub fn encode(notes: &[Note]) -> StorageResult<String> {
    serde_json::to_string(notes).map_err(StorageError::Encode)
}

/// Decodes a JSON array of notes. `location` names the slot in errors.
///
/// Bytes that are not valid UTF-8 are reported as corrupt data.
pub fn decode(raw: impl AsRef<[u8]>, location: &str) -> StorageResult<Vec<Note>> {
    serde_json::from_slice(raw.as_ref()).map_err(|source| StorageError::Corrupt {
        location: location.to_string(),
        source,
    })
}

/// Storage backed by an in-memory string slot.
///
/// Holds exactly what a file or browser key would hold, so tests can seed
/// and inspect raw payloads.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    slot: Option<String>,
    writes: usize,
}

impl MemoryStorage {
    /// Creates an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a slot pre-filled with a raw payload.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            slot: Some(raw.into()),
            writes: 0,
        }
    }

    /// Returns the raw payload, if any.
    pub fn raw(&self) -> Option<&str> {
        self.slot.as_deref()
    }

    /// Returns how many times the slot has been written.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl NoteStorage for MemoryStorage {
    fn load(&self) -> StorageResult<Option<Vec<Note>>> {
        match self.slot.as_deref() {
            None => Ok(None),
            Some(raw) if raw.trim().is_empty() => Ok(None),
            Some(raw) => decode(raw, "memory").map(Some),
        }
    }

    fn save_all(&mut self, notes: &[Note]) -> StorageResult<()> {
        self.slot = Some(encode(notes)?);
        self.writes += 1;
        Ok(())
    }
}

/// Memory storage whose reads or writes can be made to fail with an I/O
/// error.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct FailingStorage {
    pub(crate) inner: MemoryStorage,
    pub(crate) fail_load: bool,
    pub(crate) fail_save: bool,
}

#[cfg(test)]
impl FailingStorage {
    pub(crate) fn unreadable() -> Self {
        Self {
            fail_load: true,
            ..Self::default()
        }
    }

    pub(crate) fn read_only() -> Self {
        Self {
            fail_save: true,
            ..Self::default()
        }
    }

    fn io_error(message: &str) -> StorageError {
        StorageError::Io {
            path: PathBuf::from("/unavailable/notes.json"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, message.to_string()),
        }
    }
}

#[cfg(test)]
impl NoteStorage for FailingStorage {
    fn load(&self) -> StorageResult<Option<Vec<Note>>> {
        if self.fail_load {
            return Err(Self::io_error("read refused"));
        }
        self.inner.load()
    }

    fn save_all(&mut self, notes: &[Note]) -> StorageResult<()> {
        if self.fail_save {
            return Err(Self::io_error("write refused"));
        }
        self.inner.save_all(notes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Color, NoteId, Task};
    use chrono::{DateTime, Utc};
    use pretty_assertions::assert_eq;

    fn test_datetime() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-01-15T10:30:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn sample_notes() -> Vec<Note> {
        vec![
            Note::builder("01HQ3K5M7NXJK4QZPW8V2R6T9Y".parse().unwrap(), test_datetime())
                .title("Plain")
                .content("one\ntwo")
                .color(Color::Pink)
                .build(),
            Note::builder(NoteId::new(), test_datetime())
                .title("List")
                .tasks(vec![Task::new("a"), Task::new("b")])
                .build(),
        ]
    }

    #[test]
    fn empty_slot_loads_as_none() {
        assert!(MemoryStorage::new().load().unwrap().is_none());
        assert!(MemoryStorage::with_raw("  ").load().unwrap().is_none());
    }

    #[test]
    fn save_then_load_roundtrips() {
        let notes = sample_notes();
        let mut storage = MemoryStorage::new();
        storage.save_all(&notes).unwrap();

        assert_eq!(storage.writes(), 1);
        assert_eq!(storage.load().unwrap().unwrap(), notes);
    }

    #[test]
    fn raw_payload_is_a_json_array() {
        let mut storage = MemoryStorage::new();
        storage.save_all(&sample_notes()).unwrap();

        let value: serde_json::Value = serde_json::from_str(storage.raw().unwrap()).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 2);
    }

    #[test]
    fn corrupt_payload_is_reported() {
        let storage = MemoryStorage::with_raw("{not json");
        let err = storage.load().unwrap_err();
        assert!(err.is_corrupt());
        assert!(err.to_string().contains("memory"));
    }

    #[test]
    fn wrong_shape_is_corrupt() {
        let storage = MemoryStorage::with_raw(r#"{"id": "x"}"#);
        assert!(storage.load().unwrap_err().is_corrupt());
    }

    #[test]
    fn invalid_utf8_decodes_as_corrupt() {
        let err = decode([0x5b, 0xff, 0xfe, 0x5d], "bytes").unwrap_err();
        assert!(err.is_corrupt());
    }

    #[test]
    fn empty_array_loads_as_empty_list() {
        let storage = MemoryStorage::with_raw("[]");
        assert_eq!(storage.load().unwrap(), Some(Vec::new()));
    }

    #[test]
    fn mut_ref_forwards() {
        fn write_through<S: NoteStorage>(mut storage: S, notes: &[Note]) {
            storage.save_all(notes).unwrap();
        }

        let mut storage = MemoryStorage::new();
        write_through(&mut storage, &sample_notes());
        assert_eq!(storage.writes(), 1);
    }
}
