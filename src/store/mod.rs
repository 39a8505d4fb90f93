//! Notes store with a pluggable persistence slot.

mod json_file;
mod notes_store;
mod storage;

pub use json_file::{DEFAULT_KEY, JsonFileStorage};
pub use notes_store::{NotesStore, Resolution, SaveOutcome, StoreError, StoreResult};
pub use storage::{MemoryStorage, NoteStorage, StorageError, StorageResult, decode, encode};

#[cfg(test)]
pub(crate) use storage::FailingStorage;
