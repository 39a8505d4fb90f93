//! The authoritative in-memory note list, mirrored to a storage slot.

use crate::domain::{Color, Note, NoteId, now};
use crate::store::storage::{NoteStorage, StorageError};
use std::cmp::Reverse;
use std::collections::HashSet;
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// Minimum length for an identifier to be tried as an id prefix.
const MIN_PREFIX_LEN: usize = 4;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The note list could not be read at startup.
    #[error("failed to load notes")]
    Load(#[source] StorageError),

    /// The note list could not be written after a mutation.
    #[error("failed to persist notes")]
    Persist(#[source] StorageError),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// What [`NotesStore::save`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Created,
    Updated,
}

/// Result of resolving a user-supplied note identifier.
#[derive(Debug)]
pub enum Resolution<'a> {
    /// Exactly one note matched.
    Unique(&'a Note),
    /// Multiple notes matched.
    Ambiguous(Vec<&'a Note>),
    /// No notes matched.
    NotFound,
}

/// Notes store: a flat list of notes written through to `S` on every change.
///
/// # Examples
///
/// ```
/// use stickies::store::{MemoryStorage, NotesStore, SaveOutcome};
///
/// let mut store = NotesStore::open(MemoryStorage::new()).unwrap();
/// let note = store.create();
/// assert_eq!(store.save(note).unwrap(), SaveOutcome::Created);
/// assert_eq!(store.len(), 1);
/// ```
#[derive(Debug)]
pub struct NotesStore<S: NoteStorage> {
    storage: S,
    notes: Vec<Note>,
}

impl<S: NoteStorage> NotesStore<S> {
    /// Loads the note list from `storage`.
    ///
    /// A missing slot yields an empty store. A corrupt payload is logged and
    /// also yields an empty store; it is overwritten by the next mutation.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Load` for I/O failures other than a missing slot.
    pub fn open(storage: S) -> StoreResult<Self> {
        let notes = match storage.load() {
            Ok(Some(notes)) => dedup_ids(notes),
            Ok(None) => Vec::new(),
            Err(err) if err.is_corrupt() => {
                error!("error parsing notes, starting with an empty list: {err}");
                Vec::new()
            }
            Err(err) => return Err(StoreError::Load(err)),
        };

        debug!(count = notes.len(), "opened notes store");
        Ok(Self { storage, notes })
    }

    /// Returns a fresh, unsaved note with empty title and content, a random
    /// starter color, and `created_at == updated_at == now`.
    pub fn create(&self) -> Note {
        Note::builder(NoteId::new(), now())
            .color(Color::random())
            .build()
    }

    /// Saves a note.
    ///
    /// If a note with the same id exists it is replaced in place: the stored
    /// color is kept when `note` has none, and `updated_at` is stamped to now.
    /// Otherwise `note` is appended unchanged.
    pub fn save(&mut self, mut note: Note) -> StoreResult<SaveOutcome> {
        let outcome = match self.position(note.id()) {
            Some(idx) => {
                if note.color().is_none() {
                    note.set_color(self.notes[idx].color());
                }
                note.touch(now());
                info!(id = %note.id(), "updated note");
                self.notes[idx] = note;
                SaveOutcome::Updated
            }
            None => {
                info!(id = %note.id(), "created note");
                self.notes.push(note);
                SaveOutcome::Created
            }
        };

        self.persist()?;
        Ok(outcome)
    }

    /// Removes the note with `id`, returning it. Absent ids are a no-op.
    pub fn delete(&mut self, id: &NoteId) -> StoreResult<Option<Note>> {
        let Some(idx) = self.position(id) else {
            debug!(id = %id, "delete of unknown note ignored");
            return Ok(None);
        };

        let removed = self.notes.remove(idx);
        info!(id = %id, "deleted note");
        self.persist()?;
        Ok(Some(removed))
    }

    /// Returns notes whose title or content contains `query`,
    /// case-insensitively, in insertion order. An empty query matches all.
    pub fn search(&self, query: &str) -> Vec<&Note> {
        let needle = query.to_lowercase();
        self.notes
            .iter()
            .filter(|n| n.matches_lowercase(&needle))
            .collect()
    }

    /// Returns the search results ordered by `updated_at`, most recent first.
    ///
    /// Notes with equal timestamps keep insertion order.
    pub fn display(&self, query: &str) -> Vec<&Note> {
        let mut notes = self.search(query);
        notes.sort_by_key(|n| Reverse(n.updated_at()));
        notes
    }

    /// Resolves a user-typed identifier to a note.
    ///
    /// Resolution order:
    /// 1. Exact id
    /// 2. Id prefix (at least four characters)
    /// 3. Exact title, case-insensitive
    ///
    /// A single id-prefix hit wins outright; otherwise prefix and title hits
    /// are pooled.
    pub fn find(&self, identifier: &str) -> Resolution<'_> {
        let identifier = identifier.trim();
        if identifier.is_empty() {
            return Resolution::NotFound;
        }

        if let Some(note) = self.notes.iter().find(|n| n.id().as_str() == identifier) {
            return Resolution::Unique(note);
        }

        let mut candidates: Vec<&Note> = Vec::new();

        let looks_like_id = identifier.chars().count() >= MIN_PREFIX_LEN
            && !identifier.chars().any(char::is_whitespace);
        if looks_like_id {
            let id_matches: Vec<&Note> = self
                .notes
                .iter()
                .filter(|n| n.id().starts_with(identifier))
                .collect();
            if let [only] = id_matches.as_slice() {
                return Resolution::Unique(*only);
            }
            candidates.extend(id_matches);
        }

        let lowered = identifier.to_lowercase();
        candidates.extend(
            self.notes
                .iter()
                .filter(|n| n.title().trim().to_lowercase() == lowered),
        );

        let mut seen = HashSet::new();
        candidates.retain(|n| seen.insert(n.id().clone()));

        match candidates.len() {
            0 => Resolution::NotFound,
            1 => Resolution::Unique(candidates[0]),
            _ => Resolution::Ambiguous(candidates),
        }
    }

    /// Returns the note with `id`.
    pub fn get(&self, id: &NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| n.id() == id)
    }

    /// Returns all notes in insertion order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Returns the storage backend.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Consumes the store, returning the storage backend.
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn position(&self, id: &NoteId) -> Option<usize> {
        self.notes.iter().position(|n| n.id() == id)
    }

    fn persist(&mut self) -> StoreResult<()> {
        self.storage
            .save_all(&self.notes)
            .map_err(StoreError::Persist)
    }
}

/// Drops notes whose id repeats an earlier one.
fn dedup_ids(notes: Vec<Note>) -> Vec<Note> {
    let mut seen = HashSet::new();
    notes
        .into_iter()
        .filter(|n| {
            let fresh = seen.insert(n.id().clone());
            if !fresh {
                warn!(id = %n.id(), "dropping note with duplicate id");
            }
            fresh
        })
        .collect()
}
