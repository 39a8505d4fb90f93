//! Isolated test environment with temp directory.

// Not every test binary uses every helper
#![allow(dead_code)]

use super::{StickiesCommand, TestNote};
use serde_json::Value;
use std::path::{Path, PathBuf};
use stickies::domain::Note;
use stickies::store::{DEFAULT_KEY, JsonFileStorage, NoteStorage};
use tempfile::TempDir;

/// Isolated test environment with a temporary data directory.
///
/// The directory is removed when the TestEnv is dropped.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    data_dir: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment with no notes file.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let data_dir = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            data_dir,
        }
    }

    /// Returns the data directory passed as `--dir`.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Returns the path of the notes file.
    pub fn notes_path(&self) -> PathBuf {
        self.data_dir.join(format!("{}.json", DEFAULT_KEY))
    }

    /// Writes the given notes as the stored collection, in order.
    pub fn seed(&self, notes: &[TestNote]) {
        let notes: Vec<Note> = notes.iter().map(TestNote::to_note).collect();
        JsonFileStorage::at(self.notes_path())
            .save_all(&notes)
            .expect("Failed to seed notes");
    }

    /// Writes raw text as the notes file.
    pub fn write_raw(&self, content: &str) {
        std::fs::write(self.notes_path(), content).expect("Failed to write notes file");
    }

    /// Returns the raw notes file, if it exists.
    pub fn read_raw(&self) -> Option<String> {
        std::fs::read_to_string(self.notes_path()).ok()
    }

    /// Parses the notes file as JSON, or `Null` when absent.
    pub fn stored_json(&self) -> Value {
        self.read_raw()
            .map(|raw| serde_json::from_str(&raw).expect("Notes file is not JSON"))
            .unwrap_or(Value::Null)
    }

    /// Loads the stored notes through the library.
    pub fn stored_notes(&self) -> Vec<Note> {
        JsonFileStorage::at(self.notes_path())
            .load()
            .expect("Failed to load notes")
            .unwrap_or_default()
    }

    /// Returns the directory used as `XDG_CONFIG_HOME` for commands.
    pub fn config_home(&self) -> PathBuf {
        self.data_dir.join("config")
    }

    /// Writes `config.toml` where the binary will look for it.
    pub fn write_config(&self, content: &str) {
        let dir = self.config_home().join("stickies");
        std::fs::create_dir_all(&dir).expect("Failed to create config dir");
        std::fs::write(dir.join("config.toml"), content).expect("Failed to write config");
    }

    /// Creates a StickiesCommand configured for this environment.
    pub fn cmd(&self) -> StickiesCommand {
        self.cmd_without_dir().dir(&self.data_dir)
    }

    /// Creates a StickiesCommand isolated from the user's config but
    /// without `--dir`.
    pub fn cmd_without_dir(&self) -> StickiesCommand {
        StickiesCommand::new().env("XDG_CONFIG_HOME", self.config_home().to_string_lossy())
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_starts_without_notes_file() {
        let env = TestEnv::new();
        assert!(env.data_dir().exists());
        assert!(env.read_raw().is_none());
        assert!(env.stored_notes().is_empty());
    }

    #[test]
    fn test_env_seed_round_trips() {
        let env = TestEnv::new();
        env.seed(&[TestNote::new("One").content("a"), TestNote::new("Two")]);

        let notes = env.stored_notes();
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].title(), "One");
        assert_eq!(env.stored_json()[1]["title"], "Two");
    }
}
