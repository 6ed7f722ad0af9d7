//! Game persistence.
//!
//! Snapshots of the whole [`GameState`] are written as JSON into a small
//! key-value store. The store is a trait so games can live on disk
//! ([`FileStore`]) or only in memory ([`MemoryStore`]).

use crate::state::GameState;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from persistence operations.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Version mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: u32, found: u32 },

    #[error("Invalid snapshot: {0}")]
    Invalid(String),
}

/// Current snapshot version.
pub const SAVE_VERSION: u32 = 1;

/// Key the running game is stored under.
pub const SAVE_KEY: &str = "wasteland-rpg-save";

// ============================================================================
// Stores
// ============================================================================

/// A string key-value store holding snapshots.
pub trait SaveStore {
    /// Read a value. A missing key is `Ok(None)`, not an error.
    fn read(&self, key: &str) -> Result<Option<String>, PersistError>;

    fn write(&mut self, key: &str, value: &str) -> Result<(), PersistError>;

    /// Delete a value. Deleting a missing key succeeds.
    fn remove(&mut self, key: &str) -> Result<(), PersistError>;
}

/// Stores each key as `<dir>/<sanitized key>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing a key.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", sanitize_key(key)))
    }
}

impl SaveStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>, PersistError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), PersistError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), PersistError> {
        match fs::remove_file(self.path_for(key)) {
            Err(e) if e.kind() != ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}

/// In-memory store, lost when dropped.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

impl SaveStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, PersistError> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), PersistError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), PersistError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Keep a key safe to use as a file name.
fn sanitize_key(key: &str) -> String {
    key.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

// ============================================================================
// Snapshots
// ============================================================================

/// A saved game: the full state plus version and time of saving.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedGame {
    pub version: u32,
    /// Seconds since the Unix epoch.
    pub saved_at: String,
    #[serde(flatten)]
    pub state: GameState,
}

impl SavedGame {
    pub fn new(state: GameState) -> Self {
        Self {
            version: SAVE_VERSION,
            saved_at: timestamp_now(),
            state,
        }
    }

    pub fn to_json(&self) -> Result<String, PersistError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a snapshot, rejecting other versions before reading the state
    /// and states the engine could never have produced after it.
    pub fn from_json(content: &str) -> Result<Self, PersistError> {
        #[derive(Deserialize)]
        struct Header {
            version: u32,
        }

        let header: Header = serde_json::from_str(content)?;
        if header.version != SAVE_VERSION {
            return Err(PersistError::VersionMismatch {
                expected: SAVE_VERSION,
                found: header.version,
            });
        }

        let saved: SavedGame = serde_json::from_str(content)?;
        saved.state.validate().map_err(PersistError::Invalid)?;
        Ok(saved)
    }
}

/// Write a snapshot of `state` under `key`.
pub fn save_state<S: SaveStore + ?Sized>(
    store: &mut S,
    key: &str,
    state: &GameState,
) -> Result<(), PersistError> {
    let content = SavedGame::new(state.clone()).to_json()?;
    store.write(key, &content)
}

/// Read the snapshot under `key`, if there is one.
pub fn load_state<S: SaveStore + ?Sized>(
    store: &S,
    key: &str,
) -> Result<Option<GameState>, PersistError> {
    let Some(content) = store.read(key)? else {
        return Ok(None);
    };
    Ok(Some(SavedGame::from_json(&content)?.state))
}

/// Delete the snapshot under `key`.
pub fn clear<S: SaveStore + ?Sized>(store: &mut S, key: &str) -> Result<(), PersistError> {
    store.remove(key)
}

fn timestamp_now() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    now.as_secs().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::Archetype;
    use tempfile::TempDir;

    fn sample_state() -> GameState {
        let mut state = GameState::new();
        state.create_player("Iker", Archetype::Soldier);
        state
    }

    #[test]
    fn test_sanitized_path() {
        let store = FileStore::new("/saves");
        let path = store.path_for("../my save");
        assert_eq!(path, PathBuf::from("/saves/___my_save.json"));
        assert!(store
            .path_for(SAVE_KEY)
            .ends_with("wasteland-rpg-save.json"));
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().join("nested"));
        let state = sample_state();

        save_state(&mut store, SAVE_KEY, &state).unwrap();
        let loaded = load_state(&store, SAVE_KEY).unwrap().unwrap();
        assert_eq!(loaded, state);
    }

    #[test]
    fn test_missing_snapshot() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());
        assert!(load_state(&store, SAVE_KEY).unwrap().is_none());
    }

    #[test]
    fn test_clear_removes_snapshot() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path());
        save_state(&mut store, SAVE_KEY, &sample_state()).unwrap();

        clear(&mut store, SAVE_KEY).unwrap();
        assert!(!store.path_for(SAVE_KEY).exists());
        // clearing twice is fine
        clear(&mut store, SAVE_KEY).unwrap();
    }

    #[test]
    fn test_snapshot_layout() {
        let json = SavedGame::new(sample_state()).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["version"], SAVE_VERSION);
        assert!(value.get("savedAt").is_some());
        assert_eq!(value["gameStarted"], true);
        assert_eq!(value["inCombat"], false);
        assert_eq!(value["player"]["name"], "Iker");
    }

    #[test]
    fn test_version_mismatch() {
        let mut value = serde_json::to_value(SavedGame::new(sample_state())).unwrap();
        value["version"] = serde_json::json!(99);

        let err = SavedGame::from_json(&value.to_string()).unwrap_err();
        assert!(matches!(
            err,
            PersistError::VersionMismatch {
                expected: 1,
                found: 99
            }
        ));
    }

    #[test]
    fn test_invalid_state_rejected() {
        let mut state = sample_state();
        state.player.as_mut().unwrap().location = "atlantis".to_string();
        let json = SavedGame::new(state).to_json().unwrap();

        let err = SavedGame::from_json(&json).unwrap_err();
        assert!(matches!(err, PersistError::Invalid(ref why) if why.contains("atlantis")));
    }

    #[test]
    fn test_corrupt_snapshot() {
        let mut store = MemoryStore::new();
        store.write(SAVE_KEY, "{ not json").unwrap();
        assert!(matches!(
            load_state(&store, SAVE_KEY),
            Err(PersistError::Json(_))
        ));
    }
}
