//! QA tests for save/load and persistence functionality.
//!
//! These tests verify that game state is properly saved and restored through
//! the file-backed store.
//! Run with: `cargo test -p wasteland-core --test qa_persistence`

use tempfile::TempDir;
use wasteland_core::persist::{FileStore, SaveStore, SAVE_KEY};
use wasteland_core::session::{
    GameSession, SessionConfig, LOADED, LOAD_FAILED, NO_PLAYER, SAVED,
};
use wasteland_core::testing::ScriptedDice;
use wasteland_core::world::Archetype;
use wasteland_core::GameState;

fn open(dir: &TempDir) -> GameSession<FileStore, ScriptedDice> {
    GameSession::open(
        FileStore::new(dir.path()),
        ScriptedDice::constant(0.99),
        SessionConfig::new(),
    )
}

// =============================================================================
// TEST 1: Basic save and load
// =============================================================================

#[test]
fn test_save_and_load_basic() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    let mut session = open(&temp_dir);
    assert!(!session.has_player());
    session.create_player("Nico", Archetype::Scavenger);
    session.submit("norte");
    session.submit("equipar cuchillo");

    let save_path = session.store().path_for(SAVE_KEY);
    assert!(save_path.exists(), "snapshot should be on disk");

    let resumed = open(&temp_dir);
    let player = resumed.state().player.as_ref().expect("player restored");
    assert_eq!(player.name, "Nico");
    assert_eq!(player.location, "wasteland_outskirts");
    assert_eq!(player.equipped_weapon().unwrap().id, "knife");
    assert!(resumed.state().locations["wasteland_outskirts"].visited);
    assert!(resumed.state().game_started);
    assert_eq!(resumed.state().game_log.last().unwrap(), LOADED);
}

// =============================================================================
// TEST 2: Snapshot contents
// =============================================================================

#[test]
fn test_snapshot_is_camel_case_json() {
    let temp_dir = TempDir::new().unwrap();
    let mut session = open(&temp_dir);
    session.create_player("Nico", Archetype::Medic);

    let content = session.store().read(SAVE_KEY).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();

    assert_eq!(value["version"], 1);
    assert_eq!(value["gameStarted"], true);
    assert_eq!(value["inCombat"], false);
    assert!(value["currentEnemy"].is_null());
    assert!(value["gameLog"].is_array());
    assert!(value["locations"]["bunker_entrance"].is_object());
    assert_eq!(value["player"]["archetype"], "medic");
}

// =============================================================================
// TEST 3: Corrupt snapshots fall back to an empty game
// =============================================================================

#[test]
fn test_corrupt_snapshot_falls_back() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(FileStore::new(temp_dir.path()).path_for(SAVE_KEY), "garbage").unwrap();

    let session = open(&temp_dir);
    assert!(!session.has_player());
    assert_eq!(session.state().game_log, vec![LOAD_FAILED]);
}

#[test]
fn test_future_version_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let mut session = open(&temp_dir);
    session.create_player("Nico", Archetype::Soldier);

    let mut store = FileStore::new(temp_dir.path());
    let content = store.read(SAVE_KEY).unwrap().unwrap();
    let mut value: serde_json::Value = serde_json::from_str(&content).unwrap();
    value["version"] = serde_json::json!(2);
    store.write(SAVE_KEY, &value.to_string()).unwrap();

    let session = open(&temp_dir);
    assert!(!session.has_player());
    assert_eq!(session.state().game_log, vec![LOAD_FAILED]);
}

/// Save a fresh soldier, then rewrite one field of the snapshot on disk.
fn tamper(dir: &TempDir, edit: impl FnOnce(&mut serde_json::Value)) {
    open(dir).create_player("Nico", Archetype::Soldier);

    let mut store = FileStore::new(dir.path());
    let content = store.read(SAVE_KEY).unwrap().unwrap();
    let mut value: serde_json::Value = serde_json::from_str(&content).unwrap();
    edit(&mut value);
    store.write(SAVE_KEY, &value.to_string()).unwrap();
}

#[test]
fn test_snapshot_at_unknown_location_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    tamper(&temp_dir, |v| v["player"]["location"] = serde_json::json!("nowhere"));

    let mut session = open(&temp_dir);
    assert!(!session.has_player());
    assert_eq!(session.state().game_log, vec![LOAD_FAILED]);
    assert_eq!(session.submit("mirar").lines, vec![NO_PLAYER]);
}

#[test]
fn test_snapshot_with_overfull_health_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    tamper(&temp_dir, |v| v["player"]["health"]["current"] = serde_json::json!(500));

    let session = open(&temp_dir);
    assert!(!session.has_player());
    assert_eq!(session.state().game_log, vec![LOAD_FAILED]);
}

#[test]
fn test_snapshot_with_dangling_equipment_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    tamper(&temp_dir, |v| v["player"]["equipment"]["armor"] = serde_json::json!(42));

    let session = open(&temp_dir);
    assert!(!session.has_player());
}

// =============================================================================
// TEST 4: Restart wipes disk and memory
// =============================================================================

#[test]
fn test_restart_wipes_snapshot() {
    let temp_dir = TempDir::new().unwrap();
    let mut session = open(&temp_dir);
    session.create_player("Nico", Archetype::Soldier);
    assert_eq!(session.submit("stats").lines.last().unwrap(), SAVED);

    session.submit("reiniciar");
    assert_eq!(session.state(), &GameState::new());
    assert!(!session.store().path_for(SAVE_KEY).exists());

    let reopened = open(&temp_dir);
    assert_eq!(reopened.state(), &GameState::new());
}

// =============================================================================
// TEST 5: Combat state survives a reload
// =============================================================================

#[test]
fn test_combat_survives_reload() {
    let temp_dir = TempDir::new().unwrap();
    let mut session = GameSession::open(
        FileStore::new(temp_dir.path()),
        ScriptedDice::new(vec![0.0, 0.0]),
        SessionConfig::new(),
    );
    session.create_player("Nico", Archetype::Scavenger);
    let response = session.submit("este");
    assert!(response.in_combat);

    let resumed = open(&temp_dir);
    assert!(resumed.in_combat());
    assert_eq!(
        resumed.state().current_enemy.as_ref().unwrap().id,
        "ghoul"
    );
}
