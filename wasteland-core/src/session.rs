//! GameSession - the primary public API for playing the wasteland game.
//!
//! A session owns the game state, the engine and the save store. It accepts
//! raw player input, echoes it, dispatches it and snapshots the state after
//! every command.

use crate::command::parse_command;
use crate::dice::Dice;
use crate::engine::{GameEngine, Outcome};
use crate::persist::{self, SaveStore, SAVE_KEY};
use crate::rules::Rules;
use crate::state::GameState;
use crate::story;
use crate::world::{Archetype, Gauge};
use tracing::{debug, error, info, warn};

/// Logged once a snapshot has been written.
pub const SAVED: &str = "✓ Juego guardado correctamente.";
/// Logged when writing a snapshot fails.
pub const SAVE_FAILED: &str = "✗ Error al guardar la partida.";
/// Logged when a restart cannot delete the old snapshot.
pub const CLEAR_FAILED: &str =
    "✗ Error al borrar la partida guardada. Podría cargarse de nuevo al volver a abrir el juego.";
/// Logged after resuming from a snapshot.
pub const LOADED: &str = "✓ Partida cargada desde el almacenamiento local.";
/// Logged when a snapshot exists but cannot be used.
pub const LOAD_FAILED: &str = "✗ Error al cargar la partida guardada.";
/// Logged for input while no survivor exists.
pub const NO_PLAYER: &str = "❌ No hay jugador activo. Crea un personaje primero.";
/// Logged for input that is not a command.
pub const UNRECOGNIZED: &str =
    "❓ Comando no reconocido. Escribe '/help' para ver la lista de comandos.";

/// Configuration for a game session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Store key the snapshot lives under.
    pub save_key: String,

    /// Whether to log a line after every successful save.
    pub announce_saves: bool,

    /// Game rules handed to the engine.
    pub rules: Rules,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            save_key: SAVE_KEY.to_string(),
            announce_saves: true,
            rules: Rules::default(),
        }
    }
}

impl SessionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the store key.
    pub fn with_save_key(mut self, key: impl Into<String>) -> Self {
        self.save_key = key.into();
        self
    }

    /// Turn the save confirmation line on or off.
    pub fn with_announce_saves(mut self, announce: bool) -> Self {
        self.announce_saves = announce;
        self
    }

    pub fn with_rules(mut self, rules: Rules) -> Self {
        self.rules = rules;
        self
    }
}

/// Result of one submission.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    /// Log lines produced by this submission, in order.
    pub lines: Vec<String>,

    /// Whether combat is active afterwards.
    pub in_combat: bool,

    /// Whether a living survivor exists afterwards.
    pub alive: bool,

    /// The survivor's health, if there is one.
    pub health: Option<Gauge>,
}

/// A wasteland game session.
///
/// This is the main entry point for gameplay. It manages:
/// - The game state (survivor, enemy, log, map)
/// - The engine and its dice
/// - Snapshot persistence
pub struct GameSession<S: SaveStore, D: Dice> {
    engine: GameEngine<D>,
    store: S,
    state: GameState,
    config: SessionConfig,
}

impl<S: SaveStore, D: Dice> GameSession<S, D> {
    /// Open a session, resuming the snapshot in `store` when there is one.
    ///
    /// A snapshot that cannot be read is reported in the log and the session
    /// starts from the empty state.
    pub fn open(store: S, dice: D, config: SessionConfig) -> Self {
        let engine = GameEngine::new(dice).with_rules(config.rules);
        let mut state = GameState::new();

        match persist::load_state(&store, &config.save_key) {
            Ok(Some(saved)) => {
                info!(key = %config.save_key, "resumed saved game");
                state = saved;
                state.log(LOADED);
            }
            Ok(None) => debug!(key = %config.save_key, "no saved game"),
            Err(e) => {
                warn!(key = %config.save_key, error = %e, "saved game is unusable");
                state.log(LOAD_FAILED);
            }
        }

        Self {
            engine,
            store,
            state,
            config,
        }
    }

    /// Start a new game with a fresh survivor and save it.
    pub fn create_player(&mut self, name: &str, archetype: Archetype) -> Response {
        info!(name, archetype = archetype.key(), "creating survivor");
        self.state.create_player(name, archetype);
        self.save();
        self.respond(0)
    }

    /// Handle one line of player input.
    pub fn submit(&mut self, input: &str) -> Response {
        let start = self.state.game_log.len();

        if self.state.player.is_none() {
            self.state.log(NO_PLAYER);
            return self.respond(start);
        }

        let input = input.trim();
        self.state.log(format!("$ {input}"));

        match parse_command(input) {
            None => self.state.log(UNRECOGNIZED),
            Some(command) => {
                if self.engine.execute(&mut self.state, &command) == Outcome::Restarted {
                    return self.restart();
                }
            }
        }

        self.save();
        self.respond(start)
    }

    fn restart(&mut self) -> Response {
        let mut lines: Vec<String> = story::RESTART.iter().map(|l| l.to_string()).collect();

        match persist::clear(&mut self.store, &self.config.save_key) {
            Ok(()) => info!("game restarted"),
            Err(e) => {
                error!(error = %e, "failed to delete saved game");
                self.state.log(CLEAR_FAILED);
                lines.push(CLEAR_FAILED.to_string());
            }
        }

        let mut response = self.respond(self.state.game_log.len());
        response.lines = lines;
        response
    }

    fn save(&mut self) {
        match persist::save_state(&mut self.store, &self.config.save_key, &self.state) {
            Ok(()) => {
                debug!(key = %self.config.save_key, "game saved");
                if self.config.announce_saves {
                    self.state.log(SAVED);
                }
            }
            Err(e) => {
                error!(error = %e, "failed to save game");
                self.state.log(SAVE_FAILED);
            }
        }
    }

    fn respond(&self, start: usize) -> Response {
        let player = self.state.player.as_ref();
        Response {
            lines: self.state.game_log[start..].to_vec(),
            in_combat: self.state.in_combat,
            alive: self.state.player_alive(),
            health: player.map(|p| p.health),
        }
    }

    /// Get a reference to the game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Get a reference to the save store.
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Whether a survivor exists, fresh or resumed.
    pub fn has_player(&self) -> bool {
        self.state.player.is_some()
    }

    pub fn in_combat(&self) -> bool {
        self.state.in_combat
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persist::MemoryStore;
    use crate::testing::{FailingStore, ScriptedDice};

    fn session() -> GameSession<MemoryStore, ScriptedDice> {
        GameSession::open(
            MemoryStore::new(),
            ScriptedDice::constant(0.99),
            SessionConfig::new(),
        )
    }

    #[test]
    fn test_session_config() {
        let config = SessionConfig::new()
            .with_save_key("slot-2")
            .with_announce_saves(false);

        assert_eq!(config.save_key, "slot-2");
        assert!(!config.announce_saves);
        assert_eq!(config.rules, Rules::default());
    }

    #[test]
    fn test_submit_without_player() {
        let mut session = session();
        let response = session.submit("mirar");
        assert_eq!(response.lines, vec![NO_PLAYER]);
        assert!(!response.alive);
        assert!(response.health.is_none());
        assert!(!session.store().contains(SAVE_KEY));
    }

    #[test]
    fn test_create_player_saves() {
        let mut session = session();
        let response = session.create_player("Lola", Archetype::Scavenger);

        assert_eq!(response.lines[0], "=== DIARIO DEL SUPERVIVIENTE ===");
        assert_eq!(response.lines.last().unwrap(), SAVED);
        assert!(response.alive);
        assert!(session.store().contains(SAVE_KEY));
    }

    #[test]
    fn test_submit_echoes_and_saves() {
        let mut session = session();
        session.create_player("Lola", Archetype::Scavenger);

        let response = session.submit("  /mirar ");
        assert_eq!(response.lines[0], "$ /mirar");
        assert_eq!(response.lines[1], "📍 Entrada del Búnker");
        assert_eq!(response.lines.last().unwrap(), SAVED);
        assert_eq!(response.health, Some(Gauge::new(100)));
    }

    #[test]
    fn test_unrecognized_still_saves() {
        let mut session = session();
        session.create_player("Lola", Archetype::Scavenger);

        let response = session.submit("bailar");
        assert_eq!(response.lines, vec!["$ bailar", UNRECOGNIZED, SAVED]);
    }

    #[test]
    fn test_quiet_saves() {
        let mut session = GameSession::open(
            MemoryStore::new(),
            ScriptedDice::constant(0.99),
            SessionConfig::new().with_announce_saves(false),
        );
        session.create_player("Lola", Archetype::Medic);

        let response = session.submit("ayuda");
        assert!(!response.lines.contains(&SAVED.to_string()));
        assert!(session.store().contains(SAVE_KEY));
    }

    #[test]
    fn test_save_failure_is_logged() {
        let mut session = GameSession::open(
            FailingStore,
            ScriptedDice::constant(0.99),
            SessionConfig::new(),
        );
        session.create_player("Lola", Archetype::Medic);

        let response = session.submit("stats");
        assert_eq!(response.lines.last().unwrap(), SAVE_FAILED);
    }

    #[test]
    fn test_restart_reports_failed_delete() {
        let mut session = GameSession::open(
            FailingStore,
            ScriptedDice::constant(0.99),
            SessionConfig::new(),
        );
        session.create_player("Lola", Archetype::Medic);

        let response = session.submit("reiniciar");
        assert_eq!(response.lines.last().unwrap(), CLEAR_FAILED);
        assert_eq!(&response.lines[..story::RESTART.len()], story::RESTART);
        assert!(!session.has_player());
        assert_eq!(session.state().game_log, vec![CLEAR_FAILED]);
    }

    #[test]
    fn test_restart_clears_everything() {
        let mut session = session();
        session.create_player("Lola", Archetype::Soldier);

        let response = session.submit("/reiniciar");
        assert_eq!(response.lines, story::RESTART.to_vec());
        assert!(!response.alive);
        assert_eq!(session.state(), &GameState::new());
        assert!(!session.store().contains(SAVE_KEY));
    }

    #[test]
    fn test_resume_from_store() {
        let mut first = session();
        first.create_player("Lola", Archetype::Soldier);
        first.submit("norte");

        let store = first.store().clone();
        let resumed = GameSession::open(store, ScriptedDice::constant(0.99), SessionConfig::new());

        assert!(resumed.has_player());
        assert_eq!(
            resumed.state().player.as_ref().unwrap().location,
            "wasteland_outskirts"
        );
        assert_eq!(resumed.state().game_log.last().unwrap(), LOADED);
    }

    #[test]
    fn test_impossible_snapshot_falls_back() {
        let mut first = session();
        first.create_player("Lola", Archetype::Soldier);
        let mut store = first.store().clone();

        let mut value: serde_json::Value =
            serde_json::from_str(&store.read(SAVE_KEY).unwrap().unwrap()).unwrap();
        value["player"]["stamina"]["current"] = serde_json::json!(-4);
        store.write(SAVE_KEY, &value.to_string()).unwrap();

        let session = GameSession::open(store, ScriptedDice::constant(0.99), SessionConfig::new());
        assert!(!session.has_player());
        assert_eq!(session.state().game_log, vec![LOAD_FAILED]);
    }

    #[test]
    fn test_corrupt_snapshot_falls_back() {
        let mut store = MemoryStore::new();
        store.write(SAVE_KEY, "{\"version\": 1, \"player\": 7}").unwrap();

        let session = GameSession::open(store, ScriptedDice::constant(0.99), SessionConfig::new());
        assert!(!session.has_player());
        assert_eq!(session.state().game_log, vec![LOAD_FAILED]);
    }
}
