//! Text-driven survival RPG engine set in a post-apocalyptic wasteland.
//!
//! This crate provides:
//! - A forgiving Spanish/English command parser
//! - Exploration, random encounters, turn-based combat and progression
//! - Equipment durability, consumables and searchable locations
//! - JSON snapshot persistence behind a pluggable key-value store
//!
//! # Quick Start
//!
//! ```no_run
//! use wasteland_core::{Archetype, FileStore, GameSession, SeededDice, SessionConfig};
//!
//! let store = FileStore::new("saves");
//! let mut session = GameSession::open(store, SeededDice::from_entropy(), SessionConfig::new());
//!
//! if !session.has_player() {
//!     session.create_player("Marta", Archetype::Medic);
//! }
//!
//! let response = session.submit("/mirar");
//! for line in response.lines {
//!     println!("{line}");
//! }
//! ```

pub mod command;
pub mod dice;
pub mod enemies;
pub mod engine;
pub mod items;
pub mod locations;
pub mod persist;
pub mod rules;
pub mod session;
pub mod state;
pub mod story;
pub mod survivors;
pub mod testing;
pub mod world;

// Primary public API
pub use command::{parse_command, Action, Command, Target};
pub use dice::{Dice, SeededDice};
pub use engine::{GameEngine, Outcome};
pub use persist::{FileStore, MemoryStore, PersistError, SaveStore, SAVE_KEY};
pub use rules::Rules;
pub use session::{GameSession, Response, SessionConfig};
pub use state::GameState;
pub use testing::{ScriptedDice, TestHarness};
pub use world::{Archetype, Direction, Item, Player};
