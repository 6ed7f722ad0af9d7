//! The game state aggregate.
//!
//! One value holds everything a game needs: the survivor, the enemy being
//! fought, the log and the location table. The engine mutates it through a
//! `&mut` borrow and the session snapshots it after every command.

use crate::locations::initial_locations;
use crate::story;
use crate::world::{Archetype, Enemy, Location, Player};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub player: Option<Player>,
    pub current_enemy: Option<Enemy>,
    pub in_combat: bool,
    pub game_log: Vec<String>,
    pub locations: BTreeMap<String, Location>,
    pub game_started: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// The empty state: no survivor, no combat, empty log, fresh map.
    pub fn new() -> Self {
        Self {
            player: None,
            current_enemy: None,
            in_combat: false,
            game_log: Vec::new(),
            locations: initial_locations(),
            game_started: false,
        }
    }

    /// Append one line to the log.
    pub fn log(&mut self, line: impl Into<String>) {
        self.game_log.push(line.into());
    }

    /// Append several lines to the log.
    pub fn log_all<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.game_log.extend(lines.into_iter().map(Into::into));
    }

    /// Start a new game with a fresh survivor. The log is replaced by the
    /// survivor's diary.
    pub fn create_player(&mut self, name: &str, archetype: Archetype) {
        self.player = Some(Player::new(name, archetype));
        self.current_enemy = None;
        self.in_combat = false;
        self.game_started = true;
        self.game_log = story::survivor_diary(name, archetype);
    }

    /// Return to the empty state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// The location the survivor is standing in.
    pub fn current_location(&self) -> Option<&Location> {
        let player = self.player.as_ref()?;
        self.locations.get(&player.location)
    }

    pub fn start_combat(&mut self, enemy: Enemy) {
        self.current_enemy = Some(enemy);
        self.in_combat = true;
    }

    /// Leave combat, discarding the enemy.
    pub fn end_combat(&mut self) {
        self.current_enemy = None;
        self.in_combat = false;
    }

    /// Check that a restored state is one the engine could have produced.
    ///
    /// Returns a description of the first problem found.
    pub fn validate(&self) -> Result<(), String> {
        for (id, location) in &self.locations {
            if let Some(to) = location.exits.values().find(|to| !self.locations.contains_key(*to)) {
                return Err(format!("location '{id}' has an exit to unknown location '{to}'"));
            }
        }

        if self.in_combat && self.current_enemy.is_none() {
            return Err("in combat without an enemy".to_string());
        }
        if let Some(enemy) = &self.current_enemy {
            if !enemy.health.in_bounds() {
                return Err(format!("enemy health {} out of bounds", enemy.health));
            }
        }

        let Some(player) = &self.player else {
            return Ok(());
        };
        if !self.locations.contains_key(&player.location) {
            return Err(format!("player is at unknown location '{}'", player.location));
        }
        if !player.health.in_bounds() {
            return Err(format!("player health {} out of bounds", player.health));
        }
        if !player.stamina.in_bounds() {
            return Err(format!("player stamina {} out of bounds", player.stamina));
        }
        for (slot, handle) in [
            ("weapon", player.equipment.weapon),
            ("armor", player.equipment.armor),
        ] {
            if let Some(handle) = handle {
                if player.inventory.get(handle).is_none() {
                    return Err(format!("equipped {slot} {} is not in the inventory", handle.0));
                }
            }
        }

        Ok(())
    }

    /// Whether a living survivor is playing.
    pub fn player_alive(&self) -> bool {
        self.player.as_ref().is_some_and(|p| !p.is_dead())
    }
}
