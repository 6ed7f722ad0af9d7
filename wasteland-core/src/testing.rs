//! Testing utilities for the wasteland game.
//!
//! This module provides tools for deterministic tests:
//! - `ScriptedDice` pins every random draw
//! - `FailingStore` simulates a broken save backend
//! - `TestHarness` drives typed commands against a game
//! - Assertion helpers for verifying game state

use crate::command::parse_command;
use crate::dice::Dice;
use crate::engine::{GameEngine, Outcome};
use crate::enemies::spawn_enemy;
use crate::persist::{PersistError, SaveStore};
use crate::state::GameState;
use crate::world::{Archetype, Player};
use std::collections::VecDeque;

/// Dice that return scripted draws in order.
///
/// Once the script runs out every draw returns the fallback value.
#[derive(Debug, Clone)]
pub struct ScriptedDice {
    rolls: VecDeque<f64>,
    fallback: f64,
}

impl ScriptedDice {
    /// Scripted draws with a fallback of 0.5.
    pub fn new(rolls: Vec<f64>) -> Self {
        Self {
            rolls: rolls.into(),
            fallback: 0.5,
        }
    }

    /// Dice that always return the same draw.
    pub fn constant(value: f64) -> Self {
        Self::new(Vec::new()).with_fallback(value)
    }

    pub fn with_fallback(mut self, value: f64) -> Self {
        self.fallback = value;
        self
    }

    /// Queue more draws after the current script.
    pub fn push(&mut self, value: f64) {
        self.rolls.push_back(value);
    }

    /// Draws not yet consumed.
    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }
}

impl Dice for ScriptedDice {
    fn unit(&mut self) -> f64 {
        self.rolls.pop_front().unwrap_or(self.fallback)
    }
}

/// A store where every write and delete fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingStore;

impl SaveStore for FailingStore {
    fn read(&self, _key: &str) -> Result<Option<String>, PersistError> {
        Ok(None)
    }

    fn write(&mut self, _key: &str, _value: &str) -> Result<(), PersistError> {
        Err(std::io::Error::other("disk full").into())
    }

    fn remove(&mut self, _key: &str) -> Result<(), PersistError> {
        Err(std::io::Error::other("disk full").into())
    }
}

/// Test harness for running game scenarios without persistence.
pub struct TestHarness {
    /// The engine, with scripted dice.
    pub engine: GameEngine<ScriptedDice>,
    /// The game state.
    pub state: GameState,
}

impl TestHarness {
    /// A scavenger named "Tester" at the bunker entrance.
    pub fn new() -> Self {
        Self::with_archetype(Archetype::Scavenger)
    }

    /// A fresh survivor of the given archetype, with an empty log.
    ///
    /// Unscripted draws fall back to 0.99: no encounters, failed searches.
    pub fn with_archetype(archetype: Archetype) -> Self {
        let mut state = GameState::new();
        state.create_player("Tester", archetype);
        state.game_log.clear();

        Self {
            engine: GameEngine::new(ScriptedDice::constant(0.99)),
            state,
        }
    }

    /// Queue draws for the next commands.
    pub fn script(&mut self, rolls: &[f64]) -> &mut Self {
        for roll in rolls {
            self.engine.dice_mut().push(*roll);
        }
        self
    }

    /// Parse and run one line of input. Returns the lines it logged, or
    /// `None` when the input is not a command.
    pub fn input(&mut self, text: &str) -> Option<Vec<String>> {
        let command = parse_command(text)?;
        let before = self.state.game_log.len();
        match self.engine.execute(&mut self.state, &command) {
            Outcome::Applied => Some(self.state.game_log[before..].to_vec()),
            Outcome::Restarted => Some(Vec::new()),
        }
    }

    /// Put the survivor in combat with a freshly spawned enemy.
    pub fn spawn_enemy(&mut self, id: &str) -> &mut Self {
        if let Some(enemy) = spawn_enemy(id) {
            self.state.start_combat(enemy);
        }
        self
    }

    pub fn player(&self) -> &Player {
        self.state
            .player
            .as_ref()
            .expect("harness always has a player")
    }

    pub fn player_mut(&mut self) -> &mut Player {
        self.state
            .player
            .as_mut()
            .expect("harness always has a player")
    }

    /// Get current player HP as (current, max).
    pub fn player_hp(&self) -> (i32, i32) {
        self.state
            .player
            .as_ref()
            .map(|p| (p.health.current, p.health.maximum))
            .unwrap_or_default()
    }

    pub fn in_combat(&self) -> bool {
        self.state.in_combat
    }

    /// Check whether any log line contains `text`.
    pub fn log_contains(&self, text: &str) -> bool {
        self.state.game_log.iter().any(|l| l.contains(text))
    }

    pub fn last_line(&self) -> Option<&str> {
        self.state.game_log.last().map(String::as_str)
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Assert player HP is at expected values.
#[track_caller]
pub fn assert_hp(harness: &TestHarness, current: i32, max: i32) {
    let (actual_current, actual_max) = harness.player_hp();
    assert_eq!(
        (actual_current, actual_max),
        (current, max),
        "Expected HP {current}/{max}, got {actual_current}/{actual_max}"
    );
}

/// Assert player is in combat.
#[track_caller]
pub fn assert_in_combat(harness: &TestHarness) {
    assert!(harness.in_combat(), "Expected to be in combat");
}

/// Assert player is NOT in combat.
#[track_caller]
pub fn assert_not_in_combat(harness: &TestHarness) {
    assert!(!harness.in_combat(), "Expected to NOT be in combat");
}

/// Assert some log line contains `text`.
#[track_caller]
pub fn assert_logged(harness: &TestHarness, text: &str) {
    assert!(
        harness.log_contains(text),
        "Expected a log line containing '{text}', log was {:#?}",
        harness.state.game_log
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_dice_order_and_fallback() {
        let mut dice = ScriptedDice::new(vec![0.1, 0.2]).with_fallback(0.7);
        assert_eq!(dice.unit(), 0.1);
        assert_eq!(dice.unit(), 0.2);
        assert_eq!(dice.unit(), 0.7);
        assert_eq!(dice.remaining(), 0);
    }

    #[test]
    fn test_failing_store() {
        let mut store = FailingStore;
        assert!(store.write("k", "v").is_err());
        assert!(store.read("k").unwrap().is_none());
    }

    #[test]
    fn test_harness_combat_flow() {
        let mut harness = TestHarness::with_archetype(Archetype::Soldier);
        assert_not_in_combat(&harness);

        harness.spawn_enemy("radroach");
        assert_in_combat(&harness);

        // 9 + 9.9 - 1 floors to 17, which kills a 20 hp radroach in two blows
        harness.script(&[0.99, 0.0, 0.99]);
        harness.input("atacar").unwrap();
        assert_in_combat(&harness);
        assert_hp(&harness, 95, 100);

        harness.input("atacar").unwrap();
        assert_not_in_combat(&harness);
        assert_logged(&harness, "Has derrotado al Radcucaracha");
        assert_eq!(harness.player().experience, 15);
    }

    #[test]
    fn test_unknown_input() {
        let mut harness = TestHarness::new();
        assert!(harness.input("bailar").is_none());
        assert!(harness.state.game_log.is_empty());
    }

    #[test]
    fn test_unscripted_moves_have_no_encounters() {
        let mut harness = TestHarness::new();
        harness.input("norte").unwrap();
        assert_not_in_combat(&harness);
        assert_eq!(harness.player().location, "wasteland_outskirts");
    }
}
