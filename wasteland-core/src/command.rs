//! Free-text command parsing.
//!
//! Turns player input such as `/ir norte`, `atacar` or `N` into a typed
//! [`Command`]. Parsing never fails loudly: unrecognized input is `None` and
//! the caller decides how to report it.

use crate::world::Direction;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The eleven canonical actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Move,
    Attack,
    Use,
    Equip,
    Look,
    Inventory,
    Stats,
    Flee,
    Help,
    Restart,
    Search,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::Move => "move",
            Action::Attack => "attack",
            Action::Use => "use",
            Action::Equip => "equip",
            Action::Look => "look",
            Action::Inventory => "inventory",
            Action::Stats => "stats",
            Action::Flee => "flee",
            Action::Help => "help",
            Action::Restart => "restart",
            Action::Search => "search",
        }
    }

    /// Actions that only report state and never change it.
    pub fn is_read_only(&self) -> bool {
        matches!(
            self,
            Action::Look | Action::Inventory | Action::Stats | Action::Help
        )
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Verb synonyms and the action each one maps to.
pub const VERBS: &[(&str, Action)] = &[
    // Movement
    ("ir", Action::Move),
    ("mover", Action::Move),
    ("caminar", Action::Move),
    ("viajar", Action::Move),
    ("go", Action::Move),
    ("move", Action::Move),
    ("walk", Action::Move),
    // Combat
    ("atacar", Action::Attack),
    ("pelear", Action::Attack),
    ("luchar", Action::Attack),
    ("golpear", Action::Attack),
    ("attack", Action::Attack),
    ("fight", Action::Attack),
    ("hit", Action::Attack),
    // Items
    ("usar", Action::Use),
    ("consumir", Action::Use),
    ("tomar", Action::Use),
    ("use", Action::Use),
    ("equipar", Action::Equip),
    ("vestir", Action::Equip),
    ("armarse", Action::Equip),
    ("equip", Action::Equip),
    ("wield", Action::Equip),
    ("wear", Action::Equip),
    // Exploration
    ("mirar", Action::Look),
    ("observar", Action::Look),
    ("examinar", Action::Look),
    ("ver", Action::Look),
    ("look", Action::Look),
    ("buscar", Action::Search),
    ("rebuscar", Action::Search),
    ("explorar", Action::Search),
    ("registrar", Action::Search),
    ("search", Action::Search),
    // Interface
    ("inventario", Action::Inventory),
    ("mochila", Action::Inventory),
    ("objetos", Action::Inventory),
    ("inventory", Action::Inventory),
    ("inv", Action::Inventory),
    ("stats", Action::Stats),
    ("estadisticas", Action::Stats),
    ("estadísticas", Action::Stats),
    ("estado", Action::Stats),
    ("nivel", Action::Stats),
    // Escape
    ("huir", Action::Flee),
    ("escapar", Action::Flee),
    ("correr", Action::Flee),
    ("retirarse", Action::Flee),
    ("flee", Action::Flee),
    ("run", Action::Flee),
    // System
    ("ayuda", Action::Help),
    ("help", Action::Help),
    ("comandos", Action::Help),
    ("reiniciar", Action::Restart),
    ("reset", Action::Restart),
    ("restart", Action::Restart),
];

/// Look up the action for a single (already lowercased) verb.
pub fn verb_action(word: &str) -> Option<Action> {
    VERBS
        .iter()
        .find(|(verb, _)| *verb == word)
        .map(|(_, action)| *action)
}

/// What a command is aimed at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Target {
    Direction(Direction),
    Text(String),
}

impl Target {
    pub fn as_direction(&self) -> Option<Direction> {
        match self {
            Target::Direction(d) => Some(*d),
            Target::Text(_) => None,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Direction(d) => write!(f, "{d}"),
            Target::Text(t) => write!(f, "{t}"),
        }
    }
}

/// A parsed player command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    pub action: Action,
    pub target: Option<Target>,
    /// The input exactly as typed.
    pub raw: String,
}

impl Command {
    pub fn new(action: Action, raw: impl Into<String>) -> Self {
        Self {
            action,
            target: None,
            raw: raw.into(),
        }
    }

    pub fn with_target(mut self, target: Target) -> Self {
        self.target = Some(target);
        self
    }

    /// Target phrase as text, whatever its kind.
    pub fn target_text(&self) -> Option<String> {
        self.target.as_ref().map(|t| t.to_string())
    }
}

/// Marker that may precede a command.
pub const COMMAND_MARKER: char = '/';

/// Parse raw player input.
///
/// Returns `None` for empty input and for input whose first word is neither
/// a known verb nor a direction.
pub fn parse_command(input: &str) -> Option<Command> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    let clean = trimmed
        .strip_prefix(COMMAND_MARKER)
        .unwrap_or(trimmed)
        .to_lowercase();
    let mut words = clean.split_whitespace();
    let word = words.next()?;
    let rest = words.collect::<Vec<_>>().join(" ");

    let Some(action) = verb_action(word) else {
        return Direction::parse(word).map(|direction| {
            Command::new(Action::Move, input).with_target(Target::Direction(direction))
        });
    };

    let command = Command::new(action, input);
    if rest.is_empty() {
        return Some(command);
    }

    let target = match action {
        Action::Move => Direction::parse(&rest)
            .map(Target::Direction)
            .unwrap_or(Target::Text(rest)),
        _ => Target::Text(rest),
    };
    Some(command.with_target(target))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_synonym_maps() {
        for (verb, action) in VERBS {
            let command = parse_command(verb).unwrap();
            assert_eq!(command.action, *action, "verb {verb}");
            assert!(command.target.is_none());
        }
    }

    #[test]
    fn test_marker_and_case() {
        let command = parse_command("/ATACAR").unwrap();
        assert_eq!(command.action, Action::Attack);
        assert_eq!(command.raw, "/ATACAR");
    }

    #[test]
    fn test_move_normalizes_direction() {
        let command = parse_command("/ir N").unwrap();
        assert_eq!(command.action, Action::Move);
        assert_eq!(command.target, Some(Target::Direction(Direction::North)));
    }

    #[test]
    fn test_move_keeps_unknown_phrase() {
        let command = parse_command("ir al   bosque").unwrap();
        assert_eq!(command.target, Some(Target::Text("al bosque".to_string())));
    }

    #[test]
    fn test_bare_direction_is_move() {
        for (token, direction) in [
            ("norte", Direction::North),
            ("s", Direction::South),
            ("/e", Direction::East),
            ("Oeste", Direction::West),
        ] {
            let command = parse_command(token).unwrap();
            assert_eq!(command.action, Action::Move);
            assert_eq!(command.target, Some(Target::Direction(direction)));
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_command("").is_none());
        assert!(parse_command("   \t ").is_none());
        assert!(parse_command("/").is_none());
    }

    #[test]
    fn test_unknown_verb() {
        assert!(parse_command("bailar salsa").is_none());
    }

    #[test]
    fn test_use_target_text() {
        let command = parse_command("usar Botiquín").unwrap();
        assert_eq!(command.action, Action::Use);
        assert_eq!(command.target_text().as_deref(), Some("botiquín"));
    }

    #[test]
    fn test_non_move_target_not_normalized() {
        let command = parse_command("equipar n").unwrap();
        assert_eq!(command.target, Some(Target::Text("n".to_string())));
    }
}
