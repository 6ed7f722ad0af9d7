//! Line-oriented terminal front end.
//!
//! Protocol:
//! - Lines starting with `#` are front-end commands (quit, status, help)
//! - Everything else is sent to the game as a player command
//! - Game output is printed line by line; front-end output is tagged `[...]`

use crate::config::AppConfig;
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use tracing::info;
use wasteland_core::persist::{self, FileStore, SAVE_KEY};
use wasteland_core::story;
use wasteland_core::{GameSession, Response, SeededDice, SessionConfig};

type Session = GameSession<FileStore, SeededDice>;

/// Run the game until `#quit` or end of input.
pub fn run(config: &AppConfig) -> Result<()> {
    let mut store = FileStore::new(&config.save_dir);
    if config.new_game {
        persist::clear(&mut store, SAVE_KEY)
            .with_context(|| format!("could not discard the save in {}", config.save_dir.display()))?;
        info!(dir = %store.dir().display(), "discarded saved game");
    }

    let dice = match config.seed {
        Some(seed) => SeededDice::from_seed(seed),
        None => SeededDice::from_entropy(),
    };
    let mut session = GameSession::open(store, dice, SessionConfig::new());

    // Resume messages (loaded or load failed) are the only lines so far.
    print_lines(&session.state().game_log);
    if session.has_player() {
        print_status(&session);
    } else {
        new_survivor(&mut session, config);
    }
    print_commands();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = line.context("error reading input")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(meta) = line.strip_prefix('#') {
            match meta.split_whitespace().next() {
                Some("quit") | Some("exit") => {
                    println!("Hasta pronto, superviviente.");
                    break;
                }
                Some("status") => print_status(&session),
                Some("help") => print_commands(),
                _ => println!("[ERROR] Unknown command. Type #help for help."),
            }
            stdout.flush().ok();
            continue;
        }

        let response = session.submit(line);
        print_response(&response);

        if !session.has_player() {
            // The game was restarted; roll a new survivor straight away.
            new_survivor(&mut session, config);
        }
        stdout.flush().ok();
    }

    Ok(())
}

fn new_survivor(session: &mut Session, config: &AppConfig) {
    print_lines(story::INTRODUCTION);
    println!();
    print_lines(config.archetype.data().backstory);
    println!();

    let response = session.create_player(&config.name, config.archetype);
    print_lines(&response.lines);
}

fn print_response(response: &Response) {
    // The echoed command is already on the terminal.
    let lines = response.lines.iter().filter(|l| !l.starts_with("$ "));
    for line in lines {
        println!("{line}");
    }

    if response.in_combat {
        if let Some(health) = response.health {
            println!("[COMBAT] HP: {}/{}", health.current, health.maximum);
        }
    }
    println!();
}

fn print_status(session: &Session) {
    let state = session.state();
    let Some(player) = state.player.as_ref() else {
        println!("[STATUS] No survivor.");
        return;
    };

    println!("[STATUS]");
    println!("  Survivor: {} ({}, level {})", player.name, player.archetype, player.level);
    if let Some(location) = state.current_location() {
        println!("  Location: {}", location.name);
    }
    println!("  HP: {}/{}", player.health.current, player.health.maximum);
    println!("  Stamina: {}/{}", player.stamina.current, player.stamina.maximum);
    println!("  In Combat: {}", state.in_combat);
    if let Some(enemy) = state.current_enemy.as_ref().filter(|_| state.in_combat) {
        println!("  Enemy: {} ({}/{})", enemy.name, enemy.health.current, enemy.health.maximum);
    }
}

fn print_commands() {
    println!("[HELP]");
    println!("  #quit        - Exit the game (progress is saved after every command)");
    println!("  #status      - Show current survivor status");
    println!("  #help        - Show this help");
    println!("  (anything else is sent as a game command, try /ayuda)");
    println!();
}

fn print_lines<S: AsRef<str>>(lines: &[S]) {
    for line in lines {
        println!("{}", line.as_ref());
    }
}
