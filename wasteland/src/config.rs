//! Front-end configuration from the environment and the command line.

use anyhow::{bail, Context, Result};
use std::path::PathBuf;
use wasteland_core::Archetype;

/// Environment variable naming the save directory.
pub const SAVE_DIR_VAR: &str = "WASTELAND_SAVE_DIR";
/// Environment variable holding a fixed dice seed.
pub const SEED_VAR: &str = "WASTELAND_SEED";

const DEFAULT_SAVE_DIR: &str = "saves";
const DEFAULT_NAME: &str = "Superviviente";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Survivor name used when a new game is created.
    pub name: String,
    pub archetype: Archetype,
    /// Fixed dice seed; entropy when absent.
    pub seed: Option<u64>,
    pub save_dir: PathBuf,
    /// Discard any saved game before starting.
    pub new_game: bool,
    pub show_help: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            archetype: Archetype::Scavenger,
            seed: None,
            save_dir: PathBuf::from(DEFAULT_SAVE_DIR),
            new_game: false,
            show_help: false,
        }
    }
}

impl AppConfig {
    /// Build the configuration from the process environment, then let the
    /// command-line flags override it.
    pub fn load(args: &[String]) -> Result<Self> {
        let mut config = Self::from_env(|key| std::env::var(key).ok())?;
        config.apply_args(args)?;
        Ok(config)
    }

    fn from_env(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(dir) = var(SAVE_DIR_VAR).filter(|d| !d.trim().is_empty()) {
            config.save_dir = PathBuf::from(dir);
        }
        if let Some(seed) = var(SEED_VAR) {
            config.seed = Some(parse_seed(&seed).with_context(|| format!("invalid {SEED_VAR}"))?);
        }

        Ok(config)
    }

    fn apply_args(&mut self, args: &[String]) -> Result<()> {
        let mut iter = args.iter().skip(1);

        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--name" => self.name = value_for(arg, iter.next())?.to_string(),
                "--class" => {
                    let class = value_for(arg, iter.next())?;
                    self.archetype = match Archetype::parse(class) {
                        Some(archetype) => archetype,
                        None => bail!("unknown class '{class}' (expected scavenger, soldier or medic)"),
                    };
                }
                "--seed" => self.seed = Some(parse_seed(value_for(arg, iter.next())?)?),
                "--save-dir" => self.save_dir = PathBuf::from(value_for(arg, iter.next())?),
                "--new" => self.new_game = true,
                "-h" | "--help" => self.show_help = true,
                other => bail!("unknown argument '{other}'"),
            }
        }

        Ok(())
    }
}

fn value_for<'a>(flag: &str, value: Option<&'a String>) -> Result<&'a str> {
    match value {
        Some(v) => Ok(v.as_str()),
        None => bail!("{flag} needs a value"),
    }
}

fn parse_seed(s: &str) -> Result<u64> {
    s.trim()
        .parse()
        .with_context(|| format!("'{s}' is not a valid seed"))
}

pub fn print_help() {
    println!("El Yermo Eterno - a text survival RPG");
    println!();
    println!("USAGE:");
    println!("  wasteland [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("  -h, --help          Show this help message");
    println!("  --name <NAME>       Survivor name for a new game (default: {DEFAULT_NAME})");
    println!("  --class <CLASS>     scavenger, soldier or medic (default: scavenger)");
    println!("  --seed <SEED>       Fix the dice for a reproducible run");
    println!("  --save-dir <DIR>    Where the saved game lives (default: {DEFAULT_SAVE_DIR})");
    println!("  --new               Discard the saved game and start over");
    println!();
    println!("ENVIRONMENT:");
    println!("  {SAVE_DIR_VAR}   Default for --save-dir");
    println!("  {SEED_VAR}       Default for --seed");
    println!("  RUST_LOG             Log filter (default: wasteland=info,wasteland_core=info)");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("wasteland")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_env(|_| None).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.save_dir, PathBuf::from("saves"));
    }

    #[test]
    fn test_env_then_flags() {
        let mut config = AppConfig::from_env(|key| match key {
            SAVE_DIR_VAR => Some("/tmp/yermo".into()),
            SEED_VAR => Some("7".into()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.seed, Some(7));

        config
            .apply_args(&args(&["--seed", "42", "--class", "médico", "--name", "Ana", "--new"]))
            .unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.archetype, Archetype::Medic);
        assert_eq!(config.name, "Ana");
        assert_eq!(config.save_dir, PathBuf::from("/tmp/yermo"));
        assert!(config.new_game);
    }

    #[test]
    fn test_bad_input_is_an_error() {
        assert!(AppConfig::from_env(|_| Some("many".into())).is_err());

        let mut config = AppConfig::default();
        assert!(config.apply_args(&args(&["--class", "wizard"])).is_err());
        assert!(config.apply_args(&args(&["--name"])).is_err());
        assert!(config.apply_args(&args(&["--fly"])).is_err());
    }
}
