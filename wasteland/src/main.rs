//! El Yermo Eterno terminal front end.
//!
//! ```bash
//! cargo run -p wasteland -- --name Marta --class medic
//! ```

mod config;
mod headless;

use anyhow::Result;
use config::AppConfig;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "wasteland=info,wasteland_core=info";

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let config = AppConfig::load(&args)?;

    if config.show_help {
        config::print_help();
        return Ok(());
    }

    tracing::debug!(?config, "starting");
    headless::run(&config)
}
