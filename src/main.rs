use std::path::PathBuf;

use clap::Parser;

use mathpad::config::{Config, ConfigStore};
use mathpad::logging;
use mathpad::ui;

/// Terminal keypad calculator backed by a remote evaluation service.
#[derive(Debug, Parser)]
#[command(name = "mathpad", version, about)]
struct Cli {
    /// Path to the config file (defaults to the platform config dir).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Evaluation service URL, overriding the configured one.
    #[arg(long)]
    endpoint: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_tracing();

    let path = cli.config.unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&path)?;
    if let Some(endpoint) = cli.endpoint {
        config.evaluator.base_url = endpoint;
        config.validate()?;
    }
    tracing::debug!(path = %path.display(), endpoint = %config.evaluator.base_url, "configuration loaded");

    let store = ConfigStore::new(config, path);
    ui::run(store)?;
    Ok(())
}
