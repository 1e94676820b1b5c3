//! Binary entry point for the Orrery viewer.

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use orrery_config::{CliArgs, Config, ConfigSource};

fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("orrery")
}

fn main() {
    let args = CliArgs::parse();
    let config_dir = args.config.clone().unwrap_or_else(default_config_dir);

    let (mut config, source) = match Config::load_or_create(&config_dir) {
        Ok((config, source)) => (config, Some(source)),
        Err(e) => {
            eprintln!("failed to load config from {}: {e}", config_dir.display());
            eprintln!("continuing with defaults");
            (Config::default(), None)
        }
    };
    config.apply_cli_overrides(&args);

    orrery_log::init_logging(
        Some(&config_dir.join("logs")),
        cfg!(debug_assertions),
        Some(&config),
    );

    match &source {
        Some(ConfigSource::Loaded(path)) => info!("loaded config from {}", path.display()),
        Some(ConfigSource::CreatedDefault(path)) => {
            info!("created default config at {}", path.display());
        }
        None => info!("running with built-in default config"),
    }

    info!(
        "starting orrery: seed {}, {} galaxies, {}x{}",
        config.scene.seed, config.scene.galaxy_count, config.window.width, config.window.height
    );

    if let Err(e) = orrery_app::run(config) {
        error!("event loop error: {e}");
        std::process::exit(1);
    }
}
