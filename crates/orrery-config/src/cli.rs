//! Command-line argument parsing for the Orrery viewer.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Orrery viewer command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(name = "orrery", about = "Procedural solar-system and deep-space viewer")]
pub struct CliArgs {
    /// Window width.
    #[arg(long)]
    pub width: Option<u32>,

    /// Window height.
    #[arg(long)]
    pub height: Option<u32>,

    /// Seed for galaxy and starfield generation.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of spiral galaxies to generate.
    #[arg(long)]
    pub galaxies: Option<u32>,

    /// Camera forward drift speed in units per second (0 disables drift).
    #[arg(long)]
    pub drift_speed: Option<f32>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(w) = args.width {
            self.window.width = w;
        }
        if let Some(h) = args.height {
            self.window.height = h;
        }
        if let Some(seed) = args.seed {
            self.scene.seed = seed;
        }
        if let Some(count) = args.galaxies {
            self.scene.galaxy_count = count;
        }
        if let Some(speed) = args.drift_speed {
            self.camera.drift_speed = speed;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
