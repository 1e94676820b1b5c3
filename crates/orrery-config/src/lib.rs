//! Configuration system for the Orrery viewer.
//!
//! Provides runtime-configurable settings that persist to disk as RON files,
//! with CLI overrides via clap. Every scene parameter the viewer uses
//! (window size, random seed, galaxy counts, camera feel) has a default that
//! reproduces the canonical scene.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{CameraConfig, Config, ConfigSource, DebugConfig, SceneConfig, WindowConfig};
pub use error::ConfigError;
