//! Configuration structs with sensible defaults and RON persistence.
//!
//! Defaults reproduce the canonical scene: a nine-body solar system with one
//! moon, 200 spiral galaxies of 1000 stars each, and a 2500-point starfield.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Where a loaded configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Parsed from an existing `config.ron`.
    Loaded(PathBuf),
    /// No file existed; defaults were written out.
    CreatedDefault(PathBuf),
}

/// Top-level viewer configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Window settings.
    pub window: WindowConfig,
    /// Procedural scene generation settings.
    pub scene: SceneConfig,
    /// Camera feel and motion settings.
    pub camera: CameraConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Window configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    /// Window width in logical pixels.
    pub width: u32,
    /// Window height in logical pixels.
    pub height: u32,
    /// Window title.
    pub title: String,
    /// Enable vsync (PresentMode::Fifo).
    pub vsync: bool,
}

/// Procedural scene generation configuration.
///
/// Everything here feeds seeded generators, so the same config always
/// produces the same galaxy field and starfield.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SceneConfig {
    /// Seed for galaxy and starfield generation.
    pub seed: u64,
    /// Number of spiral galaxy instances scattered through deep space.
    pub galaxy_count: u32,
    /// Stars per spiral galaxy point cloud.
    pub stars_per_galaxy: u32,
    /// Number of spiral arms per galaxy.
    pub spiral_arms: u32,
    /// Number of background starfield points.
    pub starfield_stars: u32,
}

/// Camera configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    /// Initial orbit distance from the look target.
    pub orbit_distance: f32,
    /// Constant forward drift along +Z in units per second. 0 disables drift.
    pub drift_speed: f32,
    /// Radians of orbit rotation per pixel of mouse drag.
    pub drag_sensitivity: f32,
    /// Orbit distance change per scroll line.
    pub scroll_sensitivity: f32,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: "Orrery".to_string(),
            vsync: true,
        }
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            galaxy_count: 200,
            stars_per_galaxy: 1000,
            spiral_arms: 4,
            starfield_stars: 2500,
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            orbit_distance: 30.0,
            drift_speed: 0.1,
            drag_sensitivity: 0.01,
            scroll_sensitivity: 0.5,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Clamp values a hand-edited file could set that would break scene
    /// generation.
    pub fn sanitize(&mut self) {
        if self.scene.spiral_arms == 0 {
            log::warn!("scene.spiral_arms must be at least 1, clamping to 1");
            self.scene.spiral_arms = 1;
        }
    }

    /// Load config from the given directory, or create a default config file.
    ///
    /// The returned [`ConfigSource`] says which happened, so callers can
    /// report provenance once logging is up.
    pub fn load_or_create(config_dir: &Path) -> Result<(Self, ConfigSource), ConfigError> {
        let config_path = config_dir.join("config.ron");

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let mut config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            config.sanitize();
            Ok((config, ConfigSource::Loaded(config_path)))
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            Ok((config, ConfigSource::CreatedDefault(config_path)))
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join("config.ron");
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join("config.ron");
        let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
        let mut new_config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
        new_config.sanitize();

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_serializes() {
        let config = Config::default();
        let ron_str =
            ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::new().depth_limit(3))
                .unwrap();
        assert!(!ron_str.is_empty());
        assert!(ron_str.contains("width: 800"));
        assert!(ron_str.contains("galaxy_count: 200"));
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let ron_str = ron::to_string(&config).unwrap();
        let deserialized: Config = ron::from_str(&ron_str).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_missing_field_uses_default() {
        // Config missing the `camera` section entirely
        let ron_str = "(window: (), scene: (), debug: ())";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config.camera, CameraConfig::default());
    }

    #[test]
    fn test_extra_field_ignored() {
        let ron_str = "(future_setting: true)";
        let result: Result<Config, _> = ron::from_str(ron_str);
        assert!(result.is_ok());
    }

    #[test]
    fn test_canonical_scene_defaults() {
        let scene = SceneConfig::default();
        assert_eq!(scene.galaxy_count, 200);
        assert_eq!(scene.stars_per_galaxy, 1000);
        assert_eq!(scene.spiral_arms, 4);
        assert_eq!(scene.starfield_stars, 2500);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.window.width = 1280;
        config.window.height = 720;
        config.scene.seed = 7;

        config.save(dir.path()).unwrap();
        let (loaded, source) = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, loaded);
        assert_eq!(
            source,
            ConfigSource::Loaded(dir.path().join("config.ron"))
        );
    }

    #[test]
    fn test_load_or_create_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let (config, source) = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(
            source,
            ConfigSource::CreatedDefault(dir.path().join("config.ron"))
        );
        assert!(dir.path().join("config.ron").exists());
    }

    #[test]
    fn test_zero_spiral_arms_clamped_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.scene.spiral_arms = 0;
        config.save(dir.path()).unwrap();

        let (loaded, _) = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(loaded.scene.spiral_arms, 1);
    }

    #[test]
    fn test_zero_spiral_arms_clamped_on_reload() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();

        let mut edited = config.clone();
        edited.scene.spiral_arms = 0;
        edited.save(dir.path()).unwrap();

        let reloaded = config.reload(dir.path()).unwrap().unwrap();
        assert_eq!(reloaded.scene.spiral_arms, 1);
    }

    #[test]
    fn test_reload_detects_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();

        let mut modified = config.clone();
        modified.scene.galaxy_count = 50;
        modified.save(dir.path()).unwrap();

        let result = config.reload(dir.path()).unwrap();
        assert!(result.is_some());
        assert_eq!(result.unwrap().scene.galaxy_count, 50);
    }

    #[test]
    fn test_reload_no_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();

        let result = config.reload(dir.path()).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_invalid_ron_produces_error() {
        let result: Result<Config, _> = ron::from_str("{{not valid}}");
        assert!(result.is_err());
    }
}
