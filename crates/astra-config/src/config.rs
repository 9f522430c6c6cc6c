//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level viewer configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Scene and camera settings.
    pub scene: SceneConfig,
    /// Detail-view terrain settings.
    pub terrain: TerrainConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Scene and camera configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SceneConfig {
    /// Keyboard pan speed at the reference camera distance, in scene units
    /// per frame.
    pub base_pan_speed: f64,
    /// Exaggeration factor applied to body radii so bodies stay visible at
    /// system scale.
    pub body_size_factor: f64,
    /// Smallest displayed body radius in scene units.
    pub min_scaled_radius: f64,
    /// Orbit-controls distance limit in scene units (AU).
    pub max_camera_distance: f64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            base_pan_speed: 0.5,
            body_size_factor: 50_000.0,
            min_scaled_radius: 0.01,
            max_camera_distance: 100.0,
        }
    }
}

/// Detail-view terrain configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TerrainConfig {
    /// Heightfield resolution per axis. Must stay in the low hundreds to
    /// keep generation inside a frame budget.
    pub resolution: u32,
    /// Number of topographic contour bands.
    pub topographic_lines: u32,
    /// Contour line half-width in band-fraction units.
    pub line_width: f32,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            resolution: 128,
            topographic_lines: 20,
            line_width: 0.02,
        }
    }
}

/// Debug/development configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

impl Config {
    /// Default config directory (`<user config dir>/astra`), if the
    /// platform exposes one.
    pub fn default_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("astra"))
    }

    /// Load config from the given directory, or create a default config
    /// file there.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join("config.ron");

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            tracing::info!("loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            tracing::info!("created default config at {}", config_path.display());
            Ok(config)
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_viewer_constants() {
        let config = Config::default();
        assert_eq!(config.scene.base_pan_speed, 0.5);
        assert_eq!(config.scene.body_size_factor, 50_000.0);
        assert_eq!(config.scene.max_camera_distance, 100.0);
        assert_eq!(config.terrain.resolution, 128);
        assert_eq!(config.terrain.topographic_lines, 20);
        assert!(config.debug.log_level.is_empty());
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.terrain.resolution = 64;
        config.debug.log_level = "debug".to_string();
        config.save(dir.path()).unwrap();

        let loaded = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_or_create_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert!(dir.path().join("config.ron").exists());
    }

    #[test]
    fn test_partial_file_fills_missing_fields() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("config.ron"),
            "(terrain: (resolution: 32))",
        )
        .unwrap();

        let config = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config.terrain.resolution, 32);
        assert_eq!(config.terrain.topographic_lines, 20);
        assert_eq!(config.scene, SceneConfig::default());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.ron"), "(scene: oops").unwrap();
        assert!(matches!(
            Config::load_or_create(dir.path()),
            Err(ConfigError::ParseError(_))
        ));
    }
}
