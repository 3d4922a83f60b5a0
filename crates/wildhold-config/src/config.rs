//! Configuration structs with defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// File name of the persisted configuration inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.ron";

/// Top-level client configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Asset locations.
    pub assets: AssetConfig,
    /// Material and shader settings.
    pub render: RenderConfig,
    /// Local (offline) session settings.
    pub session: SessionConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Asset location configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AssetConfig {
    /// Override for the data directory. `None` uses the platform default.
    pub data_dir: Option<PathBuf>,
    /// Biome manifest path, relative to the data directory unless absolute.
    pub biome_manifest: PathBuf,
}

/// Material and shader configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    /// Shader used for biome surface materials.
    pub surface_shader: String,
    /// Shader used for outline/highlight materials.
    pub outline_shader: String,
    /// Outline thickness in world units.
    pub outline_width: f32,
}

/// Offline session configuration.
///
/// An account service normally hands out player identity; without one the
/// client creates a local profile from these values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SessionConfig {
    /// Player id for the offline profile.
    pub offline_player_id: u64,
    /// Display name for the offline profile.
    pub offline_username: String,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level filter (e.g., "debug", "info", "warn,wildhold_biome=debug").
    pub log_level: String,
    /// Also write structured JSON logs to the log directory.
    pub log_to_file: bool,
}

// --- Default implementations ---

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            biome_manifest: PathBuf::from("biomes.ron"),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            surface_shader: "surface_lit".to_string(),
            outline_shader: "outline_unlit".to_string(),
            outline_width: 0.03,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            offline_player_id: 1,
            offline_username: "player".to_string(),
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_to_file: cfg!(debug_assertions),
        }
    }
}

impl AssetConfig {
    /// Resolve the biome manifest path against `data_dir`.
    pub fn biome_manifest_path(&self, data_dir: &Path) -> PathBuf {
        if self.biome_manifest.is_absolute() {
            self.biome_manifest.clone()
        } else {
            data_dir.join(&self.biome_manifest)
        }
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if config_path.exists() {
            let config = read_config(&config_path)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let write_err = |source| ConfigError::Write {
            path: config_path.clone(),
            source,
        };

        std::fs::create_dir_all(config_dir).map_err(write_err)?;

        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::Serialize)?;

        std::fs::write(&config_path, serialized).map_err(write_err)?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let new_config = read_config(&config_path)?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}

fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    ron::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
