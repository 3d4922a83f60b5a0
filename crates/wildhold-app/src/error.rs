//! Application-level error type.

use wildhold_biome::{BiomeRegistryError, ManifestError};
use wildhold_config::ConfigError;
use wildhold_materials::MaterialError;

/// Errors that abort client startup.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The OS did not provide a configuration directory.
    #[error("could not determine OS configuration directory")]
    NoConfigDir,

    /// Directory creation or other filesystem failure.
    #[error("platform I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("biome manifest: {0}")]
    Manifest(#[from] ManifestError),

    #[error("biome registry: {0}")]
    Biomes(#[from] BiomeRegistryError),

    #[error("materials: {0}")]
    Materials(#[from] MaterialError),
}
