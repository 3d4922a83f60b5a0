//! Client startup: turns a [`Config`] into the loaded client data.

use std::time::{SystemTime, UNIX_EPOCH};

use tracing::{info, warn};
use wildhold_biome::{BiomeManifest, BiomeRegistry};
use wildhold_config::Config;
use wildhold_materials::{ShaderLibrary, ShaderMaterialFactory};
use wildhold_player::{PlayerId, PlayerProfile};

use crate::error::AppError;
use crate::palette::BiomePalette;
use crate::platform::PlatformDirs;

/// Everything the client holds after startup.
pub struct ClientContext {
    pub config: Config,
    pub biomes: BiomeRegistry,
    pub palette: BiomePalette,
    /// The local player. Mutated in place for the rest of the session.
    pub profile: PlayerProfile,
}

impl ClientContext {
    /// Load biomes, build their materials, and create the offline profile.
    ///
    /// A missing biome manifest is created from the built-in set.
    ///
    /// # Errors
    ///
    /// Returns [`AppError`] if the manifest cannot be read or is invalid, or if
    /// the configured shaders are not available.
    pub fn bootstrap(config: Config, dirs: &PlatformDirs) -> Result<Self, AppError> {
        let manifest_path = config.assets.biome_manifest_path(&dirs.data_dir);
        let manifest = BiomeManifest::load_or_create(&manifest_path)?;
        let biomes = BiomeRegistry::from_manifest(manifest)?;
        if biomes.is_empty() {
            warn!("Biome manifest {} defines no biomes", manifest_path.display());
        }

        let shaders = ShaderLibrary::with_builtin_shaders();
        let factory = ShaderMaterialFactory::new(
            &shaders,
            &config.render.surface_shader,
            &config.render.outline_shader,
        )?
        .with_outline_width(config.render.outline_width);
        let palette = BiomePalette::build(&biomes, &factory);
        info!("Built materials for {} biomes", palette.len());

        let profile = PlayerProfile::new(
            PlayerId(config.session.offline_player_id),
            config.session.offline_username.clone(),
            unix_timestamp(),
        );
        info!(
            player = %profile.id(),
            username = %profile.username,
            "Created offline profile"
        );

        Ok(Self {
            config,
            biomes,
            palette,
            profile,
        })
    }
}

/// Seconds since the Unix epoch as text. Profile timestamps are opaque, so
/// the format only needs to be stable.
fn unix_timestamp() -> String {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
        .to_string()
}
