//! RON manifest holding the biome definitions for a game.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::def::{BiomeDef, default_biomes};

/// Errors returned while reading or writing a biome manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// I/O error reading or writing the manifest file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// RON deserialization error.
    #[error("ron parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),

    /// RON serialization error.
    #[error("ron serialize error: {0}")]
    Serialize(#[from] ron::Error),
}

/// Top-level manifest: `(biomes: [ ... ])`.
///
/// Parsing does not validate; build a [`BiomeRegistry`](crate::BiomeRegistry)
/// from it to get checked definitions.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BiomeManifest {
    pub biomes: Vec<BiomeDef>,
}

impl BiomeManifest {
    /// Manifest containing [`default_biomes`].
    pub fn builtin() -> Self {
        Self {
            biomes: default_biomes(),
        }
    }

    /// Parse a manifest from a RON string.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::Parse`] on malformed RON.
    pub fn from_ron_str(contents: &str) -> Result<Self, ManifestError> {
        Ok(ron::from_str(contents)?)
    }

    /// Load a manifest file.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError`] on I/O or parse failures.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let contents = std::fs::read_to_string(path)?;
        let manifest = Self::from_ron_str(&contents)?;
        info!(
            "Loaded {} biome definitions from {}",
            manifest.biomes.len(),
            path.display()
        );
        Ok(manifest)
    }

    /// Load the manifest at `path`, or write the built-in one there first.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError`] on I/O, parse, or serialize failures.
    pub fn load_or_create(path: &Path) -> Result<Self, ManifestError> {
        if path.exists() {
            Self::load(path)
        } else {
            let manifest = Self::builtin();
            manifest.save(path)?;
            info!("Created default biome manifest at {}", path.display());
            Ok(manifest)
        }
    }

    /// Write the manifest as pretty RON, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError`] on I/O or serialize failures.
    pub fn save(&self, path: &Path) -> Result<(), ManifestError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(4)
            .enumerate_arrays(false);
        let serialized = ron::ser::to_string_pretty(self, pretty)?;
        std::fs::write(path, serialized)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BiomeError;
    use wildhold_assets::{AssetRef, Color};

    const MANIFEST: &str = r#"
        // Two hand-authored biomes.
        (
            biomes: [
                (
                    name: "tundra",
                    color: (r: 0.85, g: 0.9, b: 0.95),
                    texture: Some("textures/snow"),
                    rarity: 0.15,
                    min_cluster_size: 5,
                    max_cluster_size: 18,
                    movement_speed_modifier: 0.6,
                    surface_material: Some("materials/snow"),
                    decorations: ["props/ice_spike", "props/dead_shrub"],
                    walkable: true,
                    buildable: true,
                    elevation_level: 1,
                    description: "Frozen plains.",
                ),
                (
                    name: "swamp",
                    color: (r: 0.3, g: 0.35, b: 0.2, a: 1.0),
                    rarity: 0.4,
                    min_cluster_size: 2,
                    max_cluster_size: 12,
                    movement_speed_modifier: 0.5,
                    walkable: true,
                    buildable: false,
                ),
            ],
        )
    "#;

    #[test]
    fn test_parse_manifest() {
        let manifest = BiomeManifest::from_ron_str(MANIFEST).unwrap();
        assert_eq!(manifest.biomes.len(), 2);

        let tundra = &manifest.biomes[0];
        assert_eq!(tundra.color, Color::rgb(0.85, 0.9, 0.95));
        assert_eq!(tundra.texture, Some(AssetRef::from("textures/snow")));
        assert!(tundra.decorations.contains(&AssetRef::from("props/ice_spike")));
        assert_eq!(tundra.elevation_level, 1);
    }

    #[test]
    fn test_optional_fields_default() {
        let manifest = BiomeManifest::from_ron_str(MANIFEST).unwrap();
        let swamp = &manifest.biomes[1];
        assert!(swamp.texture.is_none());
        assert!(swamp.surface_material.is_none());
        assert!(swamp.decorations.is_empty());
        assert_eq!(swamp.elevation_level, 0);
        assert!(swamp.description.is_empty());
    }

    #[test]
    fn test_duplicate_decorations_collapse() {
        let src = r#"(biomes: [(
            name: "scrub", color: (r: 0.5, g: 0.5, b: 0.3), rarity: 0.5,
            min_cluster_size: 1, max_cluster_size: 2, movement_speed_modifier: 1.0,
            decorations: ["props/bush", "props/bush"],
            walkable: true, buildable: true,
        )])"#;
        let manifest = BiomeManifest::from_ron_str(src).unwrap();
        assert_eq!(manifest.biomes[0].decorations.len(), 1);
    }

    #[test]
    fn test_nan_color_parses_but_fails_validation() {
        let src = r#"(biomes: [(
            name: "haze", color: (r: NaN, g: 0.5, b: 0.5), rarity: 0.5,
            min_cluster_size: 1, max_cluster_size: 2, movement_speed_modifier: 1.0,
            walkable: true, buildable: true,
        )])"#;
        let manifest = BiomeManifest::from_ron_str(src).unwrap();
        assert!(manifest.biomes[0].color.r.is_nan());

        let result = manifest.biomes[0].clone().validated();
        assert!(matches!(result, Err(BiomeError::NonFiniteColor { name }) if name == "haze"));
    }

    #[test]
    fn test_malformed_manifest_is_parse_error() {
        let result = BiomeManifest::from_ron_str("(biomes: [(name: 3)])");
        assert!(matches!(result, Err(ManifestError::Parse(_))));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("biomes.ron");

        let manifest = BiomeManifest::builtin();
        manifest.save(&path).unwrap();
        let loaded = BiomeManifest::load(&path).unwrap();
        assert_eq!(loaded, manifest);
    }

    #[test]
    fn test_load_or_create_writes_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("biomes.ron");

        let created = BiomeManifest::load_or_create(&path).unwrap();
        assert!(path.exists());
        assert_eq!(created, BiomeManifest::builtin());

        let reloaded = BiomeManifest::load_or_create(&path).unwrap();
        assert_eq!(reloaded, created);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = BiomeManifest::load(&dir.path().join("absent.ron"));
        assert!(matches!(result, Err(ManifestError::Io(_))));
    }
}
