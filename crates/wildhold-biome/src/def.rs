//! Biome definition: describes the properties of a single biome type.

use std::collections::BTreeSet;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use wildhold_assets::{AssetRef, Color};

/// Legal range for [`BiomeDef::rarity`].
pub const RARITY_RANGE: RangeInclusive<f32> = 0.0..=1.0;

/// Legal range for [`BiomeDef::movement_speed_modifier`].
pub const MOVEMENT_SPEED_RANGE: RangeInclusive<f32> = 0.1..=2.0;

/// Errors returned by [`BiomeDef::validated`].
#[derive(Debug, Error, PartialEq)]
pub enum BiomeError {
    /// The biome name must not be empty.
    #[error("biome name must not be empty")]
    EmptyName,

    /// Rarity must lie in `[0.0, 1.0]`.
    #[error("biome '{name}': rarity {value} outside [0, 1]")]
    RarityOutOfRange { name: String, value: f32 },

    /// A color component is NaN or infinite.
    #[error("biome '{name}': color has non-finite component")]
    NonFiniteColor { name: String },

    /// Movement speed modifier must lie in `[0.1, 2.0]`.
    #[error("biome '{name}': movement speed modifier {value} outside [0.1, 2]")]
    MovementSpeedOutOfRange { name: String, value: f32 },

    /// `min_cluster_size` exceeds `max_cluster_size`.
    #[error("biome '{name}': min cluster size {min} exceeds max cluster size {max}")]
    ClusterSizeInverted { name: String, min: u32, max: u32 },
}

/// Full descriptor for a biome type.
///
/// Loaded from data files and treated as immutable afterwards. Use
/// [`BiomeDef::validated`] before handing a definition to consumers; the
/// registry does this on insert.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BiomeDef {
    /// Unique biome name (e.g., "pine_forest").
    pub name: String,
    /// Representative color, used on the minimap and for tinting.
    pub color: Color,
    /// Representative texture.
    #[serde(default)]
    pub texture: Option<AssetRef>,
    /// Relative spawn weight in `[0.0, 1.0]`.
    pub rarity: f32,
    /// Smallest contiguous patch, in tiles.
    pub min_cluster_size: u32,
    /// Largest contiguous patch, in tiles.
    pub max_cluster_size: u32,
    /// Multiplier applied to unit movement speed, in `[0.1, 2.0]`.
    pub movement_speed_modifier: f32,
    /// Material applied to the ground surface.
    #[serde(default)]
    pub surface_material: Option<AssetRef>,
    /// Decoration props scattered over the biome.
    #[serde(default)]
    pub decorations: BTreeSet<AssetRef>,
    pub walkable: bool,
    pub buildable: bool,
    /// Discrete terrain height band.
    #[serde(default)]
    pub elevation_level: i32,
    #[serde(default)]
    pub description: String,
}

impl Default for BiomeDef {
    fn default() -> Self {
        Self {
            name: String::from("default"),
            color: Color::WHITE,
            texture: None,
            rarity: 0.5,
            min_cluster_size: 1,
            max_cluster_size: 1,
            movement_speed_modifier: 1.0,
            surface_material: None,
            decorations: BTreeSet::new(),
            walkable: true,
            buildable: true,
            elevation_level: 0,
            description: String::new(),
        }
    }
}

impl BiomeDef {
    /// Checks range constraints and clamps the color to `[0.0, 1.0]`.
    ///
    /// NaN values fail the range checks, and a color with a NaN or infinite
    /// component is rejected rather than clamped.
    ///
    /// # Errors
    ///
    /// Returns the first [`BiomeError`] found.
    pub fn validated(mut self) -> Result<Self, BiomeError> {
        if self.name.is_empty() {
            return Err(BiomeError::EmptyName);
        }
        if !RARITY_RANGE.contains(&self.rarity) {
            return Err(BiomeError::RarityOutOfRange {
                name: self.name,
                value: self.rarity,
            });
        }
        if !MOVEMENT_SPEED_RANGE.contains(&self.movement_speed_modifier) {
            return Err(BiomeError::MovementSpeedOutOfRange {
                name: self.name,
                value: self.movement_speed_modifier,
            });
        }
        if !self.color.is_finite() {
            return Err(BiomeError::NonFiniteColor { name: self.name });
        }
        if self.min_cluster_size > self.max_cluster_size {
            return Err(BiomeError::ClusterSizeInverted {
                name: self.name,
                min: self.min_cluster_size,
                max: self.max_cluster_size,
            });
        }

        self.color = self.color.clamped();
        Ok(self)
    }

    /// Whether units can both walk on and build in this biome.
    pub fn is_settleable(&self) -> bool {
        self.walkable && self.buildable
    }
}

/// Built-in biome set written when no manifest exists yet.
pub fn default_biomes() -> Vec<BiomeDef> {
    let decorations = |refs: &[&str]| -> BTreeSet<AssetRef> {
        refs.iter().copied().map(AssetRef::from).collect()
    };

    vec![
        BiomeDef {
            name: "grassland".to_string(),
            color: Color::rgb(0.45, 0.72, 0.30),
            texture: Some(AssetRef::from("textures/grass")),
            rarity: 0.8,
            min_cluster_size: 8,
            max_cluster_size: 40,
            movement_speed_modifier: 1.0,
            surface_material: Some(AssetRef::from("materials/grass")),
            decorations: decorations(&["props/flowers", "props/tall_grass"]),
            walkable: true,
            buildable: true,
            elevation_level: 0,
            description: "Open meadows, easy to cross and build on.".to_string(),
        },
        BiomeDef {
            name: "forest".to_string(),
            color: Color::rgb(0.13, 0.42, 0.18),
            texture: Some(AssetRef::from("textures/forest_floor")),
            rarity: 0.6,
            min_cluster_size: 6,
            max_cluster_size: 30,
            movement_speed_modifier: 0.7,
            surface_material: Some(AssetRef::from("materials/forest_floor")),
            decorations: decorations(&["props/pine_tree", "props/oak_tree", "props/mushroom"]),
            walkable: true,
            buildable: false,
            elevation_level: 0,
            description: "Dense woodland. Slow going, rich in wood.".to_string(),
        },
        BiomeDef {
            name: "desert".to_string(),
            color: Color::rgb(0.87, 0.78, 0.50),
            texture: Some(AssetRef::from("textures/sand")),
            rarity: 0.3,
            min_cluster_size: 10,
            max_cluster_size: 60,
            movement_speed_modifier: 0.8,
            surface_material: Some(AssetRef::from("materials/sand")),
            decorations: decorations(&["props/cactus", "props/bleached_bones"]),
            walkable: true,
            buildable: true,
            elevation_level: 0,
            description: "Dry dunes with sparse cover.".to_string(),
        },
        BiomeDef {
            name: "mountain".to_string(),
            color: Color::rgb(0.52, 0.50, 0.48),
            texture: Some(AssetRef::from("textures/rock")),
            rarity: 0.25,
            min_cluster_size: 4,
            max_cluster_size: 20,
            movement_speed_modifier: 0.4,
            surface_material: Some(AssetRef::from("materials/rock")),
            decorations: decorations(&["props/boulder", "props/crystal_vein"]),
            walkable: true,
            buildable: false,
            elevation_level: 2,
            description: "High rocky ground. Stone and gems, little else.".to_string(),
        },
        BiomeDef {
            name: "lake".to_string(),
            color: Color::rgb(0.18, 0.40, 0.78),
            texture: Some(AssetRef::from("textures/water")),
            rarity: 0.2,
            min_cluster_size: 3,
            max_cluster_size: 25,
            movement_speed_modifier: 0.1,
            surface_material: Some(AssetRef::from("materials/water")),
            decorations: decorations(&["props/lily_pad"]),
            walkable: false,
            buildable: false,
            elevation_level: -1,
            description: "Open water.".to_string(),
        },
    ]
}
