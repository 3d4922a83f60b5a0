//! Biome configuration: the declarative terrain-type schema consumed by map
//! generation and rendering.
//!
//! Biomes are authored in a RON manifest, validated when loaded, and stored in
//! a [`BiomeRegistry`] with lookup by id or name. Generation logic lives
//! elsewhere; this crate only owns the data.

mod def;
mod manifest;
mod registry;

pub use def::{BiomeDef, BiomeError, MOVEMENT_SPEED_RANGE, RARITY_RANGE, default_biomes};
pub use manifest::{BiomeManifest, ManifestError};
pub use registry::{BiomeId, BiomeRegistry, BiomeRegistryError};
