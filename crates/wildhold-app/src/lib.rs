//! Wildhold client bootstrap.
//!
//! Resolves platform directories, loads the biome manifest, builds per-biome
//! materials, and creates the local player profile.

pub mod bootstrap;
pub mod error;
pub mod palette;
pub mod platform;

pub use bootstrap::ClientContext;
pub use error::AppError;
pub use palette::{BiomeMaterials, BiomePalette};
pub use platform::PlatformDirs;
