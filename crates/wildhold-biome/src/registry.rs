//! Biome registry: maps [`BiomeId`] to validated [`BiomeDef`]s with name lookup.

use hashbrown::HashMap;
use tracing::debug;

use crate::{BiomeDef, BiomeError, BiomeManifest};

/// Unique identifier for a registered biome, dense from 0 in insertion order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BiomeId(pub u16);

/// Errors that can occur when registering biomes.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum BiomeRegistryError {
    /// A biome with this name is already registered.
    #[error("duplicate biome name: {0}")]
    DuplicateName(String),

    /// The definition failed validation.
    #[error(transparent)]
    Invalid(#[from] BiomeError),

    /// The registry already holds `u16::MAX + 1` biomes.
    #[error("biome registry is full")]
    Full,
}

/// Stores all registered biome definitions with O(1) lookup by ID.
///
/// Every stored definition has passed [`BiomeDef::validated`].
pub struct BiomeRegistry {
    biomes: Vec<BiomeDef>,
    name_to_id: HashMap<String, BiomeId>,
}

impl BiomeRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            biomes: Vec::new(),
            name_to_id: HashMap::new(),
        }
    }

    /// Validates and registers every biome in the manifest, in order.
    ///
    /// # Errors
    ///
    /// Stops at the first definition that is invalid or duplicates a name.
    pub fn from_manifest(manifest: BiomeManifest) -> Result<Self, BiomeRegistryError> {
        let mut registry = Self::new();
        for def in manifest.biomes {
            registry.register(def)?;
        }
        Ok(registry)
    }

    /// Validates and registers a biome definition, returning its [`BiomeId`].
    ///
    /// # Errors
    ///
    /// Returns [`BiomeRegistryError::Invalid`] if validation fails and
    /// [`BiomeRegistryError::DuplicateName`] if the name is taken.
    pub fn register(&mut self, def: BiomeDef) -> Result<BiomeId, BiomeRegistryError> {
        let def = def.validated()?;
        if self.name_to_id.contains_key(&def.name) {
            return Err(BiomeRegistryError::DuplicateName(def.name));
        }
        let index = u16::try_from(self.biomes.len()).map_err(|_| BiomeRegistryError::Full)?;
        let id = BiomeId(index);
        debug!(biome = %def.name, id = id.0, "registered biome");
        self.name_to_id.insert(def.name.clone(), id);
        self.biomes.push(def);
        Ok(id)
    }

    /// Returns the definition for the given biome ID, if registered.
    pub fn get(&self, id: BiomeId) -> Option<&BiomeDef> {
        self.biomes.get(id.0 as usize)
    }

    /// Looks up a biome ID by name.
    pub fn lookup_by_name(&self, name: &str) -> Option<BiomeId> {
        self.name_to_id.get(name).copied()
    }

    /// Iterates `(id, def)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (BiomeId, &BiomeDef)> {
        self.biomes
            .iter()
            .enumerate()
            .map(|(i, def)| (BiomeId(i as u16), def))
    }

    /// Returns the number of registered biomes.
    pub fn len(&self) -> usize {
        self.biomes.len()
    }

    /// Returns `true` if no biomes are registered.
    pub fn is_empty(&self) -> bool {
        self.biomes.is_empty()
    }
}

impl Default for BiomeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn biome(name: &str) -> BiomeDef {
        BiomeDef {
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_register_assigns_sequential_ids() {
        let mut registry = BiomeRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.register(biome("a")).unwrap(), BiomeId(0));
        assert_eq!(registry.register(biome("b")).unwrap(), BiomeId(1));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut registry = BiomeRegistry::new();
        registry.register(biome("forest")).unwrap();
        assert_eq!(
            registry.register(biome("forest")),
            Err(BiomeRegistryError::DuplicateName("forest".to_string()))
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_invalid_definition_rejected() {
        let mut registry = BiomeRegistry::new();
        let bad = BiomeDef {
            rarity: 3.0,
            ..biome("overgrown")
        };
        assert!(matches!(
            registry.register(bad),
            Err(BiomeRegistryError::Invalid(BiomeError::RarityOutOfRange { .. }))
        ));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_lookup_and_get() {
        let mut registry = BiomeRegistry::new();
        registry.register(biome("plains")).unwrap();
        let id = registry.register(biome("hills")).unwrap();

        assert_eq!(registry.lookup_by_name("hills"), Some(id));
        assert_eq!(registry.get(id).unwrap().name, "hills");
        assert!(registry.lookup_by_name("ocean").is_none());
        assert!(registry.get(BiomeId(99)).is_none());
    }

    #[test]
    fn test_from_builtin_manifest() {
        let registry = BiomeRegistry::from_manifest(BiomeManifest::builtin()).unwrap();
        assert_eq!(registry.len(), 5);
        let names: Vec<_> = registry.iter().map(|(_, def)| def.name.as_str()).collect();
        assert_eq!(names, ["grassland", "forest", "desert", "mountain", "lake"]);
    }

    #[test]
    fn test_from_manifest_stops_on_duplicate() {
        let manifest = BiomeManifest {
            biomes: vec![biome("x"), biome("y"), biome("x")],
        };
        assert!(matches!(
            BiomeRegistry::from_manifest(manifest),
            Err(BiomeRegistryError::DuplicateName(name)) if name == "x"
        ));
    }
}
