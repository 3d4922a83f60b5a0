//! Per-biome materials built through a [`MaterialFactory`].

use wildhold_assets::Color;
use wildhold_biome::{BiomeDef, BiomeId, BiomeRegistry};
use wildhold_materials::{
    Material, MaterialFactory, create_outline_material, create_surface_material,
};

/// Outline color is the biome color scaled by this factor.
const OUTLINE_SHADE: f32 = 0.4;

/// Surface and outline material for one biome.
#[derive(Clone, Debug, PartialEq)]
pub struct BiomeMaterials {
    pub surface: Material,
    pub outline: Material,
}

/// Materials for every registered biome, indexed by [`BiomeId`].
#[derive(Clone, Debug, Default)]
pub struct BiomePalette {
    entries: Vec<BiomeMaterials>,
}

impl BiomePalette {
    /// Build materials for every biome in `registry`.
    pub fn build(registry: &BiomeRegistry, factory: &dyn MaterialFactory) -> Self {
        let entries = registry
            .iter()
            .map(|(_, def)| materials_for(def, factory))
            .collect();
        Self { entries }
    }

    pub fn get(&self, id: BiomeId) -> Option<&BiomeMaterials> {
        self.entries.get(id.0 as usize)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn materials_for(def: &BiomeDef, factory: &dyn MaterialFactory) -> BiomeMaterials {
    let c = def.color;
    let outline_color = Color::rgb(c.r * OUTLINE_SHADE, c.g * OUTLINE_SHADE, c.b * OUTLINE_SHADE);
    BiomeMaterials {
        surface: create_surface_material(factory, c, &format!("{}_surface", def.name)),
        outline: create_outline_material(factory, outline_color, &format!("{}_outline", def.name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wildhold_biome::BiomeManifest;
    use wildhold_materials::{OUTLINE_UNLIT, SURFACE_LIT, ShaderLibrary, ShaderMaterialFactory};

    fn factory() -> ShaderMaterialFactory {
        ShaderMaterialFactory::new(&ShaderLibrary::with_builtin_shaders(), SURFACE_LIT, OUTLINE_UNLIT)
            .unwrap()
    }

    #[test]
    fn test_palette_covers_every_biome() {
        let registry = BiomeRegistry::from_manifest(BiomeManifest::builtin()).unwrap();
        let palette = BiomePalette::build(&registry, &factory());
        assert_eq!(palette.len(), registry.len());

        let forest = registry.lookup_by_name("forest").unwrap();
        let materials = palette.get(forest).unwrap();
        assert_eq!(materials.surface.name, "forest_surface");
        assert_eq!(materials.outline.name, "forest_outline");
        assert_eq!(materials.surface.color, registry.get(forest).unwrap().color);
        assert!(materials.outline.is_outline());
    }

    #[test]
    fn test_outline_is_darker_than_surface() {
        let mut registry = BiomeRegistry::new();
        let id = registry
            .register(BiomeDef {
                name: "glade".to_string(),
                color: Color::rgb(0.5, 1.0, 0.25),
                ..Default::default()
            })
            .unwrap();
        let palette = BiomePalette::build(&registry, &factory());
        let outline = palette.get(id).unwrap().outline.color;
        assert!((outline.r - 0.2).abs() < 1e-6);
        assert!((outline.g - 0.4).abs() < 1e-6);
        assert!((outline.b - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_empty_registry_gives_empty_palette() {
        let palette = BiomePalette::build(&BiomeRegistry::new(), &factory());
        assert!(palette.is_empty());
        assert!(palette.get(BiomeId(0)).is_none());
    }
}
