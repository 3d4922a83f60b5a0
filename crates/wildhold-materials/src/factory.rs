//! [`MaterialFactory`] capability and its shader-library implementation.

use wildhold_assets::Color;

use crate::material::{Material, MaterialError, MaterialKind};
use crate::shader::{ShaderId, ShaderLibrary};

/// Creates renderable materials from a color and a name.
///
/// Implemented once per rendering backend so data crates stay independent of
/// any particular engine. Creation is infallible; implementations resolve
/// whatever they need up front.
pub trait MaterialFactory {
    /// Opaque lit material for terrain and props.
    fn create_surface(&self, color: Color, name: &str) -> Material;

    /// Unlit outline material for highlighting.
    fn create_outline(&self, color: Color, name: &str) -> Material;
}

/// Create a surface material with any factory.
pub fn create_surface_material(
    factory: &(impl MaterialFactory + ?Sized),
    color: Color,
    name: &str,
) -> Material {
    factory.create_surface(color, name)
}

/// Create an outline material with any factory.
pub fn create_outline_material(
    factory: &(impl MaterialFactory + ?Sized),
    color: Color,
    name: &str,
) -> Material {
    factory.create_outline(color, name)
}

/// Factory backed by a [`ShaderLibrary`].
#[derive(Clone, Debug)]
pub struct ShaderMaterialFactory {
    surface_shader: ShaderId,
    outline_shader: ShaderId,
    outline_width: f32,
}

impl ShaderMaterialFactory {
    /// Default outline thickness in world units.
    pub const DEFAULT_OUTLINE_WIDTH: f32 = 0.03;

    /// Resolve the surface and outline shaders by name.
    ///
    /// # Errors
    ///
    /// Returns [`MaterialError::ShaderNotFound`] if either shader is missing.
    pub fn new(
        library: &ShaderLibrary,
        surface_shader: &str,
        outline_shader: &str,
    ) -> Result<Self, MaterialError> {
        Ok(Self {
            surface_shader: library.resolve(surface_shader)?,
            outline_shader: library.resolve(outline_shader)?,
            outline_width: Self::DEFAULT_OUTLINE_WIDTH,
        })
    }

    /// Set the outline thickness. Negative values are clamped to zero.
    pub fn with_outline_width(mut self, width: f32) -> Self {
        self.outline_width = width.max(0.0);
        self
    }

    pub fn surface_shader(&self) -> ShaderId {
        self.surface_shader
    }

    pub fn outline_shader(&self) -> ShaderId {
        self.outline_shader
    }
}

impl MaterialFactory for ShaderMaterialFactory {
    fn create_surface(&self, color: Color, name: &str) -> Material {
        Material {
            name: name.to_string(),
            shader: self.surface_shader,
            color,
            kind: MaterialKind::Surface,
        }
    }

    fn create_outline(&self, color: Color, name: &str) -> Material {
        Material {
            name: name.to_string(),
            shader: self.outline_shader,
            color,
            kind: MaterialKind::Outline {
                width: self.outline_width,
            },
        }
    }
}
