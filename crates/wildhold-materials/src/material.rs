//! Core material types: [`Material`], [`MaterialKind`], and [`MaterialError`].

use serde::{Deserialize, Serialize};
use thiserror::Error;
use wildhold_assets::Color;

use crate::shader::ShaderId;

/// Errors from shader registration and factory construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MaterialError {
    /// Shader names must not be empty.
    #[error("shader name must not be empty")]
    EmptyShaderName,

    /// A shader with this name is already registered.
    #[error("duplicate shader name: {0}")]
    DuplicateShader(String),

    /// Every [`ShaderId`] is already assigned.
    #[error("shader library is full")]
    LibraryFull,

    /// The named shader is not in the library.
    #[error("shader '{0}' not found in library")]
    ShaderNotFound(String),
}

/// What a material is used for.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum MaterialKind {
    /// Opaque lit surface (terrain, props).
    Surface,
    /// Unlit silhouette drawn around a selected or highlighted object.
    Outline {
        /// Outline thickness in world units.
        width: f32,
    },
}

/// A renderable material description: a shader plus its parameters.
///
/// The rendering backend turns this into GPU state; nothing here touches a
/// device.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Human-readable name (e.g., "grassland_surface").
    pub name: String,
    pub shader: ShaderId,
    /// Base color for surfaces, line color for outlines.
    pub color: Color,
    pub kind: MaterialKind,
}

impl Material {
    pub fn is_outline(&self) -> bool {
        matches!(self.kind, MaterialKind::Outline { .. })
    }
}
