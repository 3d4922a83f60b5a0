//! Material creation behind a backend-agnostic factory.
//!
//! [`MaterialFactory`] is the capability the presentation layer implements for
//! its rendering backend. [`ShaderMaterialFactory`] is the reference
//! implementation over a [`ShaderLibrary`]: shaders are looked up once at
//! construction so that creating a material cannot fail.

mod factory;
mod material;
mod shader;

pub use factory::{
    MaterialFactory, ShaderMaterialFactory, create_outline_material, create_surface_material,
};
pub use material::{Material, MaterialError, MaterialKind};
pub use shader::{OUTLINE_UNLIT, SURFACE_LIT, ShaderId, ShaderLibrary};
