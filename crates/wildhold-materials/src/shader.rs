//! Shader name registry used to resolve material shaders.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::material::MaterialError;

/// Built-in lit shader for opaque surfaces.
pub const SURFACE_LIT: &str = "surface_lit";

/// Built-in unlit shader for outlines.
pub const OUTLINE_UNLIT: &str = "outline_unlit";

/// Handle to a registered shader, dense from 0 in registration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShaderId(pub u16);

/// Central registry mapping shader names to [`ShaderId`]s.
///
/// The rendering backend compiles the actual shader modules and keys them by
/// the same ids.
pub struct ShaderLibrary {
    names: Vec<String>,
    ids: HashMap<String, ShaderId>,
}

impl ShaderLibrary {
    /// Create a new empty shader library.
    pub fn new() -> Self {
        Self {
            names: Vec::new(),
            ids: HashMap::new(),
        }
    }

    /// Library preloaded with [`SURFACE_LIT`] and [`OUTLINE_UNLIT`].
    pub fn with_builtin_shaders() -> Self {
        let names: Vec<String> = [SURFACE_LIT, OUTLINE_UNLIT].map(String::from).into();
        let ids = names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), ShaderId(i as u16)))
            .collect();
        Self { names, ids }
    }

    /// Register a shader name.
    ///
    /// # Errors
    ///
    /// Returns [`MaterialError::EmptyShaderName`],
    /// [`MaterialError::DuplicateShader`], or [`MaterialError::LibraryFull`]
    /// once every [`ShaderId`] is taken.
    pub fn register(&mut self, name: &str) -> Result<ShaderId, MaterialError> {
        if name.is_empty() {
            return Err(MaterialError::EmptyShaderName);
        }
        if self.ids.contains_key(name) {
            return Err(MaterialError::DuplicateShader(name.to_string()));
        }
        let id = self.insert(name)?;
        debug!("Registered shader '{}' as {:?}", name, id);
        Ok(id)
    }

    fn insert(&mut self, name: &str) -> Result<ShaderId, MaterialError> {
        let index = u16::try_from(self.names.len()).map_err(|_| MaterialError::LibraryFull)?;
        let id = ShaderId(index);
        self.names.push(name.to_string());
        self.ids.insert(name.to_string(), id);
        Ok(id)
    }

    /// Get a registered shader by name.
    pub fn get(&self, name: &str) -> Option<ShaderId> {
        self.ids.get(name).copied()
    }

    /// Like [`get`](Self::get), but a missing shader is an error.
    ///
    /// # Errors
    ///
    /// Returns [`MaterialError::ShaderNotFound`].
    pub fn resolve(&self, name: &str) -> Result<ShaderId, MaterialError> {
        self.get(name)
            .ok_or_else(|| MaterialError::ShaderNotFound(name.to_string()))
    }

    /// Name a shader was registered under.
    pub fn name(&self, id: ShaderId) -> Option<&str> {
        self.names.get(id.0 as usize).map(String::as_str)
    }

    /// Number of registered shaders.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if the shader library is empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for ShaderLibrary {
    fn default() -> Self {
        Self::new()
    }
}
