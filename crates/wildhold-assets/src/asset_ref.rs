//! Named references to externally-authored assets (textures, materials, props).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Reference to an asset by its logical path, e.g. `"textures/grass_albedo"`.
///
/// The reference is not resolved here; a loader owned by the presentation
/// layer turns it into a live handle.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetRef(String);

impl AssetRef {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for AssetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AssetRef {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}
