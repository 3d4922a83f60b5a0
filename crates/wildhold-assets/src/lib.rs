//! Asset primitives shared by the data crates: colors and asset references.

mod asset_ref;
mod color;

pub use asset_ref::AssetRef;
pub use color::{Color, ColorError};
