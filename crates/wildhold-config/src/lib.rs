//! Configuration system for the Wildhold client.
//!
//! Settings persist to disk as a RON file, can be overridden from the command
//! line via clap, and support hot-reload detection. Missing sections and fields
//! fall back to defaults so older config files keep loading.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{AssetConfig, Config, DebugConfig, RenderConfig, SessionConfig};
pub use error::ConfigError;
