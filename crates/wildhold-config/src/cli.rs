//! Command-line argument parsing for the Wildhold client.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Wildhold client command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "wildhold", about = "Wildhold game client")]
pub struct CliArgs {
    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Data directory holding biome manifests and other assets.
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Biome manifest path.
    #[arg(long)]
    pub biomes: Option<PathBuf>,

    /// Display name for the offline profile.
    #[arg(long)]
    pub username: Option<String>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(ref dir) = args.data_dir {
            self.assets.data_dir = Some(dir.clone());
        }
        if let Some(ref manifest) = args.biomes {
            self.assets.biome_manifest = manifest.clone();
        }
        if let Some(ref name) = args.username {
            self.session.offline_username = name.clone();
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
