//! The `wildhold` client entry point.
//!
//! Run with: `cargo run -p wildhold-app -- --username fern`

use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use wildhold_app::{ClientContext, PlatformDirs};
use wildhold_config::{CliArgs, Config};

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let dirs = match args.config.as_deref() {
        Some(root) => PlatformDirs::resolve_with_root(root),
        None => match PlatformDirs::resolve() {
            Ok(dirs) => dirs,
            Err(e) => {
                eprintln!("Failed to resolve platform directories: {e}");
                return ExitCode::FAILURE;
            }
        },
    };

    let mut config = match Config::load_or_create(&dirs.config_dir) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            return ExitCode::FAILURE;
        }
    };
    config.apply_cli_overrides(&args);

    let dirs = dirs.with_data_dir(config.assets.data_dir.as_deref());
    if let Err(e) = dirs.create_dirs() {
        eprintln!("Failed to create directories: {e}");
        return ExitCode::FAILURE;
    }

    wildhold_log::init_logging(Some(&dirs.log_dir), Some(&config));
    info!("Wildhold client starting");
    info!("  config: {}", dirs.config_dir.display());
    info!("  data:   {}", dirs.data_dir.display());
    info!("  logs:   {}", dirs.log_dir.display());

    let ctx = match ClientContext::bootstrap(config, &dirs) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Startup failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    for (id, biome) in ctx.biomes.iter() {
        let shader = ctx
            .palette
            .get(id)
            .map(|m| m.surface.shader.0)
            .unwrap_or_default();
        info!(
            "Biome {:>2} {:<12} rarity={:.2} speed={:.2} walkable={} buildable={} shader={}",
            id.0,
            biome.name,
            biome.rarity,
            biome.movement_speed_modifier,
            biome.walkable,
            biome.buildable,
            shader,
        );
    }

    let profile = &ctx.profile;
    info!(
        "Player {} '{}' owns {} creatures",
        profile.id(),
        profile.username,
        profile.creature_count()
    );
    for (kind, balance) in profile.resources.iter() {
        info!("  {kind}: {balance}");
    }

    ExitCode::SUCCESS
}
