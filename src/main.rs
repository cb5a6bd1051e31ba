use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tiled2level::convert_file;
use tiled2level_map::ObjectLayerPolicy;
use tracing::info;

/// Convert a Tiled JSON map export into a plain-text level file.
#[derive(Parser, Debug)]
#[command(version)]
struct Cli {
    /// Map export to read (Tiled JSON format).
    #[arg(value_name = "MAP")]
    input: PathBuf,

    /// Level file to write. An existing file is replaced.
    #[arg(value_name = "LEVEL")]
    output: PathBuf,

    /// When the map has several object layers, convert the last one instead
    /// of failing.
    #[arg(long)]
    last_layer: bool,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let policy = if cli.last_layer {
        ObjectLayerPolicy::LastWins
    } else {
        ObjectLayerPolicy::RequireSingle
    };

    let stats = convert_file(&cli.input, &cli.output, policy)
        .with_context(|| format!("failed to convert {}", cli.input.display()))?;

    info!(
        "wrote {} records ({} planets, {} orbit points, {} spawn points) to {}",
        stats.total(),
        stats.planets,
        stats.orbit_points,
        stats.spawn_points,
        cli.output.display()
    );

    Ok(())
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}
