use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use snake_chain::game::SimConfig;
use snake_chain::logging;
use snake_chain::modes::{AutoplayMode, LiveMode, ReplayMode, ReplayScript};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "snake_chain")]
#[command(version, about = "Grid-based chain movement simulation")]
struct Cli {
    /// Frame driver to run
    #[arg(long, default_value = "live")]
    mode: Mode,

    /// TOML simulation config (stride, tick_interval_ms, start_x, start_y, initial_length)
    #[arg(long)]
    config: Option<PathBuf>,

    /// TOML frame script (replay mode)
    #[arg(long, required_if_eq("mode", "replay"))]
    script: Option<PathBuf>,

    /// Frames to simulate (autoplay mode)
    #[arg(long, default_value = "3600")]
    frames: u64,

    /// RNG seed (autoplay mode)
    #[arg(long)]
    seed: Option<u64>,

    /// Frame interval in milliseconds
    #[arg(long, default_value = "16")]
    frame_ms: u64,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, ValueEnum)]
enum Mode {
    /// Steer the chain with the keyboard
    Live,
    /// Play a frame script and print a JSON report
    Replay,
    /// Feed random intents and print a summary
    Autoplay,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = match &cli.config {
        Some(path) => SimConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => SimConfig::default(),
    };
    let frame_interval = Duration::from_millis(cli.frame_ms.max(1));

    // Dispatch to appropriate mode
    match cli.mode {
        Mode::Live => {
            let mut live_mode = LiveMode::new(config, frame_interval)?;
            live_mode.run().await?;
        }
        Mode::Replay => {
            let path = cli.script.context("--script is required in replay mode")?;
            let script = ReplayScript::load(&path)?;
            ReplayMode::new(config, script).run()?;
        }
        Mode::Autoplay => {
            let mut autoplay_mode = AutoplayMode::new(config, frame_interval, cli.seed)?;
            autoplay_mode.run(cli.frames)?;
        }
    }

    Ok(())
}
