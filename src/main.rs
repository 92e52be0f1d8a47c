use std::{fs::File, path::{Path, PathBuf}, sync::Mutex};

use anyhow::{Context, Result};
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use tracing_subscriber::EnvFilter;

use wrapsnake::clock::FixedRatePacer;
use wrapsnake::config::Config;
use wrapsnake::game::{GameLoop, GameState};
use wrapsnake::term::{KeyboardInput, TermManager};

#[derive(Parser)]
#[command(name = "wrapsnake")]
#[command(about = "Snake on a wrap-around grid. Arrow keys or WASD to steer, Esc, q or Ctrl+C to quit.")]
struct Args {
    /// Seed for food placement; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (the terminal is busy drawing the game)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let config = Config::default();
    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    tracing::info!(seed = ?args.seed, "Starting");

    let mut term = TermManager::new(&config).context("Could not acquire the terminal")?;
    term.setup()?;

    let state = GameState::new(&config, rng);
    let pacer = FixedRatePacer::from_rate(config.tick_rate_hz);
    let mut game = GameLoop::new(config, state, term, KeyboardInput, pacer);

    let result = game.run();

    if let Err(err) = game.into_surface().restore() {
        tracing::error!(?err, "failed to restore terminal");
    }

    result
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("Failed to create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
