//! Headless runner (default binary).
//!
//! Plays seeded games with simulated gravity and an autoplay policy, then
//! prints one JSON summary line per game on stdout. Logs go to stderr and
//! are filtered with `RUST_LOG` (default `info`).

use std::io::{self, Write};

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use falling_blocks::config::RunnerConfig;
use falling_blocks::runner::play_game;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed of the first game (FALLING_BLOCKS_SEED)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of games to play (FALLING_BLOCKS_GAMES)
    #[arg(short, long)]
    games: Option<u32>,

    /// Piece cap per game (FALLING_BLOCKS_MAX_PIECES)
    #[arg(short, long)]
    max_pieces: Option<u32>,

    /// Simulated milliseconds per tick (FALLING_BLOCKS_TICK_MS)
    #[arg(short, long)]
    tick_ms: Option<u32>,

    /// Hard-drop every piece at its spawn column (FALLING_BLOCKS_DROP_ONLY)
    #[arg(short, long)]
    drop_only: bool,
}

impl Args {
    fn apply(self, mut config: RunnerConfig) -> Result<RunnerConfig> {
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(games) = self.games {
            config.games = games;
        }
        if let Some(max_pieces) = self.max_pieces {
            config.max_pieces = max_pieces;
        }
        if let Some(tick_ms) = self.tick_ms {
            if tick_ms == 0 {
                bail!("--tick-ms must be greater than zero");
            }
            config.tick_ms = tick_ms;
        }
        config.drop_only |= self.drop_only;
        Ok(config)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let config = Args::parse().apply(RunnerConfig::from_env())?;
    tracing::info!(?config, "starting runner");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for index in 0..config.games {
        let summary = play_game(&config, index);
        let line = serde_json::to_string(&summary).context("serialize game summary")?;
        writeln!(out, "{line}").context("write game summary")?;
    }
    Ok(())
}
