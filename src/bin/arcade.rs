//! Headless autoplay driver for both engines.
//!
//! Prints one JSON view per line so the output can be piped into a
//! renderer or inspected by hand.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use mini_arcade::{
    solve, GameEngine, PuzzleConfig, PuzzleEngine, PuzzleIntent, SequenceConfig, SequenceEngine,
    SequenceIntent, SignalId,
};

#[derive(Parser)]
#[command(name = "arcade", about = "Autoplay the sequence and puzzle engines")]
struct Cli {
    /// Show debug logs
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play N correct rounds of the sequence game, then a wrong signal
    Sequence {
        #[arg(long, default_value_t = 3)]
        rounds: u32,
        #[arg(long, env = "ARCADE_SEED")]
        seed: Option<u64>,
    },
    /// Shuffle the puzzle and solve it
    Puzzle {
        #[arg(long, env = "ARCADE_SEED")]
        seed: Option<u64>,
        /// Simulated time between moves, in milliseconds
        #[arg(long, default_value_t = 400)]
        move_interval_ms: u64,
    },
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("mini_arcade=debug,warn")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("mini_arcade=info,warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();
}

fn emit<T: Serialize>(view: &T) -> Result<()> {
    let line = serde_json::to_string(view).context("failed to serialize view")?;
    println!("{line}");
    Ok(())
}

fn run_sequence(rounds: u32, seed: Option<u64>) -> Result<()> {
    let config = SequenceConfig::default();
    let config = match seed {
        Some(seed) => config.with_seed(seed),
        None => config,
    };
    let mut engine = SequenceEngine::new(config).context("invalid sequence config")?;

    engine.handle(SequenceIntent::Start);
    for _ in 0..rounds {
        engine.finish_playback();
        emit(&engine.view())?;
        for signal in engine.sequence().to_vec() {
            engine.handle(SequenceIntent::Tap(signal));
        }
        emit(&engine.view())?;
        let pause = engine.config().round_pause();
        engine.advance(pause);
    }

    engine.finish_playback();
    let first = engine.sequence().first().copied().unwrap_or(SignalId(0));
    let wrong = SignalId((first.0 + 1) % engine.config().signal_count);
    engine.handle(SequenceIntent::Tap(wrong));
    emit(&engine.view())?;

    info!(score = engine.score(), "sequence autoplay finished");
    Ok(())
}

fn run_puzzle(seed: Option<u64>, move_interval: Duration) -> Result<()> {
    let config = PuzzleConfig::default();
    let config = match seed {
        Some(seed) => config.with_seed(seed),
        None => config,
    };
    let mut engine = PuzzleEngine::new(config).context("invalid puzzle config")?;

    engine.handle(PuzzleIntent::Start);
    emit(&engine.view())?;

    let path = solve(engine.board()).context("shuffled board has no solution")?;
    info!(moves = path.len(), "solution found");
    for tile in path {
        engine.advance(move_interval);
        engine.handle(PuzzleIntent::Tap(tile));
    }
    emit(&engine.view())?;

    info!(
        moves = engine.move_count(),
        time = %engine.elapsed(),
        solved = engine.is_solved(),
        "puzzle autoplay finished"
    );
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Sequence { rounds, seed } => run_sequence(rounds, seed),
        Command::Puzzle { seed, move_interval_ms } => {
            run_puzzle(seed, Duration::from_millis(move_interval_ms))
        }
    }
}
