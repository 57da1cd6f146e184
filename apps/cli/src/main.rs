mod commands;
mod storage;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Terminal spaced-repetition trainer for English→Portuguese sentence
/// translation.
#[derive(Debug, Parser)]
#[command(name = "sentence-trainer", version, about)]
struct Cli {
    /// Directory for progress and history snapshots.
    /// Defaults to the platform data directory.
    #[arg(long)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run an interactive review loop.
    Drill {
        /// Path to the sentence dataset (JSON). Falls back to the
        /// FRASES_DATASET environment variable.
        #[arg(long)]
        dataset: Option<PathBuf>,

        /// Use the stricter matching thresholds (0.55 token overlap,
        /// 0.18 edit-distance tolerance).
        #[arg(long)]
        strict: bool,

        /// Fix the item-selection seed (for reproducible sessions).
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show progress and history totals.
    Stats,
    /// Delete the progress and history snapshots.
    Reset {
        /// Confirm the deletion.
        #[arg(long)]
        yes: bool,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let data_dir = resolve_data_dir(cli.data_dir)?;

    match cli.command {
        Command::Drill {
            dataset,
            strict,
            seed,
        } => commands::drill::run(&data_dir, dataset, strict, seed),
        Command::Stats => commands::stats::run(&data_dir),
        Command::Reset { yes } => commands::reset::run(&data_dir, yes),
    }
}

fn resolve_data_dir(flag: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    let base = dirs::data_dir().context("no platform data directory; pass --data-dir")?;
    Ok(base.join("sentence-trainer"))
}
