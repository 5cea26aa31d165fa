#![deny(clippy::correctness)]
#![warn(
    missing_docs,
    clippy::all,
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::pedantic,
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::cast_lossless
)]
#![doc = include_str!("../README.md")]

use std::path::PathBuf;

use clap::Parser;

mod commands;
mod fasta;
mod logger;

use commands::Commands;

/// Progressive multiple sequence alignment of short DNA sequences.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The most verbose level of logs to emit.
    #[arg(short('l'), long, default_value = "warn")]
    log_level: logger::LogLevel,

    /// Write logs to `dna-msa.log` in this directory instead of stderr.
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// The subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<(), String> {
    let args = Args::parse();

    // We need the `_guard` in scope to ensure proper logging.
    let _guard = logger::configure_logger(args.log_level.filter(), args.log_dir.as_deref())?;
    ftlog::debug!("{args:?}");

    match args.command {
        Commands::Align(action) => commands::align::run(&action),
        Commands::Pairwise(action) => commands::pairwise::run(&action),
    }
}
