//! Bagwords CLI - Command-line interface for bag-of-words encoding.
//!
//! This is the main entry point for the `bagwords` command-line tool.

mod commands;
mod config;
mod telemetry;

use clap::{Parser, Subcommand};
use commands::{BenchmarkCommand, ComponentsCommand, EncodeCommand};

#[derive(Parser)]
#[command(name = "bagwords")]
#[command(about = "Bag-of-words count vectors over a pre-built vocabulary", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode whitespace-tokenized samples to count vectors
    Encode(EncodeCommand),
    /// Benchmark batch encoding throughput
    Benchmark(BenchmarkCommand),
    /// List registered component names
    Components(ComponentsCommand),
}

fn main() -> anyhow::Result<()> {
    telemetry::init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode(cmd) => commands::encode::run(cmd)?,
        Commands::Benchmark(cmd) => commands::benchmark::run(cmd)?,
        Commands::Components(cmd) => commands::components::run(cmd)?,
    }

    Ok(())
}
