//! Vapor CLI - Command-line interface for the smoke simulation

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{config, run};

#[derive(Parser)]
#[command(name = "vapor")]
#[command(about = "Headless driver for the Vapor smoke particle simulation", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the simulation headless and print pool statistics
    Run {
        /// Simulated duration in seconds
        #[arg(long, default_value_t = 20.0)]
        seconds: f64,

        /// Fixed step size in seconds (ignored with --realtime)
        #[arg(long, default_value_t = 0.016)]
        dt: f64,

        /// Drive the loop from the wall clock instead of a fixed step
        #[arg(long)]
        realtime: bool,

        /// Path to a persisted configuration file to merge in
        #[arg(long)]
        config: Option<String>,

        /// RNG seed for a reproducible run
        #[arg(long)]
        seed: Option<u32>,
    },

    /// Configuration operations
    #[command(subcommand)]
    Config(config::ConfigCommands),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            seconds,
            dt,
            realtime,
            config,
            seed,
        } => run::run(run::RunArgs {
            seconds,
            dt,
            realtime,
            config,
            seed,
        }),
        Commands::Config(cmd) => config::run(cmd),
    }
}
