//! card-orbit command-line driver
//!
//! Usage:
//!   card-orbit layout --kind sphere --count 50
//!   card-orbit simulate --data rows.json --switch-to helix --switch-at-ms 3000
//!   card-orbit config

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "card-orbit")]
#[command(version)]
#[command(about = "Compute and animate 3D card arrangements")]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Config file (defaults to the per-user config.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the target poses of one arrangement as JSON
    Layout(commands::layout::LayoutArgs),
    /// Load a dataset and run transitions through a headless frame loop
    Simulate(commands::simulate::SimulateArgs),
    /// Print the effective configuration as TOML
    Config,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(cli).await {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = commands::load_config(cli.config.as_deref())?;
    match cli.command {
        Commands::Layout(args) => commands::layout::run(args, &config),
        Commands::Simulate(args) => commands::simulate::run(args, &config).await,
        Commands::Config => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
    }
}
