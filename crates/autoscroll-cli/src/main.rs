use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use autoscroll_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "autoscroll")]
#[command(author, version, about = "Hands-free auto-scrolling for text in the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open a text file and auto-scroll it
    Run(commands::run::RunArgs),
    /// Drive the scroller on a simulated clock and report what it did
    Simulate(commands::simulate::SimulateArgs),
    /// Show or create the configuration file
    Config {
        /// Write the default configuration to the config path
        #[arg(long)]
        init: bool,
        /// Print the config file path only
        #[arg(long)]
        path: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::load().context("failed to load configuration")?;

    // The terminal UI owns stdout, so it logs to a file instead
    init_logging(&config, matches!(cli.command, Commands::Run(_)))?;

    match cli.command {
        Commands::Run(args) => commands::run::run(config, args).await,
        Commands::Simulate(args) => commands::simulate::run(&config, &args),
        Commands::Config { init, path } => commands::config::run(&config, init, path),
    }
}

fn init_logging(config: &AppConfig, to_file: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    if to_file {
        std::fs::create_dir_all(config.data_dir())
            .with_context(|| format!("failed to create {}", config.data_dir().display()))?;
        let log_path = config.log_path();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
            .with_context(|| format!("failed to open log file {}", log_path.display()))?;

        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    Ok(())
}
