//! readme-site CLI - renders a project's README into an HTML page.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "readme-site")]
#[command(about = "Render a project's README into an HTML page")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to site.toml config file
    #[arg(short, long, default_value = "site.toml", global = true)]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the page (default)
    Build,

    /// Build, then rebuild whenever the README or template changes
    Watch,

    /// Create a starter template and config
    Init {
        /// Overwrite existing template and config
        #[arg(short, long)]
        yes: bool,

        /// Page title (defaults to the current directory name)
        #[arg(short, long)]
        title: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    match cli.command.unwrap_or(Commands::Build) {
        Commands::Build => {
            commands::build::run(&cli.config).await?;
        }
        Commands::Watch => {
            commands::watch::run(&cli.config).await?;
        }
        Commands::Init { yes, title } => {
            commands::init::run(&cli.config, yes, title).await?;
        }
    }

    Ok(())
}
