//! Logloom CLI
//!
//! Command-line surface for editing a JSON-file-backed pipeline list.

mod commands;
mod config;
mod store;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;

#[derive(Parser)]
#[command(name = "logloom")]
#[command(about = "Logloom log-pipeline configuration CLI", long_about = None)]
struct Cli {
    /// Path of the pipeline list file
    #[arg(long, env = "LOGLOOM_FILE", default_value = "pipelines.json")]
    file: PathBuf,

    /// Display name recorded as the creator of new pipelines
    #[arg(long, env = "LOGLOOM_USER")]
    user: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config = Config {
        file: cli.file,
        user: cli.user,
    };

    handle_command(cli.command, &config)
}
