//! claw-review CLI - AI-powered code reviewer for agents
//!
//! Sends the current git diff, or a single file, to an external AI
//! command-line tool and prints the review it returns.

mod commands;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use claw_core::{CliOverrides, Config, Reviewer};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{DiffArgs, FileArgs};
use output::Output;

/// AI-powered code reviewer for agents
#[derive(Parser, Debug)]
#[command(name = "claw-review")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Reviewer executable (overrides config and CLAW_REVIEW_REVIEWER)
    #[arg(long, global = true)]
    reviewer: Option<String>,

    /// Reviewer timeout, e.g. "90s" or "5m" (overrides config and CLAW_REVIEW_TIMEOUT)
    #[arg(long, global = true, value_parser = humantime::parse_duration)]
    timeout: Option<Duration>,

    /// Config file to use instead of ~/.config/claw-review/config.toml
    #[arg(long, global = true, env = "CLAW_REVIEW_CONFIG")]
    config: Option<PathBuf>,

    /// Defaults to `diff` when omitted
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Review current git changes (unstaged, falling back to staged)
    Diff(DiffArgs),

    /// Review a specific file
    File(FileArgs),

    /// Show current configuration
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "claw_core=debug,claw_review=debug"
    } else {
        "error"
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .init();

    // Load configuration with overrides
    let config = Config::load_with_overrides(CliOverrides {
        reviewer: cli.reviewer.clone(),
        timeout: cli.timeout,
        config_path: cli.config.clone(),
    })?;

    tracing::debug!(
        reviewer = %config.reviewer.command,
        timeout = ?config.reviewer.timeout,
        max_content_chars = config.limits.max_content_chars,
        "Configuration loaded"
    );

    let out = Output::new(cli.verbose);
    let reviewer = Reviewer::from_config(&config);

    match cli.command {
        None => DiffArgs::default().execute(&config, &reviewer, &out).await,
        Some(Commands::Diff(args)) => args.execute(&config, &reviewer, &out).await,
        Some(Commands::File(args)) => args.execute(&config, &reviewer, &out).await,
        Some(Commands::Config) => {
            commands::show_config(&config, cli.config.as_deref(), &reviewer, &out);
            Ok(ExitCode::SUCCESS)
        }
    }
}
