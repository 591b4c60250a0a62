//! # trivia CLI entry point
//!
//! Parses command-line arguments, loads configuration and dispatches to
//! subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use trivia_cli::check::{run_check, CheckArgs};
use trivia_cli::list::{run_list, ListArgs};
use trivia_cli::manifest::{run_manifest, ManifestArgs};
use trivia_cli::validate::{run_validate, ValidateArgs};
use trivia_cli::{TriviaConfig, EXIT_ERROR};
use trivia_content::find_repository_root;

/// Trivia content repository toolchain.
///
/// Validates rounds, checks round structure, builds the repository
/// manifest and lists the available rounds.
#[derive(Parser, Debug)]
#[command(name = "trivia", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to configuration file (default: trivia.yaml in the repository root).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate one round or every round in the rounds directory.
    Validate(ValidateArgs),

    /// Build manifest.json from the rounds directory.
    Manifest(ManifestArgs),

    /// Strict structural check of a single round.
    Check(CheckArgs),

    /// List the rounds in the rounds directory.
    List(ListArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let repo_root = find_repository_root(&cwd);
    tracing::debug!(repo_root = %repo_root.display(), "resolved repository root");

    let config = match TriviaConfig::load(cli.config.as_deref(), &repo_root) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let result = match cli.command {
        Commands::Validate(args) => run_validate(&args, &repo_root, &config),
        Commands::Manifest(args) => run_manifest(&args, &repo_root, &config),
        Commands::Check(args) => run_check(&args, &repo_root, &config),
        Commands::List(args) => run_list(&args, &repo_root, &config),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}
