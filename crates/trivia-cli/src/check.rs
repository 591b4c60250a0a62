//! # Check Subcommand
//!
//! Strict structural check of one round, stopping at the first problem.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use trivia_content::{check_round_structure, ContentTree};

use crate::{TriviaConfig, EXIT_INVALID, EXIT_OK};

/// Arguments for the `trivia check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Round identifier (directory name under the rounds directory).
    #[arg(value_name = "ROUND_ID")]
    pub round_id: String,

    /// Rounds directory (default: ./rounds).
    #[arg(long, value_name = "DIR")]
    pub rounds_dir: Option<PathBuf>,
}

/// Execute the check subcommand.
///
/// Returns exit code: 0 if the round is well-formed, 1 otherwise.
pub fn run_check(args: &CheckArgs, repo_root: &Path, config: &TriviaConfig) -> Result<u8> {
    let dir = crate::rounds_dir(args.rounds_dir.as_deref(), repo_root, config);
    let tree = ContentTree::open(&dir)
        .with_context(|| format!("cannot check rounds in {}", dir.display()))?;

    match check_round_structure(&tree, &args.round_id) {
        Ok(()) => {
            println!("OK: round \"{}\" is structurally valid", args.round_id);
            Ok(EXIT_OK)
        }
        Err(e) => {
            println!("FAIL: {}: {e}", args.round_id);
            Ok(EXIT_INVALID)
        }
    }
}
