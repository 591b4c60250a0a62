//! # Validate Subcommand
//!
//! Lenient validation of a single round directory or of every round in the
//! rounds tree. All issues are collected and printed as one report.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use trivia_content::{write_validation_report, ContentTree, RoundDir, ValidationOptions, Validator};

use crate::{TriviaConfig, EXIT_ERROR, EXIT_INVALID, EXIT_OK};

/// Arguments for the `trivia validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Round directory to validate.
    #[arg(value_name = "ROUND_PATH", conflicts_with = "all")]
    pub path: Option<PathBuf>,

    /// Validate every round under the rounds directory.
    #[arg(long)]
    pub all: bool,

    /// Rounds directory used with --all (default: ./rounds).
    #[arg(long, value_name = "DIR", requires = "all")]
    pub rounds_dir: Option<PathBuf>,

    /// Do not require each question's `cat` to match its category name.
    #[arg(long)]
    pub no_cat_check: bool,
}

/// Execute the validate subcommand.
///
/// Returns exit code: 0 on success, 1 on validation failure, 2 on operational error.
pub fn run_validate(args: &ValidateArgs, repo_root: &Path, config: &TriviaConfig) -> Result<u8> {
    let options = ValidationOptions {
        check_cat_matches: config.validation.check_cat_matches && !args.no_cat_check,
    };
    let validator = Validator::new(options);

    let log = if args.all {
        let dir = crate::rounds_dir(args.rounds_dir.as_deref(), repo_root, config);
        let tree = ContentTree::open(&dir)
            .with_context(|| format!("cannot validate rounds in {}", dir.display()))?;
        println!("Validating all rounds in {}", dir.display());
        validator.validate_repository(&tree)?
    } else if let Some(ref path) = args.path {
        let resolved = crate::resolve_path(path, repo_root);
        let round = RoundDir::from_path(&resolved)
            .with_context(|| format!("cannot validate round {}", path.display()))?;
        println!("Validating round {}", round.id);
        validator.validate_round(&round)
    } else {
        eprintln!("Usage: trivia validate <ROUND_PATH> | --all [--rounds-dir DIR]");
        return Ok(EXIT_ERROR);
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    writeln!(out)?;
    write_validation_report(&log, &mut out)?;

    Ok(if log.is_pass() { EXIT_OK } else { EXIT_INVALID })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;

    fn args(path: Option<PathBuf>, all: bool, rounds_dir: Option<PathBuf>) -> ValidateArgs {
        ValidateArgs {
            path,
            all,
            rounds_dir,
            no_cat_check: false,
        }
    }

    fn repo_with_value(value: u32) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let round = dir.path().join("rounds/demo_round");
        fs::create_dir_all(round.join("Programming")).unwrap();
        fs::write(
            round.join("round.json"),
            json!({"name": "Demo", "categories": ["Programming"]}).to_string(),
        )
        .unwrap();
        fs::write(
            round.join("Programming/cat.json"),
            json!({
                "name": "Programming",
                "questions": [{
                    "answer": "A systems language",
                    "question": "What is Rust?",
                    "available": true,
                    "value": value,
                    "cat": "Programming"
                }]
            })
            .to_string(),
        )
        .unwrap();
        dir
    }

    #[test]
    fn valid_repository_exits_zero() {
        let dir = repo_with_value(300);
        let code = run_validate(&args(None, true, None), dir.path(), &TriviaConfig::default());
        assert_eq!(code.unwrap(), EXIT_OK);
    }

    #[test]
    fn invalid_round_exits_one() {
        let dir = repo_with_value(350);
        let round = dir.path().join("rounds/demo_round");
        let code = run_validate(
            &args(Some(round), false, None),
            dir.path(),
            &TriviaConfig::default(),
        );
        assert_eq!(code.unwrap(), EXIT_INVALID);
    }

    #[test]
    fn missing_rounds_dir_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = run_validate(
            &args(None, true, Some(dir.path().join("nope"))),
            dir.path(),
            &TriviaConfig::default(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn no_target_is_a_usage_error() {
        let dir = tempfile::tempdir().unwrap();
        let code = run_validate(&args(None, false, None), dir.path(), &TriviaConfig::default());
        assert_eq!(code.unwrap(), EXIT_ERROR);
    }
}
