//! # List Subcommand
//!
//! Prints one row per round: id, name, category count and the round
//! directory relative to the repository root.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use trivia_content::{list_rounds, ContentTree, RoundSummary};

use crate::{TriviaConfig, EXIT_OK};

/// Arguments for the `trivia list` subcommand.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Rounds directory (default: ./rounds).
    #[arg(long, value_name = "DIR")]
    pub rounds_dir: Option<PathBuf>,
}

/// Execute the list subcommand.
pub fn run_list(args: &ListArgs, repo_root: &Path, config: &TriviaConfig) -> Result<u8> {
    let dir = crate::rounds_dir(args.rounds_dir.as_deref(), repo_root, config);
    let tree = ContentTree::open(&dir)
        .with_context(|| format!("cannot list rounds in {}", dir.display()))?;
    let rounds = list_rounds(&tree)?;

    if rounds.is_empty() {
        println!("No rounds found in {}", dir.display());
    } else {
        print!("{}", render_table(&rounds, repo_root));
    }

    let manifest_path = config.manifest_path_in(repo_root);
    if !manifest_path.is_file() {
        println!(
            "\nWARN: {} not found; run `trivia manifest` to generate it.",
            manifest_path.display()
        );
    }

    Ok(EXIT_OK)
}

/// Column-aligned table of rounds, one line per round plus a header.
///
/// Paths under `base` are shown relative to it.
pub fn render_table(rounds: &[RoundSummary], base: &Path) -> String {
    const ID: &str = "ID";
    const NAME: &str = "NAME";
    const CATEGORIES: &str = "CATEGORIES";
    const PATH: &str = "PATH";

    let id_width = rounds
        .iter()
        .map(|r| r.id.chars().count())
        .chain(std::iter::once(ID.len()))
        .max()
        .unwrap_or(ID.len());
    let name_width = rounds
        .iter()
        .map(|r| r.name.chars().count())
        .chain(std::iter::once(NAME.len()))
        .max()
        .unwrap_or(NAME.len());
    let count_width = CATEGORIES.len();

    let mut table =
        format!("{ID:<id_width$}  {NAME:<name_width$}  {CATEGORIES:<count_width$}  {PATH}\n");
    for round in rounds {
        let path = round.path.strip_prefix(base).unwrap_or(&round.path);
        table.push_str(&format!(
            "{:<id_width$}  {:<name_width$}  {:<count_width$}  {}\n",
            round.id,
            round.name,
            round.categories,
            path.display()
        ));
    }
    table
}
