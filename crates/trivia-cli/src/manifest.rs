//! # Manifest Subcommand
//!
//! Aggregates the rounds tree into `manifest.json`.
//!
//! `lastUpdated` is the only input that changes between runs over an
//! unchanged tree; the `lastModified` fallback of undated rounds is its
//! date. Pin it with `--generated-at` or `SOURCE_DATE_EPOCH` to get
//! byte-identical output.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use trivia_content::{build_manifest, fallback_date, resolve_generated_at, ContentTree};

use crate::{TriviaConfig, EXIT_OK};

/// Arguments for the `trivia manifest` subcommand.
#[derive(Args, Debug)]
pub struct ManifestArgs {
    /// Rounds directory (default: ./rounds).
    #[arg(value_name = "ROUNDS_DIR")]
    pub rounds_dir: Option<PathBuf>,

    /// Output path (default: ./manifest.json).
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Override the lastUpdated timestamp for deterministic output.
    #[arg(long)]
    pub generated_at: Option<String>,
}

/// Execute the manifest subcommand.
///
/// Returns exit code: 0 on success, 2 on operational error.
pub fn run_manifest(args: &ManifestArgs, repo_root: &Path, config: &TriviaConfig) -> Result<u8> {
    let dir = crate::rounds_dir(args.rounds_dir.as_deref(), repo_root, config);
    let out_path = match args.output {
        Some(ref out) => out.clone(),
        None => config.manifest_path_in(repo_root),
    };

    let tree = ContentTree::open(&dir)
        .with_context(|| format!("cannot build manifest from {}", dir.display()))?;
    let generated_at = resolve_generated_at(args.generated_at.as_deref());
    let today = fallback_date(&generated_at);

    let manifest = build_manifest(&tree, &config.manifest, generated_at, today)?;
    manifest
        .write_to(&out_path)
        .with_context(|| format!("failed to write manifest: {}", out_path.display()))?;

    tracing::info!(path = %out_path.display(), "manifest written");
    println!("Manifest written to {}", out_path.display());
    println!("  Rounds: {}", manifest.total_rounds);
    println!("  Total size: {}", manifest.total_size_formatted);

    Ok(EXIT_OK)
}
