//! # Manifest Aggregator
//!
//! Builds the repository index published alongside the rounds: one
//! [`ManifestEntry`] per loadable round plus repository totals.
//!
//! Aggregation is best-effort. A round whose record cannot be used is
//! skipped with a warning instead of failing the build; correctness gating
//! is the validator's job.
//!
//! ## Size accounting
//!
//! ```text
//! round size = |round.json|
//!            + Σ over declared categories ( |cat.json| + other files below the category dir )
//! ```
//!
//! Missing files count as zero.
//!
//! ## Determinism
//!
//! Entries are ordered by round id. A round without a `date` takes its
//! `lastModified` from the generation time (see [`fallback_date`]), so the
//! document is a pure function of the tree and `lastUpdated`. Two builds
//! over an unchanged tree are byte-identical once the generation time is
//! pinned.

use std::path::Path;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use trivia_core::field::{state, text};
use trivia_core::{format_bytes, Field, FieldState};

use crate::error::{ContentError, ContentResult};
use crate::sizing::{directory_size, file_size};
use crate::tree::{is_plain_name, ContentTree, RoundDir};

const DEFAULT_LANGUAGE: &str = "en";
const DEFAULT_DIFFICULTY: &str = "mixed";
const DEFAULT_AUTHOR: &str = "Community";

/// File name the manifest is conventionally written to.
pub const MANIFEST_FILE: &str = "manifest.json";

/// Timestamp format of `lastUpdated`.
pub const GENERATED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Per-round manifest record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestEntry {
    pub id: String,
    pub name: String,
    pub language: String,
    pub difficulty: String,
    pub categories: Vec<String>,
    pub author: String,
    /// `YYYY-MM-DD`.
    pub last_modified: String,
    /// Aggregate size in bytes.
    pub size: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub tags: Vec<String>,
}

/// A contributor credited in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributor {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

/// Static repository metadata written at the top of the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManifestHeader {
    pub name: String,
    pub description: String,
    pub version: String,
    pub license: String,
    pub contributors: Vec<Contributor>,
}

impl Default for ManifestHeader {
    fn default() -> Self {
        Self {
            name: "Trivia Content Repository".to_string(),
            description: "Community-contributed question sets".to_string(),
            version: "1.0.0".to_string(),
            license: "MIT".to_string(),
            contributors: vec![Contributor {
                name: "Trivia Community".to_string(),
                github: None,
            }],
        }
    }
}

/// The complete manifest document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub name: String,
    pub description: String,
    pub version: String,
    pub last_updated: String,
    pub total_rounds: usize,
    /// Sum of all entry sizes, in bytes.
    pub total_size: u64,
    /// `total_size` scaled with binary prefixes, e.g. `"2.41 KB"`.
    pub total_size_formatted: String,
    pub rounds: Vec<ManifestEntry>,
    pub contributors: Vec<Contributor>,
    pub license: String,
}

impl Manifest {
    /// Assemble a manifest from aggregated entries.
    pub fn new(header: &ManifestHeader, generated_at: String, rounds: Vec<ManifestEntry>) -> Self {
        let total_size = rounds.iter().map(|r| r.size).sum();
        Self {
            name: header.name.clone(),
            description: header.description.clone(),
            version: header.version.clone(),
            last_updated: generated_at,
            total_rounds: rounds.len(),
            total_size,
            total_size_formatted: format_bytes(total_size),
            rounds,
            contributors: header.contributors.clone(),
            license: header.license.clone(),
        }
    }

    /// Pretty-printed JSON document.
    pub fn to_json_pretty(&self) -> ContentResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the document to `path`, with a trailing newline.
    pub fn write_to(&self, path: &Path) -> ContentResult<()> {
        let mut output = self.to_json_pretty()?;
        output.push('\n');
        std::fs::write(path, output).map_err(|source| ContentError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Aggregate every round, using today's UTC date as the `lastModified`
/// fallback.
pub fn aggregate(tree: &ContentTree) -> ContentResult<Vec<ManifestEntry>> {
    aggregate_as_of(tree, Utc::now().date_naive())
}

/// Aggregate every round with an explicit `lastModified` fallback date.
pub fn aggregate_as_of(tree: &ContentTree, today: NaiveDate) -> ContentResult<Vec<ManifestEntry>> {
    let rounds = tree.rounds()?;
    tracing::info!(root = %tree.root().display(), rounds = rounds.len(), "aggregating rounds");

    let fallback_date = today.format("%Y-%m-%d").to_string();
    let mut entries = Vec::with_capacity(rounds.len());
    for round in &rounds {
        match round_entry(round, &fallback_date) {
            Ok(entry) => {
                tracing::debug!(round = %round.id, size = entry.size, "aggregated round");
                entries.push(entry);
            }
            Err(reason) => {
                tracing::warn!(round = %round.id, "skipping round: {reason}");
            }
        }
    }
    Ok(entries)
}

/// Aggregate the tree and assemble the full manifest document.
///
/// `today` is the `lastModified` fallback for rounds without a `date`;
/// callers derive it from `generated_at` with [`fallback_date`].
pub fn build_manifest(
    tree: &ContentTree,
    header: &ManifestHeader,
    generated_at: String,
    today: NaiveDate,
) -> ContentResult<Manifest> {
    let entries = aggregate_as_of(tree, today)?;
    Ok(Manifest::new(header, generated_at, entries))
}

/// The calendar date (UTC) of a resolved `lastUpdated` timestamp.
///
/// Accepts RFC 3339, the [`GENERATED_AT_FORMAT`] shape, or anything
/// starting with `YYYY-MM-DD`. An unparsable override falls back to
/// today's date with a warning.
pub fn fallback_date(generated_at: &str) -> NaiveDate {
    if let Ok(dt) = DateTime::parse_from_rfc3339(generated_at) {
        return dt.with_timezone(&Utc).date_naive();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(generated_at, GENERATED_AT_FORMAT) {
        return dt.date();
    }
    if let Some(date) = generated_at
        .get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
    {
        return date;
    }
    tracing::warn!(value = %generated_at, "generation time has no date; using today for lastModified");
    Utc::now().date_naive()
}

/// Resolve the `lastUpdated` timestamp.
///
/// Priority:
/// 1. Explicit value (e.g. a `--generated-at` flag)
/// 2. `SOURCE_DATE_EPOCH` environment variable
/// 3. Current UTC time
pub fn resolve_generated_at(explicit: Option<&str>) -> String {
    if let Some(ts) = explicit {
        return ts.to_string();
    }

    if let Ok(epoch_str) = std::env::var("SOURCE_DATE_EPOCH") {
        if let Ok(epoch) = epoch_str.parse::<i64>() {
            if let Some(dt) = chrono::DateTime::from_timestamp(epoch, 0) {
                return dt.format(GENERATED_AT_FORMAT).to_string();
            }
        }
        tracing::warn!(value = %epoch_str, "ignoring unparsable SOURCE_DATE_EPOCH");
    }

    Utc::now().format(GENERATED_AT_FORMAT).to_string()
}

fn round_entry(round: &RoundDir, fallback_date: &str) -> Result<ManifestEntry, String> {
    let record = round.load_record().map_err(|e| e.to_string())?;

    let categories = match state(&record.categories) {
        FieldState::Missing => Vec::new(),
        FieldState::Valid(list) => list.clone(),
        FieldState::Invalid(_) => return Err("'categories' is not a list of names".to_string()),
    };

    let size = round_size(round, &categories);

    Ok(ManifestEntry {
        id: round.id.clone(),
        name: text_or(&record.name, &round.id),
        language: text_or(&record.language, DEFAULT_LANGUAGE),
        difficulty: text_or(&record.difficulty, DEFAULT_DIFFICULTY),
        categories,
        author: text_or(&record.author, DEFAULT_AUTHOR),
        last_modified: text_or(&record.date, fallback_date),
        size,
        description: text(&record.description)
            .valid()
            .or_else(|| text(&record.comment).valid())
            .map(str::to_string),
        tags: state(&record.tags).valid().cloned().unwrap_or_default(),
    })
}

fn text_or(field: &Option<Field<String>>, default: &str) -> String {
    text(field).valid().unwrap_or(default).to_string()
}

fn round_size(round: &RoundDir, categories: &[String]) -> u64 {
    let mut size = file_size(&round.record_path());
    for category in categories {
        if !is_plain_name(category) {
            continue;
        }
        let record = round.category_record_path(category);
        size += file_size(&record);
        size += directory_size(&round.category_dir(category), Some(&record));
    }
    size
}
