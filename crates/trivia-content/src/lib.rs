//! # trivia-content: Validation and Aggregation Engine
//!
//! Everything that reads a rounds tree lives here:
//!
//! - **Tree Walker** ([`tree`]): enumerates rounds and loads `round.json`
//!   and `cat.json` records through one shared abstraction.
//!
//! - **Schema Validator** ([`validate`]): lenient, repository-wide
//!   validation that collects scoped errors and warnings.
//!
//! - **Structural Check** ([`structure`]): strict, fail-fast check of a
//!   single round.
//!
//! - **Manifest Aggregator** ([`manifest`]): per-round metadata and size
//!   totals for the published index.
//!
//! - **Report Emitter** ([`report`]): plain-text validation report.
//!
//! Supporting modules: [`sizing`] for on-disk byte counts, [`listing`] for
//! round summaries, [`repo`] for repository root discovery.
//!
//! ## On-Disk Layout
//!
//! ```text
//! rounds/
//!   demo_round/
//!     round.json            { "name", "categories": [...] }
//!     Programming/
//!       cat.json            { "name", "questions": [...] }
//!       diagram.png
//! ```
//!
//! All passes are read-only except [`Manifest::write_to`].

pub mod error;
pub mod listing;
pub mod manifest;
pub mod report;
pub mod repo;
pub mod sizing;
pub mod structure;
pub mod tree;
pub mod validate;

pub use error::{ContentError, ContentResult, LoadError};
pub use listing::{list_rounds, RoundSummary};
pub use manifest::{
    aggregate, aggregate_as_of, build_manifest, fallback_date, resolve_generated_at, Contributor,
    Manifest, ManifestEntry, ManifestHeader, MANIFEST_FILE,
};
pub use report::write_validation_report;
pub use repo::{find_repository_root, ROUNDS_DIR};
pub use structure::{check_round_structure, StructureError};
pub use tree::{ContentTree, RoundDir};
pub use validate::{validate, ValidationOptions, Validator};
