//! # trivia-core: Foundational Types for the Content Repository
//!
//! Defines the typed records read from a rounds tree, the issue types the
//! validator accumulates, and the small value rules shared by every pass
//! over the tree. Every other crate in the workspace depends on
//! `trivia-core`; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Explicit schema, lenient typing.** `RoundRecord`, `CategoryRecord`
//!    and `QuestionRecord` name every known field. Each field is a
//!    [`Field<T>`], which keeps a value of the wrong JSON type instead of
//!    rejecting the whole document, so a single malformed field becomes a
//!    single scoped issue.
//!
//! 2. **Issues are data.** Schema and referential problems are collected
//!    into an [`IssueLog`], never returned as `Err`. Only environment
//!    failures propagate.
//!
//! 3. **One ladder.** The closed point-value set lives in [`ladder`] and is
//!    the single definition used by both validation paths.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `trivia-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod field;
pub mod issue;
pub mod ladder;
pub mod record;
pub mod size;

pub use error::CoreError;
pub use field::{Field, FieldState};
pub use issue::{Issue, IssueLog, Scope, Severity};
pub use ladder::{check_point_value, PointValueFault, LADDER_TEXT, POINT_VALUES};
pub use record::{
    CategoryRecord, QuestionRecord, RoundRecord, CATEGORY_RECORD_FILE, ROUND_RECORD_FILE,
    ROUND_SCHEMA_FIELDS,
};
pub use size::format_bytes;
