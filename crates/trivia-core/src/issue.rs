//! # Validation Issues
//!
//! An [`Issue`] is one error or warning scoped to the entity it concerns.
//! The validator never stops at the first problem; it appends to an
//! [`IssueLog`] and the caller decides the verdict from the error count.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Issue severity. Only errors fail a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Schema or referential-integrity violation.
    Error,
    /// Non-fatal anomaly.
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => f.write_str("error"),
            Severity::Warning => f.write_str("warning"),
        }
    }
}

/// The entity an issue is attached to.
///
/// Displays as `round`, `round/category` or `round/category/question[i]`,
/// which is enough to locate the offending file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "level", rename_all = "snake_case")]
pub enum Scope {
    /// A whole round directory.
    Round { round: String },
    /// One category of a round.
    Category { round: String, category: String },
    /// One question, by position in its category's `questions` list.
    Question {
        round: String,
        category: String,
        index: usize,
    },
}

impl Scope {
    /// Scope for a round.
    pub fn round(round: impl Into<String>) -> Self {
        Scope::Round {
            round: round.into(),
        }
    }

    /// Narrow to a category of this scope's round.
    pub fn category(&self, category: impl Into<String>) -> Self {
        Scope::Category {
            round: self.round_id().to_string(),
            category: category.into(),
        }
    }

    /// Scope for one question of a category.
    pub fn question(round: impl Into<String>, category: impl Into<String>, index: usize) -> Self {
        Scope::Question {
            round: round.into(),
            category: category.into(),
            index,
        }
    }

    /// The round this scope belongs to.
    pub fn round_id(&self) -> &str {
        match self {
            Scope::Round { round }
            | Scope::Category { round, .. }
            | Scope::Question { round, .. } => round,
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Round { round } => write!(f, "{round}"),
            Scope::Category { round, category } => write!(f, "{round}/{category}"),
            Scope::Question {
                round,
                category,
                index,
            } => write!(f, "{round}/{category}/question[{index}]"),
        }
    }
}

/// A single scoped validation issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub severity: Severity,
    pub scope: Scope,
    pub message: String,
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.scope, self.message)
    }
}

/// Accumulated errors and warnings from one validation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueLog {
    errors: Vec<Issue>,
    warnings: Vec<Issue>,
}

impl IssueLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error.
    pub fn error(&mut self, scope: &Scope, message: impl Into<String>) {
        self.errors.push(Issue {
            severity: Severity::Error,
            scope: scope.clone(),
            message: message.into(),
        });
    }

    /// Record a warning. Warnings never affect the verdict.
    pub fn warning(&mut self, scope: &Scope, message: impl Into<String>) {
        self.warnings.push(Issue {
            severity: Severity::Warning,
            scope: scope.clone(),
            message: message.into(),
        });
    }

    /// Append every issue from `other`, preserving order.
    pub fn merge(&mut self, other: IssueLog) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    /// Errors in the order they were found.
    pub fn errors(&self) -> &[Issue] {
        &self.errors
    }

    /// Warnings in the order they were found.
    pub fn warnings(&self) -> &[Issue] {
        &self.warnings
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    /// A run passes when it produced no errors, whatever the warning count.
    pub fn is_pass(&self) -> bool {
        self.errors.is_empty()
    }

    /// Consume the log, returning `(errors, warnings)`.
    pub fn into_parts(self) -> (Vec<Issue>, Vec<Issue>) {
        (self.errors, self.warnings)
    }
}
