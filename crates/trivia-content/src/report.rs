//! # Report Emitter
//!
//! Plain-text rendering of an [`IssueLog`]:
//!
//! ```text
//! Errors: 1
//! Warnings: 1
//!
//!   ERROR: demo_round/Programming/question[0]: 'value' must be 100, 200, 300, 400, or 500
//!   WARN: demo_round/Networks: Category has no questions
//!
//! FAILED: 1 error(s) found.
//! ```
//!
//! Errors always precede warnings. The verdict line is the last line.

use std::io::{self, Write};

use trivia_core::IssueLog;

/// Write the validation report for `log` to `out`.
pub fn write_validation_report(log: &IssueLog, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Errors: {}", log.error_count())?;
    writeln!(out, "Warnings: {}", log.warning_count())?;

    if log.error_count() + log.warning_count() > 0 {
        writeln!(out)?;
    }
    for issue in log.errors() {
        writeln!(out, "  ERROR: {issue}")?;
    }
    for issue in log.warnings() {
        writeln!(out, "  WARN: {issue}")?;
    }

    writeln!(out)?;
    writeln!(out, "{}", verdict(log))
}

/// The final line of the report.
pub fn verdict(log: &IssueLog) -> String {
    match (log.error_count(), log.warning_count()) {
        (0, 0) => "PASSED: all rounds are valid.".to_string(),
        (0, w) => format!("PASSED with {w} warning(s)."),
        (e, _) => format!("FAILED: {e} error(s) found."),
    }
}
