//! # Schema Validator
//!
//! Repository-wide validation of rounds, categories and questions. Every
//! problem becomes a scoped [`Issue`](trivia_core::Issue) in an
//! [`IssueLog`]; nothing short-circuits except a missing rounds directory.
//!
//! ## Rules
//!
//! 1. **Round**: `round.json` loads; `name` and `categories` present;
//!    `categories` is a list of strings (empty → warning); keys outside
//!    [`ROUND_SCHEMA_FIELDS`] → warning.
//! 2. **Category**: directory exists; `cat.json` loads; `name` present;
//!    `questions` is a list (empty → warning).
//! 3. **Question**: response text, clue-or-image, image shape and
//!    location, boolean `available`, ladder `value`, matching `cat`.
//! 4. **Round root**: no image files outside category directories.
//!
//! A round or category whose record cannot be loaded is reported once and
//! its subtree is skipped; siblings are still visited.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use trivia_core::field::{state, text};
use trivia_core::{
    check_point_value, CategoryRecord, FieldState, IssueLog, PointValueFault, QuestionRecord,
    RoundRecord, Scope, LADDER_TEXT, ROUND_RECORD_FILE,
};

use crate::error::ContentResult;
use crate::tree::{has_separator, is_plain_name, ContentTree, RoundDir};

/// File extensions treated as images by the round-root sweep.
pub const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "svg"];

/// Tunable validation behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationOptions {
    /// Report a question whose `cat` differs from its category's name.
    pub check_cat_matches: bool,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            check_cat_matches: true,
        }
    }
}

/// Validate every round under `root` with default options, returning
/// `(errors, warnings)`.
///
/// # Errors
///
/// Fails only if `root` is not a directory.
pub fn validate(
    root: &Path,
) -> ContentResult<(Vec<trivia_core::Issue>, Vec<trivia_core::Issue>)> {
    let tree = ContentTree::open(root)?;
    Ok(Validator::default().validate_repository(&tree)?.into_parts())
}

/// Repository validator.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    options: ValidationOptions,
}

impl Validator {
    pub fn new(options: ValidationOptions) -> Self {
        Self { options }
    }

    /// Validate all rounds in the tree.
    pub fn validate_repository(&self, tree: &ContentTree) -> ContentResult<IssueLog> {
        let rounds = tree.rounds()?;
        tracing::info!(root = %tree.root().display(), rounds = rounds.len(), "validating rounds");

        let mut log = IssueLog::new();
        for round in &rounds {
            log.merge(self.validate_round(round));
        }
        Ok(log)
    }

    /// Validate one round directory.
    pub fn validate_round(&self, round: &RoundDir) -> IssueLog {
        tracing::debug!(round = %round.id, "validating round");
        let scope = Scope::round(&round.id);
        let mut log = IssueLog::new();

        let record = match round.load_record() {
            Ok(r) => r,
            Err(e) => {
                log.error(&scope, e.to_string());
                return log;
            }
        };

        self.check_round_metadata(&record, &scope, &mut log);

        if let Some(categories) = state(&record.categories).valid() {
            for category in categories {
                self.validate_category(round, category, &scope, &mut log);
            }
            check_round_root_images(round, &scope, &mut log);
        }

        log
    }

    fn check_round_metadata(&self, record: &RoundRecord, scope: &Scope, log: &mut IssueLog) {
        match text(&record.name) {
            FieldState::Missing => {
                log.error(scope, format!("Missing required field 'name' in {ROUND_RECORD_FILE}"))
            }
            FieldState::Invalid(_) => {
                log.error(scope, format!("'name' field must be a string in {ROUND_RECORD_FILE}"))
            }
            FieldState::Valid(_) => {}
        }

        match state(&record.categories) {
            FieldState::Missing => log.error(
                scope,
                format!("Missing required field 'categories' in {ROUND_RECORD_FILE}"),
            ),
            FieldState::Invalid(_) => log.error(scope, "'categories' must be an array of strings"),
            FieldState::Valid(list) if list.is_empty() => {
                log.warning(scope, "Round has no categories")
            }
            FieldState::Valid(_) => {}
        }

        for field in record.unrecognized_fields() {
            log.warning(scope, format!("Unknown field '{field}' in {ROUND_RECORD_FILE}"));
        }
    }

    fn validate_category(
        &self,
        round: &RoundDir,
        category: &str,
        round_scope: &Scope,
        log: &mut IssueLog,
    ) {
        let scope = round_scope.category(category);

        if !is_plain_name(category) {
            log.error(&scope, "Category name must be a plain directory name");
            return;
        }
        if !round.has_category_dir(category) {
            log.error(&scope, "Category directory does not exist");
            return;
        }

        let record = match round.load_category(category) {
            Ok(r) => r,
            Err(e) => {
                log.error(&scope, e.to_string());
                return;
            }
        };

        self.validate_category_record(round, category, &record, &scope, log);
    }

    fn validate_category_record(
        &self,
        round: &RoundDir,
        category: &str,
        record: &CategoryRecord,
        scope: &Scope,
        log: &mut IssueLog,
    ) {
        match text(&record.name) {
            FieldState::Missing => log.error(scope, "Missing required field 'name'"),
            FieldState::Invalid(_) => log.error(scope, "'name' field must be a string"),
            FieldState::Valid(_) => {}
        }

        let Some(questions) = state(&record.questions).valid() else {
            log.error(scope, "'questions' must be an array");
            return;
        };

        if questions.is_empty() {
            log.warning(scope, "Category has no questions");
            return;
        }

        for (index, entry) in questions.iter().enumerate() {
            let q_scope = Scope::question(&round.id, category, index);
            match QuestionRecord::from_entry(entry) {
                Ok(question) => self.validate_question(round, category, &question, &q_scope, log),
                Err(e) => log.error(&q_scope, e.to_string()),
            }
        }
    }

    fn validate_question(
        &self,
        round: &RoundDir,
        category: &str,
        question: &QuestionRecord,
        scope: &Scope,
        log: &mut IssueLog,
    ) {
        if text(&question.question).valid().is_none() {
            log.error(scope, "Missing or invalid 'question' field");
        }

        let answer = text(&question.answer);
        if let FieldState::Invalid(_) = answer {
            log.error(scope, "'answer' field must be a string");
        }

        let image = text(&question.image);
        match image {
            FieldState::Invalid(_) => log.error(scope, "'image' field must be a string"),
            FieldState::Valid(name) => check_image(round, category, name, scope, log),
            FieldState::Missing => {}
        }

        if !is_supplied(&answer) && !is_supplied(&image) {
            log.error(
                scope,
                "Question must have either 'answer' (clue) or 'image' field",
            );
        }

        if state(&question.available).valid().is_none() {
            log.error(scope, "'available' field must be a boolean");
        }

        match state(&question.value).valid().map(|v| check_point_value(*v)) {
            None | Some(Err(PointValueFault::NotPositive)) => {
                log.error(scope, "'value' must be a positive number")
            }
            Some(Err(PointValueFault::OffLadder)) => {
                log.error(scope, format!("'value' must be {LADDER_TEXT}"))
            }
            Some(Ok(_)) => {}
        }

        match text(&question.cat).valid() {
            None => log.error(scope, "Missing or invalid 'cat' field"),
            Some(cat) if self.options.check_cat_matches && cat != category => log.error(
                scope,
                format!("'cat' field \"{cat}\" does not match category \"{category}\""),
            ),
            Some(_) => {}
        }
    }
}

/// Image references must be bare filenames that exist in the category
/// directory. A copy sitting in the round root is reported as a separate
/// warning; it never replaces the missing-file error.
fn check_image(round: &RoundDir, category: &str, image: &str, scope: &Scope, log: &mut IssueLog) {
    if has_separator(image) || !is_plain_name(image) {
        log.error(
            scope,
            format!("Image path must be filename only, no directory separators: \"{image}\""),
        );
        return;
    }

    let expected = round.category_dir(category).join(image);
    if expected.is_file() {
        return;
    }

    log.error(
        scope,
        format!(
            "Referenced image file does not exist: \"{image}\" (expected at {})",
            expected.display()
        ),
    );

    if round.path.join(image).is_file() {
        log.warning(
            scope,
            format!(
                "Image \"{image}\" exists in round root directory but should be in category directory ({category}/)"
            ),
        );
    }
}

/// Flag image files placed directly in the round directory.
fn check_round_root_images(round: &RoundDir, scope: &Scope, log: &mut IssueLog) {
    sweep_root_files(round.root_files(), scope, log);
}

fn sweep_root_files(listing: std::io::Result<Vec<String>>, scope: &Scope, log: &mut IssueLog) {
    let files = match listing {
        Ok(files) => files,
        Err(e) => {
            log.warning(
                scope,
                format!("Could not check round root directory for orphaned images: {e}"),
            );
            return;
        }
    };

    for file in files.iter().filter(|f| f.as_str() != ROUND_RECORD_FILE) {
        if is_image_file(file) {
            log.error(
                scope,
                format!(
                    "Image file \"{file}\" found in round root directory. Images must be placed in category subdirectories."
                ),
            );
        }
    }
}

/// True if a clue or image field carries something. A wrong-typed value
/// counts unless it is `false`, `0` or empty.
fn is_supplied(field: &FieldState<'_, str>) -> bool {
    match field {
        FieldState::Missing => false,
        FieldState::Valid(_) => true,
        FieldState::Invalid(value) => match value {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        },
    }
}

/// True if the file name has an image extension (case-insensitive).
pub fn is_image_file(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}
