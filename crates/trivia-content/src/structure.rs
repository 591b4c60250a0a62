//! # Structural Round Check
//!
//! A fail-fast check of one round, run by authoring tools before a round
//! is handed to the repository validator. It stops at the first problem
//! and is stricter in two places:
//!
//! - a round with an empty `categories` list is an error here, while the
//!   repository validator only warns about it;
//! - every question must carry clue text (`answer`); an image alone is not
//!   enough.
//!
//! It does not look at image files or unknown fields.

use thiserror::Error;

use trivia_core::field::{state, text};
use trivia_core::{
    check_point_value, FieldState, QuestionRecord, LADDER_TEXT, ROUND_RECORD_FILE,
};

use crate::error::LoadError;
use crate::tree::{is_plain_name, ContentTree};

/// First structural problem found in a round.
#[derive(Debug, Error)]
pub enum StructureError {
    #[error("Round \"{0}\" does not exist.")]
    RoundNotFound(String),

    #[error("{0}")]
    Load(#[from] LoadError),

    #[error("Missing required field: {field} in {file}")]
    MissingField {
        field: &'static str,
        file: &'static str,
    },

    #[error("categories must be an array")]
    CategoriesNotAList,

    #[error("Round must have at least one category")]
    NoCategories,

    #[error("Category directory \"{0}\" does not exist")]
    CategoryNotFound(String),

    #[error("Questions for category \"{0}\" must be an array")]
    QuestionsNotAList(String),

    /// A question-level rule failed; `location` is `<category>[<index>]`.
    #[error("{location}: {message}")]
    Question { location: String, message: String },
}

/// Check one round of the tree, stopping at the first problem.
pub fn check_round_structure(tree: &ContentTree, round_id: &str) -> Result<(), StructureError> {
    let round = tree.round(round_id);
    if !is_plain_name(round_id) || !round.path.is_dir() {
        return Err(StructureError::RoundNotFound(round_id.to_string()));
    }

    let record = round.load_record()?;

    if !text(&record.name).is_present() {
        return Err(StructureError::MissingField {
            field: "name",
            file: ROUND_RECORD_FILE,
        });
    }
    let categories = match state(&record.categories) {
        FieldState::Missing => {
            return Err(StructureError::MissingField {
                field: "categories",
                file: ROUND_RECORD_FILE,
            })
        }
        FieldState::Invalid(_) => return Err(StructureError::CategoriesNotAList),
        FieldState::Valid(list) => list,
    };
    if categories.is_empty() {
        return Err(StructureError::NoCategories);
    }

    for category in categories {
        if !is_plain_name(category) || !round.has_category_dir(category) {
            return Err(StructureError::CategoryNotFound(category.clone()));
        }
        let record = round.load_category(category)?;
        // A missing `questions` key reads as an empty list.
        let questions = match state(&record.questions) {
            FieldState::Missing => continue,
            FieldState::Invalid(_) => {
                return Err(StructureError::QuestionsNotAList(category.clone()))
            }
            FieldState::Valid(list) => list,
        };
        for (index, entry) in questions.iter().enumerate() {
            let location = format!("{category}[{index}]");
            let question =
                QuestionRecord::from_entry(entry).map_err(|e| StructureError::Question {
                    location: location.clone(),
                    message: e.to_string(),
                })?;
            check_question(&question).map_err(|message| StructureError::Question {
                location,
                message,
            })?;
        }
    }

    tracing::debug!(round = %round_id, categories = categories.len(), "round structure is valid");
    Ok(())
}

fn check_question(question: &QuestionRecord) -> Result<(), String> {
    if text(&question.answer).valid().is_none() {
        return Err("Missing or invalid 'answer' field (the clue)".to_string());
    }
    if text(&question.question).valid().is_none() {
        return Err("Missing or invalid 'question' field (the response)".to_string());
    }
    if state(&question.available).valid().is_none() {
        return Err("'available' field must be a boolean".to_string());
    }
    let value = match state(&question.value).valid() {
        Some(v) if *v > 0.0 => *v,
        _ => return Err("'value' must be a positive number".to_string()),
    };
    if text(&question.cat).valid().is_none() {
        return Err("Missing or invalid 'cat' field".to_string());
    }
    if check_point_value(value).is_err() {
        return Err(format!("Point value must be {LADDER_TEXT}"));
    }
    if let FieldState::Invalid(_) = text(&question.image) {
        return Err("'image' field must be a string".to_string());
    }
    Ok(())
}
