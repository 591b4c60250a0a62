//! # Typed Records
//!
//! The three on-disk record shapes:
//!
//! ```text
//! rounds/<round>/round.json            RoundRecord
//! rounds/<round>/<category>/cat.json   CategoryRecord { questions: [QuestionRecord] }
//! rounds/<round>/<category>/<image>    referenced by QuestionRecord::image
//! ```
//!
//! Every known field is named and typed. The key names of a round document
//! are kept in [`RoundRecord::keys`] for unknown-field warnings; values of
//! unknown keys are dropped.
//!
//! Note the field naming inherited from the game: `answer` holds the clue
//! shown to contestants, `question` holds the expected response.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{json_type_name, CoreError};
use crate::field::Field;

/// File name of a round record inside its round directory.
pub const ROUND_RECORD_FILE: &str = "round.json";

/// File name of a category record inside its category directory.
pub const CATEGORY_RECORD_FILE: &str = "cat.json";

/// Round-level keys the validator recognises. Any other key present in a
/// round record produces an "unknown field" warning.
pub const ROUND_SCHEMA_FIELDS: [&str; 6] =
    ["name", "categories", "comment", "author", "version", "created"];

/// Contents of `round.json`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RoundRecord {
    pub name: Option<Field<String>>,
    /// Ordered category names; each names a subdirectory of the round.
    pub categories: Option<Field<Vec<String>>>,
    /// Legacy free-text description.
    pub comment: Option<Field<String>>,
    pub author: Option<Field<String>>,
    pub version: Option<Field<String>>,
    pub created: Option<Field<String>>,
    pub description: Option<Field<String>>,
    #[serde(rename = "lang")]
    pub language: Option<Field<String>>,
    pub difficulty: Option<Field<String>>,
    /// Last-modified date, `YYYY-MM-DD`.
    pub date: Option<Field<String>>,
    pub tags: Option<Field<Vec<String>>>,
    /// Every top-level key of the source document, `null`-valued ones
    /// included, as listed by the parsed document.
    #[serde(skip)]
    pub keys: Vec<String>,
}

impl RoundRecord {
    /// Decode a parsed `round.json` document.
    pub fn from_document(document: Value) -> Result<Self, CoreError> {
        let Some(map) = document.as_object() else {
            return Err(CoreError::NotAnObject {
                what: ROUND_RECORD_FILE.to_string(),
                found: json_type_name(&document),
            });
        };
        let keys = map.keys().cloned().collect();
        let mut record: Self = serde_json::from_value(document)?;
        record.keys = keys;
        Ok(record)
    }

    /// Document keys outside [`ROUND_SCHEMA_FIELDS`]. A key counts even
    /// when its value is `null`.
    pub fn unrecognized_fields(&self) -> Vec<&str> {
        self.keys
            .iter()
            .map(String::as_str)
            .filter(|key| !ROUND_SCHEMA_FIELDS.contains(key))
            .collect()
    }
}

/// Contents of `cat.json`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CategoryRecord {
    pub name: Option<Field<String>>,
    pub difficulty: Option<Field<String>>,
    pub author: Option<Field<String>>,
    pub licence: Option<Field<String>>,
    pub date: Option<Field<String>>,
    /// Raw question entries. Each entry is decoded separately with
    /// [`QuestionRecord::from_entry`] so one bad entry cannot hide the rest.
    pub questions: Option<Field<Vec<Value>>>,
}

impl CategoryRecord {
    /// Decode a parsed `cat.json` document.
    pub fn from_document(document: Value) -> Result<Self, CoreError> {
        if !document.is_object() {
            return Err(CoreError::NotAnObject {
                what: CATEGORY_RECORD_FILE.to_string(),
                found: json_type_name(&document),
            });
        }
        Ok(serde_json::from_value(document)?)
    }
}

/// One entry of a category's `questions` list.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct QuestionRecord {
    /// Clue text shown to contestants.
    pub answer: Option<Field<String>>,
    /// Expected contestant response.
    pub question: Option<Field<String>>,
    pub available: Option<Field<bool>>,
    pub value: Option<Field<f64>>,
    /// Owning category name.
    pub cat: Option<Field<String>>,
    /// Bare image filename inside the category directory.
    pub image: Option<Field<String>>,
}

impl QuestionRecord {
    /// Decode one entry of a `questions` list.
    pub fn from_entry(entry: &Value) -> Result<Self, CoreError> {
        if !entry.is_object() {
            return Err(CoreError::NotAnObject {
                what: "question entry".to_string(),
                found: json_type_name(entry),
            });
        }
        Ok(serde_json::from_value(entry.clone())?)
    }
}
