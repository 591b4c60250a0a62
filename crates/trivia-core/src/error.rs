//! # Error Types
//!
//! Errors raised while turning raw JSON into typed records. Data-shape
//! problems inside a record never surface here; they are carried as
//! [`crate::Field::Invalid`] values and reported by the validator.

use thiserror::Error;

/// Top-level error type for record construction.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A document or list entry was expected to be a JSON object.
    #[error("{what} must be a JSON object, found {found}")]
    NotAnObject {
        /// What was being decoded (e.g. `round.json`).
        what: String,
        /// JSON type name of the value actually found.
        found: &'static str,
    },

    /// JSON deserialization failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Name of a JSON value's type, as used in error messages.
pub fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
