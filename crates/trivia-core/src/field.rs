//! # Lenient Field Typing
//!
//! A [`Field<T>`] is either a value of the expected type or whatever JSON
//! value was found instead. Records wrap every field as
//! `Option<Field<T>>`:
//!
//! | JSON                 | Rust                          |
//! |----------------------|-------------------------------|
//! | key absent / `null`  | `None`                        |
//! | expected type        | `Some(Field::Valid(t))`       |
//! | any other type       | `Some(Field::Invalid(value))` |
//!
//! Deserializing a record therefore cannot fail on field types, and the
//! validator reports each type mismatch at the field where it occurs.

use serde::Deserialize;
use serde_json::Value;

/// A field value that kept its shape even when it has the wrong type.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Field<T> {
    /// The value has the expected type.
    Valid(T),
    /// The value is present but has another JSON type.
    Invalid(Value),
}

impl<T> Field<T> {
    /// Returns the typed value, if valid.
    pub fn valid(&self) -> Option<&T> {
        match self {
            Field::Valid(v) => Some(v),
            Field::Invalid(_) => None,
        }
    }
}

/// Borrowed view of an optional field, used by the validators.
#[derive(Debug, PartialEq)]
pub enum FieldState<'a, T: ?Sized> {
    /// Key absent, `null`, or an empty string.
    Missing,
    /// Present with the expected type.
    Valid(&'a T),
    /// Present with another JSON type.
    Invalid(&'a Value),
}

impl<'a, T: ?Sized> FieldState<'a, T> {
    /// True unless the field is missing.
    pub fn is_present(&self) -> bool {
        !matches!(self, FieldState::Missing)
    }

    /// Returns the typed value, if valid.
    pub fn valid(&self) -> Option<&'a T> {
        match self {
            FieldState::Valid(v) => Some(v),
            _ => None,
        }
    }
}

/// View an optional field.
pub fn state<T>(field: &Option<Field<T>>) -> FieldState<'_, T> {
    match field {
        None => FieldState::Missing,
        Some(Field::Valid(v)) => FieldState::Valid(v),
        Some(Field::Invalid(v)) => FieldState::Invalid(v),
    }
}

/// View an optional text field. An empty string counts as missing.
pub fn text(field: &Option<Field<String>>) -> FieldState<'_, str> {
    match field {
        None => FieldState::Missing,
        Some(Field::Valid(s)) if s.is_empty() => FieldState::Missing,
        Some(Field::Valid(s)) => FieldState::Valid(s.as_str()),
        Some(Field::Invalid(v)) => FieldState::Invalid(v),
    }
}
