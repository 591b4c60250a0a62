//! # Content Scenarios
//!
//! End-to-end runs of the validator, structural check and aggregator over
//! small rounds trees built in temporary directories.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde_json::{json, Value};
use trivia_content::{
    aggregate_as_of, check_round_structure, validate, ContentError, ContentTree, Manifest,
    ManifestHeader, StructureError, Validator,
};
use trivia_core::{format_bytes, Scope};

// =========================================================================
// Fixtures
// =========================================================================

fn write_json(path: &Path, value: &Value) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, serde_json::to_string_pretty(value).unwrap()).unwrap();
}

fn programming_question(value: Value) -> Value {
    json!({
        "answer": "Ownership, borrowing and lifetimes",
        "question": "What does the borrow checker enforce?",
        "available": true,
        "value": value,
        "cat": "Programming"
    })
}

/// `rounds/demo_round/Programming` with the given questions.
fn demo_round(root: &Path, questions: Vec<Value>) {
    write_json(
        &root.join("demo_round/round.json"),
        &json!({"name": "Demo Round", "categories": ["Programming"]}),
    );
    write_json(
        &root.join("demo_round/Programming/cat.json"),
        &json!({"name": "Programming", "questions": questions}),
    );
}

fn messages(issues: &[trivia_core::Issue]) -> Vec<String> {
    issues.iter().map(ToString::to_string).collect()
}

// =========================================================================
// Validator
// =========================================================================

#[test]
fn well_formed_round_has_no_issues() {
    let dir = tempfile::tempdir().unwrap();
    demo_round(dir.path(), vec![programming_question(json!(300))]);

    let (errors, warnings) = validate(dir.path()).unwrap();
    assert!(errors.is_empty(), "unexpected errors: {:?}", messages(&errors));
    assert!(warnings.is_empty(), "unexpected warnings: {:?}", messages(&warnings));
}

#[test]
fn off_ladder_value_is_one_scoped_error() {
    let dir = tempfile::tempdir().unwrap();
    demo_round(dir.path(), vec![programming_question(json!(350))]);

    let (errors, warnings) = validate(dir.path()).unwrap();
    assert_eq!(errors.len(), 1, "{:?}", messages(&errors));
    assert!(warnings.is_empty());
    assert_eq!(errors[0].scope, Scope::question("demo_round", "Programming", 0));
    assert!(errors[0].message.contains("100, 200, 300, 400, or 500"));
}

#[test]
fn missing_image_is_an_error_and_root_copy_adds_a_warning() {
    let dir = tempfile::tempdir().unwrap();
    let mut question = programming_question(json!(200));
    question.as_object_mut().unwrap().remove("answer");
    question["image"] = json!("diagram.png");
    demo_round(dir.path(), vec![question]);

    let (errors, warnings) = validate(dir.path()).unwrap();
    assert_eq!(errors.len(), 1, "{:?}", messages(&errors));
    assert!(errors[0].message.contains("Referenced image file does not exist"));
    assert!(warnings.is_empty());

    // The same file dropped into the round root: still missing where it
    // belongs, plus the misplacement warning and the root sweep error.
    fs::write(dir.path().join("demo_round/diagram.png"), [0u8; 8]).unwrap();
    let (errors, warnings) = validate(dir.path()).unwrap();
    assert_eq!(warnings.len(), 1, "{:?}", messages(&warnings));
    assert!(warnings[0]
        .message
        .contains("exists in round root directory but should be in category directory (Programming/)"));
    assert!(errors
        .iter()
        .any(|e| e.message.contains("Referenced image file does not exist")));
    assert!(errors
        .iter()
        .any(|e| e.message.contains("found in round root directory")));

    // Moved into the category directory: clean.
    fs::rename(
        dir.path().join("demo_round/diagram.png"),
        dir.path().join("demo_round/Programming/diagram.png"),
    )
    .unwrap();
    let (errors, warnings) = validate(dir.path()).unwrap();
    assert!(errors.is_empty(), "{:?}", messages(&errors));
    assert!(warnings.is_empty());
}

#[test]
fn question_without_clue_or_image_has_one_either_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut question = programming_question(json!(100));
    question.as_object_mut().unwrap().remove("answer");
    demo_round(dir.path(), vec![question]);

    let (errors, _) = validate(dir.path()).unwrap();
    let either: Vec<_> = errors
        .iter()
        .filter(|e| e.message.contains("must have either"))
        .collect();
    assert_eq!(either.len(), 1);
    assert_eq!(errors.len(), 1, "{:?}", messages(&errors));
}

#[test]
fn sibling_rounds_are_validated_independently() {
    let dir = tempfile::tempdir().unwrap();
    demo_round(dir.path(), vec![programming_question(json!(400))]);
    fs::create_dir_all(dir.path().join("broken_round")).unwrap();
    fs::write(dir.path().join("broken_round/round.json"), "{ nope").unwrap();
    fs::create_dir_all(dir.path().join("missing_round")).unwrap();

    let (errors, _) = validate(dir.path()).unwrap();
    let rounds: Vec<&str> = errors.iter().map(|e| e.scope.round_id()).collect();
    assert_eq!(rounds, vec!["broken_round", "missing_round"]);
    assert!(errors[0].message.starts_with("Invalid JSON in round.json"));
    assert_eq!(errors[1].message, "Missing round.json file");
}

#[test]
fn missing_root_aborts_without_a_report() {
    let dir = tempfile::tempdir().unwrap();
    let err = validate(&dir.path().join("rounds")).unwrap_err();
    assert!(matches!(err, ContentError::RootNotFound { .. }));
}

#[test]
fn empty_categories_warn_in_validator_but_fail_structure_check() {
    let dir = tempfile::tempdir().unwrap();
    write_json(
        &dir.path().join("empty_round/round.json"),
        &json!({"name": "Empty", "categories": []}),
    );

    let tree = ContentTree::open(dir.path()).unwrap();
    let log = Validator::default().validate_repository(&tree).unwrap();
    assert!(log.is_pass());
    assert_eq!(log.warnings()[0].message, "Round has no categories");

    let err = check_round_structure(&tree, "empty_round").unwrap_err();
    assert!(matches!(err, StructureError::NoCategories));
    assert_eq!(err.to_string(), "Round must have at least one category");
}

#[test]
fn structure_check_accepts_what_the_validator_accepts() {
    let dir = tempfile::tempdir().unwrap();
    demo_round(
        dir.path(),
        vec![programming_question(json!(100)), programming_question(json!(500))],
    );
    let tree = ContentTree::open(dir.path()).unwrap();
    check_round_structure(&tree, "demo_round").unwrap();
    assert!(Validator::default().validate_repository(&tree).unwrap().is_pass());
}

// =========================================================================
// Aggregator
// =========================================================================

fn padded(value: &Value, len: usize) -> String {
    let mut s = value.to_string();
    assert!(s.len() <= len);
    s.extend(std::iter::repeat(' ').take(len - s.len()));
    s
}

#[test]
fn aggregated_size_counts_records_and_assets() {
    let dir = tempfile::tempdir().unwrap();
    let round = dir.path().join("demo_round");
    fs::create_dir_all(round.join("Programming")).unwrap();
    fs::write(
        round.join("round.json"),
        padded(&json!({"name": "Demo", "categories": ["Programming"]}), 120),
    )
    .unwrap();
    fs::write(
        round.join("Programming/cat.json"),
        padded(&json!({"name": "Programming", "questions": []}), 300),
    )
    .unwrap();
    fs::write(round.join("Programming/diagram.png"), vec![0u8; 2048]).unwrap();

    let tree = ContentTree::open(dir.path()).unwrap();
    let today = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
    let entries = aggregate_as_of(&tree, today).unwrap();
    assert_eq!(entries[0].size, 2468);

    let manifest = Manifest::new(&ManifestHeader::default(), "pinned".to_string(), entries);
    assert_eq!(manifest.total_size, 2468);
    assert_eq!(manifest.total_size_formatted, "2.41 KB");
    assert_eq!(format_bytes(manifest.total_size), "2.41 KB");
}

#[test]
fn aggregation_skips_invalid_rounds_but_keeps_the_rest() {
    let dir = tempfile::tempdir().unwrap();
    demo_round(dir.path(), vec![programming_question(json!(300))]);
    fs::create_dir_all(dir.path().join("zz_broken")).unwrap();
    fs::write(dir.path().join("zz_broken/round.json"), "[1, 2").unwrap();

    let tree = ContentTree::open(dir.path()).unwrap();
    let today = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
    let entries = aggregate_as_of(&tree, today).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, "demo_round");
    assert_eq!(entries[0].name, "Demo Round");
    assert_eq!(entries[0].categories, vec!["Programming"]);
}
