//! # Boundary Inputs and Determinism
//!
//! Point-value boundaries and odd field types through the full validator,
//! and byte-identical manifest output over an unchanged tree.

use std::fs;
use std::path::Path;

use proptest::prelude::*;
use serde_json::{json, Value};
use trivia_cli::manifest::{run_manifest, ManifestArgs};
use trivia_cli::TriviaConfig;
use trivia_content::{build_manifest, fallback_date, validate, ContentTree, ManifestHeader};
use trivia_core::POINT_VALUES;

fn write_round(root: &Path, question: Value) {
    let round = root.join("edge_round");
    fs::create_dir_all(round.join("Networks")).unwrap();
    fs::write(
        round.join("round.json"),
        json!({"name": "Edge", "categories": ["Networks"]}).to_string(),
    )
    .unwrap();
    fs::write(
        round.join("Networks/cat.json"),
        json!({"name": "Networks", "questions": [question]}).to_string(),
    )
    .unwrap();
}

fn question_with(field: &str, value: Value) -> Value {
    let mut q = json!({
        "answer": "Port 443",
        "question": "Where does HTTPS listen?",
        "available": false,
        "value": 200,
        "cat": "Networks"
    });
    q[field] = value;
    q
}

fn error_messages(root: &Path) -> Vec<String> {
    let (errors, _) = validate(root).unwrap();
    errors.into_iter().map(|e| e.message).collect()
}

// =========================================================================
// Point-value boundaries
// =========================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn only_ladder_values_validate(value in 1u32..1_000) {
        let dir = tempfile::tempdir().unwrap();
        write_round(dir.path(), question_with("value", json!(value)));
        let errors = error_messages(dir.path());
        if POINT_VALUES.contains(&value) {
            prop_assert!(errors.is_empty(), "{:?}", errors);
        } else {
            prop_assert_eq!(errors.len(), 1);
            prop_assert!(errors[0].contains("100, 200, 300, 400, or 500"));
        }
    }
}

#[test]
fn non_positive_and_non_numeric_values_are_rejected() {
    for bad in [json!(0), json!(-100), json!("300"), json!(null), json!([300])] {
        let dir = tempfile::tempdir().unwrap();
        write_round(dir.path(), question_with("value", bad.clone()));
        assert_eq!(
            error_messages(dir.path()),
            vec!["'value' must be a positive number"],
            "value {bad}"
        );
    }
}

#[test]
fn fractional_rung_is_off_ladder() {
    let dir = tempfile::tempdir().unwrap();
    write_round(dir.path(), question_with("value", json!(300.5)));
    assert_eq!(
        error_messages(dir.path()),
        vec!["'value' must be 100, 200, 300, 400, or 500"]
    );
}

#[test]
fn wrong_field_types_are_reported_per_field() {
    let cases = [
        ("available", json!("yes"), "'available' field must be a boolean"),
        ("cat", json!(7), "Missing or invalid 'cat' field"),
        ("question", json!(""), "Missing or invalid 'question' field"),
        ("answer", json!(42), "'answer' field must be a string"),
        ("image", json!(true), "'image' field must be a string"),
    ];
    for (field, value, expected) in cases {
        let dir = tempfile::tempdir().unwrap();
        write_round(dir.path(), question_with(field, value));
        let errors = error_messages(dir.path());
        assert!(
            errors.iter().any(|e| e == expected),
            "{field}: expected {expected:?} in {errors:?}"
        );
    }
}

#[test]
fn image_with_directory_is_rejected_without_lookup() {
    for image in ["../secret.png", "sub/diagram.png", "sub\\diagram.png"] {
        let dir = tempfile::tempdir().unwrap();
        write_round(dir.path(), question_with("image", json!(image)));
        let errors = error_messages(dir.path());
        assert_eq!(errors.len(), 1, "{image}: {errors:?}");
        assert!(errors[0].starts_with("Image path must be filename only"));
    }
}

#[test]
fn unicode_names_are_carried_through() {
    let dir = tempfile::tempdir().unwrap();
    let round = dir.path().join("runde_ü");
    fs::create_dir_all(round.join("Größen")).unwrap();
    fs::write(
        round.join("round.json"),
        json!({"name": "Runde Ü", "categories": ["Größen"]}).to_string(),
    )
    .unwrap();
    fs::write(
        round.join("Größen/cat.json"),
        json!({"name": "Größen", "questions": [{
            "answer": "Ein Byte",
            "question": "Was sind 8 Bit?",
            "available": true,
            "value": 100,
            "cat": "Größen"
        }]})
        .to_string(),
    )
    .unwrap();
    let (errors, warnings) = validate(dir.path()).unwrap();
    assert!(errors.is_empty(), "{errors:?}");
    assert!(warnings.is_empty(), "{warnings:?}");
}

// =========================================================================
// Determinism
// =========================================================================

#[test]
fn manifest_is_identical_across_builds() {
    let dir = tempfile::tempdir().unwrap();
    write_round(dir.path(), question_with("value", json!(300)));
    let tree = ContentTree::open(dir.path()).unwrap();
    let header = ManifestHeader::default();
    let ts = "2024-05-01T00:00:00Z".to_string();

    let today = fallback_date(&ts);

    let first = build_manifest(&tree, &header, ts.clone(), today).unwrap();
    let second = build_manifest(&tree, &header, ts, today).unwrap();
    assert_eq!(
        first.to_json_pretty().unwrap(),
        second.to_json_pretty().unwrap()
    );
}

#[test]
fn manifest_command_output_only_follows_generation_time() {
    let repo = tempfile::tempdir().unwrap();
    write_round(&repo.path().join("rounds"), question_with("value", json!(300)));
    let config = TriviaConfig::default();
    let out = repo.path().join("manifest.json");

    let run = |ts: &str| -> Value {
        let args = ManifestArgs {
            rounds_dir: None,
            output: Some(out.clone()),
            generated_at: Some(ts.to_string()),
        };
        assert_eq!(run_manifest(&args, repo.path(), &config).unwrap(), 0);
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap()
    };

    let mut a = run("2024-05-01T00:00:00Z");
    let mut b = run("2025-01-01T12:30:00Z");
    assert_ne!(a["lastUpdated"], b["lastUpdated"]);
    // The round has no `date`, so its lastModified is the generation date.
    assert_eq!(a["rounds"][0]["lastModified"], "2024-05-01");
    assert_eq!(b["rounds"][0]["lastModified"], "2025-01-01");
    for doc in [&mut a, &mut b] {
        doc["lastUpdated"] = Value::Null;
        doc["rounds"][0]["lastModified"] = Value::Null;
    }
    assert_eq!(a, b);
}
