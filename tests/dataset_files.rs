// CLASSIFICATION: COMMUNITY
// Filename: dataset_files.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

use std::fs;

use ccregress::{load_configurations, load_expected_outcomes, HarnessError};
use tempfile::tempdir;

#[test]
fn loads_recorded_corpus_in_file_order() {
    let dir = tempdir().unwrap();
    let cfgs = dir.path().join("cfgs.csv");
    let valid = dir.path().join("valid.csv");
    fs::write(
        &cfgs,
        "-2.9671,1.8326,0,-3.1416,0.5,0.0873,2.9671\n0.1,0.2,0.3,0.4,0.5,0.6,7e-1\n\n",
    )
    .unwrap();
    fs::write(&valid, "true\nfalse\n").unwrap();

    let configs = load_configurations(&cfgs).unwrap();
    let expected = load_expected_outcomes(&valid).unwrap();
    assert_eq!(configs.len(), 2);
    assert_eq!(configs[0].len(), 7);
    assert_eq!(configs[0][0], -2.9671);
    assert_eq!(configs[1][6], 0.7);
    assert_eq!(expected, vec![true, false]);
}

#[test]
fn non_numeric_token_fails_whole_load() {
    let dir = tempdir().unwrap();
    let cfgs = dir.path().join("cfgs.csv");
    fs::write(&cfgs, "0.0,0.1,0.2\nabc,0.1,0.2\n0.3,0.4,0.5\n").unwrap();
    match load_configurations(&cfgs) {
        Err(HarnessError::MalformedInput {
            line, field, token, ..
        }) => {
            assert_eq!(line, 2);
            assert_eq!(field, Some(1));
            assert_eq!(token, "abc");
        }
        other => panic!("expected malformed input, got {other:?}"),
    }
}

#[test]
fn malformed_message_names_file_and_line() {
    let dir = tempdir().unwrap();
    let valid = dir.path().join("valid.csv");
    fs::write(&valid, "true\nyes\n").unwrap();
    let err = load_expected_outcomes(&valid).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("valid.csv:2"), "{msg}");
    assert!(msg.contains("yes"), "{msg}");
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let err = load_configurations(dir.path().join("absent.csv")).unwrap_err();
    assert!(matches!(err, HarnessError::Io { .. }));
}
