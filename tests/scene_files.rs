// CLASSIFICATION: COMMUNITY
// Filename: scene_files.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

use std::fs;

use ccregress::oracle::BallRobot;
use ccregress::{run, Configuration, Environment, HarnessError, ValidityOracle};
use tempfile::tempdir;

#[test]
fn toml_scene_replaces_default_rings() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("pillar.toml");
    fs::write(
        &path,
        "radius = 0.5\n\n[[sphere]]\nlabel = \"pillar\"\ncenter = [0.0, 0.0, 0.0]\n",
    )
    .unwrap();
    let env = Environment::from_scene_file(&path).unwrap();
    assert_eq!(env.len(), 1);
    assert_eq!(env.obstacles()[0].label, "pillar");

    let robot = BallRobot::new(0.1);
    assert_eq!(robot.validate(&Configuration::from([0.0, 0.0, 0.55]), &env), Ok(false));
    assert_eq!(robot.validate(&Configuration::from([0.0, 0.0, 0.7]), &env), Ok(true));
}

#[test]
fn same_corpus_different_scene() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.json");
    fs::write(&path, r#"{ "sphere": [] }"#).unwrap();
    let empty = Environment::from_scene_file(&path).unwrap();
    assert!(empty.is_empty());

    // Recorded against the default scene: inside a lower-ring sphere.
    let configs = vec![Configuration::from([0.55, 0.0, 0.25])];
    let expected = vec![false];
    let robot = BallRobot::default();
    let drift: Vec<_> = run(&configs, &expected, &empty, &robot)
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(drift.len(), 1);
    assert!(drift[0].actual);
}

#[test]
fn broken_scene_is_reported_with_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "[[sphere]]\ncenter = [0.0, 0.0]\n").unwrap();
    match Environment::from_scene_file(&path) {
        Err(HarnessError::Scene { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected scene error, got {other:?}"),
    }
}
