// CLASSIFICATION: COMMUNITY
// Filename: recorded_corpus.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

use ccregress::oracle::BallRobot;
use ccregress::{build_default_environment, load_configurations, load_expected_outcomes, run};
use corpus_gen::recorder::{write_corpus, CorpusRecorder, DEFAULT_BOUNDS, DEFAULT_SEED};
use tempfile::tempdir;

#[test]
fn replaying_a_fresh_corpus_is_clean() {
    let dir = tempdir().unwrap();
    let cfgs = dir.path().join("cfgs.csv");
    let valid = dir.path().join("valid.csv");
    let env = build_default_environment();
    let robot = BallRobot::default();

    let samples = CorpusRecorder::new(DEFAULT_BOUNDS.to_vec(), DEFAULT_SEED)
        .unwrap()
        .record(500, &robot, &env)
        .unwrap();
    write_corpus(&samples, &cfgs, &valid).unwrap();

    let configs = load_configurations(&cfgs).unwrap();
    let expected = load_expected_outcomes(&valid).unwrap();
    assert_eq!(configs.len(), 500);
    assert_eq!(configs[17], samples[17].configuration);
    let mut stream = run(&configs, &expected, &env, &robot).unwrap();
    assert!(stream.next().is_none());
    assert_eq!(stream.checked(), 500);
}

#[test]
fn flipped_outcomes_are_exactly_the_mismatches() {
    let dir = tempdir().unwrap();
    let cfgs = dir.path().join("cfgs.csv");
    let valid = dir.path().join("valid.csv");
    let env = build_default_environment();
    let robot = BallRobot::default();

    let mut recorder = CorpusRecorder::new(DEFAULT_BOUNDS.to_vec(), 11).unwrap();
    let mut samples = recorder.record(300, &robot, &env).unwrap();
    let flipped = recorder.flip(&mut samples, 0.05);
    write_corpus(&samples, &cfgs, &valid).unwrap();

    let configs = load_configurations(&cfgs).unwrap();
    let expected = load_expected_outcomes(&valid).unwrap();
    let found: Vec<usize> = run(&configs, &expected, &env, &robot)
        .unwrap()
        .map(|r| r.map(|m| m.index))
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(found, flipped);
}
