//! Concurrency tests for the liftlog binary.
//!
//! Overlapping load-mutate-save cycles carry a documented lost-update
//! risk: the later save wins. What the file locks do guarantee is that
//! the document file itself never ends up torn or unparseable, which is
//! what these tests pin down.

use assert_cmd::Command;
use std::fs;
use std::thread;
use tempfile::TempDir;

fn cli() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("liftlog"))
}

fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

#[test]
fn test_concurrent_increments_leave_document_parseable() {
    let temp_dir = setup_test_dir();
    let dir = temp_dir.path().to_path_buf();

    // Seed the document so all writers start from the same file
    cli()
        .args(["inc", "Bench Press", "--data-dir"])
        .arg(&dir)
        .assert()
        .success();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let dir = dir.clone();
            thread::spawn(move || {
                for _ in 0..5 {
                    cli()
                        .args(["inc", "Bench Press", "--data-dir"])
                        .arg(&dir)
                        .assert()
                        .success();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    // The document must still parse and validate; some increments may have
    // been lost to racing writers, but the weight only ever moved upward.
    let raw = fs::read_to_string(dir.join("workouts.json")).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let weight = doc["exercises"]["Bench Press"]["current_weight"]
        .as_f64()
        .unwrap();
    assert!(weight >= 170.0, "weight regressed below seed: {}", weight);
    assert!(weight <= 270.0, "weight above all-increments bound: {}", weight);
}

#[test]
fn test_concurrent_loggers_never_tear_the_file() {
    let temp_dir = setup_test_dir();
    let dir = temp_dir.path().to_path_buf();

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let dir = dir.clone();
            thread::spawn(move || {
                for j in 0..3 {
                    cli()
                        .args(["log", "--notes"])
                        .arg(format!("writer {} session {}", i, j))
                        .arg("--data-dir")
                        .arg(&dir)
                        .assert()
                        .success();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let raw = fs::read_to_string(dir.join("workouts.json")).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let history = doc["history"].as_array().unwrap();

    // Lost updates are accepted; torn or duplicated entries are not.
    assert!(!history.is_empty());
    assert!(history.len() <= 12);
    for entry in history {
        assert!(entry["notes"].as_str().unwrap().starts_with("writer"));
    }
}
