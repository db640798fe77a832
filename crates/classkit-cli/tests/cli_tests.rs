//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn classkit() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("classkit").unwrap()
}

const VALID_PLAN: &str = r#"[course]
title = "Algebra I"
teacher = "mokafor"
name = "Amara Okafor"
email = "amara@school.example"

[[assignments]]
title = "Linear equations"
description = "Solve exercises 1-10"
due = "2026-09-01T00:00:00Z"

[[quizzes]]
title = "Arithmetic check"
duration_minutes = 20

[[quizzes.questions]]
text = "What is 2 + 2?"
options = ["3", "4"]
correct_answer = "4"

[[slides]]
title = "Intro to algebra"
content = "Variables stand for unknown numbers."
"#;

const SLOPPY_PLAN: &str = r#"[course]
title = "Rushed"
teacher = "mokafor"

[[quizzes]]
title = "Untimed"
duration_minutes = 0
"#;

#[test]
fn validate_valid_plan() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("algebra.toml");
    std::fs::write(&path, VALID_PLAN).unwrap();

    classkit()
        .arg("validate")
        .arg("--plan")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Algebra I"))
        .stdout(predicate::str::contains("1 assignments, 1 quizzes, 1 slides"))
        .stdout(predicate::str::contains("All course plans valid"));
}

#[test]
fn validate_flags_zero_duration() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rushed.toml");
    std::fs::write(&path, SLOPPY_PLAN).unwrap();

    classkit()
        .arg("validate")
        .arg("--plan")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("WARNING"))
        .stdout(predicate::str::contains("zero minutes"))
        .stdout(predicate::str::contains("1 warning(s) found"));
}

#[test]
fn validate_directory() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("algebra.toml"), VALID_PLAN).unwrap();
    std::fs::write(dir.path().join("rushed.toml"), SLOPPY_PLAN).unwrap();

    classkit()
        .arg("validate")
        .arg("--plan")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Algebra I"))
        .stdout(predicate::str::contains("Rushed"));
}

#[test]
fn validate_nonexistent_file() {
    classkit()
        .arg("validate")
        .arg("--plan")
        .arg("nonexistent.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    classkit()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created plans/example.toml"));

    assert!(dir.path().join("plans/example.toml").exists());
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    classkit().current_dir(dir.path()).arg("init").assert().success();

    classkit()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn init_output_validates_cleanly() {
    let dir = TempDir::new().unwrap();

    classkit().current_dir(dir.path()).arg("init").assert().success();

    classkit()
        .current_dir(dir.path())
        .arg("validate")
        .arg("--plan")
        .arg("plans/example.toml")
        .assert()
        .success()
        .stdout(predicate::str::contains("All course plans valid"));
}

#[test]
fn demo_walks_the_lifecycle() {
    classkit()
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created assignment 1"))
        .stdout(predicate::str::contains("Created quiz 1"))
        .stdout(predicate::str::contains("Quiz results"))
        .stdout(predicate::str::contains("Deleted 1 assignment(s)"))
        .stdout(predicate::str::contains("Student events"));
}

#[test]
fn show_renders_tables() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("algebra.toml");
    std::fs::write(&path, VALID_PLAN).unwrap();

    classkit()
        .arg("show")
        .arg("--plan")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Assignments"))
        .stdout(predicate::str::contains("Linear equations"))
        .stdout(predicate::str::contains("Arithmetic check"));
}

#[test]
fn show_emits_parseable_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("algebra.toml");
    std::fs::write(&path, VALID_PLAN).unwrap();

    let output = classkit()
        .arg("show")
        .arg("--plan")
        .arg(&path)
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let roster: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(roster["course"], "Algebra I");
    assert_eq!(roster["teacher"], "mokafor");
    assert_eq!(roster["assignments"].as_array().unwrap().len(), 1);
    assert_eq!(roster["quizzes"][0]["questions"][0]["id"], 1);
}

#[test]
fn show_rejects_unknown_format() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("algebra.toml");
    std::fs::write(&path, VALID_PLAN).unwrap();

    classkit()
        .arg("show")
        .arg("--plan")
        .arg(&path)
        .arg("--format")
        .arg("yaml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format"));
}

#[test]
fn help_output() {
    classkit()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Classroom authoring toolkit"));
}

#[test]
fn version_output() {
    classkit()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("classkit"));
}
