//! End-to-end tests running the classreg binary

use std::path::Path;
use std::process::{Command, Output};

fn classreg(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_classreg"))
        .args(args)
        .env("CLASSREG_LOG_LEVEL", "off")
        .output()
        .expect("failed to spawn classreg")
}

fn fixture(name: &str) -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
        .to_string_lossy()
        .into_owned()
}

#[test]
fn test_run_fixture_text() {
    let output = classreg(&["run", "-i", &fixture("zoo.classreg")]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);

    // `show Dog` ran before Animal was deleted
    assert!(stdout.contains("--inheritance--> Animal [1, unidirectional]"));
    assert!(stdout.contains("-trick_count: u32 = 0"));
    assert!(stdout.contains("+retrieve(item: Bone): bool"));
    assert!(stdout.contains("--association--> Bone [0..1]"));

    // The final summary shows the dangling edge
    assert!(stdout.contains("--inheritance--> <removed> [1, unidirectional]"));
    assert!(stdout.contains("2 classes, 2 relationships (1 dangling)"));
}

#[test]
fn test_run_fixture_json() {
    let output = classreg(&["run", "-i", &fixture("zoo.classreg"), "--json"]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["class_count"], 2);
    assert_eq!(value["dangling_count"], 1);
    let dog = &value["classes"][0];
    assert_eq!(dog["name"], "Dog");
    assert_eq!(dog["attributes"].as_array().unwrap().len(), 2);
    assert!(dog["relationships"][0]["target"].is_null());
    assert_eq!(dog["relationships"][1]["target"], "Bone");

    let shown = value["shown"][0].as_str().unwrap();
    assert!(shown.starts_with("+class Dog"));
    assert!(shown.contains("--inheritance--> Animal [1, unidirectional]"));
}

#[test]
fn test_run_negative_default_and_custom_kind() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("offsets.classreg");
    std::fs::write(
        &path,
        "add-class A\nadd-class B\nadd-attribute A offset --type int --default \"-1\" --static\nadd-relationship A B --kind uses\n",
    )
    .unwrap();

    let output = classreg(&["run", "-i", path.to_str().unwrap()]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("+offset: int$ = -1"));
    assert!(stdout.contains("--uses--> B"));
}

#[test]
fn test_check_reports_bad_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.classreg");
    std::fs::write(&path, "add-class A\nadd-relationship A\n").unwrap();

    let output = classreg(&["check", "-i", path.to_str().unwrap()]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("line 2:"));
}

#[test]
fn test_check_valid_fixture() {
    let output = classreg(&["check", "-i", &fixture("zoo.classreg")]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("15 statements"));
}

#[test]
fn test_commands_json() {
    let output = classreg(&["commands", "--json"]);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["total"], 15);
}
