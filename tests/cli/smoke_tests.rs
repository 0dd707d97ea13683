use assert_cmd::Command;
use predicates::prelude::*;

fn rangekit() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_rangekit"));
    cmd.env_remove("RANGEKIT_SEED").env_remove("RUST_LOG");
    cmd
}

#[test]
fn shows_help() {
    rangekit()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("rangekit"));
}

#[test]
fn inspect_normalizes_reversed_literal() {
    rangekit()
        .args(["inspect", "[5, 2]"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[2, 5]"))
        .stdout(predicate::str::contains("length    3"))
        .stdout(predicate::str::contains("sum       7"));
}

#[test]
fn inspect_json() {
    let output = rangekit().args(["--format", "json", "inspect", "-4,4"]).output().unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["min"], -4);
    assert_eq!(value["max"], 4);
    assert_eq!(value["length"], 8);
    assert_eq!(value["sum"], 0);
}

#[test]
fn contains_upper_bound() {
    rangekit().args(["contains", "[3, 3]", "3"]).assert().success().stdout("true\n");
    rangekit()
        .args(["contains", "[3, 3]", "3", "--exclusive"])
        .assert()
        .success()
        .stdout("false\n");
    rangekit().args(["contains", "[1, 4]", "3.5", "--exclusive"]).assert().success().stdout("true\n");
}

#[test]
fn seeded_samples_are_reproducible() {
    let run = || {
        rangekit()
            .args(["sample", "[1, 6]", "-n", "20", "--seed", "1234"])
            .output()
            .unwrap()
            .stdout
    };
    let first = run();
    assert_eq!(first, run());

    let text = String::from_utf8(first).unwrap();
    let values: Vec<i32> = text.lines().map(|l| l.parse().unwrap()).collect();
    assert_eq!(values.len(), 20);
    assert!(values.iter().all(|v| (1..=6).contains(v)));
}

#[test]
fn exclusive_samples_never_reach_max() {
    let output = rangekit()
        .args(["sample", "[3, 5]", "-n", "50", "--seed", "42", "--exclusive"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let text = String::from_utf8(output.stdout).unwrap();
    let values: Vec<i32> = text.lines().map(|l| l.parse().unwrap()).collect();
    assert_eq!(values.len(), 50);
    assert!(values.iter().all(|v| (3..5).contains(v)), "{values:?}");
}

#[test]
fn sample_json() {
    let output = rangekit()
        .args(["--format", "json", "sample", "[6, 1]", "-n", "4", "--seed", "9", "--exclusive"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["range"], "[1, 6]");
    assert_eq!(value["bounds"], "exclusive");
    assert_eq!(value["seed"], 9);

    let samples = value["samples"].as_array().unwrap();
    assert_eq!(samples.len(), 4);
    assert!(samples.iter().all(|v| (1..6).contains(&v.as_i64().unwrap())));
}

#[test]
fn seed_from_environment() {
    let with_env = rangekit()
        .env("RANGEKIT_SEED", "77")
        .args(["sample", "[0, 100]", "-n", "5"])
        .output()
        .unwrap()
        .stdout;
    let with_flag = rangekit().args(["sample", "[0, 100]", "-n", "5", "--seed", "77"]).output().unwrap().stdout;
    assert_eq!(with_env, with_flag);
}

#[test]
fn rejects_malformed_range() {
    rangekit()
        .args(["inspect", "[1, x]"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid range literal"));
}
