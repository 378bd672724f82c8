/// End-to-end tests for the seqpair binary
use assert_cmd::Command;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use seqpair_test::{write_matrix_file, SMALL_MATRIX};
use std::fs;
use tempfile::TempDir;

fn seqpair() -> Command {
    let mut cmd = Command::cargo_bin("seqpair").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG").env_remove("SEQPAIR_LOG");
    cmd
}

fn json_stdout(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).unwrap()
}

#[test]
fn test_global_text_output() {
    seqpair()
        .args(["global", "ACGT", "AGGT"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Score: 2"))
        .stdout(predicate::str::contains("ACGT\n|X||\nAGGT"));
}

#[test]
fn test_global_json_output() {
    let json = json_stdout(seqpair().args(["global", "AC", "CA", "--format", "json"]));

    assert_eq!(json["aligned_a"], "-AC");
    assert_eq!(json["aligned_b"], "CA-");
    assert_eq!(json["score"], -1);
    assert_eq!(json["gaps"], 2);
}

#[test]
fn test_global_empty_sequence() {
    let json = json_stdout(seqpair().args(["global", "", "ACG", "--format", "json"]));

    assert_eq!(json["aligned_a"], "---");
    assert_eq!(json["aligned_b"], "ACG");
}

#[test]
fn test_scoring_flags_accept_negative_values() {
    let json = json_stdout(seqpair().args([
        "global", "ACGT", "ACCT", "--match", "5", "--mismatch", "-4", "--gap", "-10", "--format",
        "json",
    ]));

    assert_eq!(json["score"], 11);
}

#[test]
fn test_local_recovers_common_substring() {
    let json = json_stdout(seqpair().args(["local", "ACGTGGG", "TTACGT", "--format", "json"]));

    assert_eq!(json["aligned_a"], "ACGT");
    assert_eq!(json["aligned_b"], "ACGT");
    assert_eq!(json["score"], 8);
}

#[test]
fn test_local_with_builtin_matrix() {
    let json = json_stdout(seqpair().args([
        "local",
        "MEEPQSDPSV",
        "MEEPQSDPSV",
        "--matrix",
        "BLOSUM45",
        "--format",
        "json",
    ]));

    assert_eq!(json["aligned_a"], "MEEPQSDPSV");
    assert_eq!(json["aligned_b"], "MEEPQSDPSV");
}

#[test]
fn test_local_with_matrix_file() {
    let file = write_matrix_file(SMALL_MATRIX).unwrap();
    let json = json_stdout(seqpair().args([
        "local",
        "ACCA",
        "ACCA",
        "--matrix",
        file.path().to_str().unwrap(),
        "--format",
        "json",
    ]));

    assert_eq!(json["score"], 18);
}

#[test]
fn test_malformed_matrix_exit_code() {
    let file = write_matrix_file("   A  C\nA  4 -2\nC -2  x\n").unwrap();

    seqpair()
        .args(["local", "ACCA", "ACCA", "--matrix", file.path().to_str().unwrap()])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Malformed scoring matrix at line 3"));
}

#[test]
fn test_missing_matrix_file_exit_code() {
    seqpair()
        .args(["local", "ACCA", "ACCA", "--matrix", "/nonexistent/seqpair/BLOSUM99"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_seed_and_extend_json() {
    let json = json_stdout(seqpair().args(["seed", "AGTCGA", "TCG", "-k", "2", "--format", "json"]));

    assert_eq!(
        json,
        serde_json::json!([{ "subject_pos": 2, "query_pos": 0, "text": "TCG" }])
    );
}

#[test]
fn test_seed_local_strategy() {
    let json = json_stdout(seqpair().args([
        "seed",
        "GGACGTACGTGG",
        "ACGTTCGT",
        "-k",
        "4",
        "--local",
        "--flank",
        "4",
        "--max-in-flight",
        "2",
        "--format",
        "json",
    ]));

    assert_eq!(
        json,
        serde_json::json!([{ "subject_pos": 2, "query_pos": 0, "text": "ACGTACGT" }])
    );
}

#[test]
fn test_seed_k_too_large_is_empty() {
    seqpair()
        .args(["seed", "AGTCGA", "TCG", "-k", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No extensions found"));
}

#[test]
fn test_sequences_from_files() {
    let dir = TempDir::new().unwrap();
    let subject = dir.path().join("subject.fa");
    let query = dir.path().join("query.fa");
    fs::write(&subject, ">subject\nAGT\nCGA\n").unwrap();
    fs::write(&query, "TCG\n").unwrap();

    seqpair()
        .arg("seed")
        .arg(format!("@{}", subject.display()))
        .arg(format!("@{}", query.display()))
        .args(["-k", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 extension"))
        .stdout(predicate::str::contains("TCG"));
}

#[test]
fn test_missing_sequence_file_exit_code() {
    seqpair()
        .args(["global", "@/nonexistent/seqpair/a.fa", "ACGT"])
        .assert()
        .code(3);
}

#[test]
fn test_config_file_then_flags() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("seqpair.toml");
    fs::write(&config, "[global]\ngap = -5\n").unwrap();
    let config = config.to_str().unwrap();

    let json = json_stdout(seqpair().args(["--config", config, "global", "A", "AA", "--format", "json"]));
    assert_eq!(json["score"], -4);

    let json = json_stdout(seqpair().args([
        "--config", config, "global", "A", "AA", "--gap", "-1", "--format", "json",
    ]));
    assert_eq!(json["score"], 0);
}

#[test]
fn test_config_selects_seed_strategy() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("seqpair.toml");
    fs::write(&config, "[seed]\nk = 4\nflank = 4\nstrategy = \"local\"\n").unwrap();

    let json = json_stdout(seqpair().args([
        "seed",
        "GGACGTACGTGG",
        "ACGTTCGT",
        "--config",
        config.to_str().unwrap(),
        "--format",
        "json",
    ]));
    assert_eq!(json[0]["text"], "ACGTACGT");
}

#[test]
fn test_invalid_config_exit_code() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("seqpair.toml");
    fs::write(&config, "[global\n").unwrap();

    seqpair()
        .args(["--config", config.to_str().unwrap(), "global", "A", "A"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Failed to parse config"));
}

#[test]
fn test_missing_config_exit_code() {
    seqpair()
        .args(["--config", "/nonexistent/seqpair.toml", "global", "A", "A"])
        .assert()
        .code(3);
}

#[test]
fn test_seed_warns_about_local_only_flags() {
    seqpair()
        .args(["seed", "AGTCGA", "TCG", "-k", "2", "--matrix", "BLOSUM62", "--gap=-4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("TCG"))
        .stderr(predicate::str::contains("ignored without --local"));
}

#[test]
fn test_thread_count_caps_seed_extension() {
    let json = json_stdout(seqpair().args([
        "-j", "1", "seed", "AAAAA", "AAA", "-k", "2", "--format", "json",
    ]));

    assert_eq!(json.as_array().map(Vec::len), Some(5));
}
