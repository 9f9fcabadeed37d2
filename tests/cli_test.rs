use std::io::Write;
use std::process::{Command, Output};

use tempfile::NamedTempFile;

fn partition(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_partition"))
        .args(args)
        .env_remove("PARTITION_SEED")
        .env_remove("PARTITION_MAX_ITERATIONS")
        .output()
        .expect("failed to run partition binary")
}

fn input_file(values: &[i64]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for v in values {
        writeln!(file, "{v}").unwrap();
    }
    file
}

fn hundred() -> Vec<i64> {
    (1..=100).map(|i| (i * 7919) % 10_007 + 1).collect()
}

fn stdout_residue(output: &Output) -> u64 {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 1, "expected a single line, got {stdout:?}");
    lines[0].trim().parse().unwrap()
}

#[test]
fn test_karmarkar_karp_prints_residue() {
    let file = input_file(&hundred());
    let path = file.path().to_str().unwrap();

    let output = partition(&["0", "0", path]);
    assert!(output.status.success());

    let first = stdout_residue(&output);
    let again = stdout_residue(&partition(&["0", "0", path]));
    assert_eq!(first, again);
}

#[test]
fn test_local_search_algorithms_succeed() {
    let file = input_file(&hundred());
    let path = file.path().to_str().unwrap();
    let total: u64 = hundred().iter().map(|v| v.unsigned_abs()).sum();

    for id in ["1", "2", "3"] {
        let output = partition(&["0", id, path, "--seed", "42", "--max-iterations", "2000"]);
        assert!(output.status.success(), "algorithm {id} failed");
        assert!(stdout_residue(&output) <= total);
    }
}

#[test]
fn test_seeded_runs_are_reproducible() {
    let file = input_file(&hundred());
    let path = file.path().to_str().unwrap();
    let args = ["0", "3", path, "--seed", "7", "--max-iterations", "3000"];
    assert_eq!(
        stdout_residue(&partition(&args)),
        stdout_residue(&partition(&args))
    );
}

#[test]
fn test_reduced_size_instance() {
    let file = input_file(&[3, 1, 1, 1]);
    let path = file.path().to_str().unwrap();
    let output = partition(&["0", "0", path, "--size", "4"]);
    assert!(output.status.success());
    assert_eq!(stdout_residue(&output), 0);
}

#[test]
fn test_short_input_fails_without_output() {
    let file = input_file(&[1, 2, 3]);
    let output = partition(&["0", "0", file.path().to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("could only read 3 integers"), "{stderr}");
}

#[test]
fn test_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.txt");
    let output = partition(&["0", "0", missing.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_wrong_argument_count_fails() {
    let output = partition(&["0", "0"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_prepartitioned_algorithms_rejected() {
    let file = input_file(&hundred());
    let path = file.path().to_str().unwrap();

    for id in ["11", "12", "13"] {
        let output = partition(&["0", id, path]);
        assert_eq!(output.status.code(), Some(1), "algorithm {id}");
        assert!(output.stdout.is_empty());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("not implemented"), "{stderr}");
    }
}

#[test]
fn test_unknown_algorithm_rejected() {
    let file = input_file(&hundred());
    let output = partition(&["0", "7", file.path().to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}
