//! Tests for the binary's exit codes and file side effects.

use std::path::Path;
use std::process::Command;

fn coffprobing(dir: &Path, args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_coffprobing"))
        .current_dir(dir)
        .arg("--no-banner")
        .args(args)
        .output()
        .expect("Failed to run binary")
}

#[test]
fn test_zero_rate_limit_exits_one_without_files() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("hosts.txt"), "a.invalid\n").unwrap();

    let output = coffprobing(dir.path(), &["-m", "hosts.txt", "-r", "0"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("rate limit must be greater than zero"), "{stderr}");
    assert!(!dir.path().join("200er-results.txt").exists());
    assert!(!dir.path().join("401and403-results.txt").exists());
}

#[test]
fn test_missing_input_exits_one() {
    let dir = tempfile::tempdir().unwrap();

    let output = coffprobing(dir.path(), &["-m", "nope.txt"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("nope.txt"), "{stderr}");
}

#[test]
fn test_missing_mass_target_is_usage_error() {
    let dir = tempfile::tempdir().unwrap();

    let output = coffprobing(dir.path(), &[]);

    assert!(!output.status.success());
}

#[test]
fn test_empty_input_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("hosts.txt"), "\n\n").unwrap();

    let output = coffprobing(dir.path(), &["-m", "hosts.txt", "--json", "summary.json"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Scan duration:"), "{stdout}");
    assert!(dir.path().join("summary.json").exists());
    assert!(!dir.path().join("200er-results.txt").exists());
}
