//! End-to-end tests for `ohmcode parse` and `ohmcode format`.

use std::process::Command;

/// Path to the ohmcode binary
fn ohmcode_bin() -> &'static str {
    env!("CARGO_BIN_EXE_ohmcode")
}

#[test]
fn test_parse_kilo_suffix() {
    let output = Command::new(ohmcode_bin())
        .args(["parse", "--text", "4.7k", "--json"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value = serde_json::from_str(&stdout).expect("Should parse JSON");

    assert_eq!(result["ohms"].as_f64(), Some(4700.0));
    assert_eq!(result["formatted"], "4.7 kΩ");
}

#[test]
fn test_parse_plain_output() {
    let output = Command::new(ohmcode_bin())
        .args(["parse", "--text", "1M"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "1000000");
}

#[test]
fn test_parse_invalid_fails() {
    let output = Command::new(ohmcode_bin())
        .args(["parse", "--text", "abc"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid resistance value"), "stderr: {stderr}");
}

#[test]
fn test_format_mega() {
    let output = Command::new(ohmcode_bin())
        .args(["format", "--ohms", "1500000"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "1.5 MΩ");
}

#[test]
fn test_format_plain_ohms_json() {
    let output = Command::new(ohmcode_bin())
        .args(["format", "--ohms", "470", "--json"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value = serde_json::from_str(&stdout).expect("Should parse JSON");

    assert_eq!(result["formatted"], "470 Ω");
    assert_eq!(result["ohms"].as_f64(), Some(470.0));
}
