//! End-to-end tests for `ohmcode decode`.

use std::process::Command;

/// Path to the ohmcode binary
fn ohmcode_bin() -> &'static str {
    env!("CARGO_BIN_EXE_ohmcode")
}

fn band_names(result: &serde_json::Value) -> Vec<String> {
    result["bands"]
        .as_array()
        .expect("bands array")
        .iter()
        .map(|band| band.as_str().expect("band name").to_string())
        .collect()
}

#[test]
fn test_decode_four_band() {
    let output = Command::new(ohmcode_bin())
        .args(["decode", "--ohms", "4.7k", "--bands", "4", "--json"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value = serde_json::from_str(&stdout).expect("Should parse JSON");

    assert_eq!(band_names(&result), ["yellow", "violet", "red", "gold"]);
    assert_eq!(result["requested_ohms"].as_f64(), Some(4700.0));
    assert_eq!(result["resistance_ohms"].as_f64(), Some(4700.0));
    assert_eq!(result["tolerance_percent"].as_f64(), Some(5.0));
    assert!(result["notice"].is_null(), "on-series target needs no notice");
}

#[test]
fn test_decode_five_band() {
    let output = Command::new(ohmcode_bin())
        .args(["decode", "--ohms", "4700", "--bands", "5", "--json"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value = serde_json::from_str(&stdout).expect("Should parse JSON");

    assert_eq!(
        band_names(&result),
        ["yellow", "violet", "black", "brown", "gold"]
    );
}

#[test]
fn test_decode_off_series_target_reports_closest() {
    let output = Command::new(ohmcode_bin())
        .args(["decode", "--ohms", "1050", "--bands", "4", "--json"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value = serde_json::from_str(&stdout).expect("Should parse JSON");

    assert_eq!(band_names(&result), ["brown", "black", "red", "gold"]);
    assert_eq!(result["resistance_ohms"].as_f64(), Some(1000.0));
    assert_eq!(
        result["notice"].as_str(),
        Some("Closest standard value: 1 kΩ")
    );
}

#[test]
fn test_decode_invalid_text_fails() {
    let output = Command::new(ohmcode_bin())
        .args(["decode", "--ohms", "abc", "--bands", "4"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid resistance value"), "stderr: {stderr}");
}

#[test]
fn test_decode_out_of_range_fails() {
    for value in ["999000001", "0.05"] {
        let output = Command::new(ohmcode_bin())
            .args(["decode", "--ohms", value, "--bands", "4"])
            .output()
            .expect("Failed to execute command");

        assert_eq!(
            output.status.code(),
            Some(2),
            "{value} should be rejected before decoding"
        );

        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(
            stderr.contains("Value out of range (0.1Ω - 999MΩ)"),
            "stderr: {stderr}"
        );
    }
}

#[test]
fn test_decode_range_bounds_accepted() {
    for value in ["0.1", "999000000"] {
        let output = Command::new(ohmcode_bin())
            .args(["decode", "--ohms", value, "--bands", "4"])
            .output()
            .expect("Failed to execute command");

        assert_eq!(
            output.status.code(),
            Some(0),
            "{value} is inside the supported domain; stderr: {}",
            String::from_utf8_lossy(&output.stderr)
        );
    }
}

#[test]
fn test_decode_bad_band_count_fails() {
    let output = Command::new(ohmcode_bin())
        .args(["decode", "--ohms", "4700", "--bands", "6"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_decode_human_readable() {
    let output = Command::new(ohmcode_bin())
        .args(["decode", "--ohms", "4.7k", "--bands", "4"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("yellow violet red gold"),
        "stdout: {stdout}"
    );
    assert!(stdout.contains("4.7 kΩ"), "stdout: {stdout}");
}
