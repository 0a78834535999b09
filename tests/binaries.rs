//! Process-level checks for the two binaries.

use std::process::Command;

#[test]
fn test_typed_key_prints_not_a_string() {
    let output = Command::new(env!("CARGO_BIN_EXE_typed-key"))
        .env("RUST_LOG", "off")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Value is not a string\n");
}

#[test]
fn test_invalid_scenario_index_fails_fast() {
    for index in ["3", "-1"] {
        let output = Command::new(env!("CARGO_BIN_EXE_deadline-race"))
            .arg(index)
            .env("RUST_LOG", "off")
            .output()
            .unwrap();

        assert!(!output.status.success(), "index {index} should be rejected");
        assert!(output.stdout.is_empty());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("InvalidIndex"), "stderr: {stderr}");
    }
}

#[test]
fn test_non_numeric_index_rejected() {
    let output = Command::new(env!("CARGO_BIN_EXE_deadline-race"))
        .arg("two")
        .output()
        .unwrap();

    assert!(!output.status.success());
}
