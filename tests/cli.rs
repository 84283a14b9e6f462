use std::process::{Command, Output};
use tempfile::TempDir;

// nothing listens on the discard port, so any request would fail loudly
const DEAD_BASE_URL: &str = "http://127.0.0.1:9";

fn run(bin: &str, args: &[&str]) -> Output {
    Command::new(bin)
        .args(args)
        .output()
        .expect("failed to launch binary")
}

#[test]
fn test_missing_arguments_exit_with_usage() {
    let bins = [
        env!("CARGO_BIN_EXE_grok-chat"),
        env!("CARGO_BIN_EXE_grok-ask"),
        env!("CARGO_BIN_EXE_grok-imagine"),
        env!("CARGO_BIN_EXE_grok-edit"),
        env!("CARGO_BIN_EXE_grok-video"),
    ];

    for bin in bins {
        let output = run(bin, &[]);
        let stderr = String::from_utf8_lossy(&output.stderr);

        assert_eq!(output.status.code(), Some(1), "{}", bin);
        assert!(stderr.contains("Usage:"), "{}: {}", bin, stderr);
        assert!(output.stdout.is_empty(), "{}", bin);
    }
}

#[test]
fn test_help_exits_zero() {
    let output = run(env!("CARGO_BIN_EXE_grok-chat"), &["--help"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("--model"));
}

#[test]
fn test_edit_with_missing_input_fails_before_network() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("nope.png");

    let output = run(
        env!("CARGO_BIN_EXE_grok-edit"),
        &[
            missing.to_str().unwrap(),
            "add a hat",
            "--base-url",
            DEAD_BASE_URL,
        ],
    );
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("Input file not found"), "{}", stderr);
    assert!(!stderr.contains("Network error"), "{}", stderr);
}

#[test]
fn test_video_rejects_zero_duration() {
    let output = run(
        env!("CARGO_BIN_EXE_grok-video"),
        &["a cat", "--duration", "0", "--base-url", DEAD_BASE_URL],
    );

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_invalid_base_url_is_a_config_error() {
    let output = run(
        env!("CARGO_BIN_EXE_grok-models"),
        &["--base-url", "ftp://localhost:8000"],
    );
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("Configuration error"), "{}", stderr);
}

#[test]
fn test_unreachable_service_exits_non_zero() {
    let output = run(
        env!("CARGO_BIN_EXE_grok-chat"),
        &["hello", "--base-url", DEAD_BASE_URL],
    );
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("Error:"), "{}", stderr);
}
