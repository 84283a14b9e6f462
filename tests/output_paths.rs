use grok_cli::media::paths::{FALLBACK_STEM, MAX_PROMPT_NAME_CHARS};
use grok_cli::media::{default_output_path, edited_output_path, sanitize_prompt};
use std::path::{Path, PathBuf};

fn is_allowed(c: char) -> bool {
    c.is_alphanumeric() || c == ' ' || c == '-' || c == '_'
}

#[test]
fn test_sanitize_replaces_punctuation() {
    assert_eq!(
        sanitize_prompt("A cat, wearing sunglasses!"),
        "A cat_ wearing sunglasses_"
    );
}

#[test]
fn test_sanitize_keeps_spaces_hyphens_underscores() {
    assert_eq!(sanitize_prompt("low-poly city_at night"), "low-poly city_at night");
}

#[test]
fn test_sanitize_replaces_path_separators() {
    let name = sanitize_prompt("../../etc/passwd");
    assert!(!name.contains('/'));
    assert!(!name.contains('.'));
}

#[test]
fn test_sanitize_truncates_to_fifty_chars() {
    let prompt = "x".repeat(200);
    assert_eq!(sanitize_prompt(&prompt).chars().count(), MAX_PROMPT_NAME_CHARS);
}

#[test]
fn test_sanitize_counts_chars_not_bytes() {
    let prompt = "日本の猫".repeat(20);
    let name = sanitize_prompt(&prompt);
    assert_eq!(name.chars().count(), 50);
    assert!(name.chars().all(is_allowed));
}

#[test]
fn test_sanitized_names_only_contain_allowed_chars() {
    let prompts = [
        "",
        "plain",
        "tabs\tand\nnewlines",
        "emoji 🐱 in prompt",
        "quotes \"double\" and 'single'",
        "symbols @#$%^&*()+=[]{}|;:<>?,./~`",
        "ünïcödé wörds",
    ];

    for prompt in prompts {
        let name = sanitize_prompt(prompt);
        assert!(name.chars().count() <= MAX_PROMPT_NAME_CHARS, "{:?}", prompt);
        assert!(name.chars().all(is_allowed), "{:?} -> {:?}", prompt, name);
    }
}

#[test]
fn test_default_output_path_appends_extension() {
    assert_eq!(
        default_output_path("A cat jumping", "mp4"),
        PathBuf::from("A cat jumping.mp4")
    );
}

#[test]
fn test_default_output_path_for_empty_prompt() {
    assert_eq!(
        default_output_path("", "png"),
        PathBuf::from(format!("{}.png", FALLBACK_STEM))
    );
}

#[test]
fn test_edited_output_path_inserts_suffix() {
    assert_eq!(
        edited_output_path(Path::new("photos/cat.png")),
        PathBuf::from("photos/cat_edited.png")
    );
}

#[test]
fn test_edited_output_path_without_extension() {
    assert_eq!(
        edited_output_path(Path::new("cat")),
        PathBuf::from("cat_edited")
    );
}

#[test]
fn test_edited_output_path_keeps_last_extension_only() {
    assert_eq!(
        edited_output_path(Path::new("archive.final.jpeg")),
        PathBuf::from("archive.final_edited.jpeg")
    );
}
