use grok_cli::error::{GrokError, MediaKind};
use grok_cli::media::{SavedFile, SavedImage};
use grok_cli::ui::{display_saved_image, display_saved_video, write_error};
use std::path::PathBuf;

fn render(f: impl FnOnce(&mut Vec<u8>) -> std::io::Result<()>) -> String {
    colored::control::set_override(false);
    let mut out = Vec::new();
    f(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_saved_image_summary() {
    let saved = SavedImage {
        path: PathBuf::from("images/a_red_fox.png"),
        width: 32,
        height: 24,
    };

    assert_eq!(
        render(|out| display_saved_image(out, "Image", &saved)),
        "✓ Image saved to: images/a_red_fox.png\n  Size: 32x24\n"
    );
    assert_eq!(
        render(|out| display_saved_image(out, "Edited image", &saved)),
        "✓ Edited image saved to: images/a_red_fox.png\n  Size: 32x24\n"
    );
}

#[test]
fn test_saved_video_size_in_megabytes() {
    let saved = SavedFile {
        path: PathBuf::from("clip.mp4"),
        bytes: 1_572_864,
    };

    assert_eq!(
        render(|out| display_saved_video(out, &saved)),
        "✓ Video saved to: clip.mp4\n  Size: 1.50 MB\n"
    );
}

#[test]
fn test_small_video_rounds_to_two_decimals() {
    let saved = SavedFile {
        path: PathBuf::from("tiny.mp4"),
        bytes: 1000,
    };

    assert!(render(|out| display_saved_video(out, &saved)).ends_with("  Size: 0.00 MB\n"));
}

#[test]
fn test_unconfigured_upstream_adds_hint() {
    let error = GrokError::UpstreamNotConfigured(MediaKind::Video);
    let text = render(|out| write_error(out, &error));
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[0],
        "Error: Video generation failed. The grok2api service may not have the video API configured."
    );
    assert_eq!(lines[1], "Please check your grok2api configuration or xAI API setup.");
}

#[test]
fn test_other_errors_are_one_line() {
    let text = render(|out| write_error(out, &GrokError::Timeout));
    assert_eq!(text, "Error: Request timeout\n");
}
