use grok_cli::api::{extract_media, MediaPayload};
use grok_cli::error::{GrokError, MediaKind};
use serde_json::json;

#[test]
fn test_extract_image_url() {
    let response = json!({ "data": [{ "url": "http://localhost:8000/files/cat.png" }] });

    let payload = extract_media(&response, MediaKind::Image).unwrap();
    assert_eq!(
        payload,
        MediaPayload::Url("http://localhost:8000/files/cat.png".to_string())
    );
}

#[test]
fn test_extract_image_base64() {
    let response = json!({ "data": [{ "b64_json": "aGVsbG8=" }] });

    let payload = extract_media(&response, MediaKind::Image).unwrap();
    assert_eq!(payload, MediaPayload::Base64("aGVsbG8=".to_string()));
}

#[test]
fn test_extract_prefers_url_over_base64() {
    let response = json!({ "data": [{ "url": "http://x/a.png", "b64_json": "aGVsbG8=" }] });

    let payload = extract_media(&response, MediaKind::Image).unwrap();
    assert!(matches!(payload, MediaPayload::Url(_)));
}

#[test]
fn test_extract_error_sentinel() {
    let response = json!({ "data": [{ "url": "error" }] });

    for kind in [MediaKind::Image, MediaKind::Video] {
        let result = extract_media(&response, kind);
        assert!(matches!(result, Err(GrokError::UpstreamNotConfigured(k)) if k == kind));
    }
}

#[test]
fn test_extract_missing_data_echoes_body() {
    let response = json!({ "error": { "message": "model not found" } });

    let err = extract_media(&response, MediaKind::Image).unwrap_err();
    let message = err.to_string();
    assert!(message.starts_with("No image data in response"));
    assert!(message.contains("model not found"));
}

#[test]
fn test_extract_empty_data_array() {
    let response = json!({ "data": [] });

    let result = extract_media(&response, MediaKind::Image);
    assert!(matches!(result, Err(GrokError::MissingData { .. })));
}

#[test]
fn test_extract_unknown_image_shape() {
    let response = json!({ "data": [{ "revised_prompt": "a cat" }] });

    let result = extract_media(&response, MediaKind::Image);
    assert!(matches!(result, Err(GrokError::UnknownFormat(MediaKind::Image))));
}

#[test]
fn test_extract_video_has_no_base64_fallback() {
    let response = json!({ "data": [{ "b64_json": "AAAA" }] });

    let err = extract_media(&response, MediaKind::Video).unwrap_err();
    assert!(err.to_string().starts_with("No video URL in response"));
}
