use crate::error::{GrokError, MediaKind, Result};
use serde_json::Value;

/// Sentinel the service puts in `url` when it has no media backend.
pub const ERROR_SENTINEL: &str = "error";

#[derive(Debug, Clone, PartialEq)]
pub enum MediaPayload {
    Url(String),
    Base64(String),
}

/// Pull the first media item out of a `{"data": [...]}` response.
///
/// Videos only ever come back as URLs.
pub fn extract_media(response_json: &Value, kind: MediaKind) -> Result<MediaPayload> {
    let first = response_json
        .get("data")
        .and_then(|d| d.as_array())
        .and_then(|items| items.first())
        .ok_or_else(|| GrokError::MissingData {
            what: format!("{} data", kind.noun()),
            body: pretty(response_json),
        })?;

    if let Some(url) = first.get("url").and_then(|u| u.as_str()) {
        if url == ERROR_SENTINEL {
            return Err(GrokError::UpstreamNotConfigured(kind));
        }
        return Ok(MediaPayload::Url(url.to_string()));
    }

    match kind {
        MediaKind::Image => first
            .get("b64_json")
            .and_then(|b| b.as_str())
            .map(|b| MediaPayload::Base64(b.to_string()))
            .ok_or(GrokError::UnknownFormat(kind)),
        MediaKind::Video => Err(GrokError::MissingData {
            what: "video URL".to_string(),
            body: pretty(response_json),
        }),
    }
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
