use crate::api::{ApiClient, MediaPayload};
use crate::error::Result;
use anyhow::Context;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use image::{DynamicImage, ImageFormat};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct SavedImage {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// Decode a `b64_json` value, tolerating a `data:<mime>;base64,` prefix.
pub fn decode_base64(encoded: &str) -> Result<Vec<u8>> {
    let encoded = encoded.trim();
    let encoded = match encoded.split_once(";base64,") {
        Some((prefix, rest)) if prefix.starts_with("data:") => rest,
        _ => encoded,
    };
    Ok(BASE64.decode(encoded)?)
}

/// Raw bytes for a media payload: a follow-up GET for URLs, bounded by
/// `timeout`, or a base64 decode for inline data.
pub async fn resolve_payload(
    client: &ApiClient,
    payload: &MediaPayload,
    timeout: Duration,
) -> Result<Vec<u8>> {
    match payload {
        MediaPayload::Url(url) => {
            let response = client.download(url, Some(timeout)).await?;
            Ok(response.bytes().await?.to_vec())
        }
        MediaPayload::Base64(encoded) => decode_base64(encoded),
    }
}

/// Save image bytes to `path` and report its dimensions.
///
/// Bytes are written verbatim when the path's extension already matches
/// the payload format (or names no format at all). Otherwise the image is
/// re-encoded into the format the extension asks for.
pub fn save_image(bytes: &[u8], path: &Path) -> Result<SavedImage> {
    let source_format = image::guess_format(bytes)?;
    let decoded = image::load_from_memory_with_format(bytes, source_format)?;
    let (width, height) = (decoded.width(), decoded.height());

    match ImageFormat::from_path(path).ok() {
        Some(target) if target != source_format => {
            let converted = match target {
                ImageFormat::Jpeg => DynamicImage::ImageRgb8(decoded.to_rgb8()),
                _ => decoded,
            };
            converted.save_with_format(path, target)?;
        }
        _ => {
            fs::write(path, bytes)
                .with_context(|| format!("Failed to write image: {}", path.display()))?;
        }
    }

    Ok(SavedImage {
        path: path.to_path_buf(),
        width,
        height,
    })
}
