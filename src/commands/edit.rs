use crate::api::{extract_media, ApiClient, IMAGE_EDITS_PATH};
use crate::config::defaults::{EDIT_TIMEOUT, IMAGE_COUNT, IMAGE_SIZE};
use crate::error::{GrokError, MediaKind, Result};
use crate::media::{edited_output_path, resolve_payload, save_image, SavedImage};
use anyhow::Context;
use image::ImageFormat;
use reqwest::multipart::{Form, Part};
use serde_json::Value;
use std::path::{Path, PathBuf};

const FALLBACK_MIME: &str = "image/png";

/// Content type for the upload, guessed from the file extension.
pub fn detect_mime(path: &Path) -> &'static str {
    ImageFormat::from_path(path)
        .map(|format| format.to_mime_type())
        .unwrap_or(FALLBACK_MIME)
}

pub async fn build_form(input: &Path, model: &str, prompt: &str) -> Result<Form> {
    let bytes = tokio::fs::read(input)
        .await
        .with_context(|| format!("Failed to read input image: {}", input.display()))?;

    let file_name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image.png".to_string());

    let image_part = Part::bytes(bytes)
        .file_name(file_name)
        .mime_str(detect_mime(input))?;

    Ok(Form::new()
        .part("image", image_part)
        .text("model", model.to_string())
        .text("prompt", prompt.to_string())
        .text("n", IMAGE_COUNT.to_string())
        .text("size", IMAGE_SIZE.to_string()))
}

pub async fn run(
    client: &ApiClient,
    model: &str,
    input: &Path,
    prompt: &str,
    output: Option<PathBuf>,
) -> Result<SavedImage> {
    if !input.exists() {
        return Err(GrokError::FileNotFound(input.to_path_buf()));
    }

    println!("Editing image: {}", input.display());
    println!("Prompt: \"{}\"", prompt);

    let form = build_form(input, model, prompt).await?;
    let response = client
        .post_multipart(IMAGE_EDITS_PATH, form, EDIT_TIMEOUT)
        .await?;
    let result: Value = response.json().await?;

    let payload = extract_media(&result, MediaKind::Image)?;
    let bytes = resolve_payload(client, &payload, EDIT_TIMEOUT).await?;

    let output_path = output.unwrap_or_else(|| edited_output_path(input));
    save_image(&bytes, &output_path)
}
