use crate::api::{extract_media, ApiClient, ImageGenerationRequest, IMAGE_GENERATIONS_PATH};
use crate::config::defaults::{IMAGE_COUNT, IMAGE_SIZE, IMAGE_TIMEOUT};
use crate::error::{MediaKind, Result};
use crate::media::{default_output_path, resolve_payload, save_image, SavedImage};
use serde_json::Value;
use std::path::PathBuf;

pub async fn run(
    client: &ApiClient,
    model: &str,
    prompt: &str,
    output: Option<PathBuf>,
) -> Result<SavedImage> {
    println!("Generating image for: \"{}\"", prompt);

    let request_body = ImageGenerationRequest {
        model: model.to_string(),
        prompt: prompt.to_string(),
        n: IMAGE_COUNT,
        size: IMAGE_SIZE.to_string(),
    };

    let response = client
        .post_json(IMAGE_GENERATIONS_PATH, &request_body, Some(IMAGE_TIMEOUT))
        .await?;
    let result: Value = response.json().await?;

    let payload = extract_media(&result, MediaKind::Image)?;
    let bytes = resolve_payload(client, &payload, IMAGE_TIMEOUT).await?;

    let output_path = output.unwrap_or_else(|| default_output_path(prompt, "png"));
    save_image(&bytes, &output_path)
}
