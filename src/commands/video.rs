use crate::api::{
    extract_media, ApiClient, MediaPayload, VideoGenerationRequest, VIDEO_GENERATIONS_PATH,
};
use crate::config::defaults::VIDEO_TIMEOUT;
use crate::error::{GrokError, MediaKind, Result};
use crate::media::{default_output_path, download_to_file, SavedFile};
use colored::*;
use serde_json::Value;
use std::path::PathBuf;

pub async fn run(
    client: &ApiClient,
    model: &str,
    prompt: &str,
    duration: u32,
    output: Option<PathBuf>,
) -> Result<SavedFile> {
    println!("Generating video for: \"{}\"", prompt);
    println!("{}", "(This may take a while...)".dimmed());

    let request_body = VideoGenerationRequest {
        model: model.to_string(),
        prompt: prompt.to_string(),
        duration,
    };

    let response = client
        .post_json(VIDEO_GENERATIONS_PATH, &request_body, Some(VIDEO_TIMEOUT))
        .await?;
    let result: Value = response.json().await?;

    let url = match extract_media(&result, MediaKind::Video)? {
        MediaPayload::Url(url) => url,
        MediaPayload::Base64(_) => return Err(GrokError::UnknownFormat(MediaKind::Video)),
    };

    let download = client.download(&url, None).await?;
    let output_path = output.unwrap_or_else(|| default_output_path(prompt, "mp4"));
    download_to_file(download, &output_path).await
}
