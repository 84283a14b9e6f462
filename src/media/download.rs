use crate::config::defaults::DOWNLOAD_CHUNK_SIZE;
use crate::error::Result;
use anyhow::Context;
use bytes::Bytes;
use futures::{Stream, StreamExt};
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

#[derive(Debug, Clone, PartialEq)]
pub struct SavedFile {
    pub path: PathBuf,
    pub bytes: u64,
}

impl SavedFile {
    pub fn size_mb(&self) -> f64 {
        self.bytes as f64 / (1024.0 * 1024.0)
    }
}

/// Stream a body to `path` in fixed-size writes.
///
/// If the body fails after the file was created, the partial file is
/// removed. A file that could not be opened is left alone.
pub async fn stream_to_file<S, E>(stream: S, path: &Path) -> Result<SavedFile>
where
    S: Stream<Item = std::result::Result<Bytes, E>> + Unpin,
    E: Into<crate::error::GrokError>,
{
    let file = File::create(path)
        .await
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;

    match write_chunks(stream, file).await {
        Ok(bytes) => Ok(SavedFile {
            path: path.to_path_buf(),
            bytes,
        }),
        Err(e) => {
            let _ = tokio::fs::remove_file(path).await;
            Err(e)
        }
    }
}

async fn write_chunks<S, E>(mut stream: S, mut file: File) -> Result<u64>
where
    S: Stream<Item = std::result::Result<Bytes, E>> + Unpin,
    E: Into<crate::error::GrokError>,
{
    let mut written: u64 = 0;
    while let Some(chunk) = stream.next().await {
        let chunk = match chunk {
            Ok(chunk) => chunk,
            Err(e) => return Err(e.into()),
        };
        for piece in chunk.chunks(DOWNLOAD_CHUNK_SIZE) {
            file.write_all(piece).await?;
            written += piece.len() as u64;
        }
    }

    file.flush().await?;
    file.sync_all().await?;

    Ok(written)
}

pub async fn download_to_file(response: reqwest::Response, path: &Path) -> Result<SavedFile> {
    stream_to_file(response.bytes_stream(), path).await
}
