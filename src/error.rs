use std::fmt;
use std::path::PathBuf;

/// What kind of artifact a media endpoint was asked to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    pub fn noun(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        }
    }
}

#[derive(Debug)]
pub enum GrokError {
    ApiError {
        status: u16,
        message: String,
    },
    ConfigError(String),
    FileNotFound(PathBuf),
    /// The upstream answered with the `url: "error"` sentinel.
    UpstreamNotConfigured(MediaKind),
    MissingData {
        what: String,
        body: String,
    },
    UnknownFormat(MediaKind),
    NetworkError(reqwest::Error),
    Timeout,
    IoError(std::io::Error),
    JsonError(serde_json::Error),
    Base64Error(base64::DecodeError),
    ImageError(image::ImageError),
    Other(String),
}

impl fmt::Display for GrokError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrokError::ApiError { status, message } => {
                write!(f, "HTTP error (status {}): {}", status, message)
            }
            GrokError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            GrokError::FileNotFound(path) => {
                write!(f, "Input file not found: {}", path.display())
            }
            GrokError::UpstreamNotConfigured(kind) => write!(
                f,
                "{} generation failed. The grok2api service may not have the {} API configured.",
                capitalize(kind.noun()),
                kind.noun()
            ),
            GrokError::MissingData { what, body } => {
                write!(f, "No {} in response", what)?;
                if !body.is_empty() {
                    write!(f, "\n{}", body)?;
                }
                Ok(())
            }
            GrokError::UnknownFormat(kind) => {
                write!(f, "Unknown {} format in response", kind.noun())
            }
            GrokError::NetworkError(e) => write!(f, "Network error: {}", e),
            GrokError::Timeout => write!(f, "Request timeout"),
            GrokError::IoError(e) => write!(f, "IO error: {}", e),
            GrokError::JsonError(e) => write!(f, "JSON error: {}", e),
            GrokError::Base64Error(e) => write!(f, "Invalid base64 payload: {}", e),
            GrokError::ImageError(e) => write!(f, "Image error: {}", e),
            GrokError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl std::error::Error for GrokError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GrokError::NetworkError(e) => Some(e),
            GrokError::IoError(e) => Some(e),
            GrokError::JsonError(e) => Some(e),
            GrokError::Base64Error(e) => Some(e),
            GrokError::ImageError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for GrokError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            GrokError::Timeout
        } else {
            GrokError::NetworkError(err)
        }
    }
}

impl From<std::io::Error> for GrokError {
    fn from(err: std::io::Error) -> Self {
        GrokError::IoError(err)
    }
}

impl From<serde_json::Error> for GrokError {
    fn from(err: serde_json::Error) -> Self {
        GrokError::JsonError(err)
    }
}

impl From<base64::DecodeError> for GrokError {
    fn from(err: base64::DecodeError) -> Self {
        GrokError::Base64Error(err)
    }
}

impl From<image::ImageError> for GrokError {
    fn from(err: image::ImageError) -> Self {
        GrokError::ImageError(err)
    }
}

impl From<anyhow::Error> for GrokError {
    fn from(err: anyhow::Error) -> Self {
        // keep the whole context chain, not just the outermost message
        GrokError::Other(format!("{:#}", err))
    }
}

pub type Result<T> = std::result::Result<T, GrokError>;
