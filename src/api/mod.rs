pub mod client;
pub mod models;
pub mod response;
pub mod streaming;

pub use client::ApiClient;
pub use models::{ChatRequest, ImageGenerationRequest, Message, VideoGenerationRequest};
pub use response::{extract_media, MediaPayload};
pub use streaming::{process_streaming_response, DeltaStream};

pub const CHAT_COMPLETIONS_PATH: &str = "/v1/chat/completions";
pub const IMAGE_GENERATIONS_PATH: &str = "/v1/images/generations";
pub const IMAGE_EDITS_PATH: &str = "/v1/images/edits";
pub const VIDEO_GENERATIONS_PATH: &str = "/v1/videos/generations";
pub const MODELS_PATH: &str = "/v1/models";
