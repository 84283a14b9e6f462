use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_API_KEY: &str = "123456";

pub const CHAT_MODEL: &str = "grok-3";
pub const ASK_MODEL: &str = "grok-4.1-fast";
pub const IMAGE_MODEL: &str = "grok-imagine-1.0";
pub const EDIT_MODEL: &str = "grok-imagine-1.0-edit";
pub const VIDEO_MODEL: &str = "grok-imagine-1.0-video";

pub const IMAGE_SIZE: &str = "1024x1024";
pub const IMAGE_COUNT: u32 = 1;

pub const DEFAULT_VIDEO_DURATION: u32 = 5;

pub const IMAGE_TIMEOUT: Duration = Duration::from_secs(60);
// uploads are large, so editing gets more room than generation
pub const EDIT_TIMEOUT: Duration = Duration::from_secs(120);
pub const VIDEO_TIMEOUT: Duration = Duration::from_secs(300);

pub const DOWNLOAD_CHUNK_SIZE: usize = 8192;

pub const SEARCH_SYSTEM_PROMPT: &str = "You are Grok, an AI with access to real-time information. \
When asked about current events, facts, or topics requiring up-to-date knowledge, \
search for and provide accurate, current information. Be concise but thorough.";
