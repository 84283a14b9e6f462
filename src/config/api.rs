use super::defaults::{DEFAULT_API_KEY, DEFAULT_BASE_URL};
use crate::cli::ConnectionArgs;
use crate::error::{GrokError, Result};

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub api_key: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: DEFAULT_API_KEY.to_string(),
        }
    }
}

impl ApiConfig {
    pub fn from_args(connection: &ConnectionArgs) -> Result<Self> {
        let base_url = connection.base_url.trim().to_string();
        let parsed = reqwest::Url::parse(&base_url).map_err(|e| {
            GrokError::ConfigError(format!("invalid base URL '{}': {}", base_url, e))
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(GrokError::ConfigError(format!(
                "base URL must use http or https, got '{}'",
                parsed.scheme()
            )));
        }

        Ok(Self {
            base_url,
            api_key: connection.api_key.clone(),
        })
    }

    /// Join an API path such as `/v1/models` onto the base URL.
    ///
    /// The base may be given with or without a trailing slash or `/v1`.
    pub fn endpoint(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let base = base.strip_suffix("/v1").unwrap_or(base);
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}
