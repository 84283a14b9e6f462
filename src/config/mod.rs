mod api;
pub mod defaults;

use crate::cli::ConnectionArgs;
use crate::error::{GrokError, Result};

pub use api::ApiConfig;

/// Everything one invocation needs, resolved from CLI flags and defaults.
#[derive(Debug, Clone)]
pub struct Config {
    pub api: ApiConfig,
    pub model: String,
    pub verbose: bool,
}

impl Config {
    pub fn from_args(connection: &ConnectionArgs, model: &str) -> Result<Self> {
        if model.trim().is_empty() {
            return Err(GrokError::ConfigError("model name must not be empty".to_string()));
        }

        Ok(Config {
            api: ApiConfig::from_args(connection)?,
            model: model.to_string(),
            verbose: connection.verbose,
        })
    }
}
