use crate::config::ApiConfig;
use crate::error::{GrokError, Result};
use crate::ui::log_verbose;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::multipart::Form;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

/// Thin client for the grok2api endpoints.
///
/// API calls carry the bearer token through default headers. Media
/// downloads go through a separate plain client so the token never
/// leaves the service it was issued for.
pub struct ApiClient {
    api: reqwest::Client,
    downloads: reqwest::Client,
    config: ApiConfig,
    verbose: bool,
}

impl ApiClient {
    pub fn new(config: &ApiConfig, verbose: bool) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", config.api_key)).map_err(|e| {
                GrokError::ConfigError(format!("Invalid authorization header: {}", e))
            })?,
        );

        let api = reqwest::Client::builder().default_headers(headers).build()?;
        let downloads = reqwest::Client::builder().build()?;

        Ok(Self {
            api,
            downloads,
            config: config.clone(),
            verbose,
        })
    }

    pub fn endpoint(&self, path: &str) -> String {
        self.config.endpoint(path)
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// POST a JSON body. `timeout` of `None` leaves the request unbounded,
    /// which the streaming chat call relies on.
    pub async fn post_json<T: Serialize>(
        &self,
        path: &str,
        body: &T,
        timeout: Option<Duration>,
    ) -> Result<reqwest::Response> {
        let url = self.endpoint(path);
        log_verbose(self.verbose, format!("POST {}", url));

        let mut request = self.api.post(&url).json(body);
        if let Some(timeout) = timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        self.check_status(response).await
    }

    pub async fn post_multipart(
        &self,
        path: &str,
        form: Form,
        timeout: Duration,
    ) -> Result<reqwest::Response> {
        let url = self.endpoint(path);
        log_verbose(self.verbose, format!("POST {} (multipart)", url));

        let response = self
            .api
            .post(&url)
            .multipart(form)
            .timeout(timeout)
            .send()
            .await?;
        self.check_status(response).await
    }

    pub async fn get_json(&self, path: &str) -> Result<Value> {
        let url = self.endpoint(path);
        log_verbose(self.verbose, format!("GET {}", url));

        let response = self.api.get(&url).send().await?;
        let response = self.check_status(response).await?;
        Ok(response.json::<Value>().await?)
    }

    /// Start a GET against a media URL returned by the service. The
    /// timeout covers the body as well, so `None` is for large downloads.
    pub async fn download(
        &self,
        url: &str,
        timeout: Option<Duration>,
    ) -> Result<reqwest::Response> {
        log_verbose(self.verbose, format!("GET {}", url));

        let mut request = self.downloads.get(url);
        if let Some(timeout) = timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        self.check_status(response).await
    }

    async fn check_status(&self, response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        log_verbose(self.verbose, format!("HTTP {}", status));

        if status.is_success() {
            return Ok(response);
        }

        let message = response.text().await.unwrap_or_default();
        Err(GrokError::ApiError {
            status: status.as_u16(),
            message,
        })
    }
}
