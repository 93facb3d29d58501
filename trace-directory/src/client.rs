//! Directory HTTP client
//!
//! Creates HTTP clients for the read-only profile directory.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use trace_core::DEFAULT_SEARCH_LIMIT;

/// Directory access configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectoryConfig {
    /// API root (default: https://api.github.com)
    pub base_url: String,
    /// User-Agent sent with every call
    pub user_agent: String,
    /// Per-call timeout in seconds
    pub timeout_secs: u64,
    /// Number of hits requested per search
    pub search_limit: usize,
    /// Hydration calls allowed in flight at once (1 = sequential)
    pub hydration_concurrency: usize,
    /// Optional access token (raises the rate limit)
    pub token: Option<String>,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.github.com".to_string(),
            user_agent: "TRACE-TeamFinder".to_string(),
            timeout_secs: 15,
            search_limit: DEFAULT_SEARCH_LIMIT,
            hydration_concurrency: 1,
            token: std::env::var("GITHUB_TOKEN").ok(),
        }
    }
}

/// Errors from directory access
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("Failed to build directory client: {0}")]
    ClientBuild(String),

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Directory returned status {status} for {url}")]
    Status { status: u16, url: String },

    #[error("Failed to decode directory response: {0}")]
    Decode(String),

    #[error("Timeout after {0} seconds")]
    Timeout(u64),
}

impl DirectoryError {
    /// Classify a transport error, separating timeouts
    pub fn from_transport(err: reqwest::Error, timeout_secs: u64) -> Self {
        if err.is_timeout() {
            DirectoryError::Timeout(timeout_secs)
        } else {
            DirectoryError::Request(err)
        }
    }
}

/// Create an HTTP client for the directory
pub fn create_directory_client(config: &DirectoryConfig) -> Result<Client, DirectoryError> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github.v3+json"));

    if let Some(token) = &config.token {
        let value = HeaderValue::from_str(&format!("token {}", token))
            .map_err(|e| DirectoryError::ClientBuild(e.to_string()))?;
        headers.insert(AUTHORIZATION, value);
    }

    Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .user_agent(config.user_agent.as_str())
        .default_headers(headers)
        .build()
        .map_err(|e| DirectoryError::ClientBuild(e.to_string()))
}

/// Check if the directory API root answers
pub async fn check_directory_connection(config: &DirectoryConfig) -> Result<bool, DirectoryError> {
    let client = create_directory_client(config)?;

    let result = client.get(&config.base_url).send().await;

    match result {
        Ok(resp) => Ok(resp.status().is_success() || resp.status().is_redirection()),
        Err(_) => Ok(false),
    }
}
