//! HTTP client for download indexes
//!
//! This module provides the production [`IndexFetcher`] with:
//! - Configurable timeout and User-Agent
//! - Non-success statuses reported as fetch failures
//! - A single attempt per request

use crate::error::{ConfigError, ProviderError};
use crate::fetch::IndexFetcher;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Default timeout for HTTP requests (30 seconds)
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default User-Agent header
const DEFAULT_USER_AGENT: &str = concat!("urlprovider/", env!("CARGO_PKG_VERSION"));

/// reqwest-backed index fetcher
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self, ConfigError> {
        Self::with_config(DEFAULT_TIMEOUT, DEFAULT_USER_AGENT)
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(timeout: Duration, user_agent: &str) -> Result<Self, ConfigError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| ConfigError::HttpClient {
                message: e.to_string(),
            })?;

        Ok(Self { client })
    }

    /// Create a new HTTP client with the default User-Agent and a custom timeout
    pub fn with_timeout(timeout: Duration) -> Result<Self, ConfigError> {
        Self::with_config(timeout, DEFAULT_USER_AGENT)
    }
}

#[async_trait]
impl IndexFetcher for HttpClient {
    async fn fetch(&self, url: &str) -> Result<String, ProviderError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| ProviderError::fetch(url, e))?;

        response
            .text()
            .await
            .map_err(|e| ProviderError::fetch(url, e))
    }
}
