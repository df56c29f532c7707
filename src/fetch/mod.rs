//! Download index retrieval
//!
//! This module provides:
//! - The `IndexFetcher` trait used by the resolution pipeline
//! - A reqwest-backed HTTP implementation

mod client;

pub use client::{HttpClient, DEFAULT_TIMEOUT};

use crate::error::ProviderError;
use async_trait::async_trait;

/// Trait for anything that can retrieve an index page as text
#[async_trait]
pub trait IndexFetcher: Send + Sync {
    /// Fetch the body of `url`
    ///
    /// Any failure, including a non-success status, is a `ProviderError::Fetch`.
    async fn fetch(&self, url: &str) -> Result<String, ProviderError>;
}
