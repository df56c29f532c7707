//! Provider run orchestration
//!
//! Workflow: read inputs → build query → fetch → extract → select →
//! compose → write outputs. The first failure ends the run.

use crate::domain::{Candidate, Environment, ResolvedResult};
use crate::error::{ConfigError, ProviderError};
use crate::fetch::{HttpClient, IndexFetcher};
use crate::progress::FetchSpinner;
use crate::provider::UrlProvider;
use crate::resolve::resolve;
use std::time::Duration;

/// Runs a provider against an index fetcher
pub struct Orchestrator {
    /// Source of index pages
    fetcher: Box<dyn IndexFetcher>,
    /// Whether to show a spinner during the fetch
    show_progress: bool,
}

/// Result of a successful run
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Name of the provider that ran
    pub provider: &'static str,
    /// Index page that was scraped
    pub index_url: String,
    /// The selected link and its absolute URL
    pub result: ResolvedResult,
    /// Every candidate matched in the index
    pub candidates: Vec<Candidate>,
    /// Position of the selected link in `candidates`
    pub selected: usize,
    /// Output variables written by the provider
    pub outputs: Environment,
}

impl Orchestrator {
    /// Create an orchestrator backed by an HTTP client with the given timeout
    pub fn new(timeout: Duration) -> Result<Self, ConfigError> {
        let client = HttpClient::with_timeout(timeout)?;
        Ok(Self::with_fetcher(Box::new(client)))
    }

    /// Create an orchestrator with a custom fetcher (for testing)
    pub fn with_fetcher(fetcher: Box<dyn IndexFetcher>) -> Self {
        Self {
            fetcher,
            show_progress: false,
        }
    }

    /// Enable or disable the fetch spinner
    pub fn show_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Run `provider` with the inputs in `env`, writing its outputs back into `env`
    pub async fn run(
        &self,
        provider: &dyn UrlProvider,
        env: &mut Environment,
    ) -> Result<RunReport, ProviderError> {
        let query = provider.build_query(env)?;

        let mut spinner = FetchSpinner::new(self.show_progress);
        spinner.start(&query.index_url);
        let resolution = resolve(self.fetcher.as_ref(), &query).await;
        spinner.finish();
        let resolution = resolution?;

        provider.emit(&resolution.result, env);

        Ok(RunReport {
            provider: provider.name(),
            index_url: query.index_url,
            result: resolution.result,
            candidates: resolution.candidates,
            selected: resolution.selected,
            outputs: env.select(provider.output_variables()),
        })
    }
}
