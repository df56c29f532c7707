//! Download link resolution
//!
//! Workflow: fetch → extract → select → compose.
//! Any failure aborts the run; nothing is retried.

mod compose;
mod extract;
mod select;

pub use compose::LinkBase;
pub use extract::{extract_candidates, VersionConstraint, ANY_VERSION_PATTERN, LATEST};
pub use select::{select_candidate, select_index};

use crate::domain::{Candidate, ResolvedResult};
use crate::error::ProviderError;
use crate::fetch::IndexFetcher;
use regex::Regex;

/// Everything needed to resolve one download link
#[derive(Debug, Clone)]
pub struct IndexQuery {
    /// URL of the index page to scrape
    pub index_url: String,
    /// Link pattern, see [`extract_candidates`]
    pub pattern: Regex,
    /// How matched links become absolute URLs
    pub link_base: LinkBase,
}

impl IndexQuery {
    /// Create a new query
    pub fn new(index_url: impl Into<String>, pattern: Regex, link_base: LinkBase) -> Self {
        Self {
            index_url: index_url.into(),
            pattern,
            link_base,
        }
    }
}

/// Outcome of a successful resolution
#[derive(Debug, Clone)]
pub struct Resolution {
    /// The selected link and its absolute URL
    pub result: ResolvedResult,
    /// Every candidate matched in the index, in document order
    pub candidates: Vec<Candidate>,
    /// Position of the selected link in `candidates`
    pub selected: usize,
}

/// Resolve the download URL described by `query`
pub async fn resolve(
    fetcher: &dyn IndexFetcher,
    query: &IndexQuery,
) -> Result<Resolution, ProviderError> {
    let index = fetcher.fetch(&query.index_url).await?;
    let candidates = extract_candidates(&query.pattern, &index);
    drop(index);

    let selected = select_index(&candidates)
        .ok_or_else(|| ProviderError::no_match(&query.index_url, query.pattern.as_str()))?;

    let candidate = candidates[selected].clone();
    let url = query.link_base.join(&candidate.link);
    Ok(Resolution {
        result: ResolvedResult::new(url, candidate),
        candidates,
        selected,
    })
}
