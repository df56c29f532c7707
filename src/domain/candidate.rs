//! Matched download links and the final resolved result

use super::VersionToken;
use serde::{Deserialize, Serialize};

/// A single `(link, version)` pair matched in an index page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// The link exactly as it appeared in the page
    pub link: String,
    /// Version token captured alongside the link, if the pattern has one
    pub version: Option<VersionToken>,
}

impl Candidate {
    /// Create a candidate with a version token
    pub fn new(link: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            link: link.into(),
            version: Some(VersionToken::new(version)),
        }
    }

    /// Create a candidate without a version token
    pub fn unversioned(link: impl Into<String>) -> Self {
        Self {
            link: link.into(),
            version: None,
        }
    }

    /// Returns true if this candidate's version is strictly newer than `other`'s
    ///
    /// A candidate without a version is never newer than anything.
    pub fn is_newer_than(&self, other: &Candidate) -> bool {
        match (&self.version, &other.version) {
            (Some(mine), Some(theirs)) => mine.is_newer_than(theirs),
            (Some(_), None) => true,
            _ => false,
        }
    }
}

/// The selected candidate together with its absolute URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedResult {
    /// Absolute download URL
    pub url: String,
    /// The candidate the URL was composed from
    pub candidate: Candidate,
}

impl ResolvedResult {
    /// Create a new resolved result
    pub fn new(url: impl Into<String>, candidate: Candidate) -> Self {
        Self {
            url: url.into(),
            candidate,
        }
    }

    /// The selected version string, if one was captured
    pub fn version(&self) -> Option<&str> {
        self.candidate.version.as_ref().map(VersionToken::as_str)
    }
}
