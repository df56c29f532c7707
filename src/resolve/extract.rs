//! Candidate extraction from index text
//!
//! Link patterns use two named groups:
//! - `link`: the href value to download
//! - `version`: the version token (optional)
//!
//! A pattern without a `link` group falls back to capture group 1, and to the
//! whole match when it has no groups at all.

use crate::domain::Candidate;
use regex::Regex;

/// Version sub-pattern used when no explicit version is requested
pub const ANY_VERSION_PATTERN: &str = r"\d[\.\d]*";

/// Input value meaning "pick the highest available version"
pub const LATEST: &str = "latest";

/// Which version a link pattern should accept
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum VersionConstraint {
    /// Any digit-and-dot run
    #[default]
    Latest,
    /// Exactly this literal string
    Exact(String),
}

impl VersionConstraint {
    /// Build a constraint from an optional input value
    ///
    /// Unset, empty and `latest` all mean [`VersionConstraint::Latest`].
    pub fn from_input(value: Option<&str>) -> Self {
        match value {
            None | Some("") | Some(LATEST) => VersionConstraint::Latest,
            Some(v) => VersionConstraint::Exact(v.to_string()),
        }
    }

    /// Regex fragment matching this constraint
    pub fn pattern(&self) -> String {
        match self {
            VersionConstraint::Latest => ANY_VERSION_PATTERN.to_string(),
            VersionConstraint::Exact(v) => regex::escape(v),
        }
    }
}

/// Collect every non-overlapping match of `pattern` in document order
pub fn extract_candidates(pattern: &Regex, text: &str) -> Vec<Candidate> {
    pattern
        .captures_iter(text)
        .filter_map(|caps| {
            let link = caps
                .name("link")
                .or_else(|| caps.get(1))
                .or_else(|| caps.get(0))?;
            let candidate = match caps.name("version") {
                Some(version) => Candidate::new(link.as_str(), version.as_str()),
                None => Candidate::unversioned(link.as_str()),
            };
            Some(candidate)
        })
        .collect()
}
