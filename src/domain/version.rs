//! Version tokens extracted from download links
//!
//! A token is a dotted string ordered segment by segment, left to right.
//! Numeric segments compare by value, so `1.10` is newer than `1.9`.
//! Missing trailing segments count as zero, which makes `1.2` equal to
//! `1.2.0`. A segment that is not a plain digit run ranks below every
//! numeric segment and compares lexically against other text segments.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A version string used purely for ordering
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionToken(String);

impl VersionToken {
    /// Create a new version token
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The token as it appeared in the index
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the token is newer than `other`
    pub fn is_newer_than(&self, other: &VersionToken) -> bool {
        compare_versions(&self.0, &other.0) == Ordering::Greater
    }
}

impl fmt::Display for VersionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Compare two version strings segment by segment
///
/// This is not `Ord` on `VersionToken` because equal versions may still be
/// different strings (`1.2` and `1.2.0`).
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let parts_a: Vec<&str> = a.split('.').collect();
    let parts_b: Vec<&str> = b.split('.').collect();
    let len = parts_a.len().max(parts_b.len());

    for i in 0..len {
        let pa = parts_a.get(i).copied().unwrap_or("0");
        let pb = parts_b.get(i).copied().unwrap_or("0");
        match compare_segments(pa, pb) {
            Ordering::Equal => continue,
            other => return other,
        }
    }

    Ordering::Equal
}

fn is_numeric(segment: &str) -> bool {
    // Empty segments ("1..2", "3.2.") read as zero
    segment.bytes().all(|b| b.is_ascii_digit())
}

fn compare_segments(a: &str, b: &str) -> Ordering {
    match (is_numeric(a), is_numeric(b)) {
        (true, true) => compare_digit_runs(a, b),
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.cmp(b),
    }
}

/// Compare two digit runs by value without parsing into a fixed-width integer
fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
