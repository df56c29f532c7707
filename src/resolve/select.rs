//! Picking one candidate out of many

use crate::domain::Candidate;

/// Select the candidate with the highest version
///
/// A single candidate is returned as-is. With several, the first one seen is
/// kept unless a later one is strictly newer, so ties go to document order.
/// Returns `None` only for an empty slice.
pub fn select_candidate(candidates: &[Candidate]) -> Option<&Candidate> {
    select_index(candidates).map(|index| &candidates[index])
}

/// Position of the candidate [`select_candidate`] would pick
pub fn select_index(candidates: &[Candidate]) -> Option<usize> {
    let (first, rest) = candidates.split_first()?;
    let (highest, _) = rest.iter().enumerate().fold(
        (0, first),
        |(highest, best), (offset, candidate)| {
            if candidate.is_newer_than(best) {
                (offset + 1, candidate)
            } else {
                (highest, best)
            }
        },
    );
    Some(highest)
}
