// NameFinder - core/search.rs
//
// The two lookups: a forward linear scan over the unordered list and a
// binary search over the sorted list.
// Core layer: pure functions, inputs are never mutated.

use crate::core::model::{Algorithm, NameList, SearchOutcome, SearchResult};
use std::cmp::Ordering;

/// Scan `names` from index 0 and return the first exact match.
///
/// Comparison is case-sensitive. No ordering is assumed.
pub fn linear_search(names: &[String], query: &str) -> SearchResult {
    let mut comparisons = 0;
    let mut outcome = SearchOutcome::NotFound(query.to_string());

    for name in names {
        comparisons += 1;
        if name == query {
            outcome = SearchOutcome::Found(name.clone());
            break;
        }
    }

    finish(Algorithm::Linear, query, outcome, comparisons)
}

/// Binary search over an ascending-sorted slice.
///
/// `sorted` must be in ascending `Ord` order; this is not re-checked in
/// release builds. With duplicates, whichever copy the halving path hits
/// first is returned.
pub fn binary_search(sorted: &[String], query: &str) -> SearchResult {
    debug_assert!(
        sorted.windows(2).all(|w| w[0] <= w[1]),
        "binary_search requires an ascending-sorted slice"
    );

    let mut comparisons = 0;
    let mut outcome = SearchOutcome::NotFound(query.to_string());

    // Inclusive bounds. An empty slice has no valid `high`.
    if let Some(mut high) = sorted.len().checked_sub(1) {
        let mut low = 0usize;
        while low <= high {
            // floor((low + high) / 2) without overflow
            let mid = low + (high - low) / 2;
            comparisons += 1;
            match sorted[mid].as_str().cmp(query) {
                Ordering::Equal => {
                    outcome = SearchOutcome::Found(sorted[mid].clone());
                    break;
                }
                Ordering::Less => low = mid + 1,
                Ordering::Greater => match mid.checked_sub(1) {
                    Some(h) => high = h,
                    None => break,
                },
            }
        }
    }

    finish(Algorithm::Binary, query, outcome, comparisons)
}

/// Run `algorithm` against the sequence it is meant for: the file-order
/// names for linear search, the sorted copy for binary search.
pub fn search(list: &NameList, algorithm: Algorithm, query: &str) -> SearchResult {
    match algorithm {
        Algorithm::Linear => linear_search(list.names(), query),
        Algorithm::Binary => binary_search(list.sorted(), query),
    }
}

fn finish(
    algorithm: Algorithm,
    query: &str,
    outcome: SearchOutcome,
    comparisons: usize,
) -> SearchResult {
    tracing::debug!(
        algorithm = %algorithm,
        query,
        found = outcome.is_found(),
        comparisons,
        "Search complete"
    );

    SearchResult {
        algorithm,
        query: query.to_string(),
        outcome,
        comparisons,
    }
}
