// NameFinder - core/model.rs
//
// Core data model types. Pure data definitions with no I/O and no
// presentation dependencies.
//
// These types are the shared vocabulary across all layers.

use crate::util::constants;
use serde::Serialize;
use std::path::{Path, PathBuf};

// =============================================================================
// Name list
// =============================================================================

/// The loaded dataset: the names in file order plus a sorted copy.
///
/// Both sequences are fixed at construction. The sorted copy is always a
/// permutation of `names` in ascending `Ord` order, which is the ordering
/// `binary_search` relies on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameList {
    names: Vec<String>,
    sorted: Vec<String>,
    source: PathBuf,
}

impl NameList {
    /// Build a name list, deriving the sorted copy from `names`.
    pub fn new(names: Vec<String>, source: impl Into<PathBuf>) -> Self {
        let mut sorted = names.clone();
        sorted.sort();
        Self {
            names,
            sorted,
            source: source.into(),
        }
    }

    /// Names in the order they appeared in the file.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Names in ascending lexicographic order.
    pub fn sorted(&self) -> &[String] {
        &self.sorted
    }

    /// Path the list was loaded from.
    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

// =============================================================================
// Search algorithm
// =============================================================================

/// Which lookup produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Forward scan over the unordered list.
    Linear,
    /// Halving search over the sorted list.
    Binary,
}

impl Algorithm {
    /// Returns both variants in display order.
    pub fn all() -> &'static [Algorithm] {
        &[Algorithm::Linear, Algorithm::Binary]
    }

    /// Label written next to a found value.
    pub fn label(&self) -> &'static str {
        match self {
            Algorithm::Linear => constants::LINEAR_SEARCH_LABEL,
            Algorithm::Binary => constants::BINARY_SEARCH_LABEL,
        }
    }

    /// Short machine-friendly name, used in CSV output and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Linear => "linear",
            Algorithm::Binary => "binary",
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Search results
// =============================================================================

/// Tagged outcome of a single lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum SearchOutcome {
    /// The matched element of the searched sequence.
    Found(String),
    /// The query that had no match.
    NotFound(String),
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }

    /// The matched value for `Found`, the query for `NotFound`.
    pub fn value(&self) -> &str {
        match self {
            SearchOutcome::Found(v) | SearchOutcome::NotFound(v) => v,
        }
    }
}

/// Everything a presentation layer needs to show one search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    /// Algorithm that produced this result.
    pub algorithm: Algorithm,

    /// Query as supplied by the caller.
    pub query: String,

    /// Found or not found.
    pub outcome: SearchOutcome,

    /// Number of element comparisons performed.
    pub comparisons: usize,
}

impl SearchResult {
    /// Two-element `(label, message)` pair for a display area.
    ///
    /// A hit reads `("Linear search", "Zoe found")` or
    /// `("Binary search", "Zoe found.")`; a miss reads
    /// `("Mia", "was not found")` for either algorithm.
    pub fn display(&self) -> (String, String) {
        match &self.outcome {
            SearchOutcome::Found(value) => {
                let message = match self.algorithm {
                    Algorithm::Linear => format!("{value} found"),
                    Algorithm::Binary => format!("{value} found."),
                };
                (self.algorithm.label().to_string(), message)
            }
            SearchOutcome::NotFound(query) => {
                (query.clone(), constants::NOT_FOUND_MESSAGE.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(algorithm: Algorithm, outcome: SearchOutcome) -> SearchResult {
        SearchResult {
            algorithm,
            query: outcome.value().to_string(),
            outcome,
            comparisons: 1,
        }
    }

    #[test]
    fn test_name_list_sorted_copy_leaves_original_order() {
        let list = NameList::new(
            vec!["Bob".to_string(), "Amy".to_string(), "Zoe".to_string()],
            "Names.txt",
        );
        assert_eq!(list.names(), ["Bob", "Amy", "Zoe"]);
        assert_eq!(list.sorted(), ["Amy", "Bob", "Zoe"]);
        assert_eq!(list.len(), 3);
        assert_eq!(list.source(), Path::new("Names.txt"));
    }

    #[test]
    fn test_sorting_is_byte_order() {
        let list = NameList::new(
            vec!["amy".to_string(), "Zoe".to_string(), "Bob".to_string()],
            "",
        );
        // Uppercase sorts before lowercase.
        assert_eq!(list.sorted(), ["Bob", "Zoe", "amy"]);
    }

    #[test]
    fn test_display_found_linear() {
        let r = result(Algorithm::Linear, SearchOutcome::Found("Zoe".into()));
        assert_eq!(
            r.display(),
            ("Linear search".to_string(), "Zoe found".to_string())
        );
    }

    #[test]
    fn test_display_found_binary_has_full_stop() {
        let r = result(Algorithm::Binary, SearchOutcome::Found("Zoe".into()));
        assert_eq!(
            r.display(),
            ("Binary search".to_string(), "Zoe found.".to_string())
        );
    }

    #[test]
    fn test_display_not_found_leads_with_query() {
        for &algorithm in Algorithm::all() {
            let r = result(algorithm, SearchOutcome::NotFound("Mia".into()));
            assert_eq!(
                r.display(),
                ("Mia".to_string(), "was not found".to_string())
            );
        }
    }

    #[test]
    fn test_outcome_serialises_tagged() {
        let json = serde_json::to_string(&SearchOutcome::Found("Amy".into())).unwrap();
        assert_eq!(json, r#"{"status":"found","value":"Amy"}"#);
    }
}
