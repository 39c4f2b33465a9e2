// NameFinder - app/state.rs
//
// Application state: the loaded name list, one display area per trigger,
// and the history of results. Owned by the presentation loop and passed
// explicitly; there is no global state.

use crate::core::model::{Algorithm, NameList, SearchResult};
use crate::core::search;
use crate::util::constants;
use std::collections::VecDeque;

/// A named action that runs one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    LinearSearch,
    BinarySearch,
}

impl Trigger {
    /// Returns all triggers in display order.
    pub fn all() -> &'static [Trigger] {
        &[Trigger::LinearSearch, Trigger::BinarySearch]
    }

    /// Display name, e.g. "Linear Search".
    pub fn name(&self) -> &'static str {
        match self {
            Trigger::LinearSearch => constants::LINEAR_TRIGGER_NAME,
            Trigger::BinarySearch => constants::BINARY_TRIGGER_NAME,
        }
    }

    /// Accepted spellings, longest first so prefix matching is unambiguous.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Trigger::LinearSearch => &[constants::LINEAR_TRIGGER_NAME, "linear"],
            Trigger::BinarySearch => &[constants::BINARY_TRIGGER_NAME, "binary"],
        }
    }

    /// Algorithm this trigger runs.
    pub fn algorithm(&self) -> Algorithm {
        match self {
            Trigger::LinearSearch => Algorithm::Linear,
            Trigger::BinarySearch => Algorithm::Binary,
        }
    }

    /// Parse a trigger name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::all()
            .iter()
            .copied()
            .find(|t| t.aliases().iter().any(|a| a.eq_ignore_ascii_case(name)))
    }
}

/// Output slot belonging to one trigger.
///
/// Starts out listing the names that trigger searches. After a search it
/// holds the two-element `(label, message)` result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayArea {
    lines: Vec<String>,
}

impl DisplayArea {
    fn listing(names: &[String]) -> Self {
        Self {
            lines: names.to_vec(),
        }
    }

    fn show(&mut self, result: &SearchResult) {
        let (label, message) = result.display();
        self.lines = vec![label, message];
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    names: NameList,
    linear_display: DisplayArea,
    binary_display: DisplayArea,
    history: VecDeque<SearchResult>,
}

impl AppState {
    /// Create initial state. Each display area lists the sequence its
    /// trigger searches.
    pub fn new(names: NameList) -> Self {
        Self {
            linear_display: DisplayArea::listing(names.names()),
            binary_display: DisplayArea::listing(names.sorted()),
            names,
            history: VecDeque::with_capacity(constants::HISTORY_LIMIT),
        }
    }

    pub fn names(&self) -> &NameList {
        &self.names
    }

    /// Display area for `trigger`.
    pub fn display(&self, trigger: Trigger) -> &DisplayArea {
        match trigger {
            Trigger::LinearSearch => &self.linear_display,
            Trigger::BinarySearch => &self.binary_display,
        }
    }

    /// Run the search behind `trigger`, show the result in its display
    /// area, record it in the history, and return it.
    pub fn fire(&mut self, trigger: Trigger, query: &str) -> SearchResult {
        let result = search::search(&self.names, trigger.algorithm(), query);

        match trigger {
            Trigger::LinearSearch => self.linear_display.show(&result),
            Trigger::BinarySearch => self.binary_display.show(&result),
        }

        if self.history.len() >= constants::HISTORY_LIMIT {
            self.history.pop_front();
        }
        self.history.push_back(result.clone());

        result
    }

    /// Every result so far, oldest first.
    pub fn history(&self) -> &VecDeque<SearchResult> {
        &self.history
    }
}
