// NameFinder - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "NameFinder";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "NameFinder";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Dataset
// =============================================================================

/// File name of the name list looked up next to the running executable
/// when neither the CLI nor config.toml name a dataset.
pub const NAMES_FILE_NAME: &str = "Names.txt";

/// Maximum size of a name list file in bytes. Larger files are rejected
/// before reading so a wrong path cannot pull a huge file into memory.
pub const MAX_NAMES_FILE_SIZE: u64 = 16 * 1024 * 1024; // 16 MiB

// =============================================================================
// Search labels
// =============================================================================

/// Result label written by a successful linear search.
pub const LINEAR_SEARCH_LABEL: &str = "Linear search";

/// Result label written by a successful binary search.
pub const BINARY_SEARCH_LABEL: &str = "Binary search";

/// Message paired with the query when a search misses.
pub const NOT_FOUND_MESSAGE: &str = "was not found";

/// Trigger name for the linear search action.
pub const LINEAR_TRIGGER_NAME: &str = "Linear Search";

/// Trigger name for the binary search action.
pub const BINARY_TRIGGER_NAME: &str = "Binary Search";

// =============================================================================
// Application state
// =============================================================================

/// Maximum number of search results kept in the session history.
/// The oldest result is dropped once the limit is reached.
pub const HISTORY_LIMIT: usize = 1_000;

/// Prompt printed by the interactive console before each command.
pub const CONSOLE_PROMPT: &str = "> ";

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log levels accepted in `[logging] level`.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
