// NameFinder - platform/fs.rs
//
// Locating the name list on disk.

use crate::util::constants;
use std::path::{Path, PathBuf};

/// Default name list location: `Names.txt` beside the running executable.
///
/// Falls back to `Names.txt` in the current directory if the executable
/// path cannot be determined.
pub fn default_names_path() -> PathBuf {
    match std::env::current_exe() {
        Ok(exe) => names_path_beside(&exe),
        Err(e) => {
            tracing::warn!(
                error = %e,
                "Could not determine executable location; looking for names in current directory"
            );
            PathBuf::from(constants::NAMES_FILE_NAME)
        }
    }
}

/// `Names.txt` in the same directory as `program`.
pub fn names_path_beside(program: &Path) -> PathBuf {
    program
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(constants::NAMES_FILE_NAME)
}

/// Pick the name list path.
///
/// Priority: CLI `--names` > config `[dataset] path` > beside the executable.
pub fn resolve_names_path(cli: Option<&Path>, config: Option<&Path>) -> PathBuf {
    let (path, origin) = if let Some(p) = cli {
        (p.to_path_buf(), "cli")
    } else if let Some(p) = config {
        (p.to_path_buf(), "config")
    } else {
        (default_names_path(), "default")
    };

    tracing::debug!(path = %path.display(), origin, "Name list path resolved");
    path
}
