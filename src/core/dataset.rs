// NameFinder - core/dataset.rs
//
// Loads a newline-delimited name list from disk into a `NameList`.
// One name per line, surrounding whitespace stripped, file order kept.

use crate::core::model::NameList;
use crate::util::constants;
use crate::util::error::DatasetError;
use std::borrow::Cow;
use std::io;
use std::path::Path;

/// Options that change how lines become names.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadOptions {
    /// Drop lines that are empty after trimming. Off by default: a blank
    /// line in the middle of the file becomes an empty-string name.
    pub skip_blank_lines: bool,
}

/// Split file content into names.
///
/// `\n`, `\r\n` and a lone `\r` all end a line. A trailing line ending
/// does not produce an extra name.
pub fn parse_names(content: &str, options: &LoadOptions) -> Vec<String> {
    let content: Cow<'_, str> = if content.contains('\r') {
        Cow::Owned(content.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(content)
    };

    content
        .lines()
        .map(str::trim)
        .filter(|name| !(options.skip_blank_lines && name.is_empty()))
        .map(str::to_string)
        .collect()
}

/// Load a name list from `path`.
///
/// Invalid UTF-8 is replaced lossily so that files saved in a legacy
/// platform encoding still load.
///
/// # Errors
///
/// - `DatasetError::NotFound` if `path` does not exist.
/// - `DatasetError::FileTooLarge` if the file exceeds `MAX_NAMES_FILE_SIZE`.
/// - `DatasetError::Io` for any other read failure.
pub fn load_names(path: &Path, options: &LoadOptions) -> Result<NameList, DatasetError> {
    let io_err = |source: io::Error| {
        if source.kind() == io::ErrorKind::NotFound {
            DatasetError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            DatasetError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    };

    let size = std::fs::metadata(path).map_err(io_err)?.len();
    if size > constants::MAX_NAMES_FILE_SIZE {
        return Err(DatasetError::FileTooLarge {
            path: path.to_path_buf(),
            size,
            max_size: constants::MAX_NAMES_FILE_SIZE,
        });
    }

    let bytes = std::fs::read(path).map_err(io_err)?;
    let content = String::from_utf8_lossy(&bytes);
    let names = parse_names(&content, options);

    tracing::info!(
        path = %path.display(),
        names = names.len(),
        skip_blank_lines = options.skip_blank_lines,
        "Loaded name list"
    );

    Ok(NameList::new(names, path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_parse_strips_whitespace_and_keeps_order() {
        let names = parse_names("  Bob \nAmy\t\n Zoe\n", &LoadOptions::default());
        assert_eq!(names, vec!["Bob", "Amy", "Zoe"]);
    }

    #[test]
    fn test_parse_crlf() {
        let names = parse_names("Bob\r\nAmy\r\n", &LoadOptions::default());
        assert_eq!(names, vec!["Bob", "Amy"]);
    }

    #[test]
    fn test_parse_lone_carriage_return() {
        let names = parse_names("Bob\rAmy\r", &LoadOptions::default());
        assert_eq!(names, vec!["Bob", "Amy"]);
    }

    #[test]
    fn test_parse_mixed_line_endings() {
        let names = parse_names("Bob\r\nAmy\rZoe\n\rKai", &LoadOptions::default());
        assert_eq!(names, vec!["Bob", "Amy", "Zoe", "", "Kai"]);
    }

    #[test]
    fn test_parse_keeps_blank_lines_by_default() {
        let names = parse_names("Bob\n\nAmy", &LoadOptions::default());
        assert_eq!(names, vec!["Bob", "", "Amy"]);
    }

    #[test]
    fn test_parse_skip_blank_lines() {
        let options = LoadOptions {
            skip_blank_lines: true,
        };
        let names = parse_names("Bob\n   \n\nAmy\n", &options);
        assert_eq!(names, vec!["Bob", "Amy"]);
    }

    #[test]
    fn test_parse_empty_content() {
        assert!(parse_names("", &LoadOptions::default()).is_empty());
    }

    #[test]
    fn test_load_builds_sorted_copy() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Names.txt");
        fs::write(&path, "Bob\nAmy\nZoe\n").unwrap();

        let list = load_names(&path, &LoadOptions::default()).unwrap();
        assert_eq!(list.names(), ["Bob", "Amy", "Zoe"]);
        assert_eq!(list.sorted(), ["Amy", "Bob", "Zoe"]);
        assert_eq!(list.source(), path.as_path());
    }

    #[test]
    fn test_load_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_names(&dir.path().join("nope.txt"), &LoadOptions::default());
        assert!(
            matches!(result, Err(DatasetError::NotFound { .. })),
            "expected NotFound, got {result:?}"
        );
    }

    #[test]
    fn test_load_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_names(dir.path(), &LoadOptions::default());
        assert!(
            matches!(result, Err(DatasetError::Io { .. })),
            "expected Io, got {result:?}"
        );
    }

    #[test]
    fn test_load_invalid_utf8_is_lossy() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Names.txt");
        fs::write(&path, b"Bob\nR\xe9my\n").unwrap();

        let list = load_names(&path, &LoadOptions::default()).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.names()[0], "Bob");
        assert!(list.names()[1].starts_with('R'));
    }
}
