// NameFinder - app/runner.rs
//
// One program run: resolve and load the name list, perform the requested
// action, then optionally export the history. Input and output are
// injected so the whole run can be driven from tests; `main.rs` only
// parses arguments and maps the result to an exit code.

use crate::app::console;
use crate::app::state::{AppState, Trigger};
use crate::core::dataset::{self, LoadOptions};
use crate::core::export::{self, OutputFormat};
use crate::platform::config::AppConfig;
use crate::platform::fs;
use crate::util::error::{ExportError, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// What a run does once the name list is loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Fire "Linear Search" once and print the result.
    Linear(String),
    /// Fire "Binary Search" once and print the result.
    Binary(String),
    /// Print the names, in file order or sorted.
    List { sorted: bool },
    /// Read console commands until quit or end of input.
    Interactive,
}

/// Per-run options, usually built from the command line.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Name list override; beats `[dataset] path`.
    pub names: Option<PathBuf>,
    /// Output format override; beats `[output] format`.
    pub format: Option<OutputFormat>,
    /// Write the search history here after the action.
    pub export: Option<PathBuf>,
    pub action: Action,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            names: None,
            format: None,
            export: None,
            action: Action::Interactive,
        }
    }
}

/// Execute one run.
///
/// A search miss is a normal result and returns `Ok`. A missing or
/// unreadable name list returns `NameFinderError::Dataset`.
///
/// Returns the number of searches performed.
pub fn run<R: BufRead, W: Write>(
    options: &RunOptions,
    config: &AppConfig,
    input: R,
    mut output: W,
) -> Result<usize> {
    let names_path =
        fs::resolve_names_path(options.names.as_deref(), config.names_path.as_deref());
    let load_options = LoadOptions {
        skip_blank_lines: config.skip_blank_lines,
    };
    let names = dataset::load_names(&names_path, &load_options)?;
    let mut state = AppState::new(names);

    let format = options.format.unwrap_or(config.output_format);

    let searches = match &options.action {
        Action::Linear(query) => {
            let result = state.fire(Trigger::LinearSearch, query);
            export::write_results(&[result], format, &mut output)?;
            1
        }
        Action::Binary(query) => {
            let result = state.fire(Trigger::BinarySearch, query);
            export::write_results(&[result], format, &mut output)?;
            1
        }
        Action::List { sorted } => {
            let list = if *sorted {
                state.names().sorted()
            } else {
                state.names().names()
            };
            for name in list {
                writeln!(output, "{name}").map_err(ExportError::from)?;
            }
            output.flush().map_err(ExportError::from)?;
            0
        }
        Action::Interactive => {
            console::run_console(&mut state, input, &mut output).map_err(ExportError::from)?
        }
    };

    if let Some(ref path) = options.export {
        let file = std::fs::File::create(path).map_err(ExportError::from)?;
        let count = export::write_results(state.history(), format, std::io::BufWriter::new(file))?;
        tracing::info!(path = %path.display(), results = count, "Exported search results");
    }

    Ok(searches)
}

/// Process exit code for a finished run: 0 on success (including a
/// search that found nothing), 1 on any error.
pub fn exit_code<T>(result: &Result<T>) -> i32 {
    match result {
        Ok(_) => 0,
        Err(_) => 1,
    }
}
