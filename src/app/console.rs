// NameFinder - app/console.rs
//
// Interactive presentation loop. Reads one command per line, fires the
// matching trigger against `AppState`, and prints what its display area
// now shows. Generic over input and output so it can be driven in tests.

use crate::app::state::{AppState, Trigger};
use crate::util::constants;
use std::io::{self, BufRead, Write};

/// One parsed console line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Fire a trigger with a query.
    Search(Trigger, String),
    /// Print the names in file order.
    List,
    /// Print the names in sorted order.
    Sorted,
    Help,
    Quit,
    /// Blank line.
    Empty,
    /// Anything unrecognised, kept for the error message.
    Unknown(String),
}

impl Command {
    /// Parse a console line.
    ///
    /// Searches are written as `linear <query>`, `linear: <query>` or
    /// `Linear Search: <query>` (and the same for binary), in any case.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Command::Empty;
        }

        match line.to_lowercase().as_str() {
            "list" => return Command::List,
            "sorted" => return Command::Sorted,
            "help" | "?" => return Command::Help,
            "quit" | "exit" => return Command::Quit,
            _ => {}
        }

        match split_trigger(line) {
            Some((trigger, query)) => Command::Search(trigger, query.to_string()),
            None => Command::Unknown(line.to_string()),
        }
    }
}

/// Match a trigger alias at the start of `line` and return the rest as
/// the query.
///
/// The full trigger name ("Binary Search") must be followed by a colon.
/// A short alias ("binary") may be followed by a colon, whitespace, or
/// the end of the line, and everything after it is the query, so
/// `linear Search Party` looks up "Search Party".
fn split_trigger(line: &str) -> Option<(Trigger, &str)> {
    for &trigger in Trigger::all() {
        for alias in trigger.aliases() {
            let Some(head) = line.get(..alias.len()) else {
                continue;
            };
            if !head.eq_ignore_ascii_case(alias) {
                continue;
            }
            let rest = &line[alias.len()..];
            let query = if let Some(after_colon) = rest.strip_prefix(':') {
                after_colon
            } else if *alias == trigger.name() {
                continue;
            } else if rest.is_empty() || rest.starts_with(char::is_whitespace) {
                rest
            } else {
                continue;
            };
            return Some((trigger, query.trim()));
        }
    }
    None
}

fn write_help<W: Write>(output: &mut W) -> io::Result<()> {
    writeln!(output, "Commands:")?;
    writeln!(output, "  linear <name>   {}", constants::LINEAR_TRIGGER_NAME)?;
    writeln!(output, "  binary <name>   {}", constants::BINARY_TRIGGER_NAME)?;
    writeln!(output, "  list            show names in file order")?;
    writeln!(output, "  sorted          show names in sorted order")?;
    writeln!(output, "  help            show this message")?;
    writeln!(output, "  quit            leave")
}

fn write_lines<W: Write>(output: &mut W, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(output, "  {line}")?;
    }
    Ok(())
}

/// Run the console until `quit` or end of input.
///
/// Returns the number of searches performed.
pub fn run_console<R: BufRead, W: Write>(
    state: &mut AppState,
    input: R,
    mut output: W,
) -> io::Result<usize> {
    writeln!(
        output,
        "{} v{}: {} names from '{}'. Type 'help' for commands.",
        constants::APP_NAME,
        constants::APP_VERSION,
        state.names().len(),
        state.names().source().display()
    )?;

    let mut searches = 0;
    let mut lines = input.lines();

    loop {
        write!(output, "{}", constants::CONSOLE_PROMPT)?;
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            break;
        };
        let line = line?;

        match Command::parse(&line) {
            Command::Search(trigger, query) => {
                tracing::debug!(trigger = trigger.name(), query = %query, "Trigger fired");
                state.fire(trigger, &query);
                write_lines(&mut output, state.display(trigger).lines())?;
                searches += 1;
            }
            Command::List => write_lines(&mut output, state.names().names())?,
            Command::Sorted => write_lines(&mut output, state.names().sorted())?,
            Command::Help => write_help(&mut output)?,
            Command::Quit => break,
            Command::Empty => {}
            Command::Unknown(text) => {
                writeln!(output, "Unknown command '{text}'. Type 'help' for commands.")?;
            }
        }
    }

    tracing::info!(searches, "Console session ended");
    Ok(searches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::NameList;

    fn state() -> AppState {
        let names = ["Bob", "Amy", "Zoe"].iter().map(|s| s.to_string()).collect();
        AppState::new(NameList::new(names, "Names.txt"))
    }

    fn run(input: &str) -> (usize, String, AppState) {
        let mut state = state();
        let mut out = Vec::new();
        let n = run_console(&mut state, input.as_bytes(), &mut out).unwrap();
        (n, String::from_utf8(out).unwrap(), state)
    }

    #[test]
    fn test_parse_search_forms() {
        assert_eq!(
            Command::parse("linear Zoe"),
            Command::Search(Trigger::LinearSearch, "Zoe".into())
        );
        assert_eq!(
            Command::parse("Binary Search: Zoe"),
            Command::Search(Trigger::BinarySearch, "Zoe".into())
        );
        assert_eq!(
            Command::parse("binary Mia Wong"),
            Command::Search(Trigger::BinarySearch, "Mia Wong".into())
        );
        assert_eq!(
            Command::parse("LINEAR:Amy"),
            Command::Search(Trigger::LinearSearch, "Amy".into())
        );
    }

    #[test]
    fn test_parse_keeps_query_starting_with_search() {
        assert_eq!(
            Command::parse("linear Search Party"),
            Command::Search(Trigger::LinearSearch, "Search Party".into())
        );
        assert_eq!(
            Command::parse("binary search"),
            Command::Search(Trigger::BinarySearch, "search".into())
        );
        assert_eq!(
            Command::parse("Linear Search: Search Party"),
            Command::Search(Trigger::LinearSearch, "Search Party".into())
        );
    }

    #[test]
    fn test_session_query_starting_with_search() {
        let mut state = AppState::new(NameList::new(
            vec!["Amy".to_string(), "Search Party".to_string()],
            "Names.txt",
        ));
        let mut out = Vec::new();
        run_console(&mut state, "linear Search Party\n".as_bytes(), &mut out).unwrap();
        assert_eq!(
            state.display(Trigger::LinearSearch).lines(),
            ["Linear search", "Search Party found"]
        );
    }

    #[test]
    fn test_parse_other_commands() {
        assert_eq!(Command::parse("  "), Command::Empty);
        assert_eq!(Command::parse("LIST"), Command::List);
        assert_eq!(Command::parse("sorted"), Command::Sorted);
        assert_eq!(Command::parse("exit"), Command::Quit);
        assert_eq!(Command::parse("?"), Command::Help);
        assert_eq!(Command::parse("linearly Zoe"), Command::Unknown("linearly Zoe".into()));
    }

    #[test]
    fn test_session_runs_both_triggers() {
        let (n, out, state) = run("linear Zoe\nbinary Mia\nquit\nlinear Amy\n");
        assert_eq!(n, 2);
        assert!(out.contains("  Linear search\n  Zoe found\n"), "got: {out}");
        assert!(out.contains("  Mia\n  was not found\n"), "got: {out}");
        assert_eq!(state.history().len(), 2);
    }

    #[test]
    fn test_end_of_input_stops_loop() {
        let (n, _, _) = run("binary Bob");
        assert_eq!(n, 1);
    }

    #[test]
    fn test_unknown_command_keeps_going() {
        let (n, out, _) = run("find Zoe\nlinear Zoe\n");
        assert_eq!(n, 1);
        assert!(out.contains("Unknown command 'find Zoe'"));
    }

    #[test]
    fn test_sorted_lists_names() {
        let (_, out, _) = run("sorted\n");
        assert!(out.contains("  Amy\n  Bob\n  Zoe\n"), "got: {out}");
    }
}
