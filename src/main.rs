// NameFinder - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. config.toml loading
// 3. Logging initialisation (debug mode support)
// 4. Handing the run to `app::runner` and mapping its result to an exit code

use clap::{Parser, Subcommand};
use namefinder::app::runner::{self, Action, RunOptions};
use namefinder::core::export::OutputFormat;
use namefinder::platform::config::{self, PlatformPaths};
use namefinder::util;
use std::path::PathBuf;

/// NameFinder - linear and binary search over a list of names.
///
/// Loads Names.txt (one name per line) and looks names up either by
/// scanning the list in file order or by binary search over a sorted copy.
#[derive(Parser, Debug)]
#[command(name = "namefinder", version, about)]
struct Cli {
    /// Name list file (defaults to Names.txt beside the executable).
    #[arg(short = 'n', long = "names", global = true)]
    names: Option<PathBuf>,

    /// Directory containing config.toml (defaults to the platform config dir).
    #[arg(short = 'c', long = "config-dir", global = true)]
    config_dir: Option<PathBuf>,

    /// Output format for search results: text, json or csv.
    #[arg(short = 'f', long = "format", global = true, value_parser = parse_format)]
    format: Option<OutputFormat>,

    /// Write every search result of this run to a file, in the output format.
    #[arg(short = 'o', long = "export", global = true)]
    export: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug", global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Linear Search: scan the names in file order.
    Linear {
        /// Name to look for (exact, case-sensitive).
        query: String,
    },
    /// Binary Search: halve the sorted names.
    Binary {
        /// Name to look for (exact, case-sensitive).
        query: String,
    },
    /// Print the name list.
    List {
        /// Print the sorted copy instead of file order.
        #[arg(short = 's', long = "sorted")]
        sorted: bool,
    },
    /// Read commands from stdin (default when no subcommand is given).
    Interactive,
}

fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    OutputFormat::from_name(s).ok_or_else(|| format!("unknown format '{s}' (expected text, json or csv)"))
}

fn main() {
    let cli = Cli::parse();

    // Config is read before logging so its level can take part in the
    // filter; problems are reported once the subscriber is up.
    let paths = match cli.config_dir {
        Some(ref dir) => PlatformPaths::with_config_dir(dir),
        None => PlatformPaths::resolve(),
    };
    let (app_config, config_problems) = config::load_config(&paths.config_dir);

    util::logging::init(cli.debug, app_config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        config = %paths.config_file().display(),
        "NameFinder starting"
    );

    for problem in &config_problems {
        tracing::warn!(error = %problem, "Configuration warning");
    }

    let options = RunOptions {
        names: cli.names,
        format: cli.format,
        export: cli.export,
        action: match cli.command.unwrap_or(Command::Interactive) {
            Command::Linear { query } => Action::Linear(query),
            Command::Binary { query } => Action::Binary(query),
            Command::List { sorted } => Action::List { sorted },
            Command::Interactive => Action::Interactive,
        },
    };

    let stdin = std::io::stdin();
    let result = runner::run(&options, &app_config, stdin.lock(), std::io::stdout().lock());

    if let Err(ref e) = result {
        tracing::error!(error = %e, "NameFinder failed");
        eprintln!("Error: {e}");
        std::process::exit(runner::exit_code(&result));
    }
}
