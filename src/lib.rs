//! prefixdupe - find files sharing a name prefix with identical content.
//!
//! Lists one directory (no recursion), keeps the regular files whose names
//! start with a literal prefix, hashes each with SHA-256, and reports the
//! groups of files whose contents are byte-identical.
//!
//! # Example
//!
//! ```no_run
//! use prefixdupe::duplicates::find_duplicates;
//! use std::path::Path;
//!
//! for group in find_duplicates(Path::new("."), "output") {
//!     println!("{} identical files", group.len());
//! }
//! ```

pub mod cli;
pub mod config;
pub mod duplicates;
pub mod error;
pub mod logging;
pub mod output;
pub mod progress;
pub mod scanner;

use std::io::{IsTerminal, Write};
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::cli::{Cli, OutputFormat};
use crate::config::Config;
use crate::duplicates::DuplicateFinder;
use crate::error::ExitCode;
use crate::output::{CsvOutput, JsonOutput, TextOutput};
use crate::progress::{ConsoleReporter, LogReporter};

/// Run the application with parsed command-line arguments.
///
/// # Errors
///
/// Returns an error when the configuration cannot be loaded or the report
/// cannot be written. Scan problems are never errors.
pub fn run_app(cli: Cli) -> Result<ExitCode> {
    logging::init_logging(cli.verbose, cli.quiet);

    let mut config = Config::load(cli.config.as_deref())?.apply_cli(&cli.scan, cli.no_color);
    config.color = color_enabled(config.color, std::io::stdout().is_terminal());
    if !config.color {
        yansi::disable();
    }

    run_scan(&config, std::io::stdout())
}

/// Colors are used only when requested and stdout is a terminal, so piped
/// or redirected reports stay plain text.
fn color_enabled(requested: bool, stdout_is_terminal: bool) -> bool {
    requested && stdout_is_terminal
}

/// Scan according to `config` and write the report to `out`.
///
/// In text mode progress lines and the final report share `out`; in JSON
/// and CSV mode progress goes to the logger and `out` holds only the
/// machine-readable document.
///
/// # Errors
///
/// Returns an error if writing the report fails.
pub fn run_scan<W: Write + Send + 'static>(config: &Config, mut out: W) -> Result<ExitCode> {
    match config.output {
        OutputFormat::Text => {
            let console = Arc::new(ConsoleReporter::new(out, config.color));
            let finder = DuplicateFinder::new(config.finder_config(console.clone()));
            let (groups, summary) = finder.find_duplicates(&config.folder);

            console
                .with_writer(|w| {
                    TextOutput::new(&groups, &summary)
                        .with_color(config.color)
                        .write_to(w)?;
                    w.flush()
                })
                .context("Failed to write report")?;
        }
        OutputFormat::Json => {
            let finder = DuplicateFinder::new(config.finder_config(Arc::new(LogReporter)));
            let (groups, summary) = finder.find_duplicates(&config.folder);

            JsonOutput::new(&groups, &summary, ExitCode::Success)
                .write_to(&mut out, true)
                .context("Failed to write JSON report")?;
        }
        OutputFormat::Csv => {
            let finder = DuplicateFinder::new(config.finder_config(Arc::new(LogReporter)));
            let (groups, _summary) = finder.find_duplicates(&config.folder);

            CsvOutput::new(&groups)
                .write_to(&mut out)
                .context("Failed to write CSV report")?;
        }
    }

    Ok(ExitCode::Success)
}
