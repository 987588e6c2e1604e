//! Command-line interface definitions for prefixdupe.
//!
//! All arguments are optional. Anything not given on the command line
//! falls back to the configuration file, then the environment, then the
//! built-in defaults (current directory, prefix `output`, text output).
//!
//! # Example
//!
//! ```bash
//! # Scan the current directory for duplicated output* files
//! prefixdupe
//!
//! # Scan another folder for a different prefix, as JSON
//! prefixdupe ./results --prefix run_ --output json
//!
//! # Deterministic order, debug logging
//! prefixdupe -vv --sort ./results
//! ```

use clap::{Args, Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Find files sharing a name prefix whose contents are identical.
///
/// Lists the direct entries of FOLDER (no recursion), keeps regular files
/// whose names start with PREFIX, hashes each with SHA-256 and reports the
/// groups of files with identical content.
#[derive(Debug, Parser)]
#[command(name = "prefixdupe")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress log output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Print start-up errors as JSON on stderr
    #[arg(long, global = true)]
    pub json_errors: bool,

    /// Path to a TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Scan options
    #[command(flatten)]
    pub scan: ScanArgs,
}

/// Arguments controlling the scan itself.
#[derive(Debug, Args, Default)]
pub struct ScanArgs {
    /// Directory to scan (default: current directory)
    #[arg(value_name = "FOLDER")]
    pub folder: Option<PathBuf>,

    /// Literal, case-sensitive file name prefix (default: output)
    #[arg(short, long, value_name = "PREFIX")]
    pub prefix: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// List entries sorted by file name instead of directory order
    #[arg(long)]
    pub sort: bool,

    /// Do not treat symlinks to regular files as files
    #[arg(long)]
    pub no_follow_symlinks: bool,
}

/// Output format for scan results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable report
    #[default]
    Text,
    /// JSON output for scripting
    Json,
    /// CSV output for spreadsheets
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}
