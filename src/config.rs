//! Layered application configuration.
//!
//! Settings are merged with figment, later layers winning:
//!
//! 1. Built-in defaults ([`Config::default`])
//! 2. TOML file: `--config <FILE>`, or `config.toml` in the platform config
//!    directory when it exists
//! 3. Environment variables prefixed with `PREFIXDUPE_` (e.g.
//!    `PREFIXDUPE_PREFIX=run_`, `PREFIXDUPE_SORT_ENTRIES=true`)
//! 4. Command-line flags ([`Config::apply_cli`])
//!
//! # Example
//!
//! ```toml
//! folder = "./results"
//! prefix = "output"
//! output = "json"
//! sort_entries = true
//! follow_symlinks = true
//! color = false
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::cli::{OutputFormat, ScanArgs};
use crate::duplicates::{FinderConfig, DEFAULT_PREFIX};
use crate::progress::ScanReporter;

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "PREFIXDUPE_";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory to scan.
    pub folder: PathBuf,
    /// Literal file name prefix.
    pub prefix: String,
    /// Report format.
    pub output: OutputFormat,
    /// List entries in file-name order.
    pub sort_entries: bool,
    /// Treat symlinks to regular files as files.
    pub follow_symlinks: bool,
    /// Colored text output.
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            folder: PathBuf::from("."),
            prefix: DEFAULT_PREFIX.to_string(),
            output: OutputFormat::Text,
            sort_entries: false,
            follow_symlinks: true,
            color: true,
        }
    }
}

impl Config {
    /// Load configuration from an explicit file, or from the default
    /// platform path when `path` is `None`.
    ///
    /// # Errors
    ///
    /// Fails when an explicit file does not exist, or when any layer holds a
    /// value of the wrong type.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_path(path),
            None => {
                let default = Self::default_path();
                if let Some(ref p) = default {
                    log::debug!("Looking for configuration at {}", p.display());
                }
                Self::extract(Self::figment(default.as_deref()))
            }
        }
    }

    /// Load configuration layered on top of the TOML file at `path`.
    ///
    /// # Errors
    ///
    /// Fails when the file does not exist or cannot be parsed.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.is_file() {
            anyhow::bail!("Configuration file not found: {}", path.display());
        }
        Self::extract(Self::figment(Some(path)))
            .with_context(|| format!("Failed to load configuration from {}", path.display()))
    }

    /// The layered figment: defaults, then the file (if any), then env.
    #[must_use]
    pub fn figment(file: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));
        if let Some(file) = file {
            // A missing file contributes nothing.
            figment = figment.merge(Toml::file(file));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    fn extract(figment: Figment) -> Result<Self> {
        let config: Config = figment.extract().context("Invalid configuration")?;
        log::debug!("Effective configuration: {:?}", config);
        Ok(config)
    }

    /// Default platform-specific configuration path.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "prefixdupe", "prefixdupe")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Override settings with the ones given on the command line.
    #[must_use]
    pub fn apply_cli(mut self, args: &ScanArgs, no_color: bool) -> Self {
        if let Some(ref folder) = args.folder {
            self.folder = folder.clone();
        }
        if let Some(ref prefix) = args.prefix {
            self.prefix = prefix.clone();
        }
        if let Some(output) = args.output {
            self.output = output;
        }
        if args.sort {
            self.sort_entries = true;
        }
        if args.no_follow_symlinks {
            self.follow_symlinks = false;
        }
        if no_color {
            self.color = false;
        }
        self
    }

    /// Build the finder configuration for these settings.
    #[must_use]
    pub fn finder_config(&self, reporter: Arc<dyn ScanReporter>) -> FinderConfig {
        FinderConfig::new(self.prefix.clone())
            .with_sort_entries(self.sort_entries)
            .with_follow_symlinks(self.follow_symlinks)
            .with_reporter(reporter)
    }
}
