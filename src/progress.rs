//! Scan event reporting.
//!
//! The finder never writes to the console itself. It emits events to a
//! caller-supplied [`ScanReporter`], and the caller decides where they go:
//!
//! - [`ConsoleReporter`] prints the human-readable progress lines
//!   (banner, one line per examined entry, read failures) to a writer.
//! - [`LogReporter`] forwards every event to the `log` facade, used when
//!   stdout carries a machine-readable report.
//! - [`NullReporter`] drops everything.

use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use yansi::{Paint, Style};

use crate::scanner::{FileEntry, HashError, ScanError};

/// Receiver for events emitted while scanning.
///
/// Every method except [`ScanReporter::on_read_error`] and
/// [`ScanReporter::on_invalid_directory`] has a no-op default.
pub trait ScanReporter: Send + Sync {
    /// Called once before the folder is validated.
    ///
    /// # Arguments
    ///
    /// * `folder` - Folder as given by the caller
    /// * `prefix` - Name prefix being matched
    fn on_scan_start(&self, _folder: &Path, _prefix: &str) {}

    /// Called for every entry whose name matches the prefix, before the
    /// regular-file check.
    fn on_entry(&self, _path: &Path) {}

    /// Called after a file has been read and hashed.
    fn on_file_hashed(&self, _file: &FileEntry) {}

    /// Called when a qualifying file cannot be read. The scan continues.
    fn on_read_error(&self, error: &HashError);

    /// Called when the listing fails for a single entry. The scan continues.
    fn on_entry_error(&self, _error: &ScanError) {}

    /// Called when the folder is not an accessible directory. The scan
    /// ends with no groups.
    fn on_invalid_directory(&self, error: &ScanError);
}

/// Reporter that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl ScanReporter for NullReporter {
    fn on_read_error(&self, _error: &HashError) {}

    fn on_invalid_directory(&self, _error: &ScanError) {}
}

/// Reporter that forwards events to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogReporter;

impl ScanReporter for LogReporter {
    fn on_scan_start(&self, folder: &Path, prefix: &str) {
        log::info!(
            "Scanning {} for files starting with '{}'",
            absolute_display(folder),
            prefix
        );
    }

    fn on_entry(&self, path: &Path) {
        log::debug!("Examining {}", path.display());
    }

    fn on_file_hashed(&self, file: &FileEntry) {
        log::trace!("{} {}", file.path.display(), file.size);
    }

    fn on_read_error(&self, error: &HashError) {
        log::warn!("Unable to read file {}: {}", error.path().display(), error.cause());
    }

    fn on_entry_error(&self, error: &ScanError) {
        log::warn!("Skipped entry: {}", error);
    }

    fn on_invalid_directory(&self, error: &ScanError) {
        log::error!("The path '{}' is not a valid folder: {}", error.path().display(), error);
    }
}

/// Reporter that prints human-readable progress lines.
///
/// Lines are written as events arrive so a read failure shows up next to
/// the file that caused it.
pub struct ConsoleReporter<W: Write + Send> {
    out: Mutex<W>,
    color: bool,
}

impl<W: Write + Send> ConsoleReporter<W> {
    /// Create a reporter writing to `out`.
    #[must_use]
    pub fn new(out: W, color: bool) -> Self {
        Self {
            out: Mutex::new(out),
            color,
        }
    }

    /// Consume the reporter and return the writer.
    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Run `f` with exclusive access to the writer, e.g. to append the
    /// final report after the progress lines.
    pub fn with_writer<R>(&self, f: impl FnOnce(&mut W) -> R) -> R {
        let mut out = match self.out.lock() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        };
        f(&mut *out)
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if self.color {
            text.paint(style).to_string()
        } else {
            text.to_string()
        }
    }

    fn emit(&self, line: &str) {
        // A closed stdout must not abort the scan.
        if let Err(e) = self.with_writer(|out| writeln!(out, "{line}")) {
            log::debug!("Failed to write progress line: {}", e);
        }
    }
}

impl<W: Write + Send> std::fmt::Debug for ConsoleReporter<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleReporter")
            .field("out", &"<writer>")
            .field("color", &self.color)
            .finish()
    }
}

impl<W: Write + Send> ScanReporter for ConsoleReporter<W> {
    fn on_scan_start(&self, folder: &Path, prefix: &str) {
        let bold = Style::new().bold();
        self.emit(&format!(
            "Scanning folder: '{}'",
            self.paint(&absolute_display(folder), bold)
        ));
        self.emit(&format!(
            "Looking for files whose names start with '{}'...\n",
            self.paint(prefix, bold)
        ));
    }

    fn on_entry(&self, path: &Path) {
        let name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
        self.emit(&format!("Examining file: {name}"));
    }

    fn on_read_error(&self, error: &HashError) {
        let line = format!(
            "Unable to read file {}: {}",
            error.path().display(),
            error.cause()
        );
        self.emit(&self.paint(&line, Style::new().red()));
    }

    fn on_entry_error(&self, error: &ScanError) {
        self.emit(&self.paint(&format!("Skipped entry: {error}"), Style::new().yellow()));
    }

    fn on_invalid_directory(&self, error: &ScanError) {
        let line = format!(
            "Error: the path '{}' is not a valid folder.",
            error.path().display()
        );
        self.emit(&self.paint(&line, Style::new().red().bold()));
        log::debug!("Invalid directory: {}", error);
    }
}

/// Absolute form of `path` for display, without resolving symlinks.
fn absolute_display(path: &Path) -> String {
    std::path::absolute(path)
        .unwrap_or_else(|_| path.to_path_buf())
        .display()
        .to_string()
}
