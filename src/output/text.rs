//! Human-readable result report.
//!
//! # Output Layout
//!
//! ```text
//! Result: found 1 group(s) of files with identical content (names starting with 'output').
//!
//! --- Group 1 (identical content) ---
//!   - ./output1.txt
//!   - ./output2.txt
//! -------------
//! ```
//!
//! When there are no groups a single result line says so. An invalid folder
//! yields no groups too, so it gets the same line after the reporter's error.

use std::io::Write;

use yansi::{Paint, Style};

use crate::duplicates::{DuplicateGroup, ScanSummary};

/// Text report for a finished scan.
#[derive(Debug)]
pub struct TextOutput<'a> {
    groups: &'a [DuplicateGroup],
    summary: &'a ScanSummary,
    color: bool,
}

impl<'a> TextOutput<'a> {
    /// Create a report over the scan results.
    #[must_use]
    pub fn new(groups: &'a [DuplicateGroup], summary: &'a ScanSummary) -> Self {
        Self {
            groups,
            summary,
            color: false,
        }
    }

    /// Enable or disable ANSI colors.
    #[must_use]
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if self.color {
            text.paint(style).to_string()
        } else {
            text.to_string()
        }
    }

    /// Write the report.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        let prefix = &self.summary.prefix;
        if self.groups.is_empty() {
            let line = format!(
                "Result: all files starting with '{prefix}' in this folder have distinct content (or only one such file exists)."
            );
            writeln!(writer, "{}", self.paint(&line, Style::new().green()))?;
            return Ok(());
        }

        let line = format!(
            "Result: found {} group(s) of files with identical content (names starting with '{prefix}').",
            self.groups.len()
        );
        writeln!(writer, "{}\n", self.paint(&line, Style::new().yellow().bold()))?;

        for (i, group) in self.groups.iter().enumerate() {
            let index = i + 1;
            let header = format!("--- Group {index} (identical content) ---");
            writeln!(writer, "{}", self.paint(&header, Style::new().cyan()))?;
            for path in &group.paths {
                writeln!(writer, "  - {}", path.display())?;
            }
            writeln!(writer, "{}", separator(index))?;
        }
        Ok(())
    }

    /// Render the report into a string.
    #[must_use]
    pub fn render(&self) -> String {
        let mut buffer = Vec::new();
        if let Err(e) = self.write_to(&mut buffer) {
            log::debug!("Failed to render text report: {}", e);
        }
        String::from_utf8_lossy(&buffer).into_owned()
    }
}

/// Closing line for group `index`: 12 dashes plus one per digit.
fn separator(index: usize) -> String {
    "-".repeat(12 + index.to_string().len())
}
