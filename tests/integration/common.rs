//! Shared helpers for the integration tests.

use prefixdupe::progress::ScanReporter;
use prefixdupe::scanner::{HashError, ScanError};
use std::collections::BTreeSet;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Writer whose contents stay readable after it has been moved into a
/// reporter.
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Reporter recording every event it receives.
#[derive(Default)]
pub struct RecordingReporter {
    pub entries: Mutex<Vec<PathBuf>>,
    pub read_errors: Mutex<Vec<PathBuf>>,
    pub invalid: Mutex<Vec<String>>,
}

impl ScanReporter for RecordingReporter {
    fn on_entry(&self, path: &Path) {
        self.entries.lock().unwrap().push(path.to_path_buf());
    }

    fn on_read_error(&self, error: &HashError) {
        self.read_errors.lock().unwrap().push(error.path().to_path_buf());
    }

    fn on_invalid_directory(&self, error: &ScanError) {
        self.invalid.lock().unwrap().push(error.to_string());
    }
}

/// Group membership as sets, ignoring group and path order.
pub fn membership(groups: &[Vec<PathBuf>]) -> BTreeSet<BTreeSet<PathBuf>> {
    groups
        .iter()
        .map(|g| g.iter().cloned().collect())
        .collect()
}

pub fn write(dir: &Path, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}
