//! Scanner module for directory listing and file hashing.
//!
//! This module provides functionality for:
//! - Listing the direct entries of one directory (no recursion)
//! - Filtering entries by a literal, byte-exact name prefix
//! - Content hashing with SHA-256
//!
//! # Architecture
//!
//! The scanner is divided into submodules:
//! - [`walker`]: Directory listing and prefix filtering
//! - [`hasher`]: SHA-256 whole-file hashing
//!
//! # Example
//!
//! ```no_run
//! use prefixdupe::scanner::{Walker, WalkerConfig, WalkEvent};
//! use std::path::Path;
//!
//! let walker = Walker::new(Path::new("."), WalkerConfig::new("output"));
//! for event in walker.walk().unwrap() {
//!     match event {
//!         WalkEvent::File(path) => println!("candidate: {}", path.display()),
//!         WalkEvent::NotAFile(path) => println!("not a file: {}", path.display()),
//!         WalkEvent::Error(e) => eprintln!("Warning: {}", e),
//!     }
//! }
//! ```

pub mod hasher;
pub mod walker;

use serde::Serialize;
use std::path::{Path, PathBuf};

// Re-export main types
pub use hasher::{hash_to_hex, Hash, Hasher, EMPTY_DIGEST};
pub use walker::{WalkEvent, Walker};

/// A qualifying file after its content has been read and hashed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileEntry {
    /// Path to the file (folder joined with the entry name)
    pub path: PathBuf,
    /// Content length in bytes
    pub size: u64,
    /// SHA-256 of the full content
    #[serde(serialize_with = "serialize_hash")]
    pub hash: Hash,
}

impl FileEntry {
    /// Create a new FileEntry.
    #[must_use]
    pub fn new(path: PathBuf, size: u64, hash: Hash) -> Self {
        Self { path, size, hash }
    }
}

fn serialize_hash<S: serde::Serializer>(hash: &Hash, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&hash_to_hex(hash))
}

/// Configuration for directory listing.
///
/// Controls the name filter, symlink handling, and listing order.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Literal prefix every entry name must start with. Empty matches all.
    pub prefix: String,

    /// Treat symbolic links that resolve to regular files as files.
    pub follow_symlinks: bool,

    /// Yield entries sorted by file name instead of directory order.
    pub sort_entries: bool,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            follow_symlinks: true,
            sort_entries: false,
        }
    }
}

impl WalkerConfig {
    /// Create a configuration matching `prefix` with default options.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            ..Default::default()
        }
    }

    /// Set whether symlinks to files qualify.
    #[must_use]
    pub fn with_follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    /// Set whether entries are listed in file-name order.
    #[must_use]
    pub fn with_sort_entries(mut self, sort: bool) -> Self {
        self.sort_entries = sort;
        self
    }
}

/// Errors concerning the directory being scanned.
///
/// Any of these at the top level means the folder is not a usable directory.
#[derive(thiserror::Error, Debug)]
pub enum ScanError {
    /// Permission was denied when accessing a file or directory.
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// The specified path was not found.
    #[error("Path not found: {0}")]
    NotFound(PathBuf),

    /// The specified path is not a directory.
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    /// An I/O error occurred while listing.
    #[error("I/O error for {path}: {source}")]
    Io {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl ScanError {
    /// The path this error refers to.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::PermissionDenied(p) | Self::NotFound(p) | Self::NotADirectory(p) => p,
            Self::Io { path, .. } => path,
        }
    }
}

/// Errors that can occur while reading a file for hashing.
///
/// Every variant keeps the underlying I/O error so reports can show the
/// operating system's own wording.
#[derive(thiserror::Error, Debug)]
pub enum HashError {
    /// The specified file was not found.
    #[error("File not found: {path}")]
    NotFound {
        /// Path of the missing file
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Permission was denied when reading the file.
    #[error("Permission denied: {path}")]
    PermissionDenied {
        /// Path of the unreadable file
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// An I/O error occurred while reading the file.
    #[error("I/O error for {path}: {source}")]
    Io {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl HashError {
    /// Classify an I/O error raised while reading `path`.
    #[must_use]
    pub fn from_io(path: &Path, source: std::io::Error) -> Self {
        let path = path.to_path_buf();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound { path, source },
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path, source },
            _ => Self::Io { path, source },
        }
    }

    /// The file this error refers to.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound { path, .. }
            | Self::PermissionDenied { path, .. }
            | Self::Io { path, .. } => path,
        }
    }

    /// The underlying I/O error text, for "path: cause" reports.
    #[must_use]
    pub fn cause(&self) -> String {
        match self {
            Self::NotFound { source, .. }
            | Self::PermissionDenied { source, .. }
            | Self::Io { source, .. } => source.to_string(),
        }
    }
}
