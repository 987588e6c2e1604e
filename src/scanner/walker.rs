//! Directory listing with a name-prefix filter.
//!
//! # Overview
//!
//! The walker lists the direct entries of one directory using `walkdir`
//! capped at depth 1, keeps the entries whose file name starts with the
//! configured prefix, and classifies each as a regular file or not. It never
//! descends into subdirectories.
//!
//! Prefix matching compares the encoded bytes of the OS file name, so it is
//! case-sensitive and byte-exact, and names that are not valid UTF-8 are
//! still matched correctly.

use std::ffi::OsStr;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::{ScanError, WalkerConfig};

/// One prefix-matching entry (or listing failure) produced by the walker.
#[derive(Debug)]
pub enum WalkEvent {
    /// A regular file (or symlink to one) whose name matches the prefix.
    File(PathBuf),
    /// A matching entry that is not a regular file, e.g. a subdirectory.
    NotAFile(PathBuf),
    /// The listing itself failed for one entry.
    Error(ScanError),
}

/// Non-recursive directory lister.
#[derive(Debug, Clone)]
pub struct Walker {
    root: PathBuf,
    config: WalkerConfig,
}

impl Walker {
    /// Create a walker over `root`.
    #[must_use]
    pub fn new(root: &Path, config: WalkerConfig) -> Self {
        Self {
            root: root.to_path_buf(),
            config,
        }
    }

    /// Check that the root is an existing, readable directory.
    ///
    /// # Errors
    ///
    /// Returns the [`ScanError`] describing why the root cannot be listed.
    pub fn validate(&self) -> Result<(), ScanError> {
        let metadata =
            std::fs::metadata(&self.root).map_err(|e| map_io_error(&self.root, e))?;
        if !metadata.is_dir() {
            return Err(ScanError::NotADirectory(self.root.clone()));
        }
        // Existence is not enough; the listing has to be readable too.
        std::fs::read_dir(&self.root).map_err(|e| map_io_error(&self.root, e))?;
        Ok(())
    }

    /// List the prefix-matching entries of the root.
    ///
    /// The root is validated first; per-entry failures after that are
    /// yielded as [`WalkEvent::Error`] and do not stop the listing.
    ///
    /// # Errors
    ///
    /// Returns a [`ScanError`] if the root is not an accessible directory.
    pub fn walk(&self) -> Result<impl Iterator<Item = WalkEvent>, ScanError> {
        self.validate()?;

        let mut walkdir = WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false);
        if self.config.sort_entries {
            walkdir = walkdir.sort_by_file_name();
        }

        let root = self.root.clone();
        let prefix = self.config.prefix.clone();
        let follow_symlinks = self.config.follow_symlinks;

        Ok(walkdir.into_iter().filter_map(move |item| {
            let entry = match item {
                Ok(entry) => entry,
                Err(err) => {
                    let path = err.path().unwrap_or(&root).to_path_buf();
                    log::warn!("Listing error under {}: {}", root.display(), err);
                    let source = err
                        .into_io_error()
                        .unwrap_or_else(|| std::io::Error::other("directory listing failed"));
                    return Some(WalkEvent::Error(ScanError::Io { path, source }));
                }
            };

            if !matches_prefix(entry.file_name(), &prefix) {
                log::trace!("Prefix mismatch: {}", entry.path().display());
                return None;
            }

            let is_file = if entry.file_type().is_file() {
                true
            } else if entry.path_is_symlink() && follow_symlinks {
                // Dangling links fail metadata and count as "not a file".
                std::fs::metadata(entry.path()).is_ok_and(|m| m.is_file())
            } else {
                false
            };

            let path = entry.into_path();
            if is_file {
                Some(WalkEvent::File(path))
            } else {
                log::debug!("Skipping non-file entry: {}", path.display());
                Some(WalkEvent::NotAFile(path))
            }
        }))
    }
}

/// Case-sensitive, byte-exact prefix test on an OS file name.
#[must_use]
pub fn matches_prefix(name: &OsStr, prefix: &str) -> bool {
    name.as_encoded_bytes().starts_with(prefix.as_bytes())
}

fn map_io_error(path: &Path, error: std::io::Error) -> ScanError {
    match error.kind() {
        ErrorKind::PermissionDenied => {
            log::warn!("Permission denied: {}", path.display());
            ScanError::PermissionDenied(path.to_path_buf())
        }
        ErrorKind::NotFound => ScanError::NotFound(path.to_path_buf()),
        _ => ScanError::Io {
            path: path.to_path_buf(),
            source: error,
        },
    }
}
