//! Duplicate finder: list, filter, hash, group.
//!
//! # Overview
//!
//! The finder runs a single linear pass over one directory:
//! 1. **List** - direct entries of the folder whose name starts with the prefix
//! 2. **Hash** - read each regular file in full and digest it with SHA-256
//! 3. **Group** - bucket paths by digest and keep buckets with 2+ members
//!
//! A file that cannot be read is reported and left out; the pass continues.
//! A folder that is not an accessible directory is reported once and yields
//! no groups ([`DuplicateFinder::find_duplicates`]), or is returned as an
//! error by the strict entry point ([`DuplicateFinder::scan`]).
//!
//! # Example
//!
//! ```no_run
//! use prefixdupe::duplicates::{DuplicateFinder, FinderConfig};
//! use std::path::Path;
//!
//! let finder = DuplicateFinder::new(FinderConfig::new("output"));
//! let (groups, summary) = finder.find_duplicates(Path::new("."));
//!
//! for group in &groups {
//!     println!("{} files share {}", group.len(), group.hash_hex());
//! }
//! println!("{} read errors", summary.read_errors.len());
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::progress::{LogReporter, ScanReporter};
use crate::scanner::{FileEntry, HashError, Hasher, ScanError, WalkEvent, Walker, WalkerConfig};

use super::{DuplicateGroup, HashBuckets};

/// Default name prefix.
pub const DEFAULT_PREFIX: &str = "output";

/// Configuration for the duplicate finder.
#[derive(Clone)]
pub struct FinderConfig {
    /// Listing options, including the name prefix.
    pub walker_config: WalkerConfig,
    /// Receiver of scan events. Defaults to [`LogReporter`].
    pub reporter: Arc<dyn ScanReporter>,
}

impl std::fmt::Debug for FinderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FinderConfig")
            .field("walker_config", &self.walker_config)
            .field("reporter", &"<reporter>")
            .finish()
    }
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX)
    }
}

impl FinderConfig {
    /// Create a configuration matching `prefix`.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            walker_config: WalkerConfig::new(prefix),
            reporter: Arc::new(LogReporter),
        }
    }

    /// Set the event reporter.
    #[must_use]
    pub fn with_reporter(mut self, reporter: Arc<dyn ScanReporter>) -> Self {
        self.reporter = reporter;
        self
    }

    /// List entries sorted by file name.
    #[must_use]
    pub fn with_sort_entries(mut self, sort: bool) -> Self {
        self.walker_config.sort_entries = sort;
        self
    }

    /// Treat symlinks to regular files as files.
    #[must_use]
    pub fn with_follow_symlinks(mut self, follow: bool) -> Self {
        self.walker_config.follow_symlinks = follow;
        self
    }

    /// The configured name prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.walker_config.prefix
    }
}

/// Statistics and diagnostics from one scan.
#[derive(Debug, Default)]
pub struct ScanSummary {
    /// Folder as given by the caller
    pub folder: PathBuf,
    /// Prefix that was matched
    pub prefix: String,
    /// Entries whose name matched the prefix (files or not)
    pub entries_examined: usize,
    /// Matching entries that were not regular files
    pub non_files_skipped: usize,
    /// Files read and hashed successfully
    pub files_hashed: usize,
    /// Total bytes hashed
    pub bytes_hashed: u64,
    /// Files that could not be read
    pub read_errors: Vec<HashError>,
    /// Listing failures for individual entries
    pub entry_errors: Vec<ScanError>,
    /// Whether the folder was not an accessible directory
    pub invalid_directory: bool,
    /// Number of duplicate groups
    pub duplicate_groups: usize,
    /// Files in duplicate groups beyond the first of each
    pub duplicate_files: usize,
    /// Bytes that keeping one copy per group would free
    pub reclaimable_space: u64,
    /// Wall-clock duration of the scan
    pub scan_duration: Duration,
}

impl ScanSummary {
    /// True when some files or entries were skipped because of errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.read_errors.is_empty() || !self.entry_errors.is_empty()
    }

    fn record_groups(&mut self, groups: &[DuplicateGroup]) {
        self.duplicate_groups = groups.len();
        self.duplicate_files = groups.iter().map(DuplicateGroup::duplicate_count).sum();
        self.reclaimable_space = groups.iter().map(DuplicateGroup::wasted_space).sum();
    }
}

/// Finds groups of prefix-matching files with identical content.
#[derive(Debug, Clone)]
pub struct DuplicateFinder {
    config: FinderConfig,
    hasher: Hasher,
}

impl DuplicateFinder {
    /// Create a finder with the given configuration.
    #[must_use]
    pub fn new(config: FinderConfig) -> Self {
        Self {
            config,
            hasher: Hasher::new(),
        }
    }

    /// Create a finder with default configuration (prefix `output`).
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(FinderConfig::default())
    }

    /// The finder's configuration.
    #[must_use]
    pub fn config(&self) -> &FinderConfig {
        &self.config
    }

    /// Scan `folder`, soft-failing on an invalid directory.
    ///
    /// An invalid folder is reported through the reporter and produces no
    /// groups with [`ScanSummary::invalid_directory`] set. Unreadable files
    /// are reported and skipped. This never returns an error.
    #[must_use]
    pub fn find_duplicates(&self, folder: &Path) -> (Vec<DuplicateGroup>, ScanSummary) {
        let start = Instant::now();
        match self.scan(folder) {
            Ok(result) => result,
            Err(err) => {
                self.config.reporter.on_invalid_directory(&err);
                let summary = ScanSummary {
                    folder: folder.to_path_buf(),
                    prefix: self.config.prefix().to_string(),
                    invalid_directory: true,
                    scan_duration: start.elapsed(),
                    ..Default::default()
                };
                (Vec::new(), summary)
            }
        }
    }

    /// Scan `folder`, returning an invalid directory as an error.
    ///
    /// # Errors
    ///
    /// Returns a [`ScanError`] when `folder` does not exist, is not a
    /// directory, or cannot be listed. Per-file failures are not errors;
    /// they are collected in the summary.
    pub fn scan(&self, folder: &Path) -> Result<(Vec<DuplicateGroup>, ScanSummary), ScanError> {
        let start = Instant::now();
        let reporter = &self.config.reporter;
        reporter.on_scan_start(folder, self.config.prefix());

        let walker = Walker::new(folder, self.config.walker_config.clone());
        let events = walker.walk()?;

        log::info!("Starting duplicate scan of {}", folder.display());

        let mut summary = ScanSummary {
            folder: folder.to_path_buf(),
            prefix: self.config.prefix().to_string(),
            ..Default::default()
        };
        let mut buckets = HashBuckets::new();

        for event in events {
            match event {
                WalkEvent::File(path) => {
                    summary.entries_examined += 1;
                    reporter.on_entry(&path);
                    self.hash_into(path, &mut buckets, &mut summary);
                }
                WalkEvent::NotAFile(path) => {
                    summary.entries_examined += 1;
                    summary.non_files_skipped += 1;
                    reporter.on_entry(&path);
                }
                WalkEvent::Error(err) => {
                    reporter.on_entry_error(&err);
                    summary.entry_errors.push(err);
                }
            }
        }

        let groups = buckets.into_duplicate_groups();
        summary.record_groups(&groups);
        summary.scan_duration = start.elapsed();

        log::info!(
            "Scan complete: {} files hashed, {} duplicate groups, {} read errors",
            summary.files_hashed,
            summary.duplicate_groups,
            summary.read_errors.len()
        );

        Ok((groups, summary))
    }

    /// Hash and group an explicit list of files, skipping the listing.
    ///
    /// No prefix or file-type filtering is applied. Unreadable paths are
    /// reported and collected in the summary.
    #[must_use]
    pub fn find_duplicates_from_paths(
        &self,
        paths: impl IntoIterator<Item = PathBuf>,
    ) -> (Vec<DuplicateGroup>, ScanSummary) {
        let start = Instant::now();
        let mut summary = ScanSummary {
            prefix: self.config.prefix().to_string(),
            ..Default::default()
        };
        let mut buckets = HashBuckets::new();

        for path in paths {
            summary.entries_examined += 1;
            self.config.reporter.on_entry(&path);
            self.hash_into(path, &mut buckets, &mut summary);
        }

        let groups = buckets.into_duplicate_groups();
        summary.record_groups(&groups);
        summary.scan_duration = start.elapsed();
        (groups, summary)
    }

    fn hash_into(&self, path: PathBuf, buckets: &mut HashBuckets, summary: &mut ScanSummary) {
        match self.hasher.full_hash(&path) {
            Ok((hash, size)) => {
                let file = FileEntry::new(path, size, hash);
                log::debug!("Hashed {} ({} bytes)", file.path.display(), size);
                self.config.reporter.on_file_hashed(&file);
                summary.files_hashed += 1;
                summary.bytes_hashed += size;
                buckets.insert(file);
            }
            Err(err) => {
                log::warn!("Failed to read {}: {}", err.path().display(), err);
                self.config.reporter.on_read_error(&err);
                summary.read_errors.push(err);
            }
        }
    }
}

/// Find groups of files in `folder_path` whose names start with `prefix`
/// and whose contents are identical.
///
/// Invalid folders are logged and yield an empty result. Each inner vector
/// holds the paths of one group in listing order.
///
/// # Example
///
/// ```no_run
/// use prefixdupe::duplicates::find_duplicates;
/// use std::path::Path;
///
/// for group in find_duplicates(Path::new("."), "output") {
///     println!("{:?}", group);
/// }
/// ```
#[must_use]
pub fn find_duplicates(folder_path: &Path, prefix: &str) -> Vec<Vec<PathBuf>> {
    let (groups, _) = DuplicateFinder::new(FinderConfig::new(prefix)).find_duplicates(folder_path);
    groups.into_iter().map(|g| g.paths).collect()
}
