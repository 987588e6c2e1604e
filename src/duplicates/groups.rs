//! Hash buckets and duplicate groups.
//!
//! # Overview
//!
//! Every hashed file is appended to the bucket keyed by its digest. Buckets
//! are created lazily on the first insertion of a digest and remember the
//! order in which digests were first seen, so the final groups come out in
//! first-insertion order and paths inside a group keep listing order.
//!
//! # Example
//!
//! ```
//! use prefixdupe::duplicates::HashBuckets;
//! use prefixdupe::scanner::FileEntry;
//! use std::path::PathBuf;
//!
//! let mut buckets = HashBuckets::new();
//! buckets.insert(FileEntry::new(PathBuf::from("output1.txt"), 3, [1u8; 32]));
//! buckets.insert(FileEntry::new(PathBuf::from("output2.txt"), 3, [1u8; 32]));
//! buckets.insert(FileEntry::new(PathBuf::from("output3.txt"), 3, [2u8; 32]));
//!
//! let groups = buckets.into_duplicate_groups();
//! assert_eq!(groups.len(), 1);
//! assert_eq!(groups[0].len(), 2);
//! ```

use serde::Serialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::scanner::{FileEntry, Hash};

/// Digest-keyed buckets of paths, in order of first insertion.
#[derive(Debug, Default)]
pub struct HashBuckets {
    index: HashMap<Hash, usize>,
    buckets: Vec<Bucket>,
}

#[derive(Debug)]
struct Bucket {
    hash: Hash,
    size: u64,
    paths: Vec<PathBuf>,
}

impl HashBuckets {
    /// Create an empty set of buckets.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a hashed file to the bucket for its digest.
    pub fn insert(&mut self, file: FileEntry) {
        match self.index.get(&file.hash) {
            Some(&slot) => self.buckets[slot].paths.push(file.path),
            None => {
                self.index.insert(file.hash, self.buckets.len());
                self.buckets.push(Bucket {
                    hash: file.hash,
                    size: file.size,
                    paths: vec![file.path],
                });
            }
        }
    }

    /// Number of distinct digests seen.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// True when nothing has been inserted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Keep buckets with two or more paths, in first-insertion order.
    #[must_use]
    pub fn into_duplicate_groups(self) -> Vec<DuplicateGroup> {
        self.buckets
            .into_iter()
            .filter(|bucket| {
                if bucket.paths.len() > 1 {
                    true
                } else {
                    log::trace!("Unique content: {}", bucket.paths[0].display());
                    false
                }
            })
            .map(|bucket| DuplicateGroup::new(bucket.hash, bucket.size, bucket.paths))
            .collect()
    }
}

/// Two or more files with the same content digest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateGroup {
    /// SHA-256 of the shared content
    #[serde(serialize_with = "serialize_hash")]
    pub hash: Hash,
    /// Content length in bytes (shared by all files in the group)
    pub size: u64,
    /// Member paths in listing order
    pub paths: Vec<PathBuf>,
}

fn serialize_hash<S: serde::Serializer>(hash: &Hash, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&crate::scanner::hash_to_hex(hash))
}

impl DuplicateGroup {
    /// Create a new duplicate group.
    #[must_use]
    pub fn new(hash: Hash, size: u64, paths: Vec<PathBuf>) -> Self {
        Self { hash, size, paths }
    }

    /// Number of files in this group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Check if this group is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Number of redundant copies (total - 1 original).
    #[must_use]
    pub fn duplicate_count(&self) -> usize {
        self.paths.len().saturating_sub(1)
    }

    /// Bytes freed by keeping a single copy.
    #[must_use]
    pub fn wasted_space(&self) -> u64 {
        self.size * self.duplicate_count() as u64
    }

    /// Hash as hexadecimal string.
    #[must_use]
    pub fn hash_hex(&self) -> String {
        crate::scanner::hash_to_hex(&self.hash)
    }

    /// Whether `path` is a member of this group.
    #[must_use]
    pub fn contains(&self, path: &Path) -> bool {
        self.paths.iter().any(|p| p == path)
    }
}
