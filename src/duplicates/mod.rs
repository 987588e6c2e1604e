//! Duplicate detection module.
//!
//! This module provides functionality for:
//! - Digest-keyed, insertion-ordered buckets ([`groups`])
//! - The single-pass list/hash/group finder ([`finder`])

pub mod finder;
pub mod groups;

pub use finder::{find_duplicates, DuplicateFinder, FinderConfig, ScanSummary, DEFAULT_PREFIX};
pub use groups::{DuplicateGroup, HashBuckets};
