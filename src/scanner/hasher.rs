//! SHA-256 content hasher.
//!
//! # Overview
//!
//! Each qualifying file is read once, in full, and digested with SHA-256.
//! The file handle is scoped to [`std::fs::read`], so it is released on both
//! the success and the error path before the next file is opened.
//!
//! # Example
//!
//! ```
//! use prefixdupe::scanner::{hash_to_hex, Hasher, EMPTY_DIGEST};
//!
//! let hasher = Hasher::new();
//! assert_eq!(hasher.hash_bytes(b""), EMPTY_DIGEST);
//! assert_eq!(hash_to_hex(&EMPTY_DIGEST).len(), 64);
//! ```

use std::path::Path;

use sha2::{Digest, Sha256};

use super::HashError;

/// A 256-bit content digest.
pub type Hash = [u8; 32];

/// SHA-256 of zero bytes. Every empty file hashes to this value.
pub const EMPTY_DIGEST: Hash = [
    0xe3, 0xb0, 0xc4, 0x42, 0x98, 0xfc, 0x1c, 0x14, 0x9a, 0xfb, 0xf4, 0xc8, 0x99, 0x6f, 0xb9, 0x24,
    0x27, 0xae, 0x41, 0xe4, 0x64, 0x9b, 0x93, 0x4c, 0xa4, 0x95, 0x99, 0x1b, 0x78, 0x52, 0xb8, 0x55,
];

/// Whole-file SHA-256 hasher.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hasher;

impl Hasher {
    /// Create a new hasher.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Digest an in-memory buffer.
    #[must_use]
    pub fn hash_bytes(&self, content: &[u8]) -> Hash {
        Sha256::digest(content).into()
    }

    /// Read the whole file at `path` and return its digest and size.
    ///
    /// # Errors
    ///
    /// Returns a [`HashError`] naming the path when the file cannot be
    /// opened or read.
    pub fn full_hash(&self, path: &Path) -> Result<(Hash, u64), HashError> {
        let content = std::fs::read(path).map_err(|e| HashError::from_io(path, e))?;
        let digest = self.hash_bytes(&content);
        log::trace!(
            "Hashed {} ({} bytes): {}",
            path.display(),
            content.len(),
            hash_to_hex(&digest)
        );
        Ok((digest, content.len() as u64))
    }
}

/// Render a digest as 64 lowercase hex characters.
#[must_use]
pub fn hash_to_hex(hash: &Hash) -> String {
    hash.iter().map(|b| format!("{b:02x}")).collect()
}
