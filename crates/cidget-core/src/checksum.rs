//! Standalone checksum support (SHA-256), off the fetch path.
//!
//! Fetches never hash their payload; this exists so a user can checksum a
//! downloaded file on demand.

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

/// Compute SHA-256 of a file and return the digest as lowercase hex.
/// Streams the file, so memory use stays bounded for large downloads.
pub fn sha256_path(path: &Path) -> Result<String> {
    let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let mut reader = BufReader::new(file);
    let mut hasher = Sha256::new();
    io::copy(&mut reader, &mut hasher).with_context(|| format!("read {}", path.display()))?;
    Ok(hex::encode(hasher.finalize()))
}
