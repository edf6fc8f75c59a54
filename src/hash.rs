//! BLAKE3 hashing utilities for install verification

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use blake3::Hasher;

use crate::error::{Result, fs};

/// Hash prefix for BLAKE3 hashes
pub const HASH_PREFIX: &str = "blake3:";

/// Calculate BLAKE3 hash of a file
pub fn hash_file(path: &Path) -> Result<String> {
    let file = File::open(path).map_err(|e| fs::read_failed(path, e))?;

    let mut reader = BufReader::new(file);
    let mut hasher = Hasher::new();
    let mut buffer = [0u8; 8192];

    loop {
        let bytes_read = reader
            .read(&mut buffer)
            .map_err(|e| fs::read_failed(path, e))?;

        if bytes_read == 0 {
            break;
        }

        hasher.update(&buffer[..bytes_read]);
    }

    Ok(format!("{}{}", HASH_PREFIX, hasher.finalize().to_hex()))
}

/// Fail unless `copy` has the same content hash as `original`
pub fn verify_copy(original: &Path, copy: &Path) -> Result<()> {
    let expected = hash_file(original)?;
    let actual = hash_file(copy)?;

    if expected != actual {
        return Err(fs::checksum_mismatch(copy, expected, actual));
    }

    tracing::debug!(path = %copy.display(), hash = %actual, "checksum verified");
    Ok(())
}
