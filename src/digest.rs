//! Streaming SHA-256 computation
//!
//! Reads the file in fixed-size chunks so memory stays flat no matter how
//! large the image archive is.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::error::ManifestResult;

const CHUNK_SIZE: usize = 64 * 1024;

/// SHA-256 of a file's contents as a lowercase hex string
pub fn sha256_file(path: &Path) -> ManifestResult<String> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    let mut buf = vec![0u8; CHUNK_SIZE];

    loop {
        let read = file.read(&mut buf)?;
        if read == 0 {
            break;
        }
        hasher.update(&buf[..read]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}
