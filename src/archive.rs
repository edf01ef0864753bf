//! Archive inspector
//!
//! Reads the zip central directory to learn the uncompressed size of the
//! image without extracting anything. MonsterPi release archives carry the
//! `.img` as their first (and only) entry, so only entry 0 is consulted.

use std::fs::File;
use std::path::Path;

use zip::ZipArchive;

use crate::error::{ManifestError, ManifestResult};

/// Declared uncompressed size in bytes of the archive's first entry
pub fn first_entry_size(path: &Path) -> ManifestResult<u64> {
    let file = File::open(path).map_err(|e| malformed(path, e.to_string()))?;
    let mut archive = ZipArchive::new(file).map_err(|e| malformed(path, e.to_string()))?;

    if archive.is_empty() {
        return Err(malformed(path, "archive contains no entries".to_string()));
    }

    let entry = archive
        .by_index(0)
        .map_err(|e| malformed(path, e.to_string()))?;
    Ok(entry.size())
}

fn malformed(path: &Path, reason: String) -> ManifestError {
    ManifestError::MalformedArchive {
        path: path.to_path_buf(),
        reason,
    }
}
