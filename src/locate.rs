//! Input locator
//!
//! Resolves the zip archive and checksum sidecar either from explicit paths
//! or by scanning a workspace directory. A scan looks one level deep for file
//! names ending in `.zip` / `.sha256`; when several candidates match, the
//! lexicographically first name wins so repeated runs pick the same file
//! regardless of directory listing order.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ManifestError, ManifestResult};

/// How the caller identified the input artifacts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Both artifact paths given on the command line
    Explicit {
        zip_path: PathBuf,
        sha256_path: PathBuf,
    },
    /// Directory to search for the artifacts
    Workspace(PathBuf),
}

/// Resolved, existing input artifacts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedInputs {
    pub zip_path: PathBuf,
    pub sha256_path: PathBuf,
}

impl InputSource {
    /// Resolve to concrete paths, verifying existence
    pub fn resolve(&self) -> ManifestResult<LocatedInputs> {
        match self {
            Self::Explicit {
                zip_path,
                sha256_path,
            } => {
                require_exists(zip_path)?;
                require_exists(sha256_path)?;
                Ok(LocatedInputs {
                    zip_path: zip_path.clone(),
                    sha256_path: sha256_path.clone(),
                })
            }
            Self::Workspace(dir) => Ok(LocatedInputs {
                zip_path: find_by_suffix(dir, ".zip")?,
                sha256_path: find_by_suffix(dir, ".sha256")?,
            }),
        }
    }
}

fn require_exists(path: &Path) -> ManifestResult<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(ManifestError::MissingInputFile {
            path: path.to_path_buf(),
        })
    }
}

/// First file (by sorted name) in `dir` whose name ends with `suffix`
fn find_by_suffix(dir: &Path, suffix: &'static str) -> ManifestResult<PathBuf> {
    let mut candidates: Vec<String> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_file())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| name.ends_with(suffix))
        .collect();
    candidates.sort();

    candidates
        .into_iter()
        .next()
        .map(|name| dir.join(name))
        .ok_or(ManifestError::MissingWorkspaceMatch {
            suffix,
            dir: dir.to_path_buf(),
        })
}
