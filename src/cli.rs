//! Command-line interface for monsterpi-manifest
//!
//! Two equivalent invocation modes:
//! - explicit: `--zip-path` + `--sha256-path` name the artifacts directly
//! - scan: `--workspace` names a directory searched for `*.zip` / `*.sha256`

use std::path::PathBuf;

use clap::Parser;

use crate::locate::InputSource;

/// Generate the Raspberry Pi Imager os_list JSON for a MonsterPi release
#[derive(Parser, Debug)]
#[command(name = "monsterpi-manifest")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the release zip archive
    #[arg(long, requires = "sha256_path", conflicts_with = "workspace")]
    pub zip_path: Option<PathBuf>,

    /// Path to the .sha256 checksum sidecar for the image inside the zip
    #[arg(long, requires = "zip_path", conflicts_with = "workspace")]
    pub sha256_path: Option<PathBuf>,

    /// Directory to scan for the zip archive and checksum sidecar
    #[arg(long, required_unless_present = "zip_path")]
    pub workspace: Option<PathBuf>,

    /// Public URL the uploaded image will be downloaded from
    #[arg(long)]
    pub image_url: String,

    /// Distribution version (e.g. "1.2.3")
    #[arg(long)]
    pub dist_version: String,

    /// Output JSON file path
    #[arg(long)]
    pub output: PathBuf,
}

impl Cli {
    /// Which input-location mode the arguments select
    pub fn input_source(&self) -> InputSource {
        match (&self.zip_path, &self.sha256_path, &self.workspace) {
            (Some(zip), Some(sha256), _) => InputSource::Explicit {
                zip_path: zip.clone(),
                sha256_path: sha256.clone(),
            },
            _ => InputSource::Workspace(
                self.workspace.clone().unwrap_or_else(|| PathBuf::from(".")),
            ),
        }
    }
}
