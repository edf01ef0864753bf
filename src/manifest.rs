//! Manifest assembly and output
//!
//! `build_manifest` is pure: everything it needs, including the release date,
//! arrives as a parameter, so two builds over the same inputs yield identical
//! documents. All I/O stays in `read_sidecar_digest` and `write_manifest`.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;

use crate::error::{ManifestError, ManifestResult};
use crate::models::{ComputedMetadata, DeviceEntry, ImagerSection, Manifest, OsListEntry};

const IMAGER_LATEST_VERSION: &str = "2.0.0";
const IMAGER_URL: &str = "https://www.raspberrypi.com/software/";
const OS_WEBSITE: &str = "https://fdm-monster.net";
const OS_ICON: &str = "https://raw.githubusercontent.com/fdm-monster/fdm-monster/ba18cb7049a137939f9d2845d4d32507c9dbba08/docs/images/logo-copyright.png";
const INIT_FORMAT: &str = "systemd";

/// Extract the digest token from a `sha256sum`-style sidecar file
///
/// The sidecar's first whitespace-delimited token is the digest; the rest
/// (typically the image filename) is ignored. The digest is re-reported as-is,
/// not verified against the archive contents.
pub fn read_sidecar_digest(path: &Path) -> ManifestResult<String> {
    let text = fs::read_to_string(path)?;
    text.split_whitespace()
        .next()
        .map(str::to_owned)
        .ok_or_else(|| ManifestError::MalformedChecksumFile {
            path: path.to_path_buf(),
        })
}

/// Assemble the manifest from computed metadata and caller-supplied fields
pub fn build_manifest(
    meta: &ComputedMetadata,
    dist_version: &str,
    image_url: &str,
    devices: Vec<DeviceEntry>,
    release_date: NaiveDate,
) -> Manifest {
    let device_tags = devices.iter().flat_map(|d| d.tags.clone()).collect();

    Manifest {
        imager: ImagerSection {
            latest_version: IMAGER_LATEST_VERSION.to_string(),
            url: IMAGER_URL.to_string(),
            devices,
        },
        os_list: vec![OsListEntry {
            name: format!("MonsterPi {dist_version} (Trixie)"),
            description: format!("FDM Monster RaspberryPi distro ({dist_version})"),
            website: OS_WEBSITE.to_string(),
            icon: OS_ICON.to_string(),
            url: image_url.to_string(),
            extract_size: meta.extract_size,
            extract_sha256: meta.extract_sha256.clone(),
            image_download_size: meta.download_size,
            image_download_sha256: meta.download_sha256.clone(),
            release_date: release_date.format("%Y-%m-%d").to_string(),
            devices: device_tags,
            init_format: INIT_FORMAT.to_string(),
        }],
    }
}

/// Serialize the manifest as indented JSON, overwriting `output`
///
/// Serialization happens before the file is created, so a failure never
/// leaves a partial manifest behind.
pub fn write_manifest(manifest: &Manifest, output: &Path) -> ManifestResult<()> {
    let json = serde_json::to_string_pretty(manifest)?;
    fs::write(output, json)?;
    Ok(())
}
