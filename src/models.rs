//! Data model for the Raspberry Pi Imager manifest
//!
//! Field declaration order matters: the Imager's JSON schema is mirrored by
//! serde's struct-field serialization order, so the emitted document keeps
//! the exact key layout the downstream consumer expects.

use serde::{Deserialize, Serialize};

/// Top-level manifest document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub imager: ImagerSection,
    pub os_list: Vec<OsListEntry>,
}

/// Static `imager` section describing the Imager itself and compatible devices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImagerSection {
    pub latest_version: String,
    pub url: String,
    pub devices: Vec<DeviceEntry>,
}

/// One compatible device family
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceEntry {
    pub name: String,
    pub tags: Vec<String>,
    /// Only the default device carries this key; omitted elsewhere
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<bool>,
    pub icon: String,
    pub description: String,
    pub matching_type: MatchingType,
}

/// Whether a device's tag set excludes or tolerates overlapping entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchingType {
    Exclusive,
    Inclusive,
}

/// One downloadable OS image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OsListEntry {
    pub name: String,
    pub description: String,
    pub website: String,
    pub icon: String,
    pub url: String,
    pub extract_size: u64,
    pub extract_sha256: String,
    pub image_download_size: u64,
    pub image_download_sha256: String,
    pub release_date: String,
    pub devices: Vec<String>,
    pub init_format: String,
}

/// Metadata derived from the release artifacts, computed once and never mutated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComputedMetadata {
    /// Uncompressed size of the image inside the zip, in bytes
    pub extract_size: u64,
    /// Digest of the extracted image, re-reported from the sidecar
    pub extract_sha256: String,
    /// Size of the zip on disk, in bytes
    pub download_size: u64,
    /// Digest of the zip itself
    pub download_sha256: String,
}

/// The fixed set of Raspberry Pi families a MonsterPi image supports
pub fn device_catalog() -> Vec<DeviceEntry> {
    vec![
        DeviceEntry {
            name: "Raspberry Pi 5".to_string(),
            tags: vec!["pi5-64bit".to_string()],
            default: Some(true),
            icon: "https://downloads.raspberrypi.com/imager/icons/RPi_5.png".to_string(),
            description: "Raspberry Pi 5, 500 / 500+, and Compute Module 5".to_string(),
            matching_type: MatchingType::Exclusive,
        },
        DeviceEntry {
            name: "Raspberry Pi 4".to_string(),
            tags: vec!["pi4-64bit".to_string()],
            default: None,
            icon: "https://downloads.raspberrypi.com/imager/icons/RPi_4.png".to_string(),
            description: "Raspberry Pi 4 Model B, 400, and Compute Module 4 / 4S".to_string(),
            matching_type: MatchingType::Inclusive,
        },
        DeviceEntry {
            name: "Raspberry Pi 3".to_string(),
            tags: vec!["pi3-64bit".to_string()],
            default: None,
            icon: "https://downloads.raspberrypi.com/imager/icons/RPi_3.png".to_string(),
            description: "Raspberry Pi 3 Model A+ / B / B+ and Compute Module 3 / 3+".to_string(),
            matching_type: MatchingType::Inclusive,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_catalog_has_three_families() {
        let devices = device_catalog();
        assert_eq!(devices.len(), 3);
        assert_eq!(devices[0].name, "Raspberry Pi 5");
        assert_eq!(devices[1].name, "Raspberry Pi 4");
        assert_eq!(devices[2].name, "Raspberry Pi 3");
    }

    #[test]
    fn test_device_catalog_only_pi5_is_default() {
        let devices = device_catalog();
        assert_eq!(devices[0].default, Some(true));
        assert_eq!(devices[1].default, None);
        assert_eq!(devices[2].default, None);
    }

    #[test]
    fn test_device_catalog_tags() {
        let devices = device_catalog();
        let tags: Vec<String> = devices.iter().flat_map(|d| d.tags.clone()).collect();
        assert_eq!(tags, vec!["pi5-64bit", "pi4-64bit", "pi3-64bit"]);
    }

    #[test]
    fn test_matching_type_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&MatchingType::Exclusive).unwrap(),
            "\"exclusive\""
        );
        assert_eq!(
            serde_json::to_string(&MatchingType::Inclusive).unwrap(),
            "\"inclusive\""
        );
    }

    #[test]
    fn test_default_key_omitted_when_none() {
        let devices = device_catalog();
        let pi5 = serde_json::to_string(&devices[0]).unwrap();
        let pi4 = serde_json::to_string(&devices[1]).unwrap();

        assert!(pi5.contains("\"default\":true"));
        assert!(!pi4.contains("default"));
    }

    #[test]
    fn test_device_entry_key_order_matches_schema() {
        let json = serde_json::to_string(&device_catalog()[0]).unwrap();
        let positions: Vec<usize> = ["name", "tags", "default", "icon", "description", "matching_type"]
            .iter()
            .map(|key| json.find(&format!("\"{key}\"")).unwrap())
            .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_device_entry_round_trips() {
        let devices = device_catalog();
        let json = serde_json::to_string(&devices).unwrap();
        let back: Vec<DeviceEntry> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, devices);
    }
}
