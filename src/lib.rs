//! monsterpi-manifest - Raspberry Pi Imager manifest generator for MonsterPi
//!
//! Takes the release artifacts produced by the image build (a `.zip` archive
//! and its `.sha256` sidecar), computes the derived metadata the Raspberry Pi
//! Imager needs (sizes, digests, release date), and writes the `os_list` JSON
//! document the Imager consumes.

pub mod archive;
pub mod cli;
pub mod digest;
pub mod error;
pub mod locate;
pub mod manifest;
pub mod models;

// Re-exports for convenience
pub use cli::Cli;
pub use error::{ManifestError, ManifestResult};
pub use locate::{InputSource, LocatedInputs};
pub use manifest::{build_manifest, read_sidecar_digest, write_manifest};
pub use models::{device_catalog, ComputedMetadata, DeviceEntry, Manifest, MatchingType};
