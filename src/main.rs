//! monsterpi-manifest CLI
//!
//! Locates the release zip and checksum sidecar, computes sizes and digests,
//! and writes the Raspberry Pi Imager os_list JSON. Any failure exits with a
//! non-zero status and a one-line message; no partial manifest is written.

use std::fs;

use anyhow::Result;
use chrono::Local;
use clap::Parser;

use monsterpi_manifest::{
    archive, build_manifest, device_catalog, digest, read_sidecar_digest, write_manifest, Cli,
    ComputedMetadata,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let inputs = cli.input_source().resolve()?;

    let extract_sha256 = read_sidecar_digest(&inputs.sha256_path)?;
    let extract_size = archive::first_entry_size(&inputs.zip_path)?;
    let download_size = fs::metadata(&inputs.zip_path)?.len();
    let download_sha256 = digest::sha256_file(&inputs.zip_path)?;

    let meta = ComputedMetadata {
        extract_size,
        extract_sha256,
        download_size,
        download_sha256,
    };

    let release_date = Local::now().date_naive();
    let manifest = build_manifest(
        &meta,
        &cli.dist_version,
        &cli.image_url,
        device_catalog(),
        release_date,
    );

    write_manifest(&manifest, &cli.output)?;

    let os = &manifest.os_list[0];
    println!("Generated Raspberry Pi Imager JSON: {}", cli.output.display());
    println!("  Name: {}", os.name);
    println!("  URL: {}", os.url);
    println!("  Extract size: {} bytes", os.extract_size);
    println!("  Download size: {} bytes", os.image_download_size);
    println!("  Release date: {}", os.release_date);

    Ok(())
}
