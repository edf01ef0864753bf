//! Shared fixtures for the CLI integration tests

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use zip::write::SimpleFileOptions;
use zip::CompressionMethod;

/// Write a zip archive at `dir/name` containing the given entries
pub fn make_zip(dir: &Path, name: &str, entries: &[(&str, &[u8])]) -> PathBuf {
    let path = dir.join(name);
    let file = File::create(&path).unwrap();
    let mut writer = zip::ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
    for (entry_name, contents) in entries {
        writer.start_file(*entry_name, options).unwrap();
        writer.write_all(contents).unwrap();
    }
    writer.finish().unwrap();
    path
}

/// Write a `sha256sum`-style sidecar at `dir/name`
pub fn make_sidecar(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    let mut file = File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

/// Run the monsterpi-manifest binary with the given arguments
pub fn run_tool(args: &[&str]) -> Output {
    let bin = env!("CARGO_BIN_EXE_monsterpi-manifest");
    Command::new(bin).args(args).output().unwrap()
}
