//! Build script for the Spotify playlist statistics CLI.
//!
//! Places the `.env.example` configuration template next to the `.env` file
//! that `spstats` reads at runtime, so a fresh install has a template to copy.

use std::{env, fs, path::PathBuf};

const TEMPLATE: &str = ".env.example";

/// Copies `.env.example` from the crate root into the local data directory.
///
/// Target locations:
/// - Linux: `~/.local/share/spstats/.env.example`
/// - macOS: `~/Library/Application Support/spstats/.env.example`
/// - Windows: `%LOCALAPPDATA%/spstats/.env.example`
///
/// A missing template only emits a cargo warning. Failing to create the
/// directory or write the file fails the build.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed={TEMPLATE}");

    let template = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?).join(TEMPLATE);
    if !template.is_file() {
        println!(
            "cargo:warning={TEMPLATE} not found at {}",
            template.display()
        );
        return Ok(());
    }

    let target_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("spstats");
    fs::create_dir_all(&target_dir)?;
    fs::copy(&template, target_dir.join(TEMPLATE))?;

    Ok(())
}
