//! Loads test vectors from JSON files.

use super::error::Result;
use super::model::TestSuite;
use std::fs;
use std::path::{Path, PathBuf};

fn vector_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("src")
        .join("vectors")
}

/// Parse a suite from a JSON file
pub fn load_suite(path: &Path) -> Result<TestSuite> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// The bundled Ed25519 vectors
pub fn load_ed25519() -> Result<TestSuite> {
    load_suite(&vector_dir().join("ed25519.json"))
}
