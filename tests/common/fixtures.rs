//! Test dataset creation

use super::constants::*;
use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Writes `header` followed by `rows` into a CSV file inside a fresh
/// temporary directory.
/// Returns (temp_dir, dataset_path)
pub fn write_dataset(header: &str, rows: &[&str]) -> Result<(TempDir, PathBuf)> {
    let dir = TempDir::new()?;
    let path = dir.path().join("songs.csv");

    let mut content = String::from(header);
    content.push('\n');
    for row in rows {
        content.push_str(row);
        content.push('\n');
    }
    fs::write(&path, content)?;

    Ok((dir, path))
}

/// Writes the shared test dataset, see `DATASET_ROWS`.
pub fn write_test_dataset() -> Result<(TempDir, PathBuf)> {
    write_dataset(DATASET_HEADER, &DATASET_ROWS)
}
