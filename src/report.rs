// src/report.rs
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::Result;
use crate::runner::TestResults;

/// Writes a consistency-test result to `<dir>/<timestamp>-<run_id>.json`
/// and returns the path. The directory is created when missing.
pub fn save_test_results(dir: &Path, results: &TestResults) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;

    let timestamp = chrono::Utc::now().format("%Y%m%dT%H%M%SZ");
    let path = dir.join(format!("{}-{}.json", timestamp, results.run_id));

    let json = serde_json::to_string_pretty(results)?;
    fs::write(&path, json)?;

    log::info!("Saved test results to {}", path.display());

    Ok(path)
}
