use crate::model::LaunchRecord;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub const RECORD_FILE_NAME: &str = "launch.json";

/// Write the launch manifest into the run's results directory.
pub fn save_record(results_dir: &Path, record: &LaunchRecord) -> Result<PathBuf> {
    let path = results_dir.join(RECORD_FILE_NAME);
    export_json(&path, record)?;
    Ok(path)
}

pub fn export_json(path: &Path, record: &LaunchRecord) -> Result<()> {
    let data = serde_json::to_vec_pretty(record).context("serialize launch record")?;
    std::fs::write(path, data).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
