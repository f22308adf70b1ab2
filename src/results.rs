//! Results directory naming and creation.

use crate::error::LaunchError;
use std::path::Path;
use time::macros::format_description;
use time::OffsetDateTime;

/// Default parent of all results directories, relative to the working directory.
pub const DEFAULT_RESULTS_ROOT: &str = "Results";

/// Replace path separators so a nested test name becomes a single directory name.
pub fn sanitize_test_name(test_name: &str) -> String {
    test_name.replace(['/', '\\'], "_")
}

/// `<sanitized test name>-YYMMDD-HHMMSS`
pub fn results_dir_name(test_name: &str, at: OffsetDateTime) -> Result<String, LaunchError> {
    let stamp = at.format(format_description!(
        "[year repr:last_two][month][day]-[hour][minute][second]"
    ))?;
    Ok(format!("{}-{}", sanitize_test_name(test_name), stamp))
}

/// Local wall-clock time, falling back to UTC when the offset can't be determined.
pub fn local_now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|e| {
        tracing::debug!("local offset unavailable ({e}), using UTC");
        OffsetDateTime::now_utc()
    })
}

pub fn ensure_absent(dir: &Path) -> Result<(), LaunchError> {
    if dir.exists() {
        return Err(LaunchError::ResultsDirExists(dir.to_path_buf()));
    }
    Ok(())
}

/// Create `dir`, and its parent if needed. Fails if `dir` itself already exists.
pub fn create_results_dir(dir: &Path) -> Result<(), LaunchError> {
    let create_err = |source| LaunchError::CreateResultsDir {
        path: dir.to_path_buf(),
        source,
    };
    if let Some(parent) = dir.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(create_err)?;
    }
    match std::fs::create_dir(dir) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
            Err(LaunchError::ResultsDirExists(dir.to_path_buf()))
        }
        Err(e) => Err(create_err(e)),
    }
}
