use crate::platform::Platform;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Resolved run configuration, built once from the CLI.
#[derive(Debug, Clone)]
pub struct LaunchConfig {
    pub procs: u32,
    pub threads: u32,
    pub variant: Variant,
    pub platform: Platform,
    /// Directory expected to contain `build/`.
    pub root_dir: PathBuf,
    /// Parent of the per-run results directories.
    pub results_root: PathBuf,
    /// First positional file; any further files are ignored.
    pub input: String,
    pub auto_save: bool,
}

/// The two launcher flavours.
///
/// `Basic` runs plain `mpirun -np <N>`. `Threaded` also takes a thread count per
/// process, pins processes with `-map-by`/`--bind-to` and exports `OMP_NUM_THREADS`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Basic,
    Threaded,
}

impl Variant {
    pub fn uses_threads(self) -> bool {
        matches!(self, Variant::Threaded)
    }
}

/// Manifest written to `launch.json` in the results directory once the child exits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchRecord {
    pub started_utc: String,
    pub finished_utc: String,
    pub procs: u32,
    pub threads: u32,
    pub variant: Variant,
    pub platform: Platform,
    pub test_name: String,
    pub parameter_file: String,
    pub geometry_file: String,
    pub executable: PathBuf,
    pub results_dir: PathBuf,
    pub command: String,
    // Informational only; the launcher never fails on it.
    #[serde(default)]
    pub exit_code: Option<i32>,
}
