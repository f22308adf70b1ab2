//! Per-platform launch table.
//!
//! Everything that differs between Windows and other hosts lives here: where the
//! simulation binary sits inside the build directory, which MPI launcher is used
//! and how, the path separator in the output prefix, and the shell that runs the
//! final command line.

use crate::model::Variant;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::process::Command;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Windows,
    Unix,
}

impl Platform {
    /// The platform this binary was compiled for.
    pub fn host() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }

    /// Location of the simulation executable inside `build_dir`.
    pub fn executable(self, build_dir: &Path) -> PathBuf {
        match self {
            Platform::Windows => build_dir.join("Release").join("sph.exe"),
            Platform::Unix => build_dir.join("sph"),
        }
    }

    pub fn separator(self) -> char {
        match self {
            Platform::Windows => '\\',
            Platform::Unix => '/',
        }
    }

    /// MPI launcher prefix for `procs` processes of `threads` threads each.
    pub fn mpi_prefix(self, variant: Variant, procs: u32, threads: u32) -> String {
        match (self, variant) {
            (Platform::Windows, _) => format!("mpiexec -n {procs}"),
            (Platform::Unix, Variant::Basic) => format!("mpirun -np {procs}"),
            (Platform::Unix, Variant::Threaded) => format!(
                "mpirun -np {procs} -map-by node:PE={threads}:OVERSUBSCRIBE --bind-to core:overload-allowed"
            ),
        }
    }

    /// Environment handed to the child on top of the inherited one.
    pub fn thread_env(self, variant: Variant, threads: u32) -> Vec<(String, String)> {
        match self {
            Platform::Unix if variant.uses_threads() => {
                vec![("OMP_NUM_THREADS".to_string(), threads.to_string())]
            }
            _ => Vec::new(),
        }
    }

    /// A command that runs `command_line` through the system shell.
    pub fn shell_command(self, command_line: &str) -> Command {
        let mut command = match self {
            Platform::Windows => {
                let mut c = Command::new("cmd");
                c.arg("/C");
                c
            }
            Platform::Unix => {
                let mut c = Command::new("sh");
                c.arg("-c");
                c
            }
        };
        command.arg(command_line);
        command
    }
}
