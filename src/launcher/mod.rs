mod child;
mod command;

use crate::error::LaunchError;
use crate::inputs::InputSet;
use crate::model::{LaunchConfig, LaunchRecord};
use crate::results;
use std::path::{Path, PathBuf};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

/// Name of the build directory under the launcher root.
pub const BUILD_DIR: &str = "build";

/// Everything needed to start the simulation, resolved and checked.
#[derive(Debug, Clone)]
pub struct LaunchPlan {
    pub executable: PathBuf,
    pub inputs: InputSet,
    pub results_dir: PathBuf,
    pub output_prefix: String,
    pub env: Vec<(String, String)>,
    pub command: String,
}

pub struct Launcher {
    cfg: LaunchConfig,
    inputs: InputSet,
}

impl Launcher {
    pub fn new(cfg: LaunchConfig) -> Self {
        let inputs = InputSet::from_input(&cfg.input);
        Self { cfg, inputs }
    }

    pub fn inputs(&self) -> &InputSet {
        &self.inputs
    }

    /// Check every precondition and assemble the command line.
    ///
    /// Touches nothing on disk: a failure here leaves no results directory behind.
    pub fn prepare(&self, now: OffsetDateTime) -> Result<LaunchPlan, LaunchError> {
        let cfg = &self.cfg;

        let build_dir = cfg.root_dir.join(BUILD_DIR);
        if !build_dir.is_dir() {
            return Err(LaunchError::BuildDirNotFound(build_dir));
        }

        let executable = cfg.platform.executable(&build_dir);
        if !executable.is_file() {
            return Err(LaunchError::ExecutableNotFound(executable));
        }

        let parameter_file = Path::new(&self.inputs.parameter_file);
        if !parameter_file.is_file() {
            return Err(LaunchError::ParameterFileNotFound(
                parameter_file.to_path_buf(),
            ));
        }
        let geometry_file = Path::new(&self.inputs.geometry_file);
        if !geometry_file.is_file() {
            return Err(LaunchError::GeometryFileNotFound(
                geometry_file.to_path_buf(),
            ));
        }

        let dir_name = results::results_dir_name(&self.inputs.test_name, now)?;
        let results_dir = cfg.results_root.join(&dir_name);
        results::ensure_absent(&results_dir)?;

        let output_prefix = command::output_prefix(cfg.platform, &dir_name);
        let command = command::build_command(&command::CommandParts {
            platform: cfg.platform,
            variant: cfg.variant,
            procs: cfg.procs,
            threads: cfg.threads,
            executable: &executable,
            parameter_file: &self.inputs.parameter_file,
            geometry_file: &self.inputs.geometry_file,
            output_prefix: &output_prefix,
        });
        let env = cfg.platform.thread_env(cfg.variant, cfg.threads);

        tracing::debug!(
            executable = %executable.display(),
            results_dir = %results_dir.display(),
            "preflight passed"
        );

        Ok(LaunchPlan {
            executable,
            inputs: self.inputs.clone(),
            results_dir,
            output_prefix,
            env,
            command,
        })
    }

    /// Create the results directory, then run the command and wait for it.
    ///
    /// The child's exit status is logged and recorded, never turned into an error.
    pub async fn launch(&self, plan: &LaunchPlan) -> Result<LaunchRecord, LaunchError> {
        println!("Creating {}", plan.results_dir.display());
        results::create_results_dir(&plan.results_dir)?;

        for (key, value) in &plan.env {
            tracing::info!("{key}={value}");
        }
        println!("{}", plan.command);
        tracing::debug!(output_prefix = %plan.output_prefix, "starting simulation");

        let started = now_rfc3339();
        let status = child::run_shell(self.cfg.platform, &plan.command, &plan.env).await?;
        let finished = now_rfc3339();

        if status.success() {
            tracing::info!("simulation finished");
        } else {
            tracing::warn!("simulation exited with {status}");
        }

        Ok(LaunchRecord {
            started_utc: started,
            finished_utc: finished,
            procs: self.cfg.procs,
            threads: self.cfg.threads,
            variant: self.cfg.variant,
            platform: self.cfg.platform,
            test_name: plan.inputs.test_name.clone(),
            parameter_file: plan.inputs.parameter_file.clone(),
            geometry_file: plan.inputs.geometry_file.clone(),
            executable: plan.executable.clone(),
            results_dir: plan.results_dir.clone(),
            command: plan.command.clone(),
            exit_code: status.code(),
        })
    }
}

fn now_rfc3339() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| "now".into())
}
