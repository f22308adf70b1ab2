use crate::error::LaunchError;
use crate::launcher::Launcher;
use crate::model::{LaunchConfig, Variant};
use crate::platform::Platform;
use crate::results::{self, DEFAULT_RESULTS_ROOT};
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser, Clone)]
#[command(
    name = "sph-launch",
    version,
    about = "Run the sph simulation under MPI with a fresh results directory"
)]
pub struct Cli {
    /// Number of MPI processes
    #[arg(short = 'n', default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub procs: u32,

    /// Number of threads per process (threaded variant only)
    #[arg(short = 'j', default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub threads: u32,

    /// Launcher variant: plain `-np`, or process/thread placement with OMP_NUM_THREADS
    #[arg(long, value_enum, default_value_t = Variant::Threaded)]
    pub variant: Variant,

    /// Directory containing `build/` (defaults to the launcher's own directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Directory in which the per-run results directory is created
    #[arg(long, default_value = DEFAULT_RESULTS_ROOT)]
    pub results_root: PathBuf,

    /// Use --auto-save true or --auto-save false to override
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub auto_save: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Test files (*_Geom.kzr or *_Para.kzr); only the first one is used
    pub files: Vec<String>,
}

/// Directory the launcher binary lives in.
fn default_root() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("locate launcher executable")?;
    exe.parent()
        .map(PathBuf::from)
        .context("launcher executable has no parent directory")
}

/// Build a `LaunchConfig` from CLI arguments.
pub fn build_config(args: &Cli) -> Result<LaunchConfig> {
    let input = args.files.first().cloned().ok_or(LaunchError::NoInput)?;
    if args.files.len() > 1 {
        tracing::warn!(
            ignored = args.files.len() - 1,
            "only the first input file is used"
        );
    }
    let root_dir = match args.root.clone() {
        Some(root) => root,
        None => default_root()?,
    };
    Ok(LaunchConfig {
        procs: args.procs,
        threads: args.threads,
        variant: args.variant,
        platform: Platform::host(),
        root_dir,
        results_root: args.results_root.clone(),
        input,
        auto_save: args.auto_save,
    })
}

pub async fn run(args: Cli) -> Result<()> {
    let cfg = build_config(&args)?;
    if !cfg.variant.uses_threads() && args.threads != 1 {
        tracing::warn!("-j is ignored by the basic variant");
    }
    tracing::debug!(?cfg, "resolved configuration");
    let auto_save = cfg.auto_save;

    let launcher = Launcher::new(cfg);
    let inputs = launcher.inputs();
    println!("geofile= {}", inputs.geometry_file);
    println!("parfile= {}", inputs.parameter_file);
    println!("testname= {}", inputs.test_name);

    let plan = launcher
        .prepare(results::local_now())
        .context("cannot launch simulation")?;
    let record = launcher.launch(&plan).await?;

    if auto_save {
        match crate::storage::save_record(&plan.results_dir, &record) {
            Ok(p) => tracing::info!("Saved: {}", p.display()),
            Err(e) => tracing::warn!("failed to save launch record: {e:#}"),
        }
    }
    Ok(())
}
