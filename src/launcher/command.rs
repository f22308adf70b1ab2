use crate::model::Variant;
use crate::platform::Platform;
use std::path::Path;

/// File name prefix the simulation uses for its output, inside the results directory.
pub(crate) const OUTPUT_FILE_PREFIX: &str = "p";

/// Output prefix handed to the simulation, relative to the results root.
pub(crate) fn output_prefix(platform: Platform, results_dir_name: &str) -> String {
    format!(
        "{}{}{}",
        results_dir_name,
        platform.separator(),
        OUTPUT_FILE_PREFIX
    )
}

/// Everything that goes into the shell command line.
pub(crate) struct CommandParts<'a> {
    pub platform: Platform,
    pub variant: Variant,
    pub procs: u32,
    pub threads: u32,
    pub executable: &'a Path,
    pub parameter_file: &'a str,
    pub geometry_file: &'a str,
    pub output_prefix: &'a str,
}

/// `<mpi prefix> <exe> <parfile> <geofile> <output prefix>`, unquoted.
pub(crate) fn build_command(parts: &CommandParts<'_>) -> String {
    format!(
        "{} {} {} {} {}",
        parts
            .platform
            .mpi_prefix(parts.variant, parts.procs, parts.threads),
        parts.executable.display(),
        parts.parameter_file,
        parts.geometry_file,
        parts.output_prefix
    )
}
