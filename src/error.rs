use std::path::PathBuf;
use thiserror::Error;

/// Fatal launcher conditions. Each one stops the run before anything else happens.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("no input file given (expected a *_Geom.kzr or *_Para.kzr path)")]
    NoInput,

    #[error("{} not found!", .0.display())]
    BuildDirNotFound(PathBuf),

    #[error("{} not found!", .0.display())]
    ExecutableNotFound(PathBuf),

    #[error("parameter file {} not found!", .0.display())]
    ParameterFileNotFound(PathBuf),

    #[error("geometry file {} not found!", .0.display())]
    GeometryFileNotFound(PathBuf),

    #[error("{} already exists", .0.display())]
    ResultsDirExists(PathBuf),

    #[error("failed to create {}", .path.display())]
    CreateResultsDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to format results timestamp")]
    Timestamp(#[from] time::error::Format),

    #[error("interrupted, simulation killed")]
    Interrupted,

    #[error("failed to run `{command}`")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
}
