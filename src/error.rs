use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Result alias used across the crate
pub type LaunchResult<T> = Result<T, LaunchError>;

/// Errors produced while preparing or starting a launch
#[derive(Error, Debug)]
pub enum LaunchError {
    /// Spawning or waiting on a process failed
    #[error("io error")]
    Io(#[from] std::io::Error),

    /// The launcher was executed before all required fields were set
    #[error("configuration error {0}")]
    ConfigurationError(String),

    /// The setup script exited non-zero, so the launch was not started
    #[error("setup script {0:?} exited with {1}")]
    SetupFailed(PathBuf, ExitStatus),

    /// A directory could not be joined into a search-path value
    #[error("search path rejected {0:?}: {1}")]
    SearchPath(OsString, std::env::JoinPathsError),
}
