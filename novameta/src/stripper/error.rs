use std::{ffi::OsString, io, path::PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read the directory {0}: {1}")]
    CannotReadDir(PathBuf, #[source] io::Error),
}

/// Failure of a single entry. Recorded and logged, never fatal to the run.
#[derive(Error, Debug)]
pub enum RenameError {
    #[error("entry name {0:?} is not valid UTF-8")]
    InvalidName(OsString),

    #[error("{} would all be renamed to {target}", .sources.join(", "))]
    DuplicateTarget { target: String, sources: Vec<String> },

    #[error("{0} already exists")]
    TargetExists(String),

    #[error("failed to rename {0} to {1}: {2}")]
    Io(PathBuf, PathBuf, #[source] io::Error),
}
