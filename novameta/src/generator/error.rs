use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid generator configuration: {0}")]
    InvalidConfig(serde_valid::validation::Errors),

    #[error("failed to create the metadata directory {0}: {1}")]
    CannotCreateDir(PathBuf, #[source] io::Error),

    #[error("failed to serialize record #{0}: {1}")]
    CannotSerialize(u32, #[source] serde_json::Error),

    #[error("failed to write {0}: {1}")]
    CannotWriteFile(PathBuf, #[source] io::Error),
}
