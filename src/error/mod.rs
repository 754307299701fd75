use std::io;
use std::path::PathBuf;

use crate::config::ConfigError;
use crate::replace::ReplaceError;
use thiserror::Error;

pub type AppResult<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Replace(#[from] ReplaceError),
    #[error("failed to read stylesheet: {path}")]
    ReadStylesheet {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write output: {path}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
