use std::path::PathBuf;
use thiserror::Error;

use crate::models::ConfigError;

/// Main error type for trainjson
#[derive(Error, Debug)]
pub enum TrainJsonError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Program root is not readable: {path}: {source}")]
    RootUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Exercise file error: {0}")]
    File(#[from] FileError),

    #[error("Failed to write output {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid program document {path}: {source}")]
    InvalidDocument {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),
}

/// Per-file conversion errors.
///
/// The directory converter absorbs these and leaves the file out of the
/// document; single-file conversion returns them.
#[derive(Error, Debug)]
pub enum FileError {
    #[error("Failed to read {0}: {1}")]
    Csv(PathBuf, csv::Error),

    #[error("No valid exercise rows in {0}")]
    NoExercises(PathBuf),

    #[error("File name is not valid UTF-8: {0}")]
    InvalidName(PathBuf),
}

impl FileError {
    pub fn path(&self) -> &PathBuf {
        match self {
            FileError::Csv(path, _) | FileError::NoExercises(path) | FileError::InvalidName(path) => path,
        }
    }
}

pub type Result<T> = std::result::Result<T, TrainJsonError>;
