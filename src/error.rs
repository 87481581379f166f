use std::path::PathBuf;

use thiserror::Error;

use crate::formatter::error::FormatterError;

/// Operational failures around the analyzer. Syntax errors are never reported here;
/// they are data in [`ErrorRecord`](crate::analyzer::ErrorRecord).
#[derive(Error, Debug)]
pub enum CheckerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input directory not found: {}", .0.display())]
    InputDirNotFound(PathBuf),

    #[error("Failed to read {}: {source}", path.display())]
    ReadInput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Report error: {0}")]
    Formatter(#[from] FormatterError),
}

pub type CheckerResult<T> = Result<T, CheckerError>;
