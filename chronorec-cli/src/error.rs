//! Error types for the command-line front end

use chronorec_core::ParseFailure;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Rejected(#[from] ParseFailure),

    #[error("failed to encode diagnostics: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to initialize logging: {0}")]
    Telemetry(String),
}

impl CliError {
    /// Process exit status: 1 for rejected input, 2 for everything else.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Rejected(_) => 1,
            _ => 2,
        }
    }
}

pub type CliResult<T> = Result<T, CliError>;
