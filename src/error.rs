use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure while loading one of the two input files. Carries the offending
/// path so the caller can present an actionable message.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Error reading file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LoadError {
    pub fn path(&self) -> &PathBuf {
        match self {
            LoadError::NotFound { path } => path,
            LoadError::Read { path, .. } => path,
        }
    }
}
