//! Error types for the hostfs crates.

use std::path::PathBuf;

/// Result type for hostfs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in hostfs operations.
///
/// Routine "missing file" conditions are never errors in this layer —
/// they surface as default-valued metadata or negative returns. These
/// variants cover hard failures only.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to spawn {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
