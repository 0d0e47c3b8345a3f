use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading, rendering, or writing guides.
#[derive(Debug, Error)]
pub enum GuidegenError {
    /// IO error while reading or writing a file.
    #[error("IO error at {}: {source}", path.display())]
    Io {
        /// File or directory involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
    /// A JSON document could not be parsed or serialized.
    #[error("JSON error at {}: {source}", path.display())]
    Json {
        /// File involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: serde_json::Error,
    },
    /// No guide with the requested id exists in the guide set.
    #[error("Unknown guide: {0}")]
    UnknownGuide(String),
}

impl GuidegenError {
    /// Create an IO error tagged with the path it occurred at
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a JSON error tagged with the path it occurred at
    pub fn json(path: impl AsRef<Path>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

/// Result alias used throughout guidegen.
pub type Result<T> = std::result::Result<T, GuidegenError>;
