use std::path::PathBuf;

use thiserror::Error;

use crate::contract::BoxError;

/// Failure classes for a deploy run.
///
/// Each variant maps to a distinct phase so the CLI can report what state
/// the deployment was left in. In particular [`DeployError::Invalidation`]
/// means the objects were already published but edge caches still serve the
/// previous version.
#[derive(Debug, Error)]
pub enum DeployError {
    #[error("failed to walk source directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("file {path} is outside the source root")]
    OutsideRoot { path: PathBuf },

    #[error("upload failed for '{key}': {source}")]
    Upload {
        key: String,
        #[source]
        source: BoxError,
    },

    #[error("objects uploaded, but the cache invalidation request failed: {source}")]
    Invalidation {
        #[source]
        source: BoxError,
    },
}
