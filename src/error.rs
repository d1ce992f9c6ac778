//! Error type shared by every stage of a catalog run.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to load config: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// The root directory or an album directory could not be listed.
    #[error("cannot read directory {}: {source}", path.display())]
    DirectoryAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize manifest: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Nothing is left at `path` when this is returned; the previous file, if any, is untouched.
    #[error("cannot write manifest to {}: {source}", path.display())]
    ManifestWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl CatalogError {
    pub(crate) fn directory_access(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::DirectoryAccess {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn manifest_write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::ManifestWrite {
            path: path.into(),
            source,
        }
    }
}
