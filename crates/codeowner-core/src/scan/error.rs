//! Error types for scanning a file tree.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// A fatal error that aborts a scan.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The tree could not be listed, or an entry's metadata could not be read.
    #[error("walking {}: {source}", path.display())]
    Walk {
        /// The path being visited when the walk failed.
        path: PathBuf,
        /// The underlying walk error.
        #[source]
        source: walkdir::Error,
    },

    /// A file that was listed could not be opened or read.
    #[error("reading {}: {source}", path.display())]
    Io {
        /// The file being read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl ScanError {
    /// Creates a walk error.
    pub fn walk(path: impl Into<PathBuf>, source: walkdir::Error) -> Self {
        Self::Walk {
            path: path.into(),
            source,
        }
    }

    /// Creates an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns the path the error refers to.
    pub fn path(&self) -> &Path {
        match self {
            ScanError::Walk { path, .. } => path,
            ScanError::Io { path, .. } => path,
        }
    }
}
