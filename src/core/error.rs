//! Error taxonomy for directory inspection
//!
//! Every variant is fatal: inspection stops at the first error and the
//! process exits non-zero.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while listing a directory or reading its files
#[derive(Error, Debug)]
pub enum InspectError {
    /// The target path does not exist
    #[error("directory not found: {}", path.display())]
    DirectoryNotFound { path: PathBuf },

    /// The target path exists but is not a directory
    #[error("not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    /// The target directory could not be listed
    #[error("cannot read directory {}", path.display())]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A listed file could not be opened or read
    #[error("cannot read file {}", path.display())]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl InspectError {
    /// Classify a failure to stat the target directory
    pub fn from_directory_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            InspectError::DirectoryNotFound { path }
        } else {
            InspectError::DirectoryUnreadable { path, source }
        }
    }
}
