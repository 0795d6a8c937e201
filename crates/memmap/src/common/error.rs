//! Error definitions.
//!
//! Every failure in the pipeline is fatal: errors propagate with `?` to the
//! caller of [`crate::report`], which decides how to surface them.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::number::ParseNumberError;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MemmapError>;

/// Failures while collecting or rendering the memory map.
#[derive(Debug, Error)]
pub enum MemmapError {
    /// The root or an entry directory could not be listed.
    #[error("cannot list directory {}", .path.display())]
    ListDir {
        /// Directory that failed to list.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// An attribute file exists but could not be read.
    #[error("cannot read attribute {}", .path.display())]
    ReadAttribute {
        /// Attribute file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A `start` or `end` attribute is not an unsigned integer.
    #[error("invalid address {value:?} in {}", .path.display())]
    ParseAttribute {
        /// Attribute file path.
        path: PathBuf,
        /// Trimmed file contents.
        value: String,
        /// Why parsing failed.
        #[source]
        source: ParseNumberError,
    },

    /// Writing the rendered table failed.
    #[error("cannot write table")]
    Output(#[from] io::Error),
}

impl MemmapError {
    pub(crate) fn list_dir(path: &Path, source: io::Error) -> Self {
        Self::ListDir {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn read_attribute(path: &Path, source: io::Error) -> Self {
        Self::ReadAttribute {
            path: path.to_path_buf(),
            source,
        }
    }
}
