//! Error types for the pathcfg library.
//!
//! This module provides the error hierarchy for path conversion and
//! bootstrap installation, using `thiserror` for ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a pathcfg error.
///
/// # Examples
///
/// ```
/// use pathcfg::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("dofile('/opt/dotfiles/init.lua')\n".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the pathcfg library.
#[derive(Debug, Error)]
pub enum Error {
    /// The bootstrap source script does not exist at its expected location.
    #[error("source file not found: {}", path.display())]
    MissingSourceFile {
        /// The expected location of the source script.
        path: PathBuf,
    },

    /// The destination directory could not be created.
    #[error("cannot create directory {}: {source}", path.display())]
    CreateDirectory {
        /// The directory that could not be created.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The bootstrap file could not be written.
    #[error("cannot write {}: {source}", path.display())]
    WriteFile {
        /// The file that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The platform does not define a per-user configuration directory.
    #[error("cannot determine the user configuration directory")]
    ConfigRootUnavailable,

    /// Writing a converted path to the output sink failed.
    #[error("output error: {0}")]
    Output(#[source] std::io::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns true if this error reports a missing bootstrap source script.
    #[must_use]
    pub fn is_missing_source(&self) -> bool {
        matches!(self, Self::MissingSourceFile { .. })
    }

    /// Returns true if this error was caused by a filesystem operation.
    #[must_use]
    pub fn is_filesystem(&self) -> bool {
        matches!(
            self,
            Self::CreateDirectory { .. } | Self::WriteFile { .. } | Self::Io(_)
        )
    }
}
