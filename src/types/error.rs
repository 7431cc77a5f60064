//! Error types for cpr

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error types for copy operations
#[derive(Debug, Error)]
pub enum CpError {
    /// Source is a directory but the destination exists and is not one
    #[error("Destination {} is not a directory", .path.display())]
    NotADirectory { path: PathBuf },

    /// Source is a directory and `-r` was not given
    #[error("Skipping directory {}, option -r not present", .path.display())]
    RecursionRequired { path: PathBuf },

    /// Target file exists and `-o` was not given
    #[error("Cannot override {}, specify -o option", .path.display())]
    OverwriteDenied { path: PathBuf },

    /// Source is neither a regular file nor a directory
    #[error("File type not supported: {}", .path.display())]
    UnsupportedFileType { path: PathBuf },

    /// Standard IO error (automatically converted via #[from])
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CpError {
    /// True for the copy rule violations reported as `ERROR:` lines.
    ///
    /// Plain IO failures are not violations; they abort the process as-is.
    pub fn is_copy_violation(&self) -> bool {
        !matches!(self, CpError::Io(_))
    }

    /// Path the error was raised for, if any
    pub fn path(&self) -> Option<&Path> {
        match self {
            CpError::NotADirectory { path }
            | CpError::RecursionRequired { path }
            | CpError::OverwriteDenied { path }
            | CpError::UnsupportedFileType { path } => Some(path),
            CpError::Io(_) => None,
        }
    }
}
