//! Error types for the `.ov` compiler.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during translation.
///
/// The `Display` text of each variant is the line shown to the user.
#[derive(Debug, Error)]
pub enum CompileError {
    /// The source file could not be opened.
    #[error("Failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The source file was opened but reading it failed part-way.
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The generated C file could not be written.
    #[error("Failed to write C file: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result type for compiler operations.
pub type Result<T> = std::result::Result<T, CompileError>;
