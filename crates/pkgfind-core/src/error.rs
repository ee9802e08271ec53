//! Error types for pkgfind-core

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using pkgfind-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving or running a search
#[derive(Error, Debug)]
pub enum Error {
    /// No package name given by flag or positional argument
    #[error("Name not defined")]
    NameNotDefined,

    /// The search root is missing or cannot be statted
    #[error("Root path not accessible: {}: {source}", .path.display())]
    RootNotAccessible {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The walk finished without a single match
    #[error("Package not found")]
    PackageNotFound,

    /// Unrecognized token in the `--list` option
    #[error("Unknown --list parameter: {0:?}")]
    InvalidListOption(String),

    /// IO error while emitting a match
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
