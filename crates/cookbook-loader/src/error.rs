//! Error types for the loader boundary

use cookbook_parser::ParseError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for load operations
pub type LoadResult<T> = std::result::Result<T, LoadError>;

/// Source-located errors crossing the load-pipeline boundary
///
/// This is the only error type the loader lets through: every lower-level
/// failure is wrapped together with the file that produced it, and the
/// original cause stays reachable through the source chain.
#[derive(Error, Debug)]
pub enum LoadError {
    /// A recipe or manifest file failed to decode or validate
    #[error("{}: {source}", .path.display())]
    Source {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    /// Anything not anticipated by the grammar or document rules
    #[error("{}: unexpected error while processing file", .path.display())]
    Unexpected {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A recipe declared membership in a group the manifest does not define
    #[error("{}: unknown group label '{label}'", .path.display())]
    UnknownGroup { path: PathBuf, label: String },
}

impl LoadError {
    /// The file this error is located at.
    pub fn path(&self) -> &std::path::Path {
        match self {
            LoadError::Source { path, .. }
            | LoadError::Unexpected { path, .. }
            | LoadError::UnknownGroup { path, .. } => path,
        }
    }
}
