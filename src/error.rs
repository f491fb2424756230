//! Error types for move-dep.
//!
//! All operations return `Result<T>` which aliases `Result<T, MoveDepError>`.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from manifest rewrite operations.
///
/// Lines that merely fail to match a declaration are never errors; they are
/// passed through untouched.
#[derive(Debug, Error)]
pub enum MoveDepError {
    /// Upgrade requested without a revision or a branch.
    #[error("Exactly one of --rev or --branch must be given")]
    MissingPin,

    /// Upgrade requested with both a revision and a branch.
    #[error("--rev and --branch are mutually exclusive")]
    ConflictingPin,

    /// Repository owner that cannot be embedded in a git URL.
    #[error("Invalid repository '{0}': {1}")]
    InvalidRepository(String, String),

    /// Revision or branch value that cannot be embedded in a declaration.
    #[error("Invalid {0} '{1}': {2}")]
    InvalidPin(&'static str, String, String),

    /// Malformed `NAME=SUBPATH` entry for the local path table.
    #[error("Invalid path mapping '{0}': {1}")]
    InvalidMapping(String, String),

    /// Scan root does not exist.
    #[error("Scan root not found: {0}")]
    RootNotFound(PathBuf),

    /// Scan root exists but is not a directory.
    #[error("Scan root is not a directory: {0}")]
    NotADirectory(PathBuf),

    /// Restoring manifests after a failed commit failed as well.
    #[error("Rollback failed: {0}")]
    RollbackFailed(String),

    /// File system operation failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Directory traversal failed.
    #[error("Walk error: {0}")]
    Walk(#[from] ignore::Error),

    /// Regex compilation failed (indicates bug).
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// Unexpected error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for move-dep operations.
pub type Result<T> = std::result::Result<T, MoveDepError>;
