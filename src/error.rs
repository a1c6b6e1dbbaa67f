//! Application error types using thiserror
//!
//! Error hierarchy:
//! - GitError: Failures reported by the underlying git worker
//! - ConfigError: Issues with CLI configuration
//! - IoError: File system operation failures
//!
//! Extraction itself is infallible: unusable input yields no result,
//! never an error (see the `extract` module).

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Git worker related errors
    #[error(transparent)]
    Git(#[from] GitError),

    /// Configuration related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// IO related errors
    #[error(transparent)]
    Io(#[from] IoError),
}

/// Errors reported by the underlying git worker.
///
/// The SCM abstraction never catches or translates these; they propagate
/// unchanged to the caller.
#[derive(Error, Debug)]
pub enum GitError {
    /// A git operation failed (process, protocol or repository state)
    #[error("git {operation} failed: {message}")]
    CommandFailed { operation: String, message: String },

    /// A referenced branch does not exist
    #[error("branch not found: {branch}")]
    BranchNotFound { branch: String },

    /// A merge could not complete because of conflicts
    #[error("merge of {branch} into {base} has conflicts")]
    MergeConflict { base: String, branch: String },

    /// The remote rejected a push
    #[error("push of {branch} rejected: {message}")]
    PushRejected { branch: String, message: String },
}

/// Errors related to CLI configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Invalid registry alias mapping (expected OLD=NEW)
    #[error("invalid registry alias '{value}': expected OLD=NEW")]
    InvalidRegistryAlias { value: String },

    /// The file name does not match any known manifest kind
    #[error("unsupported manifest file: {path}")]
    UnsupportedManifest { path: PathBuf },
}

/// IO operation errors
#[derive(Error, Debug)]
pub enum IoError {
    /// Failed to read manifest file
    #[error("failed to read manifest file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
