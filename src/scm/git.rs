//! Git worker interface
//!
//! The worker owns the actual repository handle and the checked-out-branch
//! pointer; everything above it (the SCM bindings) only delegates. Concrete
//! workers shell out or speak a wire protocol, so every operation is async
//! and fallible.

use crate::error::GitError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Remote name the agent configures on forks it operates against. Fork
/// synchronization is gated on this remote being present.
pub const FORK_UPSTREAM_REMOTE: &str = "depbot-fork-upstream";

/// Full-length commit identifier, treated as an opaque string
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommitSha(String);

impl CommitSha {
    /// Wraps a commit identifier
    pub fn new(sha: impl Into<String>) -> Self {
        Self(sha.into())
    }

    /// Returns the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommitSha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One file mutation within a commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileChange {
    /// Write (create or overwrite) a file
    Write { path: String, contents: String },
    /// Delete a file
    Delete { path: String },
}

/// Structured commit request forwarded to the worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitFilesConfig {
    /// Branch the commit targets
    pub branch_name: String,
    /// Files to write or delete
    pub files: Vec<FileChange>,
    /// Commit message
    pub message: String,
    /// Whether to force-push the branch
    pub force: bool,
}

/// Low-level git operations, keyed by branch name strings and commit
/// identifiers. One implementation per transport; all SCM bindings share it.
#[async_trait]
pub trait GitWorker: Send + Sync {
    /// Whether a branch exists
    async fn branch_exists(&self, branch: &str) -> Result<bool, GitError>;

    /// Head commit of a branch, if the branch is known
    async fn get_branch_commit(&self, branch: &str) -> Result<Option<CommitSha>, GitError>;

    /// Whether `branch` is behind `base`
    async fn is_branch_behind_base(&self, branch: &str, base: &str) -> Result<bool, GitError>;

    /// Whether merging `branch` into `base` would conflict
    async fn is_branch_conflicted(&self, base: &str, branch: &str) -> Result<bool, GitError>;

    /// Whether `branch` carries commits not authored by the agent
    async fn is_branch_modified(&self, branch: &str, base: &str) -> Result<bool, GitError>;

    /// Files tracked in the current checkout, in repository order
    async fn get_file_list(&self) -> Result<Vec<String>, GitError>;

    /// Check out a branch, returning its head commit
    async fn checkout_branch(&self, branch: &str) -> Result<CommitSha, GitError>;

    /// Commit the requested file changes and push; returns the new commit,
    /// or `None` when there was nothing to commit
    async fn commit_files(&self, config: &CommitFilesConfig)
        -> Result<Option<CommitSha>, GitError>;

    /// Delete a branch locally and on the remote
    async fn delete_branch(&self, branch: &str) -> Result<(), GitError>;

    /// Merge `branch` into the current base and push
    async fn merge_branch(&self, branch: &str) -> Result<(), GitError>;

    /// Merge `branch` into the local working copy without pushing
    async fn merge_to_local(&self, branch: &str) -> Result<(), GitError>;

    /// Names of the configured remotes
    async fn get_remotes(&self) -> Result<Vec<String>, GitError>;

    /// Reset `branch` to the state of the configured upstream remote
    async fn sync_fork_with_upstream(&self, branch: &str) -> Result<(), GitError>;
}
