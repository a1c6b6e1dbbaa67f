//! Default SCM binding: pure delegation to the git worker
//!
//! Hosting providers without provider-specific source-control behavior use
//! this binding as-is. Every operation forwards to the shared worker and
//! propagates its errors untranslated; the single local policy decision is
//! the fork-sync gate.

use crate::error::GitError;
use crate::scm::git::{CommitFilesConfig, CommitSha, GitWorker, FORK_UPSTREAM_REMOTE};
use async_trait::async_trait;
use std::sync::Arc;

/// Provider-agnostic source-control operation set.
///
/// One implementation per hosting provider; callers never touch the git
/// worker directly. Mutating operations on the same working copy must be
/// serialized externally, since the worker holds a single current-branch
/// pointer.
#[async_trait]
pub trait Scm: Send + Sync {
    /// Whether a branch exists
    async fn branch_exists(&self, branch: &str) -> Result<bool, GitError>;

    /// Head commit of a branch, if known
    async fn get_branch_commit(&self, branch: &str) -> Result<Option<CommitSha>, GitError>;

    /// Whether `branch` is behind `base`
    async fn is_branch_behind_base(&self, branch: &str, base: &str) -> Result<bool, GitError>;

    /// Whether merging `branch` into `base` would conflict
    async fn is_branch_conflicted(&self, base: &str, branch: &str) -> Result<bool, GitError>;

    /// Whether `branch` carries commits not authored by the agent
    async fn is_branch_modified(&self, branch: &str, base: &str) -> Result<bool, GitError>;

    /// Files tracked in the current checkout
    async fn get_file_list(&self) -> Result<Vec<String>, GitError>;

    /// Check out a branch, returning its head commit
    async fn checkout_branch(&self, branch: &str) -> Result<CommitSha, GitError>;

    /// Commit and push file changes; `None` when there was nothing to commit
    async fn commit_and_push(
        &self,
        config: &CommitFilesConfig,
    ) -> Result<Option<CommitSha>, GitError>;

    /// Delete a branch
    async fn delete_branch(&self, branch: &str) -> Result<(), GitError>;

    /// Merge `branch` into the current base and push
    async fn merge_and_push(&self, branch: &str) -> Result<(), GitError>;

    /// Merge `branch` into the local working copy without pushing
    async fn merge_to_local(&self, branch: &str) -> Result<(), GitError>;

    /// Bring a fork branch up to date with its configured upstream remote.
    /// A no-op when the upstream remote is not configured.
    async fn sync_fork_with_upstream(&self, branch: &str) -> Result<(), GitError>;
}

/// Default binding delegating every operation to the shared git worker
pub struct DefaultGitScm {
    git: Arc<dyn GitWorker>,
}

impl DefaultGitScm {
    /// Creates a binding over the given worker
    pub fn new(git: Arc<dyn GitWorker>) -> Self {
        Self { git }
    }
}

#[async_trait]
impl Scm for DefaultGitScm {
    async fn branch_exists(&self, branch: &str) -> Result<bool, GitError> {
        self.git.branch_exists(branch).await
    }

    async fn get_branch_commit(&self, branch: &str) -> Result<Option<CommitSha>, GitError> {
        self.git.get_branch_commit(branch).await
    }

    async fn is_branch_behind_base(&self, branch: &str, base: &str) -> Result<bool, GitError> {
        self.git.is_branch_behind_base(branch, base).await
    }

    async fn is_branch_conflicted(&self, base: &str, branch: &str) -> Result<bool, GitError> {
        self.git.is_branch_conflicted(base, branch).await
    }

    async fn is_branch_modified(&self, branch: &str, base: &str) -> Result<bool, GitError> {
        self.git.is_branch_modified(branch, base).await
    }

    async fn get_file_list(&self) -> Result<Vec<String>, GitError> {
        self.git.get_file_list().await
    }

    async fn checkout_branch(&self, branch: &str) -> Result<CommitSha, GitError> {
        self.git.checkout_branch(branch).await
    }

    async fn commit_and_push(
        &self,
        config: &CommitFilesConfig,
    ) -> Result<Option<CommitSha>, GitError> {
        self.git.commit_files(config).await
    }

    async fn delete_branch(&self, branch: &str) -> Result<(), GitError> {
        self.git.delete_branch(branch).await
    }

    async fn merge_and_push(&self, branch: &str) -> Result<(), GitError> {
        self.git.merge_branch(branch).await
    }

    async fn merge_to_local(&self, branch: &str) -> Result<(), GitError> {
        self.git.merge_to_local(branch).await
    }

    async fn sync_fork_with_upstream(&self, branch: &str) -> Result<(), GitError> {
        // Fork sync only makes sense when the agent-owned upstream remote
        // has been configured; without it the call is a no-op.
        let remotes = self.git.get_remotes().await?;
        if remotes.iter().any(|r| r == FORK_UPSTREAM_REMOTE) {
            self.git.sync_fork_with_upstream(branch).await?;
        }
        Ok(())
    }
}
