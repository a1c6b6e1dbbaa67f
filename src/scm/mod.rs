//! Source-control abstraction
//!
//! This module provides:
//! - The low-level git worker interface every transport implements
//! - The provider-agnostic `Scm` operation set
//! - The default binding that delegates straight to the worker
//!
//! The abstraction is stateless and re-entrant per call; repository state,
//! including the checked-out-branch pointer, lives in the worker.

mod default;
mod git;

pub use default::{DefaultGitScm, Scm};
pub use git::{CommitFilesConfig, CommitSha, FileChange, GitWorker, FORK_UPSTREAM_REMOTE};
