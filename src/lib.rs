//! depbot - dependency-update agent core library
//!
//! This library provides the two load-bearing abstractions of the agent:
//! - The manifest extraction contract, with the container-descriptor
//!   (devcontainer.json) extractor as its concrete implementation
//! - The source-control abstraction that normalizes branch, commit, merge
//!   and fork-sync operations over an underlying git worker

pub mod cli;
pub mod domain;
pub mod error;
pub mod extract;
pub mod scm;
