//! Core domain models for depbot
//!
//! This module contains the fundamental types used throughout the agent:
//! - Datasource identifiers for version resolution
//! - The canonical dependency record every extractor normalizes into
//! - The extraction result consumed by the resolution stage

mod datasource;
mod dependency;

pub use datasource::Datasource;
pub use dependency::{DepType, Dependency, PackageFile, SkipReason};
