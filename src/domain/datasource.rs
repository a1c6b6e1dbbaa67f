//! Datasource identifiers for version resolution

use serde::{Deserialize, Serialize};
use std::fmt;

/// Versioning scheme/registry class that resolves new versions for a record.
///
/// The string ids are stable wire identifiers; the resolution stage matches
/// on them, so they must never change for an existing variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Datasource {
    /// Container registry (OCI/Docker image tags and digests)
    Docker,
    /// Go toolchain release feed
    GolangVersion,
    /// Node.js release feed
    NodeVersion,
    /// Python release feed
    PythonVersion,
    /// Ruby release feed
    RubyVersion,
}

impl Datasource {
    /// Returns the stable string identifier for this datasource
    pub fn id(&self) -> &'static str {
        match self {
            Datasource::Docker => "docker",
            Datasource::GolangVersion => "golang-version",
            Datasource::NodeVersion => "node-version",
            Datasource::PythonVersion => "python-version",
            Datasource::RubyVersion => "ruby-version",
        }
    }
}

impl fmt::Display for Datasource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}
