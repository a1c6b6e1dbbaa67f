//! Dependency record structures

use super::Datasource;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic role of a dependency within its manifest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DepType {
    /// The base image of a container descriptor
    Image,
    /// A named add-on referenced by a container descriptor
    Feature,
}

impl fmt::Display for DepType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DepType::Image => write!(f, "image"),
            DepType::Feature => write!(f, "feature"),
        }
    }
}

/// Machine-readable reason a record cannot be resolved or updated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkipReason {
    /// The manifest names the dependency but pins no version
    UnspecifiedVersion,
}

/// One discovered external reference, normalized to the extractor-agnostic
/// shape the resolution stage consumes.
///
/// Records are immutable once produced by extraction. `replace_string`, when
/// present, is a verbatim substring of the source content that produced the
/// record; the apply stage locates and rewrites it in place using
/// `auto_replace_string_template`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dependency {
    /// Stable identity used for matching and reporting
    pub dep_name: String,
    /// Identity used to query the datasource; differs from `dep_name` only
    /// when a registry alias rewrite applied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_name: Option<String>,
    /// Version/tag portion as found in source
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_value: Option<String>,
    /// Content digest, if pinned by digest
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_digest: Option<String>,
    /// Which datasource resolves this record
    pub datasource: Datasource,
    /// Role within the manifest; absent on synthesized tool-version records
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dep_type: Option<DepType>,
    /// Whether digest pinning applies; present only for kinds that support it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pin_digests: Option<bool>,
    /// Exact original substring to locate when applying an update
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replace_string: Option<String>,
    /// Template reconstructing the replacement text at apply time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_replace_string_template: Option<String>,
    /// Why the record cannot be resolved, if it cannot
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_reason: Option<SkipReason>,
}

impl Dependency {
    /// Creates a record with only the required fields set
    pub fn new(dep_name: impl Into<String>, datasource: Datasource) -> Self {
        Self {
            dep_name: dep_name.into(),
            package_name: None,
            current_value: None,
            current_digest: None,
            datasource,
            dep_type: None,
            pin_digests: None,
            replace_string: None,
            auto_replace_string_template: None,
            skip_reason: None,
        }
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dep_name)?;
        if let Some(value) = &self.current_value {
            write!(f, ":{}", value)?;
        }
        if let Some(digest) = &self.current_digest {
            write!(f, "@{}", digest)?;
        }
        write!(f, " [{}]", self.datasource)
    }
}

/// Result of extracting one manifest file: the discovered records in
/// discovery order (stable for deterministic diffing).
///
/// A manifest with nothing to track yields no `PackageFile` at all; callers
/// must not distinguish "no file" from "no dependencies".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageFile {
    /// Discovered records in source order
    pub deps: Vec<Dependency>,
}
