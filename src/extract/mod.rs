//! Manifest extraction contract and extractor catalog
//!
//! This module provides:
//! - The uniform extraction contract every manifest kind conforms to
//! - The closed catalog of manifest kinds with file-name routing
//! - A path-based convenience wrapper used by the CLI
//!
//! Extraction is pure and infallible: unusable content yields `None`,
//! never an error. Only the path-based wrapper can fail (IO, routing).

mod devcontainer;
mod image_ref;
mod jsonc;
mod tools;

pub use devcontainer::DevcontainerExtractor;
pub use image_ref::{resolve_package_name, ImageRef, DEFAULT_AUTO_REPLACE_TEMPLATE};
pub use tools::lookup_feature_tool;

use crate::domain::PackageFile;
use crate::error::{AppError, ConfigError, IoError};
use regex::Regex;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::LazyLock;

// File-name patterns routed to the devcontainer extractor
static DEVCONTAINER_FILE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|/)(?:\.?devcontainer\.json|\.devcontainer/devcontainer\.json)$").unwrap()
});

/// Extraction options supplied by the caller; read-only for extractors
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractConfig {
    /// Registry-host prefix rewrites, applied only to the resolution
    /// identity (`package_name`), never to `dep_name` or `replace_string`
    pub registry_aliases: BTreeMap<String, String>,
}

/// Manifest kinds known to the agent.
///
/// Adding a manifest type means adding a variant here plus its extractor;
/// dispatch logic stays unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ManifestKind {
    /// Container environment descriptor (devcontainer.json)
    Devcontainer,
}

impl ManifestKind {
    /// Route a file name (or repository-relative path) to its manifest kind
    pub fn detect(file_name: &str) -> Option<ManifestKind> {
        let normalized = file_name.replace('\\', "/");
        if DEVCONTAINER_FILE_RE.is_match(&normalized) {
            return Some(ManifestKind::Devcontainer);
        }
        None
    }

    /// Returns all known manifest kinds
    pub fn all() -> &'static [ManifestKind] {
        &[ManifestKind::Devcontainer]
    }
}

/// Trait for manifest extractors
pub trait ManifestExtractor {
    /// Returns the manifest kind this extractor handles
    fn manifest_kind(&self) -> ManifestKind;

    /// Extract dependency records from manifest content.
    ///
    /// `file_name` is diagnostic only; it is never parsed. Returns `None`
    /// when the content is unparsable or holds nothing to track.
    fn extract(
        &self,
        content: &str,
        file_name: &str,
        config: &ExtractConfig,
    ) -> Option<PackageFile>;
}

/// Get the extractor for the specified manifest kind
pub fn get_extractor(kind: ManifestKind) -> Box<dyn ManifestExtractor> {
    match kind {
        ManifestKind::Devcontainer => Box::new(DevcontainerExtractor),
    }
}

/// Extract dependency records from a manifest file path.
///
/// Reads the file, routes it by name and runs the matching extractor.
/// `Ok(None)` means the manifest holds nothing to track, which is not an
/// error for the agent run.
pub fn extract_file(
    path: &Path,
    config: &ExtractConfig,
) -> Result<Option<PackageFile>, AppError> {
    let file_name = path.to_string_lossy();
    let kind =
        ManifestKind::detect(&file_name).ok_or_else(|| ConfigError::UnsupportedManifest {
            path: path.to_path_buf(),
        })?;

    let content = std::fs::read_to_string(path).map_err(|e| IoError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    let extractor = get_extractor(kind);
    Ok(extractor.extract(&content, &file_name, config))
}
