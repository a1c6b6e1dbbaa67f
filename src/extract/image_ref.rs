//! Registry image reference grammar
//!
//! Handles references of the form `[registry/]namespace/name[:tag][@digest]`
//! as used both by the container descriptor's `image` property and by its
//! feature keys. Local-path feature references (`./feature`) and archive
//! references (`.../feature.tgz`) are not registry images and do not parse.

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Template reconstructing the replacement text from name/value/digest when
/// an update is applied in place.
pub const DEFAULT_AUTO_REPLACE_TEMPLATE: &str =
    "{{depName}}{{#if newValue}}:{{newValue}}{{/if}}{{#if newDigest}}@{{newDigest}}{{/if}}";

// Tag grammar: up to 128 word/dot/dash characters, no leading separator
static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_][A-Za-z0-9._-]{0,127}$").unwrap());

// Digest grammar: algorithm prefix plus hex payload
static DIGEST_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:[.+_-][a-z0-9]+)*:[a-fA-F0-9]{32,}$").unwrap());

// Repository path component
static SEGMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]*$").unwrap());

// Leading component may be a registry host with a port
static HOST_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]*(?::[0-9]+)?$").unwrap());

/// Archive extensions that mark a feature reference as a local tarball
/// rather than a registry image
const ARCHIVE_EXTENSIONS: &[&str] = &[".tgz", ".tar.gz", ".tar.bz2", ".tar.xz", ".tar"];

/// A parsed registry image reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    /// Registry and repository path, without tag or digest
    pub dep_name: String,
    /// Tag portion, if present
    pub current_value: Option<String>,
    /// Digest portion, if present
    pub current_digest: Option<String>,
}

impl ImageRef {
    /// Parse a registry image reference.
    ///
    /// Returns `None` when the input is not a `registry/namespace/name` form:
    /// relative or absolute paths, bare identifiers without a `/`, archive
    /// file names, or malformed tag/digest parts.
    pub fn parse(reference: &str) -> Option<Self> {
        if reference.is_empty() || reference.chars().any(char::is_whitespace) {
            return None;
        }
        if reference.starts_with("./")
            || reference.starts_with("../")
            || reference.starts_with('/')
        {
            return None;
        }

        let (rest, current_digest) = match reference.split_once('@') {
            Some((rest, digest)) => {
                if !DIGEST_RE.is_match(digest) {
                    return None;
                }
                (rest, Some(digest.to_string()))
            }
            None => (reference, None),
        };

        // Tag separator is a ':' after the last '/'; a ':' before it would
        // be a registry port, which stays part of the name.
        let last_slash = rest.rfind('/')?;
        let (dep_name, current_value) = match rest[last_slash..].find(':') {
            Some(offset) => {
                let split = last_slash + offset;
                let tag = &rest[split + 1..];
                if !TAG_RE.is_match(tag) {
                    return None;
                }
                (&rest[..split], Some(tag.to_string()))
            }
            None => (rest, None),
        };

        let lowered = dep_name.to_ascii_lowercase();
        if ARCHIVE_EXTENSIONS.iter().any(|ext| lowered.ends_with(ext)) {
            return None;
        }
        let mut segments = dep_name.split('/');
        let host = segments.next()?;
        if !HOST_RE.is_match(host) {
            return None;
        }
        if !segments.all(|seg| SEGMENT_RE.is_match(seg)) {
            return None;
        }

        Some(Self {
            dep_name: dep_name.to_string(),
            current_value,
            current_digest,
        })
    }
}

/// Apply a registry alias rewrite to a dependency name.
///
/// An alias key matches when it equals the name or is a `/`-boundary prefix
/// of it; the longest matching key wins. Returns `None` when no alias
/// applies. The rewrite produces the resolution identity only; display and
/// replace identities are never rewritten.
pub fn resolve_package_name(
    dep_name: &str,
    registry_aliases: &BTreeMap<String, String>,
) -> Option<String> {
    let mut best: Option<(&str, &str)> = None;
    for (prefix, replacement) in registry_aliases {
        let matches = dep_name == prefix.as_str()
            || (dep_name.starts_with(prefix.as_str())
                && dep_name[prefix.len()..].starts_with('/'));
        if matches && best.map_or(true, |(b, _)| prefix.len() > b.len()) {
            best = Some((prefix, replacement));
        }
    }
    best.map(|(prefix, replacement)| format!("{}{}", replacement, &dep_name[prefix.len()..]))
}
