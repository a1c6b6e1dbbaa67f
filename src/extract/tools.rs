//! Static lookup table from known runtime features to version datasources
//!
//! Some container features install a language runtime whose version is
//! tracked through a release feed rather than the container registry. The
//! table maps the feature name's final path segment to that feed. Exact
//! match only; no fuzzy or versioned keys.

use crate::domain::Datasource;

/// Known runtime identifiers and the datasource resolving their versions
const KNOWN_TOOLS: &[(&str, Datasource)] = &[
    ("go", Datasource::GolangVersion),
    ("node", Datasource::NodeVersion),
    ("python", Datasource::PythonVersion),
    ("ruby", Datasource::RubyVersion),
];

/// Look up the runtime a feature installs, keyed by the final path segment
/// of the feature's dependency name.
///
/// Returns the canonical tool identifier and its version datasource, or
/// `None` when the feature does not install a known runtime.
pub fn lookup_feature_tool(dep_name: &str) -> Option<(&'static str, Datasource)> {
    let segment = dep_name.rsplit('/').next()?;
    KNOWN_TOOLS
        .iter()
        .find(|(tool, _)| *tool == segment)
        .copied()
}
