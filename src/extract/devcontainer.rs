//! Container descriptor (devcontainer.json) extractor
//!
//! Handles:
//! - the top-level `image` property (base image)
//! - registry-addressed keys of the `features` object
//! - synthesized runtime-version records for features that install a known
//!   language runtime (go, node, python, ruby)
//!
//! Malformed sub-structure never fails the extraction; it just contributes
//! no records. Only unparsable or non-object content ends it early.

use crate::domain::{Datasource, DepType, Dependency, PackageFile, SkipReason};
use crate::extract::image_ref::{resolve_package_name, ImageRef, DEFAULT_AUTO_REPLACE_TEMPLATE};
use crate::extract::{jsonc, tools, ExtractConfig, ManifestExtractor, ManifestKind};
use serde_json::Value;

/// Extractor for container environment descriptors
pub struct DevcontainerExtractor;

impl ManifestExtractor for DevcontainerExtractor {
    fn manifest_kind(&self) -> ManifestKind {
        ManifestKind::Devcontainer
    }

    fn extract(
        &self,
        content: &str,
        _file_name: &str,
        config: &ExtractConfig,
    ) -> Option<PackageFile> {
        let root = jsonc::parse(content)?;
        let root = root.as_object()?;

        let mut deps = Vec::new();

        if let Some(image) = root.get("image").and_then(Value::as_str) {
            if let Some(dep) = extract_image(image) {
                deps.push(dep);
            }
        }

        if let Some(features) = root.get("features").and_then(Value::as_object) {
            for (reference, feature_config) in features {
                extract_feature(reference, feature_config, config, &mut deps);
            }
        }

        if deps.is_empty() {
            None
        } else {
            Some(PackageFile { deps })
        }
    }
}

/// Build the base image record. Digest pinning is not tracked for this
/// dep type, so `pin_digests` stays absent (see DESIGN.md).
fn extract_image(image: &str) -> Option<Dependency> {
    let parsed = ImageRef::parse(image)?;
    let mut dep = Dependency::new(parsed.dep_name.clone(), Datasource::Docker);
    dep.package_name = Some(parsed.dep_name);
    dep.current_value = parsed.current_value;
    dep.current_digest = parsed.current_digest;
    dep.dep_type = Some(DepType::Image);
    dep.replace_string = Some(image.to_string());
    dep.auto_replace_string_template = Some(DEFAULT_AUTO_REPLACE_TEMPLATE.to_string());
    mark_unversioned(&mut dep);
    Some(dep)
}

/// Build the record(s) for one `features` entry: the feature image record,
/// plus a runtime-version record when the feature installs a known runtime.
/// A key that is not a registry image reference contributes nothing.
fn extract_feature(
    reference: &str,
    feature_config: &Value,
    config: &ExtractConfig,
    deps: &mut Vec<Dependency>,
) {
    let Some(parsed) = ImageRef::parse(reference) else {
        return;
    };

    let package_name = resolve_package_name(&parsed.dep_name, &config.registry_aliases)
        .unwrap_or_else(|| parsed.dep_name.clone());

    let mut dep = Dependency::new(parsed.dep_name.clone(), Datasource::Docker);
    dep.package_name = Some(package_name);
    dep.current_value = parsed.current_value;
    dep.current_digest = parsed.current_digest;
    dep.dep_type = Some(DepType::Feature);
    dep.pin_digests = Some(false);
    dep.replace_string = Some(reference.to_string());
    dep.auto_replace_string_template = Some(DEFAULT_AUTO_REPLACE_TEMPLATE.to_string());
    mark_unversioned(&mut dep);
    deps.push(dep);

    if let Some((tool, datasource)) = tools::lookup_feature_tool(&parsed.dep_name) {
        deps.push(extract_tool_version(tool, datasource, feature_config));
    }
}

/// A record pinned by neither tag nor digest cannot be resolved; mark it
/// instead of dropping it so it still shows up in reporting.
fn mark_unversioned(dep: &mut Dependency) {
    if dep.current_value.is_none() && dep.current_digest.is_none() {
        dep.skip_reason = Some(SkipReason::UnspecifiedVersion);
    }
}

/// Build the advisory runtime-version record for a known runtime feature.
/// The version comes from the feature's own `version` option; these records
/// carry no replace string since they are resolved through the runtime's
/// release feed, not by rewriting the feature reference.
fn extract_tool_version(tool: &str, datasource: Datasource, feature_config: &Value) -> Dependency {
    let mut dep = Dependency::new(tool, datasource);
    match feature_config.get("version").and_then(Value::as_str) {
        Some(version) => dep.current_value = Some(version.to_string()),
        None => dep.skip_reason = Some(SkipReason::UnspecifiedVersion),
    }
    dep
}
