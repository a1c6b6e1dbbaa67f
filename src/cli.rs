//! CLI argument parsing module for depbot

use crate::error::ConfigError;
use crate::extract::ExtractConfig;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Parse a registry alias mapping in OLD=NEW form
fn parse_registry_alias(s: &str) -> Result<(String, String), ConfigError> {
    match s.split_once('=') {
        Some((old, new)) if !old.is_empty() && !new.is_empty() => {
            Ok((old.to_string(), new.to_string()))
        }
        _ => Err(ConfigError::InvalidRegistryAlias {
            value: s.to_string(),
        }),
    }
}

/// Dependency extraction for update-agent manifests
#[derive(Parser, Debug, Clone)]
#[command(
    name = "depbot",
    version,
    about = "Extract dependency records from a manifest file"
)]
pub struct CliArgs {
    /// Manifest file to extract (e.g. .devcontainer/devcontainer.json)
    pub manifest: PathBuf,

    /// Registry alias rewrite applied to package names (OLD=NEW, repeatable)
    #[arg(long = "registry-alias", value_parser = parse_registry_alias, action = ArgAction::Append)]
    pub registry_aliases: Vec<(String, String)>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Suppress the notice when nothing is found
    #[arg(short, long)]
    pub quiet: bool,
}

impl CliArgs {
    /// Build the extraction configuration from the parsed arguments
    pub fn extract_config(&self) -> ExtractConfig {
        ExtractConfig {
            registry_aliases: self.registry_aliases.iter().cloned().collect(),
        }
    }
}
