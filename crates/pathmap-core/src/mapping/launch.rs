//! `pathMappings` extraction from editor launch configurations (`launch.json`).

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::PathMapping;

#[derive(Debug, Deserialize)]
struct LaunchFile {
    #[serde(rename = "pathMappings", default)]
    path_mappings: Option<PathMapping>,
    #[serde(default)]
    configurations: Vec<LaunchConfiguration>,
}

#[derive(Debug, Deserialize)]
struct LaunchConfiguration {
    #[serde(default)]
    name: Option<String>,
    #[serde(rename = "pathMappings", default)]
    path_mappings: Option<PathMapping>,
}

/// Extracts `pathMappings` from launch configuration JSON.
///
/// With `name`, only the configuration of that name is consulted. Without it a
/// top-level `pathMappings` wins, then the first configuration that has one.
/// Returns `Ok(None)` when nothing applicable defines mappings. Comments (JSONC)
/// are not supported.
pub fn path_mapping_from_launch_config(json: &str, name: Option<&str>) -> Result<Option<PathMapping>> {
    let file: LaunchFile = serde_json::from_str(json).context("invalid launch configuration JSON")?;

    if let Some(name) = name {
        return Ok(file
            .configurations
            .into_iter()
            .find(|c| c.name.as_deref() == Some(name))
            .and_then(|c| c.path_mappings));
    }

    Ok(file
        .path_mappings
        .or_else(|| file.configurations.into_iter().find_map(|c| c.path_mappings)))
}

/// Reads a launch configuration file and extracts its `pathMappings`.
pub fn load_launch_json(path: &Path, name: Option<&str>) -> Result<Option<PathMapping>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read launch configuration {}", path.display()))?;
    let mapping = path_mapping_from_launch_config(&data, name)
        .with_context(|| format!("in {}", path.display()))?;
    tracing::debug!(
        "loaded {} path mappings from {}",
        mapping.as_ref().map_or(0, PathMapping::len),
        path.display()
    );
    Ok(mapping)
}
