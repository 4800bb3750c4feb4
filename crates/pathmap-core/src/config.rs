use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::mapping::PathMapping;

/// Global configuration loaded from `~/.config/pathmap/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathmapConfig {
    /// Force case-insensitive `same-uri` comparison even for non-Windows URIs.
    /// When unset, only Windows file URIs compare case-insensitively.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_insensitive_compare: Option<bool>,
    /// Source-root mappings, in precedence order (`[[mappings]]` tables).
    #[serde(default)]
    pub mappings: PathMapping,
}

/// Load the config file if one exists in the XDG config dirs. Nothing is created
/// on disk when it is missing.
pub fn load_existing() -> Result<Option<PathmapConfig>> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("pathmap")?;
    match xdg_dirs.find_config_file("config.toml") {
        Some(path) => load_from(&path).map(Some),
        None => {
            tracing::debug!("no config file, using defaults");
            Ok(None)
        }
    }
}

/// Load configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<PathmapConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let cfg: PathmapConfig =
        toml::from_str(&data).with_context(|| format!("invalid config {}", path.display()))?;
    tracing::debug!("loaded {} mappings from {}", cfg.mappings.len(), path.display());
    Ok(cfg)
}
