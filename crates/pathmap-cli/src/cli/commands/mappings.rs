//! Builds the effective mapping table from `--map`, `--launch-json` and config.

use anyhow::Result;
use pathmap_core::config;
use pathmap_core::mapping::{load_launch_json, PathMapping};

use crate::cli::MappingArgs;

/// Collects mappings in precedence order: command line, launch file, config file.
pub fn collect_mappings(args: &MappingArgs) -> Result<PathMapping> {
    let mut mapping: PathMapping = args.map.iter().cloned().collect();

    if let Some(path) = &args.launch_json {
        match load_launch_json(path, args.configuration.as_deref())? {
            Some(from_launch) => mapping.append(from_launch),
            None => tracing::warn!("no pathMappings found in {}", path.display()),
        }
    }

    if !args.no_config {
        let cfg = match &args.config {
            Some(path) => Some(config::load_from(path)?),
            None => config::load_existing()?,
        };
        if let Some(cfg) = cfg {
            mapping.append(cfg.mappings);
        }
    }

    tracing::debug!("using {} path mappings", mapping.len());
    Ok(mapping)
}
