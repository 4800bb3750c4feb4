//! `pathmap same-uri <client> <debugger>` – URI equality.

use anyhow::Result;
use pathmap_core::{config, is_same_uri};
use std::path::Path;

/// Prints `true` or `false`. Case is ignored for Windows file URIs, or for all URIs
/// with `--ignore-case` / `case_insensitive_compare = true` in the config.
pub fn run_same_uri(
    client_uri: &str,
    debugger_uri: &str,
    ignore_case: bool,
    config_path: Option<&Path>,
) -> Result<()> {
    let ignore_case = ignore_case || {
        let cfg = match config_path {
            Some(path) => Some(config::load_from(path)?),
            None => config::load_existing()?,
        };
        cfg.and_then(|c| c.case_insensitive_compare).unwrap_or(false)
    };

    let same = if ignore_case {
        client_uri.to_lowercase() == debugger_uri.to_lowercase()
    } else {
        is_same_uri(client_uri, debugger_uri)
    };
    println!("{same}");
    Ok(())
}
