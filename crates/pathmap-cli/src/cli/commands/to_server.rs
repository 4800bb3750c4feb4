//! `pathmap to-server <path>` – local path to debugger URI.

use anyhow::{Context, Result};
use pathmap_core::convert_client_path_to_debugger;

use super::mappings::collect_mappings;
use crate::cli::MappingArgs;

pub fn run_to_server(path: &str, args: &MappingArgs) -> Result<()> {
    let mapping = collect_mappings(args)?;
    let uri = convert_client_path_to_debugger(path, Some(&mapping))
        .with_context(|| format!("cannot map {path} to a debugger URI"))?;
    println!("{uri}");
    Ok(())
}
