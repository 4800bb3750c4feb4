//! `pathmap to-client <uri>` – debugger URI to local path.

use anyhow::{Context, Result};
use pathmap_core::convert_debugger_path_to_client;

use super::mappings::collect_mappings;
use crate::cli::MappingArgs;

pub fn run_to_client(uri: &str, args: &MappingArgs) -> Result<()> {
    let mapping = collect_mappings(args)?;
    let path = convert_debugger_path_to_client(uri, Some(&mapping))
        .with_context(|| format!("cannot map {uri} to a client path"))?;
    println!("{path}");
    Ok(())
}
