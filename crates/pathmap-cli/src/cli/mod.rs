//! CLI for translating debugger file URIs and editor paths.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use pathmap_core::mapping::PathMapping;
use std::path::PathBuf;

use commands::{run_same_uri, run_to_client, run_to_server};

/// Top-level CLI for pathmap.
#[derive(Debug, Parser)]
#[command(name = "pathmap")]
#[command(about = "Translate file locations between a debugger and an editor", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Convert a file URI reported by the debugger into a local path.
    ToClient {
        /// Debugger file URI, e.g. file:///var/www/index.php.
        uri: String,

        #[command(flatten)]
        mappings: MappingArgs,
    },

    /// Convert a local path into the file URI the debugger uses.
    ToServer {
        /// Local file path.
        path: String,

        #[command(flatten)]
        mappings: MappingArgs,
    },

    /// Compare a client URI with a debugger URI (prints true/false).
    SameUri {
        /// URI as known to the editor.
        client_uri: String,

        /// URI as reported by the debugger.
        debugger_uri: String,

        /// Ignore case even for non-Windows URIs.
        #[arg(long)]
        ignore_case: bool,

        /// Config file to read instead of ~/.config/pathmap/config.toml.
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,
    },
}

/// Where source-root mappings come from. `--map` entries take precedence over the
/// launch configuration, which takes precedence over the config file.
#[derive(Debug, Args)]
pub struct MappingArgs {
    /// Source-root mapping SERVER=CLIENT; repeat to add more, most specific first.
    #[arg(long = "map", value_name = "SERVER=CLIENT", value_parser = parse_mapping_pair)]
    pub map: Vec<(String, String)>,

    /// Read `pathMappings` from an editor launch configuration (launch.json).
    #[arg(long, value_name = "PATH")]
    pub launch_json: Option<PathBuf>,

    /// Launch configuration name to take `pathMappings` from.
    #[arg(long, value_name = "NAME", requires = "launch_json")]
    pub configuration: Option<String>,

    /// Config file to read instead of ~/.config/pathmap/config.toml.
    #[arg(long, value_name = "PATH", conflicts_with = "no_config")]
    pub config: Option<PathBuf>,

    /// Do not read mappings from the config file.
    #[arg(long)]
    pub no_config: bool,
}

fn parse_mapping_pair(s: &str) -> Result<(String, String), String> {
    PathMapping::parse_pair(s).map_err(|e| e.to_string())
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::ToClient { uri, mappings } => run_to_client(&uri, &mappings)?,
            CliCommand::ToServer { path, mappings } => run_to_server(&path, &mappings)?,
            CliCommand::SameUri {
                client_uri,
                debugger_uri,
                ignore_case,
                config,
            } => run_same_uri(&client_uri, &debugger_uri, ignore_case, config.as_deref())?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
