//! CLI command handlers. Each command is in its own file.

mod mappings;
mod same_uri;
mod to_client;
mod to_server;

pub use same_uri::run_same_uri;
pub use to_client::run_to_client;
pub use to_server::run_to_server;
