//! Bidirectional translation between debugger file URIs and client paths.
//!
//! All conversions are pure functions of their arguments: no filesystem access, no
//! working directory, no state kept between calls.

mod to_client;
mod to_server;

pub use to_client::{convert_debugger_path_to_client, convert_debugger_url_to_client};
pub use to_server::convert_client_path_to_debugger;

pub use crate::uri::is_same_uri;

#[cfg(test)]
mod tests;
