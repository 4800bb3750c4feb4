//! Translation of file locations between a debugger (server) and an editor (client).
//!
//! The debugger reports `file://` URIs, possibly from another operating system; the
//! editor works with native paths. [`mapper`] converts in both directions using an
//! ordered [`PathMapping`] of source roots, and compares URIs from both sides.

pub mod config;
pub mod error;
pub mod logging;
pub mod mapper;
pub mod mapping;
pub mod path_style;
pub mod uri;

pub use error::{PathMapError, RelativizeError};
pub use mapper::{
    convert_client_path_to_debugger, convert_debugger_path_to_client,
    convert_debugger_url_to_client, is_same_uri,
};
pub use mapping::PathMapping;
