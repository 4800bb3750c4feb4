//! Ordered source-root mapping tables.
//!
//! A [`PathMapping`] pairs server path prefixes with client path prefixes. Order is
//! significant: the mapper takes the first entry that contains a path, so callers
//! list more specific roots first. Entries are never sorted or deduplicated.

mod launch;
mod serde_impl;

use anyhow::{anyhow, Result};

pub use launch::{load_launch_json, path_mapping_from_launch_config};

/// One `server -> client` root pair, as written in `[[mappings]]` tables.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MappingEntry {
    pub server: String,
    pub client: String,
}

/// Ordered `server root -> client root` table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathMapping {
    entries: Vec<MappingEntry>,
}

impl PathMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry after all existing ones, i.e. with the lowest precedence.
    pub fn push(&mut self, server: impl Into<String>, client: impl Into<String>) {
        self.entries.push(MappingEntry {
            server: server.into(),
            client: client.into(),
        });
    }

    /// Appends every entry of `other`, keeping its order.
    pub fn append(&mut self, other: PathMapping) {
        self.entries.extend(other.entries);
    }

    /// `(server root, client root)` pairs in precedence order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries
            .iter()
            .map(|e| (e.server.as_str(), e.client.as_str()))
    }

    pub fn entries(&self) -> &[MappingEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parses a `SERVER=CLIENT` pair as given on the command line.
    ///
    /// The first `=` splits the pair, so client paths may contain `=`. Both sides
    /// must be non-empty.
    pub fn parse_pair(pair: &str) -> Result<(String, String)> {
        let (server, client) = pair
            .split_once('=')
            .ok_or_else(|| anyhow!("expected SERVER=CLIENT, got {pair:?}"))?;
        let (server, client) = (server.trim(), client.trim());
        if server.is_empty() || client.is_empty() {
            return Err(anyhow!("empty root in mapping {pair:?}"));
        }
        Ok((server.to_string(), client.to_string()))
    }
}

impl<S, C> FromIterator<(S, C)> for PathMapping
where
    S: Into<String>,
    C: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (S, C)>>(iter: I) -> Self {
        let mut mapping = PathMapping::new();
        mapping.extend(iter);
        mapping
    }
}

impl<S, C> Extend<(S, C)> for PathMapping
where
    S: Into<String>,
    C: Into<String>,
{
    fn extend<I: IntoIterator<Item = (S, C)>>(&mut self, iter: I) {
        for (server, client) in iter {
            self.push(server, client);
        }
    }
}
