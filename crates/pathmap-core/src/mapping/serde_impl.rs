//! Serde support for [`PathMapping`].
//!
//! Two shapes are accepted:
//! - a map `{ "/var/www": "/home/me/site" }`, the `pathMappings` object of an editor
//!   launch configuration; entries keep document order;
//! - a sequence of `{ server = "...", client = "..." }` tables.
//!
//! Serialization always writes the sequence form, which keeps order in every format.

use std::fmt;

use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{MappingEntry, PathMapping};

impl Serialize for PathMapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.entries.len()))?;
        for entry in &self.entries {
            seq.serialize_element(entry)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for PathMapping {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PathMappingVisitor)
    }
}

struct PathMappingVisitor;

impl<'de> Visitor<'de> for PathMappingVisitor {
    type Value = PathMapping;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of server root to client root, or a list of {server, client} entries")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut mapping = PathMapping::new();
        while let Some((server, client)) = map.next_entry::<String, String>()? {
            mapping.push(server, client);
        }
        Ok(mapping)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut mapping = PathMapping::new();
        while let Some(entry) = seq.next_element::<MappingEntry>()? {
            mapping.entries.push(entry);
        }
        Ok(mapping)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_object_keeps_document_order() {
        let json = r#"{ "/var/www/sub": "/home/me/sub", "/var/www": "/home/me/site", "/a": "/b" }"#;
        let mapping: PathMapping = serde_json::from_str(json).unwrap();
        let servers: Vec<&str> = mapping.iter().map(|(s, _)| s).collect();
        assert_eq!(servers, vec!["/var/www/sub", "/var/www", "/a"]);
    }

    #[test]
    fn json_list_of_entries() {
        let json = r#"[ { "server": "/var/www", "client": "/home/me/site" } ]"#;
        let mapping: PathMapping = serde_json::from_str(json).unwrap();
        assert_eq!(mapping.iter().next(), Some(("/var/www", "/home/me/site")));
    }

    #[test]
    fn toml_array_of_tables() {
        #[derive(Deserialize)]
        struct Doc {
            mappings: PathMapping,
        }
        let doc: Doc = toml::from_str(
            r#"
            [[mappings]]
            server = "/var/www/sub"
            client = "/srv/sub"

            [[mappings]]
            server = "/var/www"
            client = "/srv/site"
            "#,
        )
        .unwrap();
        let servers: Vec<&str> = doc.mappings.iter().map(|(s, _)| s).collect();
        assert_eq!(servers, vec!["/var/www/sub", "/var/www"]);
    }

    #[test]
    fn serializes_as_list() {
        let mapping: PathMapping = [("/var/www", "/home/me/site")].into_iter().collect();
        let json = serde_json::to_string(&mapping).unwrap();
        assert_eq!(json, r#"[{"server":"/var/www","client":"/home/me/site"}]"#);
    }

    #[test]
    fn rejects_non_string_values() {
        assert!(serde_json::from_str::<PathMapping>(r#"{ "/var/www": 3 }"#).is_err());
        assert!(serde_json::from_str::<PathMapping>("42").is_err());
    }
}
