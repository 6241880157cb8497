//! Packument data model for npm registry responses

use std::collections::HashMap;

use serde::{Deserialize, Deserializer};

/// Full version history for a package as returned by the npm registry,
/// keyed by version string.
///
/// Built only by deserializing a registry response and never mutated
/// afterwards.
#[derive(Debug, Clone, Deserialize)]
pub struct Packument {
    #[serde(default)]
    versions: HashMap<String, VersionManifest>,
}

impl Packument {
    pub fn new(versions: HashMap<String, VersionManifest>) -> Self {
        Self { versions }
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    /// All published version strings, in no particular order
    pub fn version_names(&self) -> impl Iterator<Item = &str> {
        self.versions.keys().map(String::as_str)
    }

    /// The declared `engines.node` range for a version, if any
    pub fn node_engine(&self, version: &str) -> Option<&str> {
        self.versions
            .get(version)
            .and_then(|manifest| manifest.engines.node.as_deref())
    }
}

/// Per-version manifest. Only the engine declaration matters here; every
/// other manifest field is dropped at deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VersionManifest {
    #[serde(default)]
    pub engines: Engines,
}

/// Declared engine constraints.
///
/// Old packages published `engines` in odd shapes (arrays, strings, null).
/// Anything that is not an object with a string `node` field deserializes
/// to no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Engines {
    pub node: Option<String>,
}

impl<'de> Deserialize<'de> for Engines {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        let node = value
            .get("node")
            .and_then(serde_json::Value::as_str)
            .map(str::to_owned);
        Ok(Engines { node })
    }
}
