//! Compatibility resolution against a Node.js version
//!
//! Given a package name and a target Node.js version, determines which
//! published versions declare support for that Node.js version through
//! their `engines.node` range. A version with no declaration is treated
//! as compatible with any Node.js version.

use semver::Version;
use tracing::debug;

use crate::version::error::ResolveError;
use crate::version::range::{self, VersionSpec};
use crate::version::registry::Registry;
use crate::version::semver::{normalize_version, parse_version};

/// Resolves compatible package versions from a registry
pub struct CompatResolver<R: Registry> {
    registry: R,
}

impl<R: Registry> CompatResolver<R> {
    pub fn new(registry: R) -> Self {
        Self { registry }
    }

    /// Find versions of a package compatible with `node_version`, newest first.
    ///
    /// `node_version` accepts a leading `v` and partial versions ("18",
    /// "v18.12"). `range` narrows the candidate set before the engine check;
    /// `limit` truncates the final list. An empty result is a valid outcome,
    /// not an error.
    pub async fn find_compatible_versions(
        &self,
        package_name: &str,
        node_version: &str,
        range: Option<&str>,
        limit: Option<usize>,
    ) -> Result<Vec<String>, ResolveError> {
        let normalized = normalize_version(node_version);
        let target = parse_version(normalized)
            .ok_or_else(|| ResolveError::InvalidNodeVersion(node_version.to_string()))?;

        let range_filter = match range {
            Some(spec) => Some(
                VersionSpec::parse(spec)
                    .ok_or_else(|| ResolveError::InvalidRange(spec.to_string()))?,
            ),
            None => None,
        };

        let packument = self
            .registry
            .fetch_packument(package_name)
            .await
            .map_err(|source| ResolveError::Metadata {
                package: package_name.to_string(),
                source,
            })?;

        // The registry already rejects empty packuments; guard again here
        if packument.is_empty() {
            return Err(ResolveError::NoVersions(package_name.to_string()));
        }

        // Version keys that are not valid semver cannot be ordered; skip them
        let mut versions: Vec<(String, Version)> = packument
            .version_names()
            .filter_map(|name| {
                Version::parse(name)
                    .ok()
                    .map(|parsed| (name.to_string(), parsed))
            })
            .collect();

        if let Some(filter) = &range_filter {
            versions.retain(|(_, parsed)| filter.satisfies(parsed));
        }

        // Newest first
        versions.sort_by(|(_, a), (_, b)| b.cmp(a));

        let mut compatible: Vec<String> = Vec::new();
        for (name, _) in &versions {
            match packument.node_engine(name) {
                // No engine declaration means any Node.js version is accepted
                None => compatible.push(name.clone()),
                Some(constraint) if range::satisfies(&target, constraint) => {
                    compatible.push(name.clone());
                }
                // Unsatisfied or malformed constraint
                Some(_) => {}
            }
        }

        debug!(
            "{}: {} of {} candidate versions compatible with Node.js {}",
            package_name,
            compatible.len(),
            versions.len(),
            target
        );

        if let Some(limit) = limit {
            compatible.truncate(limit);
        }

        Ok(compatible)
    }
}
