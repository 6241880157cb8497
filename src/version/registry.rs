//! Registry trait for fetching package metadata

#[cfg(test)]
use mockall::automock;

use crate::version::error::RegistryError;
use crate::version::types::Packument;

/// Trait for fetching a package's full published version history
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Registry: Send + Sync {
    /// Fetches the packument for a package
    ///
    /// # Arguments
    /// * `package_name` - The name of the package (e.g., "lodash", "@types/node")
    ///
    /// # Returns
    /// * `Ok(Packument)` - Version-to-manifest map with at least one entry
    /// * `Err(RegistryError)` - If the fetch fails or no versions are published
    async fn fetch_packument(&self, package_name: &str) -> Result<Packument, RegistryError>;
}
