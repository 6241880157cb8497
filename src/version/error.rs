use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Package not found: {0}")]
    NotFound(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("No published versions for package: {0}")]
    NoVersions(String),
}

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Failed to fetch metadata for {package}: {source}")]
    Metadata {
        package: String,
        #[source]
        source: RegistryError,
    },

    #[error("No versions found for package: {0}")]
    NoVersions(String),

    #[error("Invalid Node.js version: {0}")]
    InvalidNodeVersion(String),

    #[error("Invalid version range: {0}")]
    InvalidRange(String),
}
