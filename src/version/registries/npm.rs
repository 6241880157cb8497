//! npm registry API implementation

use std::time::Duration;

use tracing::warn;

use crate::config;
use crate::version::error::RegistryError;
use crate::version::registry::Registry;
use crate::version::types::Packument;

/// Registry implementation for the npm registry API
pub struct NpmRegistry {
    client: reqwest::Client,
    base_url: String,
}

impl NpmRegistry {
    /// Creates a new NpmRegistry with a custom base URL
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent(config::USER_AGENT)
                .timeout(Duration::from_secs(config::FETCH_TIMEOUT_SECS))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.to_string(),
        }
    }

    /// Encode package name for URL (handles scoped packages)
    fn encode_package_name(package_name: &str) -> String {
        if package_name.starts_with('@') {
            // Scoped package: @scope/name -> @scope%2Fname
            package_name.replace('/', "%2F")
        } else {
            package_name.to_string()
        }
    }
}

impl Default for NpmRegistry {
    fn default() -> Self {
        Self::new(&config::registry_base_url())
    }
}

#[async_trait::async_trait]
impl Registry for NpmRegistry {
    async fn fetch_packument(&self, package_name: &str) -> Result<Packument, RegistryError> {
        let encoded_name = Self::encode_package_name(package_name);
        let url = format!("{}/{}", self.base_url, encoded_name);

        let response = self.client.get(&url).send().await?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(RegistryError::NotFound(package_name.to_string()));
        }

        if !status.is_success() {
            warn!("npm registry returned status {}: {}", status, url);
            return Err(RegistryError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        let packument: Packument = response.json().await.map_err(|e| {
            warn!("Failed to parse npm registry response: {}", e);
            RegistryError::InvalidResponse(e.to_string())
        })?;

        if packument.is_empty() {
            return Err(RegistryError::NoVersions(package_name.to_string()));
        }

        Ok(packument)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    #[tokio::test]
    async fn fetch_packument_returns_versions_with_engines() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/left-pad")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "name": "left-pad",
                    "versions": {
                        "1.0.0": {},
                        "2.0.0": { "engines": { "node": ">=10" } }
                    }
                }"#,
            )
            .create_async()
            .await;

        let registry = NpmRegistry::new(&server.url());
        let packument = registry.fetch_packument("left-pad").await.unwrap();

        mock.assert_async().await;
        assert_eq!(packument.len(), 2);
        assert_eq!(packument.node_engine("1.0.0"), None);
        assert_eq!(packument.node_engine("2.0.0"), Some(">=10"));
    }

    #[tokio::test]
    async fn fetch_packument_returns_not_found_for_nonexistent_package() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/nonexistent-package")
            .with_status(404)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error": "Not found"}"#)
            .create_async()
            .await;

        let registry = NpmRegistry::new(&server.url());
        let result = registry.fetch_packument("nonexistent-package").await;

        mock.assert_async().await;
        assert!(matches!(result, Err(RegistryError::NotFound(_))));
    }

    #[tokio::test]
    async fn fetch_packument_handles_scoped_package() {
        let mut server = Server::new_async().await;

        // Scoped packages use URL encoding: @types/node -> @types%2Fnode
        let mock = server
            .mock("GET", "/@types%2Fnode")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "name": "@types/node",
                    "versions": {
                        "20.0.0": {},
                        "18.0.0": {}
                    }
                }"#,
            )
            .create_async()
            .await;

        let registry = NpmRegistry::new(&server.url());
        let packument = registry.fetch_packument("@types/node").await.unwrap();

        mock.assert_async().await;
        assert_eq!(packument.len(), 2);
    }

    #[tokio::test]
    async fn fetch_packument_rejects_packument_without_versions() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/empty-package")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "name": "empty-package",
                    "versions": {}
                }"#,
            )
            .create_async()
            .await;

        let registry = NpmRegistry::new(&server.url());
        let result = registry.fetch_packument("empty-package").await;

        mock.assert_async().await;
        assert!(matches!(result, Err(RegistryError::NoVersions(name)) if name == "empty-package"));
    }

    #[tokio::test]
    async fn fetch_packument_rejects_server_errors() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/flaky-package")
            .with_status(500)
            .with_body("Internal Server Error")
            .create_async()
            .await;

        let registry = NpmRegistry::new(&server.url());
        let result = registry.fetch_packument("flaky-package").await;

        mock.assert_async().await;
        assert!(matches!(result, Err(RegistryError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn fetch_packument_rejects_malformed_body() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/garbled-package")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("not json")
            .create_async()
            .await;

        let registry = NpmRegistry::new(&server.url());
        let result = registry.fetch_packument("garbled-package").await;

        mock.assert_async().await;
        assert!(matches!(result, Err(RegistryError::InvalidResponse(_))));
    }
}
