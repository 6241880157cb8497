// =============================================================================
// Registry constants
// =============================================================================

/// Default base URL for the npm registry
pub const DEFAULT_REGISTRY_URL: &str = "https://registry.npmjs.org";

/// User agent sent with registry requests
pub const USER_AGENT: &str = "pkgcompat";

/// Timeout for registry fetch operations in seconds
pub const FETCH_TIMEOUT_SECS: u64 = 30;

/// Returns the npm registry base URL.
/// Honors npm's own `NPM_CONFIG_REGISTRY` environment variable when set,
/// otherwise falls back to registry.npmjs.org.
pub fn registry_base_url() -> String {
    registry_base_url_with_env(std::env::var("NPM_CONFIG_REGISTRY").ok())
}

fn registry_base_url_with_env(override_url: Option<String>) -> String {
    override_url
        .filter(|url| !url.trim().is_empty())
        .map(|url| url.trim_end_matches('/').to_string())
        .unwrap_or_else(|| DEFAULT_REGISTRY_URL.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, DEFAULT_REGISTRY_URL)]
    #[case(Some("".to_string()), DEFAULT_REGISTRY_URL)]
    #[case(Some("   ".to_string()), DEFAULT_REGISTRY_URL)]
    #[case(Some("https://registry.example.com".to_string()), "https://registry.example.com")]
    #[case(Some("https://registry.example.com/".to_string()), "https://registry.example.com")]
    fn registry_base_url_with_env_returns_expected(
        #[case] override_url: Option<String>,
        #[case] expected: &str,
    ) {
        assert_eq!(registry_base_url_with_env(override_url), expected);
    }
}
