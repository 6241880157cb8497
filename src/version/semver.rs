use semver::Version;

/// Strip a single leading `v` prefix from a version string.
///
/// Examples:
/// - "v18.12.0" -> "18.12.0"
/// - "18.12.0" -> "18.12.0"
pub fn normalize_version(version: &str) -> &str {
    version.strip_prefix('v').unwrap_or(version)
}

/// Parse a version string into a semver::Version, normalizing partial versions.
///
/// Handles partial versions like "1" or "1.2" by padding with zeros.
/// Does NOT strip a 'v' prefix (use `normalize_version` first if needed).
///
/// Examples:
/// - "1" -> Version(1, 0, 0)
/// - "1.2" -> Version(1, 2, 0)
/// - "1.2.3" -> Version(1, 2, 3)
pub fn parse_version(version: &str) -> Option<Version> {
    let parts: Vec<&str> = version.split('.').collect();
    let normalized = match parts.len() {
        1 => format!("{}.0.0", parts[0]),
        2 => format!("{}.{}.0", parts[0], parts[1]),
        _ => version.to_string(),
    };
    Version::parse(&normalized).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("v18.12.0", "18.12.0")]
    #[case("18.12.0", "18.12.0")]
    #[case("v8", "8")]
    #[case("", "")]
    fn normalize_version_strips_leading_v(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize_version(input), expected);
    }

    #[rstest]
    #[case("1", Some(Version::new(1, 0, 0)))]
    #[case("1.2", Some(Version::new(1, 2, 0)))]
    #[case("1.2.3", Some(Version::new(1, 2, 3)))]
    #[case("18.12.0", Some(Version::new(18, 12, 0)))]
    #[case("invalid", None)]
    #[case("", None)]
    fn parse_version_pads_partial_versions(
        #[case] input: &str,
        #[case] expected: Option<Version>,
    ) {
        assert_eq!(parse_version(input), expected);
    }

    #[test]
    fn parse_version_keeps_prerelease() {
        let parsed = parse_version("1.2.3-beta.1").unwrap();
        assert_eq!(parsed.to_string(), "1.2.3-beta.1");
    }
}
