//! npm version range parsing and satisfaction
//!
//! The `semver` crate implements Cargo's requirement semantics, so npm
//! range expressions get their own evaluator. Supported syntax:
//! - `1.2.3`, `=1.2.3` - exact match
//! - `^1.2.3` - compatible with version (>=1.2.3 <2.0.0, 0.x special cases)
//! - `~1.2.3` - approximately equivalent (>=1.2.3 <1.3.0)
//! - `>=1.2.3`, `>1.2.3`, `<=1.2.3`, `<1.2.3` - comparison operators
//! - `1.2.x`, `1.x`, `*` - wildcards
//! - `1.0.0 - 2.0.0` - hyphen ranges
//! - space-separated AND, `||`-separated OR
//!
//! Partial versions pad with zeros (`>=10` reads as `>=10.0.0`).

use semver::Version;

use crate::version::semver::parse_version;

/// Check whether `version` satisfies an npm range expression.
///
/// A malformed expression matches nothing.
pub fn satisfies(version: &Version, spec: &str) -> bool {
    VersionSpec::parse(spec).is_some_and(|parsed| parsed.satisfies(version))
}

/// A parsed npm range expression
#[derive(Debug)]
pub enum VersionSpec {
    /// Single range (^1.0.0, >=1.0.0, etc.)
    Single(VersionRange),
    /// Space-separated ranges, all must hold (>=1.0.0 <2.0.0)
    And(Vec<VersionSpec>),
    /// ||-separated alternatives, any must hold (^1.0.0 || ^2.0.0)
    Or(Vec<VersionSpec>),
}

impl VersionSpec {
    /// Parse a range expression. Returns None for malformed input.
    pub fn parse(spec: &str) -> Option<Self> {
        let spec = spec.trim();
        if spec.is_empty() {
            return None;
        }

        // || has the lowest precedence
        if spec.contains("||") {
            let alternatives: Option<Vec<VersionSpec>> = spec
                .split("||")
                .map(Self::parse_conjunction)
                .collect();
            return alternatives.map(VersionSpec::Or);
        }

        Self::parse_conjunction(spec)
    }

    /// Parse a spec with no ||: either a single range or a space-separated AND
    fn parse_conjunction(spec: &str) -> Option<Self> {
        let parts = Self::split_conjunction(spec);

        match parts.as_slice() {
            [] => None,
            [single] => VersionRange::parse(single).map(VersionSpec::Single),
            _ => {
                let ranges: Option<Vec<VersionSpec>> = parts
                    .iter()
                    .map(|part| VersionRange::parse(part).map(VersionSpec::Single))
                    .collect();
                ranges.map(VersionSpec::And)
            }
        }
    }

    /// Split on whitespace, keeping hyphen ranges ("a - b") as one part
    fn split_conjunction(spec: &str) -> Vec<String> {
        let tokens: Vec<&str> = spec.split_whitespace().collect();
        let mut parts = Vec::new();
        let mut i = 0;

        while i < tokens.len() {
            if i + 2 < tokens.len() && tokens[i + 1] == "-" {
                parts.push(format!("{} - {}", tokens[i], tokens[i + 2]));
                i += 3;
            } else {
                parts.push(tokens[i].to_string());
                i += 1;
            }
        }

        parts
    }

    /// Check if a version satisfies this spec
    pub fn satisfies(&self, version: &Version) -> bool {
        match self {
            VersionSpec::Single(range) => range.satisfies(version),
            VersionSpec::And(specs) => specs.iter().all(|spec| spec.satisfies(version)),
            VersionSpec::Or(specs) => specs.iter().any(|spec| spec.satisfies(version)),
        }
    }
}

/// A single parsed npm range
#[derive(Debug)]
enum VersionRange {
    Exact(Version),
    /// ^1.2.3 means >=1.2.3 <2.0.0, with special cases below 1.0.0
    Caret(Version),
    /// ~1.2.3 means >=1.2.3 <1.3.0
    Tilde(Version),
    Gte(Version),
    Gt(Version),
    Lte(Version),
    Lt(Version),
    /// * matches all versions
    Any,
    /// 1.x means >=1.0.0 <2.0.0
    WildcardMajor(u64),
    /// 1.2.x means >=1.2.0 <1.3.0
    WildcardMinor(u64, u64),
    /// 1.0.0 - 2.0.0 means >=1.0.0 <=2.0.0
    Hyphen { from: Version, to: Version },
}

impl VersionRange {
    fn parse(spec: &str) -> Option<Self> {
        let spec = spec.trim();

        if let Some((from, to)) = spec.split_once(" - ") {
            let from = parse_version(from.trim())?;
            let to = parse_version(to.trim())?;
            return Some(VersionRange::Hyphen { from, to });
        }

        if let Some(rest) = spec.strip_prefix(">=") {
            parse_version(rest.trim()).map(VersionRange::Gte)
        } else if let Some(rest) = spec.strip_prefix('>') {
            parse_version(rest.trim()).map(VersionRange::Gt)
        } else if let Some(rest) = spec.strip_prefix("<=") {
            parse_version(rest.trim()).map(VersionRange::Lte)
        } else if let Some(rest) = spec.strip_prefix('<') {
            parse_version(rest.trim()).map(VersionRange::Lt)
        } else if let Some(rest) = spec.strip_prefix('^') {
            parse_version(rest.trim()).map(VersionRange::Caret)
        } else if let Some(rest) = spec.strip_prefix('~') {
            parse_version(rest.trim()).map(VersionRange::Tilde)
        } else if let Some(rest) = spec.strip_prefix('=') {
            parse_version(rest.trim()).map(VersionRange::Exact)
        } else if spec == "*" {
            Some(VersionRange::Any)
        } else if let Some(range) = Self::parse_wildcard(spec) {
            Some(range)
        } else {
            parse_version(spec).map(VersionRange::Exact)
        }
    }

    /// Parse wildcard patterns like "1.x" or "1.2.x"
    fn parse_wildcard(spec: &str) -> Option<Self> {
        let parts: Vec<&str> = spec.split('.').collect();

        match parts.as_slice() {
            [major, x] if x.eq_ignore_ascii_case("x") => {
                major.parse::<u64>().ok().map(VersionRange::WildcardMajor)
            }
            [major, minor, x] if x.eq_ignore_ascii_case("x") => {
                let major = major.parse::<u64>().ok()?;
                let minor = minor.parse::<u64>().ok()?;
                Some(VersionRange::WildcardMinor(major, minor))
            }
            _ => None,
        }
    }

    fn satisfies(&self, version: &Version) -> bool {
        match self {
            VersionRange::Exact(v) => version == v,
            VersionRange::Caret(v) => {
                if version < v {
                    return false;
                }
                // ^1.2.3 -> >=1.2.3 <2.0.0
                // ^0.2.3 -> >=0.2.3 <0.3.0
                // ^0.0.3 -> >=0.0.3 <0.0.4
                if v.major == 0 {
                    if v.minor == 0 {
                        version.major == 0 && version.minor == 0 && version.patch == v.patch
                    } else {
                        version.major == 0 && version.minor == v.minor
                    }
                } else {
                    version.major == v.major
                }
            }
            VersionRange::Tilde(v) => {
                version >= v && version.major == v.major && version.minor == v.minor
            }
            VersionRange::Gte(v) => version >= v,
            VersionRange::Gt(v) => version > v,
            VersionRange::Lte(v) => version <= v,
            VersionRange::Lt(v) => version < v,
            VersionRange::Any => true,
            VersionRange::WildcardMajor(major) => version.major == *major,
            VersionRange::WildcardMinor(major, minor) => {
                version.major == *major && version.minor == *minor
            }
            VersionRange::Hyphen { from, to } => version >= from && version <= to,
        }
    }
}
