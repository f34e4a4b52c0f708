//! Semantic ordering of version identifiers
//!
//! The store lists versions in plain lexicographic order of their full keys,
//! which puts `v10.0.0` before `v9.0.0`. These helpers give callers an explicit
//! semantic ordering when they ask for it.

use std::cmp::Ordering;

use semver::Version;

use crate::version::identifier::VersionId;

/// Parse a version string into a semver::Version, normalizing partial versions.
///
/// Strips a leading `v` and pads partial versions with zeros.
///
/// Examples:
/// - "v8" -> Version(8, 0, 0)
/// - "8.1" -> Version(8, 1, 0)
/// - "v9.0.0-nightly20170607eef94a8bf8" -> Version(9, 0, 0, pre: nightly20170607eef94a8bf8)
pub fn parse_version(version: &str) -> Option<Version> {
    let version = version.strip_prefix('v').unwrap_or(version);
    let (core, suffix) = match version.find(['-', '+']) {
        Some(pos) => version.split_at(pos),
        None => (version, ""),
    };
    let parts: Vec<&str> = core.split('.').collect();
    let normalized = match parts.len() {
        1 => format!("{}.0.0{}", parts[0], suffix),
        2 => format!("{}.{}.0{}", parts[0], parts[1], suffix),
        _ => version.to_string(),
    };
    Version::parse(&normalized).ok()
}

/// Compare two identifiers by channel, then by semantic version
///
/// Versions that do not parse sort below every parseable version and fall
/// back to string comparison among themselves.
pub fn compare_identifiers(a: &VersionId, b: &VersionId) -> Ordering {
    a.channel
        .cmp(&b.channel)
        .then_with(|| match (parse_version(&a.version), parse_version(&b.version)) {
            (Some(va), Some(vb)) => va.cmp(&vb),
            (Some(_), None) => Ordering::Greater,
            (None, Some(_)) => Ordering::Less,
            (None, None) => a.version.cmp(&b.version),
        })
}

/// Sort identifiers newest first using semantic ordering
pub fn sort_semver_desc(ids: &mut [VersionId]) {
    ids.sort_by(|a, b| compare_identifiers(b, a));
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("v8", Some(Version::new(8, 0, 0)))]
    #[case("8.1", Some(Version::new(8, 1, 0)))]
    #[case("v10.24.1", Some(Version::new(10, 24, 1)))]
    #[case("v8.0.0-rc.2", Version::parse("8.0.0-rc.2").ok())]
    #[case("v9-nightly2017", Version::parse("9.0.0-nightly2017").ok())]
    #[case("notaversion", None)]
    fn test_parse_version(#[case] input: &str, #[case] expected: Option<Version>) {
        assert_eq!(parse_version(input), expected);
    }

    #[test]
    fn sort_semver_desc_orders_double_digit_majors_correctly() {
        let mut ids = vec![
            VersionId::new("release", "v9.0.0"),
            VersionId::new("release", "v10.0.0"),
            VersionId::new("release", "v8.11.3"),
        ];

        sort_semver_desc(&mut ids);

        let versions: Vec<&str> = ids.iter().map(|id| id.version.as_str()).collect();
        assert_eq!(versions, vec!["v10.0.0", "v9.0.0", "v8.11.3"]);
    }

    #[test]
    fn compare_identifiers_puts_prerelease_below_release() {
        let rc = VersionId::new("release", "v8.0.0-rc.2");
        let release = VersionId::new("release", "v8.0.0");

        assert_eq!(compare_identifiers(&rc, &release), Ordering::Less);
    }

    #[test]
    fn compare_identifiers_groups_by_channel_first() {
        let nightly = VersionId::new("nightly", "v99.0.0");
        let release = VersionId::new("release", "v1.0.0");

        assert_eq!(compare_identifiers(&nightly, &release), Ordering::Less);
    }
}
