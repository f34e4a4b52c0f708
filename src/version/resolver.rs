//! Version spec resolution
//!
//! Turns user input such as `8`, `v8.1`, `rc/v8.0.0-rc.2` or `nightly/latest`
//! into a canonical [`VersionId`]. Only the `latest` keyword touches the
//! remote index; every other spec is a pure string transformation.

use regex::Regex;
use tracing::debug;

use crate::version::error::ResolveError;
use crate::version::identifier::{DEFAULT_CHANNEL, FULL_KEY_SEPARATOR, VersionId};
use crate::version::registry::RemoteIndex;

const LATEST_KEYWORD: &str = "latest";

pub struct VersionResolver {
    /// `8` -> `v8.0.0`
    major_re: Regex,
    /// `8.1` -> `v8.1.0`
    minor_re: Regex,
    /// `8.1.2` -> `v8.1.2`
    patch_re: Regex,
}

impl VersionResolver {
    pub fn new() -> Self {
        Self {
            major_re: Regex::new(r"^\d+$").unwrap(),
            minor_re: Regex::new(r"^\d+\.\d+$").unwrap(),
            patch_re: Regex::new(r"^\d+\.\d+\.\d+$").unwrap(),
        }
    }

    /// Resolves a raw version spec into a canonical identifier
    ///
    /// # Arguments
    /// * `spec` - User input, optionally prefixed with `<channel>/`
    /// * `index` - Remote index consulted for the `latest` keyword; `None` resolves offline
    pub async fn resolve(
        &self,
        spec: &str,
        index: Option<&dyn RemoteIndex>,
    ) -> Result<VersionId, ResolveError> {
        if spec.is_empty() {
            return Err(ResolveError::InvalidSpec("empty version spec".to_string()));
        }

        let (channel, version) = spec.split_once('/').unwrap_or((DEFAULT_CHANNEL, spec));

        if channel.is_empty() {
            return Err(ResolveError::InvalidSpec(format!(
                "missing channel in \"{}\"",
                spec
            )));
        }

        let resolved = match index {
            Some(index) if version == LATEST_KEYWORD => {
                Self::resolve_latest(channel, index).await?
            }
            _ => self.parse_version(channel, version)?,
        };

        check_separator(&resolved)?;
        debug!("Resolved \"{}\" to {}", spec, resolved.full);

        Ok(resolved)
    }

    async fn resolve_latest(
        channel: &str,
        index: &dyn RemoteIndex,
    ) -> Result<VersionId, ResolveError> {
        let latest = index.latest(channel).await.map_err(|e| {
            ResolveError::RemoteResolutionFailed {
                channel: channel.to_string(),
                reason: e.to_string(),
            }
        })?;

        match latest {
            Some(version) => Ok(VersionId::new(channel, &version)),
            None => Err(ResolveError::RemoteResolutionFailed {
                channel: channel.to_string(),
                reason: "the channel has no published versions".to_string(),
            }),
        }
    }

    fn parse_version(&self, channel: &str, version: &str) -> Result<VersionId, ResolveError> {
        // Pre-release and build qualifiers are opaque, keep them verbatim
        if version.len() > 1 && version.contains('-') {
            return Ok(VersionId::new(channel, version));
        }

        let bare = version.strip_prefix('v').unwrap_or(version);

        let canonical = if self.major_re.is_match(bare) {
            format!("v{}.0.0", bare)
        } else if self.minor_re.is_match(bare) {
            format!("v{}.0", bare)
        } else if self.patch_re.is_match(bare) {
            format!("v{}", bare)
        } else {
            return Err(ResolveError::InvalidSpec(format!(
                "unable to resolve \"{}/{}\" into a valid version, use the \"vX.Y.Z\" scheme",
                channel, version
            )));
        };

        Ok(VersionId::new(channel, &canonical))
    }
}

impl Default for VersionResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Rejects identifiers whose full key would not be a single path segment that
/// splits back into the same parts
fn check_separator(id: &VersionId) -> Result<(), ResolveError> {
    for part in [&id.channel, &id.version] {
        if part.contains(FULL_KEY_SEPARATOR) {
            return Err(ResolveError::InvalidSpec(format!(
                "\"{}\" must not contain \"{}\"",
                id.human, FULL_KEY_SEPARATOR
            )));
        }
        if part.contains(['/', '\\']) {
            return Err(ResolveError::InvalidSpec(format!(
                "\"{}\" must not contain path separators",
                id.human
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::error::RegistryError;
    use crate::version::registry::MockRemoteIndex;
    use rstest::rstest;

    fn index_with_latest(latest: &'static str) -> MockRemoteIndex {
        let mut index = MockRemoteIndex::new();
        index
            .expect_latest()
            .returning(move |_| Ok(Some(latest.to_string())));
        index.expect_versions().never();
        index
    }

    fn failing_index() -> MockRemoteIndex {
        let mut index = MockRemoteIndex::new();
        index
            .expect_latest()
            .returning(|_| Err(RegistryError::InvalidResponse("Invalid version".to_string())));
        index.expect_versions().never();
        index
    }

    #[rstest]
    #[case("v8", "release", "v8.0.0")]
    #[case("v8.0", "release", "v8.0.0")]
    #[case("v8.0.0", "release", "v8.0.0")]
    #[case("8", "release", "v8.0.0")]
    #[case("8.0", "release", "v8.0.0")]
    #[case("8.0.0", "release", "v8.0.0")]
    #[case("8.1", "release", "v8.1.0")]
    #[case("10.24.1", "release", "v10.24.1")]
    #[case("release/v8", "release", "v8.0.0")]
    #[case("release/v8.0", "release", "v8.0.0")]
    #[case("release/8.0.0", "release", "v8.0.0")]
    #[case("channel/8", "channel", "v8.0.0")]
    #[case(
        "nightly/v9.0.0-nightly20170607eef94a8bf8",
        "nightly",
        "v9.0.0-nightly20170607eef94a8bf8"
    )]
    #[case(
        "chakracore-nightly/v9.0.0-nightly2017060890e0c543ce",
        "chakracore-nightly",
        "v9.0.0-nightly2017060890e0c543ce"
    )]
    #[case("rc/v8.0.0-rc.2", "rc", "v8.0.0-rc.2")]
    #[case("rc/8.0.0-rc.2", "rc", "8.0.0-rc.2")]
    #[case("release/latest", "release", "v42.42.42")]
    #[case("latest", "release", "v42.42.42")]
    #[tokio::test]
    async fn resolve_returns_canonical_identifier(
        #[case] spec: &str,
        #[case] channel: &str,
        #[case] version: &str,
    ) {
        let index = index_with_latest("v42.42.42");
        let resolver = VersionResolver::new();

        let result = resolver.resolve(spec, Some(&index)).await.unwrap();

        assert_eq!(result.channel, channel);
        assert_eq!(result.version, version);
        assert_eq!(result.full, format!("{}--{}", channel, version));
        assert_eq!(result.human, format!("{}/{}", channel, version));
        assert_eq!(result.path, None);
    }

    #[rstest]
    #[case("8")]
    #[case("v8.1")]
    #[case("rc/v8.0.0-rc.2")]
    #[tokio::test]
    async fn resolve_without_index_matches_resolve_with_index(#[case] spec: &str) {
        let index = index_with_latest("v42.42.42");
        let resolver = VersionResolver::new();

        let offline = resolver.resolve(spec, None).await.unwrap();
        let online = resolver.resolve(spec, Some(&index)).await.unwrap();

        assert_eq!(offline, online);
    }

    #[tokio::test]
    async fn resolve_latest_uses_channel_from_spec() {
        let mut index = MockRemoteIndex::new();
        index
            .expect_latest()
            .withf(|channel| channel == "channel")
            .times(1)
            .returning(|_| Ok(Some("v1.2.3".to_string())));
        index.expect_versions().never();

        let result = VersionResolver::new()
            .resolve("channel/latest", Some(&index))
            .await
            .unwrap();

        assert_eq!(result.channel, "channel");
        assert_eq!(result.version, "v1.2.3");
        assert_eq!(result.full, "channel--v1.2.3");
        assert_eq!(result.human, "channel/v1.2.3");
    }

    #[rstest]
    #[case("")]
    #[case("notaversion")]
    #[case("a42")]
    #[case("v")]
    #[case("-")]
    #[case("8.1.2.3")]
    #[case("/8")]
    #[case("rc/v8.0.0--rc.2")]
    #[case("my--channel/8")]
    #[case("rc/a/b-c")]
    #[case("rc/v8.0.0-rc.2\\..\\x")]
    #[tokio::test]
    async fn resolve_rejects_invalid_spec(#[case] spec: &str) {
        let index = failing_index();

        let result = VersionResolver::new().resolve(spec, Some(&index)).await;

        assert!(matches!(result, Err(ResolveError::InvalidSpec(_))));
    }

    #[tokio::test]
    async fn resolve_latest_without_index_is_invalid_spec() {
        let result = VersionResolver::new().resolve("release/latest", None).await;

        assert!(matches!(result, Err(ResolveError::InvalidSpec(_))));
    }

    #[tokio::test]
    async fn resolve_latest_fails_when_index_errors() {
        let index = failing_index();

        let result = VersionResolver::new()
            .resolve("nightly2/latest", Some(&index))
            .await;

        assert!(matches!(
            result,
            Err(ResolveError::RemoteResolutionFailed { ref channel, .. }) if channel == "nightly2"
        ));
    }

    #[tokio::test]
    async fn resolve_latest_rejects_path_like_index_version() {
        let index = index_with_latest("v9.0.0-nightly/../../etc");

        let result = VersionResolver::new()
            .resolve("nightly/latest", Some(&index))
            .await;

        assert!(matches!(result, Err(ResolveError::InvalidSpec(_))));
    }

    #[tokio::test]
    async fn resolve_latest_fails_when_channel_is_empty() {
        let mut index = MockRemoteIndex::new();
        index.expect_latest().returning(|_| Ok(None));
        index.expect_versions().never();

        let result = VersionResolver::new().resolve("x/latest", Some(&index)).await;

        assert!(matches!(
            result,
            Err(ResolveError::RemoteResolutionFailed { .. })
        ));
    }
}
