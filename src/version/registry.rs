//! Remote channel index trait for looking up published versions

#[cfg(test)]
use mockall::automock;

use crate::version::error::RegistryError;

/// Source of published versions, partitioned by channel
///
/// Resolution without an index is a distinct offline mode, so callers pass
/// `Option<&dyn RemoteIndex>` rather than a stub implementation.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait RemoteIndex: Send + Sync {
    /// Fetches every published version of a channel
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Versions in index order, newest first
    /// * `Err(RegistryError)` - If the fetch fails
    async fn versions(&self, channel: &str) -> Result<Vec<String>, RegistryError>;

    /// Returns the newest published version of a channel, if any
    async fn latest(&self, channel: &str) -> Result<Option<String>, RegistryError> {
        Ok(self.versions(channel).await?.into_iter().next())
    }
}
