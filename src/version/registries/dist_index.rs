//! Node.js distribution index implementation (`<root>/<channel>/index.json`)

use serde::Deserialize;
use tracing::{debug, warn};

use crate::version::error::RegistryError;
use crate::version::registry::RemoteIndex;

/// Default base URL for the Node.js download server
pub const DEFAULT_BASE_URL: &str = "https://nodejs.org/download";

/// Entry of a channel's `index.json`
#[derive(Debug, Deserialize)]
struct IndexEntry {
    version: String,
}

/// Remote index backed by the distribution server's per-channel JSON files
pub struct DistIndexRegistry {
    client: reqwest::Client,
    base_url: String,
}

impl DistIndexRegistry {
    /// Creates a new DistIndexRegistry with a custom base URL
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("nodeshelf")
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for DistIndexRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait::async_trait]
impl RemoteIndex for DistIndexRegistry {
    async fn versions(&self, channel: &str) -> Result<Vec<String>, RegistryError> {
        let url = format!("{}/{}/index.json", self.base_url, channel);
        debug!("Fetching channel index {}", url);

        let response = self.client.get(&url).send().await?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(RegistryError::NotFound(channel.to_string()));
        }

        if !status.is_success() {
            warn!("Distribution server returned status {}: {}", status, url);
            return Err(RegistryError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        let entries: Vec<IndexEntry> = response.json().await.map_err(|e| {
            warn!("Failed to parse channel index response: {}", e);
            RegistryError::InvalidResponse(e.to_string())
        })?;

        // The server publishes newest first, keep that order
        Ok(entries.into_iter().map(|entry| entry.version).collect())
    }
}
