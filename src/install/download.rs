//! HTTP download transport

use tracing::{debug, info};

use crate::install::error::InstallError;

/// Fetches checksum manifests and archives from the download server
pub struct Downloader {
    client: reqwest::Client,
}

impl Downloader {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("nodeshelf")
                .build()
                .expect("Failed to create HTTP client"),
        }
    }

    /// Downloads the whole response body into memory
    ///
    /// # Returns
    /// * `Ok(Vec<u8>)` - The response body
    /// * `Err(InstallError::Transport)` - If the server answers with a non-success status
    pub async fn fetch(&self, uri: &str) -> Result<Vec<u8>, InstallError> {
        let response = self.client.get(uri).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(InstallError::Transport {
                status: status.as_u16(),
                uri: uri.to_string(),
            });
        }

        if let Some(length) = response.content_length() {
            debug!("Downloading {} bytes from {}", length, uri);
        }

        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }

    /// Downloads a checksum manifest as text
    pub async fn fetch_checksums(&self, uri: &str) -> Result<String, InstallError> {
        info!("Downloading checksum from \"{}\"...", uri);
        let bytes = self.fetch(uri).await?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Downloads a distribution archive
    pub async fn fetch_archive(&self, uri: &str) -> Result<Vec<u8>, InstallError> {
        info!("Downloading archive from \"{}\"...", uri);
        self.fetch(uri).await
    }
}

impl Default for Downloader {
    fn default() -> Self {
        Self::new()
    }
}
