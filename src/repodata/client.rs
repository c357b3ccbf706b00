// src/repodata/client.rs

//! HTTP client for repository metadata
//!
//! Thin wrapper around a blocking reqwest client. Each request is a single
//! attempt: a failed address contributes nothing to the run and the caller
//! moves on, so there is no retry loop here.

use crate::error::{Error, Result};
use crate::repodata::{primary, repomd, PrimarySource};
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Default timeout for HTTP requests (30 seconds)
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Fixed relative path of the repomd index within a repository
pub const REPOMD_PATH: &str = "repodata/repomd.xml";

/// Blocking HTTP client for repodata fetches
pub struct RepodataClient {
    client: Client,
}

impl RepodataClient {
    /// Create a client with the given per-request timeout
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Download(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client })
    }

    /// Fetch a URL to bytes, treating any non-2xx status as an error
    pub fn get(&self, url: &Url) -> Result<Vec<u8>> {
        debug!("Fetching {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| Error::Download(format!("Failed to fetch {url}: {e}")))?;

        if !response.status().is_success() {
            return Err(Error::Download(format!(
                "HTTP {} from {}",
                response.status(),
                url
            )));
        }

        let bytes = response
            .bytes()
            .map_err(|e| Error::Download(format!("Failed to read response from {url}: {e}")))?;

        Ok(bytes.to_vec())
    }
}

impl PrimarySource for RepodataClient {
    fn locate_primary(&self, base: &str) -> Result<Option<String>> {
        let url = Url::parse(base)?.join(REPOMD_PATH)?;
        let body = self.get(&url)?;
        repomd::find_primary_href(&body)
    }

    fn fetch_primary(&self, base: &str, href: &str) -> Result<Vec<u8>> {
        let url = Url::parse(base)?.join(href)?;
        let compressed = self.get(&url)?;
        primary::decompress_gzip(&compressed)
    }
}
