use async_trait::async_trait;
use bytes::Bytes;
use log::info;

use crate::error::QuakeMapError;
use crate::platform::PlatformService;

/// Loads resources with a `reqwest` client.
///
/// Every call makes exactly one request. No caching, retries or timeouts are applied beyond the
/// client defaults.
#[derive(Debug, Clone)]
pub struct NativePlatformService {
    http_client: reqwest::Client,
}

impl NativePlatformService {
    /// Creates a new service with its own HTTP client.
    pub fn new() -> Result<Self, QuakeMapError> {
        let http_client = reqwest::Client::builder()
            .user_agent(concat!("quakemap/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http_client })
    }
}

#[async_trait]
impl PlatformService for NativePlatformService {
    async fn load_bytes_from_url(&self, url: &str) -> Result<Bytes, QuakeMapError> {
        let response = self.http_client.get(url).send().await?;
        if !response.status().is_success() {
            let status = response.status();
            info!("Failed to load {url}: {status}, {:?}", response.text().await);
            return Err(QuakeMapError::Network(format!(
                "{url} responded with status {status}"
            )));
        }

        Ok(response.bytes().await?)
    }
}
