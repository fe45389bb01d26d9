//! Provides platform specific logic and [`PlatformService`] to access it.

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::QuakeMapError;

/// Native implementation based on `reqwest`.
pub mod native;

/// Service providing access to remote resources.
#[async_trait]
pub trait PlatformService: Send + Sync {
    /// Loads a byte array from the given url.
    async fn load_bytes_from_url(&self, url: &str) -> Result<Bytes, QuakeMapError>;
}

/// Default implementation of the [`PlatformService`].
pub type PlatformServiceImpl = native::NativePlatformService;
