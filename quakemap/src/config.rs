//! Process-wide configuration resolved once at startup.

use std::fmt;

use crate::error::QuakeMapError;

/// USGS feed with all earthquakes of the past day.
pub const DEFAULT_EARTHQUAKE_URL: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_day.geojson";

/// PB2002 plate boundaries as GeoJSON line strings.
pub const DEFAULT_FAULT_LINE_URL: &str =
    "https://raw.githubusercontent.com/fraxen/tectonicplates/master/GeoJSON/PB2002_boundaries.json";

/// Environment variables checked for the tile service token, in order.
pub const ACCESS_TOKEN_ENV_VARS: [&str; 2] = ["MAPBOX_ACCESS_TOKEN", "API_KEY"];

/// Access token of the tile service.
///
/// The token is never printed by the `Debug` implementation.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a token, rejecting empty or whitespace-only values.
    pub fn new(token: impl Into<String>) -> Result<Self, QuakeMapError> {
        let token = token.into();
        let trimmed = token.trim();
        if trimmed.is_empty() {
            return Err(QuakeMapError::Configuration(
                "tile service access token is empty".into(),
            ));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Reads the token from the first set variable of [`ACCESS_TOKEN_ENV_VARS`].
    pub fn from_env() -> Result<Self, QuakeMapError> {
        ACCESS_TOKEN_ENV_VARS
            .iter()
            .find_map(|name| std::env::var(name).ok())
            .ok_or_else(|| {
                QuakeMapError::Configuration(format!(
                    "tile service access token is not set (expected one of {})",
                    ACCESS_TOKEN_ENV_VARS.join(", ")
                ))
            })
            .and_then(Self::new)
    }

    /// Raw token value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(***)")
    }
}

/// Locations of the data feeds and the tile service credential.
///
/// The token is optional. Without it the base layers have no imagery, but the feeds are still
/// loaded and the overlays are drawn.
#[derive(Debug, Clone)]
pub struct MapConfig {
    /// GeoJSON feed with earthquake points.
    pub earthquake_url: String,
    /// GeoJSON feed with plate boundary lines.
    pub fault_line_url: String,
    /// Tile service token.
    pub access_token: Option<AccessToken>,
}

impl MapConfig {
    /// Creates a configuration with the default feeds.
    pub fn new(access_token: Option<AccessToken>) -> Self {
        Self {
            earthquake_url: DEFAULT_EARTHQUAKE_URL.to_string(),
            fault_line_url: DEFAULT_FAULT_LINE_URL.to_string(),
            access_token,
        }
    }

    /// Creates a configuration with the default feeds and the token taken from the environment.
    ///
    /// A missing or blank token is logged and the configuration is created without it.
    pub fn from_env() -> Self {
        Self::new(resolve_token(AccessToken::from_env()))
    }

    /// Replaces the earthquake feed url.
    pub fn with_earthquake_url(mut self, url: impl Into<String>) -> Self {
        self.earthquake_url = url.into();
        self
    }

    /// Replaces the plate boundary feed url.
    pub fn with_fault_line_url(mut self, url: impl Into<String>) -> Self {
        self.fault_line_url = url.into();
        self
    }
}

/// Turns a failed token lookup into a logged warning, so that only the base layer tiles are
/// affected by it.
pub fn resolve_token(token: Result<AccessToken, QuakeMapError>) -> Option<AccessToken> {
    match token {
        Ok(token) => Some(token),
        Err(err) => {
            log::warn!("{err}. Base layers will be rendered without tiles");
            None
        }
    }
}
