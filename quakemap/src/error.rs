//! Error types used by the crate.

use quakemap_types::error::QuakemapTypesError;
use thiserror::Error;

/// Quakemap error type.
///
/// None of the variants is retried internally. A failure while fetching or decoding a feed ends
/// the pipeline, a configuration error only affects base layer tiles.
#[derive(Debug, Error)]
pub enum QuakeMapError {
    /// A request did not complete or the server answered with an error status.
    #[error("network failure: {0}")]
    Network(String),
    /// The response is not valid GeoJSON or lacks expected fields.
    #[error("malformed data: {0}")]
    MalformedData(String),
    /// Missing or invalid configuration value, e.g. the tile service access token.
    #[error("configuration error: {0}")]
    Configuration(String),
    /// The map could not be converted into the output format.
    #[error("render error: {0}")]
    Render(String),
    /// Error reading/writing data to the FS.
    #[error("failed to write file")]
    FsIo(#[from] std::io::Error),
}

impl From<reqwest::Error> for QuakeMapError {
    fn from(value: reqwest::Error) -> Self {
        Self::Network(value.to_string())
    }
}

impl From<geojson::Error> for QuakeMapError {
    fn from(value: geojson::Error) -> Self {
        Self::MalformedData(value.to_string())
    }
}

impl From<QuakemapTypesError> for QuakeMapError {
    fn from(value: QuakemapTypesError) -> Self {
        Self::MalformedData(value.to_string())
    }
}

impl From<serde_json::Error> for QuakeMapError {
    fn from(value: serde_json::Error) -> Self {
        Self::Render(value.to_string())
    }
}
