//! Records of the two data feeds.
//!
//! Both feeds are GeoJSON feature collections. [`EarthquakeDataset`] and [`FaultLineDataset`]
//! keep the features in the order they appear in the source document.

mod geojson;

pub use self::geojson::{EarthquakeDecoder, FaultLineDecoder};

/// One event of the earthquake feed.
#[derive(Debug, Clone, PartialEq)]
pub struct EarthquakeEvent {
    /// Longitude of the epicenter in degrees.
    pub longitude: f64,
    /// Latitude of the epicenter in degrees.
    pub latitude: f64,
    /// Magnitude of the event.
    pub magnitude: f64,
    /// Human readable location description.
    pub place: String,
    /// Time of the event, milliseconds since the Unix epoch.
    pub timestamp: i64,
}

/// One plate boundary line of the fault line feed.
#[derive(Debug, Clone, PartialEq)]
pub struct FaultLineSegment {
    /// Coordinate pairs exactly as stored in the source: `[longitude, latitude]`.
    pub coordinates: Vec<[f64; 2]>,
}

/// Decoded earthquake feed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EarthquakeDataset {
    /// Events in feed order.
    pub events: Vec<EarthquakeEvent>,
}

/// Decoded plate boundary feed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FaultLineDataset {
    /// Segments in feed order.
    pub segments: Vec<FaultLineSegment>,
}

impl From<Vec<EarthquakeEvent>> for EarthquakeDataset {
    fn from(events: Vec<EarthquakeEvent>) -> Self {
        Self { events }
    }
}

impl From<Vec<FaultLineSegment>> for FaultLineDataset {
    fn from(segments: Vec<FaultLineSegment>) -> Self {
        Self { segments }
    }
}
