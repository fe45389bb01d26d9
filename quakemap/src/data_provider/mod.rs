//! Loading of the two data feeds.

use bytes::Bytes;

use crate::error::QuakeMapError;
use crate::feature::{EarthquakeDataset, EarthquakeDecoder, FaultLineDataset, FaultLineDecoder};
use crate::platform::PlatformService;

/// Converts raw data into a decoded value.
pub trait DataDecoder {
    /// Raw data type.
    type Input;
    /// Decoded data type.
    type Output;

    /// Decodes the data.
    fn decode(&self, input: Self::Input) -> Result<Self::Output, QuakeMapError>;
}

/// Loads the document at `url` and decodes it with `decoder`. Single attempt, no retries.
pub async fn load_url<S, D>(service: &S, url: &str, decoder: &D) -> Result<D::Output, QuakeMapError>
where
    S: PlatformService + ?Sized,
    D: DataDecoder<Input = Bytes>,
{
    log::info!("Loading {url}");
    let bytes = service.load_bytes_from_url(url).await?;
    decoder.decode(bytes)
}

/// Loads the earthquake feed and then the plate boundary feed.
///
/// The second request is issued only after the first one has been loaded and decoded, so a
/// failure of the earthquake feed means the plate boundary feed is never requested.
pub async fn fetch_datasets<S>(
    service: &S,
    earthquake_url: &str,
    fault_line_url: &str,
) -> Result<(EarthquakeDataset, FaultLineDataset), QuakeMapError>
where
    S: PlatformService + ?Sized,
{
    let earthquakes = load_url(service, earthquake_url, &EarthquakeDecoder).await?;
    log::debug!("Loaded {} earthquakes", earthquakes.events.len());

    let fault_lines = load_url(service, fault_line_url, &FaultLineDecoder).await?;
    log::debug!("Loaded {} fault line segments", fault_lines.segments.len());

    Ok((earthquakes, fault_lines))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::tests::StaticPlatformService;

    const QUAKES: &str = r#"{"type": "FeatureCollection", "features": [{
        "type": "Feature",
        "properties": {"mag": 4.5, "place": "Q", "time": 0},
        "geometry": {"type": "Point", "coordinates": [10.0, 20.0, 3.0]}
    }]}"#;
    const FAULTS: &str = r#"{"type": "FeatureCollection", "features": [{
        "type": "Feature", "properties": {},
        "geometry": {"type": "LineString", "coordinates": [[1, 2], [3, 4]]}
    }]}"#;

    #[test]
    fn fetches_earthquakes_first() {
        let service = StaticPlatformService::default()
            .with_response("quakes", QUAKES)
            .with_response("faults", FAULTS);

        let (earthquakes, fault_lines) =
            tokio_test::block_on(fetch_datasets(&service, "quakes", "faults")).unwrap();

        assert_eq!(earthquakes.events.len(), 1);
        assert_eq!(fault_lines.segments.len(), 1);
        assert_eq!(service.requests(), ["quakes", "faults"]);
    }

    #[test]
    fn earthquake_failure_skips_fault_lines() {
        let service = StaticPlatformService::default().with_response("faults", FAULTS);

        let result = tokio_test::block_on(fetch_datasets(&service, "quakes", "faults"));

        assert_matches!(result, Err(QuakeMapError::Network(_)));
        assert_eq!(service.requests(), ["quakes"]);
    }

    #[test]
    fn malformed_earthquakes_skip_fault_lines() {
        let service = StaticPlatformService::default()
            .with_response("quakes", "not json")
            .with_response("faults", FAULTS);

        let result = tokio_test::block_on(fetch_datasets(&service, "quakes", "faults"));

        assert_matches!(result, Err(QuakeMapError::MalformedData(_)));
        assert_eq!(service.requests(), ["quakes"]);
    }

    #[test]
    fn fault_line_failure_is_reported() {
        let service = StaticPlatformService::default().with_response("quakes", QUAKES);

        let result = tokio_test::block_on(fetch_datasets(&service, "quakes", "faults"));

        assert_matches!(result, Err(QuakeMapError::Network(_)));
        assert_eq!(service.requests(), ["quakes", "faults"]);
    }
}
