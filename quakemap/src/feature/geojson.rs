use bytes::Bytes;
use geojson::{Feature, GeoJson, JsonValue, Value};
use quakemap_types::geojson::{position_pair, GeoJsonPoint};
use quakemap_types::GeoPoint;

use crate::data_provider::DataDecoder;
use crate::error::QuakeMapError;
use crate::feature::{EarthquakeDataset, EarthquakeEvent, FaultLineDataset, FaultLineSegment};

/// Decodes the USGS earthquake feed.
#[derive(Debug, Default, Clone, Copy)]
pub struct EarthquakeDecoder;

/// Decodes the plate boundaries feed.
#[derive(Debug, Default, Clone, Copy)]
pub struct FaultLineDecoder;

impl DataDecoder for EarthquakeDecoder {
    type Input = Bytes;
    type Output = EarthquakeDataset;

    fn decode(&self, input: Bytes) -> Result<EarthquakeDataset, QuakeMapError> {
        let events = parse_features(&input)?
            .iter()
            .map(EarthquakeEvent::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(events.into())
    }
}

impl DataDecoder for FaultLineDecoder {
    type Input = Bytes;
    type Output = FaultLineDataset;

    fn decode(&self, input: Bytes) -> Result<FaultLineDataset, QuakeMapError> {
        let mut segments = vec![];
        for feature in parse_features(&input)? {
            segments.extend(fault_line_segments(&feature)?);
        }

        Ok(segments.into())
    }
}

fn parse_features(input: &[u8]) -> Result<Vec<Feature>, QuakeMapError> {
    let text = std::str::from_utf8(input)
        .map_err(|err| QuakeMapError::MalformedData(format!("response is not UTF-8: {err}")))?;

    match text.parse::<GeoJson>()? {
        GeoJson::FeatureCollection(collection) => Ok(collection.features),
        GeoJson::Feature(feature) => Ok(vec![feature]),
        GeoJson::Geometry(_) => Err(QuakeMapError::MalformedData(
            "expected a feature collection, got a bare geometry".into(),
        )),
    }
}

fn property<'a>(feature: &'a Feature, name: &str) -> Result<&'a JsonValue, QuakeMapError> {
    feature
        .properties
        .as_ref()
        .and_then(|properties| properties.get(name))
        .ok_or_else(|| QuakeMapError::MalformedData(format!("feature has no `{name}` property")))
}

fn geometry_type(value: &Value) -> &'static str {
    match value {
        Value::Point(_) => "Point",
        Value::MultiPoint(_) => "MultiPoint",
        Value::LineString(_) => "LineString",
        Value::MultiLineString(_) => "MultiLineString",
        Value::Polygon(_) => "Polygon",
        Value::MultiPolygon(_) => "MultiPolygon",
        Value::GeometryCollection(_) => "GeometryCollection",
    }
}

fn malformed_property(name: &str, value: &JsonValue) -> QuakeMapError {
    QuakeMapError::MalformedData(format!("unexpected value of `{name}` property: {value}"))
}

impl TryFrom<&Feature> for EarthquakeEvent {
    type Error = QuakeMapError;

    fn try_from(feature: &Feature) -> Result<Self, Self::Error> {
        let geometry = feature.geometry.as_ref().ok_or_else(|| {
            QuakeMapError::MalformedData("earthquake feature has no geometry".into())
        })?;
        let Value::Point(position) = &geometry.value else {
            return Err(QuakeMapError::MalformedData(format!(
                "earthquake geometry must be a point, got {}",
                geometry_type(&geometry.value)
            )));
        };
        let point = GeoJsonPoint::try_from(position.clone())?;

        let magnitude = match property(feature, "mag")? {
            JsonValue::Null => {
                log::warn!("Earthquake feature without magnitude, using 0");
                0.0
            }
            value => value
                .as_f64()
                .ok_or_else(|| malformed_property("mag", value))?,
        };

        let place = match property(feature, "place")? {
            JsonValue::Null => String::new(),
            JsonValue::String(place) => place.clone(),
            value => return Err(malformed_property("place", value)),
        };

        let time = property(feature, "time")?;
        let timestamp = time.as_i64().ok_or_else(|| malformed_property("time", time))?;

        Ok(Self {
            longitude: point.lon(),
            latitude: point.lat(),
            magnitude,
            place,
            timestamp,
        })
    }
}

fn fault_line_segments(feature: &Feature) -> Result<Vec<FaultLineSegment>, QuakeMapError> {
    let geometry = feature
        .geometry
        .as_ref()
        .ok_or_else(|| QuakeMapError::MalformedData("fault line feature has no geometry".into()))?;

    let lines = match &geometry.value {
        Value::LineString(line) => vec![line],
        Value::MultiLineString(lines) => lines.iter().collect(),
        other => {
            return Err(QuakeMapError::MalformedData(format!(
                "fault line geometry must be a line string, got {}",
                geometry_type(other)
            )))
        }
    };

    lines
        .into_iter()
        .map(|line| {
            let coordinates = line
                .iter()
                .map(position_pair)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(FaultLineSegment { coordinates })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn decode_earthquakes(json: &str) -> Result<EarthquakeDataset, QuakeMapError> {
        EarthquakeDecoder.decode(Bytes::from(json.to_string()))
    }

    fn decode_fault_lines(json: &str) -> Result<FaultLineDataset, QuakeMapError> {
        FaultLineDecoder.decode(Bytes::from(json.to_string()))
    }

    #[test]
    fn decodes_usgs_feature() {
        let dataset = decode_earthquakes(
            r#"{
                "type": "FeatureCollection",
                "metadata": {"count": 1},
                "features": [{
                    "type": "Feature",
                    "properties": {"mag": 3.2, "place": "X", "time": 1700000000000, "tsunami": 0},
                    "geometry": {"type": "Point", "coordinates": [-122.4, 37.8, 5.1]},
                    "id": "nc1"
                }]
            }"#,
        )
        .unwrap();

        assert_eq!(
            dataset.events,
            vec![EarthquakeEvent {
                longitude: -122.4,
                latitude: 37.8,
                magnitude: 3.2,
                place: "X".into(),
                timestamp: 1_700_000_000_000,
            }]
        );
    }

    #[test]
    fn null_magnitude_and_place_are_tolerated() {
        let dataset = decode_earthquakes(
            r#"{"type": "FeatureCollection", "features": [{
                "type": "Feature",
                "properties": {"mag": null, "place": null, "time": 0},
                "geometry": {"type": "Point", "coordinates": [1.0, 2.0]}
            }]}"#,
        )
        .unwrap();

        assert_eq!(dataset.events[0].magnitude, 0.0);
        assert_eq!(dataset.events[0].place, "");
    }

    #[test]
    fn empty_collections_decode_to_empty_datasets() {
        let empty = r#"{"type": "FeatureCollection", "features": []}"#;
        assert!(decode_earthquakes(empty).unwrap().events.is_empty());
        assert!(decode_fault_lines(empty).unwrap().segments.is_empty());
    }

    #[test]
    fn missing_fields_are_malformed() {
        let no_time = r#"{"type": "FeatureCollection", "features": [{
            "type": "Feature",
            "properties": {"mag": 1.0, "place": "X"},
            "geometry": {"type": "Point", "coordinates": [1.0, 2.0]}
        }]}"#;
        assert_matches!(decode_earthquakes(no_time), Err(QuakeMapError::MalformedData(_)));

        let line = r#"{"type": "FeatureCollection", "features": [{
            "type": "Feature",
            "properties": {"mag": 1.0, "place": "X", "time": 0},
            "geometry": {"type": "LineString", "coordinates": [[1.0, 2.0], [3.0, 4.0]]}
        }]}"#;
        assert_matches!(decode_earthquakes(line), Err(QuakeMapError::MalformedData(_)));
    }

    #[test]
    fn invalid_json_is_malformed() {
        assert_matches!(decode_earthquakes("<html>"), Err(QuakeMapError::MalformedData(_)));
        assert_matches!(
            decode_fault_lines(r#"{"type": "Point", "coordinates": [1.0, 2.0]}"#),
            Err(QuakeMapError::MalformedData(_))
        );
    }

    #[test]
    fn fault_line_coordinates_keep_source_order() {
        let dataset = decode_fault_lines(
            r#"{"type": "FeatureCollection", "features": [
                {"type": "Feature", "properties": {"Name": "AF-AN"},
                 "geometry": {"type": "LineString", "coordinates": [[1, 2], [3, 4]]}},
                {"type": "Feature", "properties": null,
                 "geometry": {"type": "MultiLineString", "coordinates": [[[5, 6], [7, 8]], [[9, 10], [11, 12]]]}}
            ]}"#,
        )
        .unwrap();

        assert_eq!(
            dataset.segments,
            vec![
                FaultLineSegment {
                    coordinates: vec![[1.0, 2.0], [3.0, 4.0]]
                },
                FaultLineSegment {
                    coordinates: vec![[5.0, 6.0], [7.0, 8.0]]
                },
                FaultLineSegment {
                    coordinates: vec![[9.0, 10.0], [11.0, 12.0]]
                },
            ]
        );
    }
}
