use geojson::Position;

use crate::error::QuakemapTypesError;
use crate::geo::{GeoPoint, NewGeoPoint};

/// A GeoJSON position viewed as a geographic point.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoJsonPoint(Position);

impl TryFrom<Position> for GeoJsonPoint {
    type Error = QuakemapTypesError;

    fn try_from(value: Position) -> Result<Self, Self::Error> {
        if value.len() < 2 {
            Err(QuakemapTypesError::Conversion(
                "point must contain at least 2 dimensions".to_string(),
            ))
        } else {
            Ok(GeoJsonPoint(value))
        }
    }
}

impl GeoPoint for GeoJsonPoint {
    type Num = f64;

    fn lat(&self) -> f64 {
        self.0[1]
    }

    fn lon(&self) -> f64 {
        self.0[0]
    }
}

impl NewGeoPoint for GeoJsonPoint {
    fn latlon(lat: f64, lon: f64) -> Self {
        Self(vec![lon, lat])
    }
}

impl GeoJsonPoint {
    /// Third coordinate of the position, if present.
    pub fn elevation(&self) -> Option<f64> {
        self.0.get(2).copied()
    }
}

/// Returns the first two coordinates of the position in the order they are stored.
pub fn position_pair(position: &Position) -> Result<[f64; 2], QuakemapTypesError> {
    match position.as_slice() {
        [first, second, ..] => Ok([*first, *second]),
        _ => Err(QuakemapTypesError::Conversion(
            "position must contain at least 2 coordinates".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_lon_lat_order() {
        let point = GeoJsonPoint::try_from(vec![-122.4, 37.8, 10.0]).unwrap();
        assert_eq!(point.lon(), -122.4);
        assert_eq!(point.lat(), 37.8);
        assert_eq!(point.elevation(), Some(10.0));
    }

    #[test]
    fn rejects_short_positions() {
        assert!(GeoJsonPoint::try_from(vec![1.0]).is_err());
        assert!(position_pair(&vec![]).is_err());
    }

    #[test]
    fn position_pair_keeps_order() {
        assert_eq!(position_pair(&vec![1.0, 2.0, 3.0]).unwrap(), [1.0, 2.0]);
    }
}
