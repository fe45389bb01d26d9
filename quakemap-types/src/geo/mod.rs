//! Points on the surface of the Earth.

mod point;

pub use point::GeoPoint2d;

/// Point on the surface of a celestial body, given in degrees.
pub trait GeoPoint {
    /// Numeric type used to represent coordinates.
    type Num: Copy;

    /// Latitude in degrees.
    fn lat(&self) -> Self::Num;
    /// Longitude in degrees.
    fn lon(&self) -> Self::Num;

    /// Latitude and longitude as a pair, in this order.
    fn lat_lon(&self) -> [Self::Num; 2] {
        [self.lat(), self.lon()]
    }
}

/// Geo point that can be constructed from latitude and longitude.
pub trait NewGeoPoint<N = f64>: GeoPoint<Num = N> + Sized {
    /// Creates a new point from latitude and longitude (in degrees).
    fn latlon(lat: N, lon: N) -> Self;

    /// Creates a new point from longitude and latitude (in degrees).
    fn lonlat(lon: N, lat: N) -> Self {
        Self::latlon(lat, lon)
    }
}
