//! Conversions from [`geojson`] positions.
//!
//! GeoJSON stores positions as `[longitude, latitude, elevation?]`. [`GeoJsonPoint`] exposes such
//! a position through the [`GeoPoint`](crate::GeoPoint) trait, while [`position_pair`] keeps the
//! source order untouched.

mod point;

pub use point::{position_pair, GeoJsonPoint};
