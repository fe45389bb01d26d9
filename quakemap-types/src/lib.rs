//! Geographic primitives shared by the `quakemap` crates.
//!
//! The crate is intentionally small: a [`GeoPoint`] abstraction with one concrete
//! implementation ([`geo::GeoPoint2d`]) and conversions from GeoJSON positions, which store
//! coordinates in `[longitude, latitude]` order.

pub mod error;
pub mod geo;
#[cfg(feature = "geojson")]
pub mod geojson;

pub use geo::{GeoPoint, NewGeoPoint};
