//! Map primitives produced from feed records.

use quakemap_types::geo::GeoPoint2d;

use crate::Color;

/// Circle marker of an earthquake with a popup bound to it.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledMarker {
    /// Marker center.
    pub position: GeoPoint2d,
    /// Stroke color.
    pub color: Color,
    /// Fill color.
    pub fill_color: Color,
    /// Fill opacity in `0.0..=1.0`.
    pub fill_opacity: f64,
    /// Radius in pixels. Can be zero or negative for non-positive magnitudes.
    pub radius: f64,
    /// HTML fragment shown when the marker is clicked.
    pub popup: String,
}

/// Line drawn through a sequence of coordinate pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    /// Coordinate pairs in the order of the source data.
    pub positions: Vec<[f64; 2]>,
    /// Stroke color.
    pub color: Color,
    /// Stroke width in pixels.
    pub weight: f64,
}
