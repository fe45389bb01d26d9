use quakemap_types::geo::GeoPoint2d;

/// Initial position of the map: the geographic center of the viewport and the zoom level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapView {
    center: GeoPoint2d,
    zoom: u32,
}

impl MapView {
    /// Creates a new view.
    pub fn new(center: GeoPoint2d, zoom: u32) -> Self {
        Self { center, zoom }
    }

    /// Geographic center of the viewport.
    pub fn center(&self) -> GeoPoint2d {
        self.center
    }

    /// Zoom level.
    pub fn zoom(&self) -> u32 {
        self.zoom
    }
}
