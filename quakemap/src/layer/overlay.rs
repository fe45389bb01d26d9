//! Overlay layers built from the decoded feeds.

use crate::feature::{EarthquakeDataset, FaultLineDataset};
use crate::layer::Layer;
use crate::primitives::{Polyline, StyledMarker};
use crate::symbol::{EarthquakeSymbol, FaultLineSymbol, Symbol};

/// Name of the earthquake overlay.
pub const EARTHQUAKES_LAYER: &str = "Earthquakes";
/// Name of the plate boundary overlay.
pub const FAULT_LINES_LAYER: &str = "Fault Lines";

/// Primitives of an overlay, in the order of the source features.
#[derive(Debug, Clone, PartialEq)]
pub enum OverlayContent {
    /// Circle markers with popups.
    Markers(Vec<StyledMarker>),
    /// Lines.
    Polylines(Vec<Polyline>),
}

/// Named group of primitives drawn above the base layer.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayLayer {
    name: String,
    content: OverlayContent,
}

impl Layer for OverlayLayer {
    fn name(&self) -> &str {
        &self.name
    }
}

impl OverlayLayer {
    /// Creates an overlay with the given primitives.
    pub fn new(name: impl Into<String>, content: OverlayContent) -> Self {
        Self {
            name: name.into(),
            content,
        }
    }

    /// Creates a marker overlay by rendering every feature with `symbol`.
    pub fn with_markers<'a, F: 'a, S>(
        name: impl Into<String>,
        features: impl IntoIterator<Item = &'a F>,
        symbol: &S,
    ) -> Self
    where
        S: Symbol<F, Primitive = StyledMarker>,
    {
        let markers = features.into_iter().map(|f| symbol.render(f)).collect();
        Self::new(name, OverlayContent::Markers(markers))
    }

    /// Creates a line overlay by rendering every feature with `symbol`.
    pub fn with_polylines<'a, F: 'a, S>(
        name: impl Into<String>,
        features: impl IntoIterator<Item = &'a F>,
        symbol: &S,
    ) -> Self
    where
        S: Symbol<F, Primitive = Polyline>,
    {
        let lines = features.into_iter().map(|f| symbol.render(f)).collect();
        Self::new(name, OverlayContent::Polylines(lines))
    }

    /// Primitives of the layer.
    pub fn content(&self) -> &OverlayContent {
        &self.content
    }

    /// Markers of the layer, empty for line layers.
    pub fn markers(&self) -> &[StyledMarker] {
        match &self.content {
            OverlayContent::Markers(markers) => markers,
            OverlayContent::Polylines(_) => &[],
        }
    }

    /// Lines of the layer, empty for marker layers.
    pub fn polylines(&self) -> &[Polyline] {
        match &self.content {
            OverlayContent::Markers(_) => &[],
            OverlayContent::Polylines(lines) => lines,
        }
    }

    /// Number of primitives in the layer.
    pub fn len(&self) -> usize {
        match &self.content {
            OverlayContent::Markers(markers) => markers.len(),
            OverlayContent::Polylines(lines) => lines.len(),
        }
    }

    /// Returns true if the layer has no primitives.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Builds the "Earthquakes" overlay with one marker per event.
pub fn build_earthquake_layer(dataset: &EarthquakeDataset) -> OverlayLayer {
    OverlayLayer::with_markers(
        EARTHQUAKES_LAYER,
        &dataset.events,
        &EarthquakeSymbol::default(),
    )
}

/// Builds the "Fault Lines" overlay with one line per segment.
pub fn build_fault_line_layer(dataset: &FaultLineDataset) -> OverlayLayer {
    OverlayLayer::with_polylines(
        FAULT_LINES_LAYER,
        &dataset.segments,
        &FaultLineSymbol::default(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feature::{EarthquakeEvent, FaultLineSegment};

    fn event(place: &str, magnitude: f64) -> EarthquakeEvent {
        EarthquakeEvent {
            longitude: 0.0,
            latitude: 0.0,
            magnitude,
            place: place.into(),
            timestamp: 0,
        }
    }

    #[test]
    fn earthquake_layer_keeps_feed_order() {
        let dataset = EarthquakeDataset::from(vec![event("A", 5.5), event("B", 0.2), event("C", 3.0)]);
        let layer = build_earthquake_layer(&dataset);

        assert_eq!(layer.name(), "Earthquakes");
        assert_eq!(layer.len(), 3);
        assert!(layer.polylines().is_empty());
        let places: Vec<_> = layer
            .markers()
            .iter()
            .map(|m| m.popup.split("</h3>").next().unwrap_or_default().to_string())
            .collect();
        assert_eq!(places, ["<h3>A", "<h3>B", "<h3>C"]);
    }

    #[test]
    fn fault_line_layer_has_one_line_per_segment() {
        let dataset = FaultLineDataset::from(vec![
            FaultLineSegment {
                coordinates: vec![[1.0, 2.0], [3.0, 4.0]],
            },
            FaultLineSegment {
                coordinates: vec![[5.0, 6.0]],
            },
        ]);
        let layer = build_fault_line_layer(&dataset);

        assert_eq!(layer.name(), "Fault Lines");
        assert_eq!(layer.polylines().len(), 2);
        assert_eq!(layer.polylines()[1].positions, vec![[5.0, 6.0]]);
        assert!(layer.markers().is_empty());
    }

    #[test]
    fn empty_datasets_give_empty_layers() {
        assert!(build_earthquake_layer(&EarthquakeDataset::default()).is_empty());
        assert!(build_fault_line_layer(&FaultLineDataset::default()).is_empty());
    }
}
