//! Symbols convert feed records into renderable [primitives](crate::primitives).

mod fault_line;
mod marker;

pub use fault_line::FaultLineSymbol;
pub use marker::{format_event_time, EarthquakeSymbol};

pub(crate) use marker::escape_html;

use crate::feature::{EarthquakeEvent, FaultLineSegment};
use crate::primitives::{Polyline, StyledMarker};

/// Describes how a feature of type `F` is drawn on the map.
pub trait Symbol<F> {
    /// Primitive produced for one feature.
    type Primitive;

    /// Creates the primitive for the feature.
    fn render(&self, feature: &F) -> Self::Primitive;
}

/// Converts an earthquake into a magnitude styled marker with the default symbol.
pub fn to_marker(event: &EarthquakeEvent) -> StyledMarker {
    EarthquakeSymbol::default().render(event)
}

/// Converts a plate boundary into a line with the default symbol.
pub fn to_polyline(segment: &FaultLineSegment) -> Polyline {
    FaultLineSymbol::default().render(segment)
}
