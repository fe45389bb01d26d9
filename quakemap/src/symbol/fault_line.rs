use crate::feature::FaultLineSegment;
use crate::primitives::Polyline;
use crate::symbol::Symbol;
use crate::Color;

/// Renders a plate boundary as a line of fixed width.
///
/// Coordinates are taken from the segment as they are, without reordering.
#[derive(Debug, Copy, Clone)]
pub struct FaultLineSymbol {
    /// Color of the line.
    pub color: Color,
    /// Width of the line in pixels.
    pub width: f64,
}

impl Default for FaultLineSymbol {
    fn default() -> Self {
        Self::new(Color::BLUE, 2.0)
    }
}

impl FaultLineSymbol {
    /// Creates a new instance.
    pub fn new(color: Color, width: f64) -> Self {
        Self { color, width }
    }
}

impl Symbol<FaultLineSegment> for FaultLineSymbol {
    type Primitive = Polyline;

    fn render(&self, segment: &FaultLineSegment) -> Polyline {
        Polyline {
            positions: segment.coordinates.clone(),
            color: self.color,
            weight: self.width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::to_polyline;

    #[test]
    fn polyline_uses_coordinates_verbatim() {
        let segment = FaultLineSegment {
            coordinates: vec![[1.0, 2.0], [3.0, 4.0]],
        };
        let polyline = to_polyline(&segment);

        assert_eq!(polyline.positions, vec![[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(polyline.color, Color::BLUE);
        assert_eq!(polyline.weight, 2.0);
    }

    #[test]
    fn empty_segment_gives_empty_line() {
        let polyline = to_polyline(&FaultLineSegment {
            coordinates: vec![],
        });
        assert!(polyline.positions.is_empty());
    }
}
