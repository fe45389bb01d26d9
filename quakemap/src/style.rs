//! Magnitude based styling of earthquake markers and the legend that explains it.

use crate::Color;

/// Lower bounds of the magnitude buckets.
const BUCKET_LOWER_BOUNDS: [u8; 6] = [0, 1, 2, 3, 4, 5];

/// Color of an earthquake marker with the given magnitude.
///
/// Bucket boundaries are exclusive lower bounds: `5.0` is still orange, `5.1` is red. Values of
/// `1.0` and below (including negative values and NaN) fall into the lowest bucket.
pub fn color_for_magnitude(magnitude: f64) -> Color {
    if magnitude > 5.0 {
        Color::RED
    } else if magnitude > 4.0 {
        Color::ORANGE
    } else if magnitude > 3.0 {
        Color::GOLD
    } else if magnitude > 2.0 {
        Color::YELLOW
    } else if magnitude > 1.0 {
        Color::YELLOW_GREEN
    } else {
        Color::GREEN_YELLOW
    }
}

/// Radius of an earthquake marker in pixels.
///
/// Zero and negative magnitudes produce degenerate radii, which are passed through as is.
pub fn radius_for_magnitude(magnitude: f64) -> f64 {
    magnitude * 4.0
}

/// One of the six fixed magnitude ranges shown in the legend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MagnitudeBucket {
    lower_bound: u8,
    upper_bound: Option<u8>,
}

impl MagnitudeBucket {
    /// All buckets in ascending order: `0–1`, `1–2`, `2–3`, `3–4`, `4–5`, `5+`.
    pub fn all() -> impl Iterator<Item = MagnitudeBucket> {
        BUCKET_LOWER_BOUNDS
            .iter()
            .enumerate()
            .map(|(index, &lower_bound)| MagnitudeBucket {
                lower_bound,
                upper_bound: BUCKET_LOWER_BOUNDS.get(index + 1).copied(),
            })
    }

    /// Lower bound of the bucket.
    pub fn lower_bound(&self) -> u8 {
        self.lower_bound
    }

    /// Upper bound of the bucket, `None` for the open-ended last one.
    pub fn upper_bound(&self) -> Option<u8> {
        self.upper_bound
    }

    /// Text label of the bucket, e.g. `3–4` or `5+`.
    pub fn label(&self) -> String {
        match self.upper_bound {
            Some(upper) => format!("{}\u{2013}{}", self.lower_bound, upper),
            None => format!("{}+", self.lower_bound),
        }
    }
}

/// Magnitude at which the legend samples [`color_for_magnitude`] for each bucket.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SwatchSampling {
    /// `lower_bound + 1`, as on the published map. With strict bucket boundaries the sampled
    /// magnitude is the inclusive upper bound of the same bucket.
    #[default]
    OneAboveLowerBound,
    /// `lower_bound + 0.5`, so every row shows the color its own markers are drawn with.
    Representative,
}

impl SwatchSampling {
    fn sample(&self, bucket: &MagnitudeBucket) -> f64 {
        let lower_bound = f64::from(bucket.lower_bound);
        match self {
            SwatchSampling::OneAboveLowerBound => lower_bound + 1.0,
            SwatchSampling::Representative => lower_bound + 0.5,
        }
    }
}

/// Row of the legend.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    /// Bucket label.
    pub label: String,
    /// Swatch color.
    pub color: Color,
}

/// Ordered list of legend rows, independent of the way it is drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendModel {
    entries: Vec<LegendEntry>,
}

impl Default for LegendModel {
    fn default() -> Self {
        Self::magnitude(SwatchSampling::default())
    }
}

impl LegendModel {
    /// Legend of the magnitude buckets with swatches sampled by `sampling`.
    pub fn magnitude(sampling: SwatchSampling) -> Self {
        let entries = MagnitudeBucket::all()
            .map(|bucket| LegendEntry {
                label: bucket.label(),
                color: color_for_magnitude(sampling.sample(&bucket)),
            })
            .collect();

        Self { entries }
    }

    /// Legend rows from top to bottom.
    pub fn entries(&self) -> &[LegendEntry] {
        &self.entries
    }
}
