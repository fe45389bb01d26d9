//! Controls placed on top of the map view.

use crate::style::LegendModel;

/// Corner of the map a control is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlPosition {
    /// Top left corner.
    TopLeft,
    /// Top right corner.
    #[default]
    TopRight,
    /// Bottom left corner.
    BottomLeft,
    /// Bottom right corner.
    BottomRight,
}

impl ControlPosition {
    /// Position name as used by Leaflet (`bottomright` etc).
    pub fn as_str(&self) -> &'static str {
        match self {
            ControlPosition::TopLeft => "topleft",
            ControlPosition::TopRight => "topright",
            ControlPosition::BottomLeft => "bottomleft",
            ControlPosition::BottomRight => "bottomright",
        }
    }
}

/// Control listing base layers as exclusive choices and overlays as checkboxes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerControl {
    /// Whether the list is folded into an icon until hovered.
    pub collapsed: bool,
    /// Corner of the control.
    pub position: ControlPosition,
}

impl Default for LayerControl {
    fn default() -> Self {
        Self {
            collapsed: false,
            position: ControlPosition::TopRight,
        }
    }
}

/// Control showing the magnitude legend.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendControl {
    /// Corner of the control.
    pub position: ControlPosition,
    /// Rows of the legend.
    pub model: LegendModel,
}

impl Default for LegendControl {
    fn default() -> Self {
        Self {
            position: ControlPosition::BottomRight,
            model: LegendModel::default(),
        }
    }
}
