use crate::control::{LayerControl, LegendControl};
use crate::layer::{BaseLayer, OverlayLayer};
use crate::view::MapView;

mod composer;
mod layer_collection;

pub use composer::MapComposer;
pub use layer_collection::LayerCollection;

/// Map specifies the base layers, the overlays, the controls and the initial view.
///
/// The set of layers is fixed once the map is composed. Only the active base layer and the
/// visibility of overlays can change afterwards.
#[derive(Debug, Clone)]
pub struct Map {
    view: MapView,
    base_layers: LayerCollection<BaseLayer>,
    overlays: LayerCollection<OverlayLayer>,
    layer_control: LayerControl,
    legend: LegendControl,
    scroll_wheel_zoom: bool,
}

impl Map {
    pub(crate) fn new(
        view: MapView,
        base_layers: LayerCollection<BaseLayer>,
        overlays: LayerCollection<OverlayLayer>,
        layer_control: LayerControl,
        legend: LegendControl,
    ) -> Self {
        Self {
            view,
            base_layers,
            overlays,
            layer_control,
            legend,
            scroll_wheel_zoom: true,
        }
    }

    /// Initial view of the map.
    pub fn view(&self) -> &MapView {
        &self.view
    }

    /// Base layers. Exactly one of them is visible.
    pub fn base_layers(&self) -> &LayerCollection<BaseLayer> {
        &self.base_layers
    }

    /// Overlay layers with their visibility.
    pub fn overlays(&self) -> &LayerCollection<OverlayLayer> {
        &self.overlays
    }

    /// Layer selection control.
    pub fn layer_control(&self) -> &LayerControl {
        &self.layer_control
    }

    /// Legend control.
    pub fn legend(&self) -> &LegendControl {
        &self.legend
    }

    /// Whether the mouse wheel zooms the map.
    pub fn scroll_wheel_zoom(&self) -> bool {
        self.scroll_wheel_zoom
    }

    /// Currently active base layer.
    pub fn active_base_layer(&self) -> Option<&BaseLayer> {
        self.base_layers.iter_visible().next()
    }

    /// Makes the base layer with the given name the active one. Returns false if there is no
    /// such layer, in which case the active layer does not change.
    pub fn select_base_layer(&mut self, name: &str) -> bool {
        match self.base_layers.position(name) {
            Some(index) => {
                self.base_layers.show_only(index);
                true
            }
            None => false,
        }
    }

    /// Shows or hides the overlay with the given name. Returns false if there is no such overlay.
    pub fn set_overlay_visible(&mut self, name: &str, visible: bool) -> bool {
        let Some(index) = self.overlays.position(name) else {
            return false;
        };

        if visible {
            self.overlays.show(index);
        } else {
            self.overlays.hide(index);
        }

        true
    }

    /// Returns true if the overlay with the given name exists and is visible.
    pub fn is_overlay_visible(&self, name: &str) -> bool {
        self.overlays
            .position(name)
            .is_some_and(|index| self.overlays.is_visible(index))
    }
}
