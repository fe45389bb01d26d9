//! [Layers](Layer) of the map: tiled backdrops and overlays with feed data.

pub mod attribution;
pub mod overlay;
pub mod raster_tile_layer;

pub use overlay::{build_earthquake_layer, build_fault_line_layer, OverlayContent, OverlayLayer};
pub use raster_tile_layer::{BaseLayer, RasterTileLayerBuilder, TileIndex};

use attribution::Attribution;

/// Common properties of all map layers.
///
/// There are two types of layers:
/// * [`BaseLayer`] - full-screen tile imagery, exactly one is shown at a time.
/// * [`OverlayLayer`] - markers or lines drawn above the base layer, each can be toggled.
pub trait Layer {
    /// Name shown in the layer selection control. Unique within a map.
    fn name(&self) -> &str;

    /// Returns the attribution of the layer, if available.
    fn attribution(&self) -> Option<&Attribution> {
        None
    }
}
