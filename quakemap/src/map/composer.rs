use quakemap_types::latlon;

use crate::config::AccessToken;
use crate::control::{LayerControl, LegendControl};
use crate::error::QuakeMapError;
use crate::layer::overlay::FAULT_LINES_LAYER;
use crate::layer::{BaseLayer, Layer, OverlayLayer, RasterTileLayerBuilder};
use crate::map::{LayerCollection, Map};
use crate::style::LegendModel;
use crate::view::MapView;

/// Base layer names and Mapbox style ids, in the order of the layer control.
pub const BASE_LAYER_STYLES: [(&str, &str); 3] = [
    ("Light", "mapbox.light"),
    ("Satellite", "mapbox.satellite"),
    ("Dark", "mapbox.dark"),
];

/// Base layer active when the map is shown.
pub const INITIAL_BASE_LAYER: &str = "Satellite";

/// Zoom level of the initial view.
pub const DEFAULT_ZOOM: u32 = 2;

/// Assembles base layers, overlays and controls into a [`Map`].
///
/// The tile service token is given explicitly when the composer is created. Without a token the
/// base layers are still created, but fail to produce tile urls.
#[derive(Debug, Clone)]
pub struct MapComposer {
    access_token: Option<AccessToken>,
    view: MapView,
    legend: LegendModel,
}

impl MapComposer {
    /// Creates a composer with the default view: centered at (39.8283, 0.5785) with zoom 2.
    pub fn new(access_token: Option<AccessToken>) -> Self {
        Self {
            access_token,
            view: MapView::new(latlon!(39.8283, 0.5785), DEFAULT_ZOOM),
            legend: LegendModel::default(),
        }
    }

    /// Replaces the initial view.
    pub fn with_view(mut self, view: MapView) -> Self {
        self.view = view;
        self
    }

    /// Replaces the legend rows.
    pub fn with_legend(mut self, legend: LegendModel) -> Self {
        self.legend = legend;
        self
    }

    /// Creates the Light, Satellite and Dark base layers.
    pub fn base_layers(&self) -> Result<Vec<BaseLayer>, QuakeMapError> {
        BASE_LAYER_STYLES
            .iter()
            .map(|(name, style_id)| {
                let builder = RasterTileLayerBuilder::new_mapbox(*name, *style_id);
                let builder = match &self.access_token {
                    Some(token) => builder.with_access_token(token.clone()),
                    None => builder,
                };
                builder.build()
            })
            .collect()
    }

    /// Composes the map with Satellite as the active base layer and only the fault lines
    /// overlay visible.
    pub fn compose_map(
        &self,
        earthquake_layer: OverlayLayer,
        fault_line_layer: OverlayLayer,
    ) -> Result<Map, QuakeMapError> {
        let mut base_layers = LayerCollection::from(self.base_layers()?);
        if let Some(index) = base_layers.position(INITIAL_BASE_LAYER) {
            base_layers.show_only(index);
        }

        let mut overlays = LayerCollection::from(vec![earthquake_layer, fault_line_layer]);
        overlays.hide_by(|layer| layer.name() != FAULT_LINES_LAYER);

        log::debug!(
            "Composed map with {} base layers and {} overlays",
            base_layers.len(),
            overlays.len()
        );

        Ok(Map::new(
            self.view,
            base_layers,
            overlays,
            LayerControl::default(),
            LegendControl {
                model: self.legend.clone(),
                ..LegendControl::default()
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use quakemap_types::GeoPoint;

    use super::*;
    use crate::control::ControlPosition;
    use crate::feature::{EarthquakeDataset, FaultLineDataset};
    use crate::layer::{build_earthquake_layer, build_fault_line_layer};
    use crate::style::SwatchSampling;

    fn compose() -> Map {
        MapComposer::new(AccessToken::new("pk.test").ok())
            .compose_map(
                build_earthquake_layer(&EarthquakeDataset::default()),
                build_fault_line_layer(&FaultLineDataset::default()),
            )
            .unwrap()
    }

    #[test]
    fn initial_state() {
        let map = compose();

        assert_eq!(map.view().zoom(), 2);
        assert_eq!(map.view().center().lat(), 39.8283);
        assert_eq!(map.view().center().lon(), 0.5785);
        assert!(map.scroll_wheel_zoom());

        let names: Vec<_> = map.base_layers().iter().map(|l| l.name()).collect();
        assert_eq!(names, ["Light", "Satellite", "Dark"]);
        assert_eq!(
            map.active_base_layer().map(|l| l.style_id()),
            Some("mapbox.satellite")
        );

        assert!(map.is_overlay_visible("Fault Lines"));
        assert!(!map.is_overlay_visible("Earthquakes"));
    }

    #[test]
    fn controls() {
        let map = compose();

        assert!(!map.layer_control().collapsed);
        assert_eq!(map.legend().position, ControlPosition::BottomRight);
        assert_eq!(map.legend().model.entries().len(), 6);
    }

    #[test]
    fn base_layers_are_exclusive() {
        let mut map = compose();

        assert!(map.select_base_layer("Dark"));
        assert_eq!(map.base_layers().iter_visible().count(), 1);
        assert_eq!(map.active_base_layer().map(|l| l.name()), Some("Dark"));

        assert!(!map.select_base_layer("Outdoors"));
        assert_eq!(map.active_base_layer().map(|l| l.name()), Some("Dark"));
    }

    #[test]
    fn overlays_toggle_independently() {
        let mut map = compose();

        assert!(map.set_overlay_visible("Earthquakes", true));
        assert!(map.is_overlay_visible("Earthquakes"));
        assert!(map.is_overlay_visible("Fault Lines"));

        assert!(map.set_overlay_visible("Fault Lines", false));
        assert!(!map.is_overlay_visible("Fault Lines"));
        assert!(!map.set_overlay_visible("Volcanoes", true));
    }

    #[test]
    fn base_layers_carry_the_token() {
        let map = compose();
        for layer in map.base_layers().iter() {
            let url = layer.tile_url_template().unwrap();
            assert!(url.ends_with("access_token=pk.test"), "{url}");
        }
    }

    #[test]
    fn custom_view_and_legend() {
        let view = MapView::new(latlon!(35.0, 139.0), 5);
        let legend = LegendModel::magnitude(SwatchSampling::Representative);
        let map = MapComposer::new(AccessToken::new("pk.test").ok())
            .with_view(view)
            .with_legend(legend.clone())
            .compose_map(
                build_earthquake_layer(&EarthquakeDataset::default()),
                build_fault_line_layer(&FaultLineDataset::default()),
            )
            .unwrap();

        assert_eq!(*map.view(), view);
        assert_eq!(map.legend().model, legend);
    }

    #[test]
    fn missing_token_fails_only_tile_urls() {
        let map = MapComposer::new(None)
            .compose_map(
                build_earthquake_layer(&EarthquakeDataset::default()),
                build_fault_line_layer(&FaultLineDataset::default()),
            )
            .unwrap();

        assert_eq!(map.base_layers().len(), 3);
        assert_eq!(map.overlays().len(), 2);
        for layer in map.base_layers().iter() {
            assert_matches!(
                layer.tile_url_template(),
                Err(QuakeMapError::Configuration(_))
            );
        }
    }
}
