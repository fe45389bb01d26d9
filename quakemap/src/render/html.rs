use std::path::Path;

use serde::Serialize;
use serde_json::json;

use crate::error::QuakeMapError;
use crate::layer::{Layer, OverlayContent, OverlayLayer};
use crate::map::Map;
use crate::primitives::{Polyline, StyledMarker};
use crate::render::MapRenderer;
use crate::style::LegendModel;
use crate::symbol::escape_html;
use crate::Color;
use quakemap_types::GeoPoint;

/// Leaflet release loaded by the generated page unless configured otherwise.
pub const DEFAULT_LEAFLET_VERSION: &str = "1.9.4";

const PAGE_STYLE: &str = r#"html, body, #map { height: 100%; width: 100%; margin: 0; padding: 0; }
.info { padding: 6px 8px; font: 14px/16px Arial, Helvetica, sans-serif; background: white; background: rgba(255, 255, 255, 0.8); box-shadow: 0 0 15px rgba(0, 0, 0, 0.2); border-radius: 5px; }
.legend { line-height: 18px; color: #555; }
.legend i { width: 18px; height: 18px; float: left; margin-right: 8px; opacity: 0.9; }"#;

const PAGE_SCRIPT: &str = r#"const baseMaps = {};
const overlayMaps = {};
const initialLayers = [];

for (const base of config.baseLayers) {
  const layer = L.tileLayer(base.url, { attribution: base.attribution, maxZoom: base.maxZoom });
  baseMaps[base.name] = layer;
  if (base.active) {
    initialLayers.push(layer);
  }
}

for (const overlay of config.overlays) {
  let layer;
  if (overlay.markers) {
    layer = L.layerGroup(overlay.markers.map(function (marker) {
      return L.circleMarker([marker.lat, marker.lng], {
        color: marker.color,
        fillColor: marker.fillColor,
        fillOpacity: marker.fillOpacity,
        radius: marker.radius
      }).bindPopup(marker.popup);
    }));
  } else {
    layer = L.geoJSON(overlay.lines, {
      style: function (feature) { return feature.properties; }
    });
  }
  overlayMaps[overlay.name] = layer;
  if (overlay.visible) {
    initialLayers.push(layer);
  }
}

const map = L.map("map", {
  center: config.center,
  zoom: config.zoom,
  layers: initialLayers,
  scrollWheelZoom: config.scrollWheelZoom
});

L.control.layers(baseMaps, overlayMaps, {
  collapsed: config.layerControl.collapsed,
  position: config.layerControl.position
}).addTo(map);

const legend = L.control({ position: config.legend.position });
legend.onAdd = function () {
  const div = L.DomUtil.create("div", "info legend");
  div.innerHTML = config.legend.html;
  return div;
};
legend.addTo(map);"#;

/// Renders the map as a standalone HTML page with a full-viewport Leaflet map.
///
/// Markers are placed at their `(lat, lng)` positions. Fault lines are handed to Leaflet as
/// GeoJSON line strings, so their coordinates are written exactly as they came from the feed.
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    title: String,
    leaflet_version: String,
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self {
            title: "Earthquakes and Fault Lines".to_string(),
            leaflet_version: DEFAULT_LEAFLET_VERSION.to_string(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PageConfig<'a> {
    center: [f64; 2],
    zoom: u32,
    scroll_wheel_zoom: bool,
    base_layers: Vec<BaseLayerConfig<'a>>,
    overlays: Vec<OverlayConfig<'a>>,
    layer_control: LayerControlConfig,
    legend: LegendConfig,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BaseLayerConfig<'a> {
    name: &'a str,
    url: String,
    attribution: String,
    max_zoom: u32,
    active: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OverlayConfig<'a> {
    name: &'a str,
    visible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    markers: Option<Vec<MarkerConfig<'a>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    lines: Option<serde_json::Value>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MarkerConfig<'a> {
    lat: f64,
    lng: f64,
    color: Color,
    fill_color: Color,
    fill_opacity: f64,
    radius: f64,
    popup: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LayerControlConfig {
    collapsed: bool,
    position: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LegendConfig {
    position: &'static str,
    html: String,
}

impl HtmlRenderer {
    /// Sets the page title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the Leaflet release loaded from the CDN.
    pub fn with_leaflet_version(mut self, version: impl Into<String>) -> Self {
        self.leaflet_version = version.into();
        self
    }

    /// Renders the map and writes the page to `path`.
    pub fn write_to(&self, map: &Map, path: impl AsRef<Path>) -> Result<(), QuakeMapError> {
        let page = self.render(map)?;
        std::fs::write(path.as_ref(), page)?;
        log::info!("Map written to {}", path.as_ref().display());
        Ok(())
    }

    /// Collects the data embedded into the page.
    ///
    /// A base layer whose tile url cannot be produced, e.g. because the access token is missing,
    /// is emitted with an empty url. Its imagery stays blank but the overlays, the legend and the
    /// controls are rendered as usual.
    fn page_config<'a>(&self, map: &'a Map) -> PageConfig<'a> {
        let base_layers = map
            .base_layers()
            .iter()
            .enumerate()
            .map(|(index, layer)| BaseLayerConfig {
                name: layer.name(),
                url: layer.tile_url_template().unwrap_or_else(|err| {
                    log::error!("Base layer '{}' will have no tiles: {err}", layer.name());
                    String::new()
                }),
                attribution: layer
                    .attribution()
                    .map(|attribution| attribution.to_html())
                    .unwrap_or_default(),
                max_zoom: layer.max_zoom(),
                active: map.base_layers().is_visible(index),
            })
            .collect();

        let overlays = map
            .overlays()
            .iter()
            .enumerate()
            .map(|(index, layer)| overlay_config(layer, map.overlays().is_visible(index)))
            .collect();

        let center = map.view().center();

        PageConfig {
            center: [center.lat(), center.lon()],
            zoom: map.view().zoom(),
            scroll_wheel_zoom: map.scroll_wheel_zoom(),
            base_layers,
            overlays,
            layer_control: LayerControlConfig {
                collapsed: map.layer_control().collapsed,
                position: map.layer_control().position.as_str(),
            },
            legend: LegendConfig {
                position: map.legend().position.as_str(),
                html: legend_html(&map.legend().model),
            },
        }
    }
}

impl MapRenderer for HtmlRenderer {
    type Output = String;

    fn render(&self, map: &Map) -> Result<String, QuakeMapError> {
        let config = serde_json::to_string(&self.page_config(map))?;
        // Keeps `</script>` inside popup texts from closing the script element.
        let config = config.replace("</", "<\\/");
        let version = &self.leaflet_version;

        Ok(format!(
            r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
<link rel="stylesheet" href="https://unpkg.com/leaflet@{version}/dist/leaflet.css">
<script src="https://unpkg.com/leaflet@{version}/dist/leaflet.js"></script>
<style>
{PAGE_STYLE}
</style>
</head>
<body>
<div id="map"></div>
<script>
const config = {config};
{PAGE_SCRIPT}
</script>
</body>
</html>
"#,
            title = escape_html(&self.title),
        ))
    }
}

fn overlay_config(layer: &OverlayLayer, visible: bool) -> OverlayConfig<'_> {
    let (markers, lines): (Option<Vec<MarkerConfig<'_>>>, Option<serde_json::Value>) =
        match layer.content() {
            OverlayContent::Markers(markers) => {
                (Some(markers.iter().map(marker_config).collect()), None)
            }
            OverlayContent::Polylines(lines) => (None, Some(lines_geojson(lines))),
        };

    OverlayConfig {
        name: layer.name(),
        visible,
        markers,
        lines,
    }
}

fn marker_config(marker: &StyledMarker) -> MarkerConfig<'_> {
    MarkerConfig {
        lat: marker.position.lat(),
        lng: marker.position.lon(),
        color: marker.color,
        fill_color: marker.fill_color,
        fill_opacity: marker.fill_opacity,
        radius: marker.radius,
        popup: &marker.popup,
    }
}

fn lines_geojson(lines: &[Polyline]) -> serde_json::Value {
    let features: Vec<_> = lines
        .iter()
        .map(|line| {
            json!({
                "type": "Feature",
                "properties": { "color": line.color, "weight": line.weight },
                "geometry": { "type": "LineString", "coordinates": line.positions },
            })
        })
        .collect();

    json!({ "type": "FeatureCollection", "features": features })
}

/// HTML of the legend rows: a color swatch followed by the bucket label.
pub(crate) fn legend_html(model: &LegendModel) -> String {
    model
        .entries()
        .iter()
        .map(|entry| {
            format!(
                "<i style=\"background:{}\"></i> {}",
                entry.color,
                entry.label.replace('\u{2013}', "&ndash;")
            )
        })
        .collect::<Vec<_>>()
        .join("<br>")
}
