//! Tiled backdrop layers.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::AccessToken;
use crate::error::QuakeMapError;
use crate::layer::attribution::Attribution;
use crate::layer::Layer;

/// URL template of the Mapbox raster tile API.
pub const MAPBOX_URL_TEMPLATE: &str =
    "https://api.tiles.mapbox.com/v4/{id}/{z}/{x}/{y}.png?access_token={accessToken}";

/// Attribution required by the Mapbox raster tiles.
pub const MAPBOX_ATTRIBUTION: &str = "Map data &copy; <a href=\"https://www.openstreetmap.org/\">OpenStreetMap</a> contributors, <a href=\"https://creativecommons.org/licenses/by-sa/2.0/\">CC-BY-SA</a>, Imagery © <a href=\"https://www.mapbox.com/\">Mapbox</a>";

const DEFAULT_MAX_ZOOM: u32 = 18;

/// Tile index.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash, Serialize, Deserialize)]
pub struct TileIndex {
    /// X index.
    pub x: i32,
    /// Y index.
    pub y: i32,
    /// Z index.
    pub z: u32,
}

impl TileIndex {
    /// Create a new index instance.
    pub fn new(x: i32, y: i32, z: u32) -> Self {
        Self { x, y, z }
    }
}

/// Named full-screen tile backdrop.
///
/// The tile url is produced from a template with `{id}`, `{z}`, `{x}`, `{y}` and
/// `{accessToken}` placeholders.
#[derive(Debug, Clone)]
pub struct BaseLayer {
    name: String,
    style_id: String,
    url_template: String,
    access_token: Option<AccessToken>,
    max_zoom: u32,
    attribution: Option<Attribution>,
}

impl Layer for BaseLayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn attribution(&self) -> Option<&Attribution> {
        self.attribution.as_ref()
    }
}

impl BaseLayer {
    /// Style id substituted for the `{id}` placeholder.
    pub fn style_id(&self) -> &str {
        &self.style_id
    }

    /// Maximum zoom level the tile service provides.
    pub fn max_zoom(&self) -> u32 {
        self.max_zoom
    }

    /// Url of the tile with the given index.
    pub fn tile_url(&self, index: TileIndex) -> Result<String, QuakeMapError> {
        self.fill_template(
            index.z.to_string(),
            index.x.to_string(),
            index.y.to_string(),
        )
    }

    /// Url template with the style and the token filled in and `{z}`, `{x}`, `{y}` left for the
    /// map widget.
    pub fn tile_url_template(&self) -> Result<String, QuakeMapError> {
        self.fill_template("{z}".into(), "{x}".into(), "{y}".into())
    }

    fn fill_template(&self, z: String, x: String, y: String) -> Result<String, QuakeMapError> {
        let needs_token = self.url_template.contains("{accessToken}");
        let token = match &self.access_token {
            Some(token) => token.as_str().to_string(),
            None if needs_token => {
                return Err(QuakeMapError::Configuration(format!(
                    "base layer '{}' requires an access token",
                    self.name
                )))
            }
            None => String::new(),
        };

        let vars = HashMap::from([
            ("id".to_string(), self.style_id.clone()),
            ("z".to_string(), z),
            ("x".to_string(), x),
            ("y".to_string(), y),
            ("accessToken".to_string(), token),
        ]);

        strfmt::strfmt(&self.url_template, &vars).map_err(|err| {
            QuakeMapError::Configuration(format!(
                "invalid tile url template of '{}': {err}",
                self.name
            ))
        })
    }
}

/// Constructor for a [`BaseLayer`].
///
/// ```
/// use quakemap::config::AccessToken;
/// use quakemap::layer::RasterTileLayerBuilder;
///
/// let layer = RasterTileLayerBuilder::new_mapbox("Satellite", "mapbox.satellite")
///     .with_access_token(AccessToken::new("pk.token")?)
///     .build()?;
/// # Ok::<(), quakemap::error::QuakeMapError>(())
/// ```
pub struct RasterTileLayerBuilder {
    name: String,
    style_id: String,
    url_template: String,
    access_token: Option<AccessToken>,
    max_zoom: u32,
    attribution: Option<Attribution>,
}

impl RasterTileLayerBuilder {
    /// Initializes a builder for a layer with the given url template.
    pub fn new_rest(name: impl Into<String>, url_template: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            style_id: String::new(),
            url_template: url_template.into(),
            access_token: None,
            max_zoom: DEFAULT_MAX_ZOOM,
            attribution: None,
        }
    }

    /// Initializes a builder for a Mapbox raster style, e.g. `mapbox.satellite`.
    pub fn new_mapbox(name: impl Into<String>, style_id: impl Into<String>) -> Self {
        Self::new_rest(name, MAPBOX_URL_TEMPLATE)
            .with_style_id(style_id)
            .with_attribution(Attribution::new(MAPBOX_ATTRIBUTION, None))
    }

    /// Sets the value of the `{id}` placeholder.
    pub fn with_style_id(mut self, style_id: impl Into<String>) -> Self {
        self.style_id = style_id.into();
        self
    }

    /// Sets the value of the `{accessToken}` placeholder.
    pub fn with_access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets the maximum zoom level.
    pub fn with_max_zoom(mut self, max_zoom: u32) -> Self {
        self.max_zoom = max_zoom;
        self
    }

    /// Sets the attribution.
    pub fn with_attribution(mut self, attribution: Attribution) -> Self {
        self.attribution = Some(attribution);
        self
    }

    /// Consumes the builder and constructs the layer.
    ///
    /// Fails if the url template has no tile placeholders or uses `{id}` without a style id.
    pub fn build(self) -> Result<BaseLayer, QuakeMapError> {
        let Self {
            name,
            style_id,
            url_template,
            access_token,
            max_zoom,
            attribution,
        } = self;

        if !["{z}", "{x}", "{y}"]
            .iter()
            .all(|placeholder| url_template.contains(placeholder))
        {
            return Err(QuakeMapError::Configuration(format!(
                "tile url template of '{name}' must contain {{z}}, {{x}} and {{y}}"
            )));
        }

        if url_template.contains("{id}") && style_id.is_empty() {
            return Err(QuakeMapError::Configuration(format!(
                "tile url template of '{name}' requires a style id"
            )));
        }

        Ok(BaseLayer {
            name,
            style_id,
            url_template,
            access_token,
            max_zoom,
            attribution,
        })
    }
}
