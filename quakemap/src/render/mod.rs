//! Rendering adapters converting a composed [`Map`] into something a user can look at.

mod html;

pub use html::{HtmlRenderer, DEFAULT_LEAFLET_VERSION};

use crate::error::QuakeMapError;
use crate::map::Map;

/// Converts a map into an output format.
pub trait MapRenderer {
    /// Rendering result.
    type Output;

    /// Renders the map.
    fn render(&self, map: &Map) -> Result<Self::Output, QuakeMapError>;
}
