//! Quakemap shows the earthquakes of the past day and the tectonic plate boundaries on an
//! interactive tiled map.
//!
//! # Quick start
//!
//! ```no_run
//! use quakemap::config::MapConfig;
//! use quakemap::platform::PlatformServiceImpl;
//! use quakemap::render::HtmlRenderer;
//!
//! # tokio_test::block_on(async {
//! let config = MapConfig::from_env();
//! let service = PlatformServiceImpl::new()?;
//! let map = quakemap::pipeline::render_map(&service, &config).await?;
//! HtmlRenderer::default().write_to(&map, "quakemap.html")?;
//! # Ok::<(), quakemap::error::QuakeMapError>(())
//! # });
//! ```
//!
//! # Main components
//!
//! * [`data_provider`] loads the two GeoJSON feeds, strictly one after another, and decodes them
//!   into [`feature`] records.
//! * [`symbol`] turns every record into a map primitive: earthquakes become circle markers
//!   styled by the rules in [`style`], plate boundaries become lines.
//! * [`layer`] groups the primitives into the "Earthquakes" and "Fault Lines" overlays and
//!   defines the tiled base layers.
//! * [`Map`] holds the layers, the initial [`MapView`] and the [`control`]s. It is created by
//!   [`MapComposer`].
//! * [`render`] converts the map into a standalone HTML page.

#![warn(clippy::unwrap_used)]
#![warn(missing_docs)]

mod color;
pub mod config;
pub mod control;
pub mod data_provider;
pub mod error;
pub mod feature;
pub mod layer;
mod map;
pub mod pipeline;
pub mod platform;
pub mod primitives;
pub mod render;
pub mod style;
pub mod symbol;
mod view;


pub use color::Color;
pub use map::{LayerCollection, Map, MapComposer};
pub use view::MapView;

// Reexport quakemap_types
pub use quakemap_types;
