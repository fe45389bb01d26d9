//! The whole chain: fetch both feeds, build the overlays and compose the map.

use crate::config::MapConfig;
use crate::data_provider::fetch_datasets;
use crate::error::QuakeMapError;
use crate::layer::{build_earthquake_layer, build_fault_line_layer};
use crate::map::{Map, MapComposer};
use crate::platform::PlatformService;

/// Fetches the feeds given in `config` one after another and composes the map from them.
///
/// Any failure ends the pipeline: it is logged and returned, nothing is rendered.
pub async fn render_map<S>(service: &S, config: &MapConfig) -> Result<Map, QuakeMapError>
where
    S: PlatformService + ?Sized,
{
    let result = compose(service, config).await;
    if let Err(error) = &result {
        log::error!("Failed to build the map: {error}");
    }

    result
}

async fn compose<S>(service: &S, config: &MapConfig) -> Result<Map, QuakeMapError>
where
    S: PlatformService + ?Sized,
{
    log::info!("Earthquake feed: {}", config.earthquake_url);
    let (earthquakes, fault_lines) =
        fetch_datasets(service, &config.earthquake_url, &config.fault_line_url).await?;

    let earthquake_layer = build_earthquake_layer(&earthquakes);
    let fault_line_layer = build_fault_line_layer(&fault_lines);

    MapComposer::new(config.access_token.clone()).compose_map(earthquake_layer, fault_line_layer)
}
