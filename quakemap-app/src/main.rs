//! Fetches the earthquake and plate boundary feeds and writes an interactive map page.
//!
//! ```shell
//! MAPBOX_ACCESS_TOKEN=pk.xxx cargo run -p quakemap-app -- --output quakemap.html
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use quakemap::config::{
    resolve_token, AccessToken, MapConfig, DEFAULT_EARTHQUAKE_URL, DEFAULT_FAULT_LINE_URL,
};
use quakemap::pipeline::render_map;
use quakemap::platform::PlatformServiceImpl;
use quakemap::render::{HtmlRenderer, DEFAULT_LEAFLET_VERSION};

#[derive(Parser)]
#[command(name = "quakemap")]
#[command(about = "Render recent earthquakes and tectonic plate boundaries on a map", long_about = None)]
struct Args {
    /// Path of the HTML page to write
    #[arg(long, default_value = "quakemap.html")]
    output: PathBuf,

    /// GeoJSON feed with earthquake events
    #[arg(long, default_value = DEFAULT_EARTHQUAKE_URL)]
    earthquake_url: String,

    /// GeoJSON file with plate boundary lines
    #[arg(long, default_value = DEFAULT_FAULT_LINE_URL)]
    fault_line_url: String,

    /// Mapbox access token for the base tile layers. Without it the overlays are drawn on a blank
    /// background
    #[arg(long, env = "MAPBOX_ACCESS_TOKEN", hide_env_values = true)]
    access_token: Option<String>,

    /// Leaflet release loaded by the page
    #[arg(long, default_value = DEFAULT_LEAFLET_VERSION)]
    leaflet_version: String,
}

impl Args {
    fn map_config(&self) -> MapConfig {
        let access_token = resolve_token(match &self.access_token {
            Some(token) => AccessToken::new(token.as_str()),
            None => AccessToken::from_env(),
        });

        MapConfig::new(access_token)
            .with_earthquake_url(&self.earthquake_url)
            .with_fault_line_url(&self.fault_line_url)
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &Args) -> Result<()> {
    let config = args.map_config();
    let service = PlatformServiceImpl::new()?;

    let map = render_map(&service, &config).await?;

    HtmlRenderer::default()
        .with_leaflet_version(&args.leaflet_version)
        .write_to(&map, &args.output)?;

    Ok(())
}
