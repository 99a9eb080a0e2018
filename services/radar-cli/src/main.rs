//! Command-line radar image scraper.
//!
//! Fetches the base radar raster plus the requested overlays for one
//! site, composites them, and writes the flattened image to disk. Any
//! fetch or decode failure exits non-zero without writing an artifact.

mod fetch;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use radar_core::{parse_hex_color, LayerConfiguration, RadarClient};

use fetch::HttpLayerFetcher;

#[derive(Parser, Debug)]
#[command(name = "radar-cli")]
#[command(about = "Fetch and composite NWS RIDGE radar imagery")]
struct Args {
    /// Radar site code (e.g. HTX for Huntsville, AL)
    site: String,

    /// Output image file (format chosen from the extension)
    output: PathBuf,

    /// Radar product code
    #[arg(short, long, default_value = "N0R")]
    product: String,

    /// Hex background color
    #[arg(long, default_value = "#000000")]
    background: String,

    /// Include the topography underlay
    #[arg(long)]
    topo: bool,

    /// Include the color legend
    #[arg(long)]
    legend: bool,

    /// Include active warning polygons
    #[arg(long)]
    warnings: bool,

    /// Include county lines
    #[arg(long)]
    counties: bool,

    /// Include highways
    #[arg(long)]
    highways: bool,

    /// Include city labels
    #[arg(long)]
    cities: bool,

    /// Include rivers (short-range products only)
    #[arg(long)]
    rivers: bool,

    /// HTTP request timeout in seconds
    #[arg(long, default_value = "30")]
    timeout_secs: u64,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Args {
    fn layer_configuration(&self) -> Result<LayerConfiguration> {
        let background = parse_hex_color(&self.background)
            .ok_or_else(|| anyhow!("Invalid background color: {}", self.background))?;

        let mut config = LayerConfiguration::none();
        config.include_topography = self.topo;
        config.include_legend = self.legend;
        config.include_warnings = self.warnings;
        config.include_counties = self.counties;
        config.include_highways = self.highways;
        config.include_cities = self.cities;
        config.include_rivers = self.rivers;
        config.background = background;
        Ok(config)
    }
}

async fn run(args: &Args) -> Result<()> {
    let config = args.layer_configuration()?;

    info!(site = %args.site, product = %args.product, "Retrieving radar image");

    let fetcher = HttpLayerFetcher::new(Duration::from_secs(args.timeout_secs))?;
    let client = RadarClient::new(fetcher);

    let composite = client
        .fetch_product(&args.site, &args.product, &config)
        .await?;

    composite
        .save(&args.output)
        .with_context(|| format!("Failed to save image to {}", args.output.display()))?;

    info!(path = %args.output.display(), "Done");
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("Failed to initialize logging");
    }

    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Radar image retrieval failed");
            ExitCode::FAILURE
        }
    }
}
