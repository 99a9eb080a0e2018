//! Pipeline orchestration: resolve, fetch, and composite radar layers.

use async_trait::async_trait;
use futures::future;
use image::{RgbImage, RgbaImage};
use tracing::debug;

use crate::compose::compose;
use crate::config::LayerConfiguration;
use crate::error::{RadarError, RadarResult};
use crate::product;
use crate::source::{self, LayerRequest, OVERLAY_STACK};

/// Collaborator that retrieves and decodes one layer raster.
///
/// The core depends only on this contract; transport concerns (timeouts,
/// retries, caching) belong to the implementation.
#[async_trait]
pub trait LayerFetcher: Send + Sync {
    /// Fetch the raster for a resolved layer request.
    ///
    /// Fails with [`RadarError::Fetch`] on network/HTTP failure and
    /// [`RadarError::Decode`] on malformed image bytes.
    async fn fetch(&self, request: &LayerRequest) -> RadarResult<RgbaImage>;
}

/// Radar product client driving the resolve → fetch → composite pipeline.
#[derive(Debug)]
pub struct RadarClient<F> {
    fetcher: F,
}

impl<F: LayerFetcher> RadarClient<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// Access the underlying fetcher.
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Fetch and composite one radar product image.
    ///
    /// The base raster is fetched first: its dimensions size the canvas
    /// and there is no radar image without it, so a base failure aborts
    /// before any overlay is requested. Enabled overlays are fetched
    /// concurrently and then applied in the fixed composite order. Any
    /// fetch or decode failure aborts the whole operation; there is no
    /// partial-result mode.
    pub async fn fetch_product(
        &self,
        site: &str,
        product_code: &str,
        config: &LayerConfiguration,
    ) -> RadarResult<RgbImage> {
        let site = site.trim().to_ascii_uppercase();
        if site.is_empty() {
            return Err(RadarError::EmptySiteId);
        }
        let product = product::lookup(product_code)?;

        debug!(site = %site, product = product.code, range = product.range.token(), "Building radar image");
        debug!(
            background = ?config.background,
            topography = config.include_topography,
            legend = config.include_legend,
            warnings = config.include_warnings,
            counties = config.include_counties,
            highways = config.include_highways,
            cities = config.include_cities,
            rivers = config.include_rivers,
            "Layer configuration"
        );

        let base = self.fetcher.fetch(&source::base_request(product, &site)).await?;

        let requests: Vec<LayerRequest> = OVERLAY_STACK
            .into_iter()
            .filter(|role| config.includes(*role))
            .filter_map(|role| source::overlay_request(role, product, &site))
            .collect();

        let rasters =
            future::try_join_all(requests.iter().map(|request| self.fetcher.fetch(request)))
                .await?;

        let overlays: Vec<_> = requests
            .into_iter()
            .map(|request| request.role)
            .zip(rasters)
            .collect();

        Ok(compose(&base, config.background, &overlays))
    }

    /// Composite reflectivity (NCR) for a radar site.
    pub async fn composite_reflectivity(
        &self,
        site: &str,
        config: &LayerConfiguration,
    ) -> RadarResult<RgbImage> {
        self.fetch_product(site, "NCR", config).await
    }

    /// Base reflectivity (N0R) for a radar site.
    pub async fn base_reflectivity(
        &self,
        site: &str,
        config: &LayerConfiguration,
    ) -> RadarResult<RgbImage> {
        self.fetch_product(site, "N0R", config).await
    }

    /// Storm relative motion (N0S) for a radar site.
    pub async fn storm_relative_motion(
        &self,
        site: &str,
        config: &LayerConfiguration,
    ) -> RadarResult<RgbImage> {
        self.fetch_product(site, "N0S", config).await
    }

    /// Base velocity (N0V) for a radar site.
    pub async fn base_velocity(
        &self,
        site: &str,
        config: &LayerConfiguration,
    ) -> RadarResult<RgbImage> {
        self.fetch_product(site, "N0V", config).await
    }

    /// One-hour precipitation (N1P) for a radar site.
    pub async fn one_hour_precipitation(
        &self,
        site: &str,
        config: &LayerConfiguration,
    ) -> RadarResult<RgbImage> {
        self.fetch_product(site, "N1P", config).await
    }

    /// Storm total precipitation (NTP) for a radar site.
    pub async fn storm_total_precipitation(
        &self,
        site: &str,
        config: &LayerConfiguration,
    ) -> RadarResult<RgbImage> {
        self.fetch_product(site, "NTP", config).await
    }
}
