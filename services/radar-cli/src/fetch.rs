//! HTTP layer fetcher backed by reqwest.

use std::time::Duration;

use async_trait::async_trait;
use image::RgbaImage;
use radar_core::{LayerFetcher, LayerRequest, RadarError, RadarResult};
use tracing::debug;

/// User agent the RIDGE host has historically been happy with.
const USER_AGENT: &str = "Mozilla/4.0 (compatible; MSIE 5.01; Windows NT 5.0)";

/// Fetches layer rasters over HTTP and decodes them in memory.
///
/// No retries; a failed request surfaces as [`RadarError::Fetch`] and the
/// caller decides whether to rerun the whole pipeline.
#[derive(Debug, Clone)]
pub struct HttpLayerFetcher {
    client: reqwest::Client,
}

impl HttpLayerFetcher {
    pub fn new(request_timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(request_timeout)
            .connect_timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl LayerFetcher for HttpLayerFetcher {
    async fn fetch(&self, request: &LayerRequest) -> RadarResult<RgbaImage> {
        debug!(role = %request.role, url = %request.url, "Fetching layer");

        let response = self
            .client
            .get(&request.url)
            .send()
            .await
            .map_err(|e| RadarError::Fetch {
                url: request.url.clone(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RadarError::Fetch {
                url: request.url.clone(),
                message: format!("HTTP {}", status),
            });
        }

        let bytes = response.bytes().await.map_err(|e| RadarError::Fetch {
            url: request.url.clone(),
            message: e.to_string(),
        })?;

        let decoded = image::load_from_memory(&bytes).map_err(|e| RadarError::Decode {
            url: request.url.clone(),
            message: e.to_string(),
        })?;

        debug!(
            role = %request.role,
            bytes = bytes.len(),
            width = decoded.width(),
            height = decoded.height(),
            "Layer decoded"
        );

        Ok(decoded.to_rgba8())
    }
}
