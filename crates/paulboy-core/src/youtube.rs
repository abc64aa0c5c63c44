//! Channel statistics for the youtube tab.
//!
//! Best-effort: a failed fetch leaves the previously displayed values in
//! place and nothing retries or caches beyond that.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::FetchError;

/// Statistics shown on the youtube tab.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelStats {
    pub name: String,
    pub subscribers: u64,
    pub views: u64,
    pub video_count: u64,
}

/// Narrow fetch seam the youtube tab consumes.
pub trait StatsFetch {
    fn fetch_channel_stats(&self, channel_id: &str) -> Result<ChannelStats, FetchError>;
}

/// YouTube Data API v3 client.
pub struct YouTubeClient {
    api_key: String,
    base_url: String,
    client: Client,
}

impl YouTubeClient {
    pub const DEFAULT_BASE_URL: &'static str = "https://www.googleapis.com/youtube/v3";

    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, Self::DEFAULT_BASE_URL)
    }

    /// Override the API endpoint (tests point this at a local server).
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
            client: Client::new(),
        }
    }
}

impl StatsFetch for YouTubeClient {
    fn fetch_channel_stats(&self, channel_id: &str) -> Result<ChannelStats, FetchError> {
        let url = Url::parse_with_params(
            &format!("{}/channels", self.base_url),
            &[
                ("part", "snippet,statistics"),
                ("id", channel_id),
                ("key", self.api_key.as_str()),
            ],
        )
        .map_err(|e| FetchError::Malformed(e.to_string()))?;

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        let body: serde_json::Value = runtime.block_on(async {
            let response = self.client.get(url.as_str()).send().await?;
            if !response.status().is_success() {
                return Err(FetchError::Api {
                    status: response.status().as_u16(),
                });
            }
            Ok::<_, FetchError>(response.json().await?)
        })?;

        let item = body["items"]
            .get(0)
            .ok_or_else(|| FetchError::Malformed("no channel in response".into()))?;
        Ok(ChannelStats {
            name: item["snippet"]["title"].as_str().unwrap_or_default().to_string(),
            subscribers: parse_count(&item["statistics"]["subscriberCount"]),
            views: parse_count(&item["statistics"]["viewCount"]),
            video_count: parse_count(&item["statistics"]["videoCount"]),
        })
    }
}

/// The API reports statistics as strings; tolerate plain numbers too.
fn parse_count(value: &serde_json::Value) -> u64 {
    value
        .as_str()
        .and_then(|s| s.parse().ok())
        .or_else(|| value.as_u64())
        .unwrap_or(0)
}

/// Last fetched stats kept for display.
#[derive(Default)]
pub struct StatsPanel {
    stats: ChannelStats,
    fetched: bool,
}

impl StatsPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> &ChannelStats {
        &self.stats
    }

    /// Whether any fetch has ever succeeded (zeroed placeholders otherwise).
    pub fn has_data(&self) -> bool {
        self.fetched
    }

    /// One best-effort fetch. On failure the panel keeps showing what it
    /// had; the error is returned for diagnostics only.
    pub fn refresh(
        &mut self,
        fetcher: &dyn StatsFetch,
        channel_id: &str,
    ) -> Result<(), FetchError> {
        let stats = fetcher.fetch_channel_stats(channel_id)?;
        self.stats = stats;
        self.fetched = true;
        Ok(())
    }
}
