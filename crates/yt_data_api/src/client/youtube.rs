use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::{
    client::VideoPlatform,
    domain::{ApiErrorResponse, ListResponse},
    Channel, PlaylistItem, SearchResult, YouTubeApiError,
};

/// `reqwest` backed client for the YouTube Data API v3
#[derive(Debug, Clone)]
pub struct YouTubeDataClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl YouTubeDataClient {
    pub const DEFAULT_BASE_URL: &'static str = "https://www.googleapis.com/youtube/v3";

    pub fn new(client: Client, api_key: Option<String>) -> Self {
        Self {
            client,
            api_key: api_key.filter(|k| !k.is_empty()),
            base_url: Self::DEFAULT_BASE_URL.into(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    #[tracing::instrument(skip(self, query))]
    async fn list<T: DeserializeOwned>(
        &self,
        resource: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<T>, YouTubeApiError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(YouTubeApiError::MissingApiKey)?;

        let resp = self
            .client
            .get(format!("{}/{resource}", self.base_url))
            .query(query)
            .query(&[("key", api_key)])
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            let (status, message) = match serde_json::from_str::<ApiErrorResponse>(&body) {
                Ok(ApiErrorResponse { error }) => (error.code.unwrap_or(status), error.message),
                Err(_) => (status, body),
            };
            tracing::error!(status, %message, "YouTube API returned an error");
            return Err(YouTubeApiError::Api { status, message });
        }

        Ok(resp.json::<ListResponse<T>>().await?.items)
    }
}

impl VideoPlatform for YouTubeDataClient {
    fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    fn with_api_key(&self, api_key: &str) -> Self {
        Self {
            client: self.client.clone(),
            api_key: Some(api_key.to_string()).filter(|k| !k.is_empty()),
            base_url: self.base_url.clone(),
        }
    }

    async fn channels_by_handle(&self, handle: &str) -> Result<Vec<Channel>, YouTubeApiError> {
        self.list("channels", &[("part", "id,snippet"), ("forHandle", handle)])
            .await
    }

    async fn channels_by_id(&self, channel_id: &str) -> Result<Vec<Channel>, YouTubeApiError> {
        self.list(
            "channels",
            &[("part", "id,snippet,contentDetails"), ("id", channel_id)],
        )
        .await
    }

    async fn search_channels(
        &self,
        query: &str,
        max_results: u32,
    ) -> Result<Vec<SearchResult>, YouTubeApiError> {
        let max_results = max_results.to_string();
        self.list(
            "search",
            &[
                ("part", "id,snippet"),
                ("type", "channel"),
                ("q", query),
                ("maxResults", max_results.as_str()),
            ],
        )
        .await
    }

    async fn playlist_items(
        &self,
        playlist_id: &str,
        max_results: u32,
    ) -> Result<Vec<PlaylistItem>, YouTubeApiError> {
        let max_results = max_results.to_string();
        self.list(
            "playlistItems",
            &[
                ("part", "snippet,contentDetails"),
                ("playlistId", playlist_id),
                ("maxResults", max_results.as_str()),
            ],
        )
        .await
    }
}
