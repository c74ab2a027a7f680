use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use yt_data_api::{
    Channel, ChannelContentDetails, ChannelSnippet, PlaylistItem, PlaylistItemContentDetails,
    PlaylistItemSnippet, RelatedPlaylists, SearchResult, SearchResultId, SearchSnippet, Thumbnail,
    Thumbnails, VideoPlatform, YouTubeApiError,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformCall {
    pub method: &'static str,
    pub arg: String,
    pub api_key: Option<String>,
    pub max_results: Option<u32>,
}

#[derive(Clone, Default)]
pub struct MockPlatform {
    pub api_key: Option<String>,
    pub channels: HashMap<String, Channel>,
    pub handles: HashMap<String, String>,
    pub search: HashMap<String, SearchResult>,
    pub uploads: HashMap<String, Vec<PlaylistItem>>,
    pub fail_handle_lookup: Option<String>,
    pub fail_search: Option<String>,
    pub fail_channel_lookup: Option<String>,
    /// playlist id -> error message
    pub fail_playlists: HashMap<String, String>,
    pub calls: Arc<Mutex<Vec<PlatformCall>>>,
}

fn thumbnails(url: String) -> Thumbnails {
    Thumbnails {
        default: Some(Thumbnail {
            url: format!("{url}/default.jpg"),
            width: Some(88),
            height: Some(88),
        }),
        high: Some(Thumbnail {
            url: format!("{url}/high.jpg"),
            width: Some(480),
            height: Some(360),
        }),
        ..Default::default()
    }
}

impl MockPlatform {
    pub fn with_key(api_key: &str) -> Self {
        Self {
            api_key: Some(api_key.to_string()),
            ..Default::default()
        }
    }

    pub fn without_key() -> Self {
        Self::default()
    }

    /// Registers a channel whose uploads are given newest first as `(video_id, title, published_at)`
    pub fn with_channel(mut self, id: &str, title: &str, uploads: &[(&str, &str, &str)]) -> Self {
        let playlist_id = format!("UU{}", id.trim_start_matches("UC"));
        self.channels.insert(
            id.to_string(),
            Channel {
                id: id.to_string(),
                snippet: Some(ChannelSnippet {
                    title: title.to_string(),
                    thumbnails: thumbnails(format!("https://yt3.example/{id}")),
                    ..Default::default()
                }),
                content_details: Some(ChannelContentDetails {
                    related_playlists: RelatedPlaylists {
                        uploads: Some(playlist_id.clone()),
                    },
                }),
            },
        );

        let items = uploads
            .iter()
            .map(|(video_id, title, published_at)| PlaylistItem {
                snippet: Some(PlaylistItemSnippet {
                    title: title.to_string(),
                    published_at: published_at.to_string(),
                    channel_title: None,
                    thumbnails: thumbnails(format!("https://i.example/{video_id}")),
                    resource_id: None,
                }),
                content_details: Some(PlaylistItemContentDetails {
                    video_id: video_id.to_string(),
                    video_published_at: Some(published_at.to_string()),
                }),
            })
            .collect();
        self.uploads.insert(playlist_id, items);
        self
    }

    pub fn with_handle(mut self, handle: &str, channel_id: &str) -> Self {
        self.handles
            .insert(handle.to_string(), channel_id.to_string());
        self
    }

    pub fn with_search(mut self, query: &str, channel_id: &str, title: &str) -> Self {
        self.search.insert(
            query.to_string(),
            SearchResult {
                id: SearchResultId {
                    kind: "youtube#channel".into(),
                    channel_id: Some(channel_id.to_string()),
                },
                snippet: Some(SearchSnippet {
                    title: title.to_string(),
                    channel_id: Some(channel_id.to_string()),
                    channel_title: Some(title.to_string()),
                    thumbnails: thumbnails(format!("https://search.example/{channel_id}")),
                }),
            },
        );
        self
    }

    pub fn failing_handle_lookup(mut self, msg: &str) -> Self {
        self.fail_handle_lookup = Some(msg.to_string());
        self
    }

    pub fn failing_search(mut self, msg: &str) -> Self {
        self.fail_search = Some(msg.to_string());
        self
    }

    pub fn failing_channel_lookup(mut self, msg: &str) -> Self {
        self.fail_channel_lookup = Some(msg.to_string());
        self
    }

    pub fn failing_playlist(mut self, playlist_id: &str, msg: &str) -> Self {
        self.fail_playlists
            .insert(playlist_id.to_string(), msg.to_string());
        self
    }

    fn record(&self, method: &'static str, arg: &str, max_results: Option<u32>) {
        self.calls.lock().unwrap().push(PlatformCall {
            method,
            arg: arg.to_string(),
            api_key: self.api_key.clone(),
            max_results,
        });
    }

    pub fn calls_to(&self, method: &str) -> Vec<PlatformCall> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.method == method)
            .cloned()
            .collect()
    }
}

fn api_error(msg: &str) -> YouTubeApiError {
    YouTubeApiError::Api {
        status: 403,
        message: msg.to_string(),
    }
}

impl VideoPlatform for MockPlatform {
    fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    fn with_api_key(&self, api_key: &str) -> Self {
        Self {
            api_key: Some(api_key.to_string()),
            ..self.clone()
        }
    }

    async fn channels_by_handle(&self, handle: &str) -> Result<Vec<Channel>, YouTubeApiError> {
        self.record("channels_by_handle", handle, None);
        if let Some(ref msg) = self.fail_handle_lookup {
            return Err(api_error(msg));
        }
        Ok(self
            .handles
            .get(handle)
            .and_then(|id| self.channels.get(id))
            .cloned()
            .into_iter()
            .collect())
    }

    async fn channels_by_id(&self, channel_id: &str) -> Result<Vec<Channel>, YouTubeApiError> {
        self.record("channels_by_id", channel_id, None);
        if let Some(ref msg) = self.fail_channel_lookup {
            return Err(api_error(msg));
        }
        Ok(self.channels.get(channel_id).cloned().into_iter().collect())
    }

    async fn search_channels(
        &self,
        query: &str,
        max_results: u32,
    ) -> Result<Vec<SearchResult>, YouTubeApiError> {
        self.record("search_channels", query, Some(max_results));
        if let Some(ref msg) = self.fail_search {
            return Err(api_error(msg));
        }
        Ok(self.search.get(query).cloned().into_iter().collect())
    }

    async fn playlist_items(
        &self,
        playlist_id: &str,
        max_results: u32,
    ) -> Result<Vec<PlaylistItem>, YouTubeApiError> {
        self.record("playlist_items", playlist_id, Some(max_results));
        if let Some(msg) = self.fail_playlists.get(playlist_id) {
            return Err(api_error(msg));
        }
        Ok(self
            .uploads
            .get(playlist_id)
            .map(|items| items.iter().take(max_results as usize).cloned().collect())
            .unwrap_or_default())
    }
}
