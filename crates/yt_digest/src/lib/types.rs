use serde::{Deserialize, Serialize};

/// A channel identity produced by the resolver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedChannel {
    pub id: String,
    pub display_name: String,
    pub thumbnail_url: String,
}

/// Metadata of the most recent upload of a channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoRecord {
    pub video_id: String,
    pub title: String,
    /// ISO-8601 timestamp as returned by the platform
    pub published_at: String,
    pub channel_name: String,
    pub thumbnail_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoSummary {
    pub video_id: String,
    pub title: String,
    pub channel_name: String,
    pub published_at: String,
    pub summary: String,
    pub thumbnail_url: String,
}

impl VideoSummary {
    pub fn new(video: VideoRecord, summary: String) -> Self {
        let VideoRecord {
            video_id,
            title,
            published_at,
            channel_name,
            thumbnail_url,
        } = video;

        Self {
            video_id,
            title,
            channel_name,
            published_at,
            summary,
            thumbnail_url,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelValidation {
    pub is_valid: bool,
    pub channel_name: Option<String>,
    pub channel_thumbnail: Option<String>,
    pub error: Option<String>,
}

impl ChannelValidation {
    pub fn valid(channel: ResolvedChannel) -> Self {
        Self {
            is_valid: true,
            channel_name: Some(channel.display_name),
            channel_thumbnail: Some(channel.thumbnail_url),
            error: None,
        }
    }

    pub fn invalid(error: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            channel_name: None,
            channel_thumbnail: None,
            error: Some(error.into()),
        }
    }
}

/// Per-request credentials that take precedence over the configured defaults
#[derive(Debug, Clone, Default)]
pub struct CredentialOverrides {
    pub youtube_api_key: Option<String>,
    pub openai_api_key: Option<String>,
}
