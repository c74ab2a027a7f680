use yt_data_api::{PlaylistItem, VideoPlatform, YouTubeApiError};

use crate::{
    types::VideoRecord,
    yt::resolver::{channel_id_from_url, looks_like_channel_id, looks_like_url},
};

/// Only the newest upload is ever used, so only one is requested
const UPLOADS_PAGE_SIZE: u32 = 1;

/// Fetches the most recent upload of `channel`.
///
/// `channel` may be a raw channel ID, a `/channel/<ID>` URL, or anything else a channel
/// search can match (handles, `/c/` and `/user/` URLs). The result holds at most one
/// video; lookup failures are logged and yield an empty list.
#[tracing::instrument(skip(platform))]
pub async fn fetch_latest_video<P: VideoPlatform>(platform: &P, channel: &str) -> Vec<VideoRecord> {
    match try_fetch_latest_video(platform, channel).await {
        Ok(Some(video)) => vec![video],
        Ok(None) => {
            tracing::info!("No uploads found for channel");
            Vec::new()
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch latest video");
            Vec::new()
        }
    }
}

async fn try_fetch_latest_video<P: VideoPlatform>(
    platform: &P,
    channel: &str,
) -> Result<Option<VideoRecord>, YouTubeApiError> {
    let Some(channel_id) = canonical_channel_id(platform, channel).await? else {
        return Ok(None);
    };

    let Some(info) = platform
        .channels_by_id(&channel_id)
        .await?
        .into_iter()
        .next()
    else {
        return Ok(None);
    };

    let uploads_playlist_id = info
        .uploads_playlist_id()
        .ok_or(YouTubeApiError::MissingField(
            "contentDetails.relatedPlaylists.uploads",
        ))?;
    let channel_name = info
        .title()
        .ok_or(YouTubeApiError::MissingField("snippet.title"))?;

    let items = platform
        .playlist_items(uploads_playlist_id, UPLOADS_PAGE_SIZE)
        .await?;

    items
        .into_iter()
        .next()
        .map(|item| video_record(item, channel_name))
        .transpose()
}

async fn canonical_channel_id<P: VideoPlatform>(
    platform: &P,
    channel: &str,
) -> Result<Option<String>, YouTubeApiError> {
    if let Some(channel_id) = channel_id_from_url(channel) {
        return Ok(Some(channel_id));
    }

    if looks_like_channel_id(channel) && !looks_like_url(channel) {
        return Ok(Some(channel.to_string()));
    }

    let results = platform.search_channels(channel, 1).await?;
    Ok(results.into_iter().next().and_then(|hit| hit.id.channel_id))
}

fn video_record(item: PlaylistItem, channel_name: &str) -> Result<VideoRecord, YouTubeApiError> {
    let video_id = item
        .video_id()
        .ok_or(YouTubeApiError::MissingField("contentDetails.videoId"))?
        .to_string();
    let snippet = item
        .snippet
        .ok_or(YouTubeApiError::MissingField("snippet"))?;

    Ok(VideoRecord {
        video_id,
        thumbnail_url: snippet
            .thumbnails
            .high_or_lower()
            .unwrap_or_default()
            .to_string(),
        title: snippet.title,
        published_at: snippet.published_at,
        channel_name: channel_name.to_string(),
    })
}
