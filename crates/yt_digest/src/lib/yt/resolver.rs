//! Turns free-form channel references (handles, channel URLs, raw channel IDs) into a
//! channel identity.

use yt_data_api::{Channel, VideoPlatform, YouTubeApiError};

use crate::types::{ChannelValidation, ResolvedChannel};

/// Every channel ID issued by the platform starts with this prefix
pub const CHANNEL_ID_PREFIX: &str = "UC";
const URL_HOST_MARKER: &str = "youtube.com/";

pub fn looks_like_url(input: &str) -> bool {
    input.starts_with("http")
}

pub fn looks_like_channel_id(input: &str) -> bool {
    input.starts_with(CHANNEL_ID_PREFIX)
}

/// Returns the `@handle` a reference points at.
///
/// The segment after the last `@` wins (up to the next `/` or `?`). A bare word that is
/// neither URL-shaped nor a channel ID is taken to be a handle typed without its `@`.
pub fn extract_handle(input: &str) -> Option<String> {
    if let Some((_, rest)) = input.rsplit_once('@') {
        let end = rest.find(['/', '?']).unwrap_or(rest.len());
        return Some(format!("@{}", &rest[..end]));
    }

    if !looks_like_url(input) && !looks_like_channel_id(input) {
        return Some(format!("@{input}"));
    }

    None
}

/// Free-text query for the channel search: the first path segment after the host for
/// channel URLs (with any `@` removed), otherwise the raw reference.
pub fn search_query(input: &str) -> String {
    match input.rsplit_once(URL_HOST_MARKER) {
        Some((_, path)) => path
            .replace('@', "")
            .split('/')
            .next()
            .unwrap_or_default()
            .to_string(),
        None => input.to_string(),
    }
}

/// Channel ID embedded in a `/channel/<ID>` URL
pub fn channel_id_from_url(input: &str) -> Option<String> {
    let (_, rest) = input.split_once("channel/")?;
    let id = rest.split(['/', '?']).next().unwrap_or_default();
    (!id.is_empty()).then(|| id.to_string())
}

/// A single way of turning a reference into a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Handle,
    Search,
    ChannelId,
}

impl Strategy {
    /// Attempted in this order; the first one yielding a channel wins
    pub const ORDER: [Strategy; 3] = [Strategy::Handle, Strategy::Search, Strategy::ChannelId];

    /// Failures of the handle lookup fall through to the search instead of aborting
    fn falls_through_on_error(self) -> bool {
        matches!(self, Strategy::Handle)
    }

    async fn attempt<P: VideoPlatform>(
        self,
        platform: &P,
        input: &str,
    ) -> Result<Option<ResolvedChannel>, YouTubeApiError> {
        match self {
            Strategy::Handle => {
                let Some(handle) = extract_handle(input) else {
                    return Ok(None);
                };
                tracing::debug!(%handle, "Resolving as handle");

                let channels = platform.channels_by_handle(&handle).await?;
                channels.first().map(resolved_from_channel).transpose()
            }
            Strategy::Search => {
                let query = search_query(input);
                tracing::debug!(%query, "Searching for channel");

                let Some(hit) = platform.search_channels(&query, 1).await?.into_iter().next()
                else {
                    return Ok(None);
                };

                let id = hit
                    .id
                    .channel_id
                    .ok_or(YouTubeApiError::MissingField("id.channelId"))?;
                let snippet = hit
                    .snippet
                    .ok_or(YouTubeApiError::MissingField("snippet"))?;

                // the search snippet only carries a low quality avatar
                let details = platform.channels_by_id(&id).await?;
                let thumbnail_url = details
                    .first()
                    .and_then(Channel::default_thumbnail_url)
                    .or_else(|| snippet.thumbnails.default.as_ref().map(|t| t.url.as_str()))
                    .unwrap_or_default()
                    .to_string();

                Ok(Some(ResolvedChannel {
                    id,
                    display_name: snippet.title,
                    thumbnail_url,
                }))
            }
            Strategy::ChannelId => {
                if looks_like_url(input) {
                    return Ok(None);
                }

                let channels = platform.channels_by_id(input).await?;
                channels.first().map(resolved_from_channel).transpose()
            }
        }
    }
}

fn resolved_from_channel(channel: &Channel) -> Result<ResolvedChannel, YouTubeApiError> {
    let display_name = channel
        .title()
        .ok_or(YouTubeApiError::MissingField("snippet.title"))?;

    Ok(ResolvedChannel {
        id: channel.id.clone(),
        display_name: display_name.to_string(),
        thumbnail_url: channel
            .default_thumbnail_url()
            .unwrap_or_default()
            .to_string(),
    })
}

/// Runs [`Strategy::ORDER`] against `input` and returns the first channel found.
#[tracing::instrument(skip(platform))]
pub async fn resolve_channel<P: VideoPlatform>(
    platform: &P,
    input: &str,
) -> Result<Option<ResolvedChannel>, YouTubeApiError> {
    for strategy in Strategy::ORDER {
        match strategy.attempt(platform, input).await {
            Ok(Some(channel)) => {
                tracing::info!(?strategy, channel_id = %channel.id, "Resolved channel");
                return Ok(Some(channel));
            }
            Ok(None) => continue,
            Err(e) if strategy.falls_through_on_error() => {
                tracing::warn!(?strategy, error = %e, "Channel lookup failed, falling back");
            }
            Err(e) => return Err(e),
        }
    }

    Ok(None)
}

/// Resolves `input` and shapes the outcome for the validation endpoint. Never fails:
/// lookup errors are reported through [`ChannelValidation::error`].
pub async fn validate_channel<P: VideoPlatform>(platform: &P, input: &str) -> ChannelValidation {
    match resolve_channel(platform, input).await {
        Ok(Some(channel)) => ChannelValidation::valid(channel),
        Ok(None) => ChannelValidation::invalid("Channel not found"),
        Err(e) => {
            tracing::error!(error = %e, "Failed to validate channel");
            ChannelValidation::invalid(e.to_string())
        }
    }
}
