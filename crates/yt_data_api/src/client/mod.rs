use std::future::Future;

use crate::{Channel, PlaylistItem, SearchResult, YouTubeApiError};

pub mod youtube;

/// The subset of the video platform's metadata API used for channel resolution
/// and upload listing.
pub trait VideoPlatform {
    /// The credential requests are currently signed with, if any
    fn api_key(&self) -> Option<&str>;

    /// Returns a copy of this client that signs requests with `api_key` instead.
    /// The original client is left untouched.
    fn with_api_key(&self, api_key: &str) -> Self
    where
        Self: Sized;

    /// `channels.list?forHandle=` with `id,snippet` parts
    fn channels_by_handle(
        &self,
        handle: &str,
    ) -> impl Future<Output = Result<Vec<Channel>, YouTubeApiError>> + Send;

    /// `channels.list?id=` with `id,snippet,contentDetails` parts
    fn channels_by_id(
        &self,
        channel_id: &str,
    ) -> impl Future<Output = Result<Vec<Channel>, YouTubeApiError>> + Send;

    /// `search.list?type=channel` with `id,snippet` parts
    fn search_channels(
        &self,
        query: &str,
        max_results: u32,
    ) -> impl Future<Output = Result<Vec<SearchResult>, YouTubeApiError>> + Send;

    /// `playlistItems.list` with `snippet,contentDetails` parts
    fn playlist_items(
        &self,
        playlist_id: &str,
        max_results: u32,
    ) -> impl Future<Output = Result<Vec<PlaylistItem>, YouTubeApiError>> + Send;
}
