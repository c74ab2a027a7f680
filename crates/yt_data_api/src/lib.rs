//! # YouTube Data API
//!
//! This crate provides a small typed client for the parts of the YouTube Data API v3
//! used to look up channels and their uploads.
//!
//! The [`VideoPlatform`] trait abstracts the four calls the digest service needs so
//! callers can be exercised against in-memory fakes, while [`YouTubeDataClient`]
//! talks to the real API over `reqwest`.

mod client;
mod domain;
mod error;

pub use client::youtube::YouTubeDataClient;
pub use client::VideoPlatform;
pub use domain::{
    Channel, ChannelContentDetails, ChannelSnippet, ListResponse, PlaylistItem,
    PlaylistItemContentDetails, PlaylistItemSnippet, RelatedPlaylists, ResourceId, SearchResult,
    SearchResultId, SearchSnippet, Thumbnail, Thumbnails,
};
pub use error::YouTubeApiError;
