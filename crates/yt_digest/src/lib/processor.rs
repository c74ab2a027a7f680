pub mod builder;

use yt_data_api::VideoPlatform;

use crate::{
    llm::summarizer::{summarize_transcript, Summarizer},
    types::{ChannelValidation, CredentialOverrides, VideoSummary},
    yt::{
        resolver::validate_channel, transcript::fetch_transcript_text, uploads::fetch_latest_video,
        TranscriptSource,
    },
};

/// Builds digests of the latest uploads of a set of channels
#[derive(Debug)]
pub struct DigestProcessor<P, T, S>
where
    P: VideoPlatform + Send + Sync + 'static,
    T: TranscriptSource + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
{
    pub(crate) platform: P,
    pub(crate) transcripts: T,
    pub(crate) summarizer: S,
}

impl<P, T, S> DigestProcessor<P, T, S>
where
    P: VideoPlatform + Clone + Send + Sync + 'static,
    T: TranscriptSource + Send + Sync + 'static,
    S: Summarizer + Clone + Send + Sync + 'static,
{
    pub fn new(platform: P, transcripts: T, summarizer: S) -> Self {
        DigestProcessor {
            platform,
            transcripts,
            summarizer,
        }
    }

    /// Platform client for one request, or `None` if no credential is available at all
    fn platform_for(&self, api_key: Option<&str>) -> Option<P> {
        match api_key {
            Some(key) => Some(self.platform.with_api_key(key)),
            None if self.platform.api_key().is_some() => Some(self.platform.clone()),
            None => None,
        }
    }

    fn summarizer_for(&self, api_key: Option<&str>) -> S {
        match api_key {
            Some(key) => self.summarizer.with_api_key(key),
            None => self.summarizer.clone(),
        }
    }

    /// Summarizes the latest upload of every channel in `channels`.
    ///
    /// Channels are processed one after another and the output keeps their order.
    /// Channels that cannot be resolved or have no uploads are left out.
    #[tracing::instrument(skip(self, overrides), fields(channels = channels.len()))]
    pub async fn digest(
        &self,
        channels: &[String],
        overrides: &CredentialOverrides,
    ) -> Vec<VideoSummary> {
        let Some(platform) = self.platform_for(overrides.youtube_api_key.as_deref()) else {
            tracing::warn!("YouTube API key not configured, skipping all channels");
            return Vec::new();
        };
        let summarizer = self.summarizer_for(overrides.openai_api_key.as_deref());

        let mut summaries = Vec::new();

        for channel in channels {
            for video in fetch_latest_video(&platform, channel).await {
                let transcript = fetch_transcript_text(&self.transcripts, &video.video_id).await;
                let summary = summarize_transcript(&summarizer, &transcript).await;

                tracing::info!(video_id = %video.video_id, %channel, "Summarized video");
                summaries.push(VideoSummary::new(video, summary));
            }
        }

        summaries
    }

    /// Checks that `input` identifies an existing channel
    #[tracing::instrument(skip(self, youtube_api_key))]
    pub async fn validate_channel(
        &self,
        input: &str,
        youtube_api_key: Option<&str>,
    ) -> ChannelValidation {
        match self.platform_for(youtube_api_key) {
            Some(platform) => validate_channel(&platform, input).await,
            None => ChannelValidation::invalid("YouTube API Key not configured"),
        }
    }
}
