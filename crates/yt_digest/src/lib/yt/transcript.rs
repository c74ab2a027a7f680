use itertools::Itertools;
use reqwest::Client;
use serde_json::Value;

use crate::{
    error::Error,
    parser::{parse_caption_tracks, parse_json3_segments, YtHtmlDocument},
    yt::{TranscriptList, TranscriptSource, TranscriptTrack},
};

const PREFERRED_LANGUAGES: &[&str] = &["en"];

/// Fetches the best available transcript of `video_id` as plain text.
///
/// English (manual or generated) is preferred; otherwise the first listed track is
/// used. Caption cues are joined with single spaces. Every failure, including
/// videos with captions disabled, yields an empty string.
#[tracing::instrument(skip(source))]
pub async fn fetch_transcript_text<T: TranscriptSource>(source: &T, video_id: &str) -> String {
    let transcripts = match source.list_transcripts(video_id).await {
        Ok(transcripts) => transcripts,
        Err(e @ (Error::TranscriptsDisabled(_) | Error::NoTranscriptFound { .. })) => {
            tracing::info!(reason = %e, "No transcript available");
            return String::new();
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to list transcripts");
            return String::new();
        }
    };

    let english = match transcripts.find_transcript(PREFERRED_LANGUAGES) {
        Ok(track) => {
            tracing::debug!(language = %track.language_code, generated = track.is_generated, "Found English transcript");
            source.fetch_transcript(track).await
        }
        Err(e) => Err(e),
    };

    let segments = match english {
        Ok(segments) => Ok(segments),
        Err(e) => {
            tracing::debug!(reason = %e, "No English transcript, trying the first available one");
            match transcripts.iter().next() {
                Some(track) => source.fetch_transcript(track).await,
                None => Err(Error::TranscriptsDisabled(video_id.to_string())),
            }
        }
    };

    match segments {
        Ok(segments) => segments.iter().join(" "),
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch transcript");
            String::new()
        }
    }
}

/// Reads captions the way the YouTube web player does: scrape the watch page for the
/// player key, ask the player endpoint for the caption tracks, then download a track
/// in `json3` format.
#[derive(Debug, Clone)]
pub struct TranscriptApi {
    client: Client,
    base_url: String,
}

impl TranscriptApi {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            base_url: "https://www.youtube.com".into(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_watch_page(&self, video_id: &str) -> Result<YtHtmlDocument, Error> {
        let resp = self
            .client
            .get(format!("{}{}", self.base_url, Self::WATCH_URL))
            .query(&[("v", video_id)])
            .header("Accept-Language", "en-US,en;q=0.9")
            .send()
            .await?;

        check_status(&resp, video_id)?;

        Ok(resp.text().await?.into())
    }

    #[tracing::instrument(skip(self, api_key))]
    async fn fetch_player_response(&self, video_id: &str, api_key: &str) -> Result<Value, Error> {
        let body = serde_json::json!({
            "context": {
                "client": {
                    "clientName": "ANDROID",
                    "clientVersion": "20.10.38"
                }
            },
            "videoId": video_id
        });

        let resp = self
            .client
            .post(format!("{}/youtubei/v1/player", self.base_url))
            .query(&[("key", api_key)])
            .header("Accept-Language", "en-US,en;q=0.9")
            .json(&body)
            .send()
            .await?;

        check_status(&resp, video_id)?;

        Ok(resp.json::<Value>().await?)
    }
}

fn check_status(resp: &reqwest::Response, video_id: &str) -> Result<(), Error> {
    match resp.status().as_u16() {
        429 => Err(Error::RequestBlocked(video_id.to_string())),
        status if !resp.status().is_success() => Err(Error::HttpStatus {
            video_id: video_id.to_string(),
            status,
        }),
        _ => Ok(()),
    }
}

impl TranscriptSource for TranscriptApi {
    const WATCH_URL: &'static str = "/watch";

    async fn list_transcripts(&self, video_id: &str) -> Result<TranscriptList, Error> {
        let page = self.fetch_watch_page(video_id).await?;
        let api_key = page.innertube_api_key(video_id)?;
        let player = self.fetch_player_response(video_id, &api_key).await?;

        parse_caption_tracks(video_id, &player)
    }

    async fn fetch_transcript(&self, track: &TranscriptTrack) -> Result<Vec<String>, Error> {
        let resp = self
            .client
            .get(&track.base_url)
            .query(&[("fmt", "json3")])
            .header("Accept-Language", "en-US,en;q=0.9")
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            return Err(Error::HttpStatus {
                video_id: track.video_id.clone(),
                status: resp.status().as_u16(),
            });
        }

        let json = resp.json::<Value>().await?;
        Ok(parse_json3_segments(&json))
    }
}
