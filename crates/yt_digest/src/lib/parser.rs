//! # Yt Parser
//!
//! This module extracts the pieces of a YouTube watch page and player response
//! needed to list and read a video's caption tracks.

use std::{ops::Deref, sync::LazyLock};

use regex::Regex;
use serde_json::Value;

use crate::{
    error::Error,
    yt::{TranscriptList, TranscriptTrack},
};

static INNERTUBE_API_KEY_RE: LazyLock<Regex> = LazyLock::new(|| {
    regex::Regex::new(r#""INNERTUBE_API_KEY":\s*"([a-zA-Z0-9_-]+)""#).unwrap()
});

/// Parses the caption tracks advertised by a player response.
///
/// # Parameters
/// * `video_id`: The video the player response belongs to, used in errors.
/// * `json`: The body returned by the `youtubei/v1/player` endpoint.
///
/// # Returns
/// * `Ok(TranscriptList)` holding manually created tracks and generated tracks,
///   each in the order the player lists them.
/// * `Err(Error::TranscriptsDisabled)` if the video carries no caption tracks.
/// * `Err(Error::VideoUnplayable)` if the player refused to serve the video.
#[tracing::instrument(skip(json))]
pub fn parse_caption_tracks(video_id: &str, json: &Value) -> Result<TranscriptList, Error> {
    assert_playability(video_id, json)?;

    let Some(caption_tracks) =
        json["captions"]["playerCaptionsTracklistRenderer"]["captionTracks"].as_array()
    else {
        return Err(Error::TranscriptsDisabled(video_id.to_string()));
    };

    let mut manually_created = Vec::new();
    let mut generated = Vec::new();

    for caption in caption_tracks {
        let (Some(language_code), Some(base_url)) = (
            caption["languageCode"].as_str(),
            caption["baseUrl"].as_str(),
        ) else {
            continue;
        };

        let language = caption["name"]["runs"][0]["text"]
            .as_str()
            .or_else(|| caption["name"]["simpleText"].as_str())
            .unwrap_or(language_code)
            .to_string();
        let is_generated = caption["kind"].as_str() == Some("asr");

        let track = TranscriptTrack {
            video_id: video_id.to_string(),
            language_code: language_code.to_string(),
            language,
            is_generated,
            base_url: base_url.replace("&fmt=srv3", ""),
        };

        if is_generated {
            generated.push(track);
        } else {
            manually_created.push(track);
        }
    }

    if manually_created.is_empty() && generated.is_empty() {
        return Err(Error::TranscriptsDisabled(video_id.to_string()));
    }

    Ok(TranscriptList {
        video_id: video_id.to_string(),
        manually_created,
        generated,
    })
}

fn assert_playability(video_id: &str, json: &Value) -> Result<(), Error> {
    let status = json["playabilityStatus"]["status"].as_str();
    if matches!(status, None | Some("OK")) {
        return Ok(());
    }

    let reason = json["playabilityStatus"]["reason"]
        .as_str()
        .unwrap_or_default();

    if status == Some("LOGIN_REQUIRED") && reason.contains("not a bot") {
        return Err(Error::RequestBlocked(video_id.to_string()));
    }

    Err(Error::VideoUnplayable {
        video_id: video_id.to_string(),
        reason: if reason.is_empty() {
            status.unwrap_or_default().to_string()
        } else {
            reason.to_string()
        },
    })
}

/// Collects the text of every caption event of a `json3` caption document.
/// Events carrying only whitespace (line breaks between cues) are skipped.
pub fn parse_json3_segments(json: &Value) -> Vec<String> {
    json["events"]
        .as_array()
        .map(|events| {
            events
                .iter()
                .filter_map(|event| {
                    event["segs"].as_array().map(|segs| {
                        segs.iter()
                            .filter_map(|seg| seg["utf8"].as_str())
                            .collect::<String>()
                    })
                })
                .map(|text| text.trim().to_string())
                .filter(|text| !text.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

pub struct YtHtmlDocument(String);

impl Deref for YtHtmlDocument {
    type Target = String;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl YtHtmlDocument {
    pub fn new(doc: String) -> Self {
        YtHtmlDocument(doc)
    }

    /// Extracts the key the watch page uses to call the player endpoint
    pub fn innertube_api_key(&self, video_id: &str) -> Result<String, Error> {
        if self.contains("class=\"g-recaptcha\"") {
            return Err(Error::RequestBlocked(video_id.to_string()));
        }

        INNERTUBE_API_KEY_RE
            .captures(self)
            .and_then(|cap| cap.get(1))
            .map(|m| m.as_str().to_string())
            .ok_or(Error::ParseError(
                "Failed to extract INNERTUBE_API_KEY from the watch page",
            ))
    }
}

impl From<String> for YtHtmlDocument {
    fn from(value: String) -> Self {
        YtHtmlDocument(value)
    }
}
