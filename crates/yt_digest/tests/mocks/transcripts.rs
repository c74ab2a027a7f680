use std::{
    collections::{HashMap, HashSet},
    sync::{Arc, Mutex},
};

use yt_digest::{
    yt::{TranscriptList, TranscriptSource, TranscriptTrack},
    Error,
};

#[derive(Clone, Default)]
pub struct MockTranscripts {
    pub tracks: HashMap<String, Vec<(TranscriptTrack, Vec<String>)>>,
    /// `(video_id, language_code)` pairs whose download fails
    pub failing_fetches: HashSet<(String, String)>,
    pub fetched: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockTranscripts {
    pub fn with_track(
        mut self,
        video_id: &str,
        language_code: &str,
        is_generated: bool,
        segments: &[&str],
    ) -> Self {
        let track = TranscriptTrack {
            video_id: video_id.to_string(),
            language_code: language_code.to_string(),
            language: language_code.to_uppercase(),
            is_generated,
            base_url: format!("mock://captions/{video_id}/{language_code}"),
        };
        self.tracks
            .entry(video_id.to_string())
            .or_default()
            .push((track, segments.iter().map(|s| s.to_string()).collect()));
        self
    }

    pub fn failing_fetch(mut self, video_id: &str, language_code: &str) -> Self {
        self.failing_fetches
            .insert((video_id.to_string(), language_code.to_string()));
        self
    }

    pub fn fetched(&self) -> Vec<(String, String)> {
        self.fetched.lock().unwrap().clone()
    }
}

impl TranscriptSource for MockTranscripts {
    const WATCH_URL: &'static str = "mock://watch";

    async fn list_transcripts(&self, video_id: &str) -> Result<TranscriptList, Error> {
        let tracks = self
            .tracks
            .get(video_id)
            .ok_or_else(|| Error::TranscriptsDisabled(video_id.to_string()))?;

        let (generated, manually_created) = tracks
            .iter()
            .map(|(track, _)| track.clone())
            .partition(|track| track.is_generated);

        Ok(TranscriptList {
            video_id: video_id.to_string(),
            manually_created,
            generated,
        })
    }

    async fn fetch_transcript(&self, track: &TranscriptTrack) -> Result<Vec<String>, Error> {
        let key = (track.video_id.clone(), track.language_code.clone());
        self.fetched.lock().unwrap().push(key.clone());

        if self.failing_fetches.contains(&key) {
            return Err(Error::HttpStatus {
                video_id: track.video_id.clone(),
                status: 500,
            });
        }

        self.tracks
            .get(&track.video_id)
            .and_then(|tracks| tracks.iter().find(|(t, _)| t == track))
            .map(|(_, segments)| segments.clone())
            .ok_or_else(|| Error::TranscriptsDisabled(track.video_id.clone()))
    }
}
