pub mod resolver;
pub mod transcript;
pub mod uploads;

use std::{fmt::Debug, future::Future};

use crate::error::Error;

/// Lists and reads the caption tracks of a video
pub trait TranscriptSource {
    const WATCH_URL: &'static str;

    fn list_transcripts(
        &self,
        video_id: &str,
    ) -> impl Future<Output = Result<TranscriptList, Error>> + Send;

    /// Returns the caption text of `track`, one entry per cue
    fn fetch_transcript(
        &self,
        track: &TranscriptTrack,
    ) -> impl Future<Output = Result<Vec<String>, Error>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptTrack {
    pub video_id: String,
    pub language_code: String,
    pub language: String,
    pub is_generated: bool,
    pub base_url: String,
}

/// Caption tracks available for a single video
#[derive(Debug, Clone, Default)]
pub struct TranscriptList {
    pub video_id: String,
    pub manually_created: Vec<TranscriptTrack>,
    pub generated: Vec<TranscriptTrack>,
}

impl TranscriptList {
    /// Finds the first track matching `language_codes` in priority order,
    /// looking at manually created tracks before generated ones.
    pub fn find_transcript(&self, language_codes: &[&str]) -> Result<&TranscriptTrack, Error> {
        language_codes
            .iter()
            .find_map(|code| {
                self.manually_created
                    .iter()
                    .chain(&self.generated)
                    .find(|t| t.language_code == *code)
            })
            .ok_or_else(|| Error::NoTranscriptFound {
                video_id: self.video_id.clone(),
                languages: language_codes.iter().map(|s| s.to_string()).collect(),
            })
    }

    /// All tracks, manually created first
    pub fn iter(&self) -> impl Iterator<Item = &TranscriptTrack> {
        self.manually_created.iter().chain(&self.generated)
    }
}
