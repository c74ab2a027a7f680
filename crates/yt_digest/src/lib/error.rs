#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Parse error: {0}")]
    ParseError(&'static str),
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("YouTube returned status {status} for video {video_id}")]
    HttpStatus { video_id: String, status: u16 },
    #[error("Transcripts are disabled for video {0}")]
    TranscriptsDisabled(String),
    #[error("No transcript found for video {video_id} in languages {languages:?}")]
    NoTranscriptFound {
        video_id: String,
        languages: Vec<String>,
    },
    #[error("YouTube is blocking requests for video {0}")]
    RequestBlocked(String),
    #[error("Video {video_id} is unplayable: {reason}")]
    VideoUnplayable { video_id: String, reason: String },
}
