#[derive(Debug, thiserror::Error)]
pub enum YouTubeApiError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("YouTube API error: {status} - {message}")]
    Api { status: u16, message: String },
    #[error("YouTube API key not configured")]
    MissingApiKey,
    #[error("Missing field in YouTube API response: {0}")]
    MissingField(&'static str),
}
