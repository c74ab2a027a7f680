use std::{fmt::Display, future::Future};

use serde::Deserialize;

pub const NO_TRANSCRIPT_PLACEHOLDER: &str = "No transcript available.";
pub const SUMMARY_FAILED_PLACEHOLDER: &str = "Summary generation failed.";

/// Transcripts are cut to this many characters before being sent to the model
pub const MAX_TRANSCRIPT_CHARS: usize = 10_000;

pub trait Summarizer {
    const SUMMARIZER_MODEL: &'static str;
    const MAX_OUTPUT_TOKENS: u32 = 300;

    type Error: Display;

    /// Returns a copy of this summarizer that authenticates with `api_key`
    fn with_api_key(&self, api_key: &str) -> Self
    where
        Self: Sized;

    fn summarize(
        &self,
        transcript: &str,
    ) -> impl Future<Output = Result<SummaryResponse, Self::Error>> + Send;
}

#[derive(Debug, Clone, Deserialize)]
pub struct SummaryResponse {
    pub summary: String,
}

/// Summarizes `transcript`, falling back to placeholder text instead of failing.
///
/// An empty transcript short-circuits to [`NO_TRANSCRIPT_PLACEHOLDER`] without calling
/// the model; any model failure yields [`SUMMARY_FAILED_PLACEHOLDER`].
#[tracing::instrument(skip_all, fields(transcript_len = transcript.len()))]
pub async fn summarize_transcript<S: Summarizer>(summarizer: &S, transcript: &str) -> String {
    if transcript.is_empty() {
        return NO_TRANSCRIPT_PLACEHOLDER.to_string();
    }

    let transcript = truncate_chars(transcript, MAX_TRANSCRIPT_CHARS);

    match summarizer.summarize(transcript).await {
        Ok(SummaryResponse { summary }) => summary,
        Err(e) => {
            tracing::error!(error = %e, "Failed to summarize transcript");
            SUMMARY_FAILED_PLACEHOLDER.to_string()
        }
    }
}

/// Longest prefix of `text` holding at most `max_chars` characters
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
