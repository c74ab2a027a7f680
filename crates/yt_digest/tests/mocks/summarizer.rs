use std::sync::{Arc, Mutex};

use yt_digest::{Summarizer, SummaryResponse};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummarizeCall {
    pub api_key: Option<String>,
    pub transcript: String,
}

#[derive(Clone, Default)]
pub struct MockSummarizer {
    pub api_key: Option<String>,
    pub should_fail: bool,
    pub fail_message: String,
    pub calls: Arc<Mutex<Vec<SummarizeCall>>>,
}

impl MockSummarizer {
    pub fn new() -> Self {
        Self {
            api_key: Some("default-openai-key".into()),
            ..Default::default()
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            should_fail: true,
            fail_message: msg.to_string(),
            ..Self::new()
        }
    }

    pub fn calls(&self) -> Vec<SummarizeCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl Summarizer for MockSummarizer {
    const SUMMARIZER_MODEL: &'static str = "mock-gpt";
    type Error = anyhow::Error;

    fn with_api_key(&self, api_key: &str) -> Self {
        Self {
            api_key: Some(api_key.to_string()),
            ..self.clone()
        }
    }

    async fn summarize(&self, transcript: &str) -> Result<SummaryResponse, Self::Error> {
        self.calls.lock().unwrap().push(SummarizeCall {
            api_key: self.api_key.clone(),
            transcript: transcript.to_string(),
        });

        if self.should_fail {
            anyhow::bail!("{}", self.fail_message);
        }

        Ok(SummaryResponse {
            summary: format!("summary of: {transcript}"),
        })
    }
}
