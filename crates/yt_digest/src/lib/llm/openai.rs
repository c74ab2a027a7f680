use reqwest::Client;
use serde::Deserialize;

use crate::{Summarizer, SummaryResponse};

#[derive(Debug, Clone)]
pub struct OpenAIClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
}

#[derive(Debug, thiserror::Error)]
pub enum OpenAIError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
    #[error("OpenAI API key not configured")]
    MissingApiKey,
    #[error("No content in completion response")]
    EmptyCompletion,
}

impl OpenAIClient {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.openai.com/v1";
    const SYSTEM_PROMPT: &'static str = include_str!("./prompts/system_0.txt");
    const SUMMARY_PROMPT: &'static str = include_str!("./prompts/summary_0.txt");

    pub fn new(client: Client, api_key: Option<String>) -> Self {
        Self {
            client,
            api_key: api_key.filter(|k| !k.is_empty()),
            base_url: Self::DEFAULT_BASE_URL.into(),
            model: <Self as Summarizer>::SUMMARIZER_MODEL.into(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn summary_prompt(transcript: &str) -> String {
        Self::SUMMARY_PROMPT
            .trim_end()
            .replace("{transcript}", transcript)
    }

    pub async fn send_completion_request(
        &self,
        user_content: impl Into<String>,
        max_tokens: u32,
    ) -> Result<CompletionResponse, OpenAIError> {
        let api_key = self.api_key.as_deref().ok_or(OpenAIError::MissingApiKey)?;

        let body = serde_json::json!({
            "model": self.model,
            "max_tokens": max_tokens,
            "messages": [
                {
                    "role": "system",
                    "content": Self::SYSTEM_PROMPT.trim()
                },
                {
                    "role": "user",
                    "content": user_content.into()
                }
            ]
        });

        let resp = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(OpenAIError::Api { status, message });
        }

        Ok(resp.json::<CompletionResponse>().await?)
    }
}

#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    pub choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
pub struct CompletionChoice {
    pub message: CompletionMessage,
}

#[derive(Debug, Deserialize)]
pub struct CompletionMessage {
    pub content: Option<String>,
}

impl Summarizer for OpenAIClient {
    const SUMMARIZER_MODEL: &'static str = "gpt-4o-mini";
    type Error = OpenAIError;

    fn with_api_key(&self, api_key: &str) -> Self {
        Self {
            api_key: Some(api_key.to_string()).filter(|k| !k.is_empty()),
            ..self.clone()
        }
    }

    async fn summarize(&self, transcript: &str) -> Result<SummaryResponse, Self::Error> {
        let response = self
            .send_completion_request(Self::summary_prompt(transcript), Self::MAX_OUTPUT_TOKENS)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to summarize content"))?;

        let summary = response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or(OpenAIError::EmptyCompletion)?;

        Ok(SummaryResponse { summary })
    }
}
