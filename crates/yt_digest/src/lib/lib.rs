pub mod api;
mod error;
mod llm;
pub mod parser;
mod processor;
pub mod tracing;
pub mod types;
pub mod yt;

pub use error::Error;
pub use llm::openai;
pub use llm::summarizer::{
    summarize_transcript, Summarizer, SummaryResponse, NO_TRANSCRIPT_PLACEHOLDER,
    SUMMARY_FAILED_PLACEHOLDER,
};
pub use processor::{builder::DigestProcessorBuilder, DigestProcessor};
