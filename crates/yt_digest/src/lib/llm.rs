pub mod openai;
pub mod summarizer;
