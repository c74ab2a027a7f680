use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use yt_data_api::{VideoPlatform, YouTubeDataClient};
use yt_digest::{
    api::router, openai::OpenAIClient, tracing::init_tracing_subscriber,
    yt::transcript::TranscriptApi, DigestProcessorBuilder, Summarizer,
};

#[derive(Parser)]
#[command(
    name = "yt-digest",
    about = "Summaries of the latest uploads of YouTube channels"
)]
struct Cli {
    /// Default YouTube Data API key, overridable per request via `x-youtube-key`
    #[arg(long, env = "YOUTUBE_API_KEY")]
    youtube_api_key: Option<String>,

    /// Default OpenAI API key, overridable per request via `x-openai-key`
    #[arg(long, env = "OPENAI_API_KEY")]
    openai_api_key: Option<String>,

    /// Address to bind the HTTP server to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to bind the HTTP server to
    #[arg(long, env = "PORT", default_value = "8000")]
    port: u16,

    /// Chat completion model used for summaries
    #[arg(long, env = "SUMMARIZER_MODEL", default_value = OpenAIClient::SUMMARIZER_MODEL)]
    summarizer_model: String,

    /// Timeout applied to every outbound HTTP request
    #[arg(long, env = "REQUEST_TIMEOUT_SECS", default_value = "30")]
    request_timeout_secs: u64,

    /// YouTube Data API base URL
    #[arg(long, env = "YOUTUBE_API_BASE_URL", default_value = YouTubeDataClient::DEFAULT_BASE_URL)]
    youtube_api_base_url: String,

    /// OpenAI API base URL
    #[arg(long, env = "OPENAI_BASE_URL", default_value = OpenAIClient::DEFAULT_BASE_URL)]
    openai_base_url: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let _guard = sentry::init((
        std::env::var("SENTRY_DSN").unwrap_or_default(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: Some("production".into()),
            ..Default::default()
        },
    ));

    let cli = Cli::parse();
    init_tracing_subscriber()?;

    let http_client = reqwest::Client::builder()
        .timeout(Duration::from_secs(cli.request_timeout_secs))
        .build()
        .context("Failed to build http client")?;

    let platform = YouTubeDataClient::new(http_client.clone(), cli.youtube_api_key)
        .with_base_url(cli.youtube_api_base_url);
    let summarizer = OpenAIClient::new(http_client.clone(), cli.openai_api_key)
        .with_base_url(cli.openai_base_url)
        .with_model(cli.summarizer_model);

    if missing_default_keys(&platform, &summarizer) {
        tracing::warn!("Default API keys missing, requests must supply them via headers");
    }

    let processor = DigestProcessorBuilder::new()
        .platform(platform)
        .transcripts(TranscriptApi::new(http_client))
        .summarizer(summarizer)
        .build();

    let listener = bind_listener(&cli.host, cli.port).await?;
    let addr = listener
        .local_addr()
        .context("Failed to read the bound address")?;

    tracing::info!(%addr, "Server listening");
    axum::serve(listener, router(processor))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}

/// Binds `host:port`, where `host` may be a name (`localhost`) or an IPv4/IPv6 literal
async fn bind_listener(host: &str, port: u16) -> anyhow::Result<TcpListener> {
    TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind {host}:{port}"))
}

fn missing_default_keys(platform: &YouTubeDataClient, summarizer: &OpenAIClient) -> bool {
    platform.api_key().is_none() || !summarizer.has_api_key()
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutting down");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["yt-digest", "--youtube-api-key", "yt", "--openai-api-key", "oa"])
            .unwrap();
        assert_eq!(cli.youtube_api_key.as_deref(), Some("yt"));
        assert_eq!(cli.openai_api_key.as_deref(), Some("oa"));
        assert_eq!(
            cli.summarizer_model,
            env_or("SUMMARIZER_MODEL", OpenAIClient::SUMMARIZER_MODEL)
        );
        assert_eq!(cli.host, env_or("HOST", "0.0.0.0"));
    }

    /// clap reads defaults from the environment first
    fn env_or(name: &str, default: &str) -> String {
        std::env::var(name)
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| default.to_string())
    }

    #[test]
    fn test_cli_flags_override() {
        let cli = Cli::try_parse_from([
            "yt-digest",
            "--port",
            "9000",
            "--host",
            "127.0.0.1",
            "--request-timeout-secs",
            "5",
        ])
        .unwrap();
        assert_eq!(cli.port, 9000);
        assert_eq!(cli.host, "127.0.0.1");
        assert_eq!(cli.request_timeout_secs, 5);
    }

    #[tokio::test]
    async fn test_bind_accepts_host_names_and_ipv4() {
        let listener = bind_listener("localhost", 0).await.unwrap();
        assert!(listener.local_addr().unwrap().ip().is_loopback());

        let listener = bind_listener("127.0.0.1", 0).await.unwrap();
        assert_eq!(listener.local_addr().unwrap().ip().to_string(), "127.0.0.1");
    }
}
