//! HTTP surface of the digest service.
//!
//! Both endpoints always answer `200 OK`; failures are reported in the payload.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{HeaderMap, Method},
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use yt_data_api::VideoPlatform;

use crate::{
    types::{ChannelValidation, CredentialOverrides, VideoSummary},
    yt::TranscriptSource,
    DigestProcessor, Summarizer,
};

pub const OPENAI_KEY_HEADER: &str = "x-openai-key";
pub const YOUTUBE_KEY_HEADER: &str = "x-youtube-key";

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Values of every `name` pair, in query order
fn query_values(params: Vec<(String, String)>, name: &str) -> impl Iterator<Item = String> + '_ {
    params
        .into_iter()
        .filter(move |(key, _)| key == name)
        .map(|(_, value)| value)
}

async fn digest<P, T, S>(
    State(processor): State<Arc<DigestProcessor<P, T, S>>>,
    headers: HeaderMap,
    Query(params): Query<Vec<(String, String)>>,
) -> Json<Vec<VideoSummary>>
where
    P: VideoPlatform + Clone + Send + Sync + 'static,
    T: TranscriptSource + Send + Sync + 'static,
    S: Summarizer + Clone + Send + Sync + 'static,
{
    let channels = query_values(params, "channels").collect::<Vec<_>>();

    let overrides = CredentialOverrides {
        youtube_api_key: header_value(&headers, YOUTUBE_KEY_HEADER),
        openai_api_key: header_value(&headers, OPENAI_KEY_HEADER),
    };

    Json(processor.digest(&channels, &overrides).await)
}

async fn validate_channel<P, T, S>(
    State(processor): State<Arc<DigestProcessor<P, T, S>>>,
    headers: HeaderMap,
    Query(params): Query<Vec<(String, String)>>,
) -> Json<ChannelValidation>
where
    P: VideoPlatform + Clone + Send + Sync + 'static,
    T: TranscriptSource + Send + Sync + 'static,
    S: Summarizer + Clone + Send + Sync + 'static,
{
    // a repeated `url` resolves to its last value
    let Some(url) = query_values(params, "url").last() else {
        return Json(ChannelValidation::invalid("Missing 'url' query parameter"));
    };

    let youtube_api_key = header_value(&headers, YOUTUBE_KEY_HEADER);

    Json(
        processor
            .validate_channel(&url, youtube_api_key.as_deref())
            .await,
    )
}

/// Builds the service router around `processor`
pub fn router<P, T, S>(processor: DigestProcessor<P, T, S>) -> Router
where
    P: VideoPlatform + Clone + Send + Sync + 'static,
    T: TranscriptSource + Send + Sync + 'static,
    S: Summarizer + Clone + Send + Sync + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers(Any);

    Router::new()
        .route("/digest", get(digest::<P, T, S>))
        .route("/validate-channel", get(validate_channel::<P, T, S>))
        .with_state(Arc::new(processor))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
