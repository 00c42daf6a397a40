use axum::http::StatusCode;
use docchat::application::ports::{Embedder, EmbedderError};
use docchat::infrastructure::llm::OpenAiEmbedder;
use serde_json::json;

use super::upstream::{FakeUpstream, http_client};

fn embedder_for(upstream: &FakeUpstream) -> OpenAiEmbedder {
    // Trailing slash is tolerated.
    OpenAiEmbedder::new(
        http_client(),
        &format!("{}/", upstream.base_url),
        "sk-test".to_string(),
        "text-embedding-test".to_string(),
    )
}

#[tokio::test]
async fn given_embedding_response_when_embedding_then_returns_vector() {
    let upstream = FakeUpstream::start(
        "/v1/embeddings",
        StatusCode::OK,
        json!({ "data": [{ "index": 0, "embedding": [0.25, -0.5, 1.0] }] }),
    )
    .await;

    let embedding = embedder_for(&upstream).embed("hello world").await.unwrap();

    assert_eq!(embedding.values, vec![0.25, -0.5, 1.0]);

    let requests = upstream.requests();
    assert_eq!(requests[0].authorization.as_deref(), Some("Bearer sk-test"));
    assert_eq!(
        requests[0].body,
        json!({ "input": "hello world", "model": "text-embedding-test" })
    );
}

#[tokio::test]
async fn given_empty_data_when_embedding_then_returns_invalid_response() {
    let upstream =
        FakeUpstream::start("/v1/embeddings", StatusCode::OK, json!({ "data": [] })).await;

    let error = embedder_for(&upstream).embed("hello").await.unwrap_err();

    assert!(matches!(error, EmbedderError::InvalidResponse(_)));
}

#[tokio::test]
async fn given_zero_length_vector_when_embedding_then_returns_invalid_response() {
    let upstream = FakeUpstream::start(
        "/v1/embeddings",
        StatusCode::OK,
        json!({ "data": [{ "embedding": [] }] }),
    )
    .await;

    let error = embedder_for(&upstream).embed("hello").await.unwrap_err();

    assert!(matches!(error, EmbedderError::InvalidResponse(_)));
}

#[tokio::test]
async fn given_out_of_range_component_when_embedding_then_returns_invalid_response() {
    let upstream = FakeUpstream::start(
        "/v1/embeddings",
        StatusCode::OK,
        json!({ "data": [{ "embedding": [0.5, 1e39, -0.25] }] }),
    )
    .await;

    let error = embedder_for(&upstream).embed("hello").await.unwrap_err();

    assert!(matches!(error, EmbedderError::InvalidResponse(ref m) if m.contains("non-finite")));
}

#[tokio::test]
async fn given_rejected_key_when_embedding_then_reports_status() {
    let upstream = FakeUpstream::start(
        "/v1/embeddings",
        StatusCode::UNAUTHORIZED,
        json!({ "error": { "message": "Incorrect API key provided" } }),
    )
    .await;

    let error = embedder_for(&upstream).embed("hello").await.unwrap_err();

    assert!(matches!(error, EmbedderError::ApiRequestFailed(ref m) if m.contains("401")));
}

#[tokio::test]
async fn given_rate_limit_when_embedding_then_returns_rate_limited() {
    let upstream = FakeUpstream::start(
        "/v1/embeddings",
        StatusCode::TOO_MANY_REQUESTS,
        json!({}),
    )
    .await;

    let error = embedder_for(&upstream).embed("hello").await.unwrap_err();

    assert!(matches!(error, EmbedderError::RateLimited));
}
