use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{Embedder, EmbedderError};
use crate::domain::Embedding;

pub struct OpenAiEmbedder {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

#[derive(Serialize)]
struct EmbeddingRequest<'a> {
    input: &'a str,
    model: &'a str,
}

#[derive(Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

impl OpenAiEmbedder {
    pub fn new(client: Client, base_url: &str, api_key: String, model: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            model,
        }
    }
}

#[async_trait]
impl Embedder for OpenAiEmbedder {
    async fn embed(&self, text: &str) -> Result<Embedding, EmbedderError> {
        let request_body = EmbeddingRequest {
            input: text,
            model: &self.model,
        };

        let response = self
            .client
            .post(format!("{}/embeddings", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request_body)
            .send()
            .await
            .map_err(|e| EmbedderError::ApiRequestFailed(e.to_string()))?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(EmbedderError::RateLimited);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(EmbedderError::ApiRequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let embedding_response: EmbeddingResponse = response
            .json()
            .await
            .map_err(|e| EmbedderError::InvalidResponse(e.to_string()))?;

        embedding_response
            .data
            .into_iter()
            .next()
            .map(|d| Embedding::new(d.embedding))
            .filter(|e| e.dimensions() > 0)
            .ok_or_else(|| EmbedderError::InvalidResponse("empty response".to_string()))
            .and_then(|e| {
                if e.values.iter().all(|v| v.is_finite()) {
                    Ok(e)
                } else {
                    Err(EmbedderError::InvalidResponse(
                        "embedding has non-finite components".to_string(),
                    ))
                }
            })
    }
}
