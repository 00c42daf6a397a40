use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use super::ApiError;
use crate::application::ports::{FileLoader, LlmClient, VectorStore};
use crate::domain::{Conversation, Message};
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub conversation: Option<Vec<Message>>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

#[tracing::instrument(skip(state, payload))]
pub async fn chat_handler<F, L, V>(
    State(state): State<AppState<F, L, V>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Response
where
    F: FileLoader + 'static,
    L: LlmClient + 'static,
    V: VectorStore + 'static,
{
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Malformed chat request");
            return ApiError::invalid_input(rejection.body_text()).into_response();
        }
    };

    let conversation = Conversation::new(request.conversation.unwrap_or_default());

    if let Some(latest) = conversation.latest() {
        tracing::debug!(
            prompt = %sanitize_prompt(&latest.content),
            messages = conversation.messages.len(),
            "Processing chat request"
        );
    }

    match state.chat_service.chat(&conversation).await {
        Ok(response) => {
            tracing::info!("Chat completion successful");
            (StatusCode::OK, Json(ChatResponse { response })).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, kind = %e.kind(), "Chat completion failed");
            ApiError::from(e).into_response()
        }
    }
}

/// Plain `OPTIONS /chat` answer for clients that probe without CORS headers.
pub async fn preflight_handler() -> StatusCode {
    StatusCode::OK
}
