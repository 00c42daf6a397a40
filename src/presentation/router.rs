use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::HeaderValue;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{FileLoader, LlmClient, VectorStore};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::config::CorsSettings;
use crate::presentation::handlers::{
    chat_handler, health_handler, preflight_handler, upload_handler,
};
use crate::presentation::state::AppState;

pub fn create_router<F, L, V>(state: AppState<F, L, V>) -> Router
where
    F: FileLoader + 'static,
    L: LlmClient + 'static,
    V: VectorStore + 'static,
{
    let cors = cors_layer(&state.settings.cors);
    let body_limit = DefaultBodyLimit::max(state.settings.server.max_upload_bytes);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler))
        .route("/upload", post(upload_handler::<F, L, V>))
        .route(
            "/chat",
            post(chat_handler::<F, L, V>).options(preflight_handler),
        )
        .layer(body_limit)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}

fn cors_layer(settings: &CorsSettings) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if settings.allows_any() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = settings
        .origins()
        .into_iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    layer.allow_origin(origins)
}
