use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;

use docchat::application::ports::{Embedder, TextSplitter};
use docchat::application::services::{ChatService, IngestionService};
use docchat::infrastructure::llm::{OpenAiClient, OpenAiEmbedder, build_http_client};
use docchat::infrastructure::observability::{TracingConfig, init_tracing};
use docchat::infrastructure::persistence::InMemoryVectorStore;
use docchat::infrastructure::text_processing::{CompositeFileLoader, WordWindowSplitter};
use docchat::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(&TracingConfig::new(
        environment.as_str(),
        settings.logging.level.clone(),
        settings.logging.enable_json,
    ));

    if settings.llm.api_key.is_empty() {
        tracing::warn!("No model provider API key configured; upstream calls will be rejected");
    }

    let http_client = build_http_client(Duration::from_secs(settings.llm.request_timeout_secs))
        .context("Failed to build HTTP client")?;

    let embedder: Arc<dyn Embedder> = Arc::new(OpenAiEmbedder::new(
        http_client.clone(),
        &settings.embeddings.base_url,
        settings.llm.api_key.clone(),
        settings.embeddings.model.clone(),
    ));
    let llm_client = Arc::new(OpenAiClient::new(
        http_client,
        &settings.llm.base_url,
        settings.llm.api_key.clone(),
        settings.llm.chat_model.clone(),
        settings.llm.max_tokens,
        settings.llm.temperature,
    ));
    let text_splitter: Arc<dyn TextSplitter> = Arc::new(
        WordWindowSplitter::new(settings.chunking.chunk_size).context("Invalid chunk size")?,
    );
    let file_loader = Arc::new(CompositeFileLoader::with_default_adapters());
    let vector_store = Arc::new(InMemoryVectorStore::new());

    let ingestion_service = Arc::new(IngestionService::new(
        file_loader,
        Arc::clone(&embedder),
        Arc::clone(&vector_store),
        text_splitter,
    ));

    let chat_service = Arc::new(ChatService::new(
        embedder,
        llm_client,
        vector_store,
        settings.retrieval.top_k,
        settings.retrieval.system_prompt.clone(),
    ));

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server address")?;

    let state = AppState {
        ingestion_service,
        chat_service,
        settings,
    };

    let router = create_router(state);

    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
