use std::sync::{Arc, Mutex};

use axum::Router;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use serde_json::Value;

/// Authorization header and JSON body of one request received by a fake upstream.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub authorization: Option<String>,
    pub body: Value,
}

/// An OpenAI-compatible stand-in listening on an ephemeral local port.
pub struct FakeUpstream {
    pub base_url: String,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl FakeUpstream {
    /// Serves `path`, answering every request with `status` and `reply`.
    pub async fn start(path: &str, status: StatusCode, reply: Value) -> Self {
        let captured = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&captured);

        let router = Router::new().route(
            path,
            post(move |headers: HeaderMap, body: String| {
                let sink = Arc::clone(&sink);
                let reply = reply.clone();
                async move {
                    sink.lock().unwrap().push(CapturedRequest {
                        authorization: headers
                            .get("authorization")
                            .and_then(|v| v.to_str().ok())
                            .map(String::from),
                        body: serde_json::from_str(&body).unwrap_or(Value::Null),
                    });
                    (status, axum::Json(reply))
                }
            }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self {
            base_url: format!("http://{}/v1", address),
            captured,
        }
    }

    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.captured.lock().unwrap().clone()
    }
}

pub fn http_client() -> reqwest::Client {
    docchat::infrastructure::llm::build_http_client(std::time::Duration::from_secs(5)).unwrap()
}
