use axum::Router;
use axum::body::Body;
use axum::extract::Extension;
use axum::http::{Request, StatusCode};
use axum::middleware;
use axum::routing::get;
use docchat::infrastructure::observability::{
    REQUEST_ID_HEADER, RequestId, request_id_middleware,
};
use tower::ServiceExt;

fn echo_router() -> Router {
    Router::new()
        .route(
            "/",
            get(|Extension(RequestId(id)): Extension<RequestId>| async move { id }),
        )
        .layer(middleware::from_fn(request_id_middleware))
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn given_caller_request_id_when_handling_then_handler_and_response_share_it() {
    let request = Request::builder()
        .uri("/")
        .header(REQUEST_ID_HEADER, "trace-42")
        .body(Body::empty())
        .unwrap();

    let response = echo_router().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[REQUEST_ID_HEADER], "trace-42");
    assert_eq!(body_text(response).await, "trace-42");
}

#[tokio::test]
async fn given_no_request_id_when_handling_then_generates_uuid() {
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();

    let response = echo_router().oneshot(request).await.unwrap();

    let header = response.headers()[REQUEST_ID_HEADER]
        .to_str()
        .unwrap()
        .to_string();
    assert!(uuid::Uuid::parse_str(&header).is_ok());
    assert_eq!(body_text(response).await, header);
}
