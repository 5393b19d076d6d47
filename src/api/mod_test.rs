//! Tests for router assembly and the serve loop.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use tokio::net::TcpListener;
use tower::ServiceExt;
use utoipa::OpenApi;

use crate::api::{ApiDoc, AppState, create_router, serve};
use crate::db::stub::{StubHealth, StubRepository};
use crate::usecase::Usecase;

fn state() -> AppState<Usecase<StubRepository>, StubHealth> {
    let (repo, _) = StubRepository::with_budgets(vec![]);
    AppState::new(
        Arc::new(Usecase::new(repo)),
        Arc::new(StubHealth::up()),
        Duration::from_secs(5),
    )
}

#[test]
fn openapi_documents_budgets_and_health() {
    let doc = ApiDoc::openapi();
    assert!(doc.paths.paths.contains_key("/budgets"));
    assert!(doc.paths.paths.contains_key("/health"));
}

#[tokio::test]
async fn docs_are_served() {
    let response = create_router(state())
        .oneshot(Request::builder().uri("/docs").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let response = create_router(state())
        .oneshot(
            Request::builder()
                .uri("/budgets/abc")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test(flavor = "multi_thread")]
async fn serve_returns_after_shutdown_signal() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let (tx, rx) = tokio::sync::oneshot::channel::<()>();

    let server = tokio::spawn(serve(listener, state(), async move {
        let _ = rx.await;
    }));

    tx.send(()).unwrap();
    let result = tokio::time::timeout(Duration::from_secs(5), server)
        .await
        .expect("server stops promptly")
        .unwrap();
    assert!(result.is_ok());
}
