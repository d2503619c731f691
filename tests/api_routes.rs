//! Integration tests for the HTTP surface

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
};
use tower::ServiceExt;

use chronograph::{
    api::{
        create_router,
        handlers::{display_handler, status_handler},
    },
    state::AppState,
};

fn new_state() -> Arc<AppState> {
    Arc::new(AppState::new(20780, "127.0.0.1".to_string()))
}

#[tokio::test]
async fn routes_respond() {
    let router = create_router(new_state());

    for (method, path) in [
        ("POST", "/toggle"),
        ("POST", "/reset"),
        ("GET", "/display"),
        ("GET", "/status"),
        ("GET", "/health"),
    ] {
        let request = Request::builder()
            .method(method)
            .uri(path)
            .body(Body::empty())
            .unwrap();
        let response = router.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "{} {}", method, path);
    }
}

#[tokio::test]
async fn signal_routes_reject_wrong_method() {
    let router = create_router(new_state());

    let request = Request::builder()
        .method("GET")
        .uri("/toggle")
        .body(Body::empty())
        .unwrap();
    let response = router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

    let request = Request::builder()
        .method("GET")
        .uri("/nonexistent")
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn display_returns_the_current_reading() {
    let state = new_state();

    let text = display_handler(State(Arc::clone(&state))).await.unwrap();
    assert_eq!(text, "00:00:00");

    state.primary_signal().unwrap();
    for _ in 0..75 {
        state.deliver_tick().unwrap();
    }

    let text = display_handler(State(state)).await.unwrap();
    assert_eq!(text, "00:01:15");
}

#[tokio::test]
async fn status_reports_snapshot_and_last_signal() {
    let state = new_state();
    state.primary_signal().unwrap();
    state.deliver_tick().unwrap();

    let response = status_handler(State(Arc::clone(&state))).await.unwrap();
    let status = response.0;

    assert!(status.stopwatch.running);
    assert_eq!(status.stopwatch.display, "00:00:01");
    assert_eq!(status.stopwatch.button_label, "STOP");
    assert_eq!(status.port, 20780);
    assert_eq!(status.host, "127.0.0.1");
    assert_eq!(status.last_signal.as_deref(), Some("toggle"));
    assert!(status.last_signal_time.is_some());
}
