use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use exposition_service::startup::build_router;
use tower::util::ServiceExt;

#[tokio::test]
async fn health_check_works() {
    let app = build_router("/metrics");

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], b"OK");
}

#[tokio::test]
async fn unknown_path_returns_not_found() {
    let app = build_router("/metrics");

    let response = app
        .oneshot(
            Request::builder()
                .uri("/does-not-exist")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
