use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
};

use crate::services::metrics::{get_metrics, CONTENT_TYPE};

/// Serves the static exposition body. Takes no extractors, so the request
/// cannot influence the response.
pub async fn metrics() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, CONTENT_TYPE)],
        get_metrics(),
    )
}
