use axum::{
    middleware::from_fn,
    routing::{any, get},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::tracing::{request_id_middleware, REQUEST_ID_HEADER};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::handlers::{app::health_check, metrics::metrics};

pub const HEALTH_PATH: &str = "/health";

/// Build the service router with the exposition body mounted on `exposition_path`.
///
/// The path must start with `/` and differ from [`HEALTH_PATH`]; `Settings`
/// validates both at load time.
pub fn build_router(exposition_path: &str) -> Router {
    Router::new()
        .route(HEALTH_PATH, get(health_check))
        .route(exposition_path, any(metrics))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        // Outermost so the span above sees the assigned request id
        .layer(from_fn(request_id_middleware))
}

pub async fn run(listener: TcpListener, app: Router) -> Result<(), AppError> {
    axum::serve(listener, app).await?;
    Ok(())
}
