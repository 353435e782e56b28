use crate::config::AppConfig;
use crate::handlers::health::health_check;
use axum::{routing::get, Router};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    services::{ServeDir, ServeFile},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

/// Create application router: health check plus the frontend bundle.
///
/// Paths that match no file get `index.html`, so client-side routes such as
/// `/customers` survive a reload.
pub fn create_router(config: &AppConfig) -> Router {
    let frontend = ServeDir::new(&config.frontend_dist)
        .append_index_html_on_directories(true)
        .fallback(ServeFile::new(config.index_html()));

    Router::new()
        .route("/health", get(health_check))
        .fallback_service(frontend)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(30))),
        )
}
