use axum::http::{header, Method};
use tower_http::cors::{Any, CorsLayer};

/// Browsers on any origin may read and create answers.
pub fn answers_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_origin(Any)
}
