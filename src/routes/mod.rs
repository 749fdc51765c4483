pub mod docs;
pub mod health;
pub mod polls;

use axum::{
    routing::{any, get},
    Router,
};

use crate::{error::Error, AppState};

pub const INDEX_PATH: &str = "/polls/";
pub const ANSWERS_PATH: &str = "/polls/api/answers/";

/// Application routes without the HTTP layers added in `main`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/api-docs/openapi.json", get(docs::openapi_json))
        .route(INDEX_PATH, any(polls::index))
        .route(
            ANSWERS_PATH,
            get(polls::list_answers)
                .post(polls::create_answer)
                .fallback(polls::method_not_allowed),
        )
        .fallback(not_found)
}

async fn not_found() -> Error {
    Error::NotFound("route".to_string())
}
