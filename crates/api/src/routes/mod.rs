pub mod catalog;
pub mod health;
pub mod hello;
pub mod stream;
pub mod upload;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Json, Router};

use crate::response::MessageResponse;
use crate::state::AppState;

/// Build the full route tree.
///
/// ```text
/// /            hello fixture (GET)
/// /health      service health (GET)
/// /books       fixture book list (GET)
/// /authors     fixture author list (GET)
/// /test        chunked text stream (GET)
/// /upload      body echo (POST only; other methods get 405)
/// ```
///
/// Unmatched paths fall through to [`not_found`].
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(hello::router())
        .merge(health::router())
        .merge(catalog::router())
        .merge(stream::router())
        .merge(upload::router())
        .fallback(not_found)
}

/// Fallback handler for unmatched routes.
async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(MessageResponse {
            message: "Route not found.",
        }),
    )
}
