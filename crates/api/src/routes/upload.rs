//! The upload echo fixture.

use axum::body::Bytes;
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use axum::{Json, Router};

use crate::error::{AppError, AppResult};
use crate::response::{MessageResponse, UploadReceipt};
use crate::state::AppState;

const RECEIVED: &str = "Data received successfully!";
const POST_ONLY: &str = "Only POST requests are allowed on this endpoint.";

/// /upload -- echo a POSTed body back inside a JSON envelope.
///
/// Any method other than POST gets a 405 with a fixed JSON message, so
/// the route is registered with `any()` and dispatches on the method
/// itself rather than relying on axum's default empty 405.
async fn upload(method: Method, body: Bytes) -> AppResult<Response> {
    if method != Method::POST {
        return Ok((
            StatusCode::METHOD_NOT_ALLOWED,
            Json(MessageResponse { message: POST_ONLY }),
        )
            .into_response());
    }

    let received = String::from_utf8(body.to_vec())
        .map_err(|_| AppError::BadRequest("Request body must be valid UTF-8".into()))?;

    tracing::info!(bytes = received.len(), "Received upload data");
    tracing::debug!(body = %received, "Upload payload");

    Ok(Json(UploadReceipt {
        message: RECEIVED,
        received_data: received,
    })
    .into_response())
}

pub fn router() -> Router<AppState> {
    Router::new().route("/upload", any(upload))
}
