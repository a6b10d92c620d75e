//! The chunked streaming fixture.

use std::convert::Infallible;

use axum::body::Body;
use axum::http::{header, StatusCode};
use axum::response::Response;
use axum::{routing::get, Router};
use futures::stream;

use crate::state::AppState;

/// Number of chunks emitted by the stream fixture.
const CHUNK_COUNT: usize = 3;

/// GET /test -- stream a fixed number of text chunks.
///
/// Each chunk is written as its own body frame so clients observe the
/// chunked transfer; the stream closes after the last chunk.
async fn stream_chunks() -> Response {
    let chunks =
        (0..CHUNK_COUNT).map(|i| Ok::<_, Infallible>(format!("This is chunk number {i}")));

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Body::from_stream(stream::iter(chunks)))
        .unwrap()
}

pub fn router() -> Router<AppState> {
    Router::new().route("/test", get(stream_chunks))
}
