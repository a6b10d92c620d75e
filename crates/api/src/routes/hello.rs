//! The hello fixture: a fixed plain-text body with a custom header.

use axum::response::IntoResponse;
use axum::{routing::get, Router};

use crate::state::AppState;

/// Body returned by the hello fixture.
const HELLO_BODY: &str = "Hello World\n";

/// GET / -- plain-text hello carrying the fixture's custom header.
async fn hello() -> impl IntoResponse {
    (
        [("content-type", "text/plain"), ("custom", "Bearer-Token")],
        HELLO_BODY,
    )
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(hello))
}
