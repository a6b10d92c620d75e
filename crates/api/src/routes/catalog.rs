//! Catalog fixture endpoints.
//!
//! `/books` and `/authors` serve the fixed arrays from
//! [`bookstall_core::catalog::Catalog`]; the wire format is pinned by the
//! serde derives on the record types.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use bookstall_core::catalog::{Author, Book};

use crate::state::AppState;

/// GET /books -- the fixture book list.
async fn list_books(State(state): State<AppState>) -> Json<Vec<Book>> {
    Json(state.catalog.books().to_vec())
}

/// GET /authors -- the fixture author list.
async fn list_authors(State(state): State<AppState>) -> Json<Vec<Author>> {
    Json(state.catalog.authors().to_vec())
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/books", get(list_books))
        .route("/authors", get(list_authors))
}
