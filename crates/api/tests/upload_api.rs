//! Integration tests for the upload echo endpoint.

mod common;

use axum::http::{Method, StatusCode};
use common::{body_json, send};

// ---------------------------------------------------------------------------
// Test: POST /upload echoes the body back inside the receipt envelope
// ---------------------------------------------------------------------------

#[tokio::test]
async fn post_upload_echoes_the_exact_body() {
    let app = common::build_test_app();
    let payload = r#"{"title":"Rust in Action","year":2021}"#;

    let response = send(app, Method::POST, "/upload", "application/json", payload).await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Data received successfully!");
    assert_eq!(json["receivedData"], payload);
}

// ---------------------------------------------------------------------------
// Test: an empty POST body is echoed as an empty string
// ---------------------------------------------------------------------------

#[tokio::test]
async fn post_upload_with_empty_body_echoes_empty_string() {
    let app = common::build_test_app();

    let response = send(app, Method::POST, "/upload", "application/json", "").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["receivedData"], "");
}

// ---------------------------------------------------------------------------
// Test: the body is echoed verbatim, not parsed as JSON
// ---------------------------------------------------------------------------

#[tokio::test]
async fn post_upload_echoes_non_json_text_verbatim() {
    let app = common::build_test_app();
    let payload = "not json at all; just text with \"quotes\" and \n newlines";

    let response = send(app, Method::POST, "/upload", "text/plain", payload).await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["receivedData"], payload);
}

// ---------------------------------------------------------------------------
// Test: non-POST methods return 405 with the fixed envelope
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_upload_returns_405_with_message() {
    let app = common::build_test_app();

    let response = common::get(app, "/upload").await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

    let json = body_json(response).await;
    assert_eq!(
        json["message"],
        "Only POST requests are allowed on this endpoint."
    );
}

#[tokio::test]
async fn put_upload_returns_405_with_message() {
    let app = common::build_test_app();

    let response = send(app, Method::PUT, "/upload", "application/json", "{}").await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

    let json = body_json(response).await;
    assert_eq!(
        json["message"],
        "Only POST requests are allowed on this endpoint."
    );
}

// ---------------------------------------------------------------------------
// Test: a non-UTF-8 body is rejected with 400
// ---------------------------------------------------------------------------

#[tokio::test]
async fn post_upload_with_invalid_utf8_returns_400() {
    let app = common::build_test_app();
    let payload: Vec<u8> = vec![0xff, 0xfe, 0xfd];

    let response = send(
        app,
        Method::POST,
        "/upload",
        "application/octet-stream",
        payload,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}
