//! Shared response envelope types for API handlers.
//!
//! The fixture endpoints answer with fixed envelopes whose field names and
//! contents are part of the wire contract. Use these structs instead of
//! ad-hoc `serde_json::json!` to get compile-time type safety and
//! consistent serialization.

use serde::Serialize;

/// A bare `{ "message": ... }` envelope (404 fallback, 405 on `/upload`).
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Receipt returned by a successful `POST /upload`.
///
/// `received_data` carries the request body back verbatim; it serializes
/// as `receivedData` to preserve the original wire format.
#[derive(Debug, Serialize)]
pub struct UploadReceipt {
    pub message: &'static str,
    #[serde(rename = "receivedData")]
    pub received_data: String,
}
