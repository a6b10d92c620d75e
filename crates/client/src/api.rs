//! REST client for the Bookstall mock API endpoints.
//!
//! Wraps the server's HTTP surface (streamed GETs, the upload echo)
//! using [`reqwest`].

use futures::StreamExt;
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;

/// HTTP client for a single Bookstall API server.
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

/// Receipt returned by the server's `POST /upload` endpoint.
#[derive(Debug, Deserialize)]
pub struct UploadReceipt {
    /// Human-readable acknowledgement.
    pub message: String,
    /// The uploaded body, echoed back verbatim.
    #[serde(rename = "receivedData")]
    pub received_data: String,
}

/// Errors from the API client layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiClientError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server returned a non-2xx status code.
    #[error("API error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl ApiClient {
    /// Create a new client for a server instance.
    ///
    /// * `base_url` - Base HTTP URL, e.g. `http://127.0.0.1:8000`.
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling across multiple instances).
    pub fn with_client(client: reqwest::Client, base_url: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Base HTTP URL this client targets.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET a path and consume the body chunk by chunk.
    ///
    /// Logs the status line, then each body chunk as it arrives, then the
    /// end of the response. Returns the concatenated body text. Chunks
    /// are logged even for non-2xx responses; the error is raised after
    /// the body has been drained.
    pub async fn fetch_chunks(&self, path: &str) -> Result<String, ApiClientError> {
        let response = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await?;

        let status = response.status();
        tracing::info!(status = status.as_u16(), path, "Response started");

        let mut stream = response.bytes_stream();
        let mut body = String::new();

        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            let text = String::from_utf8_lossy(&chunk);
            tracing::info!(bytes = chunk.len(), chunk = %text, "Received chunk");
            body.push_str(&text);
        }

        tracing::info!(path, "Response ended");

        if !status.is_success() {
            return Err(ApiClientError::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }

    /// POST a body to `/upload` and return the parsed receipt.
    ///
    /// Sends the payload with `Content-Type: application/json` and logs
    /// the response status and headers.
    pub async fn upload(&self, payload: &str) -> Result<UploadReceipt, ApiClientError> {
        let response = self
            .client
            .post(format!("{}/upload", self.base_url))
            .header(CONTENT_TYPE, "application/json")
            .body(payload.to_string())
            .send()
            .await?;

        tracing::info!(
            status = response.status().as_u16(),
            headers = ?response.headers(),
            "Upload response",
        );

        Self::parse_response(response).await
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or an [`ApiClientError::ApiError`]
    /// containing the status and body text on failure.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ApiClientError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ApiClientError::ApiError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ApiClientError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}
