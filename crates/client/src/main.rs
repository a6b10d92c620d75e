//! `bookstall-client` -- fire-and-forget requests against the mock API.
//!
//! Issues a single request per invocation and logs the response; there
//! is no retry or connection reuse across runs.
//!
//! # Usage
//!
//! ```text
//! bookstall-client get [PATH]       GET a path (default: /test), log each chunk
//! bookstall-client upload [BODY]    POST a body to /upload, log status and headers
//! bookstall-client flip [N]         flip the pocket coins N times (default: 1)
//! ```
//!
//! # Environment variables
//!
//! | Variable   | Required | Default                 | Description          |
//! |------------|----------|-------------------------|----------------------|
//! | `BASE_URL` | no       | `http://127.0.0.1:8000` | Server base HTTP URL |

use bookstall_client::api::ApiClient;
use bookstall_core::coin::Coin;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Default server base URL, matching the server's default bind address.
const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bookstall_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let base_url = std::env::var("BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

    let mut args = std::env::args().skip(1);
    let command = args.next().unwrap_or_else(|| {
        tracing::error!("Usage: bookstall-client <get [PATH] | upload [BODY] | flip [N]>");
        std::process::exit(1);
    });

    let client = ApiClient::new(base_url);

    let result = match command.as_str() {
        "get" => {
            let path = args.next().unwrap_or_else(|| "/test".to_string());
            client.fetch_chunks(&path).await.map(|body| {
                tracing::info!(bytes = body.len(), "Fetched body");
            })
        }
        "upload" => {
            let payload = args.next().unwrap_or_default();
            client.upload(&payload).await.map(|receipt| {
                tracing::info!(
                    message = %receipt.message,
                    received = %receipt.received_data,
                    "Upload acknowledged",
                );
            })
        }
        "flip" => {
            let count: u32 = args.next().and_then(|v| v.parse().ok()).unwrap_or(1);
            flip_coins(count);
            Ok(())
        }
        other => {
            tracing::error!(command = %other, "Unknown command");
            tracing::error!("Usage: bookstall-client <get [PATH] | upload [BODY] | flip [N]>");
            std::process::exit(1);
        }
    };

    if let Err(e) = result {
        tracing::error!(error = %e, "Request failed");
        std::process::exit(1);
    }
}

/// Flip each pocket coin `count` times, logging the final face.
fn flip_coins(count: u32) {
    let mut coins = [Coin::quarter(), Coin::dime(), Coin::nickel()];

    for coin in &mut coins {
        for _ in 0..count {
            coin.flip();
        }
        tracing::info!(
            value = coin.value,
            currency = %coin.currency,
            year = coin.year,
            face = coin.face_up.as_str(),
            "Coin settled",
        );
    }
}
