//! HTTP plumbing for the generative-text service call.
//!
//! This module holds the process-global HTTP client and a single-shot JSON
//! POST helper. The recommendation path performs exactly one request per
//! invocation with no retry or backoff, so unlike a scraping client there is
//! no rate limiter and no retry loop here; whatever timeout the client is
//! configured with is the only one the call sees.

use once_cell::sync::Lazy;
use reqwest::{Client, header::HeaderMap};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Global HTTP client instance with optimized configuration.
///
/// The client is configured with:
/// - 30-second timeout
/// - Connection pooling (10 idle connections per host)
/// - Compression support (gzip, brotli)
/// - Custom User-Agent header
///
/// It is created lazily on first use and reused across all HTTP operations.
static CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .user_agent("OneStop/0.1.0")
        .pool_max_idle_per_host(10)
        .gzip(true)
        .brotli(true)
        .build()
        .expect("Failed to build HTTP client")
});

/// Performs a single JSON POST and deserializes the response body.
///
/// Non-success statuses are mapped to [`Error::Model`](crate::Error::Model)
/// with the HTTP status in the message; transport failures surface as
/// [`Error::Network`](crate::Error::Network).
///
/// # Examples
///
/// ```rust,no_run
/// use serde::{Deserialize, Serialize};
/// use reqwest::header::HeaderMap;
///
/// #[derive(Serialize)]
/// struct Request { text: String }
///
/// #[derive(Deserialize)]
/// struct Reply { text: String }
///
/// # async fn example() -> onestop::Result<()> {
/// let reply: Reply = onestop::net::post_json(
///     "example-model",
///     "https://api.example.com/generate",
///     HeaderMap::new(),
///     &Request { text: "hello".to_string() },
/// )
/// .await?;
/// # Ok(())
/// # }
/// ```
pub async fn post_json<B, T>(
    model: &str,
    url: &str,
    headers: HeaderMap,
    body: &B,
) -> crate::Result<T>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    tracing::debug!(model, url, "issuing generation request");

    let response = CLIENT.post(url).headers(headers).json(body).send().await?;

    if !response.status().is_success() {
        return Err(crate::Error::model(
            model,
            format!("HTTP {}", response.status()),
        ));
    }

    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(Into::into)
}
