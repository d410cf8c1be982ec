//! I/O-bound workload: repeated HTTP GET requests
//!
//! Every failure on the request path (transport, HTTP status, body decoding)
//! is folded into a [`FetchResult`] with status [`FetchResult::ERROR_STATUS`]
//! rather than returned as an error. Nothing is retried.

use crate::error::Result;
use crate::parallel::{parallel_map, ParallelConfig};
use reqwest::blocking::Client;
use std::fmt;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Address the benchmark targets unless overridden
pub const DEFAULT_URL: &str = "http://localhost:5001";

/// Outcome of one request: HTTP status and payload, or the error sentinel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResult {
    /// HTTP status code, or `-1` on failure
    pub status: i32,
    /// Server `message` field, or a description of the failure
    pub message: String,
}

impl FetchResult {
    /// Status reported for every failed request
    pub const ERROR_STATUS: i32 = -1;

    pub fn ok(status: u16, message: impl Into<String>) -> Self {
        Self {
            status: i32::from(status),
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: Self::ERROR_STATUS,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.status == Self::ERROR_STATUS
    }
}

impl fmt::Display for FetchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.status, self.message)
    }
}

/// Blocking HTTP client shared by all workers of a batch
///
/// Proxies are bypassed; the target is a local endpoint. There is no
/// request timeout: a server that never answers blocks the calling thread.
pub fn build_client() -> Result<Client> {
    Ok(Client::builder()
        .no_proxy()
        .timeout(None::<Duration>)
        .build()?)
}

/// Issue one GET to `url` and extract the `message` field of its JSON body
pub fn fetch_slow_api(client: &Client, url: &str) -> FetchResult {
    info!("Starting request...");

    let response = match client.get(url).send() {
        Ok(response) => response,
        Err(e) => {
            warn!("Request error: {}", e);
            return FetchResult::error(non_empty(e.to_string(), "request failed"));
        }
    };

    let response = match response.error_for_status() {
        Ok(response) => response,
        Err(e) => {
            warn!("Request error: {}", e);
            return FetchResult::error(non_empty(e.to_string(), "HTTP error status"));
        }
    };

    let status = response.status().as_u16();
    let body = match response.text() {
        Ok(body) => body,
        Err(e) => {
            warn!("Request error: {}", e);
            return FetchResult::error(non_empty(e.to_string(), "failed to read response"));
        }
    };

    let result = parse_message(status, &body);
    if result.is_error() {
        debug!("Response text: {}", body);
    } else {
        info!("Request completed: {}", result);
    }
    result
}

/// Turn a successful response body into a [`FetchResult`]
fn parse_message(status: u16, body: &str) -> FetchResult {
    let json: serde_json::Value = match serde_json::from_str(body) {
        Ok(json) => json,
        Err(e) => {
            warn!("JSON decode error: {}", e);
            return FetchResult::error(format!("Invalid JSON response: {}", e));
        }
    };

    match json.get("message") {
        Some(serde_json::Value::String(message)) => FetchResult::ok(status, message.as_str()),
        Some(other) => FetchResult::ok(status, other.to_string()),
        None => {
            warn!("Response has no message field");
            FetchResult::error("Missing 'message' field in response")
        }
    }
}

fn non_empty(message: String, fallback: &str) -> String {
    if message.is_empty() {
        fallback.to_string()
    } else {
        message
    }
}

/// Make `n` requests one after another
pub fn fetch_multiple_single(client: &Client, url: &str, n: usize) -> Vec<FetchResult> {
    (0..n).map(|_| fetch_slow_api(client, url)).collect()
}

/// Make `n` requests over a pool of `threads` workers
///
/// Results come back in submission order. `threads == 0` uses one worker
/// per CPU.
pub fn fetch_multiple_threaded(
    client: &Client,
    url: &str,
    n: usize,
    threads: usize,
) -> Result<Vec<FetchResult>> {
    let slots: Vec<usize> = (0..n).collect();
    parallel_map(
        &slots,
        |_| fetch_slow_api(client, url),
        &ParallelConfig::with_workers(threads),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_message_string() {
        let result = parse_message(200, r#"{"message": "hello"}"#);
        assert_eq!(result, FetchResult::ok(200, "hello"));
        assert!(!result.is_error());
    }

    #[test]
    fn test_parse_message_non_string() {
        let result = parse_message(200, r#"{"message": {"n": 1}}"#);
        assert_eq!(result, FetchResult::ok(200, r#"{"n":1}"#));
    }

    #[test]
    fn test_parse_message_invalid_json() {
        let result = parse_message(200, "<html>oops</html>");
        assert!(result.is_error());
        assert!(result.message.starts_with("Invalid JSON response: "));
    }

    #[test]
    fn test_parse_message_missing_field() {
        let result = parse_message(200, r#"{"msg": "hello"}"#);
        assert_eq!(result.status, -1);
        assert_eq!(result.message, "Missing 'message' field in response");
    }

    #[test]
    fn test_display() {
        assert_eq!(FetchResult::error("boom").to_string(), "(-1, boom)");
    }
}
