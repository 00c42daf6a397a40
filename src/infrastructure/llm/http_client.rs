use std::time::Duration;

use reqwest::Client;

pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Shared HTTP client for upstream model calls. Every request is bounded by `timeout`.
pub fn build_http_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder().timeout(timeout).build()
}
