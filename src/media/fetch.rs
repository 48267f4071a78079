// SPDX-License-Identifier: MPL-2.0
//! HTTP fetching of encoded image bytes.

use crate::error::{Error, Result};
use std::time::Duration;

/// Upper bound for a single image request.
pub const FETCH_TIMEOUT_SECS: u64 = 20;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Builds the shared HTTP client.
pub fn http_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
        .build()
        .map_err(Error::from)
}

/// Downloads the image at `url` and returns its encoded bytes.
///
/// Non-success HTTP statuses and empty bodies are reported as
/// [`Error::Network`].
pub async fn fetch_image(client: reqwest::Client, url: String) -> Result<Vec<u8>> {
    tracing::debug!(%url, "fetching image");
    let response = client.get(&url).send().await?.error_for_status()?;
    let bytes = response.bytes().await?;
    if bytes.is_empty() {
        return Err(Error::Network(format!("empty response body from {url}")));
    }
    Ok(bytes.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_builds_with_defaults() {
        assert!(http_client().is_ok());
    }

    #[test]
    fn user_agent_names_the_crate() {
        assert!(USER_AGENT.starts_with("iced_gallery/"));
    }

    #[tokio::test]
    async fn unreachable_host_is_a_network_error() {
        let client = http_client().expect("client");
        // Port 9 (discard) on localhost is closed on test machines.
        let result = fetch_image(client, "http://127.0.0.1:9/id/1/2/3".into()).await;
        assert!(matches!(result, Err(Error::Network(_))));
    }
}
