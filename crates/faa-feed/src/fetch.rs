//! NAS status feed retrieval.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{CONTENT_TYPE, USER_AGENT};
use tracing::{debug, info, warn};

use crate::error::{FeedError, Result};

/// Public FAA NAS airport status endpoint.
pub const NAS_STATUS_URL: &str = "https://nasstatus.faa.gov/api/airport-status-information";

/// HTTP request timeout.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// User agent string for feed requests.
const USER_AGENT_VALUE: &str = concat!("faa-bulletin/", env!("CARGO_PKG_VERSION"));

/// Anything that can produce the raw feed text.
pub trait FeedSource {
    /// Fetch the feed body.
    ///
    /// # Errors
    ///
    /// Returns a [`FeedError`] when the feed cannot be retrieved.
    fn fetch(&self) -> Result<String>;
}

/// Blocking HTTP client for the NAS status feed.
pub struct HttpFeedClient {
    /// HTTP client.
    client: Client,
    /// Feed URL.
    url: String,
}

impl HttpFeedClient {
    /// Create a client for `url` with the given request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Network`] if the HTTP client cannot be built.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// The URL this client fetches.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl FeedSource for HttpFeedClient {
    fn fetch(&self) -> Result<String> {
        info!(url = %self.url, "fetching NAS status feed");

        let response = self
            .client
            .get(self.url.as_str())
            .header(USER_AGENT, USER_AGENT_VALUE)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let body = response.text()?;

        if !looks_like_xml(&content_type, &body) {
            warn!(
                content_type = %content_type,
                "response did not look like XML; continuing anyway"
            );
        }
        debug!(bytes = body.len(), "feed body received");
        Ok(body)
    }
}

/// True when the content type mentions XML or the body starts with markup.
pub fn looks_like_xml(content_type: &str, body: &str) -> bool {
    content_type.contains("xml") || body.trim_start().starts_with('<')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xml_detection() {
        assert!(looks_like_xml("application/xml; charset=utf-8", ""));
        assert!(looks_like_xml("text/plain", "  <AIRPORT_STATUS_INFORMATION/>"));
        assert!(!looks_like_xml("application/json", "{\"ok\":true}"));
    }

    #[test]
    fn test_client_creation() {
        let client = HttpFeedClient::new(NAS_STATUS_URL, REQUEST_TIMEOUT).unwrap();
        assert_eq!(client.url(), NAS_STATUS_URL);
    }
}
