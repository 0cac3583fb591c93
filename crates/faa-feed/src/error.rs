//! Error types for feed retrieval and parsing.

use thiserror::Error;

/// Errors that can occur while fetching or parsing the NAS status feed.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FeedError {
    /// Network request failed (connect, timeout, body read).
    #[error("network error: {0}")]
    Network(String),

    /// Server answered with a non-success status.
    #[error("unexpected HTTP status {status} from {url}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Requested URL.
        url: String,
    },

    /// Feed text is not well-formed XML.
    #[error("XML parse error: {0}")]
    Xml(String),
}

impl FeedError {
    /// Returns a short message suitable for the diagnostic stream.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::Network(_) => "Could not reach the FAA NAS status service.",
            Self::Status { .. } => "The FAA NAS status service returned an error.",
            Self::Xml(_) => "The FAA NAS status feed could not be read.",
        }
    }

    /// Returns whether a later run could plausibly succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) => true,
            Self::Status { status, .. } => *status >= 500 || *status == 429,
            Self::Xml(_) => false,
        }
    }
}

impl From<reqwest::Error> for FeedError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => Self::Status {
                status: status.as_u16(),
                url: err.url().map(ToString::to_string).unwrap_or_default(),
            },
            None => Self::Network(err.to_string()),
        }
    }
}

impl From<quick_xml::Error> for FeedError {
    fn from(err: quick_xml::Error) -> Self {
        Self::Xml(err.to_string())
    }
}

/// Result type alias for feed operations.
pub type Result<T> = std::result::Result<T, FeedError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_errors_are_retryable() {
        let err = FeedError::Status {
            status: 503,
            url: "https://example.invalid".to_string(),
        };
        assert!(err.is_retryable());
        assert_eq!(
            err.to_string(),
            "unexpected HTTP status 503 from https://example.invalid"
        );
    }

    #[test]
    fn client_errors_and_bad_xml_are_not_retryable() {
        let err = FeedError::Status {
            status: 404,
            url: String::new(),
        };
        assert!(!err.is_retryable());
        assert!(!FeedError::Xml("no root".to_string()).is_retryable());
    }
}
