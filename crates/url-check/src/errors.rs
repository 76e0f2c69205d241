//! Probe failure classification.
//!
//! None of these propagate out of the `url_status` function: each one is
//! rendered as the failure sentinel and logged as a diagnostic line.

use thiserror::Error;

/// Why a URL could not be loaded.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProbeFailure {
    /// The input is not an absolute URL.
    #[error("Invalid URL '{0}'")]
    InvalidUrl(String),

    /// Only http and https are probed.
    #[error("Unsupported URL scheme '{0}'")]
    UnsupportedScheme(String),

    /// The request did not complete within the configured timeout.
    #[error("Request timed out")]
    Timeout,

    /// The connection could not be established.
    #[error("Connection failed: {0}")]
    Connect(String),

    /// The server answered with a 4xx or 5xx status.
    #[error("HTTP error status {0}")]
    HttpStatus(u16),

    /// Any other request-level failure.
    #[error("Request failed: {0}")]
    Request(String),
}

impl ProbeFailure {
    /// Returns true if the failure happened after a request was sent.
    ///
    /// Used to decide whether the post-request pause applies.
    pub fn request_issued(&self) -> bool {
        !matches!(self, Self::InvalidUrl(_) | Self::UnsupportedScheme(_))
    }
}

impl From<reqwest::Error> for ProbeFailure {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ProbeFailure::Timeout
        } else if e.is_connect() {
            ProbeFailure::Connect(e.to_string())
        } else if let Some(status) = e.status() {
            ProbeFailure::HttpStatus(status.as_u16())
        } else {
            ProbeFailure::Request(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_failures_issue_no_request() {
        assert!(!ProbeFailure::InvalidUrl("x".to_string()).request_issued());
        assert!(!ProbeFailure::UnsupportedScheme("ftp".to_string()).request_issued());
    }

    #[test]
    fn test_network_failures_issue_request() {
        assert!(ProbeFailure::Timeout.request_issued());
        assert!(ProbeFailure::HttpStatus(404).request_issued());
        assert!(ProbeFailure::Connect("refused".to_string()).request_issued());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            ProbeFailure::HttpStatus(503).to_string(),
            "HTTP error status 503"
        );
        assert_eq!(
            ProbeFailure::UnsupportedScheme("ftp".to_string()).to_string(),
            "Unsupported URL scheme 'ftp'"
        );
    }
}
