//! HTTP reachability probe.

use std::fmt;

use log::debug;
use reqwest::{Client, Url};

use crate::config::UrlCheckConfig;
use crate::errors::ProbeFailure;

/// Output written for any URL that could not be loaded.
pub const FAILURE_SENTINEL: &str = "Failed to load page";

/// Outcome of probing one URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlStatus {
    /// Final status code of a successful (2xx/3xx) response.
    Reachable(u16),
    Failed(ProbeFailure),
}

impl UrlStatus {
    pub fn is_reachable(&self) -> bool {
        matches!(self, UrlStatus::Reachable(_))
    }

    /// True if a request went out on the network for this probe.
    pub fn request_issued(&self) -> bool {
        match self {
            UrlStatus::Reachable(_) => true,
            UrlStatus::Failed(failure) => failure.request_issued(),
        }
    }
}

impl fmt::Display for UrlStatus {
    /// Renders the status code, or the failure sentinel.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UrlStatus::Reachable(code) => write!(f, "{}", code),
            UrlStatus::Failed(_) => f.write_str(FAILURE_SENTINEL),
        }
    }
}

/// Issues one HTTP request per URL and classifies the result.
///
/// Redirects are followed; the status of the final response is reported.
pub struct UrlChecker {
    client: Client,
    config: UrlCheckConfig,
}

impl UrlChecker {
    pub fn new(config: UrlCheckConfig) -> Self {
        let mut builder = Client::builder()
            .timeout(config.request_timeout)
            .user_agent(config.user_agent.clone());
        if !config.system_proxy {
            builder = builder.no_proxy();
        }
        // A fallback client has no timeout; try_check sets one per request.
        let client = builder.build().unwrap_or_else(|_| Client::new());

        Self { client, config }
    }

    pub fn config(&self) -> &UrlCheckConfig {
        &self.config
    }

    /// Parses `raw` into an http(s) URL.
    pub fn parse_url(raw: &str) -> Result<Url, ProbeFailure> {
        let url = Url::parse(raw.trim()).map_err(|e| {
            debug!("Rejecting URL '{}': {}", raw, e);
            ProbeFailure::InvalidUrl(raw.to_string())
        })?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(ProbeFailure::UnsupportedScheme(other.to_string())),
        }
    }

    /// Probes `raw` and returns its status. Never fails.
    pub async fn check(&self, raw: &str) -> UrlStatus {
        match self.try_check(raw).await {
            Ok(code) => UrlStatus::Reachable(code),
            Err(failure) => UrlStatus::Failed(failure),
        }
    }

    async fn try_check(&self, raw: &str) -> Result<u16, ProbeFailure> {
        let url = Self::parse_url(raw)?;

        debug!("Probing {} {}", self.config.method.as_reqwest(), url);
        let response = self
            .client
            .request(self.config.method.as_reqwest(), url)
            .timeout(self.config.request_timeout)
            .send()
            .await?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            return Err(ProbeFailure::HttpStatus(status.as_u16()));
        }
        Ok(status.as_u16())
    }
}

impl Default for UrlChecker {
    fn default() -> Self {
        Self::new(UrlCheckConfig::default())
    }
}
